use flo_mask_canvas::*;

use itertools::*;

///
/// Computes the signed area of a closed polygon (the sign indicates the direction the points run in)
///
pub fn signed_area(points: &[Coord2]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }

    let twice_area: f64 = points.iter()
        .chain(points.iter().take(1))
        .tuple_windows()
        .map(|(p1, p2)| p1.x()*p2.y() - p2.x()*p1.y())
        .sum();

    twice_area / 2.0
}

///
/// Returns the points of a polygon so that they have a positive signed area, or None if the polygon has no area
///
pub fn with_positive_orientation(mut points: Vec<Coord2>) -> Option<Vec<Coord2>> {
    let area = signed_area(&points);

    if area > 0.0 {
        Some(points)
    } else if area < 0.0 {
        points.reverse();
        Some(points)
    } else {
        None
    }
}
