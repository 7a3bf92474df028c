use super::path::*;

use flo_curves::geo::*;

use std::f64;

///
/// Returns the subpath for a rectangle
///
pub fn rect_path(x1: f64, y1: f64, x2: f64, y2: f64) -> Subpath {
    Subpath::closed(vec![
        Coord2(x1, y1),
        Coord2(x1, y2),
        Coord2(x2, y2),
        Coord2(x2, y1),
    ])
}

///
/// Returns the number of line segments used to approximate a circle of a particular radius
///
#[inline]
fn circle_segments(radius: f64) -> usize {
    let segments = (radius * 4.0).ceil();

    if segments < 8.0 {
        8
    } else if segments > 64.0 {
        64
    } else {
        segments as usize
    }
}

///
/// Returns a closed subpath approximating a circle at a particular point
///
/// The vertices of the polygon lie on the circle, always running in the same direction, so that a set of
/// these circles filled together with the non-zero winding rule will form their union.
///
pub fn circle_path(center_x: f64, center_y: f64, radius: f64) -> Subpath {
    let segments = circle_segments(radius);

    Subpath::closed((0..segments).map(|idx| {
        let angle = (idx as f64) * 2.0 * f64::consts::PI / (segments as f64);
        let (sin, cos) = angle.sin_cos();

        Coord2(center_x + cos * radius, center_y + sin * radius)
    }))
}
