use super::orientation::*;

use flo_mask_canvas::*;

use smallvec::*;

///
/// Offsets a vector so it's perpendicular to a line with the specified length
///
#[inline]
fn line_normal(from: Coord2, to: Coord2, half_width: f64) -> Option<Coord2> {
    let dx      = to.x() - from.x();
    let dy      = to.y() - from.y();
    let length  = (dx*dx + dy*dy).sqrt();

    if length > 0.0 && length.is_finite() {
        Some(Coord2(-dy / length * half_width, dx / length * half_width))
    } else {
        None
    }
}

#[inline]
fn offset(point: Coord2, by: Coord2, scale: f64) -> Coord2 {
    Coord2(point.x() + by.x()*scale, point.y() + by.y()*scale)
}

///
/// Generates the shapes that make up the outline of a stroked subpath
///
/// The stroke is returned as a set of closed subpaths that all run in the same direction: one rectangle per
/// line segment, and one join shape per vertex that joins two segments. Filling the result with the non-zero
/// winding rule produces the union of these shapes, which is the area covered by the stroke. Open subpaths
/// have butt ends.
///
pub fn stroke_outline(subpath: &Subpath, style: &StrokeStyle) -> Vec<Subpath> {
    let half_width = style.width / 2.0;
    if !(half_width > 0.0) {
        return vec![];
    }

    let segments    = subpath.segments();
    let mut shapes  = Vec::with_capacity(segments.len() * 2);

    // Normals for each segment (lines with no length have no normal and are skipped)
    let normals = segments.iter()
        .map(|(from, to)| line_normal(*from, *to, half_width))
        .collect::<SmallVec<[_; 16]>>();

    // Each line segment becomes a rectangle
    for ((from, to), normal) in segments.iter().zip(normals.iter()) {
        if let Some(normal) = normal {
            shapes.push(vec![
                offset(*from, *normal, 1.0),
                offset(*to, *normal, 1.0),
                offset(*to, *normal, -1.0),
                offset(*from, *normal, -1.0),
            ]);
        }
    }

    // Joins go where one segment meets the next
    let num_joins = if subpath.closed { segments.len() } else { segments.len().saturating_sub(1) };

    for join_idx in 0..num_joins {
        let next_idx    = (join_idx + 1) % segments.len();
        let point       = segments[join_idx].1;

        match style.join {
            LineJoin::Round => {
                shapes.push(circle_path(point.x(), point.y(), half_width).points);
            }

            LineJoin::Bevel => {
                if let (Some(prev), Some(next)) = (normals[join_idx], normals[next_idx]) {
                    // The outer side of the join is on one of the two sides, so fill the gap on both
                    shapes.push(vec![point, offset(point, prev, 1.0), offset(point, next, 1.0)]);
                    shapes.push(vec![point, offset(point, prev, -1.0), offset(point, next, -1.0)]);
                }
            }
        }
    }

    shapes.into_iter()
        .filter_map(|points| with_positive_orientation(points))
        .map(|points| Subpath::closed(points))
        .collect()
}
