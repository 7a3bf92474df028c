use crate::edges::*;

use flo_mask_canvas::*;

use std::cmp::{Ordering};

///
/// Sorts a set of intercepts into left-to-right order
///
/// Intercepts at the same position are ordered by direction so that the result does not depend on the
/// order that the edges were declared in
///
#[inline]
pub fn sort_intercepts(intercepts: &mut [(EdgeInterceptDirection, f64)]) {
    intercepts.sort_by(|(dir_a, x_a), (dir_b, x_b)| {
        match x_a.partial_cmp(x_b) {
            Some(Ordering::Equal) | None    => dir_a.cmp(dir_b),
            Some(ordering)                  => ordering,
        }
    });
}

///
/// Given a sorted list of intercepts along a scanline, calls `span_fn` for each range that is inside the shape
///
pub fn spans_for_intercepts(intercepts: &[(EdgeInterceptDirection, f64)], winding_rule: WindingRule, mut span_fn: impl FnMut(f64, f64)) {
    let mut count   = 0isize;
    let mut start_x = 0.0;

    for (direction, x_pos) in intercepts.iter() {
        let was_inside = count != 0;

        count = match winding_rule {
            WindingRule::NonZero    => direction.update_count(count),
            WindingRule::EvenOdd    => EdgeInterceptDirection::Toggle.update_count(count),
        };

        let is_inside = count != 0;

        if !was_inside && is_inside {
            start_x = *x_pos;
        } else if was_inside && !is_inside {
            span_fn(start_x, *x_pos);
        }
    }
}
