use super::scanline_coverage::*;
use super::scanline_intercept::*;

use crate::edges::*;

use flo_mask_canvas::*;

///
/// The number of scanlines traced through each row of pixels
///
pub const SUB_SCANLINES: usize = 4;

///
/// Plans the coverage of a shape made up of a set of polylines, one row of pixels at a time
///
/// The lines from every polyline are merged into a single active edge list, so shapes made up of many
/// small polylines (such as the outline of a stroke) are no more expensive to scan than a single large one.
///
pub struct PolylineScanPlanner {
    /// Every line in the shape, ordered by the start of its y range
    lines: Vec<PolylineLine>,

    /// The y range covered by the shape
    y_range: Option<(f64, f64)>,
}

impl PolylineScanPlanner {
    ///
    /// Creates a scan planner for the shape formed by a set of polylines
    ///
    pub fn new(polylines: impl IntoIterator<Item=Polyline>) -> PolylineScanPlanner {
        let mut lines   = vec![];
        let mut y_range = None;

        for mut polyline in polylines {
            polyline.prepare_to_render();
            if polyline.lines().is_empty() {
                continue;
            }

            let ((_, min_y), (_, max_y)) = polyline.bounding_box();
            y_range = match y_range {
                None                        => Some((min_y, max_y)),
                Some((cur_min, cur_max))    => Some((min_y.min(cur_min), max_y.max(cur_max))),
            };

            lines.extend(polyline.lines().iter().cloned());
        }

        lines.sort_by(|a, b| a.y_range.start.total_cmp(&b.y_range.start));

        PolylineScanPlanner { lines, y_range }
    }

    ///
    /// Creates a scan planner for a set of subpaths (which are all treated as closed)
    ///
    pub fn from_subpaths<'a>(subpaths: impl IntoIterator<Item=&'a Subpath>) -> PolylineScanPlanner {
        Self::new(subpaths.into_iter()
            .map(|subpath| subpath.distinct_points())
            .filter(|points| points.len() > 2)
            .map(|points| Polyline::new(points)))
    }

    ///
    /// True if this shape covers no area
    ///
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    ///
    /// Traces the shape across a frame of the specified size, calling `row_fn` with the coverage of every row that the shape touches
    ///
    pub fn scan(&self, width: usize, height: usize, winding_rule: WindingRule, mut row_fn: impl FnMut(usize, &ScanlineCoverage)) {
        let (min_y, max_y) = match self.y_range {
            Some(range) => range,
            None        => { return; }
        };

        // Rows that the shape can cover
        let first_row   = min_y.max(0.0).floor();
        let last_row    = max_y.min(height as f64).ceil();
        if !(last_row > first_row) || width == 0 {
            return;
        }

        let first_row   = first_row as usize;
        let last_row    = last_row as usize;

        let mut coverage    = ScanlineCoverage::new(width);
        let mut active      = Vec::<&PolylineLine>::new();
        let mut next_line   = 0;
        let mut intercepts  = vec![];
        let weight          = 1.0 / (SUB_SCANLINES as f32);

        for y in first_row..last_row {
            coverage.clear();

            for sub_scanline in 0..SUB_SCANLINES {
                let y_pos = (y as f64) + ((sub_scanline as f64) + 0.5) / (SUB_SCANLINES as f64);

                // Update the active edge list
                while next_line < self.lines.len() && self.lines[next_line].y_range.start <= y_pos {
                    active.push(&self.lines[next_line]);
                    next_line += 1;
                }
                active.retain(|line| line.y_range.end > y_pos);

                // Find where the shape starts and stops along this scanline
                intercepts.clear();
                intercepts.extend(active.iter()
                    .filter(|line| line.y_range.contains(&y_pos))
                    .map(|line| (line.direction, line.x_pos(y_pos))));
                sort_intercepts(&mut intercepts);

                spans_for_intercepts(&intercepts, winding_rule, |x0, x1| coverage.add_span(x0, x1, weight));
            }

            if !coverage.is_empty() {
                row_fn(y, &coverage);
            }
        }
    }
}
