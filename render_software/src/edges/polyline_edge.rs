use super::edge_intercept_direction::*;

use flo_mask_canvas::*;

use itertools::*;

use std::ops::{Range};

///
/// A single line within a polyline
///
#[derive(Clone, Debug)]
pub struct PolylineLine {
    /// The y-range covered by this line (the end point is excluded so that vertices are only counted once)
    pub y_range: Range<f64>,

    /// The x position at the start of the y-range
    x_start: f64,

    /// The change in x for every unit change in y
    dx_dy: f64,

    /// The edge intercept direction (whether the line is moving down or up)
    pub direction: EdgeInterceptDirection,
}

///
/// A polyline is a closed shape defined by lines joining points together
///
#[derive(Clone, Debug)]
pub struct Polyline {
    points:         Vec<Coord2>,
    lines:          Vec<PolylineLine>,
    bounding_box:   ((f64, f64), (f64, f64)),
}

impl PolylineLine {
    ///
    /// Creates a line between two points, or None if the line is horizontal (and so never intercepts a scanline)
    ///
    pub fn from_points(from: Coord2, to: Coord2) -> Option<PolylineLine> {
        if from.y() == to.y() || !from.y().is_finite() || !to.y().is_finite() {
            return None;
        }

        let (top, bottom, direction) = if from.y() < to.y() {
            (from, to, EdgeInterceptDirection::DirectionOut)
        } else {
            (to, from, EdgeInterceptDirection::DirectionIn)
        };

        Some(PolylineLine {
            y_range:    top.y()..bottom.y(),
            x_start:    top.x(),
            dx_dy:      (bottom.x() - top.x()) / (bottom.y() - top.y()),
            direction:  direction,
        })
    }

    /// Returns the x position for a y position
    #[inline]
    pub fn x_pos(&self, y: f64) -> f64 {
        self.x_start + (y - self.y_range.start) * self.dx_dy
    }
}

impl Polyline {
    ///
    /// Creates a new polyline shape (the shape is closed automatically if the last point is not the same as the first)
    ///
    pub fn new(points: impl IntoIterator<Item=Coord2>) -> Self {
        let mut points = points.into_iter().collect::<Vec<_>>();
        if points.len() > 1 && points.last() != points.get(0) {
            points.push(points[0]);
        }

        Polyline {
            points:         points,
            lines:          vec![],
            bounding_box:   ((0.0, 0.0), (0.0, 0.0)),
        }
    }

    ///
    /// Performs the calculations required to find the intercepts for this polyline
    ///
    pub fn prepare_to_render(&mut self) {
        if !self.lines.is_empty() || self.points.is_empty() {
            return;
        }

        let mut bounds_min = (f64::MAX, f64::MAX);
        let mut bounds_max = (f64::MIN, f64::MIN);

        for point in self.points.iter() {
            bounds_min.0 = bounds_min.0.min(point.x());
            bounds_min.1 = bounds_min.1.min(point.y());
            bounds_max.0 = bounds_max.0.max(point.x());
            bounds_max.1 = bounds_max.1.max(point.y());
        }

        self.lines = self.points.iter()
            .copied()
            .tuple_windows::<(Coord2, Coord2)>()
            .filter_map(|(from, to)| PolylineLine::from_points(from, to))
            .collect();
        self.bounding_box = (bounds_min, bounds_max);
    }

    ///
    /// Once `prepare_to_render()` has been called, returns the bounding box of this polyline
    ///
    #[inline]
    pub fn bounding_box(&self) -> ((f64, f64), (f64, f64)) {
        self.bounding_box
    }

    ///
    /// Once `prepare_to_render()` has been called, returns the lines that make up this polyline
    ///
    #[inline]
    pub fn lines(&self) -> &[PolylineLine] {
        &self.lines
    }
}
