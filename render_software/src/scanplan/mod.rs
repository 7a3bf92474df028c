//!
//! # ScanPlan
//!
//! A 'scan plan' works out which parts of each scanline are covered by a shape. Shapes are described as a
//! set of polylines whose edges are intercepted with several scanlines per row of pixels: the spans between
//! the intercepts are accumulated into a coverage value for each pixel, which is what provides anti-aliasing.
//!

mod scanline_coverage;
mod scanline_intercept;
mod polyline_scan_planner;

pub use scanline_coverage::*;
pub use scanline_intercept::*;
pub use polyline_scan_planner::*;
