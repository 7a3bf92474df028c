//!
//! # flo_mask_software
//!
//! A CPU renderer for `flo_mask_canvas` drawing surfaces. `RgbaFrame` wraps an `RgbaBitmap` and
//! implements `DrawingSurface`, so the same drawing code can generate tile images and composite them
//! into a final frame without needing a graphics API.
//!
//! Shapes are rendered by tracing polyline edges over several sub-scanlines per pixel row and
//! accumulating the exact horizontal coverage of each span, which gives anti-aliased output that is
//! deterministic for a given set of inputs.
//!

/// Kinds of edges that can be used to describe a shape
pub mod edges;

/// A scan plan describes the regions covered by a shape on each scanline
pub mod scanplan;

/// A pixel models a single colour sample, and how it is blended with other pixels
pub mod pixel;

/// Converts drawing instructions such as strokes into shapes that can be scanned
pub mod draw;

/// Render targets: bitmaps that can be drawn on, and ways to write them out
pub mod render;

pub use flo_mask_canvas as canvas;
pub use flo_mask_canvas::curves;
