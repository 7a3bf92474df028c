//!
//! # flo_mask_canvas
//!
//! `flo_mask_canvas` describes the drawing operations needed to generate and composite mask tiles
//! without depending on a particular rendering implementation.
//!
//! The main features of this library are the `DrawingSurface` trait, which is the set of operations
//! a renderer has to support, and the values that are passed to it: `Color`, `BlendMode`, `Subpath`,
//! `StrokeStyle` and `Transform2D`. Every drawing call carries all of its styling explicitly, so a
//! surface never has to track a current fill colour, blend mode or path between calls.
//!
//! `RgbaBitmap` is the bitmap format used for tile images: 8-bit RGBA with the alpha premultiplied
//! into the colour channels.
//!
//! `flo_mask_software` provides a CPU implementation of `DrawingSurface` that renders into an
//! `RgbaBitmap`.
//!
#![warn(bare_trait_objects)]

#[macro_use]
extern crate serde_derive;

mod draw;
mod path;
mod color;
mod bitmap;
mod surface;
mod primitives;
mod transform2d;

pub use self::draw::*;
pub use self::path::*;
pub use self::color::*;
pub use self::bitmap::*;
pub use self::surface::*;
pub use self::primitives::*;
pub use self::transform2d::*;

pub use flo_curves as curves;
pub use flo_curves::geo::{Coordinate2D, Coord2};
