//!
//! # flo_tile_mask
//!
//! `flo_tile_mask` generates a tiled 'visibility mask' around a geometry: every tile is filled with a mask
//! colour, except for the area around the geometry, which fades out to fully transparent over a falloff
//! distance. The result is a map layer that darkens everything except the area of interest.
//!
//! The mask for each tile is generated by `rasterize_mask()`, which draws onto any `DrawingSurface`. A
//! `TileImageCache` keeps the images for the visible tiles, creating images for tiles as they scroll into
//! view and regenerating them when the mask changes, and `composite_tiles()` draws the cached images into
//! the final frame.
//!
//! `MaskLayerView` ties these together: it watches the bindings in a `MaskLayerProperties` for changes,
//! projects the geometry into the tile grid's spatial reference, and renders frames on request from its
//! `LayerHost`.
//!
//! ```
//! # use flo_tile_mask::*;
//! # use flo_tile_mask::canvas::*;
//! # use flo_tile_mask::software::render::*;
//! let mut bitmap  = RgbaBitmap::try_new(64, 64).unwrap();
//! let geometry    = Geometry::Point { x: 32.0, y: 32.0 };
//!
//! rasterize_mask(&mut RgbaFrame::from_bitmap(&mut bitmap), TileBounds(0.0, 0.0, 64.0, 64.0), Some(&geometry), 10.0, Color::Rgba(0.0, 0.0, 0.0, 0.8));
//!
//! assert!(bitmap.alpha(32, 32) < 16);
//! assert!(bitmap.alpha(0, 0) == 255);
//! ```
//!

#[macro_use]
extern crate serde_derive;

mod tile;
mod dirty;
mod error;
mod geometry;
mod settings;
mod rasterizer;
mod tile_cache;
mod compositor;
mod projection;
mod properties;
mod layer_view;
mod navigation;

pub use self::tile::*;
pub use self::dirty::*;
pub use self::error::*;
pub use self::geometry::*;
pub use self::settings::*;
pub use self::rasterizer::*;
pub use self::tile_cache::*;
pub use self::compositor::*;
pub use self::projection::*;
pub use self::properties::*;
pub use self::layer_view::*;
pub use self::navigation::*;

pub use flo_mask_canvas as canvas;
pub use flo_mask_software as software;
pub use flo_binding as binding;
