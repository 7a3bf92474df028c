use super::tile::*;
use super::dirty::*;
use super::error::*;
use super::geometry::*;
use super::rasterizer::*;

use flo_mask_canvas::*;
use flo_mask_software::render::*;

use std::sync::*;
use std::collections::{HashMap, HashSet};

///
/// The values that the mask images are generated from
///
#[derive(Clone, Debug)]
pub struct MaskParameters {
    /// The geometry in the tile grid's spatial reference (None if there's no geometry or it's not projected yet)
    pub geometry:   Option<Arc<Geometry>>,

    /// The falloff distance in pixels
    pub distance:   f64,

    /// The mask colour
    pub color:      Color,
}

///
/// Cache of the mask images for the tiles that are currently visible
///
pub struct TileImageCache {
    /// Size of each tile bitmap in pixels
    tile_size:          (usize, usize),

    /// The image for each tile
    images:             HashMap<TileId, RgbaBitmap>,

    /// The number of times a tile image has been generated
    regeneration_count: u64,
}

impl TileImageCache {
    ///
    /// Creates an empty cache for tiles of a particular size
    ///
    pub fn new(tile_size: (usize, usize)) -> TileImageCache {
        TileImageCache {
            tile_size:          tile_size,
            images:             HashMap::new(),
            regeneration_count: 0,
        }
    }

    ///
    /// The size of the tile bitmaps in this cache
    ///
    #[inline]
    pub fn tile_size(&self) -> (usize, usize) {
        self.tile_size
    }

    ///
    /// Retrieves the image for a tile, if there is one
    ///
    #[inline]
    pub fn get(&self, tile_id: &TileId) -> Option<&RgbaBitmap> {
        self.images.get(tile_id)
    }

    ///
    /// True if there's an image for a tile
    ///
    #[inline]
    pub fn contains(&self, tile_id: &TileId) -> bool {
        self.images.contains_key(tile_id)
    }

    ///
    /// The number of tile images in this cache
    ///
    #[inline]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    ///
    /// The IDs of the tiles that have images in this cache
    ///
    pub fn tile_ids(&self) -> impl Iterator<Item=&TileId> {
        self.images.keys()
    }

    ///
    /// The total number of tile images that have been generated by this cache
    ///
    #[inline]
    pub fn regeneration_count(&self) -> u64 {
        self.regeneration_count
    }

    ///
    /// Brings the cache up to date with the visible tiles
    ///
    /// Tiles without an image have one created, every image is regenerated if the dirty flag is set, and images
    /// for tiles that are no longer visible are removed. The dirty flag is only cleared if every image was
    /// updated. The parameters are read after the pass has begun, so a change made while the images are being
    /// generated will set the dirty flag again.
    ///
    pub fn maintain(&mut self, tiles: &[TileDescriptor], dirty: &DirtyFlag, parameters: impl FnOnce() -> MaskParameters) -> Result<(), MaskError> {
        let pass        = dirty.begin_pass();
        let parameters  = parameters();

        let mut created     = 0;
        let mut regenerated = 0;

        for tile in tiles.iter() {
            if let Some(image) = self.images.get_mut(&tile.id) {
                if pass.is_dirty() {
                    // Reuse the existing bitmap
                    Self::rasterize_tile(image, tile, &parameters);
                    self.regeneration_count += 1;
                    regenerated += 1;
                }
            } else {
                let (width, height) = self.tile_size;
                let mut image       = RgbaBitmap::try_new(width, height)?;

                Self::rasterize_tile(&mut image, tile, &parameters);
                self.images.insert(tile.id.clone(), image);
                self.regeneration_count += 1;
                created += 1;
            }
        }

        // Remove any tile that's no longer visible
        let visible = tiles.iter().map(|tile| &tile.id).collect::<HashSet<_>>();
        let before  = self.images.len();
        self.images.retain(|tile_id, _| visible.contains(tile_id));
        let evicted = before - self.images.len();

        dirty.complete(pass);

        if created > 0 || regenerated > 0 || evicted > 0 {
            log::debug!("Tile cache pass: {} created, {} regenerated, {} evicted", created, regenerated, evicted);
        }

        Ok(())
    }

    ///
    /// Generates the mask image for a single tile
    ///
    fn rasterize_tile(image: &mut RgbaBitmap, tile: &TileDescriptor, parameters: &MaskParameters) {
        let mut frame = RgbaFrame::from_bitmap(image);

        rasterize_mask(&mut frame, tile.bounds, parameters.geometry.as_deref(), parameters.distance, parameters.color);
    }
}
