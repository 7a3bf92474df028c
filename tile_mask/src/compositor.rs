use super::tile::*;
use super::tile_cache::*;

use flo_mask_canvas::*;

///
/// Draws the cached images for a set of visible tiles onto a surface
///
/// The surface is cleared over the area of the view, then each tile image is drawn at its on-screen position
/// with the `SourceOver` blend mode and the specified opacity. If the view is rotated, the tiles are rotated
/// about the center of the view.
///
pub fn composite_tiles(surface: &mut dyn DrawingSurface, view: &ViewState, tiles: &[TileDescriptor], cache: &TileImageCache, alpha: f32) {
    let (width, height) = view.pixel_size();
    surface.clear_rect(Coord2(0.0, 0.0), Coord2(width, height));

    let transform = if view.rotation != 0.0 {
        Transform2D::rotate_degrees_about(view.rotation, width / 2.0, height / 2.0)
    } else {
        Transform2D::identity()
    };

    let (tile_width, tile_height) = cache.tile_size();

    for tile in tiles.iter() {
        let image = match cache.get(&tile.id) {
            Some(image) => image,
            None        => {
                log::warn!("Tile {} is visible but has no mask image", tile.id);
                continue;
            }
        };

        let scale       = tile.resolution / view.resolution * view.pixel_ratio;
        let (x, y)      = view.to_screen_no_rotation(tile.coords);
        let size        = Coord2((tile_width as f64) * scale, (tile_height as f64) * scale);

        surface.draw_bitmap(image, Coord2(x, y), size, &transform, alpha);
    }
}
