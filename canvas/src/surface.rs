use super::draw::*;
use super::path::*;
use super::color::*;
use super::bitmap::*;
use super::transform2d::*;

use flo_curves::geo::*;

///
/// A drawing surface provides the set of operations needed to generate and composite mask tiles
///
/// Unlike a canvas, a drawing surface has no current path, fill colour or blend mode: every operation is
/// supplied with everything it needs to render. Coordinates are in pixels, with (0, 0) at the top-left of
/// the surface.
///
pub trait DrawingSurface {
    ///
    /// The size of this surface in pixels
    ///
    fn size(&self) -> (usize, usize);

    ///
    /// Sets every pixel in a rectangle to be fully transparent
    ///
    fn clear_rect(&mut self, min: Coord2, max: Coord2);

    ///
    /// Fills a rectangle with a colour
    ///
    fn fill_rect(&mut self, min: Coord2, max: Coord2, color: Color, blend_mode: BlendMode);

    ///
    /// Fills the area enclosed by a set of subpaths (all subpaths are treated as closed)
    ///
    fn fill_path(&mut self, path: &[Subpath], winding_rule: WindingRule, color: Color, blend_mode: BlendMode);

    ///
    /// Draws a line along a set of subpaths
    ///
    fn stroke_path(&mut self, path: &[Subpath], stroke: &StrokeStyle, color: Color, blend_mode: BlendMode);

    ///
    /// Draws a bitmap so that it fills the rectangle with its top-left corner at `position` and the specified `size`
    ///
    /// The transform is applied to the rectangle after it is positioned, and the bitmap is blended onto the
    /// surface with the `SourceOver` blend mode and the specified opacity.
    ///
    fn draw_bitmap(&mut self, bitmap: &RgbaBitmap, position: Coord2, size: Coord2, transform: &Transform2D, alpha: f32);

    ///
    /// Clears the entire surface
    ///
    fn clear(&mut self) {
        let (width, height) = self.size();
        self.clear_rect(Coord2(0.0, 0.0), Coord2(width as f64, height as f64));
    }

    ///
    /// Fills the entire surface with a colour
    ///
    fn fill_all(&mut self, color: Color, blend_mode: BlendMode) {
        let (width, height) = self.size();
        self.fill_rect(Coord2(0.0, 0.0), Coord2(width as f64, height as f64), color, blend_mode);
    }
}
