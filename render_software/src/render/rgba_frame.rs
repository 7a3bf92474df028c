use crate::draw::*;
use crate::pixel::*;
use crate::scanplan::*;

use flo_mask_canvas::*;

///
/// A render target of a frame of u8 pixels with pre-multiplied alpha
///
/// This implements `DrawingSurface`, and is usually created from an `RgbaBitmap`
///
pub struct RgbaFrame<'a> {
    pub width:      usize,
    pub height:     usize,
    pub pixel_data: &'a mut [u8],
}

impl<'a> RgbaFrame<'a> {
    ///
    /// Creates a frame that renders to a bitmap
    ///
    #[inline]
    pub fn from_bitmap(bitmap: &'a mut RgbaBitmap) -> Self {
        let width   = bitmap.width();
        let height  = bitmap.height();

        RgbaFrame {
            width:      width,
            height:     height,
            pixel_data: bitmap.pixels_mut(),
        }
    }

    ///
    /// Blends a colour into the pixels covered by a shape
    ///
    fn render_shape(&mut self, shape: &PolylineScanPlanner, winding_rule: WindingRule, color: Color, blend_mode: BlendMode) {
        let source      = F32RgbaPixel::from_color(&color);
        let operation   = AlphaOperation::from(blend_mode);
        let width       = self.width;
        let pixel_data  = &mut *self.pixel_data;

        shape.scan(self.width, self.height, winding_rule, |y, coverage| {
            let row_start = y * width;

            coverage.for_each_covered(|x, coverage| {
                let idx     = row_start + x;
                let dest    = F32RgbaPixel::from_u8(U8RgbaPremultipliedPixel::read(pixel_data, idx));
                let blended = (source * coverage).alpha_blend(dest, operation);

                blended.to_u8().write(pixel_data, idx);
            });
        });
    }

    ///
    /// Returns the pixel range covered by a rectangle, clipped to this frame (edges are rounded to the nearest pixel)
    ///
    fn pixel_range(&self, min: Coord2, max: Coord2) -> Option<((usize, usize), (usize, usize))> {
        let clip = |val: f64, limit: usize| val.round().max(0.0).min(limit as f64) as usize;

        let x0 = clip(min.x().min(max.x()), self.width);
        let x1 = clip(min.x().max(max.x()), self.width);
        let y0 = clip(min.y().min(max.y()), self.height);
        let y1 = clip(min.y().max(max.y()), self.height);

        if x1 > x0 && y1 > y0 {
            Some(((x0, y0), (x1, y1)))
        } else {
            None
        }
    }
}

impl<'a> DrawingSurface for RgbaFrame<'a> {
    fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn clear_rect(&mut self, min: Coord2, max: Coord2) {
        if let Some(((x0, y0), (x1, y1))) = self.pixel_range(min, max) {
            for y in y0..y1 {
                let row_start = (y * self.width + x0) * 4;
                let row_end   = (y * self.width + x1) * 4;

                self.pixel_data[row_start..row_end].iter_mut().for_each(|byte| *byte = 0);
            }
        }
    }

    fn fill_rect(&mut self, min: Coord2, max: Coord2, color: Color, blend_mode: BlendMode) {
        let rect = rect_path(min.x(), min.y(), max.x(), max.y());

        self.fill_path(&[rect], WindingRule::NonZero, color, blend_mode);
    }

    fn fill_path(&mut self, path: &[Subpath], winding_rule: WindingRule, color: Color, blend_mode: BlendMode) {
        let shape = PolylineScanPlanner::from_subpaths(path);

        if !shape.is_empty() {
            self.render_shape(&shape, winding_rule, color, blend_mode);
        }
    }

    fn stroke_path(&mut self, path: &[Subpath], stroke: &StrokeStyle, color: Color, blend_mode: BlendMode) {
        let outline = path.iter()
            .flat_map(|subpath| stroke_outline(subpath, stroke))
            .collect::<Vec<_>>();
        let shape   = PolylineScanPlanner::from_subpaths(&outline);

        if !shape.is_empty() {
            self.render_shape(&shape, WindingRule::NonZero, color, blend_mode);
        }
    }

    fn draw_bitmap(&mut self, bitmap: &RgbaBitmap, position: Coord2, size: Coord2, transform: &Transform2D, alpha: f32) {
        let (target_w, target_h) = (size.x(), size.y());
        if !(target_w > 0.0) || !(target_h > 0.0) || bitmap.width() == 0 || bitmap.height() == 0 {
            return;
        }

        // Map from frame pixels back to the untransformed target rectangle
        let inverse = match transform.invert() {
            Some(inverse)   => inverse,
            None            => { return; }
        };

        // Work out which pixels the transformed rectangle can cover
        let corners = [
            transform.transform_point(position.x(), position.y()),
            transform.transform_point(position.x() + target_w, position.y()),
            transform.transform_point(position.x(), position.y() + target_h),
            transform.transform_point(position.x() + target_w, position.y() + target_h),
        ];
        let min_x = corners.iter().map(|(x, _)| *x).fold(f64::MAX, f64::min).floor();
        let min_y = corners.iter().map(|(_, y)| *y).fold(f64::MAX, f64::min).floor();
        let max_x = corners.iter().map(|(x, _)| *x).fold(f64::MIN, f64::max).ceil();
        let max_y = corners.iter().map(|(_, y)| *y).fold(f64::MIN, f64::max).ceil();

        let range = match self.pixel_range(Coord2(min_x, min_y), Coord2(max_x, max_y)) {
            Some(range) => range,
            None        => { return; }
        };
        let ((x0, y0), (x1, y1)) = range;

        let alpha       = alpha.max(0.0).min(1.0);
        let scale_x     = (bitmap.width() as f64) / target_w;
        let scale_y     = (bitmap.height() as f64) / target_h;
        let source_data = bitmap.pixels();

        for y in y0..y1 {
            for x in x0..x1 {
                // Sample the source pixel nearest to the center of this pixel
                let (src_x, src_y) = inverse.transform_point((x as f64) + 0.5, (y as f64) + 0.5);
                let src_x = ((src_x - position.x()) * scale_x).floor();
                let src_y = ((src_y - position.y()) * scale_y).floor();

                if src_x < 0.0 || src_y < 0.0 || src_x >= bitmap.width() as f64 || src_y >= bitmap.height() as f64 {
                    continue;
                }

                let src_idx = (src_y as usize) * bitmap.width() + (src_x as usize);
                let dst_idx = y * self.width + x;
                let source  = F32RgbaPixel::from_u8(U8RgbaPremultipliedPixel::read(source_data, src_idx)) * alpha;
                let dest    = F32RgbaPixel::from_u8(U8RgbaPremultipliedPixel::read(self.pixel_data, dst_idx));

                source.source_over(dest).to_u8().write(self.pixel_data, dst_idx);
            }
        }
    }
}
