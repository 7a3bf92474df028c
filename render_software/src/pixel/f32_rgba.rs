use super::alpha_blend_trait::*;
use super::u8_rgba::*;

use flo_mask_canvas::*;

use std::ops::{Mul};

///
/// A pixel with premultiplied RGBA components stored as f32 values in the range 0-1
///
/// This is the format used while blending: bitmaps store their pixels as `U8RgbaPremultipliedPixel`
///
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct F32RgbaPixel(pub [f32; 4]);

impl F32RgbaPixel {
    ///
    /// Creates the premultiplied pixel for a colour (alpha is clamped to the range 0-1)
    ///
    pub fn from_color(color: &Color) -> F32RgbaPixel {
        let (r, g, b, a) = color.to_rgba_components();
        let a = a.max(0.0).min(1.0);

        F32RgbaPixel([r*a, g*a, b*a, a])
    }

    ///
    /// Converts a pixel stored as bytes to a f32 pixel
    ///
    #[inline]
    pub fn from_u8(pixel: U8RgbaPremultipliedPixel) -> F32RgbaPixel {
        let [r, g, b, a] = pixel.get_components();

        F32RgbaPixel([(r as f32)/255.0, (g as f32)/255.0, (b as f32)/255.0, (a as f32)/255.0])
    }

    ///
    /// Converts this pixel back to bytes
    ///
    #[inline]
    pub fn to_u8(&self) -> U8RgbaPremultipliedPixel {
        let [r, g, b, a] = self.0;

        U8RgbaPremultipliedPixel::from_components([to_byte(r), to_byte(g), to_byte(b), to_byte(a)])
    }

    ///
    /// The alpha component of this pixel
    ///
    #[inline]
    pub fn alpha(&self) -> f32 {
        self.0[3]
    }
}

#[inline]
fn to_byte(component: f32) -> u8 {
    (component * 255.0).round().max(0.0).min(255.0) as u8
}

impl Mul<f32> for F32RgbaPixel {
    type Output = F32RgbaPixel;

    #[inline]
    fn mul(self, factor: f32) -> F32RgbaPixel {
        let [r, g, b, a] = self.0;

        F32RgbaPixel([r*factor, g*factor, b*factor, a*factor])
    }
}

impl AlphaBlend for F32RgbaPixel {
    #[inline]
    fn alpha_blend_with_function(self, dest: Self, source_alpha: AlphaFunction, dest_alpha: AlphaFunction) -> Self {
        let src_alpha   = self.alpha();
        let src_factor  = source_alpha.factor(src_alpha);
        let dst_factor  = dest_alpha.factor(src_alpha);

        let [sr, sg, sb, sa] = self.0;
        let [dr, dg, db, da] = dest.0;

        F32RgbaPixel([
            sr*src_factor + dr*dst_factor,
            sg*src_factor + dg*dst_factor,
            sb*src_factor + db*dst_factor,
            sa*src_factor + da*dst_factor,
        ])
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn source_over_opaque_replaces() {
        let src = F32RgbaPixel([1.0, 0.0, 0.0, 1.0]);
        let dst = F32RgbaPixel([0.0, 0.0, 1.0, 1.0]);

        assert!(src.source_over(dst) == F32RgbaPixel([1.0, 0.0, 0.0, 1.0]));
    }

    #[test]
    fn dest_held_out_removes_alpha() {
        let src = F32RgbaPixel([0.0, 0.0, 0.0, 0.5]);
        let dst = F32RgbaPixel([0.5, 0.5, 0.5, 1.0]);

        assert!(src.dest_held_out(dst) == F32RgbaPixel([0.25, 0.25, 0.25, 0.5]), "{:?}", src.dest_held_out(dst));
    }

    #[test]
    fn dest_held_out_ignores_source_colour() {
        let src = F32RgbaPixel([1.0, 1.0, 1.0, 1.0]);
        let dst = F32RgbaPixel([0.2, 0.4, 0.6, 1.0]);

        assert!(src.dest_held_out(dst) == F32RgbaPixel([0.0, 0.0, 0.0, 0.0]));
    }

    #[test]
    fn byte_round_trip() {
        let pixel = U8RgbaPremultipliedPixel::from_components([12, 34, 56, 78]);

        assert!(F32RgbaPixel::from_u8(pixel).to_u8() == pixel);
    }
}
