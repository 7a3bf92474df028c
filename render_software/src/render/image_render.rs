#[cfg(feature="render_png")]
mod render_png {
    use crate::pixel::*;

    use flo_mask_canvas::*;

    use std::io::{Write, BufWriter};

    ///
    /// Writes a bitmap to a stream as a PNG file
    ///
    /// PNG files use non-premultiplied alpha, so the pixels are converted as they are written
    ///
    pub fn write_png<TStream>(bitmap: &RgbaBitmap, target: TStream) -> Result<(), png::EncodingError>
    where
        TStream: Write,
    {
        let mut encoder = png::Encoder::new(BufWriter::new(target), bitmap.width() as u32, bitmap.height() as u32);

        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer      = encoder.write_header()?;
        let mut pixel_data  = vec![0u8; bitmap.width()*bitmap.height()*4];

        for (idx, pixel) in pixel_data.chunks_exact_mut(4).enumerate() {
            let straight = U8RgbaPremultipliedPixel::read(bitmap.pixels(), idx).to_straight_alpha();
            pixel.copy_from_slice(&straight);
        }

        writer.write_image_data(&pixel_data)?;
        writer.finish()?;

        Ok(())
    }
}

#[cfg(feature="render_png")]
pub use render_png::*;
