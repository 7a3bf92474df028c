use thiserror::Error;

///
/// Errors that can occur while creating a bitmap
///
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BitmapError {
    /// The pixel buffer for a bitmap of the specified size could not be allocated
    #[error("could not allocate a {width}x{height} bitmap")]
    AllocationFailed { width: usize, height: usize },
}

///
/// A bitmap of 8-bit RGBA pixels
///
/// The alpha value is pre-multiplied into the RGB values. Pixels are stored in rows, with row 0 at the top
/// of the image.
///
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RgbaBitmap {
    width:  usize,
    height: usize,
    pixels: Vec<u8>,
}

impl RgbaBitmap {
    ///
    /// Allocates a new, fully transparent bitmap
    ///
    /// This reports an error instead of aborting if the memory for the bitmap can't be allocated
    ///
    pub fn try_new(width: usize, height: usize) -> Result<RgbaBitmap, BitmapError> {
        let failed  = BitmapError::AllocationFailed { width, height };
        let len     = width.checked_mul(height).and_then(|len| len.checked_mul(4)).ok_or(failed.clone())?;

        let mut pixels = Vec::new();
        pixels.try_reserve_exact(len).map_err(|_| failed)?;
        pixels.resize(len, 0u8);

        Ok(RgbaBitmap { width, height, pixels })
    }

    ///
    /// The width of this bitmap in pixels
    ///
    #[inline]
    pub fn width(&self) -> usize { self.width }

    ///
    /// The height of this bitmap in pixels
    ///
    #[inline]
    pub fn height(&self) -> usize { self.height }

    ///
    /// The raw premultiplied RGBA bytes for this bitmap
    ///
    #[inline]
    pub fn pixels(&self) -> &[u8] { &self.pixels }

    ///
    /// The raw premultiplied RGBA bytes for this bitmap, for updating
    ///
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [u8] { &mut self.pixels }

    ///
    /// Reads the premultiplied components of the pixel at the specified position
    ///
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        let pos = (y * self.width + x) * 4;

        [self.pixels[pos], self.pixels[pos+1], self.pixels[pos+2], self.pixels[pos+3]]
    }

    ///
    /// Reads the alpha value of the pixel at the specified position
    ///
    #[inline]
    pub fn alpha(&self, x: usize, y: usize) -> u8 {
        self.pixels[(y * self.width + x) * 4 + 3]
    }
}
