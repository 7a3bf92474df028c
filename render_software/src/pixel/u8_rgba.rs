///
/// An RGBA pixel as a set of u8 values
///
/// The alpha value is pre-multiplied into the RGB values
///
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(C)]
pub struct U8RgbaPremultipliedPixel([u8; 4]);

impl U8RgbaPremultipliedPixel {
    ///
    /// Creates a new U8 pixel from the component bytes
    ///
    #[inline]
    pub fn from_components(components: [u8; 4]) -> Self {
        U8RgbaPremultipliedPixel(components)
    }

    ///
    /// Retrieves the RGBA values from this pixel
    ///
    #[inline]
    pub fn get_components(&self) -> [u8; 4] {
        self.0
    }

    ///
    /// Reads the pixel at a particular pixel index from a slice of RGBA bytes
    ///
    #[inline]
    pub fn read(bytes: &[u8], pixel_index: usize) -> Self {
        let pos = pixel_index * 4;

        U8RgbaPremultipliedPixel([bytes[pos], bytes[pos+1], bytes[pos+2], bytes[pos+3]])
    }

    ///
    /// Writes this pixel to a particular pixel index in a slice of RGBA bytes
    ///
    #[inline]
    pub fn write(&self, bytes: &mut [u8], pixel_index: usize) {
        let pos = pixel_index * 4;

        bytes[pos..(pos+4)].copy_from_slice(&self.0);
    }

    ///
    /// Converts this pixel to non-premultiplied RGBA bytes (as used by most image formats)
    ///
    pub fn to_straight_alpha(&self) -> [u8; 4] {
        let [r, g, b, a] = self.0;

        if a == 0 {
            [0, 0, 0, 0]
        } else {
            let unmultiply = |c: u8| (((c as u32) * 255 + (a as u32)/2) / (a as u32)).min(255) as u8;

            [unmultiply(r), unmultiply(g), unmultiply(b), a]
        }
    }
}

impl Default for U8RgbaPremultipliedPixel {
    #[inline]
    fn default() -> Self {
        U8RgbaPremultipliedPixel([0, 0, 0, 0])
    }
}
