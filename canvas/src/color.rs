///
/// Representation of a colour
///
/// Components are stored in the range 0.0-1.0
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub enum Color {
    Rgba(f32, f32, f32, f32),
}

impl Color {
    ///
    /// Creates a colour from 8-bit red, green and blue components and an alpha value between 0 and 1
    ///
    pub fn from_rgb8(r: u8, g: u8, b: u8, alpha: f32) -> Color {
        Color::Rgba((r as f32)/255.0, (g as f32)/255.0, (b as f32)/255.0, alpha.max(0.0).min(1.0))
    }

    ///
    /// Returns the RGBA components of this colour
    ///
    #[inline]
    pub fn to_rgba_components(&self) -> (f32, f32, f32, f32) {
        match self {
            Color::Rgba(r, g, b, a) => (*r, *g, *b, *a),
        }
    }

    ///
    /// Returns the alpha component of this colour
    ///
    #[inline]
    pub fn alpha_component(&self) -> f32 {
        match self {
            Color::Rgba(_, _, _, a) => *a,
        }
    }

    ///
    /// Returns the same colour with a different alpha value
    ///
    #[inline]
    pub fn with_alpha(&self, new_alpha: f32) -> Color {
        match self {
            Color::Rgba(r, g, b, _) => Color::Rgba(*r, *g, *b, new_alpha),
        }
    }

    ///
    /// Converts this colour to premultiplied RGBA bytes
    ///
    /// The alpha value is clamped to the range 0-1 first
    ///
    pub fn to_premultiplied_bytes(&self) -> [u8; 4] {
        let (r, g, b, a) = self.to_rgba_components();
        let a = a.max(0.0).min(1.0);

        [
            component_to_byte(r * a),
            component_to_byte(g * a),
            component_to_byte(b * a),
            component_to_byte(a),
        ]
    }
}

///
/// Converts a f32 value between 0 and 1 to a byte
///
#[inline]
fn component_to_byte(component: f32) -> u8 {
    if component < 0.0 {
        0
    } else if component > 1.0 {
        255
    } else {
        (component * 255.0).round() as u8
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::Rgba(0.0, 0.0, 0.0, 1.0)
    }
}
