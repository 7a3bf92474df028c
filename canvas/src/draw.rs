//!
//! Styling values that are passed along with each drawing operation
//!

///
/// Possible way to join lines
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub enum LineJoin {
    Round,
    Bevel
}

///
/// Blend mode to use when drawing
///
/// `DestinationOut` is the 'subtract opacity' mode: the alpha of whatever is drawn is removed from
/// the pixels underneath it, and the colour of the drawing is ignored.
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub enum BlendMode {
    SourceOver,
    DestinationOut,
}

///
/// How a path should determine if it's an outer edge or not
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub enum WindingRule {
    /// A line is an outer edge if it's moving in the opposite direction to the 'inner edge' lines
    NonZero,

    /// Every line is an outer edge
    EvenOdd
}

///
/// Describes how a path should be stroked
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// The width of the line, in pixels
    pub width:  f64,

    /// How the segments of the line are joined
    pub join:   LineJoin,
}

impl StrokeStyle {
    ///
    /// Creates a stroke style with the specified width and round joins
    ///
    pub fn round(width: f64) -> StrokeStyle {
        StrokeStyle {
            width:  width,
            join:   LineJoin::Round,
        }
    }
}

impl Default for BlendMode {
    fn default() -> Self { BlendMode::SourceOver }
}

impl Default for WindingRule {
    fn default() -> Self { WindingRule::NonZero }
}
