use flo_mask_canvas::*;

///
/// The alpha blending functions that can be applied to a source or destination pixel
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlphaFunction {
    Zero,
    One,
    OneMinusSourceAlpha,
}

///
/// An operation applied to an alpha function
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlphaOperation {
    SourceOver,
    DestHeldOut,
}

///
/// Trait implemented by types that support alpha blending
///
pub trait AlphaBlend : Sized {
    /// Performs alpha blending with a chosen source and target functions (for premultiplied alphas)
    fn alpha_blend_with_function(self, dest: Self, source_alpha: AlphaFunction, dest_alpha: AlphaFunction) -> Self;

    /// Performs the specified alpha blending operation
    #[inline]
    fn alpha_blend(self, dest: Self, operation: AlphaOperation) -> Self {
        let (src, dst) = operation.functions();
        self.alpha_blend_with_function(dest, src, dst)
    }

    #[inline] fn source_over(self, dest: Self) -> Self        { self.alpha_blend(dest, AlphaOperation::SourceOver) }
    #[inline] fn dest_held_out(self, dest: Self) -> Self      { self.alpha_blend(dest, AlphaOperation::DestHeldOut) }
}

impl AlphaOperation {
    ///
    /// Returns the alpha functions to use for the source and target for this alpha operation
    ///
    #[inline]
    pub const fn functions(&self) -> (AlphaFunction, AlphaFunction) {
        match self {
            AlphaOperation::SourceOver      => (AlphaFunction::One,                 AlphaFunction::OneMinusSourceAlpha),
            AlphaOperation::DestHeldOut     => (AlphaFunction::Zero,                AlphaFunction::OneMinusSourceAlpha),
        }
    }
}

impl From<BlendMode> for AlphaOperation {
    #[inline]
    fn from(blend_mode: BlendMode) -> AlphaOperation {
        match blend_mode {
            BlendMode::SourceOver       => AlphaOperation::SourceOver,
            BlendMode::DestinationOut   => AlphaOperation::DestHeldOut,
        }
    }
}

impl AlphaFunction {
    ///
    /// Returns the factor that this function multiplies a pixel by
    ///
    #[inline]
    pub fn factor(&self, src_alpha: f32) -> f32 {
        match self {
            AlphaFunction::Zero                     => 0.0,
            AlphaFunction::One                      => 1.0,
            AlphaFunction::OneMinusSourceAlpha      => 1.0 - src_alpha,
        }
    }
}
