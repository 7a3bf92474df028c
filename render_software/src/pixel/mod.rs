mod alpha_blend_trait;
mod u8_rgba;
mod f32_rgba;

pub use alpha_blend_trait::*;
pub use u8_rgba::*;
pub use f32_rgba::*;
