mod rgba_frame;
mod image_render;

pub use rgba_frame::*;
pub use image_render::*;
