mod orientation;
mod stroke;

pub use orientation::*;
pub use stroke::*;
