use flo_mask_canvas::*;

///
/// Errors that can stop a mask layer from rendering a frame
///
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum MaskError {
    #[error("Could not allocate a {width}x{height} tile bitmap")]
    BitmapAllocation { width: usize, height: usize },

    #[error("Invalid layer settings: {0}")]
    Settings(String),
}

impl From<BitmapError> for MaskError {
    fn from(err: BitmapError) -> MaskError {
        match err {
            BitmapError::AllocationFailed { width, height } => MaskError::BitmapAllocation { width, height },
        }
    }
}

impl From<serde_json::Error> for MaskError {
    fn from(err: serde_json::Error) -> MaskError {
        MaskError::Settings(err.to_string())
    }
}
