use super::error::*;
use super::geometry::*;

use flo_mask_canvas::*;

///
/// Describes the tile grid that a layer generates images for
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct TileInfo {
    /// Width and height of a tile bitmap in pixels
    pub size:               (usize, usize),

    /// The spatial reference used by the tile grid
    pub spatial_reference:  SpatialReference,
}

impl Default for TileInfo {
    fn default() -> Self {
        TileInfo {
            size:               (512, 512),
            spatial_reference:  SpatialReference::WEB_MERCATOR,
        }
    }
}

///
/// The range of falloff distances that a layer will accept
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct DistanceRange {
    pub min: f64,
    pub max: f64,
}

impl DistanceRange {
    ///
    /// Clamps a distance into this range (values that are not numbers become the minimum)
    ///
    pub fn clamp(&self, distance: f64) -> f64 {
        if distance.is_nan() {
            self.min
        } else {
            distance.max(self.min).min(self.max)
        }
    }
}

impl Default for DistanceRange {
    fn default() -> Self {
        DistanceRange { min: 0.0, max: 50.0 }
    }
}

///
/// Settings used to create a mask layer
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerSettings {
    /// The tile grid to generate images for
    pub tile_info:      TileInfo,

    /// The initial mask colour (the alpha component is the opacity of the whole layer)
    pub color:          Color,

    /// The initial falloff distance, in pixels
    pub distance:       f64,

    /// The distances that the layer accepts
    pub distance_range: DistanceRange,
}

impl Default for LayerSettings {
    fn default() -> Self {
        LayerSettings {
            tile_info:      TileInfo::default(),
            color:          Color::Rgba(0.0, 0.0, 0.0, 1.0),
            distance:       10.0,
            distance_range: DistanceRange::default(),
        }
    }
}

impl LayerSettings {
    ///
    /// Reads layer settings from a JSON string (missing values are set to their defaults)
    ///
    pub fn from_json(json: &str) -> Result<LayerSettings, MaskError> {
        let settings = serde_json::from_str::<LayerSettings>(json)?;
        settings.validate()?;

        Ok(settings)
    }

    ///
    /// Converts these settings to a JSON string
    ///
    pub fn to_json(&self) -> Result<String, MaskError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    ///
    /// Checks that these settings describe a layer that can be rendered
    ///
    pub fn validate(&self) -> Result<(), MaskError> {
        let (width, height) = self.tile_info.size;

        if width == 0 || height == 0 {
            return Err(MaskError::Settings(format!("tile size {}x{} is empty", width, height)));
        }

        if !(self.distance_range.min >= 0.0) || !(self.distance_range.max >= self.distance_range.min) {
            return Err(MaskError::Settings(format!("distance range {}..{} is invalid", self.distance_range.min, self.distance_range.max)));
        }

        Ok(())
    }
}
