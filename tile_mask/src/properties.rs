use super::geometry::*;
use super::settings::*;

use flo_binding::*;
use flo_mask_canvas::*;

///
/// The observable properties of a mask layer
///
/// Each property is a binding: anything holding a copy of these properties can update the layer, and the
/// layer view is notified of every change. Cloning the properties produces another reference to the same
/// bindings.
///
#[derive(Clone)]
pub struct MaskLayerProperties {
    /// The geometry that the mask is carved around (None to leave everything unmasked)
    pub geometry:       Binding<Option<SpatialGeometry>>,

    /// The colour of the mask (its alpha is the opacity of the whole layer)
    pub color:          Binding<Color>,

    /// The falloff distance, in pixels
    pub distance:       Binding<f64>,

    /// The range that the distance is clamped to
    distance_range:     DistanceRange,
}

impl MaskLayerProperties {
    ///
    /// Creates the properties for a layer, using the initial values from its settings
    ///
    pub fn new(settings: &LayerSettings) -> MaskLayerProperties {
        MaskLayerProperties {
            geometry:       bind(None),
            color:          bind(settings.color),
            distance:       bind(settings.distance_range.clamp(settings.distance)),
            distance_range: settings.distance_range,
        }
    }

    ///
    /// Replaces the geometry of the layer
    ///
    pub fn set_geometry(&self, geometry: Option<SpatialGeometry>) {
        self.geometry.set(geometry);
    }

    ///
    /// Changes the colour of the mask
    ///
    pub fn set_color(&self, color: Color) {
        self.color.set(color);
    }

    ///
    /// Changes the falloff distance (the value is clamped to the distance range from the layer settings)
    ///
    pub fn set_distance(&self, distance: f64) {
        self.distance.set(self.distance_range.clamp(distance));
    }

    ///
    /// The range that the distance is clamped to
    ///
    pub fn distance_range(&self) -> DistanceRange {
        self.distance_range
    }
}

impl Default for MaskLayerProperties {
    fn default() -> Self {
        MaskLayerProperties::new(&LayerSettings::default())
    }
}
