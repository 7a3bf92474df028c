use super::geometry::*;

use futures::prelude::*;
use futures::future::{BoxFuture};

use std::f64;
use std::sync::*;
use std::sync::atomic::{AtomicBool, Ordering};

///
/// Errors that can occur while projecting a geometry
///
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ProjectionError {
    #[error("The projection service has not finished loading")]
    NotLoaded,

    #[error("No transformation is available from wkid {source_wkid} to wkid {target_wkid}")]
    UnsupportedTransformation { source_wkid: u32, target_wkid: u32 },

    #[error("Projection failed: {0}")]
    Failed(String),
}

///
/// A transformation between two spatial references
///
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Transformation {
    /// The coordinates are already in the target spatial reference
    Identity,

    /// Longitude/latitude in degrees to Web Mercator metres
    GeographicToWebMercator,

    /// Web Mercator metres to longitude/latitude in degrees
    WebMercatorToGeographic,
}

///
/// A service that converts geometries between spatial references
///
/// `load()` must complete before any other function is used.
///
pub trait ProjectionService : Send + Sync {
    ///
    /// Returns a future that completes when the service is ready to use
    ///
    fn load(&self) -> BoxFuture<'static, Result<(), ProjectionError>>;

    ///
    /// Finds the transformation to use to convert between two spatial references
    ///
    fn transformation(&self, source: SpatialReference, target: SpatialReference) -> Result<Transformation, ProjectionError>;

    ///
    /// Projects a geometry into the target spatial reference
    ///
    fn project(&self, geometry: &Geometry, target: SpatialReference, transformation: &Transformation) -> Result<Geometry, ProjectionError>;
}

/// Radius of the sphere used by the Web Mercator projection
const EARTH_RADIUS: f64 = 6378137.0;

/// The latitude where Web Mercator is cut off (the map becomes square at this latitude)
const MAX_LATITUDE: f64 = 85.0511287798066;

///
/// A projection service that can convert between WGS84 longitude/latitude and Web Mercator
///
#[derive(Clone, Default)]
pub struct WebMercatorProjection {
    loaded: Arc<AtomicBool>,
}

impl WebMercatorProjection {
    ///
    /// Creates a new projection service (which must be loaded before it's used)
    ///
    pub fn new() -> WebMercatorProjection {
        WebMercatorProjection::default()
    }

    ///
    /// True once `load()` has completed
    ///
    pub fn is_loaded(&self) -> bool {
        self.loaded.load(Ordering::Acquire)
    }
}

///
/// Converts a longitude/latitude in degrees to Web Mercator coordinates
///
pub fn geographic_to_web_mercator(longitude: f64, latitude: f64) -> (f64, f64) {
    let latitude    = latitude.max(-MAX_LATITUDE).min(MAX_LATITUDE).to_radians();
    let x           = EARTH_RADIUS * longitude.to_radians();
    let y           = EARTH_RADIUS * (f64::consts::FRAC_PI_4 + latitude / 2.0).tan().ln();

    (x, y)
}

///
/// Converts Web Mercator coordinates to a longitude/latitude in degrees
///
pub fn web_mercator_to_geographic(x: f64, y: f64) -> (f64, f64) {
    let longitude   = (x / EARTH_RADIUS).to_degrees();
    let latitude    = (2.0 * (y / EARTH_RADIUS).exp().atan() - f64::consts::FRAC_PI_2).to_degrees();

    (longitude, latitude)
}

impl ProjectionService for WebMercatorProjection {
    fn load(&self) -> BoxFuture<'static, Result<(), ProjectionError>> {
        let loaded = Arc::clone(&self.loaded);

        async move {
            loaded.store(true, Ordering::Release);
            Ok(())
        }.boxed()
    }

    fn transformation(&self, source: SpatialReference, target: SpatialReference) -> Result<Transformation, ProjectionError> {
        if !self.is_loaded() {
            return Err(ProjectionError::NotLoaded);
        }

        if source.is_equivalent(&target) {
            Ok(Transformation::Identity)
        } else if source == SpatialReference::WGS84 && target.is_web_mercator() {
            Ok(Transformation::GeographicToWebMercator)
        } else if source.is_web_mercator() && target == SpatialReference::WGS84 {
            Ok(Transformation::WebMercatorToGeographic)
        } else {
            Err(ProjectionError::UnsupportedTransformation { source_wkid: source.wkid, target_wkid: target.wkid })
        }
    }

    fn project(&self, geometry: &Geometry, _target: SpatialReference, transformation: &Transformation) -> Result<Geometry, ProjectionError> {
        if !self.is_loaded() {
            return Err(ProjectionError::NotLoaded);
        }

        let projected = match transformation {
            Transformation::Identity                    => geometry.clone(),
            Transformation::GeographicToWebMercator     => geometry.map_coordinates(geographic_to_web_mercator),
            Transformation::WebMercatorToGeographic     => geometry.map_coordinates(web_mercator_to_geographic),
        };

        Ok(projected)
    }
}
