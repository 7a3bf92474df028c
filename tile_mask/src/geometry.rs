///
/// A spatial reference, identified by its well-known ID
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct SpatialReference {
    pub wkid: u32,
}

impl SpatialReference {
    /// WGS84 longitude/latitude
    pub const WGS84: SpatialReference = SpatialReference { wkid: 4326 };

    /// Web Mercator (the tile grid used by most web maps)
    pub const WEB_MERCATOR: SpatialReference = SpatialReference { wkid: 3857 };

    /// The older ID for Web Mercator, which describes the same coordinate system
    pub const WEB_MERCATOR_AUXILIARY: SpatialReference = SpatialReference { wkid: 102100 };

    ///
    /// True if this reference describes the same coordinate system as another one
    ///
    pub fn is_equivalent(&self, other: &SpatialReference) -> bool {
        self.wkid == other.wkid || (self.is_web_mercator() && other.is_web_mercator())
    }

    ///
    /// True if this is one of the IDs for the Web Mercator coordinate system
    ///
    pub fn is_web_mercator(&self) -> bool {
        self.wkid == Self::WEB_MERCATOR.wkid || self.wkid == Self::WEB_MERCATOR_AUXILIARY.wkid
    }
}

impl Default for SpatialReference {
    fn default() -> Self { SpatialReference::WEB_MERCATOR }
}

///
/// A ring or path: a list of (x, y) coordinates
///
pub type Ring = Vec<(f64, f64)>;

///
/// The geometry that a mask is generated around
///
/// Geometries are never edited once they've been created: a change to the geometry of a layer replaces
/// it entirely.
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum Geometry {
    Point { x: f64, y: f64 },
    MultiPoint { points: Vec<(f64, f64)> },
    Polyline { paths: Vec<Ring> },
    Polygon { rings: Vec<Ring> },
    Extent { xmin: f64, ymin: f64, xmax: f64, ymax: f64 },
}

impl Geometry {
    ///
    /// For polygons and extents, returns the rings that make up the area of this geometry
    ///
    /// Extents are converted to a single four-point ring. Other geometry types have no area, so return None.
    ///
    pub fn to_polygon_rings(&self) -> Option<Vec<Ring>> {
        match self {
            Geometry::Polygon { rings }                     => Some(rings.clone()),
            Geometry::Extent { xmin, ymin, xmax, ymax }     => Some(vec![vec![(*xmin, *ymin), (*xmin, *ymax), (*xmax, *ymax), (*xmax, *ymin)]]),

            Geometry::Point { .. }
            | Geometry::MultiPoint { .. }
            | Geometry::Polyline { .. }                     => None,
        }
    }

    ///
    /// Returns the points in a point or multipoint geometry
    ///
    pub fn points(&self) -> Option<Vec<(f64, f64)>> {
        match self {
            Geometry::Point { x, y }            => Some(vec![(*x, *y)]),
            Geometry::MultiPoint { points }     => Some(points.clone()),
            _                                   => None,
        }
    }

    ///
    /// Calls a function for every coordinate in this geometry, replacing it with the result
    ///
    pub fn map_coordinates(&self, mut map_fn: impl FnMut(f64, f64) -> (f64, f64)) -> Geometry {
        fn map_ring(ring: &Ring, map_fn: &mut impl FnMut(f64, f64) -> (f64, f64)) -> Ring {
            ring.iter().map(|(x, y)| map_fn(*x, *y)).collect()
        }

        match self {
            Geometry::Point { x, y } => {
                let (x, y) = map_fn(*x, *y);
                Geometry::Point { x, y }
            }

            Geometry::MultiPoint { points }     => Geometry::MultiPoint { points: map_ring(points, &mut map_fn) },
            Geometry::Polyline { paths }        => Geometry::Polyline { paths: paths.iter().map(|path| map_ring(path, &mut map_fn)).collect() },
            Geometry::Polygon { rings }         => Geometry::Polygon { rings: rings.iter().map(|ring| map_ring(ring, &mut map_fn)).collect() },

            Geometry::Extent { xmin, ymin, xmax, ymax } => {
                let (x1, y1) = map_fn(*xmin, *ymin);
                let (x2, y2) = map_fn(*xmax, *ymax);

                Geometry::Extent { xmin: x1.min(x2), ymin: y1.min(y2), xmax: x1.max(x2), ymax: y1.max(y2) }
            }
        }
    }
}

///
/// A geometry along with the spatial reference its coordinates are in
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct SpatialGeometry {
    pub spatial_reference:  SpatialReference,
    pub geometry:           Geometry,
}

impl SpatialGeometry {
    ///
    /// Creates a geometry in a particular spatial reference
    ///
    pub fn new(spatial_reference: SpatialReference, geometry: Geometry) -> SpatialGeometry {
        SpatialGeometry { spatial_reference, geometry }
    }
}
