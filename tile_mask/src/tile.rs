use std::fmt;

///
/// Identifies a tile at a particular position and zoom level
///
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct TileId(pub String);

impl TileId {
    ///
    /// Creates the ID for the tile at a level, row and column in the tile grid
    ///
    pub fn from_grid(level: u32, row: i64, col: i64) -> TileId {
        TileId(format!("{}/{}/{}", level, row, col))
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TileId {
    fn from(id: &str) -> TileId { TileId(id.to_string()) }
}

///
/// The map-space area covered by a tile, as `(xmin, ymin, xmax, ymax)`
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct TileBounds(pub f64, pub f64, pub f64, pub f64);

impl TileBounds {
    #[inline] pub fn xmin(&self) -> f64 { self.0 }
    #[inline] pub fn ymin(&self) -> f64 { self.1 }
    #[inline] pub fn xmax(&self) -> f64 { self.2 }
    #[inline] pub fn ymax(&self) -> f64 { self.3 }

    ///
    /// Maps a map-space coordinate to a pixel coordinate in a tile bitmap of the specified size
    ///
    /// Pixel rows run from the top of the tile, so the y axis is flipped
    ///
    #[inline]
    pub fn to_pixel(&self, x: f64, y: f64, width: usize, height: usize) -> (f64, f64) {
        let TileBounds(xmin, ymin, xmax, ymax) = *self;

        let px = (width as f64) * (x - xmin) / (xmax - xmin);
        let py = (height as f64) * (1.0 - (y - ymin) / (ymax - ymin));

        (px, py)
    }
}

///
/// Describes a tile that is visible in the view
///
/// Tile descriptors are supplied by whatever is displaying the layer every time the set of visible tiles
/// changes.
///
#[derive(Clone, PartialEq, Debug)]
pub struct TileDescriptor {
    /// Unique identifier for this tile's position and zoom level
    pub id:         TileId,

    /// The map-space area covered by the tile
    pub bounds:     TileBounds,

    /// Map units per pixel for this tile
    pub resolution: f64,

    /// Map-space coordinates of the top-left corner of the tile
    pub coords:     (f64, f64),
}

impl TileDescriptor {
    ///
    /// Creates a descriptor for the tile at a particular grid position
    ///
    /// `origin` is the map-space top-left corner of the tile grid and `tile_size` is the size of a tile in pixels
    ///
    pub fn for_grid(level: u32, row: i64, col: i64, origin: (f64, f64), resolution: f64, tile_size: (usize, usize)) -> TileDescriptor {
        let width   = (tile_size.0 as f64) * resolution;
        let height  = (tile_size.1 as f64) * resolution;
        let xmin    = origin.0 + (col as f64) * width;
        let ymax    = origin.1 - (row as f64) * height;

        TileDescriptor {
            id:         TileId::from_grid(level, row, col),
            bounds:     TileBounds(xmin, ymax - height, xmin + width, ymax),
            resolution: resolution,
            coords:     (xmin, ymax),
        }
    }
}

///
/// The state of the view that tiles are being drawn into
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ViewState {
    /// Size of the view in logical pixels
    pub size:           (f64, f64),

    /// Map-space coordinates of the center of the view
    pub center:         (f64, f64),

    /// Map units per logical pixel
    pub resolution:     f64,

    /// Rotation of the view in degrees (clockwise)
    pub rotation:       f64,

    /// Number of physical pixels per logical pixel
    pub pixel_ratio:    f64,
}

impl ViewState {
    ///
    /// Converts a map-space coordinate to a physical pixel position in the unrotated view
    ///
    pub fn to_screen_no_rotation(&self, coords: (f64, f64)) -> (f64, f64) {
        let (x, y)      = coords;
        let (cx, cy)    = self.center;
        let (w, h)      = self.size;

        let screen_x    = ((x - cx) / self.resolution + w / 2.0) * self.pixel_ratio;
        let screen_y    = ((cy - y) / self.resolution + h / 2.0) * self.pixel_ratio;

        (screen_x, screen_y)
    }

    ///
    /// The size of the view in physical pixels
    ///
    pub fn pixel_size(&self) -> (f64, f64) {
        (self.size.0 * self.pixel_ratio, self.size.1 * self.pixel_ratio)
    }
}
