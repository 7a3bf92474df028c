use super::tile::*;
use super::dirty::*;
use super::error::*;
use super::geometry::*;
use super::settings::*;
use super::compositor::*;
use super::projection::*;
use super::properties::*;
use super::tile_cache::*;

use flo_binding::*;
use flo_mask_canvas::*;

use futures::prelude::*;
use futures::future::{BoxFuture, Shared};

use std::sync::*;
use std::sync::atomic::{AtomicU64, Ordering};

///
/// Callbacks into whatever is displaying a layer view
///
pub trait LayerHost : Send + Sync {
    ///
    /// Requests that the layer is rendered again (the host will call `render()` on its next frame)
    ///
    fn request_render(&self);

    ///
    /// Runs a background task on behalf of the layer
    ///
    fn spawn_task(&self, task: BoxFuture<'static, ()>);
}

///
/// The surface and view state for rendering a single frame
///
pub struct FrameContext<'a> {
    /// The surface to draw the frame on
    pub surface:    &'a mut dyn DrawingSurface,

    /// The state of the view being drawn
    pub view:       &'a ViewState,
}

///
/// A view of a layer that draws itself as a set of tiles
///
pub trait LayerView {
    ///
    /// Called when the view is added to a host, which will start displaying it
    ///
    fn attach(&mut self, host: Arc<dyn LayerHost>);

    ///
    /// Called when the view is removed from its host
    ///
    fn detach(&mut self);

    ///
    /// Indicates that the set of visible tiles has changed
    ///
    fn tiles_changed(&mut self, tiles: &[TileDescriptor]);

    ///
    /// Draws a frame
    ///
    fn render(&mut self, context: &mut FrameContext) -> Result<(), MaskError>;
}

///
/// The most recently projected geometry, along with the request that produced it
///
struct ProjectedGeometry {
    generation: u64,
    geometry:   Option<Arc<Geometry>>,
}

type LoadFuture = Shared<BoxFuture<'static, Result<(), ProjectionError>>>;

///
/// Projects the geometry of a layer into the tile grid's spatial reference whenever it changes
///
/// Every change is given a new generation number. Projection happens in the background, so results can
/// arrive in any order: a result is only stored if no newer change has been made since it was requested.
///
#[derive(Clone)]
struct GeometryProjector {
    geometry:   Binding<Option<SpatialGeometry>>,
    projection: Arc<dyn ProjectionService>,
    loaded:     LoadFuture,
    target:     SpatialReference,
    projected:  Arc<Mutex<ProjectedGeometry>>,
    requests:   Arc<AtomicU64>,
    dirty:      Arc<DirtyFlag>,
    host:       Arc<dyn LayerHost>,
}

impl GeometryProjector {
    ///
    /// Starts projecting the current value of the geometry property
    ///
    fn geometry_changed(&self) {
        let generation = self.requests.fetch_add(1, Ordering::AcqRel) + 1;

        match self.geometry.get() {
            None            => self.store(generation, None),
            Some(geometry)  => {
                let projector = self.clone();

                self.host.spawn_task(async move {
                    match projector.project(&geometry).await {
                        Ok(projected)   => projector.store(generation, Some(Arc::new(projected))),
                        Err(err)        => log::error!("Could not project the mask geometry: {}", err),
                    }
                }.boxed());
            }
        }
    }

    ///
    /// Waits for the projection service to load, then projects a geometry
    ///
    async fn project(&self, geometry: &SpatialGeometry) -> Result<Geometry, ProjectionError> {
        self.loaded.clone().await?;

        let transformation = self.projection.transformation(geometry.spatial_reference, self.target)?;
        self.projection.project(&geometry.geometry, self.target, &transformation)
    }

    ///
    /// Stores the result of a projection request, if it's still the latest request
    ///
    fn store(&self, generation: u64, geometry: Option<Arc<Geometry>>) {
        if generation != self.requests.load(Ordering::Acquire) {
            log::debug!("Discarding projected geometry from request {} (superseded)", generation);
            return;
        }

        {
            let mut projected = self.projected.lock().unwrap_or_else(|err| err.into_inner());
            if generation < projected.generation {
                log::debug!("Discarding projected geometry from request {} (superseded)", generation);
                return;
            }

            projected.generation    = generation;
            projected.geometry      = geometry;
        }

        self.dirty.mark();
        self.host.request_render();
    }
}

///
/// Layer view that generates a soft-edged mask around a geometry
///
/// The tile images are cached, and are only regenerated when the geometry, colour or distance of the layer
/// changes (or when a tile first becomes visible).
///
pub struct MaskLayerView {
    /// The properties that the mask is generated from
    properties:         MaskLayerProperties,

    /// Service used to convert the geometry into the tile grid's spatial reference
    projection:         Arc<dyn ProjectionService>,

    /// The spatial reference of the tile grid
    tile_reference:     SpatialReference,

    /// The images for the visible tiles
    cache:              TileImageCache,

    /// Set when the tile images need to be regenerated
    dirty:              Arc<DirtyFlag>,

    /// The tiles that are currently visible
    tiles:              Vec<TileDescriptor>,

    /// The geometry in the tile grid's spatial reference
    projected:          Arc<Mutex<ProjectedGeometry>>,

    /// Generation of the most recent projection request
    projection_requests: Arc<AtomicU64>,

    /// Notifications for the layer properties (released when the view is detached)
    watchers:           Vec<Box<dyn Releasable>>,

    /// The host that the view is attached to
    host:               Option<Arc<dyn LayerHost>>,
}

impl MaskLayerView {
    ///
    /// Creates a view of a mask layer
    ///
    pub fn new(settings: &LayerSettings, properties: MaskLayerProperties, projection: Arc<dyn ProjectionService>) -> MaskLayerView {
        MaskLayerView {
            properties:             properties,
            projection:             projection,
            tile_reference:         settings.tile_info.spatial_reference,
            cache:                  TileImageCache::new(settings.tile_info.size),
            dirty:                  Arc::new(DirtyFlag::new()),
            tiles:                  vec![],
            projected:              Arc::new(Mutex::new(ProjectedGeometry { generation: 0, geometry: None })),
            projection_requests:    Arc::new(AtomicU64::new(0)),
            watchers:               vec![],
            host:                   None,
        }
    }

    ///
    /// The properties of the layer this is a view of
    ///
    pub fn properties(&self) -> &MaskLayerProperties {
        &self.properties
    }

    ///
    /// The cached tile images
    ///
    pub fn cache(&self) -> &TileImageCache {
        &self.cache
    }

    ///
    /// True if the tile images are waiting to be regenerated
    ///
    pub fn is_dirty(&self) -> bool {
        self.dirty.is_set()
    }

    ///
    /// True if the view is attached to a host
    ///
    pub fn is_attached(&self) -> bool {
        self.host.is_some()
    }

    ///
    /// The most recently projected geometry (None if there's no geometry or the projection hasn't finished)
    ///
    pub fn projected_geometry(&self) -> Option<Arc<Geometry>> {
        self.projected.lock().unwrap_or_else(|err| err.into_inner()).geometry.clone()
    }
}

impl LayerView for MaskLayerView {
    fn attach(&mut self, host: Arc<dyn LayerHost>) {
        self.detach();

        let projector = GeometryProjector {
            geometry:   self.properties.geometry.clone(),
            projection: Arc::clone(&self.projection),
            loaded:     self.projection.load().shared(),
            target:     self.tile_reference,
            projected:  Arc::clone(&self.projected),
            requests:   Arc::clone(&self.projection_requests),
            dirty:      Arc::clone(&self.dirty),
            host:       Arc::clone(&host),
        };

        let style_changed = {
            let dirty   = Arc::clone(&self.dirty);
            let host    = Arc::clone(&host);

            move || {
                dirty.mark();
                host.request_render();
            }
        };

        let geometry_watch = {
            let projector = projector.clone();
            self.properties.geometry.when_changed(notify(move || projector.geometry_changed()))
        };
        let color_watch     = self.properties.color.when_changed(notify(style_changed.clone()));
        let distance_watch  = self.properties.distance.when_changed(notify(style_changed.clone()));

        self.watchers   = vec![geometry_watch, color_watch, distance_watch];
        self.host       = Some(host);

        // Start from the current state of the properties
        projector.geometry_changed();
        style_changed();
    }

    fn detach(&mut self) {
        for mut watcher in self.watchers.drain(..) {
            watcher.done();
        }

        // Any projection still in progress belongs to the old host
        if self.host.take().is_some() {
            self.projection_requests.fetch_add(1, Ordering::AcqRel);
        }
    }

    fn tiles_changed(&mut self, tiles: &[TileDescriptor]) {
        self.tiles = tiles.to_vec();
    }

    fn render(&mut self, context: &mut FrameContext) -> Result<(), MaskError> {
        let properties  = &self.properties;
        let projected   = &self.projected;

        self.cache.maintain(&self.tiles, &self.dirty, || {
            MaskParameters {
                geometry:   projected.lock().unwrap_or_else(|err| err.into_inner()).geometry.clone(),
                distance:   properties.distance_range().clamp(properties.distance.get()),
                color:      properties.color.get(),
            }
        })?;

        let alpha = self.properties.color.get().alpha_component();
        composite_tiles(&mut *context.surface, context.view, &self.tiles, &self.cache, alpha);

        Ok(())
    }
}

impl Drop for MaskLayerView {
    fn drop(&mut self) {
        self.detach();
    }
}
