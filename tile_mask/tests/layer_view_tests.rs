use flo_tile_mask::*;
use flo_tile_mask::canvas::*;
use flo_tile_mask::software::render::*;

use futures::prelude::*;
use futures::future::{BoxFuture, Shared};
use futures::executor;

use std::sync::*;
use std::sync::atomic::{AtomicUsize, Ordering};

///
/// Host that queues tasks until they're explicitly run
///
#[derive(Default)]
struct TestHost {
    tasks:          Mutex<Vec<BoxFuture<'static, ()>>>,
    render_requests: AtomicUsize,
}

impl TestHost {
    fn run_tasks(&self) {
        let tasks = self.tasks.lock().unwrap().drain(..).collect::<Vec<_>>();

        for task in tasks {
            executor::block_on(task);
        }
    }

    fn take_tasks(&self) -> Vec<BoxFuture<'static, ()>> {
        self.tasks.lock().unwrap().drain(..).collect()
    }

    fn render_requests(&self) -> usize {
        self.render_requests.load(Ordering::SeqCst)
    }
}

impl LayerHost for TestHost {
    fn request_render(&self) {
        self.render_requests.fetch_add(1, Ordering::SeqCst);
    }

    fn spawn_task(&self, task: BoxFuture<'static, ()>) {
        self.tasks.lock().unwrap().push(task);
    }
}

///
/// Projection service that only finishes loading when told to
///
struct DelayedProjection {
    loaded: Mutex<Shared<BoxFuture<'static, Result<(), ProjectionError>>>>,
    sender: Mutex<Option<futures::channel::oneshot::Sender<()>>>,
    inner:  WebMercatorProjection,
}

impl DelayedProjection {
    fn new() -> DelayedProjection {
        let (sender, receiver)  = futures::channel::oneshot::channel::<()>();
        let inner               = WebMercatorProjection::new();
        let inner_load          = inner.load();

        let loaded = async move {
            match receiver.await {
                Ok(())  => inner_load.await,
                Err(_)  => Err(ProjectionError::Failed("load cancelled".to_string())),
            }
        }.boxed().shared();

        DelayedProjection {
            loaded: Mutex::new(loaded),
            sender: Mutex::new(Some(sender)),
            inner:  inner,
        }
    }

    fn finish_loading(&self) {
        if let Some(sender) = self.sender.lock().unwrap().take() {
            sender.send(()).unwrap();
        }
    }
}

impl ProjectionService for DelayedProjection {
    fn load(&self) -> BoxFuture<'static, Result<(), ProjectionError>> {
        self.loaded.lock().unwrap().clone().boxed()
    }

    fn transformation(&self, source: SpatialReference, target: SpatialReference) -> Result<Transformation, ProjectionError> {
        self.inner.transformation(source, target)
    }

    fn project(&self, geometry: &Geometry, target: SpatialReference, transformation: &Transformation) -> Result<Geometry, ProjectionError> {
        self.inner.project(geometry, target, transformation)
    }
}

fn settings() -> LayerSettings {
    LayerSettings {
        tile_info: TileInfo { size: (32, 32), spatial_reference: SpatialReference::WEB_MERCATOR },
        ..LayerSettings::default()
    }
}

fn tiles() -> Vec<TileDescriptor> {
    (0..2).map(|col| TileDescriptor::for_grid(0, 0, col, (0.0, 32.0), 1.0, (32, 32))).collect()
}

fn view() -> ViewState {
    ViewState { size: (64.0, 32.0), center: (32.0, 16.0), resolution: 1.0, rotation: 0.0, pixel_ratio: 1.0 }
}

fn point() -> SpatialGeometry {
    SpatialGeometry::new(SpatialReference::WEB_MERCATOR, Geometry::Point { x: 16.0, y: 16.0 })
}

fn render(layer: &mut MaskLayerView) -> RgbaBitmap {
    let mut output  = RgbaBitmap::try_new(64, 32).unwrap();
    let view        = view();

    {
        let mut frame   = RgbaFrame::from_bitmap(&mut output);
        let mut context = FrameContext { surface: &mut frame, view: &view };

        layer.render(&mut context).unwrap();
    }

    output
}

fn attached_layer() -> (MaskLayerView, MaskLayerProperties, Arc<TestHost>) {
    let _ = env_logger::builder().is_test(true).try_init();

    let settings    = settings();
    let properties  = MaskLayerProperties::new(&settings);
    let host        = Arc::new(TestHost::default());
    let mut layer   = MaskLayerView::new(&settings, properties.clone(), Arc::new(WebMercatorProjection::new()));

    layer.attach(host.clone());
    layer.tiles_changed(&tiles());

    (layer, properties, host)
}

#[test]
fn attach_requests_render() {
    let (layer, _properties, host) = attached_layer();

    assert!(layer.is_attached());
    assert!(layer.is_dirty());
    assert!(host.render_requests() > 0);
}

#[test]
fn no_geometry_renders_nothing() {
    let (mut layer, _properties, _host) = attached_layer();
    let output = render(&mut layer);

    assert!(output.pixels().iter().all(|byte| *byte == 0));
    assert!(layer.cache().len() == 2);
    assert!(!layer.is_dirty());
}

#[test]
fn geometry_is_projected_in_the_background() {
    let (mut layer, properties, host) = attached_layer();
    render(&mut layer);

    properties.set_geometry(Some(point()));

    // Nothing changes until the projection task has run
    assert!(layer.projected_geometry().is_none());

    let requests_before = host.render_requests();
    host.run_tasks();

    assert!(layer.projected_geometry().as_deref() == Some(&Geometry::Point { x: 16.0, y: 16.0 }));
    assert!(layer.is_dirty());
    assert!(host.render_requests() > requests_before);

    // The mask is opaque apart from around the point (composited at 100% opacity)
    let output = render(&mut layer);
    assert!(output.alpha(16, 16) < 255, "Alpha is {}", output.alpha(16, 16));
    assert!(output.alpha(48, 16) == 255, "Alpha is {}", output.alpha(48, 16));
}

#[test]
fn geographic_geometry_is_projected_to_web_mercator() {
    let (layer, properties, host) = attached_layer();

    properties.set_geometry(Some(SpatialGeometry::new(SpatialReference::WGS84, Geometry::Point { x: 180.0, y: 0.0 })));
    host.run_tasks();

    match layer.projected_geometry().as_deref() {
        Some(Geometry::Point { x, y })  => {
            assert!((x - 20037508.342789244).abs() < 1e-6, "x = {}", x);
            assert!(y.abs() < 1e-6, "y = {}", y);
        }

        other => assert!(false, "Unexpected geometry {:?}", other),
    }
}

#[test]
fn stale_projection_is_discarded() {
    let settings    = settings();
    let properties  = MaskLayerProperties::new(&settings);
    let host        = Arc::new(TestHost::default());
    let projection  = Arc::new(DelayedProjection::new());
    let mut layer   = MaskLayerView::new(&settings, properties.clone(), projection.clone());

    layer.attach(host.clone());

    // Two changes are made before the projection service has loaded
    properties.set_geometry(Some(point()));
    let first_tasks = host.take_tasks();

    let second = SpatialGeometry::new(SpatialReference::WEB_MERCATOR, Geometry::Point { x: 1.0, y: 2.0 });
    properties.set_geometry(Some(second));
    let second_tasks = host.take_tasks();

    projection.finish_loading();

    // Newest first: the older request finishing later must not replace it
    for task in second_tasks.into_iter().chain(first_tasks) {
        executor::block_on(task);
    }

    assert!(layer.projected_geometry().as_deref() == Some(&Geometry::Point { x: 1.0, y: 2.0 }), "Projected geometry is {:?}", layer.projected_geometry());
}

#[test]
fn clearing_geometry_is_immediate() {
    let (mut layer, properties, host) = attached_layer();

    properties.set_geometry(Some(point()));
    host.run_tasks();
    render(&mut layer);

    properties.set_geometry(None);

    assert!(layer.projected_geometry().is_none());
    assert!(layer.is_dirty());

    let output = render(&mut layer);
    assert!(output.pixels().iter().all(|byte| *byte == 0));
}

#[test]
fn color_change_regenerates_tiles() {
    let (mut layer, properties, host) = attached_layer();
    properties.set_geometry(Some(point()));
    host.run_tasks();
    render(&mut layer);

    let count_before    = layer.cache().regeneration_count();
    let requests_before = host.render_requests();

    properties.set_color(Color::Rgba(1.0, 0.0, 0.0, 0.5));

    assert!(layer.is_dirty());
    assert!(host.render_requests() > requests_before);

    let output = render(&mut layer);
    assert!(layer.cache().regeneration_count() == count_before + 2, "Count is {}", layer.cache().regeneration_count());

    // The colour's alpha is applied while compositing
    let [r, g, b, a] = output.pixel(48, 16);
    assert!(a >= 127 && a <= 128, "Pixel is {:?}", output.pixel(48, 16));
    assert!(r == a && g == 0 && b == 0, "Pixel is {:?}", output.pixel(48, 16));
}

#[test]
fn distance_change_regenerates_tiles() {
    let (mut layer, properties, host) = attached_layer();
    properties.set_geometry(Some(point()));
    host.run_tasks();

    properties.set_distance(2.0);
    let narrow = render(&mut layer);

    properties.set_distance(12.0);
    assert!(layer.is_dirty());
    let wide = render(&mut layer);

    assert!(narrow.alpha(22, 16) == 255, "Alpha is {}", narrow.alpha(22, 16));
    assert!(wide.alpha(22, 16) < 255, "Alpha is {}", wide.alpha(22, 16));
}

#[test]
fn clean_render_regenerates_nothing() {
    let (mut layer, properties, host) = attached_layer();
    properties.set_geometry(Some(point()));
    host.run_tasks();

    let first   = render(&mut layer);
    let count   = layer.cache().regeneration_count();
    let second  = render(&mut layer);

    assert!(layer.cache().regeneration_count() == count);
    assert!(first == second);
}

#[test]
fn scrolling_evicts_tiles() {
    let (mut layer, _properties, _host) = attached_layer();
    render(&mut layer);

    let scrolled = vec![TileDescriptor::for_grid(0, 0, 7, (0.0, 32.0), 1.0, (32, 32))];
    layer.tiles_changed(&scrolled);
    render(&mut layer);

    assert!(layer.cache().len() == 1);
    assert!(layer.cache().contains(&scrolled[0].id));
}

#[test]
fn detached_view_ignores_changes() {
    let (mut layer, properties, host) = attached_layer();
    render(&mut layer);

    layer.detach();
    let requests_before = host.render_requests();

    properties.set_color(Color::Rgba(1.0, 0.0, 0.0, 1.0));
    properties.set_geometry(Some(point()));
    host.run_tasks();

    assert!(!layer.is_attached());
    assert!(!layer.is_dirty());
    assert!(layer.projected_geometry().is_none());
    assert!(host.render_requests() == requests_before);
}

#[test]
fn projection_failure_keeps_last_geometry() {
    let (layer, properties, host) = attached_layer();
    properties.set_geometry(Some(point()));
    host.run_tasks();

    // There's no transformation from this reference to the tile grid
    properties.set_geometry(Some(SpatialGeometry::new(SpatialReference { wkid: 27700 }, Geometry::Point { x: 0.0, y: 0.0 })));
    host.run_tasks();

    assert!(layer.projected_geometry().as_deref() == Some(&Geometry::Point { x: 16.0, y: 16.0 }));
}
