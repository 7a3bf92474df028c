use flo_tile_mask::*;
use flo_tile_mask::canvas::*;
use flo_tile_mask::software::render::*;

use futures::future::{BoxFuture};
use futures::executor;

use std::fs;
use std::sync::*;

///
/// A host that runs background tasks as soon as they're spawned
///
struct ImmediateHost;

impl LayerHost for ImmediateHost {
    fn request_render(&self) { }

    fn spawn_task(&self, task: BoxFuture<'static, ()>) {
        executor::block_on(task);
    }
}

///
/// Renders a mask around a triangle near London to a PNG file
///
pub fn main() {
    env_logger::init();

    let settings    = LayerSettings {
        tile_info:  TileInfo { size: (256, 256), spatial_reference: SpatialReference::WEB_MERCATOR },
        color:      Color::Rgba(0.05, 0.05, 0.2, 0.8),
        distance:   30.0,
        ..LayerSettings::default()
    };
    let properties  = MaskLayerProperties::new(&settings);
    let mut layer   = MaskLayerView::new(&settings, properties.clone(), Arc::new(WebMercatorProjection::new()));

    layer.attach(Arc::new(ImmediateHost));

    properties.set_geometry(Some(SpatialGeometry::new(SpatialReference::WGS84, Geometry::Polygon {
        rings: vec![vec![(-0.20, 51.48), (-0.05, 51.55), (0.02, 51.47), (-0.20, 51.48)]]
    })));

    // A 3x3 grid of tiles around the geometry at about 20m per pixel
    let resolution  = 19.109257071294063;
    let (cx, cy)    = geographic_to_web_mercator(-0.09, 51.5);
    let tile_span   = 256.0 * resolution;
    let origin      = (cx - tile_span * 1.5, cy + tile_span * 1.5);
    let tiles       = (0..3).flat_map(|row| (0..3).map(move |col| TileDescriptor::for_grid(14, row, col, origin, resolution, (256, 256))))
        .collect::<Vec<_>>();

    layer.tiles_changed(&tiles);

    let view = ViewState {
        size:           (768.0, 768.0),
        center:         (cx, cy),
        resolution:     resolution,
        rotation:       15.0,
        pixel_ratio:    1.0,
    };

    let mut output = match RgbaBitmap::try_new(768, 768) {
        Ok(bitmap)  => bitmap,
        Err(err)    => { eprintln!("{}", err); return; }
    };

    {
        let mut frame   = RgbaFrame::from_bitmap(&mut output);
        let mut context = FrameContext { surface: &mut frame, view: &view };

        if let Err(err) = layer.render(&mut context) {
            eprintln!("Could not render the mask: {}", err);
            return;
        }
    }

    let file = match fs::File::create("mask.png") {
        Ok(file)    => file,
        Err(err)    => { eprintln!("Could not create mask.png: {}", err); return; }
    };

    match write_png(&output, file) {
        Ok(())      => println!("Wrote mask.png"),
        Err(err)    => eprintln!("Could not write mask.png: {}", err),
    }
}
