use super::tile::*;
use super::geometry::*;

use flo_mask_canvas::*;

///
/// The number of times the full opacity of the mask is removed over the width of the falloff band
///
/// Higher values make the soft edge reach full transparency closer to the geometry
///
const FALLOFF_STEPS: f64 = 3.0;

///
/// Generates the mask image for a single tile
///
/// The surface is filled with the mask colour at full opacity, and then the area around the geometry is
/// progressively carved away using the `DestinationOut` blend mode: a set of strokes (or discs for point
/// geometry) that get narrower each time, each of which removes `3 / distance` of the remaining opacity. The
/// result is a soft edge that is fully transparent on the geometry and fades back to the mask colour
/// `distance` pixels away from it. The interior of every polygon ring (including holes) is carved away completely.
///
/// If there is no geometry, the whole tile is cleared (nothing is masked). If the distance is 0, the tile is
/// filled with the mask colour and nothing is carved.
///
pub fn rasterize_mask(target: &mut dyn DrawingSurface, tile_bounds: TileBounds, geometry: Option<&Geometry>, distance: f64, color: Color) {
    target.clear();

    let geometry = match geometry {
        Some(geometry)  => geometry,
        None            => { return; }
    };

    // The alpha of the colour is applied when the tile is composited, so the mask itself is opaque
    target.fill_all(color.with_alpha(1.0), BlendMode::SourceOver);

    if !(distance > 0.0) || !distance.is_finite() {
        return;
    }

    let TileBounds(xmin, ymin, xmax, ymax) = tile_bounds;
    if !(xmax > xmin) || !(ymax > ymin) {
        return;
    }

    let (width, height) = target.size();
    let to_pixel        = |x: f64, y: f64| tile_bounds.to_pixel(x, y, width, height);
    let unmask_step     = (FALLOFF_STEPS / distance).min(1.0) as f32;
    let unmask          = Color::Rgba(0.0, 0.0, 0.0, unmask_step);
    let num_steps       = distance.floor() as usize;

    if let Some(points) = geometry.points() {
        // Points are carved as discs around the pixel that contains them
        let pixels = points.into_iter()
            .map(|(x, y)| to_pixel(x, y))
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .map(|(x, y)| (x.floor(), y.floor()))
            .collect::<Vec<_>>();

        // Each disc is carved separately, so overlapping discs carve the overlap twice
        for step in 1..=num_steps {
            let radius = ((distance + 1.0 - (step as f64)) / 2.0).round_ties_even();

            for (x, y) in pixels.iter() {
                target.fill_path(&[pixel_disc(*x, *y, radius)], WindingRule::NonZero, unmask, BlendMode::DestinationOut);
            }
        }
    } else {
        // Lines and areas are carved by stroking their outline
        let (rings, is_area) = match geometry {
            Geometry::Polyline { paths }    => (paths.clone(), false),
            other                           => (other.to_polygon_rings().unwrap_or_default(), true),
        };

        let subpaths = rings.iter()
            .map(|ring| ring.iter().map(|(x, y)| {
                let (x, y) = to_pixel(*x, *y);
                Coord2(x.round(), y.round())
            }))
            .map(|points| if is_area { Subpath::closed(points) } else { Subpath::open(points) })
            .collect::<Vec<_>>();

        // Every ring is carved as a shape of its own, so holes are carved as well
        for step in 1..=num_steps {
            let stroke = StrokeStyle::round(distance + 1.0 - (step as f64));

            for ring in subpaths.iter() {
                target.stroke_path(std::slice::from_ref(ring), &stroke, unmask, BlendMode::DestinationOut);
            }
        }

        if is_area {
            for ring in subpaths.iter() {
                target.fill_path(std::slice::from_ref(ring), WindingRule::NonZero, Color::Rgba(0.0, 0.0, 0.0, 1.0), BlendMode::DestinationOut);
            }
        }
    }
}

///
/// The disc covering the pixels within `radius` whole pixels of the pixel with its top-left corner at (x, y)
///
fn pixel_disc(x: f64, y: f64, radius: f64) -> Subpath {
    if radius <= 0.0 {
        rect_path(x, y, x + 1.0, y + 1.0)
    } else {
        circle_path(x + 0.5, y + 0.5, radius + 0.5)
    }
}
