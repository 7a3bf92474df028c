use flo_tile_mask::*;
use flo_tile_mask::canvas::*;
use flo_tile_mask::software::render::*;

fn mask(width: usize, height: usize, bounds: TileBounds, geometry: Option<&Geometry>, distance: f64) -> RgbaBitmap {
    let mut bitmap = RgbaBitmap::try_new(width, height).unwrap();
    rasterize_mask(&mut RgbaFrame::from_bitmap(&mut bitmap), bounds, geometry, distance, Color::Rgba(0.0, 0.0, 0.0, 0.8));

    bitmap
}

fn square(min: f64, max: f64) -> Geometry {
    Geometry::Polygon { rings: vec![vec![(min, min), (min, max), (max, max), (max, min), (min, min)]] }
}

#[test]
fn no_geometry_clears_tile() {
    let mut bitmap = RgbaBitmap::try_new(16, 16).unwrap();

    {
        let mut frame = RgbaFrame::from_bitmap(&mut bitmap);
        frame.fill_all(Color::Rgba(1.0, 0.0, 0.0, 1.0), BlendMode::SourceOver);
        rasterize_mask(&mut frame, TileBounds(0.0, 0.0, 16.0, 16.0), None, 10.0, Color::Rgba(0.0, 0.0, 0.0, 1.0));
    }

    assert!(bitmap.pixels().iter().all(|byte| *byte == 0), "Tile should be fully transparent");
}

#[test]
fn zero_distance_fills_without_carving() {
    let geometry    = square(4.0, 12.0);
    let bitmap      = mask(16, 16, TileBounds(0.0, 0.0, 16.0, 16.0), Some(&geometry), 0.0);

    for y in 0..16 {
        for x in 0..16 {
            assert!(bitmap.alpha(x, y) == 255, "Pixel at {}, {} has alpha {}", x, y, bitmap.alpha(x, y));
        }
    }
}

#[test]
fn invalid_distance_fills_without_carving() {
    let geometry = square(4.0, 12.0);

    for distance in [-5.0, f64::NAN, f64::INFINITY].iter() {
        let bitmap = mask(16, 16, TileBounds(0.0, 0.0, 16.0, 16.0), Some(&geometry), *distance);

        assert!(bitmap.alpha(8, 8) == 255, "Distance {} carved the mask", distance);
    }
}

#[test]
fn mask_uses_opaque_color() {
    // The alpha of the colour is applied when compositing, so the mask itself is opaque
    let mut bitmap = RgbaBitmap::try_new(4, 4).unwrap();
    let geometry    = Geometry::Point { x: 100.0, y: 100.0 };

    rasterize_mask(&mut RgbaFrame::from_bitmap(&mut bitmap), TileBounds(0.0, 0.0, 4.0, 4.0), Some(&geometry), 0.0, Color::Rgba(1.0, 0.0, 0.0, 0.25));

    assert!(bitmap.pixel(1, 1) == [255, 0, 0, 255], "Pixel is {:?}", bitmap.pixel(1, 1));
}

// A 16px square in the middle of a 64px tile: the corners of the tile are well outside the falloff band
// (see the polygon scenario notes in DESIGN.md)
#[test]
fn polygon_is_carved_with_soft_edge() {
    let geometry    = square(24.0, 40.0);
    let bitmap      = mask(64, 64, TileBounds(0.0, 0.0, 64.0, 64.0), Some(&geometry), 4.0);

    // Interior is fully carved
    assert!(bitmap.alpha(32, 32) == 0, "Center alpha is {}", bitmap.alpha(32, 32));
    assert!(bitmap.alpha(25, 38) == 0, "Interior alpha is {}", bitmap.alpha(25, 38));

    // Corners of the tile are far from the polygon
    for (x, y) in [(0, 0), (63, 0), (0, 63), (63, 63)].iter() {
        assert!(bitmap.alpha(*x, *y) == 255, "Corner {}, {} has alpha {}", x, y, bitmap.alpha(*x, *y));
    }

    // Just outside the edge is partly masked
    let edge = bitmap.alpha(41, 32);
    assert!(edge > 0 && edge < 255, "Edge alpha is {}", edge);

    // Further out is fully masked
    assert!(bitmap.alpha(43, 32) == 255, "Outside alpha is {}", bitmap.alpha(43, 32));
}

#[test]
fn falloff_increases_away_from_geometry() {
    let geometry    = square(24.0, 40.0);
    let bitmap      = mask(64, 64, TileBounds(0.0, 0.0, 64.0, 64.0), Some(&geometry), 8.0);
    let row         = (36..56).map(|x| bitmap.alpha(x, 32)).collect::<Vec<_>>();

    for idx in 1..row.len() {
        assert!(row[idx] >= row[idx-1], "Alpha decreases moving away from the polygon: {:?}", row);
    }

    assert!(row[0] == 0, "{:?}", row);
    assert!(row[row.len()-1] == 255, "{:?}", row);
}

#[test]
fn larger_distance_widens_the_band() {
    let geometry    = square(24.0, 40.0);
    let narrow      = mask(64, 64, TileBounds(0.0, 0.0, 64.0, 64.0), Some(&geometry), 2.0);
    let wide        = mask(64, 64, TileBounds(0.0, 0.0, 64.0, 64.0), Some(&geometry), 12.0);

    assert!(narrow.alpha(44, 32) == 255, "Alpha is {}", narrow.alpha(44, 32));
    assert!(wide.alpha(44, 32) < 255, "Alpha is {}", wide.alpha(44, 32));
}

#[test]
fn extent_matches_polygon() {
    let extent      = Geometry::Extent { xmin: 24.0, ymin: 24.0, xmax: 40.0, ymax: 40.0 };
    let polygon     = square(24.0, 40.0);

    let from_extent     = mask(64, 64, TileBounds(0.0, 0.0, 64.0, 64.0), Some(&extent), 6.0);
    let from_polygon    = mask(64, 64, TileBounds(0.0, 0.0, 64.0, 64.0), Some(&polygon), 6.0);

    assert!(from_extent.alpha(32, 32) == 0);
    assert!(from_extent.alpha(0, 0) == 255);
    assert!((0..64).all(|x| from_extent.alpha(x, 20) == from_polygon.alpha(x, 20)), "Extent and polygon masks differ");
}

#[test]
fn polyline_has_no_interior() {
    // An open 'U' shape: the middle is more than the distance away from every line
    let geometry    = Geometry::Polyline { paths: vec![vec![(8.0, 56.0), (8.0, 8.0), (56.0, 8.0), (56.0, 56.0)]] };
    let bitmap      = mask(64, 64, TileBounds(0.0, 0.0, 64.0, 64.0), Some(&geometry), 4.0);

    assert!(bitmap.alpha(32, 32) == 255, "Middle alpha is {}", bitmap.alpha(32, 32));
    assert!(bitmap.alpha(8, 32) < 32, "Line alpha is {}", bitmap.alpha(8, 32));
}

#[test]
fn point_with_distance_one_carves_one_pixel() {
    let geometry    = Geometry::Point { x: 5.5, y: 5.5 };
    let bitmap      = mask(11, 11, TileBounds(0.0, 0.0, 11.0, 11.0), Some(&geometry), 1.0);

    for y in 0..11 {
        for x in 0..11 {
            if (x, y) == (5, 5) {
                assert!(bitmap.alpha(x, y) == 0, "Point pixel has alpha {}", bitmap.alpha(x, y));
            } else {
                assert!(bitmap.alpha(x, y) == 255, "Pixel at {}, {} has alpha {}", x, y, bitmap.alpha(x, y));
            }
        }
    }
}

#[test]
fn polygon_hole_is_carved() {
    // The hole runs in the opposite direction to the outer ring
    let geometry = Geometry::Polygon { rings: vec![
        vec![(4.0, 4.0), (4.0, 60.0), (60.0, 60.0), (60.0, 4.0), (4.0, 4.0)],
        vec![(20.0, 20.0), (44.0, 20.0), (44.0, 44.0), (20.0, 44.0), (20.0, 20.0)],
    ] };
    let bitmap = mask(64, 64, TileBounds(0.0, 0.0, 64.0, 64.0), Some(&geometry), 2.0);

    assert!(bitmap.alpha(32, 32) == 0, "Hole alpha is {}", bitmap.alpha(32, 32));
    assert!(bitmap.alpha(10, 10) == 0, "Outer ring interior alpha is {}", bitmap.alpha(10, 10));
    assert!(bitmap.alpha(0, 0) == 255, "Corner alpha is {}", bitmap.alpha(0, 0));
}

#[test]
fn overlapping_points_are_carved_twice() {
    let single  = mask(64, 64, TileBounds(0.0, 0.0, 64.0, 64.0), Some(&Geometry::Point { x: 16.0, y: 16.0 }), 6.0);
    let double  = mask(64, 64, TileBounds(0.0, 0.0, 64.0, 64.0), Some(&Geometry::MultiPoint { points: vec![(16.0, 16.0), (16.0, 16.0)] }), 6.0);

    // 3 pixels from the point is inside the falloff band
    let single_alpha = single.alpha(19, 48);
    let double_alpha = double.alpha(19, 48);

    assert!(single_alpha < 255, "Single point alpha is {}", single_alpha);
    assert!(double_alpha < single_alpha, "Overlap alpha is {} (single point {})", double_alpha, single_alpha);
}

#[test]
fn multipoint_carves_around_each_point() {
    let geometry    = Geometry::MultiPoint { points: vec![(16.0, 48.0), (48.0, 16.0)] };
    let bitmap      = mask(64, 64, TileBounds(0.0, 0.0, 64.0, 64.0), Some(&geometry), 6.0);

    // Map y is flipped: (16, 48) is near the top-left of the tile, (48, 16) near the bottom-right
    assert!(bitmap.alpha(16, 16) < 64, "Alpha is {}", bitmap.alpha(16, 16));
    assert!(bitmap.alpha(48, 48) < 64, "Alpha is {}", bitmap.alpha(48, 48));
    assert!(bitmap.alpha(32, 32) == 255, "Alpha is {}", bitmap.alpha(32, 32));
}

#[test]
fn geometry_in_other_tile_leaves_mask_opaque() {
    let geometry    = square(24.0, 40.0);
    let bitmap      = mask(64, 64, TileBounds(1000.0, 1000.0, 1064.0, 1064.0), Some(&geometry), 4.0);

    assert!(bitmap.pixels().chunks(4).all(|pixel| pixel[3] == 255));
}

#[test]
fn rasterizing_is_deterministic() {
    let geometry    = Geometry::Polyline { paths: vec![vec![(3.3, 7.1), (40.2, 50.9), (60.0, 12.5)]] };
    let first       = mask(64, 64, TileBounds(0.0, 0.0, 64.0, 64.0), Some(&geometry), 7.0);
    let second      = mask(64, 64, TileBounds(0.0, 0.0, 64.0, 64.0), Some(&geometry), 7.0);

    assert!(first == second, "Rasterizing the same mask twice gave different results");

    // Rasterizing over an existing image gives the same result as a fresh one
    let mut reused = first.clone();
    rasterize_mask(&mut RgbaFrame::from_bitmap(&mut reused), TileBounds(0.0, 0.0, 64.0, 64.0), Some(&geometry), 7.0, Color::Rgba(0.0, 0.0, 0.0, 0.8));

    assert!(reused == first);
}
