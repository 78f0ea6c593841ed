use glow_pipeline::{ZoneArea, zone_area, zone_areas};

const EPSILON: f64 = 1e-9;

fn assert_area(got: ZoneArea, left: f64, right: f64, top: f64, bottom: f64) {
    assert!((got.left - left).abs() < EPSILON, "{got:?}");
    assert!((got.right - right).abs() < EPSILON, "{got:?}");
    assert!((got.top - top).abs() < EPSILON, "{got:?}");
    assert!((got.bottom - bottom).abs() < EPSILON, "{got:?}");
}

#[test]
fn test_even_grid_tiles_exactly() {
    assert_area(zone_area(2, 2, 0, 0), -1.0, 0.0, 1.0, 0.0);
    assert_area(zone_area(2, 2, 0, 1), 0.0, 1.0, 1.0, 0.0);
    assert_area(zone_area(2, 2, 1, 0), -1.0, 0.0, 0.0, -1.0);
    assert_area(zone_area(2, 2, 1, 1), 0.0, 1.0, 0.0, -1.0);
}

#[test]
fn test_odd_grid_overlaps() {
    let w = 2.0 / 3.0 + 0.01;
    assert_area(zone_area(3, 3, 0, 0), -1.0, -1.0 + w, 1.0, 1.0 - w);
    assert_area(zone_area(3, 3, 2, 2), -1.0 + 2.0 * w, -1.0 + 3.0 * w, 1.0 - 2.0 * w, 1.0 - 3.0 * w);
    // the far edges reach past the plane
    assert!(zone_area(3, 3, 2, 2).right > 1.0);
    assert!(zone_area(3, 3, 2, 2).bottom < -1.0);
}

#[test]
fn test_axes_are_independent() {
    // one row (odd, so it overlaps) by four columns
    assert_area(zone_area(1, 4, 0, 3), 0.5, 1.0, 1.0, -1.01);
}

#[test]
fn test_grid_of_areas() {
    let areas = zone_areas(2, 3);
    assert_eq!(areas.rows(), 2);
    assert_eq!(areas.cols(), 3);
    for ((row, col), area) in areas.iter() {
        assert_eq!(*area, zone_area(2, 3, row, col));
        assert!(area.left < area.right);
        assert!(area.bottom < area.top);
    }
}
