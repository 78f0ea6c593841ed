use glow_pipeline::ZoneGrid;

#[test]
fn test_row_major_layout() {
    let grid = ZoneGrid::from_fn(2, 3, |row, col| row * 10 + col);
    assert_eq!(grid.values(), &[0, 1, 2, 10, 11, 12]);
    assert_eq!(grid.get(1, 2), Some(&12));
    assert_eq!(grid.get(2, 0), None);
    assert_eq!(grid.get(0, 3), None);
    assert_eq!(grid.len(), 6);
}

#[test]
fn test_iter_yields_coordinates() {
    let grid = ZoneGrid::from_fn(2, 2, |row, col| (row, col));
    for (coord, value) in grid.iter() {
        assert_eq!(coord, *value);
    }
    assert_eq!(grid.iter().count(), 4);
}

#[test]
fn test_get_mut() {
    let mut grid = ZoneGrid::filled(2, 2, 0u8);
    *grid.get_mut(1, 0).unwrap() = 7;
    assert_eq!(grid.values(), &[0, 0, 7, 0]);
    assert!(grid.get_mut(5, 5).is_none());
}

#[test]
fn test_shape() {
    let a = ZoneGrid::filled(3, 2, 0.0f64);
    let b = ZoneGrid::filled(3, 2, "x");
    let c = ZoneGrid::filled(2, 3, 0.0f64);
    assert!(a.same_shape(&b));
    assert!(!a.same_shape(&c));
    assert!(ZoneGrid::<u8>::filled(0, 4, 0).is_empty());
}

#[test]
fn test_debug_prints_rows() {
    let grid = ZoneGrid::from_fn(2, 2, |row, col| row * 2 + col);
    assert_eq!(format!("{grid:?}"), "[[0, 1], [2, 3]]");
}
