use crate::ZoneGrid;

/// Overlap added to each slice when the zone count along an axis is odd.
pub const ODD_OVERLAP: f64 = 0.01;

/// A zone's slice of the light sink's spatial plane.
///
/// The plane spans `[-1, 1]` on both axes, x growing to the right and y
/// growing upwards, so `top > bottom`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoneArea {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

fn slice(count: usize) -> f64 {
    let size = 2.0 / count as f64;
    if count % 2 == 1 { size + ODD_OVERLAP } else { size }
}

/// Area covered by zone `(row, col)` of a `rows × cols` grid.
pub fn zone_area(rows: usize, cols: usize, row: usize, col: usize) -> ZoneArea {
    let width = slice(cols);
    let height = slice(rows);
    let left = -1.0 + col as f64 * width;
    let top = 1.0 - row as f64 * height;
    ZoneArea {
        left,
        right: left + width,
        top,
        bottom: top - height,
    }
}

pub fn zone_areas(rows: usize, cols: usize) -> ZoneGrid<ZoneArea> {
    ZoneGrid::from_fn(rows, cols, |row, col| zone_area(rows, cols, row, col))
}
