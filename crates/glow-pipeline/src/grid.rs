use std::fmt;

/// A `rows × cols` grid of per-zone values, stored row-major.
///
/// Row 0 is the top of the screen, column 0 the left edge. The dimensions
/// are fixed at construction.
#[derive(Clone, PartialEq)]
pub struct ZoneGrid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: fmt::Debug> fmt::Debug for ZoneGrid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for row in 0..self.rows {
            list.entry(&&self.cells[row * self.cols..(row + 1) * self.cols]);
        }
        list.finish()
    }
}

impl<T: Clone> ZoneGrid<T> {
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self {
            rows,
            cols,
            cells: vec![value; rows * cols],
        }
    }
}

impl<T> ZoneGrid<T> {
    /// Build a grid by evaluating `f(row, col)` for every zone.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(f(row, col));
            }
        }
        Self { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.cells.get(row * self.cols + col)
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if row < self.rows && col < self.cols {
            self.cells.get_mut(row * self.cols + col)
        } else {
            None
        }
    }

    /// `((row, col), value)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &T)> {
        let cols = self.cols.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, value)| ((i / cols, i % cols), value))
    }

    pub fn values(&self) -> &[T] {
        &self.cells
    }

    pub fn values_mut(&mut self) -> &mut [T] {
        &mut self.cells
    }

    pub fn same_shape<U>(&self, other: &ZoneGrid<U>) -> bool {
        self.rows == other.rows && self.cols == other.cols
    }
}
