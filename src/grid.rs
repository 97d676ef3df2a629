use crate::shape::Shape;

/// Occupancy state of a rectangular region during a packing search.
///
/// Cells are stored in row-major order, the cell at row `r` and column `c`
/// lives at index `r * width + c`. Every [`place`](Occupancy::place) made by
/// the search is paired with a [`remove`](Occupancy::remove) of the same shape
/// at the same anchor when that branch fails, so the grid is restored exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occupancy {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Occupancy {
    /// Create an empty grid of the given dimensions.
    ///
    /// # Panics
    ///
    /// Panics if `width * height` cells cannot be allocated.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width.saturating_mul(height)],
        }
    }

    /// Width of the grid.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the grid.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Return true if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| *cell)
    }

    /// Return true if `shape` anchored with its top-left corner at `(row, col)`
    /// lies inside the grid and covers only empty cells.
    pub fn fits(&self, shape: &Shape, row: usize, col: usize) -> bool {
        if row + shape.height() > self.height || col + shape.width() > self.width {
            return false;
        }

        shape
            .cells()
            .iter()
            .all(|cell| !self.cells[self.index(row, col, cell.row, cell.col)])
    }

    /// Mark the cells of `shape` anchored at `(row, col)` as occupied.
    ///
    /// The caller must have checked [`fits`](Occupancy::fits) first.
    pub fn place(&mut self, shape: &Shape, row: usize, col: usize) {
        self.set(shape, row, col, true);
    }

    /// Mark the cells of `shape` anchored at `(row, col)` as empty, undoing a
    /// previous [`place`](Occupancy::place).
    pub fn remove(&mut self, shape: &Shape, row: usize, col: usize) {
        self.set(shape, row, col, false);
    }

    fn set(&mut self, shape: &Shape, row: usize, col: usize, value: bool) {
        debug_assert!(row + shape.height() <= self.height && col + shape.width() <= self.width);
        for cell in shape.cells() {
            let index = self.index(row, col, cell.row, cell.col);
            debug_assert_ne!(self.cells[index], value, "Cell toggled twice.");
            self.cells[index] = value;
        }
    }

    // Shape cells are normalized, so the offsets are never negative.
    fn index(&self, row: usize, col: usize, row_offset: isize, col_offset: isize) -> usize {
        (row + row_offset as usize) * self.width + (col + col_offset as usize)
    }
}
