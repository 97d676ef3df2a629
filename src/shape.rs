//! Polyomino shapes and the generation of their distinct orientations.
//!
//! A [`Shape`] is a set of occupied [`Cell`]s, always stored normalized so
//! that its minimum row and minimum column are both zero. Two shapes are
//! equal exactly when their normalized cell sets are equal, which is what
//! lets [`orientations`] collapse symmetric variants with a plain
//! sort-and-dedup.

use core::fmt;

/// A `(row, column)` coordinate.
///
/// Cells carry no bounds of their own. They are used both for the cells of a
/// shape relative to its top-left corner and for absolute positions inside a
/// region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Zero-based row.
    pub row: isize,
    /// Zero-based column.
    pub col: isize,
}

impl Cell {
    /// Create a new cell at the given row and column.
    pub const fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }
}

impl From<(isize, isize)> for Cell {
    fn from((row, col): (isize, isize)) -> Self {
        Self { row, col }
    }
}

/// The occupied cells of one orientation of a piece.
///
/// Cells are kept sorted in row-major order without duplicates, and shifted so
/// that the smallest row and column are zero. `height` and `width` describe the
/// tight bounding box.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Shape {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Shape {
    /// Create a new shape from an arbitrary collection of cells.
    ///
    /// The cells do not need to be normalized and may contain duplicates.
    ///
    /// # Panics
    ///
    /// Panics if `cells` is empty.
    pub fn new(cells: impl IntoIterator<Item = Cell>) -> Self {
        let mut cells: Vec<Cell> = cells.into_iter().collect();
        assert!(!cells.is_empty(), "Shape must contain at least one cell.");

        let min_row = cells.iter().map(|cell| cell.row).min().unwrap_or(0);
        let min_col = cells.iter().map(|cell| cell.col).min().unwrap_or(0);

        for cell in &mut cells {
            cell.row -= min_row;
            cell.col -= min_col;
        }
        cells.sort_unstable();
        cells.dedup();

        let height = cells.iter().map(|cell| cell.row).max().unwrap_or(0) as usize + 1;
        let width = cells.iter().map(|cell| cell.col).max().unwrap_or(0) as usize + 1;

        Self {
            height,
            width,
            cells,
        }
    }

    /// Build a shape from rows of text, where `#` marks an occupied cell and
    /// every other character is empty.
    ///
    /// Returns `None` if no row contains a `#`.
    pub fn from_rows<I, S>(rows: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let cells: Vec<Cell> = rows
            .into_iter()
            .enumerate()
            .flat_map(|(row, line)| {
                line.as_ref()
                    .chars()
                    .enumerate()
                    .filter(|(_, c)| *c == '#')
                    .map(move |(col, _)| Cell::new(row as isize, col as isize))
                    .collect::<Vec<_>>()
            })
            .collect();

        if cells.is_empty() {
            None
        } else {
            Some(Self::new(cells))
        }
    }

    /// Height of the bounding box.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Width of the bounding box.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of occupied cells.
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    /// Occupied cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Rotate the shape by 90 degrees clockwise.
    pub fn rotate(&self) -> Self {
        Self::new(
            self.cells
                .iter()
                .map(|cell| Cell::new(cell.col, -cell.row)),
        )
    }

    /// Mirror the shape across its vertical axis.
    pub fn reflect(&self) -> Self {
        Self::new(
            self.cells
                .iter()
                .map(|cell| Cell::new(cell.row, -cell.col)),
        )
    }

    /// Render the bounding box as rows of `#` and `.` joined by newlines.
    pub fn render(&self) -> String {
        let mut rows = vec![vec!['.'; self.width]; self.height];
        for cell in &self.cells {
            rows[cell.row as usize][cell.col as usize] = '#';
        }

        rows.into_iter()
            .map(|row| row.into_iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl<const W: usize, const H: usize> From<[[u8; W]; H]> for Shape {
    fn from(arr: [[u8; W]; H]) -> Self {
        Self::new(arr.iter().enumerate().flat_map(|(row, values)| {
            values
                .iter()
                .enumerate()
                .filter(|(_, value)| **value != 0)
                .map(move |(col, _)| Cell::new(row as isize, col as isize))
        }))
    }
}

/// Available transformations for shapes during packing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ShapeTransform {
    /// No transformation applied to the shape.
    NoTransform,
    /// Allow rotations of the shape.
    PureRotation,
    /// Allow rotations and reflections of the shape.
    #[default]
    FullSymmetry,
}

/// Return every distinct orientation of `shape` reachable through the given
/// group of transformations.
///
/// The result is sorted and contains no two shapes with the same cell set. For
/// [`ShapeTransform::FullSymmetry`] its length is always 1, 2, 4 or 8.
pub fn orientations(shape: &Shape, transform: ShapeTransform) -> Vec<Shape> {
    let mut symmetries = generate_symmetries(shape, transform);
    symmetries.sort();
    symmetries.dedup();

    log::trace!(
        "Generated {} orientation(s) for shape:\n{}",
        symmetries.len(),
        shape
    );

    symmetries
}

fn generate_symmetries(shape: &Shape, transform: ShapeTransform) -> Vec<Shape> {
    match transform {
        ShapeTransform::NoTransform => vec![shape.clone()],
        ShapeTransform::PureRotation => generate_rotations(shape),
        ShapeTransform::FullSymmetry => {
            let mut symmetries = Vec::with_capacity(8);
            for rotation in generate_rotations(shape) {
                let reflection = rotation.reflect();
                symmetries.push(rotation);
                symmetries.push(reflection);
            }
            symmetries
        }
    }
}

fn generate_rotations(shape: &Shape) -> Vec<Shape> {
    let mut rotations = vec![shape.clone()];
    let mut current_shape = shape.clone();
    for _ in 0..3 {
        current_shape = current_shape.rotate();
        rotations.push(current_shape.clone());
    }
    rotations
}
