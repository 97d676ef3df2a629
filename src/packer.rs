//! Backtracking search that places every piece required by a [`Region`].
//!
//! Pieces are placed one type at a time: the lowest-indexed piece type with
//! remaining quota is always the next one to place, and each of its
//! orientations is tried at every anchor in row-major order. A branch that
//! cannot be completed is undone before the next candidate is tried, so the
//! search is exhaustive and a negative answer means no packing exists.

use crate::{grid::Occupancy, region::PieceType, region::Region};

/// How much of a region the pieces have to cover.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CoverMode {
    /// The pieces must cover every cell of the region exactly once.
    Exact,
    /// The pieces must not overlap, but cells may be left empty.
    #[default]
    AllowGaps,
}

impl CoverMode {
    /// Return true if pieces with a total area of `required` could possibly be
    /// packed into a region with `capacity` cells under this mode.
    pub fn admits(self, required: usize, capacity: usize) -> bool {
        match self {
            CoverMode::Exact => required == capacity,
            CoverMode::AllowGaps => required <= capacity,
        }
    }
}

/// A single piece placed in a region by a successful search.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Placement {
    /// Index of the piece type in the piece list.
    pub piece_index: usize,
    /// Index of the orientation in the piece type's orientation list.
    pub orientation_index: usize,
    /// Row of the top-left corner of the orientation's bounding box.
    pub row: usize,
    /// Column of the top-left corner of the orientation's bounding box.
    pub col: usize,
    /// `(row, column)` coordinates of the region cells covered by the piece.
    pub occupied_cells: Vec<(usize, usize)>,
}

/// Decides whether regions can be packed with a fixed list of piece types.
///
/// The orientation data is only borrowed, so one set of [`PieceType`]s can be
/// shared by any number of packers, including across threads.
#[derive(Debug, Clone, Copy)]
pub struct Packer<'p> {
    pieces: &'p [PieceType],
    cover: CoverMode,
}

impl<'p> Packer<'p> {
    /// Create a new packer for the given piece types and cover mode.
    pub fn new(pieces: &'p [PieceType], cover: CoverMode) -> Self {
        Self { pieces, cover }
    }

    /// Total number of cells covered by the pieces the quota asks for.
    ///
    /// # Panics
    ///
    /// Panics if the quota names more piece types than this packer knows.
    pub fn required_area(&self, quota: &[usize]) -> usize {
        assert!(
            quota.len() <= self.pieces.len(),
            "Quota names more piece types than are defined."
        );

        quota
            .iter()
            .zip(self.pieces)
            .map(|(count, piece)| count.saturating_mul(piece.area()))
            .fold(0, usize::saturating_add)
    }

    /// Return true if the region passes the area check for this packer's
    /// cover mode. Regions failing it are never searched.
    pub fn admits(&self, region: &Region) -> bool {
        self.cover
            .admits(self.required_area(&region.quota), region.area())
    }

    /// Return true if every piece the region's quota asks for can be placed in
    /// the region without overlaps.
    pub fn can_pack(&self, region: &Region) -> bool {
        self.search(region, &mut Vec::new())
    }

    /// Return the placements of the first packing found for the region, or
    /// `None` if there is none.
    pub fn find_packing(&self, region: &Region) -> Option<Vec<Placement>> {
        let mut trail = Vec::new();
        if !self.search(region, &mut trail) {
            return None;
        }

        Some(
            trail
                .into_iter()
                .map(|anchor| self.to_placement(anchor))
                .collect(),
        )
    }

    fn search(&self, region: &Region, trail: &mut Vec<Anchor>) -> bool {
        if !self.admits(region) {
            log::debug!(
                "Region {}x{} rejected by area check ({} cells required).",
                region.width,
                region.height,
                self.required_area(&region.quota)
            );
            return false;
        }

        let mut grid = Occupancy::new(region.width, region.height);
        let mut remaining = region.quota.clone();

        let packed = place_next(self.pieces, &mut grid, &mut remaining, trail);
        debug_assert!(!packed || self.cover != CoverMode::Exact || grid.is_full());
        packed
    }

    fn to_placement(&self, anchor: Anchor) -> Placement {
        let shape = &self.pieces[anchor.piece_index].orientations()[anchor.orientation_index];
        let occupied_cells = shape
            .cells()
            .iter()
            .map(|cell| {
                (
                    anchor.row + cell.row as usize,
                    anchor.col + cell.col as usize,
                )
            })
            .collect();

        Placement {
            piece_index: anchor.piece_index,
            orientation_index: anchor.orientation_index,
            row: anchor.row,
            col: anchor.col,
            occupied_cells,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Anchor {
    piece_index: usize,
    orientation_index: usize,
    row: usize,
    col: usize,
}

/// Place the remaining pieces into `grid`, recursing once per placed piece.
///
/// Returns true as soon as every count in `remaining` reaches zero, leaving the
/// winning placements in `grid` and `trail`. On failure `grid`, `remaining` and
/// `trail` are left exactly as they were on entry.
pub(crate) fn place_next(
    pieces: &[PieceType],
    grid: &mut Occupancy,
    remaining: &mut [usize],
    trail: &mut Vec<Anchor>,
) -> bool {
    let Some(piece_index) = remaining.iter().position(|count| *count > 0) else {
        return true;
    };

    for (orientation_index, shape) in pieces[piece_index].orientations().iter().enumerate() {
        if shape.height() > grid.height() || shape.width() > grid.width() {
            continue;
        }

        for row in 0..=grid.height() - shape.height() {
            for col in 0..=grid.width() - shape.width() {
                if !grid.fits(shape, row, col) {
                    continue;
                }

                grid.place(shape, row, col);
                remaining[piece_index] -= 1;
                trail.push(Anchor {
                    piece_index,
                    orientation_index,
                    row,
                    col,
                });

                if place_next(pieces, grid, remaining, trail) {
                    return true;
                }

                trail.pop();
                remaining[piece_index] += 1;
                grid.remove(shape, row, col);
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{Shape, ShapeTransform};
    use std::collections::HashSet;

    fn pieces(shapes: Vec<Shape>) -> Vec<PieceType> {
        shapes
            .into_iter()
            .map(|shape| PieceType::new(shape, ShapeTransform::FullSymmetry))
            .collect()
    }

    fn l_tetromino() -> Shape {
        Shape::from([[1, 0], [1, 0], [1, 1]])
    }

    fn square() -> Shape {
        Shape::from([[1, 1], [1, 1]])
    }

    #[test]
    fn test_cover_mode_admits() {
        assert!(CoverMode::Exact.admits(4, 4));
        assert!(!CoverMode::Exact.admits(3, 4));
        assert!(!CoverMode::Exact.admits(5, 4));
        assert!(CoverMode::AllowGaps.admits(3, 4));
        assert!(CoverMode::AllowGaps.admits(4, 4));
        assert!(!CoverMode::AllowGaps.admits(5, 4));
    }

    #[test]
    fn test_required_area() {
        let pieces = pieces(vec![l_tetromino(), Shape::from([[1]])]);
        let packer = Packer::new(&pieces, CoverMode::Exact);
        assert_eq!(packer.required_area(&[2, 3]), 11);
        assert_eq!(packer.required_area(&[1]), 4);
        assert_eq!(packer.required_area(&[]), 0);
    }

    #[test]
    #[should_panic(expected = "Quota names more piece types than are defined.")]
    fn test_required_area_unknown_piece() {
        let pieces = pieces(vec![square()]);
        Packer::new(&pieces, CoverMode::Exact).required_area(&[1, 1]);
    }

    #[test]
    fn test_default_cover_allows_gaps() {
        assert_eq!(CoverMode::default(), CoverMode::AllowGaps);
    }

    #[test]
    fn test_required_area_saturates() {
        let pieces = pieces(vec![square(), Shape::from([[1]])]);
        let packer = Packer::new(&pieces, CoverMode::AllowGaps);
        assert_eq!(packer.required_area(&[usize::MAX, 1]), usize::MAX);
        assert!(!packer.admits(&Region::new(usize::MAX, 2, vec![usize::MAX, 1])));
    }

    #[test]
    fn test_single_cells_fill_square() {
        let pieces = pieces(vec![Shape::from([[1]])]);
        let packer = Packer::new(&pieces, CoverMode::Exact);
        assert!(packer.can_pack(&Region::new(2, 2, vec![4])));
    }

    #[test]
    fn test_area_mismatch_is_rejected() {
        let pieces = pieces(vec![Shape::from([[1, 1], [1, 0]])]);
        let region = Region::new(2, 2, vec![1]);

        assert!(!Packer::new(&pieces, CoverMode::Exact).can_pack(&region));
        assert!(Packer::new(&pieces, CoverMode::AllowGaps).can_pack(&region));
    }

    #[test]
    fn test_l_tetrominoes_tile_rectangle() {
        let pieces = pieces(vec![l_tetromino(), square()]);
        let packer = Packer::new(&pieces, CoverMode::Exact);

        assert!(packer.can_pack(&Region::new(4, 2, vec![2, 0])));
        assert!(!packer.can_pack(&Region::new(4, 2, vec![1, 0])));
        assert!(!packer.can_pack(&Region::new(4, 2, vec![3, 0])));
        assert!(packer.can_pack(&Region::new(4, 4, vec![2, 2])));
        assert!(packer.can_pack(&Region::new(4, 4, vec![4, 0])));
    }

    #[test]
    fn test_matching_area_without_packing() {
        let pieces = pieces(vec![Shape::from([[0, 1, 1], [1, 1, 0]])]);
        let packer = Packer::new(&pieces, CoverMode::Exact);
        assert!(!packer.can_pack(&Region::new(4, 2, vec![2])));
    }

    #[test]
    fn test_piece_larger_than_region() {
        let pieces = pieces(vec![Shape::from([[1, 1, 1, 1]])]);
        let packer = Packer::new(&pieces, CoverMode::AllowGaps);
        assert!(!packer.can_pack(&Region::new(3, 3, vec![1])));
        assert!(packer.can_pack(&Region::new(1, 4, vec![1])));
    }

    #[test]
    fn test_empty_quota_is_trivially_packed() {
        let pieces = pieces(vec![square()]);
        assert!(Packer::new(&pieces, CoverMode::AllowGaps).can_pack(&Region::new(3, 3, vec![0])));
        assert!(Packer::new(&pieces, CoverMode::Exact).can_pack(&Region::new(0, 0, vec![])));
        assert!(!Packer::new(&pieces, CoverMode::Exact).can_pack(&Region::new(3, 3, vec![])));
    }

    #[test]
    fn test_find_packing_covers_region_once() {
        let pieces = pieces(vec![l_tetromino(), square()]);
        let packer = Packer::new(&pieces, CoverMode::Exact);

        let placements = packer
            .find_packing(&Region::new(4, 4, vec![2, 2]))
            .expect("4x4 region should be packable");

        assert_eq!(placements.len(), 4);
        assert_eq!(
            placements
                .iter()
                .filter(|placement| placement.piece_index == 0)
                .count(),
            2
        );

        let mut covered = HashSet::new();
        for placement in &placements {
            assert_eq!(placement.occupied_cells.len(), 4);
            for cell in &placement.occupied_cells {
                assert!(covered.insert(*cell), "cell {:?} covered twice", cell);
            }
        }
        let expected: HashSet<_> = (0..4)
            .flat_map(|row| (0..4).map(move |col| (row, col)))
            .collect();
        assert_eq!(covered, expected);
    }

    #[test]
    fn test_find_packing_places_types_in_order() {
        let pieces = pieces(vec![square(), Shape::from([[1]])]);
        let packer = Packer::new(&pieces, CoverMode::Exact);

        let placements = packer.find_packing(&Region::new(3, 2, vec![1, 2])).unwrap();
        let order: Vec<_> = placements.iter().map(|p| p.piece_index).collect();
        assert_eq!(order, vec![0, 1, 1]);
        assert_eq!(
            placements[0],
            Placement {
                piece_index: 0,
                orientation_index: 0,
                row: 0,
                col: 0,
                occupied_cells: vec![(0, 0), (0, 1), (1, 0), (1, 1)],
            }
        );
    }

    #[test]
    fn test_find_packing_none() {
        let pieces = pieces(vec![square()]);
        let packer = Packer::new(&pieces, CoverMode::Exact);
        assert_eq!(packer.find_packing(&Region::new(3, 3, vec![2])), None);
    }

    #[test]
    fn test_failed_search_restores_state() {
        // Blocking two same-coloured corners leaves no room for two dominoes.
        let pieces = pieces(vec![Shape::from([[1, 1]])]);
        let mut grid = Occupancy::new(3, 2);
        grid.place(&Shape::from([[1]]), 0, 0);
        grid.place(&Shape::from([[1]]), 0, 2);
        let before = grid.clone();
        let mut remaining = vec![2];
        let mut trail = Vec::new();

        assert!(!place_next(&pieces, &mut grid, &mut remaining, &mut trail));
        assert_eq!(grid, before);
        assert_eq!(remaining, vec![2]);
        assert!(trail.is_empty());
    }

    #[test]
    fn test_successful_search_keeps_winning_path() {
        let pieces = pieces(vec![Shape::from([[1, 1]])]);
        let mut grid = Occupancy::new(2, 2);
        let mut remaining = vec![2];
        let mut trail = Vec::new();

        assert!(place_next(&pieces, &mut grid, &mut remaining, &mut trail));
        assert!(grid.is_full());
        assert_eq!(remaining, vec![0]);
        assert_eq!(trail.len(), 2);
    }
}
