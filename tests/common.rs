use polyomino_packer::{Placement, Puzzle, Region, Shape};
use std::collections::HashSet;

/// The sample puzzle: six heptomino shapes and three regions.
#[allow(dead_code)]
pub const SAMPLE_PUZZLE: &str = include_str!("data/sample_puzzle.txt");

/// Parse the sample puzzle.
///
/// # Panics
///  - If the sample file no longer parses.
#[allow(dead_code)]
pub fn sample_puzzle() -> Puzzle {
    log::debug!("Parsing sample puzzle:\n{}", SAMPLE_PUZZLE);

    SAMPLE_PUZZLE
        .parse()
        .expect("sample puzzle should be well formed")
}

/// The five tetrominoes, in `I, O, T, S, L` order.
#[allow(dead_code)]
pub fn tetrominoes() -> Vec<Shape> {
    vec![
        Shape::from([[1, 1, 1, 1]]),
        Shape::from([[1, 1], [1, 1]]),
        Shape::from([[1, 1, 1], [0, 1, 0]]),
        Shape::from([[0, 1, 1], [1, 1, 0]]),
        Shape::from([[1, 0], [1, 0], [1, 1]]),
    ]
}

/// Check that `placements` cover every cell of `region` exactly once, and
/// that each piece type is used as often as the quota asks.
///
/// # Panics
///  - If any cell is covered twice, left uncovered or lies outside the region.
///  - If the number of placements of some piece type differs from the quota.
#[allow(dead_code)]
pub fn assert_exact_cover(region: &Region, placements: &[Placement]) {
    let mut covered = HashSet::new();

    for placement in placements {
        for &(row, col) in &placement.occupied_cells {
            assert!(
                row < region.height && col < region.width,
                "Cell [{},{}] lies outside of the {}x{} region",
                row,
                col,
                region.width,
                region.height
            );
            assert!(
                covered.insert((row, col)),
                "Cell [{},{}] is covered twice",
                row,
                col
            );
        }
    }

    assert_eq!(
        covered.len(),
        region.area(),
        "Region is not fully covered by {:?}",
        placements
    );

    for (piece_index, count) in region.quota.iter().enumerate() {
        assert_eq!(
            placements
                .iter()
                .filter(|placement| placement.piece_index == piece_index)
                .count(),
            *count,
            "Wrong number of pieces of type [{}]",
            piece_index
        );
    }
}
