#![deny(missing_docs)]

//! Backtracking packer for [polyomino](https://en.wikipedia.org/wiki/Polyomino)
//! pieces.
//!
//! Given a list of piece shapes and a list of rectangular regions, each with a
//! required count per piece, the packer decides which regions can hold all of
//! their pieces without overlaps. Pieces may be rotated and reflected. Every
//! orientation set is computed once and shared by all regions, while each
//! region search owns its own [`Occupancy`] grid, so regions can be evaluated
//! in parallel.
//!
//! ```
//! use polyomino_packer::{CoverMode, Packer, PieceType, Region, Shape, ShapeTransform};
//!
//! let pieces = vec![PieceType::new(
//!     Shape::from([[1, 0], [1, 0], [1, 1]]),
//!     ShapeTransform::FullSymmetry,
//! )];
//! let packer = Packer::new(&pieces, CoverMode::Exact);
//!
//! assert!(packer.can_pack(&Region::new(4, 2, vec![2])));
//! assert!(!packer.can_pack(&Region::new(4, 2, vec![1])));
//! ```

pub(crate) mod grid;
pub mod packer;
pub mod parse;
pub mod puzzle;
pub mod region;
pub mod shape;

pub use grid::Occupancy;
pub use packer::{CoverMode, Packer, Placement};
pub use parse::{parse_puzzle, ParseError};
pub use puzzle::{Answer, Puzzle};
pub use region::{
    count_packable, count_packable_par, piece_types, PackOptions, PieceType, Region,
    MAX_REGION_AREA,
};
pub use shape::{orientations, Cell, Shape, ShapeTransform};
