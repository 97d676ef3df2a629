//! Regions, piece types and the evaluation of many regions against one shared
//! set of piece orientations.

use crate::{
    packer::{CoverMode, Packer},
    shape::{self, Shape, ShapeTransform},
};
use rayon::iter::{IndexedParallelIterator, IntoParallelRefIterator, ParallelIterator};

/// A kind of piece: its shape as given plus every distinct orientation
/// reachable from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceType {
    shape: Shape,
    orientations: Vec<Shape>,
}

impl PieceType {
    /// Create a new piece type, generating its orientations with the given
    /// group of transformations.
    pub fn new(shape: Shape, transform: ShapeTransform) -> Self {
        let orientations = shape::orientations(&shape, transform);
        Self {
            shape,
            orientations,
        }
    }

    /// The shape this piece type was created from.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Distinct orientations of the shape, in the order the search tries them.
    pub fn orientations(&self) -> &[Shape] {
        &self.orientations
    }

    /// Number of cells covered by one piece of this type.
    pub fn area(&self) -> usize {
        self.shape.area()
    }
}

/// Build the piece types for a list of shapes, computing every orientation
/// set exactly once.
pub fn piece_types(shapes: &[Shape], transform: ShapeTransform) -> Vec<PieceType> {
    shapes
        .iter()
        .cloned()
        .map(|shape| PieceType::new(shape, transform))
        .collect()
}

/// Largest region area accepted by the parser. A search allocates one flag per
/// cell of the region.
pub const MAX_REGION_AREA: usize = 1 << 24;

/// A rectangle to pack, together with the number of pieces of each type that
/// must go into it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Region {
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
    /// Required count per piece type, indexed like the piece list. Missing
    /// trailing entries count as zero.
    pub quota: Vec<usize>,
}

impl Region {
    /// Create a new region.
    pub fn new(width: usize, height: usize, quota: Vec<usize>) -> Self {
        Self {
            width,
            height,
            quota,
        }
    }

    /// Number of cells in the region, saturating at `usize::MAX`.
    pub fn area(&self) -> usize {
        self.width.saturating_mul(self.height)
    }

    /// Total number of pieces the quota asks for, saturating at `usize::MAX`.
    pub fn piece_count(&self) -> usize {
        self.quota.iter().copied().fold(0, usize::saturating_add)
    }
}

/// Options controlling how regions are evaluated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PackOptions {
    /// Transformations a piece may undergo when it is placed.
    pub transform: ShapeTransform,
    /// How much of each region has to be covered.
    pub cover: CoverMode,
}

/// Count the regions that can be packed with the given piece types.
///
/// Regions are evaluated one after the other, each with its own grid.
pub fn count_packable(regions: &[Region], pieces: &[PieceType], cover: CoverMode) -> usize {
    let packer = Packer::new(pieces, cover);

    regions
        .iter()
        .enumerate()
        .filter(|(index, region)| evaluate(&packer, *index, region))
        .count()
}

/// Count the regions that can be packed with the given piece types,
/// evaluating regions in parallel.
///
/// Always returns the same count as [`count_packable`].
pub fn count_packable_par(regions: &[Region], pieces: &[PieceType], cover: CoverMode) -> usize {
    let packer = Packer::new(pieces, cover);

    regions
        .par_iter()
        .enumerate()
        .filter(|(index, region)| evaluate(&packer, *index, region))
        .count()
}

fn evaluate(packer: &Packer<'_>, index: usize, region: &Region) -> bool {
    let packable = packer.can_pack(region);

    log::debug!(
        "Region #{} ({}x{}, {} piece(s)) is {}.",
        index,
        region.width,
        region.height,
        region.piece_count(),
        if packable { "packable" } else { "not packable" }
    );

    packable
}
