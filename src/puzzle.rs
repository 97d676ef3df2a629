//! The complete packing puzzle: shapes, regions, and the answers to both parts.

use crate::{
    parse::{self, ParseError},
    region::{self, PackOptions, PieceType, Region},
    shape::{Shape, ShapeTransform},
};
use core::{fmt, str::FromStr};

/// Shapes and the regions they have to be packed into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    /// Shapes of the piece types, in definition order.
    pub shapes: Vec<Shape>,
    /// Regions to evaluate.
    pub regions: Vec<Region>,
}

/// Answer to one part of the puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Answer {
    /// Number of regions that can be packed.
    Count(usize),
    /// The part is awarded without any computation.
    AutoCompleted,
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Count(count) => write!(f, "{}", count),
            Answer::AutoCompleted => f.write_str("automatically completed"),
        }
    }
}

impl Puzzle {
    /// Create a new puzzle from its shapes and regions.
    pub fn new(shapes: Vec<Shape>, regions: Vec<Region>) -> Self {
        Self { shapes, regions }
    }

    /// Build the piece types of this puzzle, one per shape.
    pub fn piece_types(&self, transform: ShapeTransform) -> Vec<PieceType> {
        region::piece_types(&self.shapes, transform)
    }

    /// Count the regions that can be packed.
    pub fn part_one(&self, options: PackOptions) -> Answer {
        let pieces = self.piece_types(options.transform);
        Answer::Count(region::count_packable(
            &self.regions,
            &pieces,
            options.cover,
        ))
    }

    /// Same as [`part_one`](Puzzle::part_one), evaluating regions in parallel.
    pub fn part_one_par(&self, options: PackOptions) -> Answer {
        let pieces = self.piece_types(options.transform);
        Answer::Count(region::count_packable_par(
            &self.regions,
            &pieces,
            options.cover,
        ))
    }

    /// The second part has nothing to compute: it is completed once the first
    /// part is.
    pub fn part_two(&self) -> Answer {
        Answer::AutoCompleted
    }
}

impl FromStr for Puzzle {
    type Err = ParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        parse::parse_puzzle(input)
    }
}
