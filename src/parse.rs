//! Parsing of the puzzle text into shapes and regions.
//!
//! The input is a list of named shapes followed by a list of regions:
//!
//! ```text
//! 0:
//! ###
//! ##.
//! ##.
//!
//! 4x4: 0 2
//! ```
//!
//! A shape starts with a `name:` header and continues with one row of text
//! per line until a blank line or the next header, `#` marking an occupied
//! cell. A region line is `WIDTHxHEIGHT:` followed by the required count of
//! each shape, in the order the shapes were defined.

use crate::{
    puzzle::Puzzle,
    region::{Region, MAX_REGION_AREA},
    shape::Shape,
};
use thiserror::Error;

/// Error type for parsing puzzle text.
///
/// Line numbers start at 1.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The `WIDTHxHEIGHT` part of a region line is not two integers.
    #[error("line {line}: invalid region dimensions `{text}`")]
    InvalidDimensions {
        /// Line of the region.
        line: usize,
        /// The offending dimensions text.
        text: String,
    },
    /// A region has more cells than a search can hold.
    #[error("line {line}: region {width}x{height} exceeds {max} cells")]
    RegionTooLarge {
        /// Line of the region.
        line: usize,
        /// Width of the region.
        width: usize,
        /// Height of the region.
        height: usize,
        /// Largest accepted area.
        max: usize,
    },
    /// A piece count of a region line is not a non-negative integer.
    #[error("line {line}: invalid piece count `{text}`")]
    InvalidQuota {
        /// Line of the region.
        line: usize,
        /// The offending count text.
        text: String,
    },
    /// A region asks for more piece types than were defined.
    #[error("line {line}: region lists {found} piece counts but only {defined} shapes are defined")]
    TooManyQuotas {
        /// Line of the region.
        line: usize,
        /// Number of counts listed by the region.
        found: usize,
        /// Number of shapes defined in the input.
        defined: usize,
    },
    /// A shape definition has no `#` cell.
    #[error("line {line}: shape `{name}` has no occupied cells")]
    EmptyShape {
        /// Line of the shape header.
        line: usize,
        /// Name given in the shape header.
        name: String,
    },
    /// A shape row appears before any shape header.
    #[error("line {line}: shape row outside of a shape definition")]
    UnexpectedRow {
        /// Line of the row.
        line: usize,
    },
    /// The input defines no shapes at all.
    #[error("no shapes defined")]
    NoShapes,
}

struct PendingShape<'a> {
    line: usize,
    name: &'a str,
    rows: Vec<&'a str>,
}

impl PendingShape<'_> {
    fn finish(self) -> Result<Shape, ParseError> {
        Shape::from_rows(self.rows).ok_or_else(|| ParseError::EmptyShape {
            line: self.line,
            name: self.name.to_string(),
        })
    }
}

/// Parse puzzle text into its shapes and regions.
pub fn parse_puzzle(input: &str) -> Result<Puzzle, ParseError> {
    let mut shapes = Vec::new();
    let mut regions = Vec::new();
    let mut pending: Option<PendingShape<'_>> = None;

    for (index, raw_line) in input.lines().enumerate() {
        let line_number = index + 1;
        let line = raw_line.trim_end();

        if line.trim().is_empty() {
            if let Some(shape) = pending.take() {
                shapes.push(shape.finish()?);
            }
            continue;
        }

        match line.split_once(':') {
            Some((head, tail)) if head.contains('x') => {
                if let Some(shape) = pending.take() {
                    shapes.push(shape.finish()?);
                }
                regions.push((line_number, parse_region(line_number, head, tail)?));
            }
            Some((head, _)) => {
                if let Some(shape) = pending.take() {
                    shapes.push(shape.finish()?);
                }
                pending = Some(PendingShape {
                    line: line_number,
                    name: head.trim(),
                    rows: Vec::new(),
                });
            }
            None => match pending.as_mut() {
                Some(shape) => shape.rows.push(line),
                None => return Err(ParseError::UnexpectedRow { line: line_number }),
            },
        }
    }

    if let Some(shape) = pending.take() {
        shapes.push(shape.finish()?);
    }

    if shapes.is_empty() {
        return Err(ParseError::NoShapes);
    }

    let regions = regions
        .into_iter()
        .map(|(line, region)| {
            if region.quota.len() > shapes.len() {
                Err(ParseError::TooManyQuotas {
                    line,
                    found: region.quota.len(),
                    defined: shapes.len(),
                })
            } else {
                Ok(region)
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!(
        "Parsed {} shape(s) and {} region(s).",
        shapes.len(),
        regions.len()
    );

    Ok(Puzzle { shapes, regions })
}

fn parse_region(line: usize, dimensions: &str, counts: &str) -> Result<Region, ParseError> {
    let invalid_dimensions = || ParseError::InvalidDimensions {
        line,
        text: dimensions.trim().to_string(),
    };

    let (width, height) = dimensions.trim().split_once('x').ok_or_else(invalid_dimensions)?;
    let width: usize = width.trim().parse().map_err(|_| invalid_dimensions())?;
    let height: usize = height.trim().parse().map_err(|_| invalid_dimensions())?;

    match width.checked_mul(height) {
        Some(area) if area <= MAX_REGION_AREA => {}
        _ => {
            return Err(ParseError::RegionTooLarge {
                line,
                width,
                height,
                max: MAX_REGION_AREA,
            })
        }
    }

    let quota = counts
        .split_whitespace()
        .map(|count| {
            count.parse().map_err(|_| ParseError::InvalidQuota {
                line,
                text: count.to_string(),
            })
        })
        .collect::<Result<Vec<usize>, _>>()?;

    Ok(Region::new(width, height, quota))
}
