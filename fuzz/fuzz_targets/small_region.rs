#![no_main]

use libfuzzer_sys::fuzz_target;
use polyomino_packer::{piece_types, Cell, CoverMode, Packer, Region, Shape, ShapeTransform};
use std::collections::HashSet;

#[derive(Debug)]
struct SmallRegionInput {
    shapes: Vec<Shape>,
    region: Region,
}

impl<'a> arbitrary::Arbitrary<'a> for SmallRegionInput {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        // Up to two shapes drawn from a 3x3 box, packed into at most 4x4 cells.
        let shapes: Vec<Shape> = u
            .arbitrary::<[u16; 2]>()?
            .into_iter()
            .map(|mask| mask & 0x1ff)
            .filter(|mask| *mask != 0)
            .map(|mask| {
                Shape::new(
                    (0..9)
                        .filter(|bit| mask & (1u16 << *bit) != 0)
                        .map(|bit| Cell::new(bit / 3, bit % 3)),
                )
            })
            .collect();

        let width = usize::from(u.int_in_range(1u8..=4)?);
        let height = usize::from(u.int_in_range(1u8..=4)?);
        let quota = shapes
            .iter()
            .map(|_| u.int_in_range(0u8..=2).map(usize::from))
            .collect::<arbitrary::Result<Vec<_>>>()?;

        Ok(SmallRegionInput {
            shapes,
            region: Region::new(width, height, quota),
        })
    }
}

fuzz_target!(|data: SmallRegionInput| {
    let pieces = piece_types(&data.shapes, ShapeTransform::FullSymmetry);

    for cover in [CoverMode::Exact, CoverMode::AllowGaps] {
        let packer = Packer::new(&pieces, cover);
        let packable = packer.can_pack(&data.region);
        let placements = packer.find_packing(&data.region);
        assert_eq!(packable, placements.is_some());

        if let Some(placements) = placements {
            let mut covered = HashSet::new();
            for cell in placements.iter().flat_map(|p| p.occupied_cells.iter()) {
                assert!(covered.insert(*cell), "cell {:?} covered twice", cell);
            }
            if cover == CoverMode::Exact {
                assert_eq!(covered.len(), data.region.area());
            }
        }
    }
});
