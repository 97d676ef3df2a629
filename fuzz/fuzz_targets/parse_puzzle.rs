#![no_main]

use libfuzzer_sys::fuzz_target;
use polyomino_packer::Puzzle;

fuzz_target!(|input: &str| {
    let _puzzle = input.parse::<Puzzle>();
});
