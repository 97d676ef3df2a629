//! Count the regions of a puzzle file that can be packed.
//! Usage:
//!
//! ```bash
//! cargo run --release --example pack -- tests/data/sample_puzzle.txt
//! ```
//!
//! Flags:
//!  - `--exact`: pieces must cover every cell of a region.
//!  - `--parallel`: evaluate regions on all cores.

use polyomino_packer::{CoverMode, PackOptions, Puzzle};
use std::time::Instant;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(path) = args.iter().find(|arg| !arg.starts_with("--")) else {
        eprintln!("puzzle file needed");
        std::process::exit(1);
    };

    let options = PackOptions {
        cover: if args.iter().any(|arg| arg == "--exact") {
            CoverMode::Exact
        } else {
            CoverMode::AllowGaps
        },
        ..PackOptions::default()
    };
    let parallel = args.iter().any(|arg| arg == "--parallel");

    let input = match std::fs::read_to_string(path) {
        Ok(input) => input,
        Err(err) => {
            eprintln!("unable to read [{}]: {}", path, err);
            std::process::exit(1);
        }
    };

    let puzzle: Puzzle = match input.parse() {
        Ok(puzzle) => puzzle,
        Err(err) => {
            eprintln!("invalid puzzle [{}]: {}", path, err);
            std::process::exit(1);
        }
    };

    let start = Instant::now();
    let part_one = if parallel {
        puzzle.part_one_par(options)
    } else {
        puzzle.part_one(options)
    };
    println!("Part 1: {} ({:.2?})", part_one, start.elapsed());
    println!("Part 2: {}", puzzle.part_two());
}
