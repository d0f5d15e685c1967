//! Example printing the initial holding-area layout for a seed.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example shuffle_layout
//! ```
//!
//! Replay a specific layout:
//!
//! ```sh
//! cargo run --example shuffle_layout -- --seed 1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef
//! ```
//!
//! Print several layouts at once:
//!
//! ```sh
//! cargo run --example shuffle_layout -- --count 5
//! ```

use std::process;

use clap::Parser;
use tessera_core::GRID_SIZE;
use tessera_generator::{Permutation, PermutationGenerator, ShuffleSeed};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Seed to replay (64 hex digits). A random seed is used when omitted.
    #[arg(long, value_name = "HEX")]
    seed: Option<ShuffleSeed>,

    /// Number of layouts to print. Ignored when `--seed` is given.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    count: usize,
}

fn main() {
    let args = Args::parse();
    let generator = PermutationGenerator::new();

    if let Some(seed) = args.seed {
        print_permutation(&generator.generate_with_seed(seed));
        return;
    }

    if args.count == 0 {
        eprintln!("--count must be at least 1.");
        process::exit(1);
    }

    for i in 0..args.count {
        if i > 0 {
            println!();
        }
        print_permutation(&generator.generate());
    }
}

fn print_permutation(permutation: &Permutation) {
    println!("Seed:");
    println!("  {}", permutation.seed());
    println!();
    println!("Holding order:");
    for row in permutation.tiles().chunks(usize::from(GRID_SIZE)) {
        let line = row
            .iter()
            .map(|tile| format!("{:>2}", tile.id()))
            .collect::<Vec<_>>()
            .join(" ");
        println!("  {line}");
    }
}
