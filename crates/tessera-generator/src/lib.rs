//! Random initial layouts for the tessera tile puzzle.
//!
//! A new puzzle starts with every tile in the holding area, laid out in a uniformly
//! random order. This crate produces that order as a [`Permutation`] of all tile
//! identities, using an in-place Fisher–Yates shuffle driven by a seedable PCG
//! generator so that any layout can be reproduced from its [`ShuffleSeed`].
//!
//! # Examples
//!
//! ```
//! use tessera_generator::{PermutationGenerator, ShuffleSeed};
//!
//! let generator = PermutationGenerator::new();
//! let permutation = generator.generate();
//!
//! // Re-running with the same seed yields the same layout.
//! let replay = generator.generate_with_seed(permutation.seed());
//! assert_eq!(permutation, replay);
//! ```

pub use self::{generator::*, permutation::*, seed::*};

mod generator;
mod permutation;
mod seed;
