use rand::prelude::*;
use rand_pcg::Pcg64;
use tessera_core::{TILE_COUNT, TileId};

use crate::{Permutation, ShuffleSeed, fisher_yates};

/// Produces random initial layouts.
///
/// # Examples
///
/// ```
/// use tessera_core::TileId;
/// use tessera_generator::{PermutationGenerator, is_permutation};
///
/// let permutation = PermutationGenerator::new().generate();
/// assert!(is_permutation(permutation.tiles()));
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct PermutationGenerator;

impl PermutationGenerator {
    /// Creates a generator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Generates a permutation from a freshly drawn seed.
    #[must_use]
    pub fn generate(&self) -> Permutation {
        self.generate_with_seed(ShuffleSeed::random())
    }

    /// Generates the permutation determined by `seed`.
    #[must_use]
    pub fn generate_with_seed(&self, seed: ShuffleSeed) -> Permutation {
        let mut rng = Pcg64::from_seed(*seed.as_bytes());
        let mut tiles: [TileId; TILE_COUNT] = TileId::ALL;
        fisher_yates(&mut tiles, &mut rng);
        log::trace!("generated permutation from seed {seed}");
        Permutation::new(tiles, seed)
    }
}
