use rand::prelude::*;
use tessera_core::{TILE_COUNT, TileId};

use crate::ShuffleSeed;

/// Shuffles `items` in place with the Fisher–Yates algorithm.
///
/// For each index `i` from the last down to `1`, the element at `i` is swapped with
/// an element at a uniformly chosen index in `0..=i`. Every ordering is equally
/// likely provided `rng` is uniform.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng as _;
/// use rand_pcg::Pcg64;
/// use tessera_generator::fisher_yates;
///
/// let mut items: Vec<u32> = (0..10).collect();
/// fisher_yates(&mut items, &mut Pcg64::from_seed([7; 32]));
///
/// items.sort_unstable();
/// assert_eq!(items, (0..10).collect::<Vec<_>>());
/// ```
pub fn fisher_yates<T, R>(items: &mut [T], rng: &mut R)
where
    R: Rng + ?Sized,
{
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// Returns `0..n` in a uniformly random order.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng as _;
/// use rand_pcg::Pcg64;
/// use tessera_generator::shuffle;
///
/// let order = shuffle(16, &mut Pcg64::from_seed([1; 32]));
/// assert_eq!(order.len(), 16);
/// assert!((0..16).all(|i| order.contains(&i)));
/// ```
pub fn shuffle<R>(n: usize, rng: &mut R) -> Vec<usize>
where
    R: Rng + ?Sized,
{
    let mut order = (0..n).collect::<Vec<_>>();
    fisher_yates(&mut order, rng);
    order
}

/// A shuffled ordering of every tile, together with the seed that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation {
    tiles: [TileId; TILE_COUNT],
    seed: ShuffleSeed,
}

impl Permutation {
    pub(crate) fn new(tiles: [TileId; TILE_COUNT], seed: ShuffleSeed) -> Self {
        debug_assert!(is_permutation(&tiles));
        Self { tiles, seed }
    }

    /// Returns the tiles in shuffled order.
    #[must_use]
    pub fn tiles(&self) -> &[TileId; TILE_COUNT] {
        &self.tiles
    }

    /// Returns the seed that reproduces this ordering.
    #[must_use]
    pub fn seed(&self) -> ShuffleSeed {
        self.seed
    }
}

/// Returns `true` if `tiles` contains every tile identity exactly once.
#[must_use]
pub fn is_permutation(tiles: &[TileId]) -> bool {
    let mut seen = [false; TILE_COUNT];
    for tile in tiles {
        let seen = &mut seen[usize::from(tile.id())];
        if *seen {
            return false;
        }
        *seen = true;
    }
    tiles.len() == TILE_COUNT
}
