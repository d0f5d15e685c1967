//! Tile identity.

use crate::{GRID_SIZE, SlotId, TILE_COUNT};

/// Identity of a puzzle tile.
///
/// A tile is identified by the slot it belongs in: tile `n` shows the part of the
/// picture that is drawn in slot `n` of the finished board.
///
/// The [`Default`] tile is tile 0; it exists so tiles can be stored in fixed-size
/// inline vectors.
///
/// # Examples
///
/// ```
/// use tessera_core::{SlotId, TileId};
///
/// let tile = TileId::new(11);
/// assert_eq!(tile.id(), 11);
/// assert_eq!(tile.home_slot(), SlotId::new(11));
/// assert_eq!(tile.to_string(), "11");
/// ```
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display,
)]
#[display("{id}")]
pub struct TileId {
    id: u8,
}

impl TileId {
    /// All tiles in ascending order.
    pub const ALL: [Self; TILE_COUNT] = {
        let mut all = [Self { id: 0 }; TILE_COUNT];
        let mut id = 0;
        while (id as usize) < TILE_COUNT {
            all[id as usize] = Self { id };
            id += 1;
        }
        all
    };

    /// Creates a tile identity.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not in the range 0-15.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!((id as usize) < TILE_COUNT, "tile id must be 0-15");
        Self { id }
    }

    /// Creates a tile identity, returning `None` when `id` is out of range.
    #[must_use]
    pub const fn try_new(id: u8) -> Option<Self> {
        if (id as usize) < TILE_COUNT {
            Some(Self { id })
        } else {
            None
        }
    }

    /// Returns the numeric identity (0-15).
    #[must_use]
    pub const fn id(self) -> u8 {
        self.id
    }

    /// Returns the slot this tile belongs in.
    #[must_use]
    pub const fn home_slot(self) -> SlotId {
        SlotId::new(self.id)
    }

    /// Returns the picture row this tile was cut from.
    #[must_use]
    pub const fn row(self) -> u8 {
        self.id / GRID_SIZE
    }

    /// Returns the picture column this tile was cut from.
    #[must_use]
    pub const fn col(self) -> u8 {
        self.id % GRID_SIZE
    }
}
