//! Board slot identity.

use crate::{GRID_SIZE, TILE_COUNT, TileId};

/// A board position, numbered row-major from the top-left corner.
///
/// # Examples
///
/// ```
/// use tessera_core::SlotId;
///
/// let slot = SlotId::from_row_col(2, 1);
/// assert_eq!(slot.id(), 9);
/// assert_eq!((slot.row(), slot.col()), (2, 1));
/// ```
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display,
)]
#[display("{id}")]
pub struct SlotId {
    id: u8,
}

impl SlotId {
    /// All slots in row-major order.
    pub const ALL: [Self; TILE_COUNT] = {
        let mut all = [Self { id: 0 }; TILE_COUNT];
        let mut id = 0;
        while (id as usize) < TILE_COUNT {
            all[id as usize] = Self { id };
            id += 1;
        }
        all
    };

    /// Creates a slot identity.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not in the range 0-15.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!((id as usize) < TILE_COUNT, "slot id must be 0-15");
        Self { id }
    }

    /// Creates a slot identity, returning `None` when `id` is out of range.
    #[must_use]
    pub const fn try_new(id: u8) -> Option<Self> {
        if (id as usize) < TILE_COUNT {
            Some(Self { id })
        } else {
            None
        }
    }

    /// Creates a slot from its row and column.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not less than [`GRID_SIZE`].
    #[must_use]
    pub const fn from_row_col(row: u8, col: u8) -> Self {
        assert!(row < GRID_SIZE && col < GRID_SIZE, "row and column must be 0-3");
        Self::new(row * GRID_SIZE + col)
    }

    /// Returns the numeric identity (0-15).
    #[must_use]
    pub const fn id(self) -> u8 {
        self.id
    }

    /// Returns the board row (0-3).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.id / GRID_SIZE
    }

    /// Returns the board column (0-3).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.id % GRID_SIZE
    }

    /// Returns the tile that belongs in this slot.
    #[must_use]
    pub const fn home_tile(self) -> TileId {
        TileId::new(self.id)
    }
}
