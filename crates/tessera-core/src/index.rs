//! Index types and semantics for 16-element containers.
//!
//! [`Index16`] is a checked index in the range `0..16`. Semantics types describe how a
//! domain value maps onto such an index, which lets [`Array16`] be indexed directly
//! by [`TileId`] or [`SlotId`] without mixing the two up.
//!
//! - [`TileSemantics`] - maps [`TileId`] to indices
//! - [`SlotSemantics`] - maps [`SlotId`] to indices
//!
//! [`Array16`]: crate::containers::Array16
//!
//! # Examples
//!
//! ```
//! use tessera_core::{
//!     SlotId,
//!     index::{Index16, Index16Semantics, SlotSemantics},
//! };
//!
//! let idx = SlotSemantics::to_index(SlotId::new(9));
//! assert_eq!(idx.index(), 9);
//! assert_eq!(SlotSemantics::from_index(idx), SlotId::new(9));
//!
//! assert_eq!(Index16::all().count(), 16);
//! ```

use crate::{SlotId, TILE_COUNT, TileId};

/// An index in the range 0-15.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Index16 {
    index: u8,
}

impl Index16 {
    /// Creates a new index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-15.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!((index as usize) < TILE_COUNT);
        Self { index }
    }

    /// Returns the underlying index value (0-15).
    #[must_use]
    pub const fn index(self) -> u8 {
        self.index
    }

    /// Returns an iterator over all 16 valid indices in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        #[expect(clippy::cast_possible_truncation)]
        const LEN: u8 = TILE_COUNT as u8;
        (0..LEN).map(Index16::new)
    }
}

/// Defines how values map to indices in 16-element containers.
pub trait Index16Semantics {
    /// The type of values used as keys.
    type Value;

    /// Converts a value to an index.
    fn to_index(value: Self::Value) -> Index16;

    /// Converts an index back to a value.
    fn from_index(index: Index16) -> Self::Value;
}

/// Semantics for tile identities.
#[derive(Debug)]
pub struct TileSemantics;

impl Index16Semantics for TileSemantics {
    type Value = TileId;

    fn to_index(value: Self::Value) -> Index16 {
        Index16::new(value.id())
    }

    fn from_index(index: Index16) -> Self::Value {
        TileId::new(index.index())
    }
}

/// Semantics for board slots.
#[derive(Debug)]
pub struct SlotSemantics;

impl Index16Semantics for SlotSemantics {
    type Value = SlotId;

    fn to_index(value: Self::Value) -> Index16 {
        Index16::new(value.id())
    }

    fn from_index(index: Index16) -> Self::Value {
        SlotId::new(index.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_ascending_and_complete() {
        let indices: Vec<_> = Index16::all().map(Index16::index).collect();
        assert_eq!(indices.len(), TILE_COUNT);
        assert_eq!(indices, (0..16).collect::<Vec<_>>());
    }

    #[test]
    fn test_tile_and_slot_semantics_share_numbering() {
        for index in Index16::all() {
            let tile = TileSemantics::from_index(index);
            let slot = SlotSemantics::from_index(index);
            assert_eq!(tile.home_slot(), slot);
            assert_eq!(TileSemantics::to_index(tile), index);
            assert_eq!(SlotSemantics::to_index(slot), index);
        }
    }

    #[test]
    #[should_panic(expected = "(index as usize) < TILE_COUNT")]
    fn test_rejects_sixteen() {
        let _ = Index16::new(16);
    }
}
