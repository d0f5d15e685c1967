//! Where a tile currently is.

use crate::SlotId;

/// The current location of a tile.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant,
)]
pub enum Location {
    /// The unplaced pool beside the board.
    #[default]
    #[display("holding")]
    Holding,
    /// A board slot.
    #[display("slot {_0}")]
    Slot(SlotId),
}

impl Location {
    /// Returns the slot, if the location is on the board.
    ///
    /// # Examples
    ///
    /// ```
    /// use tessera_core::{Location, SlotId};
    ///
    /// assert_eq!(Location::Slot(SlotId::new(2)).as_slot(), Some(SlotId::new(2)));
    /// assert_eq!(Location::Holding.as_slot(), None);
    /// ```
    #[must_use]
    pub const fn as_slot(self) -> Option<SlotId> {
        match self {
            Self::Holding => None,
            Self::Slot(slot) => Some(slot),
        }
    }
}
