use tessera_core::{Location, SlotId, TileId};

/// A puzzle tile and where it currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    id: TileId,
    location: Location,
    solved: bool,
}

impl Tile {
    #[must_use]
    pub(crate) const fn in_holding(id: TileId) -> Self {
        Self {
            id,
            location: Location::Holding,
            solved: false,
        }
    }

    /// Returns the tile identity.
    #[must_use]
    pub const fn id(&self) -> TileId {
        self.id
    }

    /// Returns the slot this tile belongs in.
    #[must_use]
    pub const fn correct_slot(&self) -> SlotId {
        self.id.home_slot()
    }

    /// Returns the current location.
    #[must_use]
    pub const fn location(&self) -> Location {
        self.location
    }

    /// Returns `true` if the tile sits in its own slot.
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.solved
    }

    /// Moves the tile and recomputes the solved flag.
    pub(crate) fn set_location(&mut self, location: Location) {
        self.location = location;
        self.solved = location == Location::Slot(self.correct_slot());
    }
}
