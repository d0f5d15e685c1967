use tessera_core::{SlotId, TileId};

/// Error returned by [`PuzzleModel::place_in_slot`](crate::PuzzleModel::place_in_slot).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PlacementError {
    /// The destination slot already holds a tile. Tiles are never displaced.
    #[display("slot {slot} is occupied by tile {occupant}")]
    SlotOccupied {
        /// The requested slot.
        slot: SlotId,
        /// The tile currently in that slot.
        occupant: TileId,
    },
}

/// Error returned when a player intent causes no state transition.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::From,
    derive_more::IsVariant,
)]
pub enum IntentError {
    /// The model rejected the placement.
    #[display("{_0}")]
    Placement(#[from] PlacementError),
    /// Solved tiles are pinned and cannot be dragged.
    #[display("tile {_0} is solved and cannot be dragged")]
    TilePinned(#[error(not(source))] TileId),
    /// A drop arrived without a drag in progress, e.g. after a reset.
    #[display("no drag in progress")]
    NoActiveDrag,
}

/// A broken model invariant, reported by
/// [`PuzzleModel::check_invariants`](crate::PuzzleModel::check_invariants).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvariantViolation {
    /// A slot's occupant does not agree with the occupant's location.
    #[display("slot {slot} occupancy disagrees with tile locations")]
    OccupancyMismatch {
        /// The inconsistent slot.
        slot: SlotId,
    },
    /// A tile's holding-area membership does not agree with its location.
    #[display("tile {tile} holding membership disagrees with its location")]
    HoldingMismatch {
        /// The inconsistent tile.
        tile: TileId,
    },
    /// A tile's solved flag does not match whether it sits in its home slot.
    #[display("tile {tile} solved flag is stale")]
    StaleSolvedFlag {
        /// The inconsistent tile.
        tile: TileId,
    },
}
