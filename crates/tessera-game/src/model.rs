use tessera_core::{
    Location, SlotId, TILE_COUNT, TileId,
    containers::Array16,
    index::{SlotSemantics, TileSemantics},
};
use tessera_generator::Permutation;
use tinyvec::ArrayVec;

use crate::{InvariantViolation, PlacementError, Tile};

/// A committed change of a tile's location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    /// The tile that moved.
    pub tile: TileId,
    /// Where the tile was before.
    pub from: Location,
    /// Where the tile is now.
    pub to: Location,
}

impl Move {
    /// Returns `true` if the tile ended up where it started.
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.from == self.to
    }
}

/// The authoritative record of tile locations and slot occupancy.
///
/// Between operations the model maintains these invariants:
///
/// - every tile is either in the holding area or in exactly one slot;
/// - a slot's occupant is a tile exactly when that tile's location is the slot;
/// - a tile is solved exactly when it sits in its own slot.
///
/// A slot's solved marker ([`is_slot_solved`](Self::is_slot_solved)) is derived from
/// its occupant, so vacating a slot always clears it.
///
/// # Example
///
/// ```
/// use tessera_core::{Location, SlotId, TileId};
/// use tessera_game::{PlacementError, PuzzleModel};
/// use tessera_generator::PermutationGenerator;
///
/// let mut model = PuzzleModel::new(&PermutationGenerator::new().generate());
///
/// model.place_in_slot(TileId::new(5), SlotId::new(3)).unwrap();
/// assert_eq!(model.occupant(SlotId::new(3)), Some(TileId::new(5)));
/// assert!(!model.is_solved(TileId::new(5)));
///
/// // No displacement: the occupied slot rejects other tiles.
/// let err = model.place_in_slot(TileId::new(9), SlotId::new(3)).unwrap_err();
/// assert_eq!(
///     err,
///     PlacementError::SlotOccupied { slot: SlotId::new(3), occupant: TileId::new(5) }
/// );
/// assert_eq!(model.tile(TileId::new(9)).location(), Location::Holding);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleModel {
    tiles: Array16<Tile, TileSemantics>,
    slots: Array16<Option<TileId>, SlotSemantics>,
    holding: ArrayVec<[TileId; TILE_COUNT]>,
}

impl PuzzleModel {
    /// Creates a model with every tile in the holding area, in permutation order.
    #[must_use]
    pub fn new(permutation: &Permutation) -> Self {
        let mut holding = ArrayVec::new();
        holding.extend(permutation.tiles().iter().copied());
        Self {
            tiles: Array16::from_array(TileId::ALL.map(Tile::in_holding)),
            slots: Array16::from_array([None; TILE_COUNT]),
            holding,
        }
    }

    /// Returns the tile with the given identity.
    #[must_use]
    pub fn tile(&self, tile: TileId) -> &Tile {
        &self.tiles[tile]
    }

    /// Returns all tiles in identity order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Returns the tile in `slot`, if any.
    #[must_use]
    pub fn occupant(&self, slot: SlotId) -> Option<TileId> {
        self.slots[slot]
    }

    /// Returns `true` if `slot` holds the tile that belongs there.
    #[must_use]
    pub fn is_slot_solved(&self, slot: SlotId) -> bool {
        self.slots[slot] == Some(slot.home_tile())
    }

    /// Returns the tiles in the holding area, in display order.
    #[must_use]
    pub fn holding(&self) -> &[TileId] {
        &self.holding
    }

    /// Returns `true` if `tile` sits in its own slot.
    #[must_use]
    pub fn is_solved(&self, tile: TileId) -> bool {
        self.tiles[tile].is_solved()
    }

    /// Returns the number of solved tiles.
    #[must_use]
    pub fn solved_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.is_solved()).count()
    }

    /// Returns `true` if every tile is solved.
    #[must_use]
    pub fn all_solved(&self) -> bool {
        self.tiles.iter().all(Tile::is_solved)
    }

    /// Places `tile` into `slot`.
    ///
    /// The tile leaves its previous location (the holding area or another slot,
    /// which becomes empty) and its solved flag is recomputed.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::SlotOccupied`] if `slot` already holds a tile,
    /// including `tile` itself. Nothing changes in that case.
    pub fn place_in_slot(&mut self, tile: TileId, slot: SlotId) -> Result<Move, PlacementError> {
        if let Some(occupant) = self.slots[slot] {
            return Err(PlacementError::SlotOccupied { slot, occupant });
        }

        let from = self.detach(tile);
        let to = Location::Slot(slot);
        self.slots[slot] = Some(tile);
        self.tiles[tile].set_location(to);
        Ok(Move { tile, from, to })
    }

    /// Moves `tile` to the end of the holding area.
    ///
    /// A tile that is already in the holding area keeps its place.
    pub fn return_to_holding(&mut self, tile: TileId) -> Move {
        let from = self.tiles[tile].location();
        if from.is_slot() {
            self.detach(tile);
            self.holding.push(tile);
            self.tiles[tile].set_location(Location::Holding);
        }
        Move {
            tile,
            from,
            to: Location::Holding,
        }
    }

    /// Removes `tile` from wherever it is, returning the old location.
    ///
    /// Leaves the model inconsistent until the caller records the new location.
    fn detach(&mut self, tile: TileId) -> Location {
        let from = self.tiles[tile].location();
        match from {
            Location::Holding => {
                if let Some(index) = self.holding.iter().position(|&t| t == tile) {
                    self.holding.remove(index);
                }
            }
            Location::Slot(slot) => {
                debug_assert_eq!(self.slots[slot], Some(tile));
                self.slots[slot] = None;
            }
        }
        from
    }

    /// Verifies the model invariants.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        for (slot, occupant) in self.slots.entries() {
            if let Some(tile) = *occupant
                && self.tiles[tile].location() != Location::Slot(slot)
            {
                return Err(InvariantViolation::OccupancyMismatch { slot });
            }
        }

        for tile in self.tiles.iter() {
            let id = tile.id();
            let holding_count = self.holding.iter().filter(|&&t| t == id).count();
            match tile.location() {
                Location::Holding if holding_count != 1 => {
                    return Err(InvariantViolation::HoldingMismatch { tile: id });
                }
                Location::Slot(_) if holding_count != 0 => {
                    return Err(InvariantViolation::HoldingMismatch { tile: id });
                }
                Location::Slot(slot) if self.slots[slot] != Some(id) => {
                    return Err(InvariantViolation::OccupancyMismatch { slot });
                }
                _ => {}
            }
            if tile.is_solved() != (tile.location() == Location::Slot(tile.correct_slot())) {
                return Err(InvariantViolation::StaleSolvedFlag { tile: id });
            }
        }

        Ok(())
    }
}
