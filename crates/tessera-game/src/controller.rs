use std::time::{Duration, Instant};

use tessera_core::{SlotId, TileId};

use crate::{Completion, IntentError, Move, PuzzleModel, WinDetector};

/// Where a dragged tile was released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum DropTarget {
    /// A board slot.
    #[display("slot {_0}")]
    Slot(SlotId),
    /// The holding area.
    #[display("holding")]
    Holding,
}

/// Applies player intents to the [`PuzzleModel`].
///
/// The controller is the only writer of the model. Every committed move is
/// followed by a check of the [`WinDetector`]. Rejected intents leave the model
/// untouched; the tile was never moved, so there is nothing to undo.
#[derive(Debug, Clone)]
pub struct PlacementController {
    model: PuzzleModel,
    win: WinDetector,
    dragging: Option<TileId>,
    moves: usize,
}

impl PlacementController {
    /// Creates a controller that owns `model`.
    #[must_use]
    pub fn new(model: PuzzleModel, win: WinDetector) -> Self {
        Self {
            model,
            win,
            dragging: None,
            moves: 0,
        }
    }

    /// Returns the model.
    #[must_use]
    pub fn model(&self) -> &PuzzleModel {
        &self.model
    }

    /// Returns the tile being dragged, if any.
    #[must_use]
    pub fn dragging(&self) -> Option<TileId> {
        self.dragging
    }

    /// Returns the number of committed moves.
    #[must_use]
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Returns `true` if `tile` may be picked up. Solved tiles are pinned.
    #[must_use]
    pub fn is_draggable(&self, tile: TileId) -> bool {
        !self.model.is_solved(tile)
    }

    /// Starts dragging `tile`, replacing any unfinished drag.
    ///
    /// # Errors
    ///
    /// Returns [`IntentError::TilePinned`] if the tile is solved.
    pub fn begin_drag(&mut self, tile: TileId) -> Result<(), IntentError> {
        if !self.is_draggable(tile) {
            log::trace!("refusing to drag pinned tile {tile}");
            return Err(IntentError::TilePinned(tile));
        }
        self.dragging = Some(tile);
        Ok(())
    }

    /// Abandons the current drag without changing the model.
    pub fn cancel_drag(&mut self) -> Option<TileId> {
        self.dragging.take()
    }

    /// Releases the dragged tile over `target`.
    ///
    /// The drag ends whether or not the drop is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`IntentError::NoActiveDrag`] if no drag is in progress, or
    /// [`IntentError::Placement`] if the target slot is occupied.
    pub fn drop_on(&mut self, target: DropTarget, now: Instant) -> Result<Move, IntentError> {
        let tile = self.dragging.take().ok_or(IntentError::NoActiveDrag)?;
        let mv = match target {
            DropTarget::Slot(slot) => self.model.place_in_slot(tile, slot).inspect_err(|err| {
                log::debug!("drop of tile {tile} rejected: {err}");
            })?,
            DropTarget::Holding => self.model.return_to_holding(tile),
        };
        self.commit(mv, now);
        Ok(mv)
    }

    /// Sends `tile` straight to its own slot.
    ///
    /// # Errors
    ///
    /// Returns [`IntentError::Placement`] if the home slot is occupied, which is
    /// also the case when the tile is already solved.
    pub fn direct_place(&mut self, tile: TileId, now: Instant) -> Result<Move, IntentError> {
        let mv = self
            .model
            .place_in_slot(tile, tile.home_slot())
            .inspect_err(|err| log::debug!("direct placement of tile {tile} ignored: {err}"))?;
        if self.dragging == Some(tile) {
            self.dragging = None;
        }
        self.commit(mv, now);
        Ok(mv)
    }

    /// Returns the completion event once it is due.
    pub fn poll_completion(&mut self, now: Instant) -> Option<Completion> {
        self.win.poll(now)
    }

    /// Returns how long until a pending completion event becomes due.
    #[must_use]
    pub fn time_until_completion(&self, now: Instant) -> Option<Duration> {
        self.win.time_until_due(now)
    }

    /// Returns the win detector.
    #[must_use]
    pub fn win_detector(&self) -> &WinDetector {
        &self.win
    }

    fn commit(&mut self, mv: Move, now: Instant) {
        if !mv.is_unchanged() {
            self.moves += 1;
            log::debug!("tile {} moved from {} to {}", mv.tile, mv.from, mv.to);
        }
        debug_assert_eq!(self.model.check_invariants(), Ok(()));
        self.win.observe(&self.model, now, self.moves);
    }
}
