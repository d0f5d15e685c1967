use eframe::egui::{Pos2, Rect};
use tessera_game::DropTarget;

use crate::action::{Action, ActionRequestQueue};

/// Screen regions that accept a dropped tile, collected while drawing a frame.
#[derive(Debug, Default, Clone)]
pub(crate) struct DropZones {
    zones: Vec<(Rect, DropTarget)>,
}

impl DropZones {
    pub(crate) fn register(&mut self, rect: Rect, target: DropTarget) {
        self.zones.push((rect, target));
    }

    /// Returns the target under `pos`. The first registered zone wins.
    #[must_use]
    pub(crate) fn target_at(&self, pos: Pos2) -> Option<DropTarget> {
        self.zones
            .iter()
            .find(|(rect, _)| rect.contains(pos))
            .map(|&(_, target)| target)
    }
}

/// Drag bookkeeping for a single frame.
#[derive(Debug, Default)]
pub(crate) struct DragFrame {
    pub(crate) zones: DropZones,
    released_at: Option<Option<Pos2>>,
}

impl DragFrame {
    /// Records that the dragged tile was let go at `pos`.
    pub(crate) fn release(&mut self, pos: Option<Pos2>) {
        self.released_at = Some(pos);
    }

    /// Turns a release into a drop or a cancellation.
    pub(crate) fn resolve(self, action_queue: &mut ActionRequestQueue) {
        let Some(pos) = self.released_at else {
            return;
        };
        match pos.and_then(|pos| self.zones.target_at(pos)) {
            Some(target) => action_queue.request(Action::DropOn(target)),
            None => action_queue.request(Action::CancelDrag),
        }
    }
}
