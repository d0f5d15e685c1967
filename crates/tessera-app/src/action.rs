use std::mem;

use tessera_core::TileId;
use tessera_game::DropTarget;

use crate::state::{ModalKind, Settings};

#[derive(Debug, Clone)]
pub(crate) enum Action {
    BeginDrag(TileId),
    DropOn(DropTarget),
    CancelDrag,
    DirectPlace(TileId),
    /// Builds the first puzzle once the tile size is known.
    Initialize {
        tile_size: f32,
    },
    RequestReset,
    Reset,
    Resize {
        tile_size: f32,
    },
    OpenModal(ModalKind),
    CloseModal,
    UpdateSettings(Settings),
}

#[derive(Debug, Default)]
pub(crate) struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub(crate) fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub(crate) fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }
}

#[cfg(test)]
mod tests {
    use super::{Action, ActionRequestQueue};

    #[test]
    fn take_all_returns_actions_and_clears_queue() {
        let mut queue = ActionRequestQueue::default();
        queue.request(Action::CancelDrag);
        queue.request(Action::Reset);

        let drained = queue.take_all();
        assert_eq!(drained.len(), 2);
        assert!(matches!(drained[0], Action::CancelDrag));
        assert!(matches!(drained[1], Action::Reset));

        let drained_again = queue.take_all();
        assert!(drained_again.is_empty());
    }
}
