use tessera_core::{SlotId, TileId, containers::Array16};
use tessera_game::Session;

use crate::{
    state::AppState,
    ui::{
        board::BoardViewModel,
        game_screen::GameScreenViewModel,
        sidebar::{Progress, PuzzleStatus, SidebarViewModel},
        tile::{TileStyle, TileViewModel, TileVisualState},
        tray::TrayViewModel,
    },
};

fn tile_vm(session: &Session, tile: TileId) -> TileViewModel {
    let mut visual_state = TileVisualState::empty();
    if session.model().is_solved(tile) {
        visual_state |= TileVisualState::SOLVED;
    }
    if session.controller().dragging() == Some(tile) {
        visual_state |= TileVisualState::DRAGGING;
    }
    if session.is_finished() {
        visual_state |= TileVisualState::FINISHED;
    }
    if session.controller().is_draggable(tile) {
        visual_state |= TileVisualState::DRAGGABLE;
    }
    TileViewModel::new(tile, visual_state)
}

#[must_use]
pub(crate) fn build_game_screen_vm(app_state: &AppState) -> Option<GameScreenViewModel> {
    let session = app_state.session.as_ref()?;
    let settings = &app_state.settings;
    let dragging = session.controller().dragging().is_some();

    let slots = Array16::from_array(SlotId::ALL.map(|slot| {
        session
            .model()
            .occupant(slot)
            .map(|tile| tile_vm(session, tile))
    }));
    let board_vm = BoardViewModel::new(slots, dragging, settings.highlight_drop_target);

    let tray_vm = (!session.is_finished()).then(|| {
        let tiles = session
            .model()
            .holding()
            .iter()
            .map(|&tile| tile_vm(session, tile))
            .collect();
        TrayViewModel::new(tiles, dragging, settings.highlight_drop_target)
    });

    let style = TileStyle {
        layout: *session.layout(),
        generation: session.generation(),
        show_numbers: settings.show_tile_numbers,
    };
    Some(GameScreenViewModel::new(board_vm, tray_vm, style))
}

#[must_use]
pub(crate) fn build_sidebar_vm(app_state: &AppState) -> SidebarViewModel<'_> {
    let Some(session) = &app_state.session else {
        return SidebarViewModel::new(PuzzleStatus::Preparing, None, &app_state.settings);
    };
    let status = if session.is_finished() {
        PuzzleStatus::Finished
    } else {
        PuzzleStatus::InProgress
    };
    let progress = Progress {
        solved: session.model().solved_count(),
        moves: session.controller().moves(),
        seed: session.seed(),
    };
    SidebarViewModel::new(status, Some(progress), &app_state.settings)
}
