use std::time::Instant;

use crate::{
    action::{Action, ActionRequestQueue},
    state::{AppState, ModalKind, UiState},
};

#[derive(Debug)]
struct ActionContext<'a> {
    app_state: &'a mut AppState,
    ui_state: &'a mut UiState,
    now: Instant,
}

pub(crate) fn handle_all(
    app_state: &mut AppState,
    ui_state: &mut UiState,
    action_queue: &mut ActionRequestQueue,
    now: Instant,
) {
    for action in action_queue.take_all() {
        handle(app_state, ui_state, action, now);
    }
}

pub(crate) fn handle(app_state: &mut AppState, ui_state: &mut UiState, action: Action, now: Instant) {
    let mut ctx = ActionContext {
        app_state,
        ui_state,
        now,
    };

    match action {
        Action::BeginDrag(tile) => ctx.with_session(|session, _| {
            if let Err(err) = session.begin_drag(tile) {
                log::debug!("drag not started: {err}");
            }
        }),
        Action::DropOn(target) => ctx.with_session(|session, now| {
            if let Err(err) = session.drop_on(target, now) {
                log::debug!("drop on {target} not applied: {err}");
            }
        }),
        Action::CancelDrag => ctx.with_session(|session, _| {
            session.cancel_drag();
        }),
        Action::DirectPlace(tile) => ctx.with_session(|session, now| {
            if let Err(err) = session.direct_place(tile, now) {
                log::debug!("tile {tile} not sent home: {err}");
            }
        }),
        Action::Initialize { tile_size } => ctx.rebuild(|app_state| app_state.initialize(tile_size)),
        Action::RequestReset => {
            if ctx.app_state.settings.confirm_reset {
                ctx.ui_state.active_modal = Some(ModalKind::ResetConfirm);
            } else {
                ctx.reset();
            }
        }
        Action::Reset => ctx.reset(),
        Action::Resize { tile_size } => ctx.rebuild(|app_state| match &mut app_state.session {
            Some(session) => session.on_resize(tile_size),
            None => app_state.initialize(tile_size),
        }),
        Action::OpenModal(kind) => ctx.ui_state.active_modal = Some(kind),
        Action::CloseModal => ctx.ui_state.active_modal = None,
        Action::UpdateSettings(settings) => ctx.app_state.settings = settings,
    }
}

impl ActionContext<'_> {
    fn with_session<F>(&mut self, f: F)
    where
        F: FnOnce(&mut tessera_game::Session, Instant),
    {
        if let Some(session) = &mut self.app_state.session {
            f(session, self.now);
        }
    }

    fn reset(&mut self) {
        self.rebuild(|app_state| {
            if let Some(session) = &mut app_state.session {
                session.reset();
            }
        });
    }

    /// Runs a lifecycle rebuild and drops UI state tied to the discarded puzzle.
    fn rebuild<F>(&mut self, f: F)
    where
        F: FnOnce(&mut AppState),
    {
        f(&mut *self.app_state);
        // A completion message from the discarded puzzle no longer applies.
        if matches!(self.ui_state.active_modal, Some(ModalKind::Completion(_))) {
            self.ui_state.active_modal = None;
        }
    }
}
