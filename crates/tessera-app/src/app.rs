//! Tessera desktop application UI.
//!
//! # Design Notes
//! - The board is sized from the central panel; any change of that size starts
//!   a fresh puzzle, the same as pressing "New layout".
//! - Tiles are moved by drag-and-drop or sent home with a double-click.
//! - The completion message is polled each frame and appears a short moment
//!   after the last tile lands.

use std::time::Instant;

use eframe::{
    App, CreationContext, Frame,
    egui::{CentralPanel, Context, SidePanel},
};

use crate::{
    action::{Action, ActionRequestQueue},
    action_handler,
    config::Args,
    state::{AppState, ModalKind, UiState},
    ui, view_model_builder,
};

const SIDEBAR_WIDTH: f32 = 240.0;

#[derive(Debug)]
pub struct TesseraApp {
    app_state: AppState,
    ui_state: UiState,
}

impl TesseraApp {
    #[must_use]
    pub fn new(_cc: &CreationContext<'_>, args: &Args) -> Self {
        Self {
            app_state: AppState::new(args.session_config(), args.settings()),
            ui_state: UiState::default(),
        }
    }

    fn poll_completion(&mut self, ctx: &Context, now: Instant, action_queue: &mut ActionRequestQueue) {
        let Some(session) = &mut self.app_state.session else {
            return;
        };
        if let Some(completion) = session.poll_completion(now) {
            action_queue.request(Action::OpenModal(ModalKind::Completion(completion)));
        } else if let Some(wait) = session.time_until_completion(now) {
            ctx.request_repaint_after(wait);
        }
    }
}

impl App for TesseraApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let now = Instant::now();
        let mut action_queue = ActionRequestQueue::default();

        self.poll_completion(ctx, now, &mut action_queue);
        action_handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut action_queue, now);

        if self.ui_state.active_modal.is_none() {
            ctx.input(|i| {
                ui::input::handle_input(i, &mut action_queue);
            });
            action_handler::handle_all(
                &mut self.app_state,
                &mut self.ui_state,
                &mut action_queue,
                now,
            );
        }

        let sidebar_vm = view_model_builder::build_sidebar_vm(&self.app_state);
        SidePanel::right("sidebar")
            .resizable(false)
            .exact_width(SIDEBAR_WIDTH)
            .show(ctx, |ui| {
                ui::sidebar::show(ui, &sidebar_vm, &mut action_queue);
            });

        let game_screen_vm = view_model_builder::build_game_screen_vm(&self.app_state);
        CentralPanel::default().show(ctx, |ui| {
            let area = ui.available_size();
            if self.ui_state.observe_board_area(area) {
                let tile_size = ui::layout::fit_tile_size(area);
                action_queue.request(if game_screen_vm.is_some() {
                    Action::Resize { tile_size }
                } else {
                    Action::Initialize { tile_size }
                });
                ui.ctx().request_repaint();
            }
            if let Some(vm) = &game_screen_vm {
                ui::game_screen::show(ui, vm, &mut action_queue);
            }
        });

        if let Some(kind) = self.ui_state.active_modal {
            ui::dialogs::show(ctx, kind, &mut action_queue);
        }

        action_handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut action_queue, now);
    }
}
