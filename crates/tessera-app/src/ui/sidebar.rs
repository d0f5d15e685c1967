use eframe::egui::{CollapsingHeader, ProgressBar, RichText, ScrollArea, Ui, widgets};
use tessera_core::TILE_COUNT;
use tessera_generator::ShuffleSeed;

use crate::{
    action::{Action, ActionRequestQueue},
    state::Settings,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PuzzleStatus {
    /// Waiting for the first frame to size the board.
    Preparing,
    InProgress,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Progress {
    pub(crate) solved: usize,
    pub(crate) moves: usize,
    pub(crate) seed: ShuffleSeed,
}

#[derive(Debug, Clone)]
pub(crate) struct SidebarViewModel<'a> {
    pub(crate) status: PuzzleStatus,
    pub(crate) progress: Option<Progress>,
    pub(crate) settings: &'a Settings,
}

impl<'a> SidebarViewModel<'a> {
    #[must_use]
    pub(crate) fn new(
        status: PuzzleStatus,
        progress: Option<Progress>,
        settings: &'a Settings,
    ) -> Self {
        Self {
            status,
            progress,
            settings,
        }
    }
}

#[expect(clippy::cast_precision_loss)]
fn solved_fraction(solved: usize) -> f32 {
    solved as f32 / TILE_COUNT as f32
}

pub(crate) fn show(ui: &mut Ui, vm: &SidebarViewModel, action_queue: &mut ActionRequestQueue) {
    ui.vertical(|ui| {
        ui.group(|ui| {
            let status_label = match vm.status {
                PuzzleStatus::Preparing => RichText::new("Preparing…"),
                PuzzleStatus::InProgress => RichText::new("Rebuild the picture"),
                PuzzleStatus::Finished => {
                    RichText::new("Picture complete!").color(ui.visuals().warn_fg_color)
                }
            };
            ui.label(status_label.size(20.0));

            if let Some(progress) = vm.progress {
                ui.add(
                    ProgressBar::new(solved_fraction(progress.solved))
                        .text(format!("{} / {TILE_COUNT} in place", progress.solved)),
                );
                ui.label(format!("Moves: {}", progress.moves));
            }
        });

        ui.add_space(4.0);
        if ui
            .button("New layout")
            .on_hover_text("Shuffle the tiles and start over (Ctrl+N)")
            .clicked()
        {
            action_queue.request(Action::RequestReset);
        }

        if let Some(progress) = vm.progress {
            let seed = progress.seed.to_string();
            ui.horizontal(|ui| {
                ui.label("Seed:");
                ui.label(RichText::new(&seed[..8]).monospace())
                    .on_hover_text(seed.as_str());
                if ui.small_button("Copy").clicked() {
                    ui.ctx().copy_text(seed.clone());
                }
            });
        }

        ui.separator();
        ui.label("Drag tiles from the tray onto the board. Double-click a tile to send it to its own slot.");
        ui.separator();

        let mut changed = false;
        let mut settings = vm.settings.clone();
        ScrollArea::vertical().show(ui, |ui| {
            CollapsingHeader::new("Settings")
                .default_open(true)
                .show(ui, |ui| {
                    let Settings {
                        show_tile_numbers,
                        highlight_drop_target,
                        confirm_reset,
                    } = &mut settings;
                    changed |= ui.checkbox(show_tile_numbers, "Show tile numbers").changed();
                    changed |= ui
                        .checkbox(highlight_drop_target, "Highlight drop target")
                        .changed();
                    changed |= ui
                        .checkbox(confirm_reset, "Confirm before starting over")
                        .changed();
                });

            CollapsingHeader::new("Appearance")
                .default_open(true)
                .show(ui, |ui| {
                    widgets::global_theme_preference_buttons(ui);
                });
        });
        if changed {
            action_queue.request(Action::UpdateSettings(settings));
        }
    });
}
