use eframe::egui::Ui;
use egui_extras::{Size, StripBuilder};

use super::{board, tray};
use crate::{
    action::ActionRequestQueue,
    ui::{
        board::BoardViewModel, drag::DragFrame, layout::BOARD_TRAY_GAP, theme::BoardTheme,
        tile::TileStyle, tray::TrayViewModel,
    },
};

#[derive(Debug, Clone)]
pub(crate) struct GameScreenViewModel {
    pub(crate) board_vm: BoardViewModel,
    /// `None` once the picture is complete.
    pub(crate) tray_vm: Option<TrayViewModel>,
    pub(crate) style: TileStyle,
}

impl GameScreenViewModel {
    #[must_use]
    pub(crate) fn new(
        board_vm: BoardViewModel,
        tray_vm: Option<TrayViewModel>,
        style: TileStyle,
    ) -> Self {
        Self {
            board_vm,
            tray_vm,
            style,
        }
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &GameScreenViewModel, action_queue: &mut ActionRequestQueue) {
    let theme = BoardTheme::from_visuals(ui.visuals());
    let palette = theme.palette_for(ui.visuals());
    let tile_size = vm.style.layout.tile_size();
    let board_side = vm.style.layout.board_side();
    let mut drag = DragFrame::default();

    let mut strip = StripBuilder::new(ui)
        .size(Size::remainder())
        .size(Size::exact(board_side));
    if vm.tray_vm.is_some() {
        strip = strip
            .size(Size::exact(tile_size * BOARD_TRAY_GAP))
            .size(Size::exact(tray::required_units().width * tile_size));
    }
    strip.size(Size::remainder()).horizontal(|mut strip| {
        strip.empty();
        strip.cell(|ui| {
            center_vertically(ui, board_side);
            board::show(ui, &vm.board_vm, &vm.style, palette, &mut drag, action_queue);
        });
        if let Some(tray_vm) = &vm.tray_vm {
            strip.empty();
            strip.cell(|ui| {
                center_vertically(ui, tray::required_units().height * tile_size);
                tray::show(ui, tray_vm, &vm.style, palette, &mut drag, action_queue);
            });
        }
        strip.empty();
    });

    drag.resolve(action_queue);
}

fn center_vertically(ui: &mut Ui, height: f32) {
    ui.add_space(((ui.available_height() - height) / 2.0).max(0.0));
}
