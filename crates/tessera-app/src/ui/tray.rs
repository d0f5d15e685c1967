use eframe::egui::{Pos2, Rect, Sense, Stroke, StrokeKind, Ui, Vec2};
use tessera_core::GRID_SIZE;
use tessera_game::DropTarget;

use crate::{
    action::ActionRequestQueue,
    ui::{
        drag::DragFrame,
        layout::ComponentUnits,
        theme::BoardPalette,
        tile::{self, TileStyle, TileViewModel},
    },
};

/// Gap between tray cells, relative to the tile size.
const SPACING_FACTOR: f32 = 0.08;

/// The holding area, listing loose tiles in holding order.
#[derive(Debug, Clone)]
pub(crate) struct TrayViewModel {
    pub(crate) tiles: Vec<TileViewModel>,
    pub(crate) dragging: bool,
    pub(crate) highlight_drop_target: bool,
}

impl TrayViewModel {
    #[must_use]
    pub(crate) fn new(tiles: Vec<TileViewModel>, dragging: bool, highlight_drop_target: bool) -> Self {
        Self {
            tiles,
            dragging,
            highlight_drop_target,
        }
    }
}

#[must_use]
pub(crate) fn required_units() -> ComponentUnits {
    let cells = f32::from(GRID_SIZE);
    let side = cells + (cells - 1.0) * SPACING_FACTOR;
    ComponentUnits::new(side, side)
}

/// Returns the rectangle of the `index`-th cell, filled row by row.
#[must_use]
pub(crate) fn cell_rect(tray_min: Pos2, tile_size: f32, index: u8) -> Rect {
    let pitch = tile_size * (1.0 + SPACING_FACTOR);
    let col = f32::from(index % GRID_SIZE);
    let row = f32::from(index / GRID_SIZE);
    Rect::from_min_size(
        tray_min + Vec2::new(col, row) * pitch,
        Vec2::splat(tile_size),
    )
}

pub(crate) fn show(
    ui: &mut Ui,
    vm: &TrayViewModel,
    style: &TileStyle,
    palette: &BoardPalette,
    drag: &mut DragFrame,
    action_queue: &mut ActionRequestQueue,
) {
    let tile_size = style.layout.tile_size();
    let units = required_units();
    let (rect, _) = ui.allocate_exact_size(
        Vec2::new(units.width, units.height) * tile_size,
        Sense::hover(),
    );
    ui.painter()
        .rect_filled(rect, tile_size * 0.05, palette.tray_bg);
    drag.zones.register(rect, DropTarget::Holding);

    for (tile_vm, index) in vm.tiles.iter().zip(0u8..) {
        let cell = cell_rect(rect.min, tile_size, index);
        tile::show(ui, cell, tile_vm, style, palette, drag, action_queue);
    }

    if vm.dragging && vm.highlight_drop_target && ui.rect_contains_pointer(rect) {
        ui.painter().rect_stroke(
            rect,
            tile_size * 0.05,
            Stroke::new((tile_size * 0.06).max(2.0), palette.drop_accept),
            StrokeKind::Inside,
        );
    }
}
