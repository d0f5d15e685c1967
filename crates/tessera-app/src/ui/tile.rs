use eframe::egui::{
    Align2, CursorIcon, FontId, Id, LayerId, Order, Painter, Rect, Sense, Stroke, StrokeKind, Ui,
    Vec2,
};
use tessera_core::TileId;
use tessera_game::TileLayout;

use crate::{
    action::{Action, ActionRequestQueue},
    ui::{drag::DragFrame, picture, theme::BoardPalette},
};

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(crate) struct TileVisualState: u8 {
        /// Sits in its own slot and can no longer be moved.
        const SOLVED = 0b0000_0001;
        /// Currently picked up by the player.
        const DRAGGING = 0b0000_0010;
        /// Part of a completed picture.
        const FINISHED = 0b0000_0100;
        /// May be picked up by the player.
        const DRAGGABLE = 0b0000_1000;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TileViewModel {
    pub(crate) tile: TileId,
    pub(crate) visual_state: TileVisualState,
}

impl TileViewModel {
    #[must_use]
    pub(crate) fn new(tile: TileId, visual_state: TileVisualState) -> Self {
        Self { tile, visual_state }
    }

    #[must_use]
    pub(crate) fn is_draggable(&self) -> bool {
        self.visual_state.contains(TileVisualState::DRAGGABLE)
    }

    /// Border drawn around the tile; solved tiles blend into the picture.
    #[must_use]
    fn border(&self, palette: &BoardPalette, tile_size: f32) -> Option<Stroke> {
        if self.visual_state.contains(TileVisualState::SOLVED) {
            return None;
        }
        Some(Stroke::new((tile_size * 0.03).max(1.0), palette.tile_border))
    }
}

/// Settings shared by every tile drawn in a frame.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TileStyle {
    pub(crate) layout: TileLayout,
    pub(crate) generation: u64,
    pub(crate) show_numbers: bool,
}

impl TileStyle {
    fn tile_id(&self, tile: TileId) -> Id {
        Id::new(("tessera_tile", self.generation, tile.id()))
    }
}

/// Draws a tile at `rect` and turns pointer input on it into actions.
pub(crate) fn show(
    ui: &mut Ui,
    rect: Rect,
    vm: &TileViewModel,
    style: &TileStyle,
    palette: &BoardPalette,
    drag: &mut DragFrame,
    action_queue: &mut ActionRequestQueue,
) {
    let sense = if vm.is_draggable() {
        Sense::click_and_drag()
    } else {
        Sense::hover()
    };
    let response = ui.interact(rect, style.tile_id(vm.tile), sense);

    paint_tile(ui.painter(), rect, vm, style, palette);
    if vm.visual_state.contains(TileVisualState::DRAGGING) || response.dragged() {
        // Faded copy left behind while the tile follows the pointer.
        ui.painter()
            .rect_filled(rect, 0.0, palette.tile_placeholder.gamma_multiply(0.7));
    }

    if !vm.is_draggable() {
        return;
    }

    if response.hovered() && !response.dragged() {
        ui.ctx().set_cursor_icon(CursorIcon::Grab);
    }
    if response.drag_started() {
        action_queue.request(Action::BeginDrag(vm.tile));
    }
    if response.dragged()
        && let Some(pointer) = ui.ctx().pointer_interact_pos()
    {
        ui.ctx().set_cursor_icon(CursorIcon::Grabbing);
        let layer = LayerId::new(Order::Tooltip, Id::new("tessera_dragged_tile"));
        let painter = ui.ctx().layer_painter(layer);
        let floating = Rect::from_center_size(pointer, rect.size());
        painter.rect_filled(
            floating.translate(Vec2::splat(rect.width() * 0.06)),
            0.0,
            palette.drag_shadow,
        );
        paint_tile(&painter, floating, vm, style, palette);
    }
    if response.drag_stopped() {
        drag.release(ui.ctx().pointer_interact_pos());
    }
    if response.double_clicked() {
        action_queue.request(Action::DirectPlace(vm.tile));
    }
}

fn paint_tile(
    painter: &Painter,
    rect: Rect,
    vm: &TileViewModel,
    style: &TileStyle,
    palette: &BoardPalette,
) {
    let offset = Vec2::from(style.layout.picture_offset(vm.tile));
    picture::paint_tile_picture(painter, rect, offset, style.layout.board_side());

    if let Some(stroke) = vm.border(palette, rect.width()) {
        painter.rect_stroke(rect, 0.0, stroke, StrokeKind::Inside);
    }

    if style.show_numbers && !vm.visual_state.contains(TileVisualState::FINISHED) {
        let font_size = rect.height() * 0.22;
        let badge = Rect::from_min_size(
            rect.min + Vec2::splat(font_size * 0.2),
            Vec2::new(font_size * 1.6, font_size * 1.3),
        );
        painter.rect_filled(badge, font_size * 0.3, palette.number_bg);
        painter.text(
            badge.center(),
            Align2::CENTER_CENTER,
            vm.tile.to_string(),
            FontId::proportional(font_size),
            palette.number_text,
        );
    }
}
