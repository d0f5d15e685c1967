use eframe::egui::{Pos2, Rect, Sense, Stroke, StrokeKind, Ui, Vec2};
use tessera_core::{GRID_SIZE, SlotId, containers::Array16, index::SlotSemantics};
use tessera_game::{DropTarget, TileLayout};

use crate::{
    action::ActionRequestQueue,
    ui::{
        drag::DragFrame,
        layout::ComponentUnits,
        theme::BoardPalette,
        tile::{self, TileStyle, TileViewModel},
    },
};

#[derive(Debug, Clone)]
pub(crate) struct BoardViewModel {
    pub(crate) slots: Array16<Option<TileViewModel>, SlotSemantics>,
    pub(crate) dragging: bool,
    pub(crate) highlight_drop_target: bool,
}

impl BoardViewModel {
    #[must_use]
    pub(crate) fn new(
        slots: Array16<Option<TileViewModel>, SlotSemantics>,
        dragging: bool,
        highlight_drop_target: bool,
    ) -> Self {
        Self {
            slots,
            dragging,
            highlight_drop_target,
        }
    }
}

#[must_use]
pub(crate) fn required_units() -> ComponentUnits {
    let side = f32::from(GRID_SIZE);
    ComponentUnits::new(side, side)
}

#[must_use]
pub(crate) fn slot_rect(board_min: Pos2, layout: &TileLayout, slot: SlotId) -> Rect {
    Rect::from_min_size(
        board_min + Vec2::from(layout.slot_origin(slot)),
        Vec2::splat(layout.tile_size()),
    )
}

pub(crate) fn show(
    ui: &mut Ui,
    vm: &BoardViewModel,
    style: &TileStyle,
    palette: &BoardPalette,
    drag: &mut DragFrame,
    action_queue: &mut ActionRequestQueue,
) {
    let layout = &style.layout;
    let (rect, _) = ui.allocate_exact_size(Vec2::splat(layout.board_side()), Sense::hover());
    ui.painter().rect_filled(rect, 0.0, palette.slot_bg);

    let slot_stroke = Stroke::new(1.0, palette.slot_border);
    let highlight_width = (layout.tile_size() * 0.06).max(2.0);

    for (slot, content) in vm.slots.entries() {
        let slot_rect = slot_rect(rect.min, layout, slot);
        drag.zones.register(slot_rect, DropTarget::Slot(slot));

        match content {
            Some(tile_vm) => tile::show(ui, slot_rect, tile_vm, style, palette, drag, action_queue),
            None => {
                ui.painter()
                    .rect_stroke(slot_rect, 0.0, slot_stroke, StrokeKind::Inside);
            }
        }

        if vm.dragging && vm.highlight_drop_target && ui.rect_contains_pointer(slot_rect) {
            let color = if content.is_some() {
                palette.drop_reject
            } else {
                palette.drop_accept
            };
            ui.painter().rect_stroke(
                slot_rect,
                0.0,
                Stroke::new(highlight_width, color),
                StrokeKind::Inside,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_rects_tile_the_board() {
        let layout = TileLayout::new(25.0);
        let origin = Pos2::new(10.0, 20.0);

        let first = slot_rect(origin, &layout, SlotId::new(0));
        let last = slot_rect(origin, &layout, SlotId::new(15));

        assert_eq!(first.min, origin);
        assert_eq!(last.max, origin + Vec2::splat(layout.board_side()));
        assert_eq!(
            slot_rect(origin, &layout, SlotId::from_row_col(2, 1)).min,
            Pos2::new(35.0, 70.0)
        );
    }
}
