use eframe::egui::Vec2;
use tessera_game::TileLayout;

use crate::ui::{board, tray};

#[derive(Debug, Clone, Copy)]
pub(crate) struct ComponentUnits {
    pub(crate) width: f32,
    pub(crate) height: f32,
}

impl ComponentUnits {
    #[must_use]
    pub(crate) const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Horizontal gap between the board and the holding area, in tiles.
pub(crate) const BOARD_TRAY_GAP: f32 = 0.5;

/// Share of the available area the board and tray may occupy.
const FILL_RATIO: f32 = 0.95;

/// Returns the total size of the game screen in tile units.
#[must_use]
pub(crate) fn screen_units() -> ComponentUnits {
    let board = board::required_units();
    let tray = tray::required_units();
    ComponentUnits::new(
        board.width + BOARD_TRAY_GAP + tray.width,
        board.height.max(tray.height),
    )
}

/// Computes the largest tile size that fits the board and tray into `available`.
#[must_use]
pub(crate) fn fit_tile_size(available: Vec2) -> f32 {
    let units = screen_units();
    let size = (available.x / units.width).min(available.y / units.height) * FILL_RATIO;
    if size.is_finite() {
        size.max(TileLayout::MIN_TILE_SIZE)
    } else {
        TileLayout::MIN_TILE_SIZE
    }
}
