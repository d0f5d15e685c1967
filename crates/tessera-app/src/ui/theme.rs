use eframe::egui::{Color32, Visuals};

/// Color palette for board, tray and tile rendering.
#[derive(Debug, Clone)]
pub(crate) struct BoardPalette {
    pub(crate) slot_bg: Color32,
    pub(crate) slot_border: Color32,
    pub(crate) tray_bg: Color32,

    pub(crate) tile_border: Color32,
    pub(crate) tile_placeholder: Color32,
    pub(crate) drag_shadow: Color32,

    pub(crate) drop_accept: Color32,
    pub(crate) drop_reject: Color32,

    pub(crate) number_bg: Color32,
    pub(crate) number_text: Color32,
}

impl BoardPalette {
    pub(crate) fn from_visuals(visuals: &Visuals) -> Self {
        Self {
            slot_bg: visuals.extreme_bg_color,
            slot_border: visuals.widgets.noninteractive.bg_stroke.color,
            tray_bg: visuals.faint_bg_color,

            tile_border: visuals.widgets.inactive.fg_stroke.color,
            tile_placeholder: visuals.widgets.inactive.weak_bg_fill,
            drag_shadow: visuals.window_shadow.color,

            drop_accept: visuals.selection.stroke.color,
            drop_reject: visuals.error_fg_color,

            number_bg: visuals.window_fill.gamma_multiply(0.8),
            number_text: visuals.strong_text_color(),
        }
    }
}

/// Holds light/dark palettes and selects one based on current visuals.
#[derive(Debug, Clone)]
pub(crate) struct BoardTheme {
    pub(crate) light: BoardPalette,
    pub(crate) dark: BoardPalette,
}

impl BoardTheme {
    pub(crate) fn from_visuals(visuals: &Visuals) -> Self {
        let palette = BoardPalette::from_visuals(visuals);
        Self {
            light: palette.clone(),
            dark: palette,
        }
    }

    pub(crate) fn palette_for(&self, visuals: &Visuals) -> &BoardPalette {
        if visuals.dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }
}
