use eframe::egui::Vec2;
use tessera_game::{Completion, Session, SessionConfig};

#[derive(Debug)]
pub(crate) struct AppState {
    /// `None` until the first frame has measured the board area.
    pub(crate) session: Option<Session>,
    pub(crate) session_config: SessionConfig,
    pub(crate) settings: Settings,
}

impl AppState {
    #[must_use]
    pub(crate) fn new(session_config: SessionConfig, settings: Settings) -> Self {
        Self {
            session: None,
            session_config,
            settings,
        }
    }

    /// Builds the first puzzle, or starts over if one is already running.
    pub(crate) fn initialize(&mut self, tile_size: f32) {
        match &mut self.session {
            Some(session) => session.initialize(tile_size),
            None => {
                self.session = Some(Session::new(self.session_config, tile_size));
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Settings {
    pub(crate) show_tile_numbers: bool,
    pub(crate) highlight_drop_target: bool,
    pub(crate) confirm_reset: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_tile_numbers: false,
            highlight_drop_target: true,
            confirm_reset: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ModalKind {
    ResetConfirm,
    Completion(Completion),
}

#[derive(Debug, Default)]
pub(crate) struct UiState {
    pub(crate) active_modal: Option<ModalKind>,
    /// Size of the board area seen on the previous frame.
    pub(crate) board_area: Option<Vec2>,
}

impl UiState {
    /// Records the measured board area and returns `true` if it changed.
    pub(crate) fn observe_board_area(&mut self, area: Vec2) -> bool {
        const TOLERANCE: f32 = 0.5;
        let changed = self
            .board_area
            .is_none_or(|prev| (prev - area).abs().max_elem() > TOLERANCE);
        if changed {
            self.board_area = Some(area);
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_board_area_counts_as_change() {
        let mut ui_state = UiState::default();
        assert!(ui_state.observe_board_area(Vec2::new(640.0, 480.0)));
        assert!(!ui_state.observe_board_area(Vec2::new(640.0, 480.0)));
        assert!(!ui_state.observe_board_area(Vec2::new(640.2, 479.9)));
        assert!(ui_state.observe_board_area(Vec2::new(700.0, 480.0)));
    }

    #[test]
    fn test_initialize_creates_then_rebuilds_session() {
        let mut app_state = AppState::new(SessionConfig::default(), Settings::default());
        assert!(app_state.session.is_none());

        app_state.initialize(40.0);
        let first = app_state.session.as_ref().map(Session::generation);
        assert_eq!(first, Some(1));

        app_state.initialize(50.0);
        let session = app_state.session.as_ref().unwrap();
        assert_eq!(session.generation(), 2);
        assert!((session.layout().tile_size() - 50.0).abs() < f32::EPSILON);
    }
}
