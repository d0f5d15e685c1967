pub mod board;
pub mod dialogs;
pub mod drag;
pub mod game_screen;
pub mod input;
pub mod layout;
pub mod picture;
pub mod sidebar;
pub mod theme;
pub mod tile;
pub mod tray;
