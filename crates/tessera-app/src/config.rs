use std::time::Duration;

use clap::Parser;
use tessera_game::SessionConfig;
use tessera_generator::ShuffleSeed;

use crate::state::Settings;

/// Command-line options for the desktop app.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Seed for the first layout (64 hex digits). Later layouts are random.
    #[arg(long, value_name = "HEX")]
    pub seed: Option<ShuffleSeed>,

    /// Delay between the final placement and the completion message.
    #[arg(long, value_name = "MS", default_value_t = 100)]
    pub completion_delay_ms: u64,

    /// Draw each tile's number in its corner.
    #[arg(long)]
    pub show_numbers: bool,
}

impl Args {
    #[must_use]
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig::default()
            .completion_delay(Duration::from_millis(self.completion_delay_ms))
            .initial_seed(self.seed)
    }

    #[must_use]
    pub(crate) fn settings(&self) -> Settings {
        Settings {
            show_tile_numbers: self.show_numbers,
            ..Settings::default()
        }
    }
}
