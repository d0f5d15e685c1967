use std::time::Duration;

use tessera_generator::ShuffleSeed;

/// Delay between the final placement and delivery of the completion event.
pub const DEFAULT_COMPLETION_DELAY: Duration = Duration::from_millis(100);

/// Settings for a puzzle [`Session`](crate::Session).
///
/// # Example
///
/// ```
/// use std::time::Duration;
///
/// use tessera_game::SessionConfig;
///
/// let config = SessionConfig::default().completion_delay(Duration::from_millis(250));
/// assert_eq!(config.completion_delay, Duration::from_millis(250));
/// assert!(config.initial_seed.is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// How long after the final placement the completion event becomes due.
    pub completion_delay: Duration,
    /// Seed for the first layout; later layouts always use fresh seeds.
    pub initial_seed: Option<ShuffleSeed>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            completion_delay: DEFAULT_COMPLETION_DELAY,
            initial_seed: None,
        }
    }
}

impl SessionConfig {
    /// Sets the completion delay.
    #[must_use]
    pub fn completion_delay(mut self, delay: Duration) -> Self {
        self.completion_delay = delay;
        self
    }

    /// Sets the seed used for the first layout.
    #[must_use]
    pub fn initial_seed(mut self, seed: Option<ShuffleSeed>) -> Self {
        self.initial_seed = seed;
        self
    }
}
