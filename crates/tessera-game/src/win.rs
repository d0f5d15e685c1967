use std::time::{Duration, Instant};

use crate::PuzzleModel;

/// The one-shot event raised when every tile is solved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    /// Lifecycle generation the event belongs to.
    pub generation: u64,
    /// Number of committed moves it took.
    pub moves: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
enum WinState {
    Armed,
    Pending { due: Instant, completion: Completion },
    Delivered,
}

/// Detects puzzle completion and delivers the [`Completion`] event once.
///
/// [`observe`](Self::observe) is run after every committed move. The first time it
/// sees an all-solved model it schedules the event; [`poll`](Self::poll) hands the
/// event out once the configured delay has passed. After delivery the detector
/// stays quiet for the rest of its lifecycle.
///
/// # Example
///
/// ```
/// use std::time::{Duration, Instant};
///
/// use tessera_core::TileId;
/// use tessera_game::{PuzzleModel, WinDetector};
/// use tessera_generator::PermutationGenerator;
///
/// let mut model = PuzzleModel::new(&PermutationGenerator::new().generate());
/// let mut detector = WinDetector::new(1, Duration::from_millis(100));
/// let now = Instant::now();
///
/// for tile in TileId::ALL {
///     model.place_in_slot(tile, tile.home_slot()).unwrap();
/// }
/// assert!(detector.observe(&model, now, 16));
/// assert!(!detector.observe(&model, now, 16));
///
/// assert_eq!(detector.poll(now), None);
/// let completion = detector.poll(now + Duration::from_millis(100)).unwrap();
/// assert_eq!(completion.moves, 16);
/// assert_eq!(detector.poll(now + Duration::from_secs(1)), None);
/// ```
#[derive(Debug, Clone)]
pub struct WinDetector {
    generation: u64,
    delay: Duration,
    state: WinState,
}

impl WinDetector {
    /// Creates an armed detector for the given lifecycle generation.
    #[must_use]
    pub fn new(generation: u64, delay: Duration) -> Self {
        Self {
            generation,
            delay,
            state: WinState::Armed,
        }
    }

    /// Checks the model after a committed move.
    ///
    /// Returns `true` if this call scheduled the completion event.
    pub fn observe(&mut self, model: &PuzzleModel, now: Instant, moves: usize) -> bool {
        if !self.state.is_armed() || !model.all_solved() {
            return false;
        }
        let completion = Completion {
            generation: self.generation,
            moves,
        };
        self.state = WinState::Pending {
            due: now + self.delay,
            completion,
        };
        log::info!(
            "puzzle solved in {moves} moves, completion due in {:?}",
            self.delay
        );
        true
    }

    /// Returns the completion event if it is due and has not been delivered yet.
    pub fn poll(&mut self, now: Instant) -> Option<Completion> {
        match self.state {
            WinState::Pending { due, completion } if now >= due => {
                self.state = WinState::Delivered;
                Some(completion)
            }
            _ => None,
        }
    }

    /// Returns how long until a pending event becomes due.
    #[must_use]
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        match self.state {
            WinState::Pending { due, .. } => Some(due.saturating_duration_since(now)),
            WinState::Armed | WinState::Delivered => None,
        }
    }

    /// Returns `true` once the all-solved transition has been seen.
    #[must_use]
    pub fn is_triggered(&self) -> bool {
        !self.state.is_armed()
    }

    /// Returns `true` once the event has been handed out.
    #[must_use]
    pub fn is_delivered(&self) -> bool {
        self.state.is_delivered()
    }
}

#[cfg(test)]
mod tests {
    use tessera_core::{SlotId, TileId};
    use tessera_generator::PermutationGenerator;

    use super::*;

    const DELAY: Duration = Duration::from_millis(100);

    fn solved_model() -> PuzzleModel {
        let mut model = PuzzleModel::new(&PermutationGenerator::new().generate());
        for tile in TileId::ALL {
            model.place_in_slot(tile, tile.home_slot()).unwrap();
        }
        model
    }

    #[test]
    fn test_does_not_trigger_before_all_solved() {
        let mut model = PuzzleModel::new(&PermutationGenerator::new().generate());
        let mut detector = WinDetector::new(1, DELAY);
        let now = Instant::now();

        for tile in &TileId::ALL[..15] {
            model.place_in_slot(*tile, tile.home_slot()).unwrap();
            assert!(!detector.observe(&model, now, 0));
        }
        assert!(!detector.is_triggered());
        assert_eq!(detector.poll(now + Duration::from_secs(10)), None);
    }

    #[test]
    fn test_delivers_after_delay_exactly_once() {
        let model = solved_model();
        let mut detector = WinDetector::new(7, DELAY);
        let now = Instant::now();

        assert!(detector.observe(&model, now, 20));
        assert!(detector.is_triggered());
        assert_eq!(detector.time_until_due(now), Some(DELAY));

        assert_eq!(detector.poll(now + DELAY / 2), None);
        assert_eq!(
            detector.poll(now + DELAY),
            Some(Completion {
                generation: 7,
                moves: 20,
            })
        );
        assert!(detector.is_delivered());
        assert_eq!(detector.time_until_due(now + DELAY), None);
        assert_eq!(detector.poll(now + DELAY * 2), None);
    }

    #[test]
    fn test_reobserving_does_not_reschedule() {
        let model = solved_model();
        let mut detector = WinDetector::new(1, DELAY);
        let now = Instant::now();

        assert!(detector.observe(&model, now, 16));
        assert!(!detector.observe(&model, now + DELAY / 2, 17));
        let completion = detector.poll(now + DELAY).unwrap();
        assert_eq!(completion.moves, 16);

        assert!(!detector.observe(&model, now + DELAY * 3, 18));
        assert_eq!(detector.poll(now + DELAY * 4), None);
    }

    #[test]
    fn test_zero_delay_is_due_immediately() {
        let model = solved_model();
        let mut detector = WinDetector::new(1, Duration::ZERO);
        let now = Instant::now();

        detector.observe(&model, now, 16);
        assert!(detector.poll(now).is_some());
    }

    #[test]
    fn test_unsolved_slot_keeps_detector_armed() {
        let mut model = solved_model();
        model.return_to_holding(TileId::new(0));
        model.place_in_slot(TileId::new(0), SlotId::new(0)).unwrap();
        model.return_to_holding(TileId::new(0));

        let mut detector = WinDetector::new(1, DELAY);
        assert!(!detector.observe(&model, Instant::now(), 3));
        assert!(!detector.is_triggered());
    }
}
