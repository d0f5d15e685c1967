//! Property-based tests: random intent sequences never break the model.
//!
//! 1. Occupancy is unique and agrees with tile locations.
//! 2. A tile is solved exactly when it sits in its home slot.
//! 3. Rejected placements never move either tile.
//! 4. Completion is delivered at most once, and only when every tile is solved.
//! 5. Reset always returns to a fresh state.

use std::{
    collections::HashSet,
    time::{Duration, Instant},
};

use proptest::prelude::*;
use tessera_core::{Location, SlotId, TileId};
use tessera_game::{DropTarget, IntentError, Session, SessionConfig};
use tessera_generator::ShuffleSeed;

#[derive(Debug, Clone)]
enum Intent {
    Drag { tile: u8, target: Option<u8> },
    Cancel { tile: u8 },
    DirectPlace { tile: u8 },
    Reset,
}

fn intent_strategy() -> impl Strategy<Value = Intent> {
    prop_oneof![
        6 => (0u8..16, proptest::option::of(0u8..16))
            .prop_map(|(tile, target)| Intent::Drag { tile, target }),
        1 => (0u8..16).prop_map(|tile| Intent::Cancel { tile }),
        4 => (0u8..16).prop_map(|tile| Intent::DirectPlace { tile }),
        1 => Just(Intent::Reset),
    ]
}

fn new_session(seed: [u8; 32]) -> Session {
    let config = SessionConfig::default()
        .completion_delay(Duration::ZERO)
        .initial_seed(Some(ShuffleSeed::from_bytes(seed)));
    Session::new(config, 32.0)
}

fn assert_occupancy_unique(session: &Session) -> Result<(), TestCaseError> {
    let mut seen = HashSet::new();
    for tile in session.model().tiles() {
        if let Location::Slot(slot) = tile.location() {
            prop_assert!(seen.insert(slot), "slot {slot} reported twice");
            prop_assert_eq!(session.model().occupant(slot), Some(tile.id()));
        }
        prop_assert_eq!(
            tile.is_solved(),
            tile.location() == Location::Slot(tile.correct_slot())
        );
    }
    prop_assert_eq!(seen.len() + session.model().holding().len(), 16);
    Ok(())
}

proptest! {
    #[test]
    fn test_invariants_hold_under_random_intents(
        seed in any::<[u8; 32]>(),
        intents in proptest::collection::vec(intent_strategy(), 0..200),
    ) {
        let mut session = new_session(seed);
        let now = Instant::now();
        let mut completions = 0;

        for intent in intents {
            let before = session.model().clone();
            match intent {
                Intent::Drag { tile, target } => {
                    let tile = TileId::new(tile);
                    let target = target.map_or(DropTarget::Holding, |s| DropTarget::Slot(SlotId::new(s)));
                    match session.begin_drag(tile) {
                        Ok(()) => {
                            if let Err(err) = session.drop_on(target, now) {
                                prop_assert!(err.is_placement());
                                prop_assert_eq!(session.model(), &before);
                            }
                        }
                        Err(err) => {
                            prop_assert_eq!(err, IntentError::TilePinned(tile));
                            prop_assert!(before.is_solved(tile));
                        }
                    }
                }
                Intent::Cancel { tile } => {
                    if session.begin_drag(TileId::new(tile)).is_ok() {
                        session.cancel_drag();
                    }
                    prop_assert_eq!(session.model(), &before);
                }
                Intent::DirectPlace { tile } => {
                    let tile = TileId::new(tile);
                    if session.direct_place(tile, now).is_err() {
                        prop_assert_eq!(session.model(), &before);
                        prop_assert!(before.occupant(tile.home_slot()).is_some());
                    } else {
                        prop_assert!(session.model().is_solved(tile));
                    }
                }
                Intent::Reset => {
                    session.reset();
                    completions = 0;
                    prop_assert_eq!(session.model().holding().len(), 16);
                    prop_assert!(!session.controller().win_detector().is_triggered());
                }
            }

            prop_assert!(session.model().check_invariants().is_ok());
            assert_occupancy_unique(&session)?;

            if let Some(completion) = session.poll_completion(now) {
                completions += 1;
                prop_assert!(session.model().all_solved());
                prop_assert_eq!(completion.generation, session.generation());
            }
            prop_assert!(completions <= 1);
            prop_assert_eq!(
                session.model().all_solved(),
                session.model().tiles().all(|tile| tile.is_solved())
            );
        }
    }

    #[test]
    fn test_direct_placing_everything_always_completes(seed in any::<[u8; 32]>()) {
        let mut session = new_session(seed);
        let now = Instant::now();
        for tile in TileId::ALL {
            prop_assert!(session.direct_place(tile, now).is_ok());
        }
        prop_assert!(session.poll_completion(now).is_some());
        prop_assert!(session.poll_completion(now).is_none());
    }
}
