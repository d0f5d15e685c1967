//! End-to-end placement scenarios on a full session.

use std::time::{Duration, Instant};

use tessera_core::{Location, SlotId, TileId};
use tessera_game::{DropTarget, IntentError, PlacementError, Session, SessionConfig};
use tessera_generator::ShuffleSeed;

const DELAY: Duration = Duration::from_millis(100);

fn new_session() -> Session {
    let config = SessionConfig::default()
        .completion_delay(DELAY)
        .initial_seed(Some(ShuffleSeed::from_bytes([0x5a; 32])));
    Session::new(config, 64.0)
}

fn assert_fresh(session: &Session) {
    let model = session.model();
    assert_eq!(model.holding().len(), 16);
    assert!(SlotId::ALL.iter().all(|&slot| model.occupant(slot).is_none()));
    assert!(model.tiles().all(|tile| tile.location() == Location::Holding));
    assert!(!model.all_solved());
    assert!(!session.controller().win_detector().is_triggered());
    model.check_invariants().unwrap();
}

fn drag(session: &mut Session, tile: u8, slot: u8, now: Instant) -> Result<(), IntentError> {
    session.begin_drag(TileId::new(tile))?;
    session
        .drop_on(DropTarget::Slot(SlotId::new(slot)), now)
        .map(|_| ())
}

#[test]
fn test_fresh_session_has_everything_in_holding() {
    let session = new_session();
    assert_fresh(&session);
}

#[test]
fn test_placing_a_tile_home_solves_only_that_tile() {
    let mut session = new_session();

    drag(&mut session, 5, 5, Instant::now()).unwrap();

    assert!(session.model().is_solved(TileId::new(5)));
    assert_eq!(session.model().solved_count(), 1);
    assert!(!session.model().all_solved());
}

#[test]
fn test_placing_a_tile_elsewhere_occupies_without_solving() {
    let mut session = new_session();

    drag(&mut session, 5, 3, Instant::now()).unwrap();

    let tile = session.model().tile(TileId::new(5));
    assert_eq!(tile.location(), Location::Slot(SlotId::new(3)));
    assert!(!tile.is_solved());
    assert_eq!(session.model().occupant(SlotId::new(3)), Some(TileId::new(5)));
}

#[test]
fn test_occupied_slot_rejects_the_second_tile() {
    let mut session = new_session();
    let now = Instant::now();
    drag(&mut session, 5, 3, now).unwrap();
    let location_of_9 = session.model().tile(TileId::new(9)).location();

    let result = drag(&mut session, 9, 3, now);

    assert_eq!(
        result,
        Err(IntentError::Placement(PlacementError::SlotOccupied {
            slot: SlotId::new(3),
            occupant: TileId::new(5),
        }))
    );
    assert_eq!(
        session.model().tile(TileId::new(5)).location(),
        Location::Slot(SlotId::new(3))
    );
    assert_eq!(session.model().tile(TileId::new(9)).location(), location_of_9);
}

#[test]
fn test_completing_the_board_fires_completion_exactly_once() {
    let mut session = new_session();
    let now = Instant::now();

    for i in 0..16 {
        assert!(session.poll_completion(now + DELAY).is_none());
        drag(&mut session, i, i, now).unwrap();
    }

    assert!(session.model().all_solved());
    assert!(session.is_finished());
    assert!(session.poll_completion(now).is_none());

    let completion = session.poll_completion(now + DELAY).unwrap();
    assert_eq!(completion.generation, session.generation());
    assert_eq!(completion.moves, 16);

    assert!(session.poll_completion(now + DELAY * 2).is_none());
    assert!(session.poll_completion(now + Duration::from_secs(60)).is_none());
}

#[test]
fn test_reset_mid_game_starts_over() {
    let mut session = new_session();
    let now = Instant::now();
    for i in [0, 1, 2, 7] {
        session.direct_place(TileId::new(i), now).unwrap();
    }
    drag(&mut session, 9, 4, now).unwrap();
    assert_eq!(session.model().solved_count(), 4);

    session.reset();

    assert_fresh(&session);
    assert_eq!(session.controller().moves(), 0);
    assert!(session.poll_completion(now + Duration::from_secs(60)).is_none());
}

#[test]
fn test_resize_after_completion_clears_completion_state() {
    let mut session = new_session();
    let now = Instant::now();
    for tile in TileId::ALL {
        session.direct_place(tile, now).unwrap();
    }
    assert!(session.controller().win_detector().is_triggered());

    session.on_resize(80.0);

    assert_fresh(&session);
    assert!(session.poll_completion(now + DELAY).is_none());
    assert_eq!(session.layout().board_side(), 320.0);
}

#[test]
fn test_player_can_unstick_by_vacating_a_slot() {
    let mut session = new_session();
    let now = Instant::now();
    drag(&mut session, 4, 9, now).unwrap();

    assert!(session.direct_place(TileId::new(9), now).is_err());

    session.begin_drag(TileId::new(4)).unwrap();
    session.drop_on(DropTarget::Holding, now).unwrap();
    session.direct_place(TileId::new(9), now).unwrap();

    assert!(session.model().is_solved(TileId::new(9)));
    assert_eq!(session.model().tile(TileId::new(4)).location(), Location::Holding);
}
