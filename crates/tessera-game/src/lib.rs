//! Placement rules and lifecycle for the tessera tile puzzle.
//!
//! - [`PuzzleModel`] is the authoritative record of where every tile is.
//! - [`PlacementController`] turns player intents (drag, drop, direct placement) into
//!   model operations and is the only writer of the model.
//! - [`WinDetector`] watches committed moves and raises a one-shot [`Completion`].
//! - [`Session`] owns the above and rebuilds them on start, reset and resize.
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//!
//! use tessera_core::{SlotId, TileId};
//! use tessera_game::{DropTarget, Session, SessionConfig};
//!
//! let mut session = Session::new(SessionConfig::default(), 64.0);
//! assert_eq!(session.model().holding().len(), 16);
//!
//! // Drag tile 3 onto slot 3.
//! let now = Instant::now();
//! session.begin_drag(TileId::new(3)).unwrap();
//! session.drop_on(DropTarget::Slot(SlotId::new(3)), now).unwrap();
//! assert!(session.model().is_solved(TileId::new(3)));
//!
//! // Send every other tile home.
//! for tile in TileId::ALL {
//!     let _ = session.direct_place(tile, now);
//! }
//! assert!(session.model().all_solved());
//!
//! // The completion event is delivered after a short delay, exactly once.
//! assert!(session.poll_completion(now).is_none());
//! let later = now + Duration::from_secs(1);
//! assert!(session.poll_completion(later).is_some());
//! assert!(session.poll_completion(later).is_none());
//! ```

pub use self::{
    config::*, controller::*, error::*, layout::*, model::*, session::*, tile::*, win::*,
};

mod config;
mod controller;
mod error;
mod layout;
mod model;
mod session;
mod tile;
mod win;
