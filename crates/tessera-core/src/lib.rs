//! Core data structures for the tessera tile puzzle.
//!
//! The puzzle board is a square grid of [`GRID_SIZE`] × [`GRID_SIZE`] slots, and the
//! picture is cut into the same number of tiles. Every tile belongs in exactly one
//! slot, so tiles are identified by the slot they belong in.
//!
//! # Overview
//!
//! 1. **Identities** - [`TileId`] and [`SlotId`], both in the range `0..TILE_COUNT`.
//! 2. **Locations** - [`Location`], either the holding area or a board slot.
//! 3. **Index semantics** - [`index`] maps identities to container indices.
//! 4. **Containers** - [`containers::Array16`], a fixed array indexed by identity.
//!
//! # Examples
//!
//! ```
//! use tessera_core::{Location, SlotId, TileId};
//!
//! let tile = TileId::new(6);
//! assert_eq!(tile.home_slot(), SlotId::new(6));
//! assert_eq!(tile.home_slot().row(), 1);
//! assert_eq!(tile.home_slot().col(), 2);
//!
//! let location = Location::Slot(SlotId::new(6));
//! assert!(location.is_slot());
//! ```

pub mod containers;
pub mod index;
pub mod location;
pub mod slot_id;
pub mod tile_id;

pub use self::{location::Location, slot_id::SlotId, tile_id::TileId};

/// Number of rows (and columns) on the board.
pub const GRID_SIZE: u8 = 4;

/// Number of tiles, which is also the number of board slots.
pub const TILE_COUNT: usize = (GRID_SIZE as usize) * (GRID_SIZE as usize);
