//! The board transition rules.
//!
//! - `compact`: the single-row Left rule every direction reduces to
//! - `moves`: board moves built from row reversal and transposition
//! - `spawn`: random tile placement and fresh boards
//! - `terminal`: Won / Lost / InProgress classification
//!
//! Everything here is a pure function of its inputs apart from the
//! caller-supplied random source.

pub mod compact;
pub mod moves;
pub mod spawn;
pub mod terminal;

pub use compact::{compact_left, compact_right, RowCompaction};
pub use moves::{attempt_move, can_move, legal_moves, move_down, move_left, move_right, move_up, MoveOutcome};
pub use spawn::{init_game, spawn_tile, SpawnedTile};
pub use terminal::{is_game_over, is_game_over_with_target};
