//! Core data model: board, directions, RNG, configuration, game session.
//!
//! This module holds the types the rules operate on. The rules themselves
//! live in `rules`; `GameState` ties the two together into a playable
//! session.

pub mod board;
pub mod direction;
pub mod rng;
pub mod config;
pub mod state;

pub use board::{Board, Cell, Row, SIZE};
pub use direction::Direction;
pub use rng::{GameRng, GameRngState, ScriptedRng, TileRng};
pub use config::GameConfig;
pub use state::{GameSnapshot, GameState, GameStatus, MoveRecord, ScoreBoard, TurnOutcome};
