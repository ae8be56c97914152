//! # rust-2048
//!
//! The board transition engine for 2048: slide a 4×4 grid of tiles in one
//! of four directions, merge equal neighbours, spawn new tiles, and detect
//! wins and losses.
//!
//! ## Design Principles
//!
//! 1. **One merge rule**: Only the Left compaction of a single row is
//!    written out. Right, Up and Down reuse it through row reversal and
//!    transposition, both of which are their own inverse.
//!
//! 2. **Owned sessions**: Board, score and status live in a `GameState`
//!    the caller owns. Nothing is global.
//!
//! 3. **Injected randomness**: Spawns draw from a `TileRng`, so a seeded
//!    `GameRng` gives reproducible games and a `ScriptedRng` gives exact
//!    placements in tests.
//!
//! Rendering, input devices and storing the best score are left to the
//! caller.
//!
//! ## Modules
//!
//! - `core`: Board, directions, RNG, configuration, game session
//! - `rules`: Compaction, moves, spawning, terminal detection
//! - `error`: Error types
//!
//! ## Example
//!
//! ```
//! use rust_2048::{Direction, GameConfig, GameState};
//!
//! let mut game = GameState::new(GameConfig::default(), 2048).unwrap();
//! let turn = game.play(Direction::Up).unwrap();
//! if turn.moved {
//!     assert_eq!(game.turn(), 1);
//! }
//! println!("{}\nscore: {}", game.board(), game.score());
//! ```

pub mod core;
pub mod error;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Board, Direction,
    GameRng, GameRngState, ScriptedRng, TileRng,
    GameConfig,
    GameSnapshot, GameState, GameStatus, MoveRecord, ScoreBoard, TurnOutcome,
};

pub use crate::error::{ConfigError, EngineError};

pub use crate::rules::{
    attempt_move, compact_left, init_game, is_game_over, spawn_tile,
    MoveOutcome, RowCompaction, SpawnedTile,
};
