//! Error types for the engine's outer surface.
//!
//! The transition rules themselves are total: every well-formed board and
//! direction produces a result. Errors only arise where callers hand the
//! engine something it did not produce (text input, raw grids, snapshot
//! bytes) or keep playing after the game has ended.

use crate::core::GameStatus;

/// Errors produced by the engine and game session.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("invalid direction: {0:?}")]
    InvalidDirection(String),

    #[error("game is already over ({0:?})")]
    GameFinished(GameStatus),

    #[error("invalid tile {value} at ({row}, {col}): must be 0 or a power of two >= 2")]
    InvalidTile { row: usize, col: usize, value: u32 },

    #[error("snapshot encoding error: {0}")]
    Snapshot(#[from] bincode::Error),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised while validating a [`GameConfig`](crate::core::GameConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config validation error: {0}")]
    Validation(String),
}
