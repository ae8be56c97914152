//! Game configuration.
//!
//! The board is always 4×4. What games may tune is the winning tile, the
//! odds of a spawn being a 4, and how many tiles a fresh board starts with.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Tile value that wins the standard game.
pub const DEFAULT_WIN_TILE: u32 = 2048;

/// Probability that a spawned tile is a 4 rather than a 2.
pub const DEFAULT_FOUR_PROBABILITY: f64 = 0.1;

/// Tiles placed on a fresh board.
pub const DEFAULT_STARTING_TILES: usize = 2;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Reaching this tile wins the game.
    pub win_tile: u32,

    /// Chance that a spawn places a 4 (otherwise a 2).
    pub four_probability: f64,

    /// Number of tiles spawned on a new board.
    pub starting_tiles: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            win_tile: DEFAULT_WIN_TILE,
            four_probability: DEFAULT_FOUR_PROBABILITY,
            starting_tiles: DEFAULT_STARTING_TILES,
        }
    }
}

impl GameConfig {
    /// Standard 2048 rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the winning tile.
    #[must_use]
    pub fn with_win_tile(mut self, tile: u32) -> Self {
        self.win_tile = tile;
        self
    }

    /// Set the probability of spawning a 4.
    #[must_use]
    pub fn with_four_probability(mut self, probability: f64) -> Self {
        self.four_probability = probability;
        self
    }

    /// Set how many tiles a new board starts with.
    #[must_use]
    pub fn with_starting_tiles(mut self, count: usize) -> Self {
        self.starting_tiles = count;
        self
    }

    /// Check the configuration is playable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.win_tile < 4 || !self.win_tile.is_power_of_two() {
            return Err(ConfigError::Validation(format!(
                "win_tile must be a power of two >= 4, got {}",
                self.win_tile
            )));
        }
        if !(0.0..=1.0).contains(&self.four_probability) {
            return Err(ConfigError::Validation(format!(
                "four_probability must be in [0, 1], got {}",
                self.four_probability
            )));
        }
        if self.starting_tiles > 16 {
            return Err(ConfigError::Validation(format!(
                "starting_tiles must be at most 16, got {}",
                self.starting_tiles
            )));
        }
        Ok(())
    }
}
