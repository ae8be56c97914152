//! Tile spawning.

use serde::{Deserialize, Serialize};

use crate::core::{Board, GameConfig, GameStatus, TileRng};

use super::terminal::is_game_over_with_target;

/// A tile placed by [`spawn_tile`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnedTile {
    pub row: usize,
    pub col: usize,
    pub value: u32,
}

/// Place a 2 or a 4 in a uniformly chosen empty cell.
///
/// The cell is drawn first, then the value: a 4 with
/// `config.four_probability`, otherwise a 2. A full board is left alone and
/// `None` is returned.
pub fn spawn_tile<R: TileRng + ?Sized>(
    board: &mut Board,
    config: &GameConfig,
    rng: &mut R,
) -> Option<SpawnedTile> {
    let empty = board.empty_cells();
    if empty.is_empty() {
        return None;
    }

    let (row, col) = empty[rng.choose_index(empty.len())];
    let value = if rng.gen_bool(config.four_probability) { 4 } else { 2 };
    board.set(row, col, value);

    Some(SpawnedTile { row, col, value })
}

/// Deal a fresh board: empty grid plus `config.starting_tiles` spawns.
///
/// Returns the board, a zero score, and the board's status.
pub fn init_game<R: TileRng + ?Sized>(config: &GameConfig, rng: &mut R) -> (Board, u64, GameStatus) {
    let mut board = Board::new();
    for _ in 0..config.starting_tiles {
        spawn_tile(&mut board, config, rng);
    }
    let status = is_game_over_with_target(&board, config.win_tile);
    (board, 0, status)
}
