//! Win/loss detection.

use crate::core::board::{Board, SIZE};
use crate::core::config::DEFAULT_WIN_TILE;
use crate::core::GameStatus;

use super::compact::can_merge;

/// Classify a board under standard rules (2048 wins).
///
/// Won takes precedence over fullness. A full board is only Lost when no
/// horizontal or vertical neighbours are equal.
#[must_use]
pub fn is_game_over(board: &Board) -> GameStatus {
    is_game_over_with_target(board, DEFAULT_WIN_TILE)
}

/// Classify a board with a custom winning tile.
#[must_use]
pub fn is_game_over_with_target(board: &Board, win_tile: u32) -> GameStatus {
    if board.contains(win_tile) {
        return GameStatus::Won;
    }
    if !board.is_full() {
        return GameStatus::InProgress;
    }
    if has_adjacent_pair(board) {
        return GameStatus::InProgress;
    }
    GameStatus::Lost
}

fn has_adjacent_pair(board: &Board) -> bool {
    for r in 0..SIZE {
        for c in 0..SIZE {
            let value = board.get(r, c);
            if c + 1 < SIZE && can_merge(value, board.get(r, c + 1)) {
                return true;
            }
            if r + 1 < SIZE && can_merge(value, board.get(r + 1, c)) {
                return true;
            }
        }
    }
    false
}
