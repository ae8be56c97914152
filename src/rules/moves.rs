//! Board-level moves.
//!
//! Only Left is implemented directly. The other directions wrap it in a
//! self-inverse transform:
//!
//! | direction | transform            |
//! |-----------|----------------------|
//! | Left      | identity             |
//! | Right     | reverse rows         |
//! | Up        | transpose            |
//! | Down      | transpose, then Right|
//!
//! Each result is `transform(move_left(transform(board)))`.

use crate::core::board::{Board, SIZE};
use crate::core::Direction;

use super::compact::compact_left;

/// Outcome of sliding a board in one direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The board after the slide (no tile spawned).
    pub board: Board,
    /// Sum of all tiles created by merges in this move.
    pub score_delta: u64,
    /// False when the slide left the board unchanged.
    pub moved: bool,
}

impl MoveOutcome {
    fn map_board(self, f: impl Fn(&Board) -> Board) -> Self {
        Self {
            board: f(&self.board),
            ..self
        }
    }
}

/// Apply [`compact_left`] to every row.
#[must_use]
pub fn move_left(board: &Board) -> MoveOutcome {
    let mut out = *board;
    let mut score_delta = 0;
    let mut moved = false;
    for r in 0..SIZE {
        let row = compact_left(board.row(r));
        out.set_row(r, row.row);
        score_delta += row.score;
        moved |= row.moved;
    }
    MoveOutcome {
        board: out,
        score_delta,
        moved,
    }
}

/// Reverse rows, move left, reverse back.
#[must_use]
pub fn move_right(board: &Board) -> MoveOutcome {
    move_left(&board.reverse_rows()).map_board(Board::reverse_rows)
}

/// Transpose, move left, transpose back.
#[must_use]
pub fn move_up(board: &Board) -> MoveOutcome {
    move_left(&board.transpose()).map_board(Board::transpose)
}

/// Transpose, move right, transpose back.
#[must_use]
pub fn move_down(board: &Board) -> MoveOutcome {
    move_right(&board.transpose()).map_board(Board::transpose)
}

/// Slide the board in `direction`.
///
/// ```
/// use rust_2048::core::{Board, Direction};
/// use rust_2048::rules::attempt_move;
///
/// let board = Board::from_rows([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
/// let out = attempt_move(&board, Direction::Left);
/// assert_eq!(out.board.row(0), [4, 0, 0, 0]);
/// assert_eq!(out.score_delta, 4);
/// assert!(out.moved);
/// ```
#[must_use]
pub fn attempt_move(board: &Board, direction: Direction) -> MoveOutcome {
    match direction {
        Direction::Left => move_left(board),
        Direction::Right => move_right(board),
        Direction::Up => move_up(board),
        Direction::Down => move_down(board),
    }
}

/// True if sliding in `direction` would change the board.
#[must_use]
pub fn can_move(board: &Board, direction: Direction) -> bool {
    attempt_move(board, direction).moved
}

/// Directions that would change the board, in [`Direction::ALL`] order.
#[must_use]
pub fn legal_moves(board: &Board) -> Vec<Direction> {
    Direction::ALL
        .into_iter()
        .filter(|&dir| can_move(board, dir))
        .collect()
}
