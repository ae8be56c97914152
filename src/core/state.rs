//! Game session state.
//!
//! ## GameState
//!
//! One explicitly owned session replaces any process-wide board/score:
//! - Board and configuration
//! - Current and best score
//! - Status (in progress, won, lost)
//! - Move history
//! - RNG
//!
//! ## Turn order
//!
//! `play` slides the board; only if something moved does it spawn a tile,
//! add the score, and re-classify the board. An unchanged board is not a
//! turn.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::board::Board;
use super::config::GameConfig;
use super::direction::Direction;
use super::rng::{GameRng, GameRngState, TileRng};
use crate::error::EngineError;
use crate::rules::{attempt_move, init_game, is_game_over_with_target, spawn_tile, SpawnedTile};

/// Where a game stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// True for Won or Lost.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Current score and the best score seen this session.
///
/// Persisting `best` between sessions is left to the caller; seed it back
/// in with [`GameState::with_best_score`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    pub current: u64,
    pub best: u64,
}

impl ScoreBoard {
    /// Create a score board with a known best.
    #[must_use]
    pub fn with_best(best: u64) -> Self {
        Self { current: 0, best }
    }

    /// Add merge points. Returns true if this set a new best.
    pub fn add(&mut self, points: u64) -> bool {
        self.current += points;
        self.record(self.current)
    }

    /// Offer a score as a best. Returns true if it beat the previous best.
    pub fn record(&mut self, score: u64) -> bool {
        if score > self.best {
            self.best = score;
            true
        } else {
            false
        }
    }

    /// Zero the current score, keeping the best.
    pub fn reset(&mut self) {
        self.current = 0;
    }
}

/// One accepted turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Turn number, starting at 1.
    pub turn: u32,
    pub direction: Direction,
    pub score_delta: u64,
    /// `None` only if the board was full after the slide, which cannot
    /// happen after a real move but is kept total.
    pub spawned: Option<SpawnedTile>,
}

/// What a call to [`GameState::play`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnOutcome {
    /// False when the slide changed nothing; no tile was spawned.
    pub moved: bool,
    pub score_delta: u64,
    pub spawned: Option<SpawnedTile>,
    /// Status after the spawn.
    pub status: GameStatus,
    /// True when the running score passed the best score.
    pub new_best: bool,
}

/// A single game session.
///
/// ```
/// use rust_2048::core::{Direction, GameConfig, GameState, GameStatus};
///
/// let mut game = GameState::new(GameConfig::default(), 42).unwrap();
/// assert_eq!(game.board().empty_cells().len(), 14);
/// assert_eq!(game.score(), 0);
///
/// for dir in Direction::ALL {
///     let _ = game.play(dir);
/// }
/// assert_eq!(game.status(), GameStatus::InProgress);
/// ```
#[derive(Clone, Debug)]
pub struct GameState<R = GameRng> {
    config: GameConfig,
    board: Board,
    scores: ScoreBoard,
    status: GameStatus,
    turn: u32,
    history: Vector<MoveRecord>,
    rng: R,
}

impl GameState<GameRng> {
    /// Start a game with a seeded RNG.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, EngineError> {
        Self::with_rng(config, GameRng::new(seed))
    }

    /// Start a non-reproducible game.
    pub fn from_entropy(config: GameConfig) -> Result<Self, EngineError> {
        Self::with_rng(config, GameRng::from_entropy())
    }

    /// Capture the full session, RNG position included.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board,
            scores: self.scores,
            status: self.status,
            turn: self.turn,
            history: self.history.iter().cloned().collect(),
            rng: self.rng.state(),
        }
    }

    /// Rebuild a session from a snapshot.
    pub fn restore(config: GameConfig, snapshot: &GameSnapshot) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self {
            config,
            board: snapshot.board,
            scores: snapshot.scores,
            status: snapshot.status,
            turn: snapshot.turn,
            history: snapshot.history.iter().cloned().collect(),
            rng: GameRng::from_state(&snapshot.rng),
        })
    }
}

impl<R: TileRng> GameState<R> {
    /// Start a game drawing randomness from `rng`.
    pub fn with_rng(config: GameConfig, mut rng: R) -> Result<Self, EngineError> {
        config.validate()?;
        let (board, _, status) = init_game(&config, &mut rng);
        debug!(starting_tiles = config.starting_tiles, "new game");
        Ok(Self {
            config,
            board,
            scores: ScoreBoard::default(),
            status,
            turn: 0,
            history: Vector::new(),
            rng,
        })
    }

    /// Start from a given board with a zero score.
    pub fn from_board(config: GameConfig, board: Board, rng: R) -> Result<Self, EngineError> {
        config.validate()?;
        let status = is_game_over_with_target(&board, config.win_tile);
        Ok(Self {
            config,
            board,
            scores: ScoreBoard::default(),
            status,
            turn: 0,
            history: Vector::new(),
            rng,
        })
    }

    /// Carry over a best score from an earlier session.
    #[must_use]
    pub fn with_best_score(mut self, best: u64) -> Self {
        self.scores.record(best);
        self
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> u64 {
        self.scores.current
    }

    /// Best score seen, including any carried-over best.
    #[must_use]
    pub fn best_score(&self) -> u64 {
        self.scores.best
    }

    #[must_use]
    pub fn scores(&self) -> ScoreBoard {
        self.scores
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Number of accepted turns.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    // === Play ===

    /// Play one turn.
    ///
    /// Returns `GameFinished` once the game is won or lost. A direction that
    /// changes nothing returns `moved: false` and leaves the session as is.
    pub fn play(&mut self, direction: Direction) -> Result<TurnOutcome, EngineError> {
        if self.status.is_terminal() {
            return Err(EngineError::GameFinished(self.status));
        }

        let outcome = attempt_move(&self.board, direction);
        if !outcome.moved {
            return Ok(TurnOutcome {
                moved: false,
                score_delta: 0,
                spawned: None,
                status: self.status,
                new_best: false,
            });
        }

        self.board = outcome.board;
        let spawned = spawn_tile(&mut self.board, &self.config, &mut self.rng);
        let new_best = self.scores.add(outcome.score_delta);
        self.status = is_game_over_with_target(&self.board, self.config.win_tile);
        self.turn += 1;

        self.history.push_back(MoveRecord {
            turn: self.turn,
            direction,
            score_delta: outcome.score_delta,
            spawned,
        });

        trace!(turn = self.turn, %direction, score_delta = outcome.score_delta, "move accepted");
        if self.status.is_terminal() {
            debug!(status = ?self.status, score = self.scores.current, turn = self.turn, "game over");
        }

        Ok(TurnOutcome {
            moved: true,
            score_delta: outcome.score_delta,
            spawned,
            status: self.status,
            new_best,
        })
    }

    /// Parse a direction name (e.g. `"ArrowUp"`) and play it.
    pub fn play_input(&mut self, input: &str) -> Result<TurnOutcome, EngineError> {
        let direction = input.parse::<Direction>()?;
        self.play(direction)
    }

    /// Throw the board away and deal a fresh one. The best score survives.
    pub fn restart(&mut self) {
        let (board, _, status) = init_game(&self.config, &mut self.rng);
        self.board = board;
        self.scores.reset();
        self.status = status;
        self.turn = 0;
        self.history = Vector::new();
        debug!(best = self.scores.best, "game restarted");
    }
}

/// Serializable copy of a [`GameState`] on a [`GameRng`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board: Board,
    pub scores: ScoreBoard,
    pub status: GameStatus,
    pub turn: u32,
    pub history: Vec<MoveRecord>,
    pub rng: GameRngState,
}

impl GameSnapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, EngineError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode bytes produced by [`GameSnapshot::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EngineError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
