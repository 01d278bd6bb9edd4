//! Turn order and game history.
//!
//! [`GameState`] is an immutable snapshot: playing a move returns the next
//! state and leaves the current one untouched. [`Game`] keeps every snapshot
//! so that a finished game can be exported as a [`GameRecord`].

use crate::layout::{LayoutError, LayoutId, LayoutRegistry};
use crate::movegen::{all_legal_moves, has_any_legal_move, try_apply_move, MoveError};
use crate::protocol::{GameRecord, RecordedMove};
use crate::rules::{game_result, tally, GameResult, Score};
use crate::{Board, MoveList};
use ataxx_core::{Move, Side};
use thiserror::Error;

/// Where a game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Play continues with the given side to move.
    InProgress(Side),
    /// The game has ended. Finished games accept no further moves.
    Finished(GameResult),
}

/// Error type for game operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("game has already ended")]
    GameOver,

    #[error(transparent)]
    IllegalMove(#[from] MoveError),

    #[error("invalid move notation: {0}")]
    InvalidNotation(String),
}

/// One position of a game together with whose turn it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    score: Score,
    status: GameStatus,
}

impl GameState {
    /// Starts a game on `board` with Yellow to move.
    ///
    /// If Yellow cannot move, Red starts; if the board is already terminal
    /// the state is finished.
    pub fn new(board: Board) -> Self {
        Self::settle(board, Side::FIRST)
    }

    /// Starts a game from a registered layout.
    pub fn from_layout(registry: &LayoutRegistry, id: LayoutId) -> Result<Self, LayoutError> {
        registry.create_board(id).map(Self::new)
    }

    /// Builds the state reached when `candidate` is due to move on `board`.
    fn settle(board: Board, candidate: Side) -> Self {
        let status = match game_result(&board) {
            Some(result) => GameStatus::Finished(result),
            None if has_any_legal_move(&board, candidate) => GameStatus::InProgress(candidate),
            // Not terminal, so the other side must have a move.
            None => GameStatus::InProgress(candidate.opposite()),
        };
        GameState {
            board,
            score: tally(&board),
            status,
        }
    }

    /// Plays `m` for the side to move and returns the following state.
    pub fn play(&self, m: Move) -> Result<GameState, GameError> {
        let side = self.side_to_move().ok_or(GameError::GameOver)?;
        let board = try_apply_move(&self.board, m, side)?;
        Ok(Self::after_move(board, side))
    }

    /// Builds the state that follows `mover` producing `board`.
    pub(crate) fn after_move(board: Board, mover: Side) -> Self {
        Self::settle(board, mover.opposite())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the side to move, or `None` once the game is finished.
    pub fn side_to_move(&self) -> Option<Side> {
        match self.status {
            GameStatus::InProgress(side) => Some(side),
            GameStatus::Finished(_) => None,
        }
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.status, GameStatus::Finished(_))
    }

    /// Returns the result if the game is over.
    pub fn result(&self) -> Option<GameResult> {
        match self.status {
            GameStatus::Finished(result) => Some(result),
            GameStatus::InProgress(_) => None,
        }
    }

    /// Returns the winner of a finished game; `None` for draws and games in
    /// progress.
    pub fn winner(&self) -> Option<Side> {
        self.result().and_then(|r| r.winner)
    }

    /// Returns all legal moves for the side to move (empty once finished).
    pub fn legal_moves(&self) -> MoveList {
        match self.status {
            GameStatus::InProgress(side) => all_legal_moves(&self.board, side),
            GameStatus::Finished(_) => MoveList::new(),
        }
    }
}

/// A move as it was played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayedMove {
    pub side: Side,
    pub mv: Move,
}

/// A complete game with history tracking.
///
/// Unlike [`GameState`], which is a single snapshot, `Game` keeps the
/// starting state and every state reached since.
#[derive(Debug, Clone)]
pub struct Game {
    /// Snapshots from the start position onward; never empty.
    states: Vec<GameState>,
    moves: Vec<PlayedMove>,
}

impl Game {
    /// Creates a game starting on `board`.
    pub fn new(board: Board) -> Self {
        Game {
            states: vec![GameState::new(board)],
            moves: Vec::new(),
        }
    }

    /// Creates a game from a registered layout.
    pub fn from_layout(registry: &LayoutRegistry, id: LayoutId) -> Result<Self, LayoutError> {
        registry.create_board(id).map(Self::new)
    }

    /// Returns the current state.
    pub fn current(&self) -> &GameState {
        self.states
            .last()
            .unwrap_or_else(|| unreachable!("game history is never empty"))
    }

    /// Returns the starting state.
    pub fn start(&self) -> &GameState {
        &self.states[0]
    }

    /// Returns every state from the start position onward.
    pub fn states(&self) -> &[GameState] {
        &self.states
    }

    /// Returns the move history.
    pub fn moves(&self) -> &[PlayedMove] {
        &self.moves
    }

    /// Returns the number of moves played.
    pub fn ply_count(&self) -> usize {
        self.moves.len()
    }

    pub fn is_game_over(&self) -> bool {
        self.current().is_game_over()
    }

    pub fn result(&self) -> Option<GameResult> {
        self.current().result()
    }

    pub fn legal_moves(&self) -> MoveList {
        self.current().legal_moves()
    }

    /// Plays a move for the side to move.
    pub fn make_move(&mut self, m: Move) -> Result<(), GameError> {
        let current = *self.current();
        let side = current.side_to_move().ok_or(GameError::GameOver)?;
        let next = current.play(m)?;

        let ply = self.moves.len() + 1;
        tracing::debug!(ply, %side, mv = %m, score = %next.score(), "move applied");
        match next.status() {
            GameStatus::InProgress(to_move) if to_move == side => {
                tracing::debug!(passed = %side.opposite(), "turn passed: no legal moves");
            }
            GameStatus::Finished(result) => {
                tracing::info!(plies = ply, reason = ?result.reason, "game finished: {}", result);
            }
            GameStatus::InProgress(_) => {}
        }

        self.moves.push(PlayedMove { side, mv: m });
        self.states.push(next);
        Ok(())
    }

    /// Plays a move given in algebraic notation (e.g. "a7b6").
    pub fn make_move_str(&mut self, notation: &str) -> Result<(), GameError> {
        let m = Move::from_algebraic(notation)
            .ok_or_else(|| GameError::InvalidNotation(notation.to_string()))?;
        self.make_move(m)
    }

    /// Exports the game in the persistence format.
    ///
    /// `board_states` holds the start board followed by the board after each
    /// move; an unfinished game is recorded with the current leader.
    pub fn to_record(&self) -> GameRecord {
        let final_board = self.current().board();
        GameRecord {
            board_states: self.states.iter().map(|s| *s.board()).collect(),
            moves: self.moves.iter().map(|p| RecordedMove::from(p.mv)).collect(),
            winner: tally(final_board).leader().into(),
        }
    }
}
