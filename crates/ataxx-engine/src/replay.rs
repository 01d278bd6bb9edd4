//! Deterministic replay of recorded move lists.
//!
//! Records store only `(from, to)` pairs, so the mover of each move is
//! re-derived with the normal turn order: Yellow first, alternating, and a
//! side without legal moves is passed over.

use crate::game::GameState;
use crate::movegen::{try_apply_move, MoveError};
use crate::protocol::RecordedWinner;
use crate::Board;
use ataxx_core::{Move, Side};
use thiserror::Error;

/// Errors raised while replaying or verifying a recorded game.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReplayError {
    #[error("move {index} ({mv}) is illegal for {side}")]
    IllegalMove { index: usize, mv: Move, side: Side },

    #[error("move {index} was played after the game had ended")]
    GameOver { index: usize },

    #[error("recorded board {index} differs from the replayed board")]
    BoardMismatch { index: usize },

    #[error("expected {expected} recorded boards, got {got}")]
    LengthMismatch { expected: usize, got: usize },

    #[error("recorded winner {got:?} does not match replayed winner {expected:?}")]
    WinnerMismatch {
        expected: RecordedWinner,
        got: RecordedWinner,
    },
}

/// Replays `moves` from `start` and returns the start board followed by the
/// board after each move.
///
/// The same inputs always produce the same sequence.
pub fn replay(start: &Board, moves: &[Move]) -> Result<Vec<Board>, ReplayError> {
    replay_to_state(start, moves).map(|(boards, _)| boards)
}

/// Like [`replay`], but also returns the state reached after the last move.
pub(crate) fn replay_to_state(
    start: &Board,
    moves: &[Move],
) -> Result<(Vec<Board>, GameState), ReplayError> {
    let mut boards = Vec::with_capacity(moves.len() + 1);
    boards.push(*start);

    let mut state = GameState::new(*start);
    for (index, &mv) in moves.iter().enumerate() {
        let side = state.side_to_move().ok_or(ReplayError::GameOver { index })?;
        let board = match try_apply_move(state.board(), mv, side) {
            Ok(board) => board,
            Err(MoveError::Illegal { mv, side }) => {
                return Err(ReplayError::IllegalMove { index, mv, side });
            }
        };
        state = GameState::after_move(board, side);
        boards.push(board);
    }

    Ok((boards, state))
}
