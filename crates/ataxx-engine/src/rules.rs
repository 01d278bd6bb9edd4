//! Scoring and end-of-game detection.
//!
//! A game ends as soon as one side has no pieces left, the board has no
//! empty cell, or neither side can move. The side with more pieces wins;
//! equal counts are a draw.

use crate::movegen::has_any_legal_move;
use crate::Board;
use ataxx_core::Side;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Piece counts for both sides. Blocked and empty cells are not counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Score {
    pub yellow: usize,
    pub red: usize,
}

impl Score {
    /// Returns the count for `side`.
    #[inline]
    pub const fn of(self, side: Side) -> usize {
        match side {
            Side::Yellow => self.yellow,
            Side::Red => self.red,
        }
    }

    /// Returns the side with strictly more pieces, or `None` on a tie.
    pub fn leader(self) -> Option<Side> {
        match self.yellow.cmp(&self.red) {
            std::cmp::Ordering::Greater => Some(Side::Yellow),
            std::cmp::Ordering::Less => Some(Side::Red),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Yellow {} - {} Red", self.yellow, self.red)
    }
}

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    /// One side has no pieces left.
    Eliminated,
    /// No empty cell remains.
    BoardFull,
    /// Neither side has a legal move.
    NoMovesLeft,
}

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameResult {
    /// The winning side, or `None` for a draw.
    pub winner: Option<Side>,
    pub reason: EndReason,
    pub score: Score,
}

impl GameResult {
    #[inline]
    pub const fn is_draw(&self) -> bool {
        self.winner.is_none()
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.winner {
            Some(side) => write!(f, "{} wins ({})", side, self.score),
            None => write!(f, "draw ({})", self.score),
        }
    }
}

/// Counts the pieces of each side.
pub fn tally(board: &Board) -> Score {
    Score {
        yellow: board.count_pieces(Side::Yellow),
        red: board.count_pieces(Side::Red),
    }
}

/// Returns why the game on `board` is over, or `None` if play continues.
///
/// The conditions are checked in the order eliminated, board full, no
/// moves left.
pub fn end_reason(board: &Board) -> Option<EndReason> {
    let score = tally(board);
    if score.yellow == 0 || score.red == 0 {
        return Some(EndReason::Eliminated);
    }
    if !board.has_empty_cell() {
        return Some(EndReason::BoardFull);
    }
    if !has_any_legal_move(board, Side::Yellow) && !has_any_legal_move(board, Side::Red) {
        return Some(EndReason::NoMovesLeft);
    }
    None
}

/// Returns true if no further play is possible on `board`.
pub fn is_game_over(board: &Board) -> bool {
    end_reason(board).is_some()
}

/// Returns the side with more pieces, or `None` on equal counts.
///
/// This is only authoritative once [`is_game_over`] holds.
pub fn winner(board: &Board) -> Option<Side> {
    tally(board).leader()
}

/// Returns the result if the game on `board` is over.
pub fn game_result(board: &Board) -> Option<GameResult> {
    let reason = end_reason(board)?;
    let score = tally(board);
    Some(GameResult {
        winner: score.leader(),
        reason,
        score,
    })
}
