//! Move representation.

use crate::Position;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a move places its piece, decided by the distance travelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// Distance 1: the source stays occupied and a new piece appears.
    Clone,
    /// Distance 2: the piece leaves its source cell.
    Jump,
}

/// An Ataxx move from one cell to another.
///
/// A move only has meaning relative to a board and a side to move; the
/// engine decides whether it is legal.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Position,
    pub to: Position,
}

impl Move {
    #[inline]
    pub const fn new(from: Position, to: Position) -> Self {
        Move { from, to }
    }

    /// Chebyshev distance between source and destination.
    #[inline]
    pub const fn distance(self) -> u8 {
        self.from.distance(self.to)
    }

    /// Classifies the move by distance; `None` for distance 0 or beyond 2.
    #[inline]
    pub const fn kind(self) -> Option<MoveKind> {
        match self.distance() {
            1 => Some(MoveKind::Clone),
            2 => Some(MoveKind::Jump),
            _ => None,
        }
    }

    /// Returns the algebraic notation for this move (e.g., "a7b6").
    pub fn to_algebraic(self) -> String {
        format!("{}{}", self.from, self.to)
    }

    /// Parses a move from algebraic notation such as "a7b6".
    ///
    /// Only the syntax is checked; legality depends on the board.
    pub fn from_algebraic(s: &str) -> Option<Self> {
        if s.len() != 4 || !s.is_ascii() {
            return None;
        }
        let from = Position::from_algebraic(&s[0..2])?;
        let to = Position::from_algebraic(&s[2..4])?;
        Some(Move::new(from, to))
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.to_algebraic())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}
