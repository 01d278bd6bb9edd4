//! Board cell representation.

use crate::Side;
use serde::{Deserialize, Serialize};

/// The content of a single board cell.
///
/// Serialized as the tokens `"empty"`, `"yellow"`, `"red"` and `"block"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    #[default]
    Empty,
    Yellow,
    Red,
    /// Permanently impassable; never changes value.
    #[serde(rename = "block")]
    Blocked,
}

impl Cell {
    /// Returns the cell holding a piece of the given side.
    #[inline]
    pub const fn piece(side: Side) -> Self {
        match side {
            Side::Yellow => Cell::Yellow,
            Side::Red => Cell::Red,
        }
    }

    /// Returns the owning side if the cell holds a piece.
    #[inline]
    pub const fn side(self) -> Option<Side> {
        match self {
            Cell::Yellow => Some(Side::Yellow),
            Cell::Red => Some(Side::Red),
            Cell::Empty | Cell::Blocked => None,
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns true if the cell holds a piece of `side`.
    #[inline]
    pub const fn is_owned_by(self, side: Side) -> bool {
        match self.side() {
            Some(s) => s as u8 == side as u8,
            None => false,
        }
    }

    /// Returns the notation character for a single (non-run) cell.
    pub const fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Yellow => 'x',
            Cell::Red => 'o',
            Cell::Blocked => '-',
        }
    }

    /// Parses a piece or block character. Empty runs are handled by the
    /// placement parser, so digits are not accepted here.
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'x' | 'X' => Some(Cell::Yellow),
            'o' | 'O' => Some(Cell::Red),
            '-' => Some(Cell::Blocked),
            '.' => Some(Cell::Empty),
            _ => None,
        }
    }
}

impl From<Side> for Cell {
    fn from(side: Side) -> Self {
        Cell::piece(side)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
