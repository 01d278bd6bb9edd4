//! Player side representation.

use serde::{Deserialize, Serialize};

/// The two sides in Ataxx. Yellow always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Side {
    Yellow = 0,
    Red = 1,
}

impl Side {
    /// Both sides in turn order.
    pub const ALL: [Side; 2] = [Side::Yellow, Side::Red];

    /// The side that makes the first move of a game.
    pub const FIRST: Side = Side::Yellow;

    /// Returns the opposing side.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::Yellow => Side::Red,
            Side::Red => Side::Yellow,
        }
    }

    /// Returns the index (0 for Yellow, 1 for Red).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the notation character (`x` for Yellow, `o` for Red).
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Side::Yellow => 'x',
            Side::Red => 'o',
        }
    }

    /// Parses a side from its notation character or lowercase name.
    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "x" | "yellow" => Some(Side::Yellow),
            "o" | "red" => Some(Side::Red),
            _ => None,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Yellow => write!(f, "Yellow"),
            Side::Red => write!(f, "Red"),
        }
    }
}
