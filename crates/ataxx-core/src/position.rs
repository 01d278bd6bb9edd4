//! Board coordinate representation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Side length of the square Ataxx board.
pub const BOARD_SIZE: usize = 7;

/// Number of cells on the board.
pub const NUM_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// A `(row, col)` coordinate on the board.
///
/// Row 0 is the top row. A position can be constructed out of range (for
/// example when decoded from the wire); such positions are never on the board
/// and every rule treats them as invalid.
///
/// Algebraic names use files `a`-`g` for columns 0-6 and ranks `7`-`1` for
/// rows 0-6, so the top-left cell is `a7`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    /// Creates a position. No bounds check is performed.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Position { row, col }
    }

    /// Creates a position from a row-major cell index (0-48).
    #[inline]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < NUM_CELLS {
            Some(Position::new(
                (index / BOARD_SIZE) as u8,
                (index % BOARD_SIZE) as u8,
            ))
        } else {
            None
        }
    }

    /// Returns the row-major cell index. Only meaningful on the board.
    #[inline]
    pub const fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub const fn is_on_board(self) -> bool {
        (self.row as usize) < BOARD_SIZE && (self.col as usize) < BOARD_SIZE
    }

    /// Chebyshev (king-move) distance between two positions.
    #[inline]
    pub const fn distance(self, other: Position) -> u8 {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        if dr > dc {
            dr
        } else {
            dc
        }
    }

    /// Iterates every board cell in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..NUM_CELLS).filter_map(Position::from_index)
    }

    /// Iterates the on-board cells within `radius` of this position, clipped
    /// to the board edges, in row-major order. Includes `self` when on board.
    pub fn surrounding(self, radius: u8) -> impl Iterator<Item = Position> {
        let last = (BOARD_SIZE - 1) as u8;
        let min_row = self.row.saturating_sub(radius);
        let max_row = self.row.saturating_add(radius).min(last);
        let min_col = self.col.saturating_sub(radius);
        let max_col = self.col.saturating_add(radius).min(last);
        (min_row..=max_row).flat_map(move |row| {
            (min_col..=max_col).map(move |col| Position::new(row, col))
        })
    }

    /// Iterates the up-to-eight on-board cells adjacent to this position.
    pub fn neighbors(self) -> impl Iterator<Item = Position> {
        self.surrounding(1).filter(move |&p| p != self)
    }

    /// Parses a position from algebraic notation (e.g., "a7").
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..b'a' + BOARD_SIZE as u8).contains(&file)
            || !(b'1'..b'1' + BOARD_SIZE as u8).contains(&rank)
        {
            return None;
        }
        let col = file - b'a';
        let row = BOARD_SIZE as u8 - 1 - (rank - b'1');
        Some(Position::new(row, col))
    }

    /// Returns the algebraic notation for an on-board position.
    pub fn to_algebraic(self) -> String {
        if !self.is_on_board() {
            return format!("({},{})", self.row, self.col);
        }
        let file = (b'a' + self.col) as char;
        let rank = (b'1' + (BOARD_SIZE as u8 - 1 - self.row)) as char;
        format!("{}{}", file, rank)
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({},{})", self.row, self.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_roundtrip() {
        let p = Position::new(3, 5);
        assert_eq!(p.index(), 26);
        assert_eq!(Position::from_index(26), Some(p));
        assert_eq!(Position::from_index(NUM_CELLS), None);
    }

    #[test]
    fn bounds() {
        assert!(Position::new(0, 0).is_on_board());
        assert!(Position::new(6, 6).is_on_board());
        assert!(!Position::new(7, 0).is_on_board());
        assert!(!Position::new(0, 200).is_on_board());
    }

    #[test]
    fn chebyshev_distance() {
        let origin = Position::new(0, 0);
        assert_eq!(origin.distance(origin), 0);
        assert_eq!(origin.distance(Position::new(1, 1)), 1);
        assert_eq!(origin.distance(Position::new(0, 2)), 2);
        assert_eq!(origin.distance(Position::new(2, 1)), 2);
        assert_eq!(origin.distance(Position::new(3, 0)), 3);
        assert_eq!(Position::new(4, 4).distance(Position::new(2, 3)), 2);
    }

    #[test]
    fn surrounding_is_clipped() {
        assert_eq!(Position::new(0, 0).surrounding(2).count(), 9);
        assert_eq!(Position::new(3, 3).surrounding(2).count(), 25);
        assert_eq!(Position::new(6, 3).surrounding(2).count(), 15);
    }

    #[test]
    fn neighbors_exclude_self() {
        let corner: Vec<_> = Position::new(0, 0).neighbors().collect();
        let expected = [(0, 1), (1, 0), (1, 1)].map(|(r, c)| Position::new(r, c));
        assert_eq!(corner, expected);
        assert_eq!(Position::new(3, 3).neighbors().count(), 8);
    }

    #[test]
    fn all_covers_board() {
        assert_eq!(Position::all().count(), NUM_CELLS);
        assert_eq!(Position::all().next(), Some(Position::new(0, 0)));
    }

    #[test]
    fn algebraic() {
        assert_eq!(Position::from_algebraic("a7"), Some(Position::new(0, 0)));
        assert_eq!(Position::from_algebraic("g1"), Some(Position::new(6, 6)));
        assert_eq!(Position::from_algebraic("c5"), Some(Position::new(2, 2)));
        assert_eq!(Position::from_algebraic("h1"), None);
        assert_eq!(Position::from_algebraic("a8"), None);
        assert_eq!(Position::from_algebraic(""), None);
        assert_eq!(Position::new(2, 2).to_algebraic(), "c5");
    }

    proptest::proptest! {
        #[test]
        fn surrounding_matches_distance_filter(index in 0..NUM_CELLS, radius in 0u8..4) {
            let center = Position::from_index(index).unwrap();
            let expected: Vec<_> = Position::all()
                .filter(|p| center.distance(*p) <= radius)
                .collect();
            let got: Vec<_> = center.surrounding(radius).collect();
            proptest::prop_assert_eq!(got, expected);
        }

        #[test]
        fn distance_is_symmetric(a in 0..NUM_CELLS, b in 0..NUM_CELLS) {
            let (a, b) = (Position::from_index(a).unwrap(), Position::from_index(b).unwrap());
            proptest::prop_assert_eq!(a.distance(b), b.distance(a));
        }
    }

    #[test]
    fn serde_shape() {
        let json = serde_json::to_string(&Position::new(1, 2)).unwrap();
        assert_eq!(json, r#"{"row":1,"col":2}"#);
        let p: Position = serde_json::from_str(r#"{"row":6,"col":0}"#).unwrap();
        assert_eq!(p, Position::new(6, 0));
    }
}
