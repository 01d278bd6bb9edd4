//! Ataxx board representation.

use ataxx_core::{
    format_placement, parse_placement, Cell, Grid, NotationError, Position, Side, BOARD_SIZE,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error returned when a serialized matrix does not have board dimensions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardShapeError {
    #[error("expected {expected} rows, got {got}")]
    RowCount { expected: usize, got: usize },

    #[error("row {row} has {got} cells, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        got: usize,
    },
}

/// A 7x7 Ataxx board.
///
/// `Board` is a plain value: it is `Copy`, and every engine operation takes a
/// board by reference and returns a new one. Nothing outside this crate can
/// modify a board in place, so a board can be shared freely between readers.
///
/// Serialized as a row-major matrix of cell tokens.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Cell>>", into = "Vec<Vec<Cell>>")]
pub struct Board {
    cells: Grid,
}

impl Board {
    /// Creates a board with every cell empty.
    pub const fn empty() -> Self {
        Board {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub const fn from_grid(cells: Grid) -> Self {
        Board { cells }
    }

    /// Creates a board from a placement string (e.g. `"x5o/7/7/7/7/7/o5x"`).
    pub fn from_notation(placement: &str) -> Result<Self, NotationError> {
        parse_placement(placement).map(Board::from_grid)
    }

    /// Converts the board to its canonical placement string.
    pub fn to_notation(&self) -> String {
        format_placement(&self.cells)
    }

    /// Returns the cell at `pos`, or `None` if the position is off the board.
    #[inline]
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.cells
            .get(pos.row as usize)
            .and_then(|row| row.get(pos.col as usize))
            .copied()
    }

    /// Returns a copy of this board with `pos` set to `cell`.
    ///
    /// Off-board positions leave the copy unchanged.
    #[must_use]
    pub fn with(mut self, pos: Position, cell: Cell) -> Self {
        self.set(pos, cell);
        self
    }

    /// Writes a cell. Only the engine mutates boards, and only boards it owns.
    #[inline]
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        if let Some(slot) = self
            .cells
            .get_mut(pos.row as usize)
            .and_then(|row| row.get_mut(pos.col as usize))
        {
            *slot = cell;
        }
    }

    /// Returns the underlying row-major grid.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.cells
    }

    /// Counts the cells holding exactly `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == cell).count()
    }

    /// Counts the pieces belonging to `side`.
    #[inline]
    pub fn count_pieces(&self, side: Side) -> usize {
        self.count(Cell::piece(side))
    }

    /// Returns true if at least one cell is empty.
    pub fn has_empty_cell(&self) -> bool {
        self.cells.iter().flatten().any(|c| c.is_empty())
    }

    /// Iterates the positions of all pieces owned by `side`.
    pub fn pieces(&self, side: Side) -> impl Iterator<Item = Position> + '_ {
        let target = Cell::piece(side);
        Position::all().filter(move |&p| self.get(p) == Some(target))
    }
}

impl TryFrom<Vec<Vec<Cell>>> for Board {
    type Error = BoardShapeError;

    fn try_from(rows: Vec<Vec<Cell>>) -> Result<Self, Self::Error> {
        if rows.len() != BOARD_SIZE {
            return Err(BoardShapeError::RowCount {
                expected: BOARD_SIZE,
                got: rows.len(),
            });
        }
        let mut board = Board::empty();
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != BOARD_SIZE {
                return Err(BoardShapeError::RowWidth {
                    row: r,
                    expected: BOARD_SIZE,
                    got: row.len(),
                });
            }
            for (c, cell) in row.into_iter().enumerate() {
                board.cells[r][c] = cell;
            }
        }
        Ok(board)
    }
}

impl From<Board> for Vec<Vec<Cell>> {
    fn from(board: Board) -> Self {
        board.cells.iter().map(|row| row.to_vec()).collect()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_notation())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            write!(f, "{} ", BOARD_SIZE - r)?;
            for cell in row {
                write!(f, " {}", cell)?;
            }
            writeln!(f)?;
        }
        write!(f, "  ")?;
        for c in 0..BOARD_SIZE {
            write!(f, " {}", (b'a' + c as u8) as char)?;
        }
        Ok(())
    }
}
