//! Board placement notation.
//!
//! A placement string lists the rows from the top (row 0) to the bottom,
//! separated by `/`. Within a row, `x` is a Yellow piece, `o` a Red piece,
//! `-` a blocked cell and a digit a run of empty cells:
//!
//! ```text
//! x5o/7/7/7/7/7/o5x
//! ```

use crate::{Cell, BOARD_SIZE};
use thiserror::Error;

/// A raw row-major grid of cells.
pub type Grid = [[Cell; BOARD_SIZE]; BOARD_SIZE];

/// Errors that can occur when parsing placement strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("invalid placement: expected {expected} rows, got {got}")]
    InvalidRowCount { expected: usize, got: usize },

    #[error("invalid character '{ch}' in row {row}")]
    InvalidCharacter { ch: char, row: usize },

    #[error("row {row} has {cells} cells, expected {expected}")]
    InvalidRowWidth {
        row: usize,
        cells: usize,
        expected: usize,
    },
}

/// Parses a placement string into a grid.
pub fn parse_placement(placement: &str) -> Result<Grid, NotationError> {
    let rows: Vec<&str> = placement.trim().split('/').collect();
    if rows.len() != BOARD_SIZE {
        return Err(NotationError::InvalidRowCount {
            expected: BOARD_SIZE,
            got: rows.len(),
        });
    }

    let mut grid = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
    for (row, text) in rows.iter().enumerate() {
        let mut col = 0usize;
        for ch in text.chars() {
            let run = if let Some(digit) = ch.to_digit(10) {
                (digit as usize, Cell::Empty)
            } else if let Some(cell) = Cell::from_char(ch) {
                (1, cell)
            } else {
                return Err(NotationError::InvalidCharacter { ch, row });
            };

            for _ in 0..run.0 {
                if col < BOARD_SIZE {
                    grid[row][col] = run.1;
                }
                col += 1;
            }
        }
        if col != BOARD_SIZE {
            return Err(NotationError::InvalidRowWidth {
                row,
                cells: col,
                expected: BOARD_SIZE,
            });
        }
    }

    Ok(grid)
}

/// Renders a grid in canonical placement notation (empty runs merged).
pub fn format_placement(grid: &Grid) -> String {
    let mut out = String::with_capacity(BOARD_SIZE * (BOARD_SIZE + 1));
    for (i, row) in grid.iter().enumerate() {
        if i > 0 {
            out.push('/');
        }
        let mut empty_run = 0;
        for &cell in row {
            if cell.is_empty() {
                empty_run += 1;
                continue;
            }
            if empty_run > 0 {
                out.push_str(&empty_run.to_string());
                empty_run = 0;
            }
            out.push(cell.to_char());
        }
        if empty_run > 0 {
            out.push_str(&empty_run.to_string());
        }
    }
    out
}
