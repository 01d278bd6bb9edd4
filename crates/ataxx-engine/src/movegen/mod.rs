//! Move validation, generation and execution.
//!
//! Every function here is pure: boards are taken by reference and the
//! executor returns a fresh [`Board`].

pub mod perft;

use crate::Board;
use ataxx_core::{Cell, Move, Position, Side};
use thiserror::Error;

/// Furthest a piece may travel in one move (Chebyshev distance).
pub const MAX_MOVE_DISTANCE: u8 = 2;

/// Error returned by [`try_apply_move`] when the move is not legal.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("illegal move {mv} for {side}")]
    Illegal { mv: Move, side: Side },
}

/// A list of moves.
///
/// A (from, to) pair is a distinct move even when several
/// sources can clone into the same destination, so the list grows on the heap.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    /// Creates an empty move list.
    #[inline]
    pub const fn new() -> Self {
        MoveList { moves: Vec::new() }
    }

    /// Adds a move to the list.
    #[inline]
    pub fn push(&mut self, m: Move) {
        self.moves.push(m);
    }

    /// Returns the number of moves.
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns true if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Returns a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    #[inline]
    pub fn contains(&self, m: &Move) -> bool {
        self.moves.contains(m)
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Returns true if `side` may play `m` on `board`.
///
/// The mover must own the source, the destination must be empty and on the
/// board, and the destination must be at most two cells away in any
/// direction. Capturing is not required.
pub fn is_legal_move(board: &Board, m: Move, side: Side) -> bool {
    board.get(m.from) == Some(Cell::piece(side))
        && board.get(m.to) == Some(Cell::Empty)
        && m.distance() <= MAX_MOVE_DISTANCE
}

/// Returns every empty cell `side` can reach from `from`.
///
/// Only the 5x5 window around `from` is scanned. The order is row-major, but
/// callers should treat the result as a set.
pub fn legal_destinations(board: &Board, from: Position, side: Side) -> Vec<Position> {
    if board.get(from) != Some(Cell::piece(side)) {
        return Vec::new();
    }
    from.surrounding(MAX_MOVE_DISTANCE)
        .filter(|&to| is_legal_move(board, Move::new(from, to), side))
        .collect()
}

/// Returns true if `side` has at least one legal move.
pub fn has_any_legal_move(board: &Board, side: Side) -> bool {
    board.pieces(side).any(|from| {
        from.surrounding(MAX_MOVE_DISTANCE)
            .any(|to| board.get(to) == Some(Cell::Empty))
    })
}

/// Generates every legal move for `side`.
pub fn all_legal_moves(board: &Board, side: Side) -> MoveList {
    let mut moves = MoveList::new();
    for from in board.pieces(side) {
        for to in legal_destinations(board, from, side) {
            moves.push(Move::new(from, to));
        }
    }
    moves
}

/// Applies a legal move and returns the resulting board.
///
/// A move of distance 1 clones the piece (the source stays occupied); a move
/// of distance 2 jumps (the source is emptied). Afterwards every opposing
/// piece adjacent to the destination is converted to `side`.
///
/// The move is assumed to be legal; this is only checked in debug builds.
/// Use [`try_apply_move`] for input that has not been validated.
pub fn apply_move(board: &Board, m: Move, side: Side) -> Board {
    debug_assert!(
        is_legal_move(board, m, side),
        "apply_move called with illegal move {} for {}",
        m,
        side
    );

    let mut next = *board;
    let own = Cell::piece(side);
    let enemy = Cell::piece(side.opposite());

    if m.distance() > 1 {
        next.set(m.from, Cell::Empty);
    }
    next.set(m.to, own);

    for pos in m.to.neighbors() {
        if next.get(pos) == Some(enemy) {
            next.set(pos, own);
        }
    }

    next
}

/// Validates `m` and applies it.
pub fn try_apply_move(board: &Board, m: Move, side: Side) -> Result<Board, MoveError> {
    if is_legal_move(board, m, side) {
        Ok(apply_move(board, m, side))
    } else {
        Err(MoveError::Illegal { mv: m, side })
    }
}
