//! Perft (performance test) for move generator validation.
//!
//! Perft counts the number of leaf nodes at a given depth, which can be
//! compared against known-correct values to validate the move generator.
//! When the side to move is stuck but the game is not over, the turn passes
//! to the opponent and the pass counts as a single edge.

use super::{all_legal_moves, apply_move};
use crate::rules::is_game_over;
use crate::Board;
use ataxx_core::Side;

/// Counts the number of leaf nodes at the given depth.
pub fn perft(board: &Board, side: Side, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    if is_game_over(board) {
        return 0;
    }

    let moves = all_legal_moves(board, side);
    if moves.is_empty() {
        return perft(board, side.opposite(), depth - 1);
    }

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for m in &moves {
        let next = apply_move(board, *m, side);
        nodes += perft(&next, side.opposite(), depth - 1);
    }
    nodes
}

/// Perft with divide - shows node count for each move at depth-1.
/// Useful for debugging to identify which moves have incorrect counts.
///
/// A stuck side yields a single `"pass"` entry, so the counts always sum to
/// [`perft`].
pub fn perft_divide(board: &Board, side: Side, depth: u32) -> Vec<(String, u64)> {
    if depth == 0 || is_game_over(board) {
        return Vec::new();
    }

    let moves = all_legal_moves(board, side);
    if moves.is_empty() {
        let nodes = perft(board, side.opposite(), depth - 1);
        return vec![("pass".to_string(), nodes)];
    }

    let mut results = Vec::with_capacity(moves.len());

    for m in &moves {
        let next = apply_move(board, *m, side);
        let nodes = if depth > 1 {
            perft(&next, side.opposite(), depth - 1)
        } else {
            1
        };
        results.push((m.to_algebraic(), nodes));
    }

    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
