//! Rules engine for Ataxx.
//!
//! This crate provides:
//! - [`Board`] - an immutable 7x7 board value
//! - [`LayoutRegistry`] - named starting layouts
//! - Move validation, generation and execution in [`movegen`]
//! - Scoring and end-of-game detection in [`rules`]
//! - [`GameState`] and [`Game`] - turn order and history tracking
//! - [`replay`] and the JSON payloads in [`protocol`]
//!
//! # Rules
//!
//! A side moves one of its pieces to an empty cell at most two cells away.
//! Moving one cell clones the piece; moving two cells jumps, emptying the
//! source. Every opposing piece adjacent to the destination then changes
//! sides. The game ends when a side is eliminated, the board is full, or
//! neither side can move; the side with more pieces wins.
//!
//! # Example
//!
//! ```
//! use ataxx_core::{Move, Position, Side};
//! use ataxx_engine::{apply_move, is_legal_move, LayoutRegistry};
//!
//! let registry = LayoutRegistry::builtin();
//! let board = registry.create_board(1).unwrap();
//!
//! let clone = Move::new(Position::new(0, 0), Position::new(1, 1));
//! assert!(is_legal_move(&board, clone, Side::Yellow));
//!
//! let next = apply_move(&board, clone, Side::Yellow);
//! assert_eq!(next.count_pieces(Side::Yellow), 3);
//! ```

mod board;
mod game;
pub mod layout;
pub mod movegen;
pub mod protocol;
mod replay;
pub mod rules;

pub use board::{Board, BoardShapeError};
pub use game::{Game, GameError, GameState, GameStatus, PlayedMove};
pub use layout::{Layout, LayoutError, LayoutId, LayoutRegistry};
pub use movegen::perft::perft;
pub use movegen::{
    all_legal_moves, apply_move, has_any_legal_move, is_legal_move, legal_destinations,
    try_apply_move, MoveError, MoveList,
};
pub use protocol::{Algorithm, BotMoveRequest, BotMoveResponse, GameRecord, ProtocolError};
pub use replay::{replay, ReplayError};
pub use rules::{
    end_reason, game_result, is_game_over, tally, winner, EndReason, GameResult, Score,
};
