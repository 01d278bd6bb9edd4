//! Core types for Ataxx.
//!
//! This crate provides the fundamental types used across the Ataxx engine:
//! - [`Side`] and [`Cell`] for piece representation
//! - [`Position`] for board coordinates
//! - [`Move`] and [`MoveKind`] for move representation
//! - Placement notation parsing and serialization

mod cell;
mod mov;
mod notation;
mod position;
mod side;

pub use cell::Cell;
pub use mov::{Move, MoveKind};
pub use notation::{format_placement, parse_placement, Grid, NotationError};
pub use position::{Position, BOARD_SIZE, NUM_CELLS};
pub use side::Side;
