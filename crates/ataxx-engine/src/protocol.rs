//! JSON payloads exchanged with the move-supplier service and the game store.
//!
//! The engine itself never performs I/O; these types only describe the
//! shapes a caller sends and receives:
//!
//! - [`BotMoveRequest`] / [`BotMoveResponse`] for asking a bot for a move
//! - [`GameRecord`] for saving a finished game
//!
//! [`GameRecord::apply_response`] joins the two: it plays a bot's answer on
//! the position a record ends in.

use crate::replay::{replay, replay_to_state, ReplayError};
use crate::rules::winner;
use crate::Board;
use ataxx_core::{Move, Position, Side};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Search algorithms understood by the bot service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    Mcts,
    #[default]
    MctsBinary,
    Minimax,
    Random,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Mcts,
        Algorithm::MctsBinary,
        Algorithm::Minimax,
        Algorithm::Random,
    ];

    /// Returns the wire name of the algorithm.
    pub const fn as_str(self) -> &'static str {
        match self {
            Algorithm::Mcts => "mcts",
            Algorithm::MctsBinary => "mcts-binary",
            Algorithm::Minimax => "minimax",
            Algorithm::Random => "random",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request for the bot service to choose a move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotMoveRequest {
    pub board: Board,
    pub current_player: Side,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<Algorithm>,
    /// Simulations for MCTS, search depth for minimax.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iterations: Option<u32>,
}

impl BotMoveRequest {
    /// Creates a request using the service's default algorithm settings.
    pub fn new(board: Board, current_player: Side) -> Self {
        BotMoveRequest {
            board,
            current_player,
            algorithm: None,
            iterations: None,
        }
    }

    #[must_use]
    pub fn with_algorithm(mut self, algorithm: Algorithm, iterations: u32) -> Self {
        self.algorithm = Some(algorithm);
        self.iterations = Some(iterations);
        self
    }
}

/// Errors reported through the bot protocol.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("bot service error: {0}")]
    Bot(String),

    #[error("response is for {got} but {expected} is to move")]
    WrongSide { expected: Side, got: Side },

    #[error(transparent)]
    Replay(#[from] ReplayError),
}

/// Reply from the bot service: either a move or an error message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BotMoveResponse {
    Move {
        #[serde(rename = "move")]
        mv: Move,
        current_player: Side,
    },
    Error {
        error: String,
    },
}

impl BotMoveResponse {
    /// Returns the chosen move and the side it was chosen for.
    pub fn into_move(self) -> Result<(Move, Side), ProtocolError> {
        match self {
            BotMoveResponse::Move { mv, current_player } => Ok((mv, current_player)),
            BotMoveResponse::Error { error } => Err(ProtocolError::Bot(error)),
        }
    }
}

/// A move in the persistence format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedMove {
    pub from_pos: Position,
    pub to_pos: Position,
}

impl From<Move> for RecordedMove {
    fn from(m: Move) -> Self {
        RecordedMove {
            from_pos: m.from,
            to_pos: m.to,
        }
    }
}

impl From<RecordedMove> for Move {
    fn from(m: RecordedMove) -> Self {
        Move::new(m.from_pos, m.to_pos)
    }
}

/// Outcome in the persistence format: a side name or `"draw"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordedWinner {
    Yellow,
    Red,
    Draw,
}

impl RecordedWinner {
    pub const fn side(self) -> Option<Side> {
        match self {
            RecordedWinner::Yellow => Some(Side::Yellow),
            RecordedWinner::Red => Some(Side::Red),
            RecordedWinner::Draw => None,
        }
    }
}

impl From<Option<Side>> for RecordedWinner {
    fn from(side: Option<Side>) -> Self {
        match side {
            Some(Side::Yellow) => RecordedWinner::Yellow,
            Some(Side::Red) => RecordedWinner::Red,
            None => RecordedWinner::Draw,
        }
    }
}

/// A saved game: every board from the start position on, the moves that
/// produced them, and the outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub board_states: Vec<Board>,
    pub moves: Vec<RecordedMove>,
    pub winner: RecordedWinner,
}

impl GameRecord {
    /// Builds a record by replaying `moves` from `start`.
    pub fn from_moves(start: &Board, moves: &[Move]) -> Result<Self, ReplayError> {
        let board_states = replay(start, moves)?;
        let final_board = board_states.last().copied().unwrap_or(*start);
        Ok(GameRecord {
            board_states,
            moves: moves.iter().copied().map(RecordedMove::from).collect(),
            winner: winner(&final_board).into(),
        })
    }

    /// Returns the recorded moves.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.moves.iter().copied().map(Move::from)
    }

    /// Checks that replaying the moves from `start` reproduces every
    /// recorded board and the recorded winner.
    pub fn verify(&self, start: &Board) -> Result<(), ReplayError> {
        let moves: Vec<Move> = self.moves().collect();
        let expected = replay(start, &moves)?;

        if expected.len() != self.board_states.len() {
            return Err(ReplayError::LengthMismatch {
                expected: expected.len(),
                got: self.board_states.len(),
            });
        }
        if let Some(index) = expected
            .iter()
            .zip(&self.board_states)
            .position(|(want, got)| want != got)
        {
            return Err(ReplayError::BoardMismatch { index });
        }

        let final_board = expected.last().copied().unwrap_or(*start);
        let actual: RecordedWinner = winner(&final_board).into();
        if actual != self.winner {
            return Err(ReplayError::WinnerMismatch {
                expected: actual,
                got: self.winner,
            });
        }
        Ok(())
    }

    /// Plays the move from a bot `response` on the position this record ends
    /// in and returns the extended record.
    ///
    /// The record is verified against `start` first. The response must be for
    /// the side to move and its move must be legal there.
    pub fn apply_response(
        &self,
        start: &Board,
        response: BotMoveResponse,
    ) -> Result<GameRecord, ProtocolError> {
        let (mv, side) = response.into_move()?;
        self.verify(start)?;

        let mut moves: Vec<Move> = self.moves().collect();
        let (_, state) = replay_to_state(start, &moves)?;
        let to_move = state
            .side_to_move()
            .ok_or(ReplayError::GameOver { index: moves.len() })?;
        if to_move != side {
            return Err(ProtocolError::WrongSide {
                expected: to_move,
                got: side,
            });
        }

        moves.push(mv);
        Ok(GameRecord::from_moves(start, &moves)?)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
