//! Property tests for the Ataxx rules over random legal games.

use ataxx_core::{Cell, Move, MoveKind, Position, Side};
use ataxx_engine::{
    all_legal_moves, apply_move, game_result, is_game_over, is_legal_move, replay, tally, Board,
    EndReason, Game, GameRecord, GameState, LayoutRegistry,
};
use proptest::prelude::*;

/// Plays a game on `layout`, choosing each move by taking the next index
/// modulo the number of legal moves. Returns the states and moves played.
fn play_out(layout: u32, choices: &[usize]) -> (Vec<GameState>, Vec<Move>) {
    let mut state = GameState::from_layout(&LayoutRegistry::builtin(), layout).unwrap();
    let mut states = vec![state];
    let mut moves = Vec::new();

    for &choice in choices {
        let legal = state.legal_moves();
        if legal.is_empty() {
            break;
        }
        let mv = legal[choice % legal.len()];
        state = state.play(mv).unwrap();
        states.push(state);
        moves.push(mv);
    }
    (states, moves)
}

fn layouts() -> impl Strategy<Value = u32> {
    prop_oneof![Just(1u32), Just(2u32)]
}

fn choices() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(any::<usize>(), 0..80)
}

proptest! {
    #[test]
    fn test_generated_moves_are_legal(layout in layouts(), choices in choices()) {
        let (states, _) = play_out(layout, &choices);
        for state in &states {
            if let Some(side) = state.side_to_move() {
                for &mv in &state.legal_moves() {
                    prop_assert!(is_legal_move(state.board(), mv, side));
                    prop_assert!(mv.distance() >= 1 && mv.distance() <= 2);
                }
            }
        }
    }

    #[test]
    fn test_piece_conservation(layout in layouts(), choices in choices()) {
        let (states, moves) = play_out(layout, &choices);
        for (pair, mv) in states.windows(2).zip(&moves) {
            let side = pair[0].side_to_move().unwrap();
            let before = tally(pair[0].board());
            let after = tally(pair[1].board());
            let grown = match mv.kind() {
                Some(MoveKind::Clone) => 1,
                Some(MoveKind::Jump) => 0,
                None => unreachable!("generated move {} has distance {}", mv, mv.distance()),
            };
            prop_assert_eq!(before.yellow + before.red + grown, after.yellow + after.red);
            prop_assert!(after.of(side) >= before.of(side) + grown);
            prop_assert_eq!(
                pair[0].board().count(Cell::Blocked),
                pair[1].board().count(Cell::Blocked)
            );
        }
    }

    #[test]
    fn test_source_cell_follows_distance(layout in layouts(), choices in choices()) {
        let (states, moves) = play_out(layout, &choices);
        for (pair, mv) in states.windows(2).zip(&moves) {
            let side = pair[0].side_to_move().unwrap();
            let source = pair[1].board().get(mv.from);
            match mv.kind() {
                Some(MoveKind::Clone) => prop_assert_eq!(source, Some(Cell::piece(side))),
                Some(MoveKind::Jump) => prop_assert_eq!(source, Some(Cell::Empty)),
                None => prop_assert!(false, "generated move {} is out of range", mv),
            }
            prop_assert_eq!(pair[1].board().get(mv.to), Some(Cell::piece(side)));
        }
    }

    #[test]
    fn test_captures_are_local(layout in layouts(), choices in choices()) {
        let (states, moves) = play_out(layout, &choices);
        for (pair, mv) in states.windows(2).zip(&moves) {
            let side = pair[0].side_to_move().unwrap();
            let (before, after) = (pair[0].board(), pair[1].board());
            for pos in Position::all() {
                if pos == mv.from || pos == mv.to {
                    continue;
                }
                let (was, now) = (before.get(pos), after.get(pos));
                if pos.distance(mv.to) == 1 && was == Some(Cell::piece(side.opposite())) {
                    prop_assert_eq!(now, Some(Cell::piece(side)));
                } else {
                    prop_assert_eq!(was, now);
                }
            }
        }
    }

    #[test]
    fn test_apply_move_is_deterministic(layout in layouts(), choices in choices()) {
        let (states, moves) = play_out(layout, &choices);
        for (pair, &mv) in states.windows(2).zip(&moves) {
            let side = pair[0].side_to_move().unwrap();
            let board = *pair[0].board();
            prop_assert_eq!(apply_move(&board, mv, side), apply_move(&board, mv, side));
            prop_assert_eq!(&apply_move(&board, mv, side), pair[1].board());
            // The input board is a value and stays untouched.
            prop_assert_eq!(&board, pair[0].board());
        }
    }

    #[test]
    fn test_terminal_states(layout in layouts(), choices in choices()) {
        let (states, _) = play_out(layout, &choices);
        for state in &states {
            let board = state.board();
            prop_assert_eq!(state.is_game_over(), is_game_over(board));
            match game_result(board) {
                Some(result) => {
                    let score = tally(board);
                    let expected = match result.reason {
                        EndReason::Eliminated => score.yellow == 0 || score.red == 0,
                        EndReason::BoardFull => !board.has_empty_cell(),
                        EndReason::NoMovesLeft => {
                            all_legal_moves(board, Side::Yellow).is_empty()
                                && all_legal_moves(board, Side::Red).is_empty()
                        }
                    };
                    prop_assert!(expected);
                    prop_assert_eq!(result.winner, score.leader());
                }
                None => {
                    let side = state.side_to_move().unwrap();
                    prop_assert!(!all_legal_moves(board, side).is_empty());
                }
            }
        }
    }

    #[test]
    fn test_replay_reproduces_game(layout in layouts(), choices in choices()) {
        let (states, moves) = play_out(layout, &choices);
        let start = *states[0].board();
        let boards = replay(&start, &moves).unwrap();
        let expected: Vec<Board> = states.iter().map(|s| *s.board()).collect();
        prop_assert_eq!(&boards, &expected);

        let record = GameRecord::from_moves(&start, &moves).unwrap();
        let parsed = GameRecord::from_json(&record.to_json().unwrap()).unwrap();
        prop_assert!(parsed.verify(&start).is_ok());
    }

    #[test]
    fn test_game_history_matches_states(layout in layouts(), choices in choices()) {
        let (states, moves) = play_out(layout, &choices);
        let mut game = Game::from_layout(&LayoutRegistry::builtin(), layout).unwrap();
        for &mv in &moves {
            game.make_move(mv).unwrap();
        }
        prop_assert_eq!(game.states(), states.as_slice());
        prop_assert_eq!(game.to_record().board_states.len(), moves.len() + 1);
    }
}

#[test]
fn test_corner_clone_captures_neighbour() {
    // Yellow at a7, Red at c6 and c7; cloning to b7 converts both.
    let board = Board::from_notation("x1o4/2o4/7/7/7/7/7").unwrap();
    let mv = Move::new(Position::new(0, 0), Position::new(0, 1));
    let next = apply_move(&board, mv, Side::Yellow);

    assert_eq!(next.to_notation(), "xxx4/2x4/7/7/7/7/7");
    assert_eq!(tally(&next).yellow, 4);
    let result = game_result(&next).unwrap();
    assert_eq!(result.reason, EndReason::Eliminated);
    assert_eq!(result.winner, Some(Side::Yellow));
}

#[test]
fn test_jump_from_corner() {
    let board = LayoutRegistry::builtin().create_board(1).unwrap();
    let mv = Move::new(Position::new(0, 0), Position::new(2, 2));
    let next = apply_move(&board, mv, Side::Yellow);

    assert_eq!(next.get(Position::new(0, 0)), Some(Cell::Empty));
    assert_eq!(next.get(Position::new(2, 2)), Some(Cell::Yellow));
    assert_eq!(tally(&next).yellow, 2);
}

#[test]
fn test_blocked_destination_rejected() {
    let board = LayoutRegistry::builtin().create_board(2).unwrap();
    let onto_block = Move::new(Position::new(0, 0), Position::new(2, 2));
    assert!(!is_legal_move(&board, onto_block, Side::Yellow));
    assert!(!all_legal_moves(&board, Side::Yellow).contains(&onto_block));
}
