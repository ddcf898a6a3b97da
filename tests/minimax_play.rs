//! The minimax automaton never loses

mod common;

use std::collections::HashSet;

use noughts::{
    menace::{Menace, advise},
    ports::Automaton,
    tictactoe::{Board, GameResult, GameType, Side},
};

#[test]
fn test_minimax_against_itself_is_always_a_draw() {
    for seed in 0..10 {
        for first_side in [Side::Cross, Side::Nought] {
            assert_eq!(
                common::play_seeded_game(GameType::MvM, first_side, seed),
                GameResult::Draw
            );
        }
    }
}

#[test]
fn test_minimax_never_loses_to_random_from_either_seat() {
    for seed in 0..100 {
        for first_side in [Side::Cross, Side::Nought] {
            // minimax in the first seat
            let result = common::play_seeded_game(GameType::MvR, first_side, seed);
            assert_ne!(result, first_side.opponent().win(), "MvR seed {seed}");

            // minimax in the second seat
            let result = common::play_seeded_game(GameType::RvM, first_side, seed);
            assert_ne!(result, first_side.win(), "RvM seed {seed}");
        }
    }
}

#[test]
fn test_random_cross_never_beats_minimax_nought() {
    let tally = noughts::analysis::Simulation::new(GameType::RvM, 1000)
        .with_config(noughts::app::AutomatonConfig::new().with_seed(2024))
        .run(&noughts::app::App::new(), |_| {})
        .unwrap();
    assert_eq!(tally.total(), 1000);
    assert_eq!(tally.cross_wins, 0);
}

#[test]
fn test_minimax_answers_every_reachable_position() {
    let mut cross = Menace::with_seed(Side::Cross, 1);
    let mut nought = Menace::with_seed(Side::Nought, 1);
    let distinct: HashSet<Board> = common::reachable_boards().into_iter().collect();
    for board in distinct {
        if board.is_finished() {
            continue;
        }
        let menace = if board.cross_count() > board.nought_count() {
            &mut nought
        } else {
            &mut cross
        };
        let position = menace.get_move(&board).unwrap();
        assert!(board.is_empty(position));
    }
}

#[test]
fn test_advice_from_fresh_automaton_matches_cached_one() {
    let board = Board::from_string("X...O....").unwrap();
    let mut menace = Menace::with_seed(Side::Cross, 5);
    let optimal = menace.best_moves(&board).unwrap();
    for _ in 0..10 {
        assert!(optimal.contains(&advise(&board, Side::Cross).unwrap()));
    }
}
