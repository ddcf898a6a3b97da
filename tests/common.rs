//! Common test utilities for the noughts test suite.

#![allow(dead_code)]

use noughts::{
    app::{App, AutomatonConfig},
    tictactoe::{Board, Game, GameResult, GameType, Side},
};

/// Play one automaton game of `game_type` from an empty board.
///
/// The first seat plays `first_side`.
pub fn play_seeded_game(game_type: GameType, first_side: Side, seed: u64) -> GameResult {
    let config = AutomatonConfig::new()
        .with_seed(seed)
        .with_first_side(first_side);
    let [first, second] = App::new().create_players(game_type, &config);
    let mut board = Board::new();
    let mut game = Game::new(&mut board, first, second, game_type).unwrap();
    game.play_out().unwrap()
}

/// Every board reachable by legal alternating play, Cross first.
pub fn reachable_boards() -> Vec<Board> {
    let mut boards = Vec::new();
    let mut stack = vec![(Board::new(), Side::Cross)];
    while let Some((board, to_move)) = stack.pop() {
        boards.push(board);
        if board.is_finished() {
            continue;
        }
        for position in board.empty_positions() {
            stack.push((board.with_move(position, to_move).unwrap(), to_move.opponent()));
        }
    }
    boards
}
