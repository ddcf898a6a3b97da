//! Play command - interactive games with people at the board
//!
//! A session keeps the same two players for every game, so a MENACE's cache
//! grows from game to game until it is reset.

use std::{
    fmt,
    io::{self, BufRead, Write},
};

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::debug;

use crate::{
    Error,
    analysis::ResultTally,
    app::{App, AutomatonConfig},
    cli::output::{describe_result, write_board},
    menace::advise,
    player::Player,
    tictactoe::{Board, Game, GameResult, GameType, Position, Side},
};

#[derive(Parser, Debug)]
#[command(about = "Play games against MENACE, a random player or another person")]
pub struct PlayArgs {
    /// Game type, e.g. pvm, mvp, pvr or pvp
    #[arg(default_value = "pvm")]
    pub game_type: GameType,

    /// Random seed for the automata
    #[arg(long)]
    pub seed: Option<u64>,

    /// Side taken by the first seat (`x` or `o`)
    #[arg(long, default_value = "x")]
    pub first_side: Side,
}

/// One of the two seats at the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    One,
    Two,
}

impl Seat {
    fn index(self) -> usize {
        match self {
            Seat::One => 0,
            Seat::Two => 1,
        }
    }

    fn to_move(plays: usize) -> Seat {
        if plays % 2 == 0 { Seat::One } else { Seat::Two }
    }

    /// The chosen seat, or both
    fn selected(seat: Option<Seat>) -> Vec<Seat> {
        match seat {
            Some(seat) => vec![seat],
            None => vec![Seat::One, Seat::Two],
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seat::One => f.write_str("one"),
            Seat::Two => f.write_str("two"),
        }
    }
}

/// A line typed during a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    /// Play at a position
    Place(Position),
    /// Show MENACE's choice on a copy of the board
    Advise,
    /// Let MENACE make the current person's move
    Move,
    /// Clear the cache of one MENACE, or of both
    Reset(Option<Seat>),
    /// Start the next game
    Next,
    Quit,
    Help,
}

/// Parse one line of session input.
///
/// # Errors
///
/// Fails with a message suitable for the player when the line is neither a
/// request nor a position.
pub fn parse_request(line: &str) -> Result<Request> {
    let lowered = line.trim().to_ascii_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();
    match words.as_slice() {
        [] => bail!("enter a position, or `help`"),
        ["advise"] => Ok(Request::Advise),
        ["move"] => Ok(Request::Move),
        ["reset"] => Ok(Request::Reset(None)),
        ["reset", "one" | "1"] => Ok(Request::Reset(Some(Seat::One))),
        ["reset", "two" | "2"] => Ok(Request::Reset(Some(Seat::Two))),
        ["reset", other] => bail!("unknown seat '{other}'; use `reset one` or `reset two`"),
        ["next" | "again"] => Ok(Request::Next),
        ["quit" | "q" | "exit" | "break"] => Ok(Request::Quit),
        ["help" | "?"] => Ok(Request::Help),
        _ => parse_position(&lowered)
            .map(Request::Place)
            .with_context(|| format!("unknown position '{}'", line.trim())),
    }
}

/// Parse a position given by name, as row and column, or as an index.
///
/// Names may put the column first (`left top`), and `centre` is the middle
/// cell. Rows and columns count from 0 (`0 2` is the top right); a single
/// digit is the board index 0-8.
pub fn parse_position(input: &str) -> Option<Position> {
    let compact: String = input
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_lowercase();

    let digits: Vec<usize> = compact
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| d as usize)
        .collect();
    if !digits.is_empty() {
        let separators_only = compact
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ',' | '-' | ':'));
        return match (separators_only, digits.as_slice()) {
            (true, [index]) => Position::try_from(*index).ok(),
            (true, [row, column]) => Position::from_row_column(*row, *column),
            _ => None,
        };
    }

    if compact == "centre" || compact == "center" {
        return Some(Position::MiddleMiddle);
    }
    let name = row_first(&compact);
    Position::ALL
        .into_iter()
        .find(|position| position.name().replace(' ', "") == name)
}

/// Move a leading column word behind the row word
fn row_first(compact: &str) -> String {
    for column in ["left", "right"] {
        if let Some(row) = compact.strip_prefix(column) {
            return format!("{row}{column}");
        }
    }
    match compact.strip_prefix("middle") {
        Some(row @ ("top" | "middle" | "bottom")) => format!("{row}middle"),
        _ => compact.to_string(),
    }
}

/// How a single game of a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Ending {
    Finished(GameResult),
    Abandoned,
    InputClosed,
}

/// Consecutive games of one type between the same two players
#[derive(Debug)]
pub struct Session {
    game_type: GameType,
    players: Option<[Player; 2]>,
    tally: ResultTally,
}

impl Session {
    pub fn new(game_type: GameType, players: [Player; 2]) -> Self {
        Self {
            game_type,
            players: Some(players),
            tally: ResultTally::new(),
        }
    }

    /// Play games until the input runs out or the user quits between games.
    ///
    /// # Errors
    ///
    /// Fails on I/O errors or if the players do not suit the game type.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> Result<()> {
        loop {
            if self.play_game(input, out)? == Ending::InputClosed {
                break;
            }
            if !self.between_games(input, out)? {
                break;
            }
        }
        writeln!(out, "\n{}", self.tally)?;
        Ok(())
    }

    fn play_game<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> Result<Ending> {
        let [first, second] = self
            .players
            .take()
            .context("the players are already seated at another game")?;
        let mut board = Board::new();
        let mut game = Game::new(&mut board, first, second, self.game_type)?;
        writeln!(out, "\nNew game: {}", self.game_type.label())?;
        write_board(out, game.board())?;

        let ending = drive(&mut game, input, out);
        self.players = Some(game.into_players());
        let ending = ending?;

        if let Ending::Finished(result) = ending {
            self.tally.record(result, board.plays());
            writeln!(out, "Result: {}", describe_result(&board))?;
        }
        debug!(game_type = %self.game_type, ?ending, "session game over");
        Ok(ending)
    }

    /// Handle input between games; `false` ends the session
    fn between_games<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> Result<bool> {
        loop {
            write!(out, "next, reset [one|two] or quit: ")?;
            out.flush()?;
            let Some(line) = read_line(input)? else {
                return Ok(false);
            };
            match parse_request(&line) {
                Ok(Request::Next) => return Ok(true),
                Ok(Request::Quit) => return Ok(false),
                Ok(Request::Reset(seat)) => {
                    if let Some(players) = self.players.as_mut() {
                        for seat in Seat::selected(seat) {
                            reset_player(&mut players[seat.index()], seat, out)?;
                        }
                    }
                }
                Ok(Request::Help) => write_help(out)?,
                Ok(_) => writeln!(out, "no game in progress; `next` starts one")?,
                Err(err) => writeln!(out, "{err}")?,
            }
        }
    }
}

/// Run one game to its end, asking people for their moves
fn drive<R: BufRead, W: Write>(game: &mut Game<'_>, input: &mut R, out: &mut W) -> Result<Ending> {
    loop {
        let result = game.result();
        if result.is_finished() {
            return Ok(Ending::Finished(result));
        }

        let seat = Seat::to_move(game.get_plays());
        let side = game.current_player().side();
        let kind = game.current_player().kind();
        if kind.is_automaton() {
            let position = game.step()?;
            writeln!(out, "Player {seat} ({side}, {kind}) takes {position}")?;
            write_board(out, game.board())?;
            continue;
        }

        write!(out, "Player {seat} ({side}), your move: ")?;
        out.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(Ending::InputClosed);
        };
        match parse_request(&line) {
            Ok(Request::Place(position)) => match game.play(position) {
                Ok(()) => write_board(out, game.board())?,
                Err(err @ Error::PositionOccupied { .. }) => writeln!(out, "{err}")?,
                Err(err) => return Err(err.into()),
            },
            Ok(Request::Advise) => {
                let position = advise(game.board(), side)?;
                writeln!(out, "MENACE advises {position}:")?;
                write_board(out, &game.board().with_move(position, side)?)?;
            }
            Ok(Request::Move) => {
                let position = advise(game.board(), side)?;
                game.play(position)?;
                writeln!(out, "MENACE plays {position} for player {seat}")?;
                write_board(out, game.board())?;
            }
            Ok(Request::Reset(target)) => {
                for seat in Seat::selected(target) {
                    if let Some(player) = game.player_mut(seat.index()) {
                        reset_player(player, seat, out)?;
                    }
                }
            }
            Ok(Request::Quit) => return Ok(Ending::Abandoned),
            Ok(Request::Next) => writeln!(out, "finish this game or `quit` it first")?,
            Ok(Request::Help) => write_help(out)?,
            Err(err) => writeln!(out, "{err}")?,
        }
    }
}

fn reset_player<W: Write>(player: &mut Player, seat: Seat, out: &mut W) -> io::Result<()> {
    match player.as_menace_mut() {
        Some(menace) => {
            let entries = menace.cache_len();
            menace.clear_cache();
            writeln!(out, "cleared {entries} cached positions for player {seat}")
        }
        None => writeln!(out, "player {seat} is not MENACE; nothing to reset"),
    }
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn write_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Positions: `top left`, `left top`, `centre`, row and column `0 2`,")?;
    writeln!(out, "  or a board index `0`-`8`.")?;
    writeln!(out, "In a game: `advise` shows MENACE's move on a copy of the board,")?;
    writeln!(out, "  `move` lets MENACE play for you, `quit` abandons the game.")?;
    writeln!(out, "Any time: `reset [one|two]` clears MENACE's cache.")?;
    writeln!(out, "Between games: `next` or `quit`.")
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let mut config = AutomatonConfig::new().with_first_side(args.first_side);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    let players = App::new().create_players(args.game_type, &config);
    let mut session = Session::new(args.game_type, players);

    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();
    if args.game_type.includes_person() {
        write_help(&mut out)?;
    }
    session.run(&mut input, &mut out)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn seeded_session(game_type: GameType, seed: u64) -> Session {
        let config = AutomatonConfig::new().with_seed(seed);
        Session::new(game_type, App::new().create_players(game_type, &config))
    }

    fn run_script(session: &mut Session, script: &str) -> String {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        session.run(&mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn menace_cache_len(session: &mut Session, seat: Seat) -> usize {
        session.players.as_mut().unwrap()[seat.index()]
            .as_menace_mut()
            .unwrap()
            .cache_len()
    }

    #[test]
    fn test_parse_position_forms() {
        assert_eq!(parse_position("top left"), Some(Position::TopLeft));
        assert_eq!(parse_position("Left Top"), Some(Position::TopLeft));
        assert_eq!(parse_position("middle top"), Some(Position::TopMiddle));
        assert_eq!(parse_position("middle left"), Some(Position::MiddleLeft));
        assert_eq!(parse_position("right bottom"), Some(Position::BottomRight));
        assert_eq!(parse_position("middle middle"), Some(Position::MiddleMiddle));
        assert_eq!(parse_position("centre"), Some(Position::MiddleMiddle));
        assert_eq!(parse_position("0 2"), Some(Position::TopRight));
        assert_eq!(parse_position("2,1"), Some(Position::BottomMiddle));
        assert_eq!(parse_position("12"), Some(Position::MiddleRight));
        assert_eq!(parse_position("4"), Some(Position::MiddleMiddle));
    }

    #[test]
    fn test_parse_position_rejects_nonsense() {
        for input in ["3 3", "9", "x", "top", "topp left", "1 2 0", "a1", ""] {
            assert_eq!(parse_position(input), None, "{input}");
        }
    }

    #[test]
    fn test_parse_requests() {
        assert_eq!(parse_request("advise\n").unwrap(), Request::Advise);
        assert_eq!(parse_request("  MOVE ").unwrap(), Request::Move);
        assert_eq!(parse_request("reset").unwrap(), Request::Reset(None));
        assert_eq!(
            parse_request("reset one").unwrap(),
            Request::Reset(Some(Seat::One))
        );
        assert_eq!(
            parse_request("reset 2").unwrap(),
            Request::Reset(Some(Seat::Two))
        );
        assert_eq!(parse_request("q").unwrap(), Request::Quit);
        assert_eq!(parse_request("next").unwrap(), Request::Next);
        assert_eq!(
            parse_request("bottom left").unwrap(),
            Request::Place(Position::BottomLeft)
        );
        assert!(parse_request("reset three").is_err());
        assert!(parse_request("").is_err());
        let err = parse_request("nowhere").unwrap_err();
        assert_eq!(err.to_string(), "unknown position 'nowhere'");
    }

    #[test]
    fn test_person_can_hand_every_move_to_menace() {
        let mut session = seeded_session(GameType::PvM, 1);
        let output = run_script(&mut session, "move\nmove\nmove\nmove\nmove\nquit\n");
        assert!(output.contains("MENACE plays"));
        assert!(output.contains("Result: draw"));
        assert_eq!(session.tally.draws, 1);
        assert_eq!(session.tally.total(), 1);
    }

    #[test]
    fn test_bad_input_is_reported_and_the_game_continues() {
        let mut session = seeded_session(GameType::PvP, 2);
        let output = run_script(&mut session, "3 3\ntop left\nleft top\nquit\nquit\n");
        assert!(output.contains("unknown position '3 3'"));
        assert!(output.contains("already occupied"));
        // the abandoned game is not counted
        assert_eq!(session.tally.total(), 0);
    }

    #[test]
    fn test_advice_leaves_the_live_board_alone() {
        let mut session = seeded_session(GameType::PvR, 3);
        let output = run_script(&mut session, "advise\nquit\nquit\n");
        assert!(output.contains("MENACE advises"));
        // the person was asked for a move again after the advice
        assert_eq!(output.matches("Player one (X), your move:").count(), 2);
    }

    #[test]
    fn test_menace_keeps_its_cache_across_games() {
        let mut session = seeded_session(GameType::MvM, 4);
        run_script(&mut session, "next\nquit\n");
        assert_eq!(session.tally.draws, 2);
        assert!(menace_cache_len(&mut session, Seat::One) > 0);
        assert!(menace_cache_len(&mut session, Seat::Two) > 0);
    }

    #[test]
    fn test_reset_clears_only_the_chosen_menace() {
        let mut session = seeded_session(GameType::MvM, 5);
        let output = run_script(&mut session, "reset one\nquit\n");
        assert!(output.contains("cached positions for player one"));
        assert_eq!(menace_cache_len(&mut session, Seat::One), 0);
        assert!(menace_cache_len(&mut session, Seat::Two) > 0);

        let mut session = seeded_session(GameType::PvM, 5);
        let output = run_script(&mut session, "reset\nquit\nquit\n");
        assert!(output.contains("player one is not MENACE"));
        assert!(output.contains("cleared 0 cached positions for player two"));
    }

    #[test]
    fn test_session_ends_when_input_runs_out() {
        let mut session = seeded_session(GameType::PvP, 6);
        let output = run_script(&mut session, "");
        assert!(output.contains("New game: person-vs-person"));
        assert_eq!(session.tally.total(), 0);
        assert!(session.players.is_some());
    }
}
