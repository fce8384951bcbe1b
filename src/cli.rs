//! Console front end: setup prompts, board rendering and the game loop.
//!
//! Reads and writes go through generic handles so a whole session can be
//! scripted in tests.

#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};
use std::string::String;

use rand::Rng;

use crate::{
    board::Board,
    common::{Cell, MoveError, Side},
    config::{
        validate_dimension, GameConfig, Opening, PassPolicy, DEFAULT_COLS, DEFAULT_ROWS,
        EMPTY_SYMBOL,
    },
    game::{GameEngine, GameStatus, Outcome, Turn},
    input::{format_coord, index_letter, parse_move, Move},
    player::Player,
};

/// Choices made on the command line before any prompting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionOptions {
    /// Fixed row count; prompt when `None`.
    pub rows: Option<usize>,
    /// Fixed column count; prompt when `None`.
    pub cols: Option<usize>,
    pub pass_policy: PassPolicy,
    pub opening: Opening,
}

/// Interactive session over an input and an output stream.
pub struct Console<I, O> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> Console<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    /// Give back the output handle, e.g. to inspect a scripted session.
    pub fn into_output(self) -> O {
        self.output
    }

    /// Print `msg` and read one line. `None` means the input is exhausted.
    fn prompt(&mut self, msg: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", msg)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    pub fn welcome(&mut self) -> io::Result<()> {
        writeln!(self.output, "╔══════════════════════════════════════╗")?;
        writeln!(self.output, "║          Welcome to Othello!         ║")?;
        writeln!(self.output, "╚══════════════════════════════════════╝")
    }

    /// Ask for a name for seat `seat`, keeping the default on empty input.
    pub fn new_player(&mut self, seat: usize) -> io::Result<Player> {
        let default = Player::default_for(seat, None);
        let line = self.prompt(&format!(
            "Please enter name [or <Enter> for name: '{}']: ",
            default.name()
        ))?;
        let player = match line.as_deref() {
            None | Some("") => default,
            Some(name) => Player::default_for(seat, Some(name)),
        };
        writeln!(
            self.output,
            "Player {}, the {} disc ({}) represents your move in the game.",
            player.name(),
            player.colour(),
            player.symbol()
        )?;
        Ok(player)
    }

    /// Ask which seat moves first. Empty input picks at random.
    pub fn first_turn<G: Rng + ?Sized>(
        &mut self,
        players: &[Player; 2],
        rng: &mut G,
    ) -> io::Result<usize> {
        let line = self.prompt(
            "Who wants to go first? (Enter player number 1 or 2, or <Enter> for random): ",
        )?;
        let first = match line.as_deref() {
            None | Some("") => rng.random_range(0..2usize),
            Some("1") => 0,
            Some("2") => 1,
            Some(other) => {
                writeln!(
                    self.output,
                    "✗ '{}' is not a player number, {} goes first.",
                    other,
                    players[0].name()
                )?;
                return Ok(0);
            }
        };
        writeln!(self.output, "{} goes first!", players[first].name())?;
        Ok(first)
    }

    /// Ask for one board dimension, falling back to `default` on empty or
    /// invalid input.
    pub fn board_size(&mut self, direction: &str, default: usize) -> io::Result<usize> {
        let line = self.prompt(&format!(
            "Please enter the number of {} (even, 4-26) or <Enter> for {}: ",
            direction, default
        ))?;
        let Some(text) = line.filter(|l| !l.is_empty()) else {
            writeln!(self.output, "Using default of {} {}.", default, direction)?;
            return Ok(default);
        };
        match text.parse::<usize>() {
            Ok(size) if validate_dimension(size).is_ok() => Ok(size),
            _ => {
                writeln!(
                    self.output,
                    "✗ '{}' is not a valid number of {}, default of {} is applied.",
                    text, direction, default
                )?;
                Ok(default)
            }
        }
    }

    /// Collect players, first turn and board size, then build the engine.
    pub fn setup<G: Rng + ?Sized>(
        &mut self,
        options: &SessionOptions,
        rng: &mut G,
    ) -> anyhow::Result<GameEngine> {
        self.welcome()?;
        let players = [self.new_player(0)?, self.new_player(1)?];
        let first = self.first_turn(&players, rng)?;
        let rows = match options.rows {
            Some(rows) => rows,
            None => self.board_size("rows", DEFAULT_ROWS)?,
        };
        let cols = match options.cols {
            Some(cols) => cols,
            None => self.board_size("columns", DEFAULT_COLS)?,
        };
        let config = GameConfig {
            rows,
            cols,
            pass_policy: options.pass_policy,
            opening: options.opening,
        };
        log::debug!("starting game with {:?}", config);
        Ok(GameEngine::from_config(&config, players, first)?)
    }

    /// Draw the grid with letter headings on both axes.
    pub fn display_board(&mut self, board: &Board, players: &[Player; 2]) -> io::Result<()> {
        let symbol_for = |side: Side| {
            players
                .iter()
                .find(|p| p.side() == side)
                .map(|p| p.symbol())
                .unwrap_or('?')
        };
        let separator = format!("   {}+", "+---".repeat(board.cols()));

        writeln!(self.output)?;
        write!(self.output, "   ")?;
        for c in 0..board.cols() {
            write!(self.output, "  {} ", index_letter(c))?;
        }
        writeln!(self.output)?;
        writeln!(self.output, "{}", separator)?;
        for r in 0..board.rows() {
            write!(self.output, " {} ", index_letter(r))?;
            for c in 0..board.cols() {
                let ch = match board.get(r, c) {
                    Ok(Cell::Disc(side)) => symbol_for(side),
                    _ => EMPTY_SYMBOL,
                };
                write!(self.output, "| {} ", ch)?;
            }
            writeln!(self.output, "|")?;
            writeln!(self.output, "{}", separator)?;
        }
        writeln!(self.output)
    }

    pub fn display_scores(&mut self, engine: &GameEngine) -> io::Result<()> {
        let [a, b] = engine.scores();
        let players = engine.players();
        writeln!(
            self.output,
            "{} score: {} \t {} score: {}",
            players[0].name(),
            a,
            players[1].name(),
            b
        )
    }

    pub fn display_winners(&mut self, engine: &GameEngine) -> io::Result<()> {
        let players = engine.players();
        writeln!(self.output)?;
        writeln!(self.output, "══════════════ GAME OVER ══════════════")?;
        writeln!(self.output, "Final scores:")?;
        self.display_scores(engine)?;
        match engine.outcome() {
            Outcome::Winner(w) => writeln!(
                self.output,
                "{} wins and {} loses!",
                players[w].name(),
                players[1 - w].name()
            ),
            Outcome::Tie => writeln!(self.output, "Both players tie!"),
        }
    }

    /// Run turns until a player quits or input runs out. An engine that is
    /// already over goes straight to the final scores.
    pub fn run_game(&mut self, engine: &mut GameEngine) -> anyhow::Result<Outcome> {
        while engine.status() == GameStatus::InProgress {
            self.display_board(engine.board(), engine.players())?;
            self.display_scores(engine)?;
            let active = engine.active();
            if engine.is_blocked() {
                writeln!(self.output, "Neither player can place a disc. Type 'quit' to finish.")?;
            } else if !engine.can_move(active) {
                writeln!(
                    self.output,
                    "{} has no legal move. Type 'skip' to pass.",
                    engine.active_player().name()
                )?;
            }

            let name = engine.active_player().name().to_string();
            let mv = match self.prompt(&format!("{}, make a move: ", name))? {
                None => Move::Quit,
                Some(line) => match parse_move(&line) {
                    Ok(mv) => mv,
                    Err(e) => {
                        writeln!(self.output, "✗ Invalid entry: {}", e)?;
                        self.pause()?;
                        continue;
                    }
                },
            };

            match engine.play(mv) {
                Ok(Turn::Ended) | Err(MoveError::GameOver) => break,
                Ok(Turn::Moved { applied, .. }) => {
                    if let Move::Place { row, col } = mv {
                        let [r, c] = format_coord(row, col);
                        writeln!(
                            self.output,
                            "✓ {} played {}{}, capturing {}.",
                            name,
                            r,
                            c,
                            applied.captured()
                        )?;
                    }
                }
                Ok(Turn::Passed { .. }) => writeln!(self.output, "{} passes.", name)?,
                Err(e) => {
                    writeln!(self.output, "✗ Invalid entry: {}", e)?;
                    self.pause()?;
                }
            }
        }
        self.display_winners(engine)?;
        writeln!(self.output, "\nHave a great day!")?;
        Ok(engine.outcome())
    }

    fn pause(&mut self) -> io::Result<()> {
        self.prompt("Press <Enter> to try again.")?;
        Ok(())
    }
}
