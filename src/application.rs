/*
application.rs

Copyright 2025 Hervé Quatremain

This file is part of Findhat.

Findhat is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Findhat is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Findhat. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Console front end.
//!
//! The [`Console`] object reads the player's answers line by line from any
//! [`std::io::BufRead`] source and writes the board and the messages to any [`std::io::Write`]
//! destination. The binary uses the standard input and output; the tests use in-memory buffers.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::error::Error;
use std::io::{self, BufRead, Write};

use crate::draw::Symbols;
use crate::game::{Direction, GameSession, GameStatus};
use crate::generator::difficulty::Difficulty;
use crate::generator::random_board::BoardParams;
use crate::generator::start::StartPolicy;
use crate::input_errors::{InputError, InputErrors};
use crate::player_input::KeyProfile;

/// ANSI sequence that clears the terminal and moves the cursor to the top left corner.
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// How the board parameters are selected.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum BoardChoice {
    /// Ask the player with the difficulty menu.
    Menu,

    /// Use the given difficulty level.
    Preset(Difficulty),

    /// Use custom parameters.
    Custom(BoardParams),
}

/// Game options, usually from the command line.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Board parameters.
    pub board: BoardChoice,

    /// Key binding profile.
    pub keys: KeyProfile,

    /// Symbols used to draw the board.
    pub symbols: Symbols,

    /// Rules for the starting position.
    pub policy: StartPolicy,

    /// Whether to clear the terminal before drawing the board.
    pub clear: bool,

    /// Seed for the random generator. A random seed is used when not set.
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board: BoardChoice::Menu,
            keys: KeyProfile::default(),
            symbols: Symbols::default(),
            policy: StartPolicy::default(),
            clear: true,
            seed: None,
        }
    }
}

impl Settings {
    /// Create the random generator, seeded from [`Settings::seed`] if set.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

/// How the game ended.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The game reached a final status.
    Finished(GameStatus),

    /// The input was closed before the end of the game.
    Aborted,
}

/// Console front end.
pub struct Console<R: BufRead, W: Write> {
    reader: R,
    writer: W,
    settings: Settings,
    input_errors: InputErrors,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a [`Console`] object.
    pub fn new(reader: R, writer: W, settings: Settings) -> Self {
        Self {
            reader,
            writer,
            settings,
            input_errors: InputErrors::new(),
        }
    }

    /// Return the invalid input counters.
    pub fn input_errors(&self) -> &InputErrors {
        &self.input_errors
    }

    /// Write a line of text.
    pub fn write_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{text}")
    }

    /// Display the prompt and read a line of text.
    ///
    /// Return `None` when the input is closed.
    /// Bytes that are not valid UTF-8 are replaced, so that the line is rejected as an invalid
    /// answer instead of ending the game.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;
        let mut buf: Vec<u8> = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line: String = String::from_utf8_lossy(&buf).into_owned();
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        if self.settings.clear {
            write!(self.writer, "{CLEAR_SCREEN}")?;
        }
        Ok(())
    }

    /// Print how to play.
    pub fn instructions(&mut self) -> io::Result<()> {
        let text: String = format!(
            "\n\n**INSTRUCTIONS:**\nFIND THE HAT!\nType {} (Up, Down, Left, Right) and hit enter to find the hat --> {}\nPress control + c to exit.\n",
            self.settings.keys.describe(),
            self.settings.symbols.hat
        );
        self.write_line(&text)
    }

    /// Ask for the difficulty level until the player picks one of the listed levels.
    ///
    /// Return `None` when the input is closed.
    pub fn choose_difficulty(&mut self) -> io::Result<Option<Difficulty>> {
        loop {
            self.write_line("Choose difficulty level:")?;
            for d in Difficulty::ALL {
                self.write_line(&format!("{}. {d}", d as u8))?;
            }
            let Some(choice) = self.read_line("Enter the number of your choice: ")? else {
                return Ok(None);
            };
            match Difficulty::from_choice(&choice) {
                Some(d) => {
                    info!("Difficulty level: {d}");
                    return Ok(Some(d));
                }
                None => {
                    self.input_errors.add(&InputError::InvalidMenuChoice(choice));
                    self.write_line("Invalid choice.")?;
                }
            }
        }
    }

    /// Ask for a direction until the player types one of the keys.
    ///
    /// Return `None` when the input is closed.
    pub fn ask_direction(&mut self) -> io::Result<Option<Direction>> {
        loop {
            let Some(answer) = self.read_line("Which way do you want to go? --> ")? else {
                return Ok(None);
            };
            match self.settings.keys.parse(&answer) {
                Ok(direction) => return Ok(Some(direction)),
                Err(error) => {
                    self.input_errors.add(&error);
                    let hint: String = format!("Invalid. Enter {}.", self.settings.keys.describe());
                    self.write_line(&hint)?;
                }
            }
        }
    }

    /// Play the game until it is won, lost, or the input is closed.
    pub fn play(&mut self, game: &mut GameSession) -> io::Result<Outcome> {
        while !game.status().is_over() {
            self.clear_screen()?;
            self.instructions()?;
            let board: String = self.settings.symbols.render(game.board());
            self.write_line(&board)?;

            let Some(direction) = self.ask_direction()? else {
                debug!("Input closed, leaving the game");
                return Ok(Outcome::Aborted);
            };
            game.step(direction);
        }

        let status: GameStatus = game.status();
        let message: &str = match status {
            GameStatus::LostBounds => "Whoops. Out of bounds!",
            GameStatus::LostHole => "Sorry, you fell down a hole!",
            GameStatus::Won => "Yay, you found your hat!",
            GameStatus::Active => unreachable!("the loop only exits on a final status"),
        };
        self.write_line(message)?;
        info!(
            "Game over: {status:?} ({} invalid inputs)",
            self.input_errors.get_errors()
        );
        Ok(Outcome::Finished(status))
    }

    /// Select the board, generate the game, and play it.
    ///
    /// # Errors
    ///
    /// Return an error if the output cannot be written, the input cannot be read, or the board
    /// cannot be generated.
    pub fn run<G: Rng + ?Sized>(&mut self, rng: &mut G) -> Result<Outcome, Box<dyn Error>> {
        let params: BoardParams = match self.settings.board {
            BoardChoice::Preset(d) => d.params(),
            BoardChoice::Custom(p) => p,
            BoardChoice::Menu => match self.choose_difficulty()? {
                Some(d) => d.params(),
                None => return Ok(Outcome::Aborted),
            },
        };
        debug!("Board parameters: {params:?}");

        let mut game: GameSession = GameSession::new(params, self.settings.policy, rng)?;
        Ok(self.play(&mut game)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::board::{Board, Cell, Position};
    use std::io::Cursor;

    use crate::generator::board::Cell::{Empty as E, Goal as G, Hole as H};

    fn console(input: &str, keys: KeyProfile) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        console_bytes(input.as_bytes(), keys)
    }

    fn console_bytes(input: &[u8], keys: KeyProfile) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        let settings: Settings = Settings {
            keys,
            symbols: Symbols::ascii(),
            clear: false,
            ..Settings::default()
        };
        Console::new(Cursor::new(input.to_vec()), Vec::new(), settings)
    }

    fn output(c: &Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(c.writer.clone()).unwrap()
    }

    fn session(rows: &[&[Cell]], x: isize, y: isize) -> GameSession {
        let board: Board = Board::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap();
        GameSession::with_start(board, Position::new(x, y))
    }

    #[test]
    fn invalid_direction_does_not_move() {
        let mut c = console("q\nu\n", KeyProfile::Udlr);
        let mut game: GameSession = session(&[&[E, G], &[E, E], &[E, E]], 0, 2);

        assert_eq!(c.play(&mut game).unwrap(), Outcome::Aborted);
        assert_eq!(game.position(), Position::new(0, 1));
        assert_eq!(game.board().count(Cell::Visited), 2);
        assert_eq!(c.input_errors().get_direction_errors(), 1);
        assert!(output(&c).contains("Invalid. Enter U, D, L, R."));
    }

    #[test]
    fn undecodable_line_is_an_invalid_direction() {
        let mut c = console_bytes(&[0xff, 0xfe, b'\n', b'r', b'\n'], KeyProfile::Udlr);
        let mut game: GameSession = session(&[&[E, G]], 0, 0);

        assert_eq!(
            c.play(&mut game).unwrap(),
            Outcome::Finished(GameStatus::Won)
        );
        assert_eq!(c.input_errors().get_direction_errors(), 1);
        assert!(output(&c).contains("Invalid. Enter U, D, L, R."));
    }

    #[test]
    fn undecodable_line_is_an_invalid_menu_choice() {
        let mut c = console_bytes(&[0xff, b'\n', b'3', b'\n'], KeyProfile::Wasd);
        assert_eq!(c.choose_difficulty().unwrap(), Some(Difficulty::OnlyForGod));
        assert_eq!(c.input_errors().get_errors(), 1);
    }

    #[test]
    fn play_until_the_hat() {
        let mut c = console("d\nw\n", KeyProfile::Wasd);
        let mut game: GameSession = session(&[&[E, G], &[E, E]], 0, 1);

        assert_eq!(
            c.play(&mut game).unwrap(),
            Outcome::Finished(GameStatus::Won)
        );
        let out: String = output(&c);
        assert!(out.contains("░ ^\n* *"));
        assert!(out.ends_with("Yay, you found your hat!\n"));
        assert!(out.contains("Type W, S, A, D (Up, Down, Left, Right)"));
    }

    #[test]
    fn loss_messages() {
        let mut c = console("a\n", KeyProfile::Wasd);
        let mut game: GameSession = session(&[&[E, G]], 0, 0);
        assert_eq!(
            c.play(&mut game).unwrap(),
            Outcome::Finished(GameStatus::LostBounds)
        );
        assert!(output(&c).ends_with("Whoops. Out of bounds!\n"));

        let mut c = console("D\n", KeyProfile::Wasd);
        let mut game: GameSession = session(&[&[E, H, G]], 0, 0);
        assert_eq!(
            c.play(&mut game).unwrap(),
            Outcome::Finished(GameStatus::LostHole)
        );
        assert!(output(&c).ends_with("Sorry, you fell down a hole!\n"));
    }

    #[test]
    fn difficulty_menu_retries() {
        let mut c = console("9\nhard\n2\n", KeyProfile::Wasd);
        assert_eq!(c.choose_difficulty().unwrap(), Some(Difficulty::Challenge));
        let out: String = output(&c);
        assert_eq!(out.matches("Invalid choice.").count(), 2);
        assert!(out.contains("3. Only for God"));
        assert_eq!(c.input_errors().get_errors(), 2);

        let mut c = console("x\n", KeyProfile::Wasd);
        assert_eq!(c.choose_difficulty().unwrap(), None);
    }

    #[test]
    fn run_with_menu_and_closed_input() {
        let mut c = console("1\n", KeyProfile::Wasd);
        let mut rng: StdRng = StdRng::seed_from_u64(4);
        assert_eq!(c.run(&mut rng).unwrap(), Outcome::Aborted);
        let out: String = output(&c);
        // Ten rows of ten cells were drawn before the direction prompt
        assert_eq!(
            out.lines().filter(|l| l.split(' ').count() == 10).count(),
            10
        );
        assert!(out.ends_with("Which way do you want to go? --> "));
    }

    #[test]
    fn run_fails_on_impossible_board() {
        let mut c = console("", KeyProfile::Wasd);
        c.settings.board = BoardChoice::Custom(BoardParams::new(3, 3, 1.0).unwrap());
        let mut rng: StdRng = StdRng::seed_from_u64(4);
        assert!(c.run(&mut rng).is_err());
    }

    #[test]
    fn clear_screen_when_enabled() {
        let mut c = console("", KeyProfile::Wasd);
        c.settings.clear = true;
        let mut game: GameSession = session(&[&[E, G]], 0, 0);
        assert_eq!(c.play(&mut game).unwrap(), Outcome::Aborted);
        assert!(output(&c).starts_with(CLEAR_SCREEN));
    }
}
