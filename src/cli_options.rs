/*
cli_options.rs

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

//! Process command-line options.
//!
//! Without options, Findhat asks for the difficulty level and starts the game.
//! The options select the board, the keys, and the symbols without going through the menu.
//!
//! The `--generate` option is intended for developers tuning the generator: instead of playing,
//! Findhat prints the generated boards, one JSON object per line.
//!
//! # Examples
//!
//! Play a custom board with the `U`, `D`, `L`, `R` keys:
//!
//! ```
//! $ findhat --height 8 --width 25 --holes 0.25 --keys udlr
//! ```
//!
//! Generate three boards at the hardest level and print some statistics:
//!
//! ```
//! $ findhat -f only-for-god --generate 3 --summary --seed 42
//! {"board":{"rows":[["Empty","Hole",...]]},"start":{"x":4,"y":17}}
//! ...
//!
//!          boards = 3
//! average boards = 1
//!  average tries = 35
//!          errors = 0
//! ```

use clap::Parser;
use log::debug;
use rand::rngs::StdRng;
use std::env;

use crate::application::{BoardChoice, Settings};
use crate::draw::Symbols;
use crate::generator::difficulty::Difficulty;
use crate::generator::random_board::{BoardParams, GeneratorError};
use crate::generator::start::{RandomStart, StartPolicy, StartedBoard};
use crate::player_input::KeyProfile;

/// Default hole probability for custom boards.
const DEFAULT_HOLES: f64 = 0.2;

/// Default height and width for custom boards.
const DEFAULT_SIZE: usize = 10;

/// Find your hat in a field full of holes.
#[derive(Parser)]
#[command(about, long_about = None, version)]
struct Args {
    /// Difficulty level (skips the menu)
    #[arg(value_enum, short = 'f', long)]
    difficulty: Option<Difficulty>,

    /// Number of rows for a custom board (overrides the difficulty level)
    #[arg(long)]
    height: Option<usize>,

    /// Number of columns for a custom board (overrides the difficulty level)
    #[arg(long)]
    width: Option<usize>,

    /// Probability for a cell to be a hole in a custom board, between 0 and 1
    #[arg(long)]
    holes: Option<f64>,

    /// Keys to move the player
    #[arg(value_enum, short, long, default_value_t = KeyProfile::Wasd)]
    keys: KeyProfile,

    /// Draw the board with plain characters instead of emoji
    #[arg(short, long, default_value_t = false)]
    ascii: bool,

    /// Do not clear the terminal between moves
    #[arg(long, default_value_t = false)]
    no_clear: bool,

    /// Never start next to the hat
    #[arg(long, default_value_t = false)]
    far_start: bool,

    /// Seed for the random generator
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of boards to generate and print instead of playing
    #[arg(short, long)]
    generate: Option<usize>,

    /// Print some statistics after generating the boards
    #[arg(long, default_value_t = false, requires = "generate")]
    summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

impl Args {
    /// Select the board parameters from the options.
    fn board_choice(&self) -> Result<BoardChoice, GeneratorError> {
        if self.height.is_none() && self.width.is_none() && self.holes.is_none() {
            return Ok(match self.difficulty {
                Some(d) => BoardChoice::Preset(d),
                None => BoardChoice::Menu,
            });
        }
        let params: BoardParams = BoardParams::new(
            self.height.unwrap_or(DEFAULT_SIZE),
            self.width.unwrap_or(DEFAULT_SIZE),
            self.holes.unwrap_or(DEFAULT_HOLES),
        )?;
        Ok(BoardChoice::Custom(params))
    }

    /// Build the game settings from the options.
    fn settings(&self) -> Result<Settings, GeneratorError> {
        Ok(Settings {
            board: self.board_choice()?,
            keys: self.keys,
            symbols: if self.ascii {
                Symbols::ascii()
            } else {
                Symbols::emoji()
            },
            policy: StartPolicy {
                avoid_goal_neighborhood: self.far_start,
            },
            clear: !self.no_clear,
            seed: self.seed,
        })
    }
}

/// What to do after parsing the options.
pub enum Command {
    /// Play a game with these settings.
    Play(Settings),

    /// Exit immediately with the given status code.
    Exit(u8),
}

/// Parse and process command-line options.
pub fn parse() -> Command {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let settings: Settings = match args.settings() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {e}");
            return Command::Exit(1);
        }
    };

    match args.generate {
        Some(count) => Command::Exit(generate(&settings, count, args.summary)),
        None => Command::Play(settings),
    }
}

/// Generate `count` boards and print them in JSON format, one board per line.
///
/// Return the exit status code.
fn generate(settings: &Settings, count: usize, summary: bool) -> u8 {
    let params: BoardParams = match settings.board {
        BoardChoice::Custom(p) => p,
        BoardChoice::Preset(d) => d.params(),
        BoardChoice::Menu => Difficulty::default().params(),
    };
    let mut rng: StdRng = settings.rng();
    let mut search: RandomStart = RandomStart::new(params, settings.policy);

    let mut boards: usize = 0;
    let mut iterations: usize = 0;
    let mut errors: usize = 0;
    for i in 0..count {
        debug!("Board {i}");
        let ret: Result<StartedBoard, GeneratorError> = search.generate(&mut rng);
        boards += search.boards;
        iterations += search.iteration;
        match ret {
            Ok(started) => match serde_json::to_string(&started) {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    eprintln!("Error: {e}");
                    return 1;
                }
            },
            Err(e) => {
                errors += 1;
                debug!("ERROR generating board: {e}");
            }
        }
    }

    if summary && count > 0 {
        println!("{}", summary_text(count, boards, iterations, errors));
    }
    if errors > 0 { 1 } else { 0 }
}

/// Format the generation statistics.
///
/// `boards` counts every generated board, including the first one of each search, so a search
/// without regeneration averages to 1.
fn summary_text(count: usize, boards: usize, iterations: usize, errors: usize) -> String {
    format!(
        "
         boards = {}
 average boards = {}
  average tries = {}
         errors = {}",
        count,
        boards / count,
        iterations / count,
        errors
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::board::{Board, Cell, Position};

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("findhat").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_open_the_menu() {
        let s: Settings = args(&[]).settings().unwrap();
        assert_eq!(s.board, BoardChoice::Menu);
        assert_eq!(s.keys, KeyProfile::Wasd);
        assert_eq!(s.symbols, Symbols::emoji());
        assert!(s.clear);
        assert!(!s.policy.avoid_goal_neighborhood);
        assert_eq!(s.seed, None);
    }

    #[test]
    fn preset_and_flags() {
        let s: Settings = args(&[
            "-f",
            "only-for-god",
            "--keys",
            "udlr",
            "--ascii",
            "--no-clear",
            "--far-start",
            "--seed",
            "12",
        ])
        .settings()
        .unwrap();
        assert_eq!(s.board, BoardChoice::Preset(Difficulty::OnlyForGod));
        assert_eq!(s.keys, KeyProfile::Udlr);
        assert_eq!(s.symbols, Symbols::ascii());
        assert!(!s.clear);
        assert!(s.policy.avoid_goal_neighborhood);
        assert_eq!(s.seed, Some(12));
    }

    #[test]
    fn custom_board_overrides_difficulty() {
        let s: Settings = args(&["-f", "challenge", "--width", "25", "--holes", "0.4"])
            .settings()
            .unwrap();
        assert_eq!(
            s.board,
            BoardChoice::Custom(BoardParams {
                height: DEFAULT_SIZE,
                width: 25,
                hole_probability: 0.4
            })
        );
        assert!(args(&["--height", "31"]).settings().is_err());
        assert!(args(&["--holes", "2"]).settings().is_err());
        assert!(matches!(
            args(&["--height", "1", "--width", "1"]).settings(),
            Err(GeneratorError::TooSmall)
        ));
    }

    #[test]
    fn summary_requires_generate() {
        assert!(Args::try_parse_from(["findhat", "--summary"]).is_err());
        assert_eq!(args(&["--generate", "2", "--summary"]).generate, Some(2));
    }

    #[test]
    fn summary_counts_boards_per_search() {
        let text: String = summary_text(4, 4, 40, 0);
        assert!(text.contains("average boards = 1"));
        assert!(text.contains("average tries = 10"));
        assert!(!text.contains("regens"));
    }

    #[test]
    fn generated_board_json() {
        let started: StartedBoard = StartedBoard {
            board: Board::from_rows(vec![vec![Cell::Visited, Cell::Goal]]).unwrap(),
            start: Position::new(0, 0),
        };
        assert_eq!(
            serde_json::to_string(&started).unwrap(),
            r#"{"board":{"rows":[["Visited","Goal"]]},"start":{"x":0,"y":0}}"#
        );
    }

    #[test]
    fn generate_reports_errors() {
        let mut s: Settings = args(&["--seed", "3"]).settings().unwrap();
        assert_eq!(generate(&s, 2, false), 0);
        s.board = BoardChoice::Custom(BoardParams::new(2, 2, 1.0).unwrap());
        assert_eq!(generate(&s, 1, false), 1);
    }
}
