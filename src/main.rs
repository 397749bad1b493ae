/*
main.rs

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

mod application;
mod cli_options;
mod draw;
mod game;
mod generator;
mod input_errors;
mod player_input;

use log::info;
use rand::rngs::StdRng;
use std::io;
use std::process::ExitCode;

use self::application::{Console, Outcome};
use self::cli_options::Command;

fn main() -> ExitCode {
    let settings = match cli_options::parse() {
        Command::Play(settings) => settings,
        Command::Exit(ret) => return ExitCode::from(ret),
    };

    let mut rng: StdRng = settings.rng();
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout(), settings);
    let ret = console.run(&mut rng);
    info!(
        "Invalid inputs: {} ({} directions)",
        console.input_errors().get_errors(),
        console.input_errors().get_direction_errors()
    );
    match ret {
        Ok(Outcome::Finished(status)) => {
            info!("Finished: {status:?}");
            ExitCode::SUCCESS
        }
        Ok(Outcome::Aborted) => {
            info!("Input closed");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
