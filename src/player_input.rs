/*
player_input.rs

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

//! Translate the player's keys into moves.
//!
//! Two key profiles are available: `W`, `S`, `A`, `D` (the default) and `U`, `D`, `L`, `R`.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::game::Direction;
use crate::input_errors::InputError;

/// Key binding profile.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum KeyProfile {
    /// `W` up, `S` down, `A` left, `D` right.
    #[default]
    Wasd,

    /// `U` up, `D` down, `L` left, `R` right.
    Udlr,
}

impl KeyProfile {
    /// Keys for up, down, left, and right, in that order.
    pub fn keys(self) -> [char; 4] {
        match self {
            KeyProfile::Wasd => ['w', 's', 'a', 'd'],
            KeyProfile::Udlr => ['u', 'd', 'l', 'r'],
        }
    }

    /// Return the keys as an uppercase list, for the instructions: "W, S, A, D".
    pub fn describe(self) -> String {
        self.keys()
            .iter()
            .map(|c| c.to_ascii_uppercase().to_string())
            .collect::<Vec<String>>()
            .join(", ")
    }

    /// Return the direction for the line that the player typed.
    ///
    /// The comparison is case-insensitive and ignores surrounding spaces.
    ///
    /// # Errors
    ///
    /// Return [`InputError::InvalidDirection`] for anything else than one of the four keys.
    pub fn parse(self, line: &str) -> Result<Direction, InputError> {
        let token: String = line.trim().to_lowercase();
        let [up, down, left, right] = self.keys();
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c == up => Ok(Direction::Up),
            (Some(c), None) if c == down => Ok(Direction::Down),
            (Some(c), None) if c == left => Ok(Direction::Left),
            (Some(c), None) if c == right => Ok(Direction::Right),
            _ => Err(InputError::InvalidDirection(line.trim().to_string())),
        }
    }
}
