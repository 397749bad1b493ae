/*
input_errors.rs

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

//! Invalid player input.
//!
//! Invalid input never ends the game: the application reports it and asks again.
//! The [`InputErrors`] counter keeps track of these retries for the debug log.

use log::debug;
use std::error::Error;
use std::fmt;

/// Type of input errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The difficulty menu choice is not one of the listed numbers.
    InvalidMenuChoice(String),

    /// The typed text is not one of the direction keys.
    InvalidDirection(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InputError::InvalidMenuChoice(s) => write!(f, "invalid menu choice {s:?}"),
            InputError::InvalidDirection(s) => write!(f, "invalid direction {s:?}"),
        }
    }
}

impl Error for InputError {}

/// Count the invalid inputs.
#[derive(Debug, Default)]
pub struct InputErrors {
    /// Number of invalid menu choices.
    menu: usize,

    /// Number of invalid directions.
    direction: usize,
}

impl InputErrors {
    /// Create an [`InputErrors`] object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the total number of invalid inputs.
    pub fn get_errors(&self) -> usize {
        self.menu + self.direction
    }

    /// Return the number of invalid directions.
    pub fn get_direction_errors(&self) -> usize {
        self.direction
    }

    /// Record an invalid input.
    pub fn add(&mut self, error: &InputError) {
        match error {
            InputError::InvalidMenuChoice(_) => self.menu += 1,
            InputError::InvalidDirection(_) => self.direction += 1,
        }
        debug!("{error}: error count = {}", self.get_errors());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters() {
        let mut errors: InputErrors = InputErrors::new();
        errors.add(&InputError::InvalidMenuChoice("9".to_string()));
        errors.add(&InputError::InvalidDirection("q".to_string()));
        errors.add(&InputError::InvalidDirection("x".to_string()));
        assert_eq!(errors.get_errors(), 3);
        assert_eq!(errors.get_direction_errors(), 2);
    }

    #[test]
    fn messages() {
        assert_eq!(
            InputError::InvalidDirection("q".to_string()).to_string(),
            "invalid direction \"q\""
        );
    }
}
