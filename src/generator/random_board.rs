/*
random_board.rs

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

//! Generate a random board.

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

use super::board::{Board, Cell, Position};

/// Largest accepted height and width.
pub const MAX_SIZE: usize = 30;

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum GeneratorError {
    /// The height or the width is 0 or larger than [`MAX_SIZE`].
    InvalidDimensions { height: usize, width: usize },

    /// The board has a single cell, which leaves no room for both the player and the goal.
    TooSmall,

    /// The hole probability is not between 0 and 1.
    InvalidProbability(f64),

    /// No valid starting position found, even after regenerating the board several times.
    NoValidStart { boards: usize },
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GeneratorError::InvalidDimensions { height, width } => write!(
                f,
                "invalid board size {height}x{width}: height and width must be between 1 and {MAX_SIZE}"
            ),
            GeneratorError::TooSmall => write!(
                f,
                "invalid board size 1x1: the board needs at least 2 cells, one for the player and one for the hat"
            ),
            GeneratorError::InvalidProbability(p) => {
                write!(f, "invalid hole probability {p}: must be between 0 and 1")
            }
            GeneratorError::NoValidStart { boards } => write!(
                f,
                "no valid starting position found in {boards} boards; try a lower hole probability"
            ),
        }
    }
}

impl Error for GeneratorError {}

/// Board generation parameters.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct BoardParams {
    /// Number of rows.
    pub height: usize,

    /// Number of columns.
    pub width: usize,

    /// Probability for a cell to be a hole.
    pub hole_probability: f64,
}

impl BoardParams {
    /// Create a [`BoardParams`] object.
    ///
    /// # Errors
    ///
    /// Return an error if the dimensions or the probability are out of range.
    pub fn new(height: usize, width: usize, hole_probability: f64) -> Result<Self, GeneratorError> {
        let params: BoardParams = Self {
            height,
            width,
            hole_probability,
        };
        params.validate()?;
        Ok(params)
    }

    /// Verify that the parameters are in range.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if !(1..=MAX_SIZE).contains(&self.height) || !(1..=MAX_SIZE).contains(&self.width) {
            return Err(GeneratorError::InvalidDimensions {
                height: self.height,
                width: self.width,
            });
        }
        if self.height * self.width < 2 {
            return Err(GeneratorError::TooSmall);
        }
        // The negated form also rejects NaN
        if !(0.0..=1.0).contains(&self.hole_probability) {
            return Err(GeneratorError::InvalidProbability(self.hole_probability));
        }
        Ok(())
    }
}

/// Generate a random board.
///
/// Each cell becomes a hole with the probability given in `params`.
/// One random cell is then turned into the goal, possibly replacing a hole.
/// The board is not checked for solvability; see [`super::start`] for that.
///
/// # Errors
///
/// Return an error if `params` is out of range.
pub fn generate<R: Rng + ?Sized>(
    params: &BoardParams,
    rng: &mut R,
) -> Result<Board, GeneratorError> {
    params.validate()?;

    let mut board: Board = Board::filled(params.height, params.width, Cell::Empty);
    for y in 0..params.height {
        for x in 0..params.width {
            let draw: f64 = rng.random::<f64>();
            if draw < params.hole_probability {
                board.set(Position::new(x as isize, y as isize), Cell::Hole);
            }
        }
    }

    let goal: Position = Position::new(
        rng.random_range(0..params.width) as isize,
        rng.random_range(0..params.height) as isize,
    );
    board.set(goal, Cell::Goal);
    debug!(
        "Generated {}x{} board: {} holes, goal at {goal:?}",
        params.height,
        params.width,
        board.count(Cell::Hole)
    );
    Ok(board)
}
