/*
start.rs

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

//! Select the player's starting position.
//!
//! A candidate is drawn at random until it is accepted, or until too many candidates have been
//! rejected. In that later case, the board is probably a bad one (the goal is trapped behind
//! holes for example) and a new board is generated.

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::board::{Board, Cell, MOORE, Position};
use super::random_board::{self, BoardParams, GeneratorError};
use super::reachability::is_reachable;

/// Number of candidates to try per board cell before giving up on the board.
const ATTEMPTS_PER_CELL: usize = 4;

/// Number of boards to generate before giving up.
const MAX_BOARDS: usize = 50;

/// Rules for accepting a starting position.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct StartPolicy {
    /// Also reject the cells around the goal, so that the hat is never right next to the
    /// player.
    pub avoid_goal_neighborhood: bool,
}

/// A board with its accepted starting position.
#[derive(Serialize, Debug, Clone)]
pub struct StartedBoard {
    /// The board. The starting cell is already set to [`Cell::Visited`].
    pub board: Board,

    /// Starting position.
    pub start: Position,
}

/// [`RandomStart`] object.
pub struct RandomStart {
    /// Board generation parameters.
    pub params: BoardParams,

    /// Acceptance rules.
    pub policy: StartPolicy,

    /// Number of candidates tried for the last search, over all the generated boards.
    pub iteration: usize,

    /// Number of boards generated for the last search.
    pub boards: usize,
}

impl RandomStart {
    /// Create the object.
    pub fn new(params: BoardParams, policy: StartPolicy) -> Self {
        Self {
            params,
            policy,
            iteration: 0,
            boards: 0,
        }
    }

    /// Generate boards until one of them has a valid starting position, and return that board
    /// and position.
    ///
    /// # Errors
    ///
    /// The method returns an error if the parameters are out of range, or if no starting
    /// position could be found after [`MAX_BOARDS`] boards. The later happens with very high
    /// hole probabilities.
    pub fn generate<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<StartedBoard, GeneratorError> {
        self.iteration = 0;
        self.boards = 0;

        while self.boards < MAX_BOARDS {
            let mut board: Board = random_board::generate(&self.params, rng)?;
            self.boards += 1;
            if let Some(start) = self.find_start(&board, rng) {
                board.set(start, Cell::Visited);
                debug!(
                    "Start at {start:?} after {} candidates and {} boards",
                    self.iteration, self.boards
                );
                return Ok(StartedBoard { board, start });
            }
            debug!("No starting position in board {}, regenerating", self.boards);
        }
        Err(GeneratorError::NoValidStart {
            boards: self.boards,
        })
    }

    /// Draw random candidates until one is accepted, or return `None` when the attempt budget
    /// for the board is spent.
    fn find_start<R: Rng + ?Sized>(&mut self, board: &Board, rng: &mut R) -> Option<Position> {
        let attempts: usize = board.height() * board.width() * ATTEMPTS_PER_CELL;
        for _ in 0..attempts {
            self.iteration += 1;
            let candidate: Position = Position::new(
                rng.random_range(0..board.width()) as isize,
                rng.random_range(0..board.height()) as isize,
            );
            if is_valid_start(board, candidate, self.policy) {
                return Some(candidate);
            }
        }
        None
    }
}

/// Whether the player can start at the given position.
///
/// The cell must be walkable, no hole can surround it, and the goal must be reachable from it.
pub fn is_valid_start(board: &Board, pos: Position, policy: StartPolicy) -> bool {
    match board.get(pos) {
        Some(cell) if cell.is_walkable() => (),
        _ => return false,
    }

    let around: Vec<Position> = board.neighbors(pos, &MOORE);
    if around.iter().any(|p| board.get(*p) == Some(Cell::Hole)) {
        return false;
    }
    if policy.avoid_goal_neighborhood
        && around.iter().any(|p| board.get(*p) == Some(Cell::Goal))
    {
        return false;
    }

    is_reachable(board, pos.x as usize, pos.y as usize)
}
