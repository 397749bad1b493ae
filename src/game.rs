/*
game.rs

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

//! Manage the status of a game in progress.

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::generator::board::{Board, Cell, Position};
use crate::generator::random_board::{BoardParams, GeneratorError};
use crate::generator::start::{RandomStart, StartPolicy, StartedBoard};

/// Direction of a move.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Column and row offsets for the direction. Rows grow downwards.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Game status.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum GameStatus {
    /// The player is still looking for the hat.
    #[default]
    Active,

    /// The player found the hat.
    Won,

    /// The player fell down a hole.
    LostHole,

    /// The player stepped off the board.
    LostBounds,
}

impl GameStatus {
    /// Whether the game is over.
    pub fn is_over(self) -> bool {
        self != GameStatus::Active
    }
}

/// Manage the status of the game in progress.
///
/// A session is single-use: once the game is won or lost, moves are ignored.
#[derive(Serialize, Debug, Clone)]
pub struct GameSession {
    /// The board. Cells that the player occupied are set to [`Cell::Visited`].
    board: Board,

    /// Current position of the player. Outside the board when the player stepped off.
    position: Position,

    /// Current status.
    status: GameStatus,
}

impl GameSession {
    /// Create a game with a random board and a random starting position.
    ///
    /// # Errors
    ///
    /// Return an error if the parameters are out of range, or if no board with a valid starting
    /// position could be generated.
    pub fn new<R: Rng + ?Sized>(
        params: BoardParams,
        policy: StartPolicy,
        rng: &mut R,
    ) -> Result<Self, GeneratorError> {
        let started: StartedBoard = RandomStart::new(params, policy).generate(rng)?;
        Ok(Self::from_started(started))
    }

    /// Create a game from a board and its accepted starting position.
    pub fn from_started(started: StartedBoard) -> Self {
        Self::with_start(started.board, started.start)
    }

    /// Create a game on the given board, starting at the given position.
    ///
    /// The starting position is not validated; the cell is marked as visited.
    pub fn with_start(mut board: Board, start: Position) -> Self {
        board.set(start, Cell::Visited);
        Self {
            board,
            position: start,
            status: GameStatus::Active,
        }
    }

    /// Return the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Return the player's position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Return the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Move the player one cell in the given direction and return the new status.
    pub fn step(&mut self, direction: Direction) -> GameStatus {
        if self.status.is_over() {
            debug!("Move {direction:?} ignored: the game is over ({:?})", self.status);
            return self.status;
        }

        let (dx, dy) = direction.offset();
        let candidate: Position = self.position.offset(dx, dy);
        self.status = match self.board.get(candidate) {
            None => GameStatus::LostBounds,
            Some(Cell::Hole) => GameStatus::LostHole,
            Some(Cell::Goal) => GameStatus::Won,
            Some(Cell::Empty | Cell::Visited) => {
                self.board.set(candidate, Cell::Visited);
                GameStatus::Active
            }
        };
        self.position = candidate;
        debug!("Move {direction:?} to {candidate:?}: {:?}", self.status);
        self.status
    }
}
