/*
board.rs

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

//! Board internal representation.
//!
//! A [`Board`] is a rectangular grid of [`Cell`] values, stored row by row.
//! Cells are addressed with [`Position`] objects, where `x` is the column and `y` the row.
//! Positions are signed so that a move can step outside the board; [`Board::get`] returns `None`
//! for these positions.

use serde::{Deserialize, Serialize};

/// Content of a board cell.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Field cell the player can walk on.
    #[default]
    Empty,

    /// The player loses when entering a hole.
    Hole,

    /// The hat. The player wins when entering this cell.
    Goal,

    /// Cell the player already occupied. Behaves like [`Cell::Empty`].
    Visited,
}

impl Cell {
    /// Whether the player can walk on the cell without ending the game.
    pub fn is_walkable(self) -> bool {
        matches!(self, Cell::Empty | Cell::Visited)
    }
}

/// Coordinates of a cell. `x` is the column and `y` the row.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: isize,
    pub y: isize,
}

impl Position {
    /// Create a [`Position`] object.
    pub fn new(x: isize, y: isize) -> Self {
        Self { x, y }
    }

    /// Return the position shifted by the given offsets.
    pub fn offset(self, dx: isize, dy: isize) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Offsets of the four orthogonal neighbors.
pub const ORTHOGONAL: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Offsets of the eight cells around a cell (Moore neighborhood).
pub const MOORE: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Grid of cells.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Cells, row by row. All the rows have the same length.
    rows: Vec<Vec<Cell>>,
}

impl Board {
    /// Create a board of the given size where all the cells are set to `cell`.
    pub fn filled(height: usize, width: usize, cell: Cell) -> Self {
        Self {
            rows: vec![vec![cell; width]; height],
        }
    }

    /// Create a board from a list of rows.
    ///
    /// Return `None` if the list is empty or if the rows do not all have the same length.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Option<Self> {
        let width: usize = rows.first()?.len();
        if width == 0 || rows.iter().any(|r| r.len() != width) {
            return None;
        }
        Some(Self { rows })
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Return the rows of the board.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Whether the position is inside the board.
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && (pos.x as usize) < self.width()
            && (pos.y as usize) < self.height()
    }

    /// Return the cell at the given position, or `None` if the position is outside the board.
    pub fn get(&self, pos: Position) -> Option<Cell> {
        if self.contains(pos) {
            Some(self.rows[pos.y as usize][pos.x as usize])
        } else {
            None
        }
    }

    /// Set the cell at the given position. Positions outside the board are ignored.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        if self.contains(pos) {
            self.rows[pos.y as usize][pos.x as usize] = cell;
        }
    }

    /// Count the cells that have the given value.
    pub fn count(&self, cell: Cell) -> usize {
        self.rows.iter().flatten().filter(|c| **c == cell).count()
    }

    /// Return the neighbors of `pos` that are inside the board, for the given offsets.
    pub fn neighbors(&self, pos: Position, offsets: &[(isize, isize)]) -> Vec<Position> {
        offsets
            .iter()
            .map(|(dx, dy)| pos.offset(*dx, *dy))
            .filter(|p| self.contains(*p))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_rejects_ragged_rows() {
        assert!(Board::from_rows(vec![vec![Cell::Empty, Cell::Goal], vec![Cell::Empty]]).is_none());
        assert!(Board::from_rows(Vec::new()).is_none());
        assert!(Board::from_rows(vec![Vec::new()]).is_none());
    }

    #[test]
    fn get_outside_the_board() {
        let board: Board = Board::filled(2, 3, Cell::Empty);
        assert_eq!(board.height(), 2);
        assert_eq!(board.width(), 3);
        assert_eq!(board.get(Position::new(2, 1)), Some(Cell::Empty));
        assert_eq!(board.get(Position::new(3, 1)), None);
        assert_eq!(board.get(Position::new(0, -1)), None);
        assert_eq!(board.get(Position::new(-1, 0)), None);
    }

    #[test]
    fn moore_neighbors_are_clipped() {
        let board: Board = Board::filled(3, 3, Cell::Empty);
        assert_eq!(board.neighbors(Position::new(0, 0), &MOORE).len(), 3);
        assert_eq!(board.neighbors(Position::new(1, 0), &MOORE).len(), 5);
        assert_eq!(board.neighbors(Position::new(1, 1), &MOORE).len(), 8);
        assert_eq!(board.neighbors(Position::new(1, 1), &ORTHOGONAL).len(), 4);
    }

    #[test]
    fn set_and_count() {
        let mut board: Board = Board::filled(2, 2, Cell::Empty);
        board.set(Position::new(1, 0), Cell::Goal);
        board.set(Position::new(5, 5), Cell::Hole);
        assert_eq!(board.get(Position::new(1, 0)), Some(Cell::Goal));
        assert_eq!(board.count(Cell::Hole), 0);
        assert_eq!(board.count(Cell::Empty), 3);
    }
}
