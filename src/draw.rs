/*
draw.rs

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

//! Draw the board as text.

use crate::generator::board::{Board, Cell};

/// Characters used to draw the cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbols {
    pub hat: &'static str,
    pub hole: &'static str,
    pub field: &'static str,
    pub path: &'static str,
}

impl Default for Symbols {
    fn default() -> Self {
        Self::emoji()
    }
}

impl Symbols {
    /// Emoji symbols.
    pub fn emoji() -> Self {
        Self {
            hat: "👒",
            hole: "🔳",
            field: "⬜",
            path: "👮",
        }
    }

    /// Plain symbols, for terminals that cannot display emoji.
    pub fn ascii() -> Self {
        Self {
            hat: "^",
            hole: "O",
            field: "░",
            path: "*",
        }
    }

    /// Return the symbol for a cell.
    pub fn get(&self, cell: Cell) -> &'static str {
        match cell {
            Cell::Empty => self.field,
            Cell::Hole => self.hole,
            Cell::Goal => self.hat,
            Cell::Visited => self.path,
        }
    }

    /// Draw the board. Cells are separated by a space and rows by a new line.
    pub fn render(&self, board: &Board) -> String {
        board
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|c| self.get(*c))
                    .collect::<Vec<&str>>()
                    .join(" ")
            })
            .collect::<Vec<String>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_rows() {
        let board: Board = Board::from_rows(vec![
            vec![Cell::Visited, Cell::Empty, Cell::Hole],
            vec![Cell::Empty, Cell::Goal, Cell::Empty],
        ])
        .unwrap();
        assert_eq!(Symbols::ascii().render(&board), "* ░ O\n░ ^ ░");
        assert_eq!(Symbols::emoji().render(&board), "👮 ⬜ 🔳\n⬜ 👒 ⬜");
    }
}
