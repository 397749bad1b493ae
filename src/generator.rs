/*
generator.rs

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

//! Generate random boards and starting positions.
//!
//! A game is played on a [`board::Board`].
//! You create a board with a guaranteed solution by creating a [`start::RandomStart`] object and
//! by using its [`start::RandomStart::generate`] method.
//! That method generates a random board with [`random_board::generate`], and then draws random
//! starting positions until one of them is accepted by [`start::is_valid_start`].
//! A starting position is accepted only if the goal can be reached from it, which is verified by
//! [`reachability::is_reachable`].
//! If it takes too many attempts to find a starting position, then a new board is generated.
//!
//! The board size and the probability for a cell to be a hole come from a
//! [`difficulty::Difficulty`] level, or from custom [`random_board::BoardParams`].

pub mod board;
pub mod difficulty;
pub mod random_board;
pub mod reachability;
pub mod start;
