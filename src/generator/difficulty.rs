/*
difficulty.rs

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

//! Difficulty levels.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::FromRepr;

use super::random_board::BoardParams;

/// Difficulty level. The representation is the number the player types in the menu.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialOrd,
    PartialEq,
    Eq,
    Hash,
    ValueEnum,
    FromRepr,
    Default,
)]
#[repr(u8)]
pub enum Difficulty {
    #[default]
    Beginner = 1,
    Challenge = 2,
    OnlyForGod = 3,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Difficulty::Beginner => write!(f, "Beginner"),
            Difficulty::Challenge => write!(f, "Challenge"),
            Difficulty::OnlyForGod => write!(f, "Only for God"),
        }
    }
}

impl Difficulty {
    /// All the levels, in menu order.
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Challenge,
        Difficulty::OnlyForGod,
    ];

    /// Return the level for a menu choice ("1", "2", or "3"), or `None` for any other input.
    pub fn from_choice(choice: &str) -> Option<Self> {
        choice.trim().parse::<u8>().ok().and_then(Self::from_repr)
    }

    /// Board parameters for the level.
    pub fn params(self) -> BoardParams {
        let (size, hole_probability) = match self {
            Difficulty::Beginner => (10, 0.1),
            Difficulty::Challenge => (15, 0.2),
            Difficulty::OnlyForGod => (20, 0.3),
        };
        BoardParams {
            height: size,
            width: size,
            hole_probability,
        }
    }
}
