/*
reachability.rs

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

//! Verify that the goal can be reached from a given cell.

use std::collections::VecDeque;

use super::board::{Board, Cell, ORTHOGONAL, Position};

/// Whether a goal cell can be reached from the given starting cell.
///
/// The search is a breadth-first traversal that moves up, down, left, and right, and never
/// crosses a hole. The board is not modified: visited cells are tracked in a separate grid.
/// A start outside the board or on a hole cannot reach anything.
pub fn is_reachable(board: &Board, start_x: usize, start_y: usize) -> bool {
    let start: Position = Position::new(start_x as isize, start_y as isize);
    match board.get(start) {
        None | Some(Cell::Hole) => return false,
        Some(_) => (),
    }

    let mut visited: Vec<Vec<bool>> = vec![vec![false; board.width()]; board.height()];
    let mut queue: VecDeque<Position> = VecDeque::new();
    visited[start_y][start_x] = true;
    queue.push_back(start);

    while let Some(pos) = queue.pop_front() {
        if board.get(pos) == Some(Cell::Goal) {
            return true;
        }
        for next in board.neighbors(pos, &ORTHOGONAL) {
            let (x, y) = (next.x as usize, next.y as usize);
            if visited[y][x] || board.get(next) == Some(Cell::Hole) {
                continue;
            }
            visited[y][x] = true;
            queue.push_back(next);
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::random_board::{BoardParams, generate};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::generator::board::Cell::{Empty as E, Goal as G, Hole as H, Visited as V};

    fn board(rows: &[&[Cell]]) -> Board {
        Board::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    /// Swap rows and columns.
    fn transpose(b: &Board) -> Board {
        let rows: Vec<Vec<Cell>> = (0..b.width())
            .map(|x| (0..b.height()).map(|y| b.rows()[y][x]).collect())
            .collect();
        Board::from_rows(rows).unwrap()
    }

    #[test]
    fn center_goal_is_reachable_from_corner() {
        let b: Board = board(&[&[E, E, E], &[E, G, E], &[E, E, E]]);
        assert!(is_reachable(&b, 0, 0));
    }

    #[test]
    fn walled_in_start() {
        let b: Board = board(&[&[H, H, H], &[H, E, H], &[H, H, G]]);
        assert!(!is_reachable(&b, 1, 1));
        // Diagonal moves are not allowed
        let b: Board = board(&[&[E, H], &[H, G]]);
        assert!(!is_reachable(&b, 0, 0));
    }

    #[test]
    fn path_around_holes() {
        let b: Board = board(&[
            &[E, H, E, E, E],
            &[E, H, E, H, E],
            &[E, E, E, H, G],
        ]);
        assert!(is_reachable(&b, 0, 0));

        let b: Board = board(&[
            &[E, H, E, E, E],
            &[E, H, E, H, E],
            &[E, H, E, H, G],
        ]);
        assert!(!is_reachable(&b, 0, 0));
        assert!(is_reachable(&b, 2, 2));
    }

    #[test]
    fn visited_cells_are_walkable() {
        let b: Board = board(&[&[V, V, V, G]]);
        assert!(is_reachable(&b, 0, 0));
    }

    #[test]
    fn start_on_goal_hole_or_outside() {
        let b: Board = board(&[&[G, H]]);
        assert!(is_reachable(&b, 0, 0));
        assert!(!is_reachable(&b, 1, 0));
        assert!(!is_reachable(&b, 2, 0));
        assert!(!is_reachable(&b, 0, 1));
    }

    #[test]
    fn board_is_not_modified() {
        let b: Board = board(&[&[E, E], &[E, G]]);
        let copy: Board = b.clone();
        is_reachable(&b, 0, 0);
        assert_eq!(b, copy);
    }

    #[test]
    fn symmetric_under_transposition() {
        let mut rng: StdRng = StdRng::seed_from_u64(42);
        let params: BoardParams = BoardParams::new(7, 11, 0.35).unwrap();
        for _ in 0..100 {
            let b: Board = generate(&params, &mut rng).unwrap();
            let t: Board = transpose(&b);
            for y in 0..b.height() {
                for x in 0..b.width() {
                    assert_eq!(is_reachable(&b, x, y), is_reachable(&t, y, x));
                }
            }
        }
    }
}
