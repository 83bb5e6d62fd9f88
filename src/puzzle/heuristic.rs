#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The Manhattan distance heuristic.
//!
//! For every non-blank tile the heuristic adds the number of rows and columns separating the
//! tile from its home cell, where tile `n` belongs at index `n - 1`. Each move shifts exactly
//! one tile by one cell, so the sum never overestimates the number of moves left and A* with
//! this heuristic returns optimal solutions.

use crate::puzzle::board::{Board, coordinates};

/// Sum of the Manhattan distances of all non-blank tiles from their goal cells.
#[must_use]
pub fn manhattan_distance(board: &Board) -> usize {
    board
        .tiles()
        .iter()
        .enumerate()
        .filter(|&(_, &tile)| tile != 0)
        .map(|(index, &tile)| {
            let (row, col) = coordinates(index);
            let (goal_row, goal_col) = coordinates(usize::from(tile) - 1);
            row.abs_diff(goal_row) + col.abs_diff(goal_col)
        })
        .sum()
}
