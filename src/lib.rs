#![deny(missing_docs)]
//! This crate provides an A* solver for the 8-puzzle, the 3x3 sliding tile puzzle.

/// The `puzzle` module implements the board representation, move generation, the Manhattan
/// distance heuristic and the A* search over board states.
pub mod puzzle;
