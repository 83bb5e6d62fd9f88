#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Board representation and A* search for the 8-puzzle.

/// A* search over board states and solution path reconstruction.
pub mod astar;
/// The 3x3 board value type, validation and rendering.
pub mod board;
/// Immutable configuration (start and goal board) handed to the solver.
pub mod config;
/// The Manhattan distance heuristic.
pub mod heuristic;
/// Blank-tile moves and successor generation.
pub mod moves;
/// Search nodes, the node arena and frontier ordering.
pub mod node;
