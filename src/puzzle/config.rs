#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]

use crate::puzzle::board::{Board, GOAL, START};

/// The problem instance handed to the solver: where the search starts and where it must end.
///
/// The goal is always `GOAL`, the layout the Manhattan heuristic measures against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleConfig {
    start: Board,
    goal: Board,
}

impl PuzzleConfig {
    /// Creates a configuration that searches from `start` to `GOAL`.
    #[must_use]
    pub const fn new(start: Board) -> Self {
        Self { start, goal: GOAL }
    }

    /// The board the search starts from.
    #[must_use]
    pub const fn start(&self) -> &Board {
        &self.start
    }

    /// The board the search is looking for.
    #[must_use]
    pub const fn goal(&self) -> &Board {
        &self.goal
    }

    /// Whether `board` is the goal.
    #[must_use]
    pub fn is_goal(&self, board: &Board) -> bool {
        *board == self.goal
    }
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self::new(START)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_fixed_instance() {
        let config = PuzzleConfig::default();
        assert_eq!(config.start(), &START);
        assert_eq!(config.goal(), &GOAL);
    }

    #[test]
    fn test_is_goal() {
        let config = PuzzleConfig::default();
        assert!(config.is_goal(&GOAL));
        assert!(!config.is_goal(&START));
    }
}
