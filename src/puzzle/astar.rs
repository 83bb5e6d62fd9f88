#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! A* search over 8-puzzle boards.
//!
//! `AStar` owns every structure of a single search: the node arena, the frontier ordered by
//! `depth + manhattan_distance`, and the set of boards already expanded. The search is driven
//! as a small state machine:
//!
//! 1.  **Running**: each call to `step` pops the cheapest frontier entry. Entries whose board
//!     was already expanded are dropped, otherwise the board is marked visited and every legal
//!     successor not yet visited is pushed as a child node.
//! 2.  **Solved**: the popped board equals the goal. The goal node is kept and the path is
//!     rebuilt from parent links on demand.
//! 3.  **Exhausted**: the frontier ran dry without reaching the goal. This is the normal
//!     outcome for boards of the wrong permutation parity, not an error.
//!
//! `solve` simply steps until the state leaves `Running`.

use crate::puzzle::board::Board;
use crate::puzzle::config::PuzzleConfig;
use crate::puzzle::moves::{Move, successors};
use crate::puzzle::node::{Frontier, NodeArena, NodeId, SearchNode};
use itertools::Itertools;
use rustc_hash::FxHashSet;
use std::fmt::{self, Display};

/// Where a search currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum SearchState {
    /// Frontier entries remain and the goal has not been popped yet.
    #[default]
    Running,
    /// The goal board was popped from the frontier.
    Solved,
    /// The frontier emptied without reaching the goal.
    Exhausted,
}

/// Counters collected while searching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// Boards expanded, i.e. added to the visited set.
    pub expanded: usize,
    /// Child nodes pushed onto the frontier.
    pub generated: usize,
    /// Frontier entries dropped because their board had already been expanded.
    pub duplicates: usize,
    /// Largest frontier size observed.
    pub max_frontier: usize,
}

/// One move of a solution and the board it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// The move played.
    pub mv: Move,
    /// The board after the move.
    pub board: Board,
}

/// A path from the start board to the goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    start: Board,
    steps: Vec<Step>,
}

impl Solution {
    /// The board the path starts from.
    #[must_use]
    pub const fn start(&self) -> &Board {
        &self.start
    }

    /// The moves of the path in order, each with its resulting board. The start is not included.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of moves in the path.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.steps.len()
    }

    /// The moves of the path in order.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.steps.iter().map(|step| step.mv)
    }

    /// The last board of the path; the start itself when no move was needed.
    #[must_use]
    pub fn final_board(&self) -> &Board {
        self.steps.last().map_or(&self.start, |step| &step.board)
    }
}

impl Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Start:")?;
        write!(f, "{}", self.start)?;
        for step in &self.steps {
            writeln!(f, "Move: {}", step.mv)?;
            write!(f, "{}", step.board)?;
        }
        Ok(())
    }
}

/// An A* search from the configured start board to the goal.
#[derive(Debug, Clone)]
pub struct AStar {
    config: PuzzleConfig,
    arena: NodeArena,
    frontier: Frontier,
    visited: FxHashSet<Board>,
    state: SearchState,
    goal: Option<NodeId>,
    stats: SearchStats,
}

impl AStar {
    /// Prepares a search with the root node for `config.start()` on the frontier.
    #[must_use]
    pub fn new(config: PuzzleConfig) -> Self {
        let mut arena = NodeArena::new();
        let mut frontier = Frontier::new();

        let root = SearchNode::root(*config.start());
        let cost = root.cost;
        let id = arena.push(root);
        frontier.push(cost, id);

        Self {
            config,
            arena,
            frontier,
            visited: FxHashSet::default(),
            state: SearchState::Running,
            goal: None,
            stats: SearchStats {
                max_frontier: 1,
                ..SearchStats::default()
            },
        }
    }

    /// The current state of the search.
    #[must_use]
    pub const fn state(&self) -> SearchState {
        self.state
    }

    /// Counters collected so far.
    #[must_use]
    pub const fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Number of nodes created so far, the root included.
    #[must_use]
    pub fn nodes(&self) -> usize {
        self.arena.len()
    }

    /// Advances the search by one frontier pop and returns the resulting state.
    ///
    /// Once the search has left `Running`, further calls do nothing.
    pub fn step(&mut self) -> SearchState {
        if self.state != SearchState::Running {
            return self.state;
        }

        let Some(entry) = self.frontier.pop() else {
            self.state = SearchState::Exhausted;
            return self.state;
        };

        let SearchNode { board, depth, .. } = self.arena[entry.id];

        if self.config.is_goal(&board) {
            self.goal = Some(entry.id);
            self.state = SearchState::Solved;
            return self.state;
        }

        if !self.visited.insert(board) {
            self.stats.duplicates += 1;
            return self.state;
        }
        self.stats.expanded += 1;

        for (mv, next) in successors(&board) {
            if self.visited.contains(&next) {
                continue;
            }
            let child = SearchNode::child(entry.id, depth, mv, next);
            let cost = child.cost;
            let id = self.arena.push(child);
            self.frontier.push(cost, id);
            self.stats.generated += 1;
        }

        self.stats.max_frontier = self.stats.max_frontier.max(self.frontier.len());
        self.state
    }

    /// Runs the search to completion.
    ///
    /// Returns the path to the goal, or `None` if the goal is unreachable from the start board.
    pub fn solve(&mut self) -> Option<Solution> {
        while self.step() == SearchState::Running {}
        self.solution()
    }

    /// Rebuilds the path to the goal by following parent links back to the root.
    ///
    /// Returns `None` unless the search is `Solved`.
    #[must_use]
    pub fn solution(&self) -> Option<Solution> {
        let goal = self.goal?;

        let mut steps = self
            .arena
            .ancestors(goal)
            .filter_map(|node| node.mv.map(|mv| Step { mv, board: node.board }))
            .collect_vec();
        steps.reverse();

        Some(Solution {
            start: *self.config.start(),
            steps,
        })
    }
}
