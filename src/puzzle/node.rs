#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Search nodes and the structures that hold them during A*.
//!
//! Nodes are stored in an append-only `NodeArena` and refer to their parent by `NodeId`, so
//! the path back to the root can be walked without any node owning another. The `Frontier` only
//! holds small `FrontierEntry` records (cost, insertion sequence, node id) and pops the entry
//! with the lowest cost, breaking ties in insertion order.

use crate::puzzle::board::Board;
use crate::puzzle::heuristic::manhattan_distance;
use crate::puzzle::moves::Move;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::ops::Index;

/// Index of a node inside a `NodeArena`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// A board reached during the search, together with how it was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchNode {
    /// The board at this node.
    pub board: Board,
    /// The node this one was expanded from; `None` for the root.
    pub parent: Option<NodeId>,
    /// The move that produced `board` from the parent's board; `None` for the root.
    pub mv: Option<Move>,
    /// Number of moves from the start board.
    pub depth: usize,
    /// `depth` plus the heuristic estimate of the remaining moves.
    pub cost: usize,
}

impl SearchNode {
    /// Creates the root node for `board`.
    #[must_use]
    pub fn root(board: Board) -> Self {
        Self {
            board,
            parent: None,
            mv: None,
            depth: 0,
            cost: manhattan_distance(&board),
        }
    }

    /// Creates the node reached by playing `mv` from the node `parent` at `parent_depth`.
    #[must_use]
    pub fn child(parent: NodeId, parent_depth: usize, mv: Move, board: Board) -> Self {
        let depth = parent_depth + 1;
        Self {
            board,
            parent: Some(parent),
            mv: Some(mv),
            depth,
            cost: depth + manhattan_distance(&board),
        }
    }
}

/// Append-only storage for every node created during a search.
#[derive(Debug, Clone, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    /// Creates an empty arena.
    #[must_use]
    pub const fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Stores `node` and returns its id.
    pub fn push(&mut self, node: SearchNode) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    /// Number of nodes stored.
    #[must_use]
    pub(crate) const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the node, if `id` belongs to this arena.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&SearchNode> {
        self.nodes.get(id.0)
    }

    /// Walks from `id` up to the root, yielding the node itself first.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = &SearchNode> + '_ {
        std::iter::successors(self.get(id), |node| node.parent.and_then(|p| self.get(p)))
    }
}

impl Index<NodeId> for NodeArena {
    type Output = SearchNode;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.0]
    }
}

/// An entry of the frontier. Ordered so that `BinaryHeap` pops the lowest cost first and, among
/// equal costs, the entry pushed earliest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierEntry {
    /// Cost of the node, copied so the heap never has to look into the arena.
    pub cost: usize,
    /// Insertion sequence number, unique per frontier.
    pub seq: usize,
    /// The node this entry refers to.
    pub id: NodeId,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue of nodes awaiting expansion.
#[derive(Debug, Clone, Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    pushed: usize,
}

impl Frontier {
    /// Creates an empty frontier.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            pushed: 0,
        }
    }

    /// Queues node `id` with priority `cost`.
    pub fn push(&mut self, cost: usize, id: NodeId) {
        self.heap.push(FrontierEntry {
            cost,
            seq: self.pushed,
            id,
        });
        self.pushed += 1;
    }

    /// Removes and returns the cheapest entry.
    pub fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop()
    }

    /// Number of queued entries.
    #[must_use]
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
