#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Moves of the blank tile.
//!
//! A move is named after the direction the blank travels. Applying a move swaps the blank with
//! the neighbouring tile in that direction and yields a fresh board; the input is never touched.

use crate::puzzle::board::{Board, CELLS, SIDE};
use smallvec::SmallVec;
use std::fmt::{self, Display};

/// Direction in which the blank tile slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Move {
    /// Blank moves one row up.
    Up,
    /// Blank moves one row down.
    Down,
    /// Blank moves one column left.
    Left,
    /// Blank moves one column right.
    Right,
}

/// Successor boards of a single board, at most one per direction.
pub type Successors = SmallVec<[(Move, Board); 4]>;

impl Move {
    /// All moves, in the order successors are generated.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Whether the blank can move in this direction from `blank`.
    #[must_use]
    pub const fn is_legal(self, blank: usize) -> bool {
        match self {
            Self::Up => blank >= SIDE,
            Self::Down => blank < CELLS - SIDE,
            Self::Left => !blank.is_multiple_of(SIDE),
            Self::Right => blank % SIDE != SIDE - 1,
        }
    }

    /// The cell the blank ends up in, or `None` if the move would leave the board.
    #[must_use]
    pub const fn target(self, blank: usize) -> Option<usize> {
        if !self.is_legal(blank) {
            return None;
        }
        Some(match self {
            Self::Up => blank - SIDE,
            Self::Down => blank + SIDE,
            Self::Left => blank - 1,
            Self::Right => blank + 1,
        })
    }

    /// The move that undoes this one.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Applies the move, returning the new board or `None` if it is illegal here.
    #[must_use]
    pub const fn apply(self, board: &Board) -> Option<Board> {
        match self.target(board.blank()) {
            Some(target) => Some(board.with_blank_at(target)),
            None => None,
        }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Self::Up => 'U',
            Self::Down => 'D',
            Self::Left => 'L',
            Self::Right => 'R',
        };
        write!(f, "{c}")
    }
}

/// Generates every board reachable from `board` with one move, in `Move::ALL` order.
#[must_use]
pub fn successors(board: &Board) -> Successors {
    Move::ALL
        .iter()
        .filter_map(|&mv| mv.apply(board).map(|next| (mv, next)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::board::{GOAL, START};

    fn board_with_blank_at(blank: usize) -> Board {
        let mut tiles = [1, 2, 3, 4, 5, 6, 7, 8, 0];
        tiles.swap(blank, 8);
        Board::new(tiles).unwrap()
    }

    #[test]
    fn test_legality_rules() {
        for blank in 0..CELLS {
            assert_eq!(Move::Up.is_legal(blank), blank >= 3);
            assert_eq!(Move::Down.is_legal(blank), blank <= 5);
            assert_eq!(Move::Left.is_legal(blank), blank % 3 != 0);
            assert_eq!(Move::Right.is_legal(blank), blank % 3 != 2);
        }
    }

    #[test]
    fn test_successor_counts() {
        let expected = [2, 3, 2, 3, 4, 3, 2, 3, 2];
        for (blank, &count) in expected.iter().enumerate() {
            let board = board_with_blank_at(blank);
            assert_eq!(successors(&board).len(), count, "blank at {blank}");
        }
    }

    #[test]
    fn test_corner_successors_in_order() {
        let moves: Vec<Move> = successors(&GOAL).iter().map(|&(mv, _)| mv).collect();
        assert_eq!(moves, vec![Move::Up, Move::Left]);

        let top_left = board_with_blank_at(0);
        let moves: Vec<Move> = successors(&top_left).iter().map(|&(mv, _)| mv).collect();
        assert_eq!(moves, vec![Move::Down, Move::Right]);
    }

    #[test]
    fn test_successor_swaps_exactly_two_cells() {
        for blank in 0..CELLS {
            let board = board_with_blank_at(blank);
            for (mv, next) in successors(&board) {
                let changed = board
                    .tiles()
                    .iter()
                    .zip(next.tiles())
                    .filter(|(a, b)| a != b)
                    .count();
                assert_eq!(changed, 2, "{mv} from blank {blank}");
                assert_ne!(next.blank(), board.blank());
                assert_eq!(next.tiles()[next.blank()], 0);
            }
        }
    }

    #[test]
    fn test_apply_leaves_input_untouched() {
        let before = START;
        let after = Move::Right.apply(&before).unwrap();
        assert_eq!(before.tiles(), &[1, 2, 3, 0, 4, 6, 7, 5, 8]);
        assert_eq!(after.tiles(), &[1, 2, 3, 4, 0, 6, 7, 5, 8]);
    }

    #[test]
    fn test_illegal_move_returns_none() {
        assert_eq!(Move::Down.apply(&GOAL), None);
        assert_eq!(Move::Right.apply(&GOAL), None);
        assert_eq!(Move::Left.apply(&START), None);
    }

    #[test]
    fn test_opposite_undoes_move() {
        let centre = board_with_blank_at(4);
        for mv in Move::ALL {
            let moved = mv.apply(&centre).unwrap();
            assert_eq!(mv.opposite().apply(&moved), Some(centre));
            assert_eq!(mv.opposite().opposite(), mv);
        }
    }

    #[test]
    fn test_display() {
        let rendered: String = Move::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, "UDLR");
    }
}
