#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The 8-puzzle board.
//!
//! A `Board` holds the nine tiles of a 3x3 grid in row-major order, with `0` standing for the
//! blank. Boards are small `Copy` values compared and hashed by their tiles, so the search can
//! keep them directly in its visited set and frontier nodes.
//!
//! Construction through `Board::new` (or `TryFrom<&[u8]>`) validates that the tiles are a
//! permutation of `0..=8`. The position of the blank is cached alongside the tiles so move
//! generation never has to search for it.

use crate::puzzle::moves::{Move, successors};
use itertools::Itertools;
use smallvec::SmallVec;
use std::fmt::{self, Display};
use thiserror::Error;

/// Number of rows (and columns) of the board.
pub const SIDE: usize = 3;

/// Number of cells on the board.
pub const CELLS: usize = SIDE * SIDE;

/// Horizontal rule drawn between rows when rendering a board.
pub const BORDER: &str = "+---+---+---+";

/// The solved board: tiles `1..=8` in order with the blank in the bottom-right corner.
pub const GOAL: Board = Board {
    tiles: [1, 2, 3, 4, 5, 6, 7, 8, 0],
    blank: 8,
};

/// The fixed instance solved by the command-line program.
pub const START: Board = Board {
    tiles: [1, 2, 3, 0, 4, 6, 7, 5, 8],
    blank: 3,
};

/// Errors raised when a tile sequence is not a valid 8-puzzle board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidBoardError {
    /// The sequence did not contain exactly nine tiles.
    #[error("a board needs exactly 9 tiles, got {len}")]
    WrongLength {
        /// Number of tiles supplied.
        len: usize,
    },
    /// A tile was outside `0..=8`.
    #[error("tile {value} is outside the range 0..=8")]
    OutOfRange {
        /// The offending tile.
        value: u8,
    },
    /// A tile appeared more than once.
    #[error("tile {value} appears more than once")]
    Duplicate {
        /// The repeated tile.
        value: u8,
    },
}

/// A 3x3 sliding puzzle board in row-major order, `0` being the blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    tiles: [u8; CELLS],
    blank: usize,
}

impl Board {
    /// Creates a board from its tiles in row-major order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidBoardError` if the tiles are not a permutation of `0..=8`.
    pub fn new(tiles: [u8; CELLS]) -> Result<Self, InvalidBoardError> {
        let mut seen = [false; CELLS];
        let mut blank = 0;

        for (index, &value) in tiles.iter().enumerate() {
            let slot = seen
                .get_mut(usize::from(value))
                .ok_or(InvalidBoardError::OutOfRange { value })?;
            if *slot {
                return Err(InvalidBoardError::Duplicate { value });
            }
            *slot = true;

            if value == 0 {
                blank = index;
            }
        }

        Ok(Self { tiles, blank })
    }

    /// The tiles in row-major order.
    #[must_use]
    pub const fn tiles(&self) -> &[u8; CELLS] {
        &self.tiles
    }

    /// Index of the blank tile, in `0..9`.
    #[must_use]
    pub const fn blank(&self) -> usize {
        self.blank
    }

    /// Returns a copy of this board with the blank swapped into `target`.
    ///
    /// `target` must be a valid cell index; legality of the move is the caller's concern.
    pub(crate) const fn with_blank_at(&self, target: usize) -> Self {
        let mut tiles = self.tiles;
        tiles[self.blank] = tiles[target];
        tiles[target] = 0;
        Self {
            tiles,
            blank: target,
        }
    }

    /// Number of pairs of non-blank tiles that appear out of order.
    #[must_use]
    pub fn inversions(&self) -> usize {
        self.tiles
            .iter()
            .filter(|&&tile| tile != 0)
            .tuple_combinations()
            .filter(|(a, b)| a > b)
            .count()
    }

    /// Whether `GOAL` can be reached from this board.
    ///
    /// On an odd-width board a slide never changes the parity of the inversion count, and the
    /// goal has none, so exactly the even permutations are solvable.
    #[must_use]
    pub fn is_solvable(&self) -> bool {
        self.inversions().is_multiple_of(2)
    }

    /// Produces a board by walking `moves` random legal moves away from `GOAL`.
    ///
    /// The walk never immediately undoes its previous move. The result is always solvable in at
    /// most `moves` steps.
    #[must_use]
    pub fn scrambled(moves: usize, rng: &mut fastrand::Rng) -> Self {
        let mut board = GOAL;
        let mut last: Option<Move> = None;

        for _ in 0..moves {
            let candidates: SmallVec<[(Move, Self); 4]> = successors(&board)
                .into_iter()
                .filter(|&(mv, _)| last.is_none_or(|prev| prev.opposite() != mv))
                .collect();

            // Every cell has at least two legal moves, so one survives the filter.
            let (mv, next) = candidates[rng.usize(..candidates.len())];
            board = next;
            last = Some(mv);
        }

        board
    }
}

/// Returns the `(row, column)` of a cell index.
#[must_use]
pub const fn coordinates(index: usize) -> (usize, usize) {
    (index / SIDE, index % SIDE)
}

impl TryFrom<&[u8]> for Board {
    type Error = InvalidBoardError;

    fn try_from(tiles: &[u8]) -> Result<Self, Self::Error> {
        let tiles = <[u8; CELLS]>::try_from(tiles)
            .map_err(|_| InvalidBoardError::WrongLength { len: tiles.len() })?;
        Self::new(tiles)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{BORDER}")?;
        for row in self.tiles.chunks(SIDE) {
            let cells = row
                .iter()
                .map(|&tile| {
                    if tile == 0 {
                        " ".to_string()
                    } else {
                        tile.to_string()
                    }
                })
                .join(" | ");
            writeln!(f, "| {cells} |")?;
            writeln!(f, "{BORDER}")?;
        }
        Ok(())
    }
}
