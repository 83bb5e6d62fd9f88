//! # eight-puzzle
//!
//! `eight-puzzle` solves a fixed instance of the 8-puzzle with A* search and prints the
//! sequence of moves leading to the goal board.
//!
//! The search expands boards in order of `depth + Manhattan distance`. Because the heuristic
//! never overestimates, the first time the goal board is popped from the frontier its path is
//! optimal. Boards of the wrong permutation parity cannot reach the goal; for them the search
//! exhausts the reachable state space and reports that no solution exists.
//!
//! ## Usage
//!
//! ```sh
//! eight-puzzle [OPTIONS] [SUBCOMMAND]
//! ```
//!
//! Without arguments the built-in board `[1, 2, 3, 0, 4, 6, 7, 5, 8]` is solved and the trace
//! is printed, one move per step, each followed by the resulting board. On a terminal the
//! header is green (red when there is no solution), tiles are yellow and the blank is cyan:
//!
//! ```text
//! Solution found:
//! Start:
//! +---+---+---+
//! | 1 | 2 | 3 |
//! +---+---+---+
//! |   | 4 | 6 |
//! +---+---+---+
//! | 7 | 5 | 8 |
//! +---+---+---+
//! Move: R
//! ...
//! ```
//!
//! ### Options
//!
//! -   `-d, --debug`: Print the start heuristic, solvability parity and timing (default: `false`).
//! -   `-s, --stats`: Print search statistics and memory usage (default: `false`).
//! -   `--no-color`: Print the trace without colours (default: `false`). Colours are only used
//!     when stdout is a terminal.
//!
//! ### Subcommands
//!
//! -   **`completions <shell>`**: Print shell completion scripts.
//!
//! The process exits with status 0 whether or not a solution exists.

use crate::command_line::cli::{Cli, Commands, print_completions, solve_and_report};
use clap::Parser;
use eight_puzzle::puzzle::config::PuzzleConfig;

mod command_line;

/// Global allocator using `tikv-jemallocator` for potentially better performance
/// and memory usage tracking.
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

/// Main entry point of the solver.
///
/// Parses command-line arguments and either prints completions or solves the built-in instance.
fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => print_completions(shell),
        None => solve_and_report(&PuzzleConfig::default(), &cli.common),
    }
}
