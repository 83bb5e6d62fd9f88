#![allow(clippy::cast_precision_loss)]

use clap::{Args, CommandFactory, Parser, Subcommand};
use eight_puzzle::puzzle::astar::{AStar, SearchStats, Solution};
use eight_puzzle::puzzle::board::{BORDER, Board, SIDE};
use eight_puzzle::puzzle::config::PuzzleConfig;
use eight_puzzle::puzzle::heuristic::manhattan_distance;
use std::fmt::Display;
use std::io::{self, IsTerminal, Write};
use std::time::{Duration, Instant};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use tikv_jemalloc_ctl::{epoch, stats};

/// Defines the command-line interface for the 8-puzzle solver.
///
/// Uses `clap` for parsing arguments. Without a subcommand the fixed instance is solved.
#[derive(Parser, Debug)]
#[command(
    name = "eight-puzzle",
    version,
    about = "Solve the 8-puzzle with A* search and the Manhattan distance heuristic"
)]
pub(crate) struct Cli {
    /// Optional subcommand; when absent the built-in instance is solved.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Options controlling the solve report.
    #[command(flatten)]
    pub common: CommonOptions,
}

/// Enumerates the available subcommands.
#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Generate shell completion scripts.
    Completions {
        /// The shell to generate completions for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Options shared by every run of the solver.
#[derive(Args, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CommonOptions {
    /// Enable debug output: start heuristic, solvability parity and timing.
    #[arg(short, long, default_value_t = false)]
    pub(crate) debug: bool,

    /// Print problem and search statistics after solving.
    #[arg(short, long, default_value_t = false)]
    pub(crate) stats: bool,

    /// Print the trace without colours, even on a terminal.
    #[arg(long, default_value_t = false)]
    pub(crate) no_color: bool,
}

/// Writes completions for `shell` to stdout.
pub(crate) fn print_completions(shell: clap_complete::Shell) {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
}

/// Runs the search for `config`, returning the outcome, the elapsed time and the counters.
pub(crate) fn solve(
    config: &PuzzleConfig,
    common: &CommonOptions,
) -> (Option<Solution>, Duration, SearchStats) {
    if common.debug {
        let start = config.start();
        println!("Start: {:?}", start.tiles());
        println!("Goal: {:?}", config.goal().tiles());
        println!("Heuristic: {}", manhattan_distance(start));
        println!("Inversions: {}", start.inversions());
        println!("Solvable: {}", start.is_solvable());
    }

    let time = Instant::now();

    let mut solver = AStar::new(*config);
    let sol = solver.solve();

    let elapsed = time.elapsed();

    if common.debug {
        println!("State: {:?}", solver.state());
        println!("Nodes: {}", solver.nodes());
        println!("Time: {elapsed:?}");
    }

    (sol, elapsed, solver.stats())
}

/// Picks the colour mode for the trace: colours only on a terminal and without `--no-color`.
/// `ColorChoice::Auto` still honours `NO_COLOR` and `TERM=dumb`.
pub(crate) const fn color_choice(no_color: bool, is_terminal: bool) -> ColorChoice {
    if !no_color && is_terminal {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

fn write_colored<W: WriteColor>(out: &mut W, color: Color, text: impl Display) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(color)))?;
    write!(out, "{text}")?;
    out.reset()
}

/// Writes `board` as a bordered grid: tiles in yellow, the blank as a cyan space.
///
/// Without colour the bytes are the same as `Board`'s `Display`.
pub(crate) fn write_board<W: WriteColor>(out: &mut W, board: &Board) -> io::Result<()> {
    writeln!(out, "{BORDER}")?;
    for row in board.tiles().chunks(SIDE) {
        write!(out, "|")?;
        for &tile in row {
            write!(out, " ")?;
            if tile == 0 {
                write_colored(out, Color::Cyan, ' ')?;
            } else {
                write_colored(out, Color::Yellow, tile)?;
            }
            write!(out, " |")?;
        }
        writeln!(out)?;
        writeln!(out, "{BORDER}")?;
    }
    Ok(())
}

/// Writes the outcome of a search: a green header and the trace, or a red notice.
pub(crate) fn write_report<W: WriteColor>(
    out: &mut W,
    solution: Option<&Solution>,
) -> io::Result<()> {
    let Some(solution) = solution else {
        write_colored(out, Color::Red, "No solution exists.")?;
        return writeln!(out);
    };

    write_colored(out, Color::Green, "Solution found:")?;
    writeln!(out)?;
    writeln!(out, "Start:")?;
    write_board(out, solution.start())?;
    for step in solution.steps() {
        writeln!(out, "Move: {}", step.mv)?;
        write_board(out, &step.board)?;
    }
    Ok(())
}

/// Solves `config` and prints the trace, followed by statistics if requested.
pub(crate) fn solve_and_report(config: &PuzzleConfig, common: &CommonOptions) {
    let (sol, elapsed, search_stats) = solve(config, common);

    let choice = color_choice(common.no_color, io::stdout().is_terminal());
    let mut stdout = StandardStream::stdout(choice);
    if let Err(err) = write_report(&mut stdout, sol.as_ref()).and_then(|()| stdout.flush()) {
        eprintln!("Failed to write the solution: {err}");
    }

    if common.stats {
        print_stats(
            config,
            elapsed,
            &search_stats,
            memory_usage(),
            sol.as_ref(),
        );
    }
}

/// Reads allocated and resident memory from jemalloc, in MiB.
///
/// Returns `None` if the allocator statistics cannot be read.
pub(crate) fn memory_usage() -> Option<(f64, f64)> {
    epoch::advance().ok()?;

    let allocated_bytes = stats::allocated::read().ok()?;
    let resident_bytes = stats::resident::read().ok()?;

    let allocated_mib = allocated_bytes as f64 / (1024.0 * 1024.0);
    let resident_mib = resident_bytes as f64 / (1024.0 * 1024.0);
    Some((allocated_mib, resident_mib))
}

/// Helper function to print a single statistic line in a formatted table row.
pub(crate) fn stat_line(label: &str, value: impl std::fmt::Display) {
    println!("|  {label:<28} {value:>18}  |");
}

/// Helper function to print a statistic line that includes a rate (value/second).
pub(crate) fn stat_line_with_rate(label: &str, value: usize, elapsed: f64) {
    let rate = if elapsed > 0.0 {
        value as f64 / elapsed
    } else {
        0.0
    };
    println!("|  {label:<20} {value:>12} ({rate:>9.0}/sec)  |");
}

/// Prints a summary of problem and search statistics.
///
/// # Arguments
/// * `config` - The instance that was solved.
/// * `elapsed` - Duration spent by the solver.
/// * `s` - `SearchStats` collected by the solver.
/// * `memory` - Allocated and resident memory in MiB, when available.
/// * `solution` - The solution found, if any.
pub(crate) fn print_stats(
    config: &PuzzleConfig,
    elapsed: Duration,
    s: &SearchStats,
    memory: Option<(f64, f64)>,
    solution: Option<&Solution>,
) {
    let elapsed_secs = elapsed.as_secs_f64();
    let start = config.start();

    println!("\n=======================[ Problem Statistics ]=========================");
    stat_line("Start heuristic", manhattan_distance(start));
    stat_line("Inversions", start.inversions());
    stat_line("Solvable", start.is_solvable());

    println!("========================[ Search Statistics ]========================");
    stat_line_with_rate("Expanded", s.expanded, elapsed_secs);
    stat_line_with_rate("Generated", s.generated, elapsed_secs);
    stat_line("Duplicate pops", s.duplicates);
    stat_line("Peak frontier", s.max_frontier);
    stat_line(
        "Solution depth",
        solution.map_or_else(|| "-".to_string(), |sol| sol.depth().to_string()),
    );
    if let Some((allocated, resident)) = memory {
        stat_line("Memory usage (MiB)", format!("{allocated:.2}"));
        stat_line("Resident memory (MiB)", format!("{resident:.2}"));
    }
    stat_line("CPU time (s)", format!("{elapsed_secs:.3}"));
    println!("=====================================================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use eight_puzzle::puzzle::board::START;
    use termcolor::Buffer;

    const START_TRACE: &str = "\
Solution found:
Start:
+---+---+---+
| 1 | 2 | 3 |
+---+---+---+
|   | 4 | 6 |
+---+---+---+
| 7 | 5 | 8 |
+---+---+---+
Move: R
+---+---+---+
| 1 | 2 | 3 |
+---+---+---+
| 4 |   | 6 |
+---+---+---+
| 7 | 5 | 8 |
+---+---+---+
Move: D
+---+---+---+
| 1 | 2 | 3 |
+---+---+---+
| 4 | 5 | 6 |
+---+---+---+
| 7 |   | 8 |
+---+---+---+
Move: R
+---+---+---+
| 1 | 2 | 3 |
+---+---+---+
| 4 | 5 | 6 |
+---+---+---+
| 7 | 8 |   |
+---+---+---+
";

    fn report(mut buffer: Buffer, solution: Option<&Solution>) -> String {
        write_report(&mut buffer, solution).unwrap();
        String::from_utf8(buffer.into_inner()).unwrap()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_no_arguments() {
        let cli = Cli::try_parse_from(["eight-puzzle"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.common, CommonOptions::default());
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from(["eight-puzzle", "--debug", "-s"]).unwrap();
        assert!(cli.common.debug);
        assert!(cli.common.stats);
    }

    #[test]
    fn test_parse_no_color() {
        let cli = Cli::try_parse_from(["eight-puzzle", "--no-color"]).unwrap();
        assert!(cli.common.no_color);
        assert!(!cli.common.debug);
    }

    #[test]
    fn test_color_choice() {
        assert_eq!(color_choice(false, true), ColorChoice::Auto);
        assert_eq!(color_choice(true, true), ColorChoice::Never);
        assert_eq!(color_choice(false, false), ColorChoice::Never);
        assert_eq!(color_choice(true, false), ColorChoice::Never);
    }

    #[test]
    fn test_plain_report_matches_reference_trace() {
        let solution = AStar::new(PuzzleConfig::default()).solve().unwrap();
        let text = report(Buffer::no_color(), Some(&solution));
        assert_eq!(text, START_TRACE);
        assert_eq!(text, format!("Solution found:\n{solution}"));
    }

    #[test]
    fn test_plain_board_matches_display() {
        let mut buffer = Buffer::no_color();
        write_board(&mut buffer, &START).unwrap();
        assert_eq!(buffer.as_slice(), START.to_string().as_bytes());
    }

    #[test]
    fn test_plain_report_without_solution() {
        assert_eq!(report(Buffer::no_color(), None), "No solution exists.\n");
    }

    #[test]
    fn test_colored_report() {
        let solution = AStar::new(PuzzleConfig::default()).solve().unwrap();
        let text = report(Buffer::ansi(), Some(&solution));
        assert!(text.contains("\x1b[32mSolution found:"));
        assert!(text.contains("\x1b[33m1"));
        assert!(text.contains("\x1b[36m "));
        assert!(text.contains("Move: R\n"));

        let text = report(Buffer::ansi(), None);
        assert!(text.contains("\x1b[31mNo solution exists."));
    }

    #[test]
    fn test_parse_completions() {
        let cli = Cli::try_parse_from(["eight-puzzle", "completions", "bash"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Completions {
                shell: clap_complete::Shell::Bash
            })
        ));
    }

    #[test]
    fn test_rejects_positional_board() {
        assert!(Cli::try_parse_from(["eight-puzzle", "1", "2", "3"]).is_err());
    }

    #[test]
    fn test_solve_default_instance() {
        let (sol, _, stats) = solve(&PuzzleConfig::default(), &CommonOptions::default());
        assert_eq!(sol.map(|s| s.depth()), Some(3));
        assert!(stats.expanded >= 3);
    }

    #[test]
    fn test_solve_reports_no_solution() {
        let swapped = Board::new([1, 2, 3, 4, 5, 6, 8, 7, 0]).unwrap();
        let (sol, _, _) = solve(&PuzzleConfig::new(swapped), &CommonOptions::default());
        assert!(sol.is_none());
    }
}
