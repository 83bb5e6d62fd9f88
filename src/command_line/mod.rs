//! Command-line interface: argument parsing and reporting for the `eight-puzzle` binary.

/// Argument definitions and the solve/report pipeline.
pub(crate) mod cli;
