//! Command-line puzzle solver.
//!
//! Reads a puzzle from a file or standard input, solves it, and prints the
//! solved grid. Search decisions are traced at debug level; set `RUST_LOG`
//! to see them.
//!
//! # Usage
//!
//! ```sh
//! polyplace puzzle.txt
//! cat puzzle.txt | polyplace
//! polyplace --box-size 4 hexadoku.txt
//! polyplace --stats puzzle.txt
//! ```

use std::{
    fs,
    io::{self, Read as _},
    path::PathBuf,
    process,
};

use clap::Parser;
use derive_more::{Display, Error, From};
use polyplace_core::{Digit, Geometry, Grid, InvalidBoxSize, ParseError};
use polyplace_solver::{SearchObserver, SolveStats, Solver, is_correct};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Path to the puzzle file, or `-` for standard input.
    #[arg(value_name = "PUZZLE")]
    puzzle: Option<PathBuf>,

    /// Box size N of the puzzle (the grid is N²×N²).
    #[arg(short = 'n', long, value_name = "N", default_value_t = 3)]
    box_size: u8,

    /// Print technique and search statistics to standard error.
    #[arg(long)]
    stats: bool,
}

#[derive(Debug, Display, Error, From)]
enum CliError {
    #[display("cannot read puzzle: {_0}")]
    Io(#[from] io::Error),
    #[display("{_0}")]
    BoxSize(#[from] InvalidBoxSize),
    #[display("{_0}")]
    Parse(#[from] ParseError),
}

/// Logs every search decision at debug level.
struct SearchLog;

impl SearchObserver for SearchLog {
    fn assumed(&mut self, index: usize, digit: Digit) {
        log::debug!("assuming {digit} at cell {index}");
    }

    fn retracted(&mut self, index: usize, digit: Digit) {
        log::debug!("retracting {digit} from cell {index}");
    }
}

fn load(args: &Args) -> Result<Grid, CliError> {
    let input = match &args.puzzle {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)?,
        _ => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    let geometry = Geometry::new(args.box_size)?;
    Ok(Grid::parse(geometry, &input)?)
}

fn print_stats(solver: &Solver, stats: &SolveStats) {
    for technique in solver.techniques() {
        eprintln!("{}: {}", technique.name(), stats.count(technique.name()));
    }
    eprintln!("assumptions: {}", stats.assumptions());
    eprintln!("rollbacks: {}", stats.rollbacks());
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let mut grid = match load(&args) {
        Ok(grid) => grid,
        Err(error) => {
            eprintln!("polyplace: {error}");
            process::exit(2);
        }
    };

    let solver = Solver::new();
    let mut stats = SolveStats::default();
    let solved = solver.solve_with_observer(&mut grid, &mut stats, &mut SearchLog);

    if args.stats {
        print_stats(&solver, &stats);
    }

    if !solved {
        eprintln!("no solution found");
        process::exit(1);
    }

    assert!(is_correct(&grid), "solver produced an invalid grid");
    println!("{grid}");
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_args_are_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_cli_error_display() {
        let error = CliError::from(InvalidBoxSize { box_size: 12 });
        assert_eq!(error.to_string(), "box size must be between 1 and 8, got 12");

        let error = CliError::from(ParseError::TooFewCells {
            expected: 81,
            found: 0,
        });
        assert_eq!(error.to_string(), "expected 81 cells, found 0");
    }
}
