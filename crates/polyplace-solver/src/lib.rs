//! Solving for generalized number-place puzzles.
//!
//! The solver layers two mechanisms: [`technique`]-based deduction (naked and
//! hidden singles applied to a fixpoint) and backtracking search with
//! snapshot rollback for everything deduction cannot finish. [`verify`]
//! checks finished grids independently of either.
//!
//! # Examples
//!
//! ```
//! use polyplace_core::Grid;
//! use polyplace_solver::{Solver, is_correct};
//!
//! let grid: Grid =
//!     "8..........36......7..9.2...5...7.......457.....1...3...1....68..85...1..9....4.."
//!         .parse()?;
//!
//! let solution = Solver::new().solution(&grid).expect("solvable");
//! assert!(is_correct(&solution));
//! # Ok::<(), polyplace_core::ParseError>(())
//! ```

pub use self::{solver::*, verify::*};

pub mod technique;

mod solver;
mod verify;

#[cfg(test)]
mod testing;
