//! Core data structures for generalized number-place puzzles.
//!
//! A puzzle is an N²×N² grid of N×N boxes, with the box size N chosen at
//! runtime; box size 3 is the classic 9×9 game. Every cell tracks either its
//! placed digit or the set of digits it could still hold, and placements keep
//! that candidate data consistent across rows, columns, and boxes.
//!
//! # Overview
//!
//! 1. **Value types** - Digits and per-cell state
//!    - [`digit`]: Type-safe puzzle digits from 1 up to the side length
//!    - [`digit_set`]: Bit-set of candidate digits
//!    - [`cell`]: A cell, either filled or tracking candidates
//!
//! 2. **Grid structure** - Shape and state
//!    - [`geometry`]: Box size, side length, and house membership tables
//!    - [`grid`]: Cell storage with candidate propagation and snapshots
//!    - [`parse`]: Reading puzzles from text
//!
//! # Examples
//!
//! ```
//! use polyplace_core::{Digit, Geometry, Grid};
//!
//! let mut grid = Grid::blank(Geometry::standard());
//!
//! // Place a digit in the center cell
//! grid.place(40, Digit::new(5));
//!
//! // 5 is no longer a candidate in the center row, column, or box
//! let candidates = grid.cell(41).candidates().unwrap();
//! assert!(!candidates.contains(Digit::new(5)));
//! ```

pub mod cell;
pub mod digit;
pub mod digit_set;
pub mod geometry;
pub mod grid;
pub mod parse;

mod render;

// Re-export commonly used types
pub use self::{
    cell::Cell,
    digit::Digit,
    digit_set::DigitSet,
    geometry::{Geometry, House, InvalidBoxSize, MAX_BOX_SIZE},
    grid::{Grid, Snapshot},
    parse::ParseError,
};
