//! Solution checking.

use derive_more::{Display, Error};

use polyplace_core::{Digit, DigitSet, Grid, House};

/// A way a grid fails to be a valid solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SolutionError {
    /// A cell that was never filled.
    #[display("cell {index} is not filled")]
    UnfilledCell {
        /// Index of the empty cell.
        index: usize,
    },
    /// A digit appearing more than once in a house.
    #[display("{digit} appears more than once in {house}")]
    DuplicateDigit {
        /// The house containing the repeat.
        house: House,
        /// The repeated digit.
        digit: Digit,
    },
}

/// Checks that the grid is completely filled and that no row, column, or box
/// contains a digit twice.
///
/// The check is independent of how the grid was filled, so it also catches
/// solver bugs that candidate bookkeeping alone would hide.
///
/// # Errors
///
/// Returns the first [`SolutionError`] found, scanning cells in index order
/// and then houses in row, column, box order.
pub fn verify(grid: &Grid) -> Result<(), SolutionError> {
    for (index, cell) in grid.cells().iter().enumerate() {
        if cell.is_empty() {
            return Err(SolutionError::UnfilledCell { index });
        }
    }
    for house in House::all(grid.side()) {
        let mut seen = DigitSet::new();
        for &index in grid.geometry().house_cells(house) {
            if let Some(digit) = grid.cell(index).digit()
                && !seen.insert(digit)
            {
                return Err(SolutionError::DuplicateDigit { house, digit });
            }
        }
    }
    Ok(())
}

/// Returns `true` if the grid is a complete, rule-abiding solution.
///
/// # Examples
///
/// ```
/// use polyplace_core::Grid;
/// use polyplace_solver::is_correct;
///
/// let grid: Grid =
///     "534678912672195348198342567859761423426853791713924856961537284287419635345286179"
///         .parse()?;
/// assert!(is_correct(&grid));
/// # Ok::<(), polyplace_core::ParseError>(())
/// ```
#[must_use]
pub fn is_correct(grid: &Grid) -> bool {
    verify(grid).is_ok()
}
