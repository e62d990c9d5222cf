//! Puzzle grid state.

use crate::{cell::Cell, digit::Digit, digit_set::DigitSet, geometry::Geometry};

/// A puzzle grid: one [`Cell`] per position plus the shared [`Geometry`].
///
/// Placing a digit immediately removes it from the candidate sets of every
/// peer cell, so the grid's candidate data is always consistent with its
/// placements. Deduction and search build on that invariant.
///
/// # Examples
///
/// ```
/// use polyplace_core::{Digit, Geometry, Grid};
///
/// let mut grid = Grid::blank(Geometry::standard());
/// grid.place(0, Digit::new(5));
///
/// assert_eq!(grid.cell(0).digit(), Some(Digit::new(5)));
/// // Cell 1 shares a row with cell 0, so 5 is no longer a candidate there
/// assert!(!grid.cell(1).candidates().unwrap().contains(Digit::new(5)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    geometry: Geometry,
    cells: Box<[Cell]>,
}

/// A saved copy of a grid's cells, for rolling back a failed assumption.
#[derive(Debug, Clone)]
pub struct Snapshot {
    cells: Box<[Cell]>,
}

impl Grid {
    /// Creates a grid with every cell empty and every digit a candidate.
    #[must_use]
    pub fn blank(geometry: Geometry) -> Self {
        let cells = vec![Cell::blank(geometry.side()); geometry.cell_count()];
        Self {
            geometry,
            cells: cells.into_boxed_slice(),
        }
    }

    /// The geometry this grid was built with.
    #[must_use]
    #[inline]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// The side length N².
    #[must_use]
    #[inline]
    pub fn side(&self) -> u8 {
        self.geometry.side()
    }

    /// The cell at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[must_use]
    #[inline]
    pub fn cell(&self, index: usize) -> Cell {
        self.cells[index]
    }

    /// All cells in index order.
    #[must_use]
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Fills the cell at `index` with `digit` and removes `digit` from the
    /// candidate sets of every other cell sharing a house with it.
    ///
    /// # Panics
    ///
    /// Panics if the cell is already filled or `digit` is not one of its
    /// candidates.
    pub fn place(&mut self, index: usize, digit: Digit) {
        self.cells[index].assign(digit);
        for house in self.geometry.houses_of(index) {
            for &peer in self.geometry.house_cells(house) {
                if peer != index {
                    self.cells[peer].eliminate(digit);
                }
            }
        }
    }

    /// Removes `digit` from the candidates of the cell at `index`.
    ///
    /// No-op on a filled cell. Removing the last candidate leaves the cell
    /// contradictory.
    pub fn remove_candidate(&mut self, index: usize, digit: Digit) {
        self.cells[index].eliminate(digit);
    }

    /// Applies a clue digit to the cell at `index`.
    ///
    /// A clue that is still a live candidate is placed normally. A clue ruled
    /// out by an earlier clue in a shared house empties the cell's candidate
    /// set instead, so the grid still loads but reports a contradiction when
    /// solved.
    pub fn set_given(&mut self, index: usize, digit: Digit) {
        if let Cell::Empty { candidates } = self.cells[index] {
            if candidates.contains(digit) {
                self.place(index, digit);
            } else {
                self.cells[index] = Cell::Empty {
                    candidates: DigitSet::EMPTY,
                };
            }
        }
    }

    /// The lowest-indexed empty cell, if any.
    #[must_use]
    pub fn first_empty(&self) -> Option<usize> {
        self.cells.iter().position(|cell| cell.is_empty())
    }

    /// Returns `true` if every cell is filled.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_filled())
    }

    /// Returns `true` if any empty cell has run out of candidates.
    #[must_use]
    pub fn has_contradiction(&self) -> bool {
        self.cells.iter().any(|cell| cell.is_contradictory())
    }

    /// Saves the current cells for a later [`restore`](Self::restore).
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            cells: self.cells.clone(),
        }
    }

    /// Restores the cells saved in `snapshot`.
    ///
    /// # Panics
    ///
    /// Panics if the snapshot was taken from a grid of a different size.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        assert_eq!(
            self.cells.len(),
            snapshot.cells.len(),
            "snapshot does not match this grid"
        );
        self.cells.copy_from_slice(&snapshot.cells);
    }
}
