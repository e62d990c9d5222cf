use polyplace_core::{DigitSet, Grid};

use super::{BoxedTechnique, Technique};

const NAME: &str = "Naked Single";

/// A technique that fills cells with exactly one remaining candidate.
///
/// A "naked single" occurs when elimination has stripped a cell down to a
/// single candidate digit, leaving only one legal value for it. Cells are
/// swept in index order, and a placement early in the sweep can expose
/// further naked singles later in the same sweep.
///
/// # Examples
///
/// ```
/// use polyplace_core::{Geometry, Grid};
/// use polyplace_solver::technique::{NakedSingle, Technique};
///
/// let mut grid = Grid::blank(Geometry::standard());
/// let changed = NakedSingle::new().apply(&mut grid);
/// assert!(!changed);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedSingle {}

impl NakedSingle {
    /// Creates a new `NakedSingle` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Technique for NakedSingle {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, grid: &mut Grid) -> bool {
        let mut changed = false;
        for index in 0..grid.cells().len() {
            if let Some(digit) = grid.cell(index).candidates().and_then(DigitSet::as_single) {
                grid.place(index, digit);
                changed = true;
            }
        }
        changed
    }
}
