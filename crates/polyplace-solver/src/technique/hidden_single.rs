use polyplace_core::{Digit, Grid, House};

use super::{BoxedTechnique, Technique};

const NAME: &str = "Hidden Single";

/// A technique that finds digits with only one remaining spot in a house.
///
/// A "hidden single" occurs when a digit can go in exactly one cell of a row,
/// column, or box, even though that cell may still have several candidates.
/// Houses are swept in order (rows, columns, boxes), and spot counts are read
/// from the live grid, so a placement early in the sweep feeds later
/// deductions in the same sweep.
///
/// # Examples
///
/// ```
/// use polyplace_core::{Geometry, Grid};
/// use polyplace_solver::technique::{HiddenSingle, Technique};
///
/// let mut grid = Grid::blank(Geometry::standard());
/// let changed = HiddenSingle::new().apply(&mut grid);
/// assert!(!changed);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct HiddenSingle {}

impl HiddenSingle {
    /// Creates a new `HiddenSingle` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Technique for HiddenSingle {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, grid: &mut Grid) -> bool {
        let mut changed = false;
        for house in House::all(grid.side()) {
            for digit in Digit::all(grid.side()) {
                let mut spots = grid.geometry().house_cells(house).iter().copied().filter(
                    |&index| {
                        grid.cell(index)
                            .candidates()
                            .is_some_and(|candidates| candidates.contains(digit))
                    },
                );
                if let (Some(index), None) = (spots.next(), spots.next()) {
                    grid.place(index, digit);
                    changed = true;
                }
            }
        }
        changed
    }
}
