//! Deduction techniques.
//!
//! Each technique implements the [`Technique`] trait: one call sweeps the
//! whole grid and applies every instance of the deduction it can find.

use std::fmt::Debug;

use polyplace_core::Grid;

pub use self::{hidden_single::HiddenSingle, naked_single::NakedSingle};

mod hidden_single;
mod naked_single;

/// Returns the fundamental techniques.
///
/// These are the two basic single-cell deductions:
/// - **Naked Single**: a cell with only one remaining candidate
/// - **Hidden Single**: a digit with only one remaining spot in a house
///
/// Applied to a fixpoint they solve easy puzzles outright and shrink the
/// search space of hard ones. They are ordered from easiest to hardest.
///
/// # Examples
///
/// ```
/// use polyplace_solver::technique;
///
/// let techniques = technique::fundamental_techniques();
/// assert_eq!(techniques.len(), 2);
/// ```
#[must_use]
pub fn fundamental_techniques() -> Vec<BoxedTechnique> {
    vec![Box::new(NakedSingle::new()), Box::new(HiddenSingle::new())]
}

/// A deduction technique applied to a puzzle grid.
pub trait Technique: Debug {
    /// Returns the name of the technique.
    fn name(&self) -> &'static str;

    /// Returns a boxed clone of the technique.
    fn clone_box(&self) -> BoxedTechnique;

    /// Sweeps the grid once, applying every instance of the deduction.
    ///
    /// Digits placed early in the sweep feed later deductions in the same
    /// sweep. Returns `true` if any cell was filled.
    fn apply(&self, grid: &mut Grid) -> bool;
}

/// A boxed technique.
pub type BoxedTechnique = Box<dyn Technique>;

impl Clone for BoxedTechnique {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
