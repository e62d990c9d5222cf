//! Test utilities for technique implementations.

use polyplace_core::{Digit, DigitSet, Grid};

use crate::technique::Technique;

/// A test harness for verifying technique implementations.
///
/// `TechniqueTester` tracks the initial and current state of a grid,
/// allowing tests to apply techniques and assert that they produce the
/// expected changes.
///
/// # Method Chaining
///
/// All methods return `self`, enabling fluent method chaining for readable
/// tests.
///
/// # Panics
///
/// All assertion methods panic with detailed messages on failure, using
/// `#[track_caller]` to report the correct source location.
#[derive(Debug)]
pub struct TechniqueTester {
    initial: Grid,
    current: Grid,
}

impl TechniqueTester {
    /// Creates a new tester from an initial grid state.
    pub fn new(initial: Grid) -> Self {
        let current = initial.clone();
        Self { initial, current }
    }

    /// Creates a new tester from a 9×9 grid literal.
    ///
    /// Digits 1-9 are clues; `.`, `_`, or `0` mark empty cells; whitespace
    /// is ignored.
    ///
    /// # Panics
    ///
    /// Panics if the string cannot be parsed as a valid grid.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let tester = TechniqueTester::from_str(
    ///     "
    ///     53_ _7_ ___
    ///     6__ 195 ___
    ///     _98 ___ _6_
    ///     8__ _6_ __3
    ///     4__ 8_3 __1
    ///     7__ _2_ __6
    ///     _6_ ___ 28_
    ///     ___ 419 __5
    ///     ___ _8_ _79
    /// ",
    /// );
    /// ```
    #[track_caller]
    pub fn from_str(s: &str) -> Self {
        Self::new(s.parse().unwrap())
    }

    /// Applies the technique once and returns self for chaining.
    #[track_caller]
    pub fn apply_once<T>(mut self, technique: &T) -> Self
    where
        T: Technique,
    {
        technique.apply(&mut self.current);
        self
    }

    /// Applies the technique repeatedly until it makes no more progress.
    #[track_caller]
    pub fn apply_until_stuck<T>(mut self, technique: &T) -> Self
    where
        T: Technique,
    {
        while technique.apply(&mut self.current) {}
        self
    }

    fn candidates_of(grid: &Grid, index: usize) -> DigitSet {
        grid.cell(index).candidates().unwrap_or(DigitSet::EMPTY)
    }

    /// Asserts that a cell went from empty to filled with the given digit.
    ///
    /// # Panics
    ///
    /// Panics if the cell was not placed as expected.
    #[track_caller]
    pub fn assert_placed(self, index: usize, digit: Digit) -> Self {
        let initial = self.initial.cell(index);
        let current = self.current.cell(index);

        assert!(
            initial.is_empty(),
            "Expected cell {index} to start empty, but it was {initial:?}"
        );
        assert_eq!(
            current.digit(),
            Some(digit),
            "Expected cell {index} to be filled with {digit}, but it is {current:?}"
        );

        self
    }

    /// Asserts that all specified candidates were removed from a cell.
    ///
    /// Other candidates may also have been removed; this method only checks
    /// that the specified ones are gone.
    ///
    /// # Panics
    ///
    /// Panics if any of the specified digits are still present in the cell's
    /// candidates.
    #[track_caller]
    pub fn assert_removed_includes<C>(self, index: usize, digits: C) -> Self
    where
        C: IntoIterator<Item = Digit>,
    {
        let digits: DigitSet = digits.into_iter().collect();
        let initial = Self::candidates_of(&self.initial, index);
        let current = Self::candidates_of(&self.current, index);
        assert_eq!(
            initial & digits,
            digits,
            "Expected initial candidates at cell {index} to include {digits:?}, but they are {initial:?}"
        );
        assert!(
            (current & digits).is_empty(),
            "Expected all of {digits:?} to be removed from cell {index}, but candidates are still {current:?}"
        );
        self
    }

    /// Asserts that exactly the specified candidates were removed from a cell.
    ///
    /// # Panics
    ///
    /// Panics if the removed candidates don't exactly match the specified set.
    #[track_caller]
    pub fn assert_removed_exact<C>(self, index: usize, digits: C) -> Self
    where
        C: IntoIterator<Item = Digit>,
    {
        let digits: DigitSet = digits.into_iter().collect();
        let initial = Self::candidates_of(&self.initial, index);
        let current = Self::candidates_of(&self.current, index);
        let removed = initial.difference(current);
        assert_eq!(
            removed, digits,
            "Expected exactly {digits:?} to be removed from cell {index}, but removed candidates are {removed:?} (initial: {initial:?}, current: {current:?})"
        );
        self
    }

    /// Asserts that a cell has not changed.
    ///
    /// # Panics
    ///
    /// Panics if the cell differs from the initial state.
    #[track_caller]
    pub fn assert_no_change(self, index: usize) -> Self {
        let initial = self.initial.cell(index);
        let current = self.current.cell(index);
        assert_eq!(
            initial, current,
            "Expected no change at cell {index}, but it changed from {initial:?} to {current:?}"
        );
        self
    }
}

#[cfg(test)]
mod tests {
    use polyplace_core::Geometry;

    use super::*;
    use crate::technique::BoxedTechnique;

    // Mock technique that never changes the grid
    #[derive(Debug)]
    struct NoOp;

    impl Technique for NoOp {
        fn name(&self) -> &'static str {
            "no-op"
        }

        fn clone_box(&self) -> BoxedTechnique {
            Box::new(NoOp)
        }

        fn apply(&self, _grid: &mut Grid) -> bool {
            false
        }
    }

    // Mock technique that places 1 at cell 0 if it's still empty
    #[derive(Debug)]
    struct PlaceOneAtZero;

    impl Technique for PlaceOneAtZero {
        fn name(&self) -> &'static str {
            "place-1-at-0"
        }

        fn clone_box(&self) -> BoxedTechnique {
            Box::new(PlaceOneAtZero)
        }

        fn apply(&self, grid: &mut Grid) -> bool {
            if grid.cell(0).is_empty() {
                grid.place(0, Digit::new(1));
                true
            } else {
                false
            }
        }
    }

    fn blank_tester() -> TechniqueTester {
        TechniqueTester::new(Grid::blank(Geometry::standard()))
    }

    #[test]
    fn test_from_str_accepts_grid_literal() {
        TechniqueTester::from_str(
            "
            1__ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
        ",
        )
        .assert_no_change(0);
    }

    #[test]
    fn test_assert_placed() {
        blank_tester()
            .apply_once(&PlaceOneAtZero)
            .assert_placed(0, Digit::new(1));
    }

    #[test]
    #[should_panic(expected = "Expected cell 0 to be filled")]
    fn test_assert_placed_fails_when_not_placed() {
        blank_tester()
            .apply_once(&NoOp)
            .assert_placed(0, Digit::new(1));
    }

    #[test]
    fn test_assert_removed_after_placement() {
        // Placing 1 at cell 0 strips 1 from its row, column, and box peers
        blank_tester()
            .apply_once(&PlaceOneAtZero)
            .assert_removed_exact(1, [Digit::new(1)])
            .assert_removed_includes(9, [Digit::new(1)])
            .assert_no_change(40);
    }

    #[test]
    #[should_panic(expected = "Expected no change at cell 0")]
    fn test_assert_no_change_fails_when_changed() {
        blank_tester()
            .apply_once(&PlaceOneAtZero)
            .assert_no_change(0);
    }

    #[test]
    fn test_apply_until_stuck_stops_at_fixpoint() {
        blank_tester()
            .apply_until_stuck(&PlaceOneAtZero)
            .assert_placed(0, Digit::new(1))
            .assert_no_change(80);
    }

    #[test]
    fn test_method_chaining() {
        blank_tester()
            .apply_once(&PlaceOneAtZero)
            .assert_placed(0, Digit::new(1))
            .apply_once(&NoOp)
            .assert_no_change(40);
    }
}
