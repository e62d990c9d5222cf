//! Cell state tracking.

use derive_more::IsVariant;

use crate::{digit::Digit, digit_set::DigitSet};

/// The state of a single grid cell.
///
/// A cell is either `Empty`, carrying the set of digits it may still take, or
/// `Filled` with exactly one digit. Candidate sets only ever shrink; once a
/// digit is eliminated it can only come back through a whole-grid snapshot
/// restore during backtracking, never by re-insertion into a live cell.
///
/// An `Empty` cell whose candidate set has run dry is *contradictory*: the
/// surrounding assignments cannot be extended to a solution, and whoever is
/// exploring the current branch has to back out.
///
/// # Examples
///
/// ```
/// use polyplace_core::{Cell, Digit};
///
/// let mut cell = Cell::blank(9);
/// assert!(cell.is_empty());
///
/// cell.eliminate(Digit::new(4));
/// assert_eq!(cell.candidates().map(|set| set.len()), Some(8));
///
/// cell.assign(Digit::new(7));
/// assert!(cell.is_filled());
/// assert_eq!(cell.digit(), Some(Digit::new(7)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum Cell {
    /// An undetermined cell.
    Empty {
        /// The digits still possible for this cell.
        candidates: DigitSet,
    },
    /// A determined cell.
    Filled {
        /// The assigned digit.
        digit: Digit,
    },
}

impl Cell {
    /// Creates an empty cell with every digit up to `side` as a candidate.
    ///
    /// # Panics
    ///
    /// Panics if `side` is zero or exceeds [`Digit::MAX_VALUE`].
    #[must_use]
    pub fn blank(side: u8) -> Self {
        Self::Empty {
            candidates: DigitSet::full(side),
        }
    }

    /// Fills the cell with `digit`.
    ///
    /// # Panics
    ///
    /// Panics if the cell is already filled or `digit` is not a live
    /// candidate. Callers decide what to assign by reading the candidate set
    /// first, so reaching this panic means the caller skipped that protocol.
    pub fn assign(&mut self, digit: Digit) {
        assert!(
            matches!(self, Self::Empty { candidates } if candidates.contains(digit)),
            "assigned digit {digit} is not a live candidate of {self:?}"
        );
        *self = Self::Filled { digit };
    }

    /// Removes `digit` from the candidate set.
    ///
    /// Filled cells and already-absent digits are left untouched. Eliminating
    /// the last candidate is allowed and leaves the cell contradictory.
    pub fn eliminate(&mut self, digit: Digit) {
        if let Self::Empty { candidates } = self {
            candidates.remove(digit);
        }
    }

    /// Returns the assigned digit, or `None` while the cell is empty.
    #[must_use]
    pub const fn digit(self) -> Option<Digit> {
        match self {
            Self::Filled { digit } => Some(digit),
            Self::Empty { .. } => None,
        }
    }

    /// Returns the live candidate set, or `None` once the cell is filled.
    #[must_use]
    pub const fn candidates(self) -> Option<DigitSet> {
        match self {
            Self::Empty { candidates } => Some(candidates),
            Self::Filled { .. } => None,
        }
    }

    /// Returns `true` if the cell is empty with exactly one candidate left.
    #[must_use]
    pub fn has_single_candidate(self) -> bool {
        matches!(self, Self::Empty { candidates } if candidates.len() == 1)
    }

    /// Returns `true` if the cell is empty with no candidates left.
    #[must_use]
    pub fn is_contradictory(self) -> bool {
        matches!(self, Self::Empty { candidates } if candidates.is_empty())
    }
}
