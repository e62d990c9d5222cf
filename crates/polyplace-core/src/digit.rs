//! Puzzle digit representation.

use std::{
    fmt::{self, Display},
    num::NonZeroU8,
};

/// A puzzle digit in the range 1 to [`Digit::MAX_VALUE`].
///
/// How many digits a puzzle actually uses depends on its side length: a grid
/// with box size N plays digits 1 through N². This type only guarantees the
/// global bound; range checks against a concrete side length happen where
/// digits enter the system (parsing and [`Digit::all`]).
///
/// Backed by a [`NonZeroU8`], so `Option<Digit>` is a single byte.
///
/// # Examples
///
/// ```
/// use polyplace_core::Digit;
///
/// let digit = Digit::new(5);
/// assert_eq!(digit.value(), 5);
///
/// // Iterate over the digits of a 9x9 puzzle
/// for digit in Digit::all(9) {
///     assert!((1..=9).contains(&digit.value()));
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digit(NonZeroU8);

impl Digit {
    /// The largest digit value any supported geometry can use.
    ///
    /// Box sizes are capped at 8, so side lengths (and with them digit values)
    /// never exceed 64.
    pub const MAX_VALUE: u8 = 64;

    /// Creates a digit from a numeric value.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1 to [`Digit::MAX_VALUE`].
    ///
    /// # Examples
    ///
    /// ```
    /// use polyplace_core::Digit;
    ///
    /// let digit = Digit::new(5);
    /// assert_eq!(digit.value(), 5);
    /// ```
    ///
    /// ```should_panic
    /// use polyplace_core::Digit;
    ///
    /// // This will panic
    /// let _ = Digit::new(0);
    /// ```
    #[must_use]
    pub fn new(value: u8) -> Self {
        assert!(
            (1..=Self::MAX_VALUE).contains(&value),
            "invalid digit value: {value}"
        );
        match NonZeroU8::new(value) {
            Some(inner) => Self(inner),
            None => unreachable!(),
        }
    }

    /// Returns the digits 1 through `side` in ascending order.
    ///
    /// # Panics
    ///
    /// Panics if `side` exceeds [`Digit::MAX_VALUE`].
    ///
    /// # Examples
    ///
    /// ```
    /// use polyplace_core::Digit;
    ///
    /// let digits: Vec<u8> = Digit::all(4).map(Digit::value).collect();
    /// assert_eq!(digits, [1, 2, 3, 4]);
    /// ```
    pub fn all(side: u8) -> impl Iterator<Item = Self> {
        assert!(side <= Self::MAX_VALUE, "invalid side length: {side}");
        (1..=side).map(Self::new)
    }

    /// Returns the numeric value of this digit.
    ///
    /// # Examples
    ///
    /// ```
    /// use polyplace_core::Digit;
    ///
    /// assert_eq!(Digit::new(9).value(), 9);
    /// ```
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0.get()
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        // new and value() round-trip for boundary values
        assert_eq!(Digit::new(1).value(), 1);
        assert_eq!(Digit::new(Digit::MAX_VALUE).value(), Digit::MAX_VALUE);

        // Digits order by numeric value
        assert!(Digit::new(3) < Digit::new(5));

        // Display trait
        assert_eq!(format!("{}", Digit::new(1)), "1");
        assert_eq!(format!("{}", Digit::new(64)), "64");

        // From<Digit> for u8
        let value: u8 = Digit::new(5).into();
        assert_eq!(value, 5);
    }

    #[test]
    fn test_all_is_ascending_and_complete() {
        let digits: Vec<u8> = Digit::all(9).map(Digit::value).collect();
        assert_eq!(digits, (1..=9).collect::<Vec<_>>());

        assert_eq!(Digit::all(0).count(), 0);
        assert_eq!(Digit::all(64).count(), 64);
    }

    #[test]
    fn test_option_is_niche_packed() {
        assert_eq!(size_of::<Option<Digit>>(), size_of::<Digit>());
    }

    #[test]
    #[should_panic(expected = "invalid digit value: 0")]
    fn test_new_zero_panics() {
        let _ = Digit::new(0);
    }

    #[test]
    #[should_panic(expected = "invalid digit value: 65")]
    fn test_new_too_large_panics() {
        let _ = Digit::new(65);
    }

    #[test]
    #[should_panic(expected = "invalid side length: 65")]
    fn test_all_rejects_oversized_side() {
        let _ = Digit::all(65);
    }
}
