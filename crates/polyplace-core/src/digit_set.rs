//! Candidate digit sets.

use std::{
    fmt,
    iter::FusedIterator,
    ops::{BitAnd, BitOr},
};

use crate::digit::Digit;

/// A set of digits, used to track the remaining candidates of a cell.
///
/// The implementation uses a 64-bit integer where bit `d - 1` represents digit
/// `d`, so sets are `Copy` and every operation is a handful of bit
/// instructions. [`Digit::MAX_VALUE`] is 64 precisely so that any supported
/// geometry's candidates fit in one word.
///
/// # Examples
///
/// ```
/// use polyplace_core::{Digit, DigitSet};
///
/// let mut candidates = DigitSet::full(9);
/// candidates.remove(Digit::new(5));
/// candidates.remove(Digit::new(7));
///
/// assert_eq!(candidates.len(), 7);
/// assert!(!candidates.contains(Digit::new(5)));
/// assert!(candidates.contains(Digit::new(1)));
/// ```
///
/// # Set Operations
///
/// ```
/// use polyplace_core::{Digit, DigitSet};
///
/// let a: DigitSet = [1, 2, 3].map(Digit::new).into_iter().collect();
/// let b: DigitSet = [2, 3, 4].map(Digit::new).into_iter().collect();
///
/// assert_eq!((a | b).len(), 4);
/// assert_eq!((a & b).len(), 2);
/// assert_eq!(a.difference(b).len(), 1);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DigitSet {
    bits: u64,
}

impl DigitSet {
    /// The set containing no digits.
    pub const EMPTY: Self = Self { bits: 0 };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates the set of every digit from 1 to `side`.
    ///
    /// # Panics
    ///
    /// Panics if `side` is zero or exceeds [`Digit::MAX_VALUE`].
    ///
    /// # Examples
    ///
    /// ```
    /// use polyplace_core::DigitSet;
    ///
    /// assert_eq!(DigitSet::full(9).len(), 9);
    /// assert_eq!(DigitSet::full(64).len(), 64);
    /// ```
    #[must_use]
    pub fn full(side: u8) -> Self {
        assert!(
            (1..=Digit::MAX_VALUE).contains(&side),
            "invalid side length: {side}"
        );
        Self {
            bits: u64::MAX >> (64 - u32::from(side)),
        }
    }

    fn bit(digit: Digit) -> u64 {
        1 << (digit.value() - 1)
    }

    /// Adds a digit to the set. Returns `true` if it was newly inserted.
    pub fn insert(&mut self, digit: Digit) -> bool {
        let inserted = !self.contains(digit);
        self.bits |= Self::bit(digit);
        inserted
    }

    /// Removes a digit from the set. Returns `true` if it was present.
    pub fn remove(&mut self, digit: Digit) -> bool {
        let removed = self.contains(digit);
        self.bits &= !Self::bit(digit);
        removed
    }

    /// Returns `true` if the set contains `digit`.
    #[must_use]
    pub fn contains(self, digit: Digit) -> bool {
        self.bits & Self::bit(digit) != 0
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set contains no digits.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns the single digit in the set, or `None` unless exactly one
    /// digit is present.
    ///
    /// # Examples
    ///
    /// ```
    /// use polyplace_core::{Digit, DigitSet};
    ///
    /// let mut set = DigitSet::new();
    /// assert_eq!(set.as_single(), None);
    ///
    /// set.insert(Digit::new(7));
    /// assert_eq!(set.as_single(), Some(Digit::new(7)));
    ///
    /// set.insert(Digit::new(2));
    /// assert_eq!(set.as_single(), None);
    /// ```
    #[must_use]
    pub fn as_single(self) -> Option<Digit> {
        if self.len() == 1 {
            self.iter().next()
        } else {
            None
        }
    }

    /// Returns the digits present in `self` but not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self {
            bits: self.bits & !other.bits,
        }
    }

    /// Returns `true` if every digit of `self` is also in `other`.
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.bits & !other.bits == 0
    }

    /// Iterates over the digits in ascending order.
    #[must_use]
    pub const fn iter(self) -> DigitSetIter {
        DigitSetIter { bits: self.bits }
    }
}

impl fmt::Debug for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(Digit::value)).finish()
    }
}

impl BitOr for DigitSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self {
            bits: self.bits | rhs.bits,
        }
    }
}

impl BitAnd for DigitSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self {
            bits: self.bits & rhs.bits,
        }
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        let mut set = Self::new();
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = DigitSetIter;

    fn into_iter(self) -> DigitSetIter {
        self.iter()
    }
}

/// Ascending iterator over the digits of a [`DigitSet`].
#[derive(Debug, Clone)]
pub struct DigitSetIter {
    bits: u64,
}

impl Iterator for DigitSetIter {
    type Item = Digit;

    #[expect(clippy::cast_possible_truncation)]
    fn next(&mut self) -> Option<Digit> {
        if self.bits == 0 {
            return None;
        }
        let lowest = self.bits.trailing_zeros() as u8;
        self.bits &= self.bits - 1;
        Some(Digit::new(lowest + 1))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for DigitSetIter {}

impl FusedIterator for DigitSetIter {}
