//! Grid shape and house membership.

use derive_more::{Display, Error};

/// The largest supported box size.
///
/// Candidate sets live in a `u64` ([`Digit::MAX_VALUE`](crate::Digit::MAX_VALUE)
/// bits), so the side length `n * n` tops out at 64.
pub const MAX_BOX_SIZE: u8 = 8;

/// A rejected box size (zero or larger than [`MAX_BOX_SIZE`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("box size must be between 1 and 8, got {box_size}")]
pub struct InvalidBoxSize {
    /// The rejected value.
    pub box_size: u8,
}

/// A house (row, column, or box) of a grid.
///
/// Every cell belongs to exactly one house of each kind, and the rule that a
/// house holds each digit at most once is the whole of the game's constraint
/// structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum House {
    /// A row identified by its index (top to bottom).
    #[display("row {row}")]
    Row {
        /// Row index (0 to side − 1).
        row: u8,
    },
    /// A column identified by its index (left to right).
    #[display("column {col}")]
    Column {
        /// Column index (0 to side − 1).
        col: u8,
    },
    /// An N×N box identified by its index (left to right, top to bottom).
    #[display("box {index}")]
    Box {
        /// Box index (0 to side − 1).
        index: u8,
    },
}

impl House {
    /// Returns every house of a grid with the given side length: all rows,
    /// then all columns, then all boxes, each in ascending index order.
    ///
    /// This is the sweep order deduction passes use, so it is part of the
    /// solver's deterministic behavior.
    ///
    /// # Examples
    ///
    /// ```
    /// use polyplace_core::House;
    ///
    /// let houses: Vec<House> = House::all(4).collect();
    /// assert_eq!(houses.len(), 12);
    /// assert_eq!(houses[0], House::Row { row: 0 });
    /// assert_eq!(houses[4], House::Column { col: 0 });
    /// assert_eq!(houses[8], House::Box { index: 0 });
    /// ```
    pub fn all(side: u8) -> impl Iterator<Item = Self> {
        let rows = (0..side).map(|row| Self::Row { row });
        let columns = (0..side).map(|col| Self::Column { col });
        let boxes = (0..side).map(|index| Self::Box { index });
        rows.chain(columns).chain(boxes)
    }
}

/// The shape of a puzzle: box size, side length, and the precomputed cell
/// membership of every house.
///
/// A geometry is built once per puzzle size and never mutated afterwards;
/// every other component reads it as shared constant data. Box size 3 is the
/// classic 9×9 game.
///
/// Cell indices are row-major: `row = index / side`, `col = index % side`,
/// and the box index is `(row / n) * n + col / n` for box size `n`.
///
/// # Examples
///
/// ```
/// use polyplace_core::{Geometry, House};
///
/// let geometry = Geometry::standard();
/// assert_eq!(geometry.side(), 9);
/// assert_eq!(geometry.cell_count(), 81);
///
/// // The top-left box covers the first three cells of the first three rows
/// assert_eq!(
///     geometry.house_cells(House::Box { index: 0 }),
///     [0, 1, 2, 9, 10, 11, 18, 19, 20],
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Geometry {
    box_size: u8,
    side: u8,
    rows: Box<[usize]>,
    columns: Box<[usize]>,
    boxes: Box<[usize]>,
}

impl Geometry {
    /// Creates the geometry for puzzles of the given box size.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidBoxSize`] if `box_size` is zero or exceeds
    /// [`MAX_BOX_SIZE`].
    ///
    /// # Examples
    ///
    /// ```
    /// use polyplace_core::Geometry;
    ///
    /// let geometry = Geometry::new(4)?;
    /// assert_eq!(geometry.side(), 16);
    /// assert!(Geometry::new(9).is_err());
    /// # Ok::<(), polyplace_core::InvalidBoxSize>(())
    /// ```
    pub fn new(box_size: u8) -> Result<Self, InvalidBoxSize> {
        if box_size == 0 || box_size > MAX_BOX_SIZE {
            return Err(InvalidBoxSize { box_size });
        }
        Ok(Self::build(box_size))
    }

    /// The classic 9×9 geometry (box size 3).
    #[must_use]
    pub fn standard() -> Self {
        Self::build(3)
    }

    fn build(box_size: u8) -> Self {
        let side = box_size * box_size;
        let n = usize::from(box_size);
        let s = usize::from(side);

        let mut rows = vec![0_usize; s * s];
        let mut columns = vec![0_usize; s * s];
        let mut boxes = vec![0_usize; s * s];
        for group in 0..s {
            let box_first = (group / n) * n * s + (group % n) * n;
            for member in 0..s {
                rows[group * s + member] = group * s + member;
                columns[group * s + member] = member * s + group;
                boxes[group * s + member] = box_first + (member / n) * s + member % n;
            }
        }

        Self {
            box_size,
            side,
            rows: rows.into_boxed_slice(),
            columns: columns.into_boxed_slice(),
            boxes: boxes.into_boxed_slice(),
        }
    }

    /// The box size N.
    #[must_use]
    #[inline]
    pub const fn box_size(&self) -> u8 {
        self.box_size
    }

    /// The side length N². Digits run from 1 to this value.
    #[must_use]
    #[inline]
    pub const fn side(&self) -> u8 {
        self.side
    }

    /// The number of cells, side².
    #[must_use]
    #[inline]
    pub fn cell_count(&self) -> usize {
        usize::from(self.side) * usize::from(self.side)
    }

    /// The cell indices of `house`, in house-local order (which is also
    /// ascending cell-index order for every house kind).
    ///
    /// # Panics
    ///
    /// Panics if the house index is out of range for this geometry.
    #[must_use]
    pub fn house_cells(&self, house: House) -> &[usize] {
        let s = usize::from(self.side);
        let (table, group) = match house {
            House::Row { row } => (&self.rows, row),
            House::Column { col } => (&self.columns, col),
            House::Box { index } => (&self.boxes, index),
        };
        assert!(group < self.side, "house index {group} out of range");
        let group = usize::from(group);
        &table[group * s..(group + 1) * s]
    }

    /// The three houses containing the cell at `index`.
    #[must_use]
    pub fn houses_of(&self, index: usize) -> [House; 3] {
        [
            House::Row {
                row: self.row_of(index),
            },
            House::Column {
                col: self.column_of(index),
            },
            House::Box {
                index: self.box_of(index),
            },
        ]
    }

    /// Row of the cell at `index`.
    #[expect(clippy::cast_possible_truncation)]
    #[must_use]
    #[inline]
    pub fn row_of(&self, index: usize) -> u8 {
        debug_assert!(index < self.cell_count());
        (index / usize::from(self.side)) as u8
    }

    /// Column of the cell at `index`.
    #[expect(clippy::cast_possible_truncation)]
    #[must_use]
    #[inline]
    pub fn column_of(&self, index: usize) -> u8 {
        debug_assert!(index < self.cell_count());
        (index % usize::from(self.side)) as u8
    }

    /// Box of the cell at `index`.
    #[must_use]
    #[inline]
    pub fn box_of(&self, index: usize) -> u8 {
        (self.row_of(index) / self.box_size) * self.box_size + self.column_of(index) / self.box_size
    }

    /// Cell index of the given row and column.
    #[must_use]
    #[inline]
    pub fn index_of(&self, row: u8, col: u8) -> usize {
        debug_assert!(row < self.side && col < self.side);
        usize::from(row) * usize::from(self.side) + usize::from(col)
    }
}
