//! Text input for puzzle grids.

use std::str::FromStr;

use derive_more::{Display, Error};

use crate::{digit::Digit, geometry::Geometry, grid::Grid};

/// A failure to read a puzzle from text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseError {
    /// The input ended before every cell had a value.
    #[display("expected {expected} cells, found {found}")]
    TooFewCells {
        /// Number of cells the grid needs.
        expected: usize,
        /// Number of cells the input provided.
        found: usize,
    },
    /// A token that is neither a digit nor an empty-cell marker.
    #[display("invalid token {token:?}")]
    InvalidToken {
        /// The offending token.
        token: String,
    },
    /// A digit larger than the grid's side length.
    #[display("digit {value} out of range for side length {side}")]
    OutOfRangeDigit {
        /// The rejected digit value.
        value: u8,
        /// The grid's side length.
        side: u8,
    },
}

impl Grid {
    /// Reads a puzzle from text, one value per cell in row-major order.
    ///
    /// Grids up to side length 9 use one character per cell: `1` to `9` for
    /// clues and `0`, `.`, or `_` for an empty cell, with whitespace ignored.
    /// Larger grids use whitespace-separated tokens, one per cell: a decimal
    /// clue, or `0`, `.`, or `_` for an empty cell. Input past the last cell
    /// is ignored.
    ///
    /// Clues are applied in cell order with full candidate propagation, so a
    /// puzzle whose clues conflict still loads; the conflict surfaces as a
    /// contradiction when the grid is solved.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the input runs out before the last cell,
    /// contains an unrecognized token, or contains a digit larger than the
    /// side length.
    ///
    /// # Examples
    ///
    /// ```
    /// use polyplace_core::{Digit, Geometry, Grid};
    ///
    /// let grid = Grid::parse(
    ///     Geometry::new(2).unwrap(),
    ///     "1 2 3 4\n\
    ///      3 4 . .\n\
    ///      . . . .\n\
    ///      . . . .",
    /// )?;
    /// assert_eq!(grid.cell(0).digit(), Some(Digit::new(1)));
    /// assert!(grid.cell(6).is_empty());
    /// # Ok::<(), polyplace_core::ParseError>(())
    /// ```
    pub fn parse(geometry: Geometry, input: &str) -> Result<Self, ParseError> {
        let mut grid = Self::blank(geometry);
        let side = grid.side();
        let expected = grid.geometry().cell_count();

        if side <= 9 {
            let mut values = input.chars().filter(|c| !c.is_whitespace());
            for index in 0..expected {
                let Some(c) = values.next() else {
                    return Err(ParseError::TooFewCells {
                        expected,
                        found: index,
                    });
                };
                match c {
                    '0' | '.' | '_' => {}
                    '1'..='9' => {
                        #[expect(clippy::cast_possible_truncation)]
                        let value = (u32::from(c) - u32::from('0')) as u8;
                        if value > side {
                            return Err(ParseError::OutOfRangeDigit { value, side });
                        }
                        grid.set_given(index, Digit::new(value));
                    }
                    _ => {
                        return Err(ParseError::InvalidToken {
                            token: c.to_string(),
                        });
                    }
                }
            }
        } else {
            let mut values = input.split_whitespace();
            for index in 0..expected {
                let Some(token) = values.next() else {
                    return Err(ParseError::TooFewCells {
                        expected,
                        found: index,
                    });
                };
                let value: u8 = match token {
                    "." | "_" => 0,
                    _ => token.parse().map_err(|_| ParseError::InvalidToken {
                        token: token.to_owned(),
                    })?,
                };
                if value > side {
                    return Err(ParseError::OutOfRangeDigit { value, side });
                }
                if value > 0 {
                    grid.set_given(index, Digit::new(value));
                }
            }
        }
        Ok(grid)
    }
}

impl FromStr for Grid {
    type Err = ParseError;

    /// Reads a classic 9×9 puzzle; see [`Grid::parse`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(Geometry::standard(), s)
    }
}
