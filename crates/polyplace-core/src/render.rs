//! Text output for puzzle grids.

use std::fmt;

use crate::grid::Grid;

/// Renders the grid with `+---+` rules between box bands.
///
/// Empty cells print as `.`. Grids with a side length above 9 print each
/// cell right-aligned in two columns. The output carries no trailing
/// newline.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = usize::from(self.geometry().box_size());
        let side = usize::from(self.side());
        let wide = side > 9;
        let segment = if wide { n * 3 - 1 } else { n };

        let mut rule = String::with_capacity(n * (segment + 1) + 1);
        rule.push('+');
        for _ in 0..n {
            for _ in 0..segment {
                rule.push('-');
            }
            rule.push('+');
        }

        for row in 0..side {
            if row % n == 0 {
                writeln!(f, "{rule}")?;
            }
            for col in 0..side {
                if col % n == 0 {
                    write!(f, "|")?;
                } else if wide {
                    write!(f, " ")?;
                }
                match (self.cell(row * side + col).digit(), wide) {
                    (Some(digit), true) => write!(f, "{:>2}", digit.value())?,
                    (Some(digit), false) => write!(f, "{digit}")?,
                    (None, true) => write!(f, " .")?,
                    (None, false) => write!(f, ".")?,
                }
            }
            writeln!(f, "|")?;
        }
        write!(f, "{rule}")
    }
}
