use std::str::FromStr;

use crate::error::{Error, Result};

#[cfg(test)]
mod tests;

/// An immutable rectangular matrix of non-negative traversal costs.
///
/// Costs are stored row-major in a flat vector sized exactly to the grid.
/// A grid always has at least one cell in each dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostGrid {
    costs: Vec<u32>,
    rows: usize,
    cols: usize,
}

impl CostGrid {
    /// Build a grid from a finite sequence of equal-length decimal digit strings.
    ///
    /// Fails if the sequence is empty, the first row is empty, a later row has
    /// a different length than the first, or a character is not a decimal digit.
    pub fn from_lines<LineIterator, Line>(lines: LineIterator) -> Result<Self>
    where
        LineIterator: IntoIterator<Item = Line>,
        Line: AsRef<str>,
    {
        let mut costs = Vec::new();
        let mut rows = 0;
        let mut cols = 0;

        for (row, line) in lines.into_iter().enumerate() {
            let mut width = 0;
            for character in line.as_ref().chars() {
                let digit = character
                    .to_digit(10)
                    .ok_or(Error::InvalidDigit { row, character })?;
                costs.push(digit);
                width += 1;
            }

            if row == 0 {
                if width == 0 {
                    return Err(Error::EmptyRow { row });
                }
                cols = width;
            } else if width != cols {
                return Err(Error::RaggedRow {
                    row,
                    expected: cols,
                    found: width,
                });
            }

            rows += 1;
        }

        if rows == 0 {
            return Err(Error::EmptyGrid);
        }

        Ok(Self { costs, rows, cols })
    }

    /// Build a grid from pre-parsed numeric rows.
    ///
    /// Unlike [`from_lines`](Self::from_lines), cell costs are not limited to
    /// single digits. The same rectangularity validation applies.
    pub fn from_rows<RowIterator>(input: RowIterator) -> Result<Self>
    where
        RowIterator: IntoIterator<Item = Vec<u32>>,
    {
        let mut costs = Vec::new();
        let mut rows = 0;
        let mut cols = 0;

        for (row, line) in input.into_iter().enumerate() {
            if row == 0 {
                if line.is_empty() {
                    return Err(Error::EmptyRow { row });
                }
                cols = line.len();
            } else if line.len() != cols {
                return Err(Error::RaggedRow {
                    row,
                    expected: cols,
                    found: line.len(),
                });
            }

            costs.extend(line);
            rows += 1;
        }

        if rows == 0 {
            return Err(Error::EmptyGrid);
        }

        Ok(Self { costs, rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The traversal cost incurred on entering the cell at `(row, col)`.
    ///
    /// **Panics** if the coordinate is outside the grid.
    pub fn cost(&self, row: usize, col: usize) -> u32 {
        assert!(row < self.rows && col < self.cols);
        self.costs[row * self.cols + col]
    }
}

impl FromStr for CostGrid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_lines(s.lines())
    }
}
