use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The grid input contains no rows")]
    EmptyGrid,

    #[error("Grid row {row} contains no cells")]
    EmptyRow { row: usize },

    #[error("Grid row {row} has {found} cells, but the first row has {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Grid row {row} contains a non-digit character: {character:?}")]
    InvalidDigit { row: usize, character: char },

    #[error(
        "Invalid run bounds: the minimum run length {min} must be at least 1 and at most the maximum run length {max}"
    )]
    InvalidRunBounds { min: usize, max: usize },
}
