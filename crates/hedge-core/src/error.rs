//! Error types for maze construction and coordinate parsing.

use thiserror::Error;

use crate::geom::Coord;

/// Errors raised while building or querying a [`Maze`](crate::Maze).
#[derive(Debug, Error)]
pub enum MazeError {
    /// The `<rows> <cols>` header is missing or malformed.
    #[error("line {line}: {reason}")]
    Format { line: usize, reason: String },
    /// The body ended before every declared row was read (strict mode only).
    #[error("maze body ended after {read} of {expected} rows")]
    Truncated { read: usize, expected: usize },
    /// A coordinate lies outside the maze grid.
    #[error("{0} is not a valid cell location")]
    OutOfBounds(Coord),
    /// The description source could not be read.
    #[error("could not read maze description: {0}")]
    Io(#[from] std::io::Error),
}

impl MazeError {
    pub(crate) fn format(line: usize, reason: impl Into<String>) -> Self {
        Self::Format {
            line,
            reason: reason.into(),
        }
    }
}

/// Errors raised when turning text into a [`Coord`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCoordError {
    /// Something other than exactly a row and a column was given.
    #[error("expected a row and a column, found {0} value(s)")]
    Arity(usize),
    /// A component is not a non-negative integer.
    #[error("{0:?} is not a non-negative integer")]
    NotANumber(String),
}
