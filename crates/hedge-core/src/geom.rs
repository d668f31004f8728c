//! Geometry primitives: [`Coord`] and [`Bounds`].
//!
//! Cells are addressed by `(row, col)` with row 0 at the top. A [`Bounds`]
//! is the half-open rectangle `[0, rows) × [0, cols)` of a maze.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseCoordError;

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A cell coordinate. Ordered by row, then column.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Build a coordinate from its row and column as text.
    ///
    /// Surrounding whitespace is ignored. Anything that is not a
    /// non-negative integer is rejected.
    pub fn from_parts(row: &str, col: &str) -> Result<Self, ParseCoordError> {
        Ok(Self::new(parse_index(row)?, parse_index(col)?))
    }

    /// The cell one row down.
    #[inline]
    pub const fn below(self) -> Self {
        Self::new(self.row + 1, self.col)
    }

    /// The cell one column to the right.
    #[inline]
    pub const fn right(self) -> Self {
        Self::new(self.row, self.col + 1)
    }

    /// Whether `other` is one step away along exactly one axis.
    #[inline]
    pub fn is_adjacent(self, other: Coord) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

fn parse_index(s: &str) -> Result<usize, ParseCoordError> {
    let s = s.trim();
    s.parse()
        .map_err(|_| ParseCoordError::NotANumber(s.to_string()))
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

impl FromStr for Coord {
    type Err = ParseCoordError;

    /// Accepts the canonical `"(r,c)"` form as well as `"r c"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let inner = s
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'));
        let parts: Vec<&str> = match inner {
            Some(inner) => inner.split(',').collect(),
            None => s.split_whitespace().collect(),
        };
        match parts.as_slice() {
            [row, col] => Self::from_parts(row, col),
            _ => Err(ParseCoordError::Arity(parts.len())),
        }
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// The `rows × cols` extent of a maze.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub rows: usize,
    pub cols: usize,
}

impl Bounds {
    #[inline]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Total number of cells.
    #[inline]
    pub fn len(self) -> usize {
        self.rows * self.cols
    }

    /// Whether the bounds hold no cell at all.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Whether `c` lies inside the grid.
    #[inline]
    pub fn contains(self, c: Coord) -> bool {
        c.row < self.rows && c.col < self.cols
    }

    /// Row-major flat index of `c`, or `None` if out of bounds.
    #[inline]
    pub fn index(self, c: Coord) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some(c.row * self.cols + c.col)
    }

    /// Inverse of [`index`](Self::index). `idx` must be below `len()`.
    #[inline]
    pub fn coord(self, idx: usize) -> Coord {
        Coord::new(idx / self.cols, idx % self.cols)
    }

    /// Row-major iterator over every coordinate.
    #[inline]
    pub fn iter(self) -> BoundsIter {
        BoundsIter {
            bounds: self,
            next: 0,
        }
    }
}

impl IntoIterator for Bounds {
    type Item = Coord;
    type IntoIter = BoundsIter;
    #[inline]
    fn into_iter(self) -> BoundsIter {
        self.iter()
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Row-major iterator over the coordinates of a [`Bounds`].
#[derive(Clone, Debug)]
pub struct BoundsIter {
    bounds: Bounds,
    next: usize,
}

impl Iterator for BoundsIter {
    type Item = Coord;

    #[inline]
    fn next(&mut self) -> Option<Coord> {
        if self.next >= self.bounds.len() {
            return None;
        }
        let c = self.bounds.coord(self.next);
        self.next += 1;
        Some(c)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bounds.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BoundsIter {}
