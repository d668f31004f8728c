//! Maze graphs built from a textual wall/passage description.
//!
//! # Description format
//!
//! ```text
//! 2 3
//! * . * | *
//! . - .
//! * . * . *
//! ```
//!
//! The first non-blank line holds `<rows> <cols>`. Each grid row is then
//! described by a *row line* whose tokens at odd positions (`1, 3, …`) sit
//! between horizontally adjacent cells, followed (except after the last
//! row) by a *vertical line* whose token `k` sits between cell `(r, k)` and
//! the cell below it. Tokens are whitespace separated; [`NO_WALL`] opens a
//! passage and anything else is a wall.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use log::{debug, warn};

use crate::error::MazeError;
use crate::geom::{Bounds, Coord};
use crate::node::{Node, NodeId};

/// Token marking an open passage between two cells.
pub const NO_WALL: &str = ".";

/// Largest number of cells a description may declare.
pub const MAX_CELLS: usize = 1 << 22;

/// Knobs for [`Maze`] construction.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Fail with [`MazeError::Truncated`] when the body ends early instead
    /// of treating the missing rows as solid walls.
    pub strict: bool,
}

impl ParseOptions {
    pub const STRICT: Self = Self { strict: true };
}

/// An undirected graph with one node per maze cell.
///
/// Nodes live in a row-major arena, so a cell's [`NodeId`] is its flat
/// index. Edges are always inserted on both endpoints at once.
#[derive(Clone, Debug)]
pub struct Maze {
    bounds: Bounds,
    nodes: Vec<Node>,
    edges: usize,
}

impl Maze {
    /// Parse a description held in memory.
    pub fn parse(s: &str) -> Result<Self, MazeError> {
        Self::parse_with(s, ParseOptions::default())
    }

    pub fn parse_with(s: &str, opts: ParseOptions) -> Result<Self, MazeError> {
        Self::from_lines(s.lines().map(Ok::<_, io::Error>), opts)
    }

    /// Parse a description from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, MazeError> {
        Self::from_reader_with(reader, ParseOptions::default())
    }

    pub fn from_reader_with<R: BufRead>(reader: R, opts: ParseOptions) -> Result<Self, MazeError> {
        Self::from_lines(reader.lines(), opts)
    }

    /// Read and parse a description file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, MazeError> {
        Self::open_with(path, ParseOptions::default())
    }

    pub fn open_with(path: impl AsRef<Path>, opts: ParseOptions) -> Result<Self, MazeError> {
        let file = File::open(path.as_ref())?;
        Self::from_reader_with(BufReader::new(file), opts)
    }

    /// A maze of the given size with every cell walled off.
    fn walled(bounds: Bounds) -> Self {
        let nodes = bounds.iter().map(|c| Node::new(c.to_string())).collect();
        Self {
            bounds,
            nodes,
            edges: 0,
        }
    }

    fn from_lines<I, S>(lines: I, opts: ParseOptions) -> Result<Self, MazeError>
    where
        I: IntoIterator<Item = io::Result<S>>,
        S: AsRef<str>,
    {
        let mut lines = lines.into_iter();
        let mut line_no = 0;

        let header = loop {
            line_no += 1;
            match lines.next().transpose()? {
                Some(l) if l.as_ref().trim().is_empty() => continue,
                Some(l) => break l,
                None => return Err(MazeError::format(line_no, "missing `<rows> <cols>` header")),
            }
        };
        let bounds = parse_header(line_no, header.as_ref())?;
        let mut maze = Self::walled(bounds);

        let mut read = 0;
        for row in 0..bounds.rows {
            let Some(row_line) = lines.next().transpose()? else {
                break;
            };
            let vertical = if row + 1 < bounds.rows {
                lines.next().transpose()?
            } else {
                None
            };
            maze.link_row(row, row_line.as_ref(), vertical.as_ref().map(|v| v.as_ref()));
            if row + 1 < bounds.rows && vertical.is_none() {
                break;
            }
            read += 1;
        }

        if read < bounds.rows {
            if opts.strict {
                return Err(MazeError::Truncated {
                    read,
                    expected: bounds.rows,
                });
            }
            warn!(
                "maze body ended after {read} of {} rows; remaining cells are walled off",
                bounds.rows
            );
        }

        debug!("built {bounds} maze with {} passages", maze.edges);
        Ok(maze)
    }

    /// Add the passages declared for grid row `row`.
    ///
    /// For every column the passage to the right is linked before the one
    /// below, which fixes the neighbour order seen by searches.
    fn link_row(&mut self, row: usize, row_line: &str, vertical: Option<&str>) {
        let cols = self.bounds.cols;
        let across: Vec<&str> = row_line.split_whitespace().collect();
        let down: Vec<&str> = vertical
            .map(|v| v.split_whitespace().collect())
            .unwrap_or_default();

        if across.len() > 2 * cols - 1 {
            debug!("row {row}: ignoring tokens past the last column");
        }
        if down.len() > cols {
            debug!("row {row}: ignoring vertical tokens past the last column");
        }

        for col in 0..cols {
            let here = Coord::new(row, col);
            if col + 1 < cols && across.get(2 * col + 1) == Some(&NO_WALL) {
                self.link(here, here.right());
            }
            if down.get(col) == Some(&NO_WALL) {
                self.link(here, here.below());
            }
        }
    }

    /// Insert the undirected edge `a — b`. Both endpoints must be in bounds.
    fn link(&mut self, a: Coord, b: Coord) {
        let (Some(ia), Some(ib)) = (self.bounds.index(a), self.bounds.index(b)) else {
            return;
        };
        let added = self.nodes[ia].add_neighbor(NodeId(ib));
        self.nodes[ib].add_neighbor(NodeId(ia));
        if added {
            self.edges += 1;
        }
    }

    /// Number of grid rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.bounds.rows
    }

    /// Number of grid columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.bounds.cols
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of passages (undirected edges).
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges
    }

    /// Whether `c` is a cell of this maze.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        self.bounds.contains(c)
    }

    #[inline]
    pub fn contains_rc(&self, row: usize, col: usize) -> bool {
        self.contains(Coord::new(row, col))
    }

    #[inline]
    pub fn node_id(&self, c: Coord) -> Option<NodeId> {
        self.bounds.index(c).map(NodeId)
    }

    pub fn node(&self, c: Coord) -> Option<&Node> {
        self.bounds.index(c).map(|i| &self.nodes[i])
    }

    /// Coordinate of the node with the given id.
    #[inline]
    pub fn coord_of(&self, id: NodeId) -> Coord {
        self.bounds.coord(id.index())
    }

    /// Recover a node's coordinate from its canonical name.
    pub fn resolve(&self, node: &Node) -> Option<Coord> {
        node.name()
            .parse::<Coord>()
            .ok()
            .filter(|&c| self.contains(c))
    }

    /// Whether `a` and `b` list each other as neighbours.
    pub fn connected(&self, a: Coord, b: Coord) -> bool {
        let (Some(ia), Some(ib)) = (self.node_id(a), self.node_id(b)) else {
            return false;
        };
        self.nodes[ia.index()].has_neighbor(ib) && self.nodes[ib.index()].has_neighbor(ia)
    }

    /// Neighbouring cells of `c`, in insertion order.
    pub fn neighbors_of(&self, c: Coord) -> Result<Vec<Coord>, MazeError> {
        let node = self.node(c).ok_or(MazeError::OutOfBounds(c))?;
        Ok(node.neighbors().iter().map(|&id| self.coord_of(id)).collect())
    }

    /// Row-major iterator over every cell and its node.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &Node)> + '_ {
        self.bounds.iter().zip(self.nodes.iter())
    }
}

impl FromStr for Maze {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn parse_header(line: usize, header: &str) -> Result<Bounds, MazeError> {
    let tokens: Vec<&str> = header.split_whitespace().collect();
    let [rows, cols, ..] = tokens.as_slice() else {
        return Err(MazeError::format(
            line,
            format!("expected `<rows> <cols>`, found {} value(s)", tokens.len()),
        ));
    };
    let dim = |tok: &str, what: &str| {
        tok.parse::<usize>()
            .map_err(|_| MazeError::format(line, format!("{tok:?} is not a valid {what} count")))
    };
    let bounds = Bounds::new(dim(*rows, "row")?, dim(*cols, "column")?);
    if bounds.is_empty() {
        return Err(MazeError::format(
            line,
            "a maze needs at least one row and one column",
        ));
    }
    match bounds.rows.checked_mul(bounds.cols) {
        Some(n) if n <= MAX_CELLS => Ok(bounds),
        _ => Err(MazeError::format(
            line,
            format!("{bounds} exceeds the limit of {MAX_CELLS} cells"),
        )),
    }
}
