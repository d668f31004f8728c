//! **hedge-core** — hedge maze graphs (core types).
//!
//! This crate turns a textual wall/passage description into an undirected
//! graph with one node per grid cell, and answers adjacency queries on it:
//! coordinates and grid bounds, name-identified nodes, the [`Maze`] graph
//! itself, and the error types shared by the rest of the workspace.

pub mod error;
pub mod geom;
pub mod maze;
pub mod node;

pub use error::{MazeError, ParseCoordError};
pub use geom::{Bounds, BoundsIter, Coord};
pub use maze::{MAX_CELLS, Maze, NO_WALL, ParseOptions};
pub use node::{Node, NodeId};
