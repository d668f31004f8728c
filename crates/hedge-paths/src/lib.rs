//! Shortest paths over hedge maze graphs.
//!
//! Mazes are unweighted and undirected, so breadth-first search gives the
//! fewest-passages path between two cells:
//!
//! - **Shortest path** with predecessor reconstruction ([`PathRange::bfs_path`], [`find_path`])
//! - **Distance maps** layered by passage count ([`PathRange::bfs_map`])
//!
//! Searches run through [`PathRange`], which owns and reuses its caches so
//! that repeated queries against the same maze allocate nothing after the
//! first one. Anything implementing [`Pather`] can be searched; [`hedge_core::Maze`]
//! does out of the box.

mod bfs;
mod distance;
mod pathrange;
mod traits;

pub use bfs::find_path;
pub use distance::manhattan;
pub use pathrange::{PathNode, PathRange};
pub use traits::Pather;
