//! Named graph vertices with ordered, duplicate-free adjacency.
//!
//! A [`Node`] knows nothing about mazes: it carries a name and the
//! [`NodeId`]s of its neighbours. The arena that owns the nodes (a
//! [`Maze`](crate::Maze)) resolves ids back to nodes, so neighbours are
//! never stored by value and never alias each other's adjacency.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Index of a node inside its owning arena.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A named vertex.
#[derive(Clone, Debug)]
pub struct Node {
    name: String,
    neighbors: Vec<NodeId>,
}

impl Node {
    /// Create a node with no neighbours.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            neighbors: Vec::new(),
        }
    }

    /// The node's identity.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Neighbours in order of first insertion.
    #[inline]
    pub fn neighbors(&self) -> &[NodeId] {
        &self.neighbors
    }

    /// Number of neighbours.
    #[inline]
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    /// Whether `id` is already a neighbour.
    #[inline]
    pub fn has_neighbor(&self, id: NodeId) -> bool {
        self.neighbors.contains(&id)
    }

    /// Append `id` unless it is already present. Returns whether it was added.
    ///
    /// Degree is at most four in a grid maze, so a linear scan is enough.
    pub fn add_neighbor(&mut self, id: NodeId) -> bool {
        if self.has_neighbor(id) {
            return false;
        }
        self.neighbors.push(id);
        true
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
