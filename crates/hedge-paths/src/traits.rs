use hedge_core::{Bounds, Coord, Maze};

/// Minimal search interface: grid extent plus neighbour enumeration.
pub trait Pather {
    /// The grid every searched coordinate must lie in.
    fn bounds(&self) -> Bounds;

    /// Append neighbours of `c` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>);
}

impl Pather for Maze {
    fn bounds(&self) -> Bounds {
        Maze::bounds(self)
    }

    fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>) {
        if let Some(node) = self.node(c) {
            buf.extend(node.neighbors().iter().map(|&id| self.coord_of(id)));
        }
    }
}
