use std::collections::VecDeque;

use hedge_core::{Bounds, Coord};

/// A cell with its passage count from the nearest source, returned from
/// [`PathRange::bfs_map`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Coord,
    pub cost: usize,
}

// ---------------------------------------------------------------------------
// PathRange
// ---------------------------------------------------------------------------

/// Central coordinator for searches over one maze grid.
///
/// `PathRange` owns the visited marks, parent table, queue and distance
/// map so that repeated queries incur no allocations after the first use.
/// Visited marks are generation-stamped, which makes starting a new path
/// search O(1) instead of a full clear. Distance maps are cleared in full
/// since every cell's distance is kept for [`bfs_at`](Self::bfs_at).
pub struct PathRange {
    pub(crate) bounds: Bounds,
    // shortest-path caches
    pub(crate) marks: Vec<u32>,
    pub(crate) generation: u32,
    pub(crate) parents: Vec<Option<usize>>,
    pub(crate) queue: VecDeque<usize>,
    // distance-map caches; `layers` also serves as the sweep frontier
    pub(crate) dist: Vec<Option<usize>>,
    pub(crate) layers: Vec<PathNode>,
    // shared by both searches
    pub(crate) nbuf: Vec<Coord>,
}

impl PathRange {
    /// Create a new `PathRange` for the given grid.
    pub fn new(bounds: Bounds) -> Self {
        let len = bounds.len();
        Self {
            bounds,
            marks: vec![0; len],
            generation: 0,
            parents: vec![None; len],
            queue: VecDeque::new(),
            dist: vec![None; len],
            layers: Vec::new(),
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Replace the underlying grid.
    ///
    /// Caches are kept when the new grid fits in them; only the generation
    /// is bumped so stale marks are ignored. Otherwise they are reallocated.
    pub fn set_bounds(&mut self, bounds: Bounds) {
        let new_len = bounds.len();
        self.bounds = bounds;
        self.layers.clear();
        self.queue.clear();

        if new_len <= self.marks.len() {
            self.next_generation();
            return;
        }

        self.marks.clear();
        self.marks.resize(new_len, 0);
        self.generation = 0;
        self.parents.clear();
        self.parents.resize(new_len, None);
        self.dist.clear();
        self.dist.resize(new_len, None);
    }

    /// The grid being searched.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Switch to `bounds` if a pather reports a different grid.
    #[inline]
    pub(crate) fn fit(&mut self, bounds: Bounds) {
        if bounds != self.bounds {
            self.set_bounds(bounds);
        }
    }

    /// Start a new visited-mark generation, clearing marks on wrap-around.
    pub(crate) fn next_generation(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            self.marks.fill(0);
            self.generation = 1;
        }
        self.generation
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    #[inline]
    pub(crate) fn idx(&self, c: Coord) -> Option<usize> {
        self.bounds.index(c)
    }

    #[inline]
    pub(crate) fn coord(&self, idx: usize) -> Coord {
        self.bounds.coord(idx)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PathRange {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.bounds, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PathRange {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bounds = <Bounds as serde::Deserialize>::deserialize(deserializer)?;
        Ok(PathRange::new(bounds))
    }
}
