use hedge_core::{Coord, MazeError};
use log::{debug, trace};

use crate::PathRange;
use crate::pathrange::PathNode;
use crate::traits::Pather;

/// Shortest path from `start` to `finish` using a throwaway [`PathRange`].
///
/// Prefer [`PathRange::bfs_path`] when running many queries on one maze.
pub fn find_path<P: Pather>(
    pather: &P,
    start: Coord,
    finish: Coord,
) -> Result<Vec<Coord>, MazeError> {
    PathRange::new(pather.bounds()).bfs_path(pather, start, finish)
}

impl PathRange {
    /// Compute the fewest-passages path from `start` to `finish`.
    ///
    /// Returns the full path including both endpoints, `[start]` when the
    /// two coincide, or an empty vector when `finish` is unreachable. Ties
    /// between equally short paths go to the neighbour the pather lists
    /// first. Either endpoint lying outside the grid is an error.
    pub fn bfs_path<P: Pather>(
        &mut self,
        pather: &P,
        start: Coord,
        finish: Coord,
    ) -> Result<Vec<Coord>, MazeError> {
        self.fit(pather.bounds());
        let si = self.idx(start).ok_or(MazeError::OutOfBounds(start))?;
        let fi = self.idx(finish).ok_or(MazeError::OutOfBounds(finish))?;

        let cur_gen = self.next_generation();
        self.queue.clear();
        self.marks[si] = cur_gen;
        self.parents[si] = None;
        self.queue.push_back(si);

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut found = false;

        while let Some(ci) = self.queue.pop_front() {
            if ci == fi {
                found = true;
                break;
            }

            nbuf.clear();
            pather.neighbors(self.coord(ci), &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if self.marks[ni] == cur_gen {
                    continue;
                }
                self.marks[ni] = cur_gen;
                self.parents[ni] = Some(ci);
                self.queue.push_back(ni);
            }
        }

        self.nbuf = nbuf;

        if !found {
            debug!("no path from {start} to {finish}");
            return Ok(Vec::new());
        }

        let mut path = Vec::new();
        let mut next = Some(fi);
        while let Some(ci) = next {
            path.push(self.coord(ci));
            next = self.parents[ci];
        }
        path.reverse();
        trace!("path from {start} to {finish} has {} steps", path.len() - 1);
        Ok(path)
    }

    /// Passage counts from the nearest of `sources` to every cell reachable
    /// within `max_dist` passages.
    ///
    /// The maze is swept one layer at a time: layer `d` is exactly the set
    /// of cells whose shortest route to a source crosses `d` passages, and
    /// layer `d + 1` is built from the unvisited neighbours of layer `d`.
    /// The returned cells are in discovery order, so costs never decrease.
    /// Sources outside the maze are skipped and duplicates count once.
    pub fn bfs_map<P: Pather>(
        &mut self,
        pather: &P,
        sources: &[Coord],
        max_dist: usize,
    ) -> &[PathNode] {
        self.fit(pather.bounds());
        self.dist.fill(None);
        self.layers.clear();

        for &src in sources {
            let Some(si) = self.idx(src) else {
                debug!("skipping source {src} outside the maze");
                continue;
            };
            if self.dist[si].is_none() {
                self.dist[si] = Some(0);
                self.layers.push(PathNode { pos: src, cost: 0 });
            }
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut layer = 0..self.layers.len();
        let mut cost = 0;

        while cost < max_dist && !layer.is_empty() {
            cost += 1;
            let next = layer.end;
            for k in layer {
                nbuf.clear();
                pather.neighbors(self.layers[k].pos, &mut nbuf);
                for &there in &nbuf {
                    let Some(ti) = self.idx(there) else {
                        continue;
                    };
                    if self.dist[ti].is_none() {
                        self.dist[ti] = Some(cost);
                        self.layers.push(PathNode { pos: there, cost });
                    }
                }
            }
            layer = next..self.layers.len();
        }

        self.nbuf = nbuf;
        trace!("distance map reached {} cells", self.layers.len());
        &self.layers
    }

    /// Distance of `c` from the sources of the last [`bfs_map`](Self::bfs_map) call.
    ///
    /// Returns `None` if `c` is outside the grid or was not reached.
    pub fn bfs_at(&self, c: Coord) -> Option<usize> {
        self.dist[self.idx(c)?]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manhattan;
    use hedge_core::{Bounds, Maze};

    const OPEN_2X2: &str = "\
2 2
* . *
. .
* . *
";

    const OPEN_3X3: &str = "\
3 3
* . * . *
. . .
* . * . *
. . .
* . * . *
";

    // Two regions: the left column and the rest.
    //   (0,0) | (0,1) . (0,2)
    //     .       .      x
    //   (1,0) | (1,1) . (1,2)
    //     .       x      .
    //   (2,0) | (2,1) . (2,2)
    const SPLIT: &str = "\
3 3
* | * . *
. . x
* | * . *
. x .
* | * . *
";

    // A corridor forcing a detour: (0,0) to (0,2) must go down and around.
    //   (0,0) . (0,1) | (0,2)
    //     x       .      .
    //   (1,0) x (1,1) . (1,2)
    const DETOUR: &str = "\
2 3
* . * | *
x . .
* x * . *
";

    fn c(row: usize, col: usize) -> Coord {
        Coord::new(row, col)
    }

    fn assert_valid_path(maze: &Maze, path: &[Coord], start: Coord, finish: Coord) {
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&finish));
        for w in path.windows(2) {
            assert!(maze.connected(w[0], w[1]), "{} -> {} is walled", w[0], w[1]);
        }
    }

    #[test]
    fn open_grid_corner_to_corner() {
        let maze = Maze::parse(OPEN_3X3).unwrap();
        let path = find_path(&maze, c(0, 0), c(2, 2)).unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(path.len() - 1, manhattan(c(0, 0), c(2, 2)));
        assert_valid_path(&maze, &path, c(0, 0), c(2, 2));
    }

    #[test]
    fn tie_break_follows_neighbour_order() {
        let maze = Maze::parse(OPEN_2X2).unwrap();
        let path = find_path(&maze, c(0, 0), c(1, 1)).unwrap();
        assert_eq!(path, vec![c(0, 0), c(0, 1), c(1, 1)]);
        let back = find_path(&maze, c(1, 1), c(0, 0)).unwrap();
        assert_eq!(back, vec![c(1, 1), c(0, 1), c(0, 0)]);
    }

    #[test]
    fn start_equals_finish() {
        let maze = Maze::parse(OPEN_3X3).unwrap();
        for x in maze.bounds() {
            assert_eq!(find_path(&maze, x, x).unwrap(), vec![x]);
        }
        let walled = Maze::parse("1 2\n* | *\n").unwrap();
        assert_eq!(find_path(&walled, c(0, 1), c(0, 1)).unwrap(), vec![c(0, 1)]);
    }

    #[test]
    fn wall_between_two_cells() {
        let maze = Maze::parse("1 2\n* | *\n").unwrap();
        assert!(find_path(&maze, c(0, 0), c(0, 1)).unwrap().is_empty());
    }

    #[test]
    fn disconnected_regions() {
        let maze = Maze::parse(SPLIT).unwrap();
        assert!(find_path(&maze, c(0, 0), c(2, 2)).unwrap().is_empty());
        assert!(find_path(&maze, c(1, 1), c(2, 0)).unwrap().is_empty());
        let path = find_path(&maze, c(0, 0), c(2, 0)).unwrap();
        assert_eq!(path, vec![c(0, 0), c(1, 0), c(2, 0)]);
    }

    #[test]
    fn detour_around_wall() {
        let maze = Maze::parse(DETOUR).unwrap();
        let path = find_path(&maze, c(0, 0), c(0, 2)).unwrap();
        assert_eq!(path, vec![c(0, 0), c(0, 1), c(1, 1), c(1, 2), c(0, 2)]);
    }

    #[test]
    fn out_of_bounds_endpoints() {
        let maze = Maze::parse(OPEN_2X2).unwrap();
        let err = find_path(&maze, c(2, 0), c(0, 0)).unwrap_err();
        assert!(matches!(err, MazeError::OutOfBounds(p) if p == c(2, 0)));
        let err = find_path(&maze, c(0, 0), c(0, 5)).unwrap_err();
        assert!(matches!(err, MazeError::OutOfBounds(p) if p == c(0, 5)));
    }

    #[test]
    fn repeated_queries_are_identical() {
        let maze = Maze::parse(DETOUR).unwrap();
        let mut pr = PathRange::new(maze.bounds());
        let first = pr.bfs_path(&maze, c(0, 0), c(0, 2)).unwrap();
        // Unrelated queries in between must not leak state.
        assert!(pr.bfs_path(&maze, c(1, 0), c(0, 0)).unwrap().is_empty());
        assert_eq!(pr.bfs_path(&maze, c(1, 2), c(0, 1)).unwrap().len(), 3);
        let second = pr.bfs_path(&maze, c(0, 0), c(0, 2)).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, find_path(&maze, c(0, 0), c(0, 2)).unwrap());
    }

    #[test]
    fn path_range_adapts_to_other_mazes() {
        let small = Maze::parse(OPEN_2X2).unwrap();
        let big = Maze::parse(OPEN_3X3).unwrap();
        let mut pr = PathRange::new(small.bounds());
        assert_eq!(pr.bfs_path(&big, c(0, 0), c(2, 2)).unwrap().len(), 5);
        assert_eq!(pr.bounds(), Bounds::new(3, 3));
        assert_eq!(pr.bfs_path(&small, c(0, 0), c(1, 1)).unwrap().len(), 3);
    }

    #[test]
    fn bfs_map_distances() {
        let maze = Maze::parse(DETOUR).unwrap();
        let mut pr = PathRange::new(maze.bounds());
        let nodes = pr.bfs_map(&maze, &[c(0, 0)], usize::MAX);
        assert_eq!(nodes.len(), 5);
        assert!(nodes.windows(2).all(|w| w[0].cost <= w[1].cost));
        assert_eq!(pr.bfs_at(c(0, 0)), Some(0));
        assert_eq!(pr.bfs_at(c(1, 1)), Some(2));
        assert_eq!(pr.bfs_at(c(0, 2)), Some(4));
        // (1,0) is walled off on both sides.
        assert_eq!(pr.bfs_at(c(1, 0)), None);
        assert_eq!(pr.bfs_at(c(5, 5)), None);
    }

    #[test]
    fn bfs_map_respects_max_dist_and_sources() {
        let maze = Maze::parse(OPEN_3X3).unwrap();
        let mut pr = PathRange::new(maze.bounds());
        let nodes = pr.bfs_map(&maze, &[c(0, 0), c(2, 2), c(9, 9)], 1);
        assert_eq!(nodes.len(), 6);
        assert_eq!(pr.bfs_at(c(1, 1)), None);
        assert_eq!(pr.bfs_at(c(2, 1)), Some(1));

        assert_eq!(pr.bfs_map(&maze, &[c(1, 1), c(1, 1)], 0).len(), 1);
        assert_eq!(pr.bfs_at(c(1, 1)), Some(0));
        assert_eq!(pr.bfs_at(c(0, 1)), None);
        assert!(pr.bfs_map(&maze, &[c(3, 0)], usize::MAX).is_empty());
    }

    /// A random maze where every passage is open with probability one half.
    fn random_maze(rows: usize, cols: usize) -> Maze {
        let tok = || if rand::random::<bool>() { "." } else { "#" };
        let mut s = format!("{rows} {cols}\n");
        for row in 0..rows {
            let mut line = vec!["*"];
            for _ in 1..cols {
                line.push(tok());
                line.push("*");
            }
            s.push_str(&line.join(" "));
            s.push('\n');
            if row + 1 < rows {
                let down: Vec<&str> = (0..cols).map(|_| tok()).collect();
                s.push_str(&down.join(" "));
                s.push('\n');
            }
        }
        Maze::parse(&s).unwrap()
    }

    /// Single-source distances by repeated edge relaxation, independent of BFS.
    fn relaxed_distances(maze: &Maze, start: Coord) -> Vec<Option<usize>> {
        let b = maze.bounds();
        let mut dist = vec![None; b.len()];
        dist[b.index(start).unwrap()] = Some(0);
        let mut changed = true;
        while changed {
            changed = false;
            for here in b {
                let Some(d) = dist[b.index(here).unwrap()] else {
                    continue;
                };
                for there in maze.neighbors_of(here).unwrap() {
                    let slot = &mut dist[b.index(there).unwrap()];
                    if slot.is_none_or(|old| d + 1 < old) {
                        *slot = Some(d + 1);
                        changed = true;
                    }
                }
            }
        }
        dist
    }

    #[test]
    fn random_mazes_obey_layering_law() {
        for _ in 0..40 {
            let maze = random_maze(6, 7);
            let b = maze.bounds();
            let start = c(0, 0);
            let expected = relaxed_distances(&maze, start);

            let mut pr = PathRange::new(b);
            pr.bfs_map(&maze, &[start], usize::MAX);
            for finish in b {
                let want = expected[b.index(finish).unwrap()];
                assert_eq!(pr.bfs_at(finish), want, "distance to {finish}");

                let path = pr.bfs_path(&maze, start, finish).unwrap();
                match want {
                    None => assert!(path.is_empty()),
                    Some(d) => {
                        assert_eq!(path.len(), d + 1);
                        assert!(d >= manhattan(start, finish));
                        assert_valid_path(&maze, &path, start, finish);
                    }
                }
            }
        }
    }
}
