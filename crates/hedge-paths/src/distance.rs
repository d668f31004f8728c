use hedge_core::Coord;

/// Manhattan (L1) distance between two cells.
///
/// No maze path between `a` and `b` has fewer than this many passages.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> usize {
    a.row.abs_diff(b.row) + a.col.abs_diff(b.col)
}
