//! Text renderings of a maze and of search results.

use std::fmt;

use hedge_core::{Coord, Maze};

/// Every cell followed by its neighbours, in row-major order.
pub struct AdjacencyList<'a>(pub &'a Maze);

impl fmt::Display for AdjacencyList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let maze = self.0;
        writeln!(f, "Graph Details:")?;
        writeln!(f)?;
        for (_, node) in maze.iter() {
            write!(f, "Node {}: ", node.name())?;
            for &id in node.neighbors() {
                write!(f, "{} ", maze.coord_of(id))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Box drawing of the grid: `|` and `---` mark walls, blanks mark passages.
///
/// ```text
///      0   1
///    +---+---+
///   0|       |
///    +   +---+
///   1|   |   |
///    +---+---+
/// ```
pub struct Layout<'a>(pub &'a Maze);

impl fmt::Display for Layout<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let maze = self.0;
        let (rows, cols) = (maze.rows(), maze.cols());

        write!(f, "   ")?;
        for col in 0..cols {
            write!(f, " {col:>2} ")?;
        }
        writeln!(f)?;
        write!(f, "   +")?;
        for _ in 0..cols {
            write!(f, "---+")?;
        }
        writeln!(f)?;

        for row in 0..rows {
            write!(f, " {row:>2}|")?;
            for col in 0..cols {
                let here = Coord::new(row, col);
                let open = col + 1 < cols && maze.connected(here, here.right());
                write!(f, "   {}", if open { ' ' } else { '|' })?;
            }
            writeln!(f)?;

            write!(f, "   +")?;
            for col in 0..cols {
                let here = Coord::new(row, col);
                let open = row + 1 < rows && maze.connected(here, here.below());
                write!(f, "{}+", if open { "   " } else { "---" })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A search result as shown to the user.
pub struct PathDisplay<'a>(pub &'a [Coord]);

impl fmt::Display for PathDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "No path was found.");
        }
        write!(f, "The path is ")?;
        for c in self.0 {
            write!(f, "{c} ")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // (0,0) and (0,1) joined, (0,0) and (1,0) joined, everything else walled.
    const L_SHAPE: &str = "\
2 2
* . *
. x
* x *
";

    #[test]
    fn adjacency_list() {
        let maze = Maze::parse(L_SHAPE).unwrap();
        let text = AdjacencyList(&maze).to_string();
        let expected = [
            "Graph Details:",
            "",
            "Node (0,0): (0,1) (1,0) ",
            "Node (0,1): (0,0) ",
            "Node (1,0): (0,0) ",
            "Node (1,1): ",
        ]
        .join("\n")
            + "\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn layout() {
        let maze = Maze::parse(L_SHAPE).unwrap();
        let text = Layout(&maze).to_string();
        let expected = [
            "     0   1 ",
            "   +---+---+",
            "  0|       |",
            "   +   +---+",
            "  1|   |   |",
            "   +---+---+",
        ]
        .join("\n")
            + "\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn path_display() {
        let path = [Coord::new(0, 0), Coord::new(0, 1)];
        assert_eq!(PathDisplay(&path).to_string(), "The path is (0,0) (0,1) ");
        assert_eq!(PathDisplay(&path[..1]).to_string(), "The path is (0,0) ");
        assert_eq!(PathDisplay(&[]).to_string(), "No path was found.");
    }
}
