//! Line-win detection for any 3x3 grid.

use crate::Position;

/// A 3x3 grid of optional marks in row-major order.
pub type Grid<T> = [Option<T>; 9];

/// Every winning line: rows, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the mark that fills a complete line, if any.
///
/// Generic over the mark so the same check serves cell grids and the
/// meta-board's grid of sub-board owners.
pub fn line_winner<T: Copy + PartialEq>(grid: &Grid<T>) -> Option<T> {
    LINES.iter().find_map(|[a, b, c]| {
        let first = grid[a.to_index()]?;
        (grid[b.to_index()] == Some(first) && grid[c.to_index()] == Some(first)).then_some(first)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Symbol;

    fn grid_with(marks: &[(Position, Symbol)]) -> Grid<Symbol> {
        let mut grid = [None; 9];
        for (pos, symbol) in marks {
            grid[pos.to_index()] = Some(*symbol);
        }
        grid
    }

    #[test]
    fn test_no_winner_empty_grid() {
        assert_eq!(line_winner::<Symbol>(&[None; 9]), None);
    }

    #[test]
    fn test_winner_top_row() {
        let grid = grid_with(&[
            (Position::TopLeft, Symbol::X),
            (Position::TopCenter, Symbol::X),
            (Position::TopRight, Symbol::X),
        ]);
        assert_eq!(line_winner(&grid), Some(Symbol::X));
    }

    #[test]
    fn test_winner_column() {
        let grid = grid_with(&[
            (Position::TopRight, Symbol::O),
            (Position::MiddleRight, Symbol::O),
            (Position::BottomRight, Symbol::O),
        ]);
        assert_eq!(line_winner(&grid), Some(Symbol::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let grid = grid_with(&[
            (Position::TopRight, Symbol::O),
            (Position::Center, Symbol::O),
            (Position::BottomLeft, Symbol::O),
        ]);
        assert_eq!(line_winner(&grid), Some(Symbol::O));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let grid = grid_with(&[
            (Position::TopLeft, Symbol::X),
            (Position::TopCenter, Symbol::O),
            (Position::TopRight, Symbol::X),
        ]);
        assert_eq!(line_winner(&grid), None);
    }

    #[test]
    fn test_works_for_other_mark_types() {
        let mut grid: Grid<u8> = [None; 9];
        for pos in [Position::TopLeft, Position::Center, Position::BottomRight] {
            grid[pos.to_index()] = Some(7);
        }
        assert_eq!(line_winner(&grid), Some(7));
    }
}
