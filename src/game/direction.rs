use super::grid::Cell;

/// A heading the snake can move in
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The change in `(x, y)` produced by moving one cell in this direction
    pub(crate) fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Return the cell one step from `cell` in this direction.  The result
    /// may lie outside the grid; see [`Grid::normalize()`][super::grid::Grid::normalize].
    pub(crate) fn advance(self, cell: Cell) -> Cell {
        let (dx, dy) = self.delta();
        Cell::new(cell.x + dx, cell.y + dy)
    }

    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub(crate) fn is_opposite(self, other: Direction) -> bool {
        self.reverse() == other
    }
}
