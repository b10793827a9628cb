use std::fmt;

/// A position on the grid.  Coordinates are signed so that a step off the
/// edge can be represented before the boundary policy is applied.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) struct Cell {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Cell {
    pub(crate) const fn new(x: i32, y: i32) -> Cell {
        Cell { x, y }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// What happens when the snake moves past the edge of the grid
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum BoundaryPolicy {
    /// Leaving the grid is a fatal collision
    #[default]
    Bounded,

    /// The edges wrap around, so leaving one edge reenters at the opposite
    /// edge
    Toroidal,
}

/// A square grid of `size` × `size` cells
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Grid {
    size: i32,
    policy: BoundaryPolicy,
}

impl Grid {
    pub(crate) fn new(size: u16, policy: BoundaryPolicy) -> Grid {
        Grid {
            size: i32::from(size),
            policy,
        }
    }

    pub(crate) fn size(self) -> i32 {
        self.size
    }

    pub(crate) fn wraps(self) -> bool {
        self.policy == BoundaryPolicy::Toroidal
    }

    pub(crate) fn contains(self, cell: Cell) -> bool {
        (0..self.size).contains(&cell.x) && (0..self.size).contains(&cell.y)
    }

    /// Apply the boundary policy to `cell`.  On a toroidal grid, coordinates
    /// are reduced modulo the grid size; on a bounded grid, `cell` is
    /// returned as-is, possibly out of bounds.
    pub(crate) fn normalize(self, cell: Cell) -> Cell {
        match self.policy {
            BoundaryPolicy::Bounded => cell,
            BoundaryPolicy::Toroidal => Cell {
                x: cell.x.rem_euclid(self.size),
                y: cell.y.rem_euclid(self.size),
            },
        }
    }

    /// Iterate over every cell of the grid, row by row
    pub(crate) fn cells(self) -> impl Iterator<Item = Cell> {
        let size = self.size;
        (0..size).flat_map(move |y| (0..size).map(move |x| Cell { x, y }))
    }

    /// The number of cells in the grid
    pub(crate) fn area(self) -> usize {
        let side = usize::try_from(self.size).unwrap_or_default();
        side * side
    }
}
