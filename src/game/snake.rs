use super::grid::Cell;
use crate::consts;
use std::collections::{HashSet, VecDeque};

/// The snake's body, stored head-first: the front is the head and the back
/// is the tail.
///
/// The body is never empty; every constructor produces at least one cell and
/// [`Snake::advance()`] grows the front before shrinking the back.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    body: VecDeque<Cell>,
}

impl Snake {
    /// Create the starting snake for a grid of `size` × `size` cells: a
    /// horizontal line of [`INITIAL_SNAKE_LENGTH`][consts::INITIAL_SNAKE_LENGTH]
    /// cells on the middle row, with its head just left of center.
    pub(crate) fn initial(size: i32) -> Snake {
        let mid = size / 2;
        Snake {
            body: (1..)
                .take(consts::INITIAL_SNAKE_LENGTH)
                .map(|i| Cell::new(mid - i, mid))
                .collect(),
        }
    }

    #[cfg(test)]
    pub(crate) fn from_cells<I: IntoIterator<Item = Cell>>(cells: I) -> Snake {
        let body = cells.into_iter().collect::<VecDeque<_>>();
        assert!(!body.is_empty(), "snake must have at least one cell");
        Snake { body }
    }

    /// Return the position of the snake's head
    ///
    /// # Panics
    ///
    /// Panics if the body is empty, which the type's invariant rules out.
    pub(crate) fn head(&self) -> Cell {
        *self.body.front().expect("snake body should not be empty")
    }

    /// Return the position of the last cell of the snake
    ///
    /// # Panics
    ///
    /// Panics if the body is empty, which the type's invariant rules out.
    pub(crate) fn tail(&self) -> Cell {
        *self.body.back().expect("snake body should not be empty")
    }

    pub(crate) fn len(&self) -> usize {
        self.body.len()
    }

    /// Iterate over the snake's cells from head to tail
    pub(crate) fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    pub(crate) fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    pub(crate) fn occupied(&self) -> HashSet<Cell> {
        self.cells().collect()
    }

    /// Move the head to `next_head`.  Unless `grew` is true, the tail moves
    /// up as well, leaving the length unchanged.
    pub(crate) fn advance(&mut self, next_head: Cell, grew: bool) {
        self.body.push_front(next_head);
        if !grew {
            let _ = self.body.pop_back();
        }
    }
}
