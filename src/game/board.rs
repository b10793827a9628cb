use super::direction::Direction;
use super::food::{place_food, RandomSource};
use super::grid::{Cell, Grid};
use super::snake::Snake;
use crate::consts;
use crate::options::TailRule;

/// The mutable state of one round: snake, food, score, and heading
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Board {
    grid: Grid,
    tail_rule: TailRule,
    pub(super) snake: Snake,
    /// `None` only once the snake has filled every cell
    pub(super) food: Option<Cell>,
    pub(super) score: u32,
    /// The direction the snake is actually moving in.  `None` until the
    /// player picks a first direction.
    pub(super) direction: Option<Direction>,
    /// The most recently requested direction, applied at the next step
    pub(super) pending: Option<Direction>,
}

impl Board {
    pub(crate) fn new<R: RandomSource + ?Sized>(
        grid: Grid,
        tail_rule: TailRule,
        random: &mut R,
    ) -> Board {
        let snake = Snake::initial(grid.size());
        let food = place_food(grid, &snake.occupied(), random);
        Board {
            grid,
            tail_rule,
            snake,
            food,
            score: 0,
            direction: None,
            pending: None,
        }
    }

    pub(crate) fn grid(&self) -> Grid {
        self.grid
    }

    /// Set the direction of travel outright, as happens when the player
    /// chooses the first direction of a round
    pub(crate) fn latch(&mut self, direction: Direction) {
        self.direction = Some(direction);
        self.pending = Some(direction);
    }

    /// Request a change of direction, to be applied at the next step
    pub(crate) fn request(&mut self, direction: Direction) {
        self.pending = Some(direction);
    }

    /// Apply the pending direction unless it would reverse the snake onto
    /// itself
    pub(crate) fn commit_direction(&mut self) {
        let Some(next) = self.pending else {
            return;
        };
        match self.direction {
            Some(current) if next.is_opposite(current) => (),
            _ => self.direction = Some(next),
        }
    }

    /// Advance the game by one tick
    pub(crate) fn step<R: RandomSource + ?Sized>(&mut self, random: &mut R) -> StepOutcome {
        self.commit_direction();
        let Some(direction) = self.direction else {
            return StepOutcome::Stalled;
        };
        let next_head = self.grid.normalize(direction.advance(self.snake.head()));
        let will_eat = self.food == Some(next_head);
        if self.collides(next_head, will_eat) {
            return StepOutcome::Collided(next_head);
        }
        self.snake.advance(next_head, will_eat);
        if !will_eat {
            return StepOutcome::Moved;
        }
        self.score += consts::SCORE_INCREMENT;
        self.food = place_food(self.grid, &self.snake.occupied(), random);
        if self.food.is_some() {
            StepOutcome::Ate
        } else {
            StepOutcome::BoardFull
        }
    }

    /// Return whether moving the head to `next_head` would kill the snake
    fn collides(&self, next_head: Cell, will_eat: bool) -> bool {
        if !self.grid.contains(next_head) {
            return true;
        }
        match self.tail_rule {
            TailRule::Strict => self.snake.contains(next_head),
            // The tail only stays put when the snake grows, so moving onto
            // it is otherwise legal.
            TailRule::VacateAware => {
                self.snake.contains(next_head) && (will_eat || next_head != self.snake.tail())
            }
        }
    }
}

/// The result of [`Board::step()`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum StepOutcome {
    /// No direction has been chosen yet, so nothing moved
    Stalled,

    /// The snake moved without eating
    Moved,

    /// The snake ate the food and grew; new food was placed
    Ate,

    /// The snake ate the food and grew, and there is nowhere left to put
    /// more food
    BoardFull,

    /// The snake's head would have hit a wall or the snake itself at the
    /// given cell.  Nothing was changed.
    Collided(Cell),
}
