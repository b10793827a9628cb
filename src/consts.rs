//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};
use std::time::Duration;

/// Default time between movements of the snake
pub(crate) const TICK_PERIOD: Duration = Duration::from_millis(140);

/// Default length of a side of the (square) grid
pub(crate) const DEFAULT_GRID_SIZE: u16 = 20;

/// Smallest grid that leaves room for the starting snake
pub(crate) const MIN_GRID_SIZE: u16 = 6;

/// Largest grid that fits in [`DISPLAY_SIZE`] along with the score bar and
/// hint line
pub(crate) const MAX_GRID_SIZE: u16 = 20;

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 24,
};

/// Length of the snake at the start of each round
pub(crate) const INITIAL_SNAKE_LENGTH: usize = 3;

/// How many points eating one piece of food is worth
pub(crate) const SCORE_INCREMENT: u32 = 1;

/// How many ticks the score bar stays highlighted after scoring
pub(crate) const SCORE_FLASH_TICKS: u8 = 3;

/// Glyph for the snake's head when it is moving up
pub(crate) const SNAKE_HEAD_UP_SYMBOL: char = 'v';

/// Glyph for the snake's head when it is moving down
pub(crate) const SNAKE_HEAD_DOWN_SYMBOL: char = '^';

/// Glyph for the snake's head when it is moving right
pub(crate) const SNAKE_HEAD_RIGHT_SYMBOL: char = '<';

/// Glyph for the snake's head when it is moving left
pub(crate) const SNAKE_HEAD_LEFT_SYMBOL: char = '>';

/// Glyph for the snake's head before a direction has been chosen
pub(crate) const SNAKE_HEAD_IDLE_SYMBOL: char = '@';

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '⚬';

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: char = '●';

/// Glyph for the snake's head when it's collided with a wall or itself
pub(crate) const COLLISION_SYMBOL: char = '×';

/// Style for the snake's head and body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style applied over the score bar for a moment after scoring
pub(crate) const SCORE_FLASH_STYLE: Style = Style::new()
    .fg(Color::Yellow)
    .add_modifier(Modifier::BOLD);

/// Number of BEL characters the terminal bell rings for eating
pub(crate) const EAT_BELLS: usize = 1;

/// Number of BEL characters the terminal bell rings for losing
pub(crate) const LOSE_BELLS: usize = 2;
