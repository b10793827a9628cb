mod board;
pub(crate) mod direction;
pub(crate) mod food;
pub(crate) mod grid;
mod overlay;
mod snake;
use self::board::{Board, StepOutcome};
use self::direction::Direction;
use self::food::{RandomSource, RngSource};
use self::grid::{Cell, Grid};
use self::overlay::Overlay;
use crate::consts;
use crate::options::Options;
use crate::scheduler::{DeadlineTimer, Scheduler};
use crate::util::{center_rect, get_display_area};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
};
use std::collections::vec_deque::{self, VecDeque};
use std::fmt;

/// A single-player game session: the board plus everything needed to drive
/// it from player input and timer firings
#[derive(Clone, Debug)]
pub(crate) struct GameSession<R = RngSource<rand::rngs::ThreadRng>, S = DeadlineTimer> {
    board: Board,
    status: Status,
    options: Options,
    random: R,
    scheduler: S,
    events: VecDeque<GameEvent>,
}

impl GameSession {
    pub(crate) fn new(options: Options) -> GameSession {
        GameSession::with_parts(options, RngSource(rand::rng()), DeadlineTimer::new())
    }
}

impl<R: RandomSource, S: Scheduler> GameSession<R, S> {
    pub(crate) fn with_parts(options: Options, mut random: R, scheduler: S) -> GameSession<R, S> {
        let board = Board::new(options.grid(), options.tail_rule(), &mut random);
        log::info!("New session: {options}");
        GameSession {
            board,
            status: Status::Ready,
            options,
            random,
            scheduler,
            events: VecDeque::new(),
        }
    }

    /// Discard the current round and set up a fresh one, waiting for the
    /// player to pick a direction
    pub(crate) fn reset(&mut self) {
        self.scheduler.cancel();
        self.board = Board::new(self.options.grid(), self.options.tail_rule(), &mut self.random);
        self.status = Status::Ready;
        self.events.push_back(GameEvent::Reset);
        log::debug!("Session reset");
    }

    /// Begin running the round.  If no direction has been chosen yet, this
    /// only prompts the player for one.
    pub(crate) fn start(&mut self) {
        if self.status.is_active() {
            return;
        }
        if self.status.is_over() {
            self.reset();
        }
        if self.board.direction.is_none() {
            self.status = Status::AwaitingDirection;
            return;
        }
        self.status = Status::Running;
        self.scheduler.schedule_next(self.options.tick_period.get());
        log::debug!("Session running");
    }

    /// Handle the player asking to move in `direction`
    pub(crate) fn steer(&mut self, direction: Direction) {
        if self.status.is_over() {
            self.reset();
        }
        if self.board.direction.is_none() {
            self.board.latch(direction);
            self.start();
        } else {
            self.board.request(direction);
        }
    }

    /// Pause a running game or resume a paused one.  Has no effect in any
    /// other state.
    pub(crate) fn toggle_pause(&mut self) {
        match self.status {
            Status::Running => self.status = Status::Paused,
            Status::Paused => self.status = Status::Running,
            _ => (),
        }
    }

    /// Reset and immediately try to start again
    pub(crate) fn restart(&mut self) {
        self.reset();
        self.start();
    }

    /// Respond to the scheduled timer firing.  A firing that arrives when
    /// nothing is pending is stale and does nothing.
    pub(crate) fn on_timer(&mut self) {
        if !self.scheduler.is_pending() {
            log::trace!("Ignoring stale timer firing");
            return;
        }
        self.scheduler.cancel();
        if !self.status.is_active() {
            return;
        }
        if self.status == Status::Running {
            self.advance();
        }
        if self.status.is_active() {
            self.scheduler.schedule_next(self.options.tick_period.get());
        }
    }

    fn advance(&mut self) {
        match self.board.step(&mut self.random) {
            StepOutcome::Stalled | StepOutcome::Moved => (),
            StepOutcome::Ate => self.scored(),
            StepOutcome::BoardFull => {
                self.scored();
                self.end(EndReason::BoardFull);
            }
            StepOutcome::Collided(cell) => {
                log::debug!("Snake collided at {cell}");
                self.end(EndReason::Collision);
            }
        }
    }

    fn scored(&mut self) {
        let score = self.board.score;
        log::debug!("Scored; score is now {score}");
        self.events.push_back(GameEvent::Scored { score });
    }

    fn end(&mut self, reason: EndReason) {
        self.scheduler.cancel();
        self.status = Status::GameOver(reason);
        let score = self.board.score;
        log::info!(
            "Game over ({reason}); final score {score}, snake length {}",
            self.board.snake.len()
        );
        self.events.push_back(GameEvent::GameOver { reason, score });
    }
}

impl<R, S> GameSession<R, S> {
    pub(crate) fn status(&self) -> Status {
        self.status
    }

    pub(crate) fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Take all notification events emitted since the last call
    pub(crate) fn drain_events(&mut self) -> vec_deque::Drain<'_, GameEvent> {
        self.events.drain(..)
    }

    /// Return a read-only copy of everything needed to draw the game
    pub(crate) fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid: self.board.grid(),
            snake: self.board.snake.cells().collect(),
            food: self.board.food,
            score: self.board.score,
            status: self.status,
            direction: self.board.direction,
        }
    }
}

/// Where a session is in its lifecycle
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Status {
    /// Freshly reset; no direction chosen yet
    Ready,

    /// The player asked to start but has not yet chosen a direction
    AwaitingDirection,

    Running,

    Paused,

    GameOver(EndReason),
}

impl Status {
    pub(crate) fn label(self) -> &'static str {
        match self {
            Status::Ready => "Ready",
            Status::AwaitingDirection => "Press a direction",
            Status::Running => "Running",
            Status::Paused => "Paused",
            Status::GameOver(_) => "Game Over",
        }
    }

    /// Return whether the timer should be ticking in this state
    pub(crate) fn is_active(self) -> bool {
        matches!(self, Status::Running | Status::Paused)
    }

    pub(crate) fn is_over(self) -> bool {
        matches!(self, Status::GameOver(_))
    }
}

/// Why a round ended
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum EndReason {
    /// The snake ran into a wall or itself
    Collision,

    /// The snake filled the board, leaving no room for more food
    BoardFull,
}

impl fmt::Display for EndReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndReason::Collision => write!(f, "collision"),
            EndReason::BoardFull => write!(f, "board full"),
        }
    }
}

/// Notifications for feedback consumers
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum GameEvent {
    Scored { score: u32 },
    GameOver { reason: EndReason, score: u32 },
    Reset,
}

/// Everything the renderer needs to know about a session at one instant
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snapshot {
    pub(crate) grid: Grid,
    /// The snake's cells, head first
    pub(crate) snake: Vec<Cell>,
    pub(crate) food: Option<Cell>,
    pub(crate) score: u32,
    pub(crate) status: Status,
    pub(crate) direction: Option<Direction>,
}

impl Snapshot {
    fn head_symbol(&self) -> char {
        match self.direction {
            Some(Direction::Up) => consts::SNAKE_HEAD_UP_SYMBOL,
            Some(Direction::Down) => consts::SNAKE_HEAD_DOWN_SYMBOL,
            Some(Direction::Left) => consts::SNAKE_HEAD_LEFT_SYMBOL,
            Some(Direction::Right) => consts::SNAKE_HEAD_RIGHT_SYMBOL,
            None => consts::SNAKE_HEAD_IDLE_SYMBOL,
        }
    }

    fn hint_line(&self) -> Line<'static> {
        let mut line = Line::default();
        let keys: &[(&str, &'static str)] = match self.status {
            Status::Ready | Status::AwaitingDirection => &[("Start", "←↓↑→"), ("Quit", "q")],
            Status::Running => &[("Pause", "p"), ("Restart", "r"), ("Quit", "q")],
            Status::Paused => &[("Resume", "p"), ("Restart", "r"), ("Quit", "q")],
            Status::GameOver(_) => &[("Play Again", "r"), ("Quit", "q")],
        };
        for (i, &(action, key)) in keys.iter().enumerate() {
            if i == 0 {
                line.push_span(" ");
            } else {
                line.push_span(" — ");
            }
            line.push_span(format!("{action} ("));
            line.push_span(Span::styled(key, consts::KEY_STYLE));
            line.push_span(")");
        }
        line
    }
}

impl Widget for &Snapshot {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [score_area, block_area, hint_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(display);
        Line::styled(format!(" Score: {}", self.score), consts::SCORE_BAR_STYLE)
            .render(score_area, buf);
        let [_, status_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(20)]).areas(score_area);
        Line::styled(format!("{} ", self.status.label()), consts::SCORE_BAR_STYLE)
            .right_aligned()
            .render(status_area, buf);

        let side = u16::try_from(self.grid.size())
            .unwrap_or(u16::MAX)
            .saturating_add(2);
        let block_area = center_rect(
            block_area,
            Size {
                width: side,
                height: side,
            },
        );
        if self.grid.wraps() {
            DottedBorder.render(block_area, buf);
        } else {
            Block::bordered().render(block_area, buf);
        }

        let level_area = block_area.inner(Margin::new(1, 1));
        let mut level = Canvas {
            area: level_area,
            buf,
        };
        for &cell in self.snake.iter().skip(1) {
            level.draw_cell(cell, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
        }
        if let Some(food) = self.food {
            level.draw_cell(food, consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        }
        // Draw the head last so that, if it's a collision, we overwrite
        // whatever it's colliding with
        if let Some(&head) = self.snake.first() {
            if self.status == Status::GameOver(EndReason::Collision) {
                level.draw_cell(head, consts::COLLISION_SYMBOL, consts::COLLISION_STYLE);
            } else {
                level.draw_cell(head, self.head_symbol(), consts::SNAKE_STYLE);
            }
        }

        if let Some(overlay) = Overlay::for_snapshot(self) {
            overlay.render(center_rect(display, overlay.size()), buf);
        }

        self.hint_line().render(hint_area, buf);
    }
}

#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn position(&self, cell: Cell) -> Option<(u16, u16)> {
        let x = self.area.x.checked_add(u16::try_from(cell.x).ok()?)?;
        let y = self.area.y.checked_add(u16::try_from(cell.y).ok()?)?;
        Some((x, y))
    }

    fn draw_char(&mut self, cell: Cell, symbol: char) {
        let Some(pos) = self.position(cell) else {
            return;
        };
        if let Some(c) = self.buf.cell_mut(pos) {
            c.set_char(symbol);
        }
    }

    fn draw_cell(&mut self, cell: Cell, symbol: char, style: Style) {
        let Some(pos) = self.position(cell) else {
            return;
        };
        if let Some(c) = self.buf.cell_mut(pos) {
            c.set_char(symbol);
            c.set_style(Style::reset().patch(style));
        }
    }
}

/// Border drawn around a toroidal grid, to show that the edges are open
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct DottedBorder;

impl Widget for DottedBorder {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let max_x = i32::from(area.width.saturating_sub(1));
        let max_y = i32::from(area.height.saturating_sub(1));
        let mut canvas = Canvas { area, buf };
        canvas.draw_char(Cell::new(0, 0), '·');
        canvas.draw_char(Cell::new(max_x, 0), '·');
        canvas.draw_char(Cell::new(max_x, max_y), '·');
        canvas.draw_char(Cell::new(0, max_y), '·');
        for x in 1..max_x {
            canvas.draw_char(Cell::new(x, 0), '⋯');
            canvas.draw_char(Cell::new(x, max_y), '⋯');
        }
        for y in 1..max_y {
            canvas.draw_char(Cell::new(0, y), '⋮');
            canvas.draw_char(Cell::new(max_x, y), '⋮');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::snake::Snake;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use std::time::Duration;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    /// A scheduler that only records what was asked of it
    #[derive(Clone, Debug, Default, Eq, PartialEq)]
    struct ManualScheduler {
        pending: Option<Duration>,
        scheduled: usize,
    }

    impl Scheduler for ManualScheduler {
        fn schedule_next(&mut self, delay: Duration) {
            self.pending = Some(delay);
            self.scheduled += 1;
        }

        fn cancel(&mut self) {
            self.pending = None;
        }

        fn is_pending(&self) -> bool {
            self.pending.is_some()
        }
    }

    type TestSession = GameSession<RngSource<ChaCha12Rng>, ManualScheduler>;

    fn session(options: Options) -> TestSession {
        GameSession::with_parts(
            options,
            RngSource(ChaCha12Rng::seed_from_u64(RNG_SEED)),
            ManualScheduler::default(),
        )
    }

    fn wraparound() -> Options {
        Options {
            wraparound: true,
            ..Options::default()
        }
    }

    fn cells(coords: &[(i32, i32)]) -> Vec<Cell> {
        coords.iter().map(|&(x, y)| Cell::new(x, y)).collect()
    }

    fn place<R, S>(session: &mut GameSession<R, S>, snake: &[(i32, i32)], food: (i32, i32)) {
        place_cells(session, snake);
        session.board.food = Some(Cell::new(food.0, food.1));
    }

    fn place_cells<R, S>(session: &mut GameSession<R, S>, snake: &[(i32, i32)]) {
        session.board.snake = Snake::from_cells(cells(snake));
    }

    #[test]
    fn new_session() {
        let mut session = session(Options::default());
        let snap = session.snapshot();
        assert_eq!(snap.status, Status::Ready);
        assert_eq!(snap.score, 0);
        assert_eq!(snap.snake, cells(&[(9, 10), (8, 10), (7, 10)]));
        assert_eq!(snap.direction, None);
        let food = snap.food.unwrap();
        assert!(!snap.snake.contains(&food));
        assert!(!session.scheduler().is_pending());
        assert_eq!(session.drain_events().count(), 0);
    }

    #[test]
    fn start_without_direction() {
        let mut session = session(Options::default());
        session.start();
        assert_eq!(session.status(), Status::AwaitingDirection);
        assert_eq!(session.status().label(), "Press a direction");
        assert!(!session.scheduler().is_pending());
        session.on_timer();
        assert_eq!(session.snapshot().snake, cells(&[(9, 10), (8, 10), (7, 10)]));
    }

    #[test]
    fn first_direction_starts() {
        let mut session = session(Options::default());
        session.steer(Direction::Up);
        assert_eq!(session.status(), Status::Running);
        assert_eq!(session.snapshot().direction, Some(Direction::Up));
        assert_eq!(session.scheduler().pending, Some(Duration::from_millis(140)));
        session.on_timer();
        assert_eq!(session.snapshot().snake[0], Cell::new(9, 9));
        assert!(session.scheduler().is_pending());
        assert_eq!(session.scheduler().scheduled, 2);
    }

    #[test]
    fn stale_firing_is_ignored() {
        let mut session = session(Options::default());
        session.steer(Direction::Up);
        session.scheduler.cancel();
        session.on_timer();
        assert_eq!(session.snapshot().snake[0], Cell::new(9, 10));
        assert_eq!(session.status(), Status::Running);
        assert!(!session.scheduler().is_pending());
    }

    #[test]
    fn first_direction_may_reverse_the_starting_line() {
        // No direction is committed yet, so even "backwards" is accepted.
        let mut session = session(wraparound());
        session.steer(Direction::Left);
        assert_eq!(session.snapshot().direction, Some(Direction::Left));
    }

    #[test]
    fn eat_after_six_ticks() {
        let mut session = session(Options::default());
        place(&mut session, &[(9, 10), (8, 10), (7, 10)], (15, 10));
        session.steer(Direction::Right);
        for _ in 0..5 {
            session.on_timer();
            assert_eq!(session.snapshot().snake.len(), 3);
            assert_eq!(session.snapshot().score, 0);
        }
        session.on_timer();
        let snap = session.snapshot();
        assert_eq!(snap.snake[0], Cell::new(15, 10));
        assert_eq!(snap.score, 1);
        assert_eq!(snap.snake.len(), 4);
        let food = snap.food.unwrap();
        assert!(!cells(&[(15, 10), (14, 10), (13, 10), (12, 10)]).contains(&food));
        assert_eq!(
            session.drain_events().collect::<Vec<_>>(),
            [GameEvent::Scored { score: 1 }]
        );
        assert_eq!(session.status(), Status::Running);
    }

    #[test]
    fn bounded_wall_collision() {
        let mut session = session(Options::default());
        place(&mut session, &[(0, 0), (1, 0), (2, 0)], (10, 10));
        session.steer(Direction::Left);
        session.on_timer();
        assert_eq!(session.status(), Status::GameOver(EndReason::Collision));
        assert_eq!(session.snapshot().score, 0);
        assert!(!session.scheduler().is_pending());
        assert_eq!(
            session.drain_events().collect::<Vec<_>>(),
            [GameEvent::GameOver {
                reason: EndReason::Collision,
                score: 0
            }]
        );
        // A stale firing does nothing
        let before = session.snapshot();
        session.on_timer();
        assert_eq!(session.snapshot(), before);
        assert!(!session.scheduler().is_pending());
    }

    #[test]
    fn toroidal_wrap_into_body() {
        let mut session = session(wraparound());
        place(&mut session, &[(0, 10), (19, 10), (18, 10)], (5, 5));
        session.steer(Direction::Left);
        session.on_timer();
        assert_eq!(session.status(), Status::GameOver(EndReason::Collision));
    }

    #[test]
    fn toroidal_wrap_around_edge() {
        let mut session = session(wraparound());
        place(&mut session, &[(0, 10), (1, 10), (2, 10)], (5, 5));
        session.steer(Direction::Left);
        session.on_timer();
        assert_eq!(session.status(), Status::Running);
        assert_eq!(session.snapshot().snake, cells(&[(19, 10), (0, 10), (1, 10)]));
    }

    #[test]
    fn opposite_request_ignored() {
        let mut session = session(Options::default());
        session.steer(Direction::Right);
        session.steer(Direction::Left);
        session.on_timer();
        assert_eq!(session.status(), Status::Running);
        assert_eq!(session.snapshot().direction, Some(Direction::Right));
        assert_eq!(session.snapshot().snake[0], Cell::new(10, 10));
    }

    #[test]
    fn turn_applies_at_next_tick() {
        let mut session = session(Options::default());
        session.steer(Direction::Right);
        session.steer(Direction::Up);
        assert_eq!(session.snapshot().direction, Some(Direction::Right));
        session.on_timer();
        assert_eq!(session.snapshot().direction, Some(Direction::Up));
        assert_eq!(session.snapshot().snake[0], Cell::new(9, 9));
    }

    #[test]
    fn pause_twice_is_identity() {
        let mut session = session(Options::default());
        session.steer(Direction::Down);
        session.on_timer();
        let snap = session.snapshot();
        let scheduler = session.scheduler().clone();
        session.toggle_pause();
        assert_eq!(session.status(), Status::Paused);
        session.toggle_pause();
        assert_eq!(session.status(), Status::Running);
        assert_eq!(session.snapshot(), snap);
        assert_eq!(session.scheduler(), &scheduler);
    }

    #[test]
    fn pause_when_not_started() {
        let mut session = session(Options::default());
        session.toggle_pause();
        assert_eq!(session.status(), Status::Ready);
        session.start();
        session.toggle_pause();
        assert_eq!(session.status(), Status::AwaitingDirection);
    }

    #[test]
    fn paused_firing_skips_step() {
        let mut session = session(Options::default());
        session.steer(Direction::Down);
        session.toggle_pause();
        let snap = session.snapshot();
        session.on_timer();
        assert_eq!(session.snapshot(), snap);
        assert!(session.scheduler().is_pending());
        assert_eq!(session.scheduler().scheduled, 2);
        session.toggle_pause();
        session.on_timer();
        assert_eq!(session.snapshot().snake[0], Cell::new(9, 11));
    }

    #[test]
    fn reset_clears_everything() {
        let mut session = session(Options::default());
        place(&mut session, &[(9, 10), (8, 10), (7, 10)], (10, 10));
        session.steer(Direction::Right);
        session.on_timer();
        assert_eq!(session.snapshot().score, 1);
        session.reset();
        let snap = session.snapshot();
        assert_eq!(snap.status, Status::Ready);
        assert_eq!(snap.score, 0);
        assert_eq!(snap.direction, None);
        assert_eq!(snap.snake, cells(&[(9, 10), (8, 10), (7, 10)]));
        assert!(!session.scheduler().is_pending());
        assert_eq!(
            session.drain_events().collect::<Vec<_>>(),
            [GameEvent::Scored { score: 1 }, GameEvent::Reset]
        );
    }

    #[test]
    fn direction_after_game_over_restarts() {
        let mut session = session(Options::default());
        place(&mut session, &[(0, 0), (1, 0), (2, 0)], (10, 10));
        session.steer(Direction::Left);
        session.on_timer();
        assert!(session.status().is_over());
        session.steer(Direction::Up);
        assert_eq!(session.status(), Status::Running);
        let snap = session.snapshot();
        assert_eq!(snap.direction, Some(Direction::Up));
        assert_eq!(snap.snake, cells(&[(9, 10), (8, 10), (7, 10)]));
        assert!(session.scheduler().is_pending());
        let events = session.drain_events().collect::<Vec<_>>();
        assert_eq!(events.last(), Some(&GameEvent::Reset));
    }

    #[test]
    fn start_after_game_over_resets() {
        let mut session = session(Options::default());
        place(&mut session, &[(0, 0), (1, 0), (2, 0)], (10, 10));
        session.steer(Direction::Left);
        session.on_timer();
        session.start();
        assert_eq!(session.status(), Status::AwaitingDirection);
        assert_eq!(session.snapshot().direction, None);
    }

    #[test]
    fn restart() {
        let mut session = session(Options::default());
        session.steer(Direction::Up);
        session.on_timer();
        session.restart();
        assert_eq!(session.status(), Status::AwaitingDirection);
        assert!(!session.scheduler().is_pending());
        assert_eq!(session.snapshot().snake[0], Cell::new(9, 10));
    }

    #[test]
    fn score_is_monotonic() {
        let mut session = session(wraparound());
        session.steer(Direction::Right);
        let mut last_score = 0;
        let mut last_len = 3;
        for _ in 0..400 {
            session.on_timer();
            if session.status().is_over() {
                break;
            }
            let snap = session.snapshot();
            assert!(snap.score == last_score || snap.score == last_score + 1);
            assert_eq!(snap.snake.len(), last_len + (snap.score - last_score) as usize);
            if let Some(food) = snap.food {
                assert!(!snap.snake.contains(&food));
            }
            last_score = snap.score;
            last_len = snap.snake.len();
        }
    }

    #[test]
    fn board_full_ends_game() {
        let options = Options {
            grid_size: crate::options::GridSize::new(6).unwrap(),
            ..Options::default()
        };
        let mut session = session(options);
        let mut body = Vec::new();
        for y in 0..6 {
            if y % 2 == 0 {
                body.extend((0..6).map(|x| (x, y)));
            } else {
                body.extend((0..6).rev().map(|x| (x, y)));
            }
        }
        let food = body.pop().unwrap();
        body.reverse();
        place(&mut session, &body, food);
        session.steer(Direction::Left);
        session.on_timer();
        assert_eq!(session.status(), Status::GameOver(EndReason::BoardFull));
        assert_eq!(session.snapshot().food, None);
        assert!(!session.scheduler().is_pending());
        assert_eq!(
            session.drain_events().collect::<Vec<_>>(),
            [
                GameEvent::Scored { score: 1 },
                GameEvent::GameOver {
                    reason: EndReason::BoardFull,
                    score: 1
                }
            ]
        );
    }

    #[test]
    fn closure_random_source() {
        let mut session =
            GameSession::with_parts(Options::default(), || 0.0, ManualScheduler::default());
        assert_eq!(session.snapshot().food, Some(Cell::new(0, 0)));
        session.reset();
        assert_eq!(session.snapshot().food, Some(Cell::new(0, 0)));
    }

    fn row(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect::<String>()
    }

    fn render(snap: &Snapshot) -> Buffer {
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        snap.render(area, &mut buffer);
        buffer
    }

    #[test]
    fn render_new_game() {
        let session =
            GameSession::with_parts(Options::default(), || 0.0, ManualScheduler::default());
        let buffer = render(&session.snapshot());
        assert_eq!(row(&buffer, 0), format!("{:<74}{:<6}", " Score: 0", "Ready"));
        assert_eq!(row(&buffer, 1).trim(), format!("┌{}┐", "─".repeat(20)));
        assert_eq!(row(&buffer, 2).trim(), format!("│●{}│", " ".repeat(19)));
        assert_eq!(
            row(&buffer, 12).trim(),
            format!("│{}⚬⚬@{}│", " ".repeat(7), " ".repeat(10))
        );
        assert_eq!(row(&buffer, 22).trim(), format!("└{}┘", "─".repeat(20)));
        assert_eq!(row(&buffer, 23).trim_end(), " Start (←↓↑→) — Quit (q)");
        assert_eq!(buffer[(39, 12)].style().fg, consts::SNAKE_STYLE.fg);
        assert_eq!(buffer[(30, 2)].style().fg, consts::FOOD_STYLE.fg);
    }

    #[test]
    fn render_wraparound_border() {
        let session = GameSession::with_parts(wraparound(), || 0.0, ManualScheduler::default());
        let buffer = render(&session.snapshot());
        assert_eq!(row(&buffer, 1).trim(), format!("·{}·", "⋯".repeat(20)));
        assert_eq!(
            row(&buffer, 12).trim(),
            format!("⋮{}⚬⚬@{}⋮", " ".repeat(7), " ".repeat(10))
        );
        assert_eq!(row(&buffer, 22).trim(), format!("·{}·", "⋯".repeat(20)));
    }

    #[test]
    fn render_running_head() {
        let mut session =
            GameSession::with_parts(Options::default(), || 0.0, ManualScheduler::default());
        session.steer(Direction::Up);
        session.on_timer();
        let buffer = render(&session.snapshot());
        assert_eq!(buffer[(39, 11)].symbol(), "v");
        assert_eq!(buffer[(39, 12)].symbol(), "⚬");
        assert_eq!(buffer[(38, 12)].symbol(), "⚬");
        assert_eq!(buffer[(37, 12)].symbol(), " ");
        assert!(row(&buffer, 0).ends_with("Running "));
        assert_eq!(
            row(&buffer, 23).trim_end(),
            " Pause (p) — Restart (r) — Quit (q)"
        );
    }

    #[test]
    fn render_collision() {
        let mut session =
            GameSession::with_parts(Options::default(), || 0.0, ManualScheduler::default());
        place_cells(&mut session, &[(0, 5), (1, 5), (2, 5)]);
        session.steer(Direction::Left);
        session.on_timer();
        let buffer = render(&session.snapshot());
        assert_eq!(buffer[(30, 7)].symbol(), "×");
        assert_eq!(buffer[(30, 7)].style().fg, consts::COLLISION_STYLE.fg);
        assert!(row(&buffer, 0).ends_with("Game Over "));
        assert!((0..24).any(|y| row(&buffer, y).contains("You crashed!")));
    }

    #[test]
    fn render_paused() {
        let mut session =
            GameSession::with_parts(Options::default(), || 0.0, ManualScheduler::default());
        session.steer(Direction::Up);
        session.toggle_pause();
        let buffer = render(&session.snapshot());
        assert!((0..24).any(|y| row(&buffer, y).contains("PAUSED")));
        assert!((0..24).any(|y| row(&buffer, y).contains("Press p to resume")));
    }
}
