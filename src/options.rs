//! Gameplay options, fixed for the lifetime of a session
use crate::consts;
use crate::game::grid::{BoundaryPolicy, Grid};
use serde::Deserialize;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(try_from = "RawOptions")]
pub(crate) struct Options {
    pub(crate) wraparound: bool,
    pub(crate) grid_size: GridSize,
    pub(crate) tick_period: TickPeriod,

    /// Explicit choice of collision rule.  When `None`, the rule follows the
    /// boundary policy; see [`TailRule::for_policy()`].
    pub(crate) tail_rule: Option<TailRule>,
}

impl Options {
    pub(crate) fn boundary(&self) -> BoundaryPolicy {
        if self.wraparound {
            BoundaryPolicy::Toroidal
        } else {
            BoundaryPolicy::Bounded
        }
    }

    pub(crate) fn grid(&self) -> Grid {
        Grid::new(self.grid_size.get(), self.boundary())
    }

    pub(crate) fn tail_rule(&self) -> TailRule {
        self.tail_rule.unwrap_or_else(|| TailRule::for_policy(self.boundary()))
    }
}

impl fmt::Display for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{size}x{size} {boundary} grid, {rule} tail rule, {ms}ms ticks",
            size = self.grid_size,
            boundary = if self.wraparound { "toroidal" } else { "bounded" },
            rule = self.tail_rule(),
            ms = self.tick_period.get().as_millis(),
        )
    }
}

/// Which snake cells count as obstacles for the head's next move
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum TailRule {
    /// Every current segment is an obstacle, including the tail, even though
    /// it is about to move
    Strict,

    /// The tail is only an obstacle when the snake is about to eat (and
    /// therefore grow instead of moving its tail)
    VacateAware,
}

impl TailRule {
    pub(crate) fn for_policy(policy: BoundaryPolicy) -> TailRule {
        match policy {
            BoundaryPolicy::Bounded => TailRule::Strict,
            BoundaryPolicy::Toroidal => TailRule::VacateAware,
        }
    }
}

impl fmt::Display for TailRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TailRule::Strict => "strict",
            TailRule::VacateAware => "vacate-aware",
        };
        f.pad(name)
    }
}

/// The length of a side of the grid
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct GridSize(u16);

impl GridSize {
    pub(crate) fn new(size: u16) -> Option<GridSize> {
        (consts::MIN_GRID_SIZE..=consts::MAX_GRID_SIZE)
            .contains(&size)
            .then_some(GridSize(size))
    }

    pub(crate) fn get(self) -> u16 {
        self.0
    }
}

impl Default for GridSize {
    fn default() -> GridSize {
        GridSize(consts::DEFAULT_GRID_SIZE)
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0.to_string())
    }
}

/// The time between movements of the snake
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct TickPeriod(Duration);

impl TickPeriod {
    pub(crate) fn from_millis(ms: u64) -> Option<TickPeriod> {
        (ms > 0).then(|| TickPeriod(Duration::from_millis(ms)))
    }

    pub(crate) fn get(self) -> Duration {
        self.0
    }
}

impl Default for TickPeriod {
    fn default() -> TickPeriod {
        TickPeriod(consts::TICK_PERIOD)
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
struct RawOptions {
    wraparound: bool,
    grid_size: u16,
    tick_ms: u64,
    tail_rule: Option<TailRule>,
}

impl Default for RawOptions {
    fn default() -> RawOptions {
        let opts = Options::default();
        RawOptions {
            wraparound: opts.wraparound,
            grid_size: opts.grid_size.get(),
            tick_ms: u64::try_from(opts.tick_period.get().as_millis()).unwrap_or(u64::MAX),
            tail_rule: None,
        }
    }
}

impl TryFrom<RawOptions> for Options {
    type Error = OptionsError;

    fn try_from(value: RawOptions) -> Result<Options, OptionsError> {
        Ok(Options {
            wraparound: value.wraparound,
            grid_size: GridSize::new(value.grid_size)
                .ok_or(OptionsError::GridSize(value.grid_size))?,
            tick_period: TickPeriod::from_millis(value.tick_ms).ok_or(OptionsError::TickPeriod)?,
            tail_rule: value.tail_rule,
        })
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum OptionsError {
    #[error(
        "grid size {0} is out of range (must be from {min} to {max})",
        min = consts::MIN_GRID_SIZE,
        max = consts::MAX_GRID_SIZE
    )]
    GridSize(u16),
    #[error("tick period must be greater than zero")]
    TickPeriod,
}
