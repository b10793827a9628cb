use super::grid::{Cell, Grid};
use rand::Rng;
use std::collections::HashSet;

/// A source of uniformly-distributed floats in `[0, 1)`
///
/// Any `FnMut() -> f64` closure can serve as a source, which lets tests
/// script exactly where food lands.
pub(crate) trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl<F: FnMut() -> f64> RandomSource for F {
    fn next_unit(&mut self) -> f64 {
        self()
    }
}

/// Adapter for using a [`rand::Rng`] as a [`RandomSource`]
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct RngSource<R>(pub(crate) R);

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.0.random::<f64>()
    }
}

/// Choose a cell of `grid` not in `occupied`, uniformly at random.  Returns
/// `None` if every cell is occupied.
pub(crate) fn place_food<R: RandomSource + ?Sized>(
    grid: Grid,
    occupied: &HashSet<Cell>,
    random: &mut R,
) -> Option<Cell> {
    let mut open = Vec::with_capacity(grid.area().saturating_sub(occupied.len()));
    open.extend(grid.cells().filter(|c| !occupied.contains(c)));
    if open.is_empty() {
        return None;
    }
    let i = scale_index(random.next_unit(), open.len());
    open.get(i).copied()
}

/// Map `r` in `[0, 1)` to an index in `0..len`.  Out-of-range values are
/// clamped.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
fn scale_index(r: f64, len: usize) -> usize {
    let i = (r.clamp(0.0, 1.0) * len as f64).floor() as usize;
    i.min(len.saturating_sub(1))
}
