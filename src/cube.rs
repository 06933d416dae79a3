//! Cube-wide cell state and animation scheduling.
//!
//! Provides [`Cube`], which owns the cell state array and the set of in-flight
//! fades, and the [`CellStrip`] trait for the LED strip hardware behind it.

use crate::animation::Animation;
use crate::colors;
use crate::time::{TimeInstant, TimeSource};
use crate::types::{CELL_COUNT, CellIndex, CellState, GRID_SIZE, cell_index};
use heapless::Vec;
use palette::Srgb;
use rand::Rng;
use rand::seq::SliceRandom;

/// Trait for abstracting the LED strip the cube is wired as.
///
/// Implement this for your strip driver (WS2812 over SPI, PIO, PWM+DMA, etc.).
pub trait CellStrip {
    /// Stages the color of one cell for the next frame.
    ///
    /// Color components are nominally 0.0-1.0 but are not clamped by the cube.
    /// Implementations should clamp and convert to their native format, e.g.
    /// with [`colors::to_rgb8`]. This method cannot fail.
    fn set_cell_color(&mut self, index: CellIndex, color: Srgb);

    /// Pushes all staged colors out to the strip as one frame.
    fn commit(&mut self);
}

/// Logical state of every cell in the cube.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellStates([CellState; CELL_COUNT]);

impl CellStates {
    /// Creates a state array with every cell idle.
    pub fn new() -> Self {
        Self([CellState::Idle; CELL_COUNT])
    }

    /// Returns the state of `cell`.
    ///
    /// # Panics
    /// Panics if `cell` is out of range.
    #[inline]
    pub fn get(&self, cell: CellIndex) -> CellState {
        self.0[cell.0]
    }

    /// Sets the state of `cell`.
    ///
    /// # Panics
    /// Panics if `cell` is out of range.
    #[inline]
    pub fn set(&mut self, cell: CellIndex, state: CellState) {
        self.0[cell.0] = state;
    }

    /// Counts cells in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.0.iter().filter(|s| **s == state).count()
    }

    /// Iterates over every cell with its state, in strip order.
    pub fn iter(&self) -> impl Iterator<Item = (CellIndex, CellState)> + '_ {
        self.0.iter().enumerate().map(|(i, s)| (CellIndex(i), *s))
    }
}

impl Default for CellStates {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when registering animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CubeError {
    /// The animation targets an index outside the cube.
    CellOutOfRange(CellIndex),

    /// The cell is already driven by an active animation.
    CellAlreadyAnimating(CellIndex),

    /// The active animation set is full.
    CapacityExceeded,
}

impl core::fmt::Display for CubeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CubeError::CellOutOfRange(cell) => {
                write!(f, "cell {} is outside the cube of {} cells", cell.0, CELL_COUNT)
            }
            CubeError::CellAlreadyAnimating(cell) => {
                write!(f, "cell {} already has an active animation", cell.0)
            }
            CubeError::CapacityExceeded => {
                write!(f, "active animation capacity exceeded")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CubeError {}

/// A 5x5x5 LED cube driven through a single strip.
///
/// Owns the strip, the logical state of each cell and the set of active fades.
/// A cell never has more than one active fade at a time.
///
/// # Type Parameters
/// * `I` - Time instant type
/// * `S` - Strip implementation type
pub struct Cube<I: TimeInstant, S: CellStrip> {
    strip: S,
    cells: CellStates,
    animations: Vec<Animation<I>, CELL_COUNT>,
}

impl<I: TimeInstant, S: CellStrip> Cube<I, S> {
    /// Creates a cube with every cell idle and no active animations.
    ///
    /// The strip is left untouched until the first tick.
    pub fn new(strip: S) -> Self {
        Self {
            strip,
            cells: CellStates::new(),
            animations: Vec::new(),
        }
    }

    /// Picks a random cell in `state` that no active animation is driving.
    ///
    /// Returns `None` when no such cell exists. Callers should treat that as
    /// "try again later".
    pub fn random_cell_with_state<R: Rng + ?Sized>(
        &self,
        state: CellState,
        rng: &mut R,
    ) -> Option<CellIndex> {
        let candidates: Vec<CellIndex, CELL_COUNT> = self
            .cells
            .iter()
            .filter(|(cell, s)| *s == state && !self.is_animating(*cell))
            .map(|(cell, _)| cell)
            .collect();

        candidates.choose(rng).copied()
    }

    /// Picks a uniformly random cell regardless of its state.
    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> CellIndex {
        let axis = 0..GRID_SIZE as u8;
        let x = rng.gen_range(axis.clone());
        let y = rng.gen_range(axis.clone());
        let z = rng.gen_range(axis);
        cell_index(x, y, z)
    }

    /// Adds an animation to the active set.
    ///
    /// # Errors
    /// * `CellOutOfRange` - The animation targets a cell outside the cube
    /// * `CellAlreadyAnimating` - Another active animation drives the same cell
    pub fn register(&mut self, animation: Animation<I>) -> Result<(), CubeError> {
        let cell = animation.cell();

        if !cell.is_valid() {
            return Err(CubeError::CellOutOfRange(cell));
        }

        if self.is_animating(cell) {
            return Err(CubeError::CellAlreadyAnimating(cell));
        }

        self.animations
            .push(animation)
            .map_err(|_| CubeError::CapacityExceeded)
    }

    /// Returns true if any animation is still in flight.
    pub fn has_active_animations(&self) -> bool {
        !self.animations.is_empty()
    }

    /// Returns true if an active animation drives `cell`.
    pub fn is_animating(&self, cell: CellIndex) -> bool {
        self.animations.iter().any(|a| a.cell() == cell)
    }

    /// Advances every active animation to `now` and commits the frame.
    ///
    /// Animations are ticked in registration order. Those that complete are
    /// dropped before the frame is committed.
    pub fn tick(&mut self, now: I) {
        let cells = &mut self.cells;
        let strip = &mut self.strip;
        self.animations
            .retain(|animation| animation.tick(now, cells, strip).is_running());

        strip.commit();
    }

    /// Ticks until no animations remain.
    ///
    /// Busy-polls `time_source` without sleeping between ticks.
    pub fn drain_all<T: TimeSource<I>>(&mut self, time_source: &T) {
        while self.has_active_animations() {
            self.tick(time_source.now());
        }
    }

    /// Turns every cell off immediately.
    ///
    /// Drops all in-flight animations without finishing them, marks every cell
    /// idle, writes black to the whole strip and commits. Use when shutting down.
    pub fn blackout(&mut self) {
        self.animations.clear();
        self.cells = CellStates::new();

        for i in 0..CELL_COUNT {
            self.strip.set_cell_color(CellIndex(i), colors::BLACK);
        }
        self.strip.commit();
    }

    /// Returns the state of `cell`.
    pub fn cell_state(&self, cell: CellIndex) -> CellState {
        self.cells.get(cell)
    }

    /// Returns the state of every cell.
    pub fn cells(&self) -> &CellStates {
        &self.cells
    }

    /// Returns the active animations in registration order.
    pub fn active_animations(&self) -> &[Animation<I>] {
        &self.animations
    }

    /// Returns a reference to the strip.
    pub fn strip(&self) -> &S {
        &self.strip
    }
}
