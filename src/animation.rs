//! Per-cell fade animations.

use crate::colors;
use crate::cube::{CellStates, CellStrip};
use crate::time::{TimeDuration, TimeInstant};
use crate::types::{CellIndex, CellState};
use palette::Srgb;

/// Direction of a fade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FadeKind {
    /// Black up to the target color. Marks the cell active.
    FadeIn,
    /// Target color down to black. Marks the cell idle once finished.
    FadeOut,
}

/// Result of advancing an animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FadeStatus {
    /// Fade still in progress, tick again.
    Running,
    /// Fade finished. The final color has been written.
    Complete,
}

impl FadeStatus {
    /// Returns true while the fade needs further ticks.
    #[inline]
    pub fn is_running(&self) -> bool {
        *self == FadeStatus::Running
    }
}

/// Animation construction errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnimationError {
    /// Fades require a non-zero duration.
    ZeroDuration,
}

impl core::fmt::Display for AnimationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AnimationError::ZeroDuration => {
                write!(f, "fade duration must be greater than zero")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AnimationError {}

/// A timed linear fade of one cell between black and a color.
///
/// Each tick is a pure function of the time elapsed since `started`, so ticking
/// twice at the same instant writes the same color.
///
/// # Type Parameters
/// * `I` - Time instant type
#[derive(Debug, Clone, Copy)]
pub struct Animation<I: TimeInstant> {
    kind: FadeKind,
    cell: CellIndex,
    color: Srgb,
    started: I,
    duration: I::Duration,
}

impl<I: TimeInstant> Animation<I> {
    /// Creates a fade of `kind` on `cell`.
    ///
    /// # Errors
    /// * `ZeroDuration` - `duration` is zero
    pub fn new(
        kind: FadeKind,
        cell: CellIndex,
        color: Srgb,
        started: I,
        duration: I::Duration,
    ) -> Result<Self, AnimationError> {
        if duration.as_micros() == 0 {
            return Err(AnimationError::ZeroDuration);
        }

        Ok(Self {
            kind,
            cell,
            color,
            started,
            duration,
        })
    }

    /// Creates a fade from black up to `color`.
    pub fn fade_in(
        cell: CellIndex,
        color: Srgb,
        started: I,
        duration: I::Duration,
    ) -> Result<Self, AnimationError> {
        Self::new(FadeKind::FadeIn, cell, color, started, duration)
    }

    /// Creates a fade from `color` down to black.
    pub fn fade_out(
        cell: CellIndex,
        color: Srgb,
        started: I,
        duration: I::Duration,
    ) -> Result<Self, AnimationError> {
        Self::new(FadeKind::FadeOut, cell, color, started, duration)
    }

    /// Advances the fade to `now`, writing the cell color to `strip`.
    ///
    /// A fade-in marks its cell active on every tick, not only when it
    /// finishes. A fade-out marks its cell idle only on completion. The fade
    /// completes once the elapsed time strictly exceeds the duration.
    ///
    /// # Panics
    /// Panics if the cell is outside the cube. [`Cube::register`] rejects such
    /// animations, so fades ticked through a cube never panic.
    ///
    /// [`Cube::register`]: crate::Cube::register
    pub fn tick<S: CellStrip>(&self, now: I, cells: &mut CellStates, strip: &mut S) -> FadeStatus {
        let elapsed = now.duration_since(self.started).as_micros();
        let duration = self.duration.as_micros();

        match self.kind {
            FadeKind::FadeIn => {
                cells.set(self.cell, CellState::Active);

                if elapsed > duration {
                    strip.set_cell_color(self.cell, self.color);
                    return FadeStatus::Complete;
                }

                let factor = elapsed as f32 / duration as f32;
                strip.set_cell_color(self.cell, colors::scale(self.color, factor));
                FadeStatus::Running
            }
            FadeKind::FadeOut => {
                if elapsed > duration {
                    strip.set_cell_color(self.cell, colors::BLACK);
                    cells.set(self.cell, CellState::Idle);
                    return FadeStatus::Complete;
                }

                let factor = (duration - elapsed) as f32 / duration as f32;
                strip.set_cell_color(self.cell, colors::scale(self.color, factor));
                FadeStatus::Running
            }
        }
    }

    /// Returns the fade direction.
    pub fn kind(&self) -> FadeKind {
        self.kind
    }

    /// Returns the cell this fade drives.
    pub fn cell(&self) -> CellIndex {
        self.cell
    }

    /// Returns the target color.
    pub fn color(&self) -> Srgb {
        self.color
    }

    /// Returns the instant the fade started.
    pub fn started(&self) -> I {
        self.started
    }

    /// Returns the fade duration.
    pub fn duration(&self) -> I::Duration {
        self.duration
    }
}
