//! The sparkle choreography.
//!
//! One sparkle sequence picks a random color and runs three phases over a
//! [`Cube`]:
//!
//! 1. **Ignite** - fade in `fill_count` idle cells, staggered by random jitter.
//! 2. **Churn** - for the churn window, keep swapping a random idle cell in and
//!    a random active cell out.
//! 3. **Extinguish** - fade out `fill_count` active cells.
//!
//! Then it lets every in-flight fade finish. Every phase busy-polls the time
//! source and ticks the cube on each iteration rather than sleeping, so fades
//! are rendered as fast as the loop spins.

use crate::animation::{Animation, AnimationError};
use crate::colors;
use crate::config::{ConfigError, SparkleConfig};
use crate::cube::{CellStrip, Cube, CubeError};
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use crate::types::CellState;
use palette::Srgb;
use rand::Rng;

/// Errors that can occur while running a sparkle sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SparkleError {
    /// The configuration is invalid.
    Config(ConfigError),

    /// A fade could not be created.
    Animation(AnimationError),

    /// A fade could not be registered with the cube.
    Cube(CubeError),
}

impl core::fmt::Display for SparkleError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SparkleError::Config(err) => write!(f, "invalid sparkle config: {}", err),
            SparkleError::Animation(err) => write!(f, "animation error: {}", err),
            SparkleError::Cube(err) => write!(f, "cube error: {}", err),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SparkleError {}

impl From<ConfigError> for SparkleError {
    fn from(err: ConfigError) -> Self {
        SparkleError::Config(err)
    }
}

impl From<AnimationError> for SparkleError {
    fn from(err: AnimationError) -> Self {
        SparkleError::Animation(err)
    }
}

impl From<CubeError> for SparkleError {
    fn from(err: CubeError) -> Self {
        SparkleError::Cube(err)
    }
}

/// Summary of one sparkle sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SparkleReport {
    /// Color used for every fade of the sequence.
    pub color: Srgb,

    /// Fade-ins issued during ignite.
    pub ignited: usize,

    /// Fade-in/fade-out pairs issued during churn.
    pub churned: usize,

    /// Fade-outs issued during extinguish.
    pub extinguished: usize,
}

/// Runs sparkle sequences over a cube.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `T` - Time source implementation type
/// * `R` - Random number generator
pub struct Choreographer<'t, I: TimeInstant, T: TimeSource<I>, R: Rng> {
    time_source: &'t T,
    rng: R,
    config: SparkleConfig<I::Duration>,
}

impl<'t, I: TimeInstant, T: TimeSource<I>, R: Rng> Choreographer<'t, I, T, R> {
    /// Creates a choreographer after validating `config`.
    ///
    /// # Errors
    /// Returns the validation error if `config` cannot run.
    pub fn new(
        time_source: &'t T,
        rng: R,
        config: SparkleConfig<I::Duration>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            time_source,
            rng,
            config,
        })
    }

    /// Runs sparkle sequences back to back until an error occurs.
    ///
    /// Never returns on success. Interrupting is left to the caller, which
    /// should [`Cube::blackout`] the cube before exiting.
    pub fn run_forever<S: CellStrip>(
        &mut self,
        cube: &mut Cube<I, S>,
    ) -> Result<core::convert::Infallible, SparkleError> {
        loop {
            self.sparkle(cube)?;
        }
    }

    /// Runs one full sparkle sequence with a random color.
    ///
    /// Returns once every fade it started has finished.
    pub fn sparkle<S: CellStrip>(
        &mut self,
        cube: &mut Cube<I, S>,
    ) -> Result<SparkleReport, SparkleError> {
        let color = colors::random(&mut self.rng);

        let ignited = self.ignite(cube, color)?;
        let churned = self.churn(cube, color)?;
        let extinguished = self.extinguish(cube, color)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("sparkle: flush ({} pairs churned)", churned);
        cube.drain_all(self.time_source);

        Ok(SparkleReport {
            color,
            ignited,
            churned,
            extinguished,
        })
    }

    /// Fades in up to `fill_count` idle cells, one per jittered deadline.
    ///
    /// Stops early if no idle cell is free and nothing is animating, since no
    /// candidate could appear. Returns the number of fade-ins issued.
    pub fn ignite<S: CellStrip>(
        &mut self,
        cube: &mut Cube<I, S>,
        color: Srgb,
    ) -> Result<usize, SparkleError> {
        #[cfg(feature = "defmt")]
        defmt::debug!("sparkle: ignite");

        let phase_start = self.time_source.now();
        let mut next_ignition = 0u64;
        let mut ignited = 0;

        while ignited < self.config.fill_count {
            let now = self.time_source.now();
            let elapsed = now.duration_since(phase_start).as_millis();

            if elapsed >= next_ignition {
                match cube.random_cell_with_state(CellState::Idle, &mut self.rng) {
                    Some(cell) => {
                        let fade =
                            Animation::fade_in(cell, color, now, self.config.fade_duration)?;
                        cube.register(fade)?;
                        next_ignition = elapsed + self.jitter_millis();
                        ignited += 1;
                    }
                    None if !cube.has_active_animations() => {
                        #[cfg(feature = "defmt")]
                        defmt::warn!("ignite stalled after {} cells", ignited);
                        break;
                    }
                    None => {}
                }
            }

            cube.tick(self.time_source.now());
        }

        Ok(ignited)
    }

    /// Swaps cells in and out for the churn window.
    ///
    /// Each iteration draws an idle and an active candidate independently and
    /// starts a fade-in/fade-out pair only when both exist. Returns the number
    /// of pairs started.
    pub fn churn<S: CellStrip>(
        &mut self,
        cube: &mut Cube<I, S>,
        color: Srgb,
    ) -> Result<usize, SparkleError> {
        #[cfg(feature = "defmt")]
        defmt::debug!("sparkle: churn");

        let window = self.config.churn_window.as_millis();
        let started = self.time_source.now();
        let mut churned = 0;

        loop {
            let now = self.time_source.now();
            if now.duration_since(started).as_millis() >= window {
                break;
            }

            let idle = cube.random_cell_with_state(CellState::Idle, &mut self.rng);
            let active = cube.random_cell_with_state(CellState::Active, &mut self.rng);

            if let (Some(idle), Some(active)) = (idle, active) {
                let duration = self.config.fade_duration;
                cube.register(Animation::fade_in(idle, color, now, duration)?)?;
                cube.register(Animation::fade_out(active, color, now, duration)?)?;
                churned += 1;
            }

            cube.tick(self.time_source.now());
        }

        Ok(churned)
    }

    /// Fades out up to `fill_count` active cells.
    ///
    /// Stops early if no active cell is free and nothing is animating. Returns
    /// the number of fade-outs issued.
    pub fn extinguish<S: CellStrip>(
        &mut self,
        cube: &mut Cube<I, S>,
        color: Srgb,
    ) -> Result<usize, SparkleError> {
        #[cfg(feature = "defmt")]
        defmt::debug!("sparkle: extinguish");

        let mut extinguished = 0;

        while extinguished < self.config.fill_count {
            match cube.random_cell_with_state(CellState::Active, &mut self.rng) {
                Some(cell) => {
                    let now = self.time_source.now();
                    let fade = Animation::fade_out(cell, color, now, self.config.fade_duration)?;
                    cube.register(fade)?;
                    extinguished += 1;
                }
                None if !cube.has_active_animations() => {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("extinguish stalled after {} cells", extinguished);
                    break;
                }
                None => {}
            }

            cube.tick(self.time_source.now());
        }

        Ok(extinguished)
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &SparkleConfig<I::Duration> {
        &self.config
    }

    fn jitter_millis(&mut self) -> u64 {
        match self.config.ignition_jitter.as_millis() {
            0 => 0,
            bound => self.rng.gen_range(0..bound),
        }
    }
}
