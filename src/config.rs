//! Tunables for the sparkle choreography.

use crate::time::TimeDuration;

/// Timing and size parameters of one sparkle sequence.
///
/// The defaults light 30 cells with 3 s fades, stagger ignitions by up to
/// 150 ms and churn for 10 s.
///
/// # Type Parameters
/// * `D` - The duration type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SparkleConfig<D: TimeDuration> {
    /// Cells lit during ignite, and cells put out during extinguish.
    pub fill_count: usize,

    /// Length of every fade.
    pub fade_duration: D,

    /// Upper bound (exclusive) of the random delay between ignitions.
    pub ignition_jitter: D,

    /// How long the churn phase swaps cells.
    pub churn_window: D,
}

impl<D: TimeDuration> SparkleConfig<D> {
    /// Cells lit per sparkle when no fill count is set.
    pub const DEFAULT_FILL_COUNT: usize = 30;
    /// Fade length in milliseconds used by [`Default`].
    pub const DEFAULT_FADE_MILLIS: u64 = 3_000;
    /// Exclusive upper bound of the ignition delay in milliseconds.
    pub const DEFAULT_JITTER_MILLIS: u64 = 150;
    /// Length of the churn phase in milliseconds.
    pub const DEFAULT_CHURN_MILLIS: u64 = 10_000;

    /// Sets the number of cells to ignite and extinguish.
    pub fn fill_count(mut self, count: usize) -> Self {
        self.fill_count = count;
        self
    }

    /// Sets the fade duration.
    pub fn fade_duration(mut self, duration: D) -> Self {
        self.fade_duration = duration;
        self
    }

    /// Sets the ignition jitter bound. Zero ignites cells back to back.
    pub fn ignition_jitter(mut self, jitter: D) -> Self {
        self.ignition_jitter = jitter;
        self
    }

    /// Sets the churn window.
    pub fn churn_window(mut self, window: D) -> Self {
        self.churn_window = window;
        self
    }

    /// Checks the configuration can run.
    ///
    /// # Errors
    /// * `ZeroFadeDuration` - Fades need a non-zero duration
    /// * `ZeroFillCount` - Nothing would be ignited
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fade_duration.as_micros() == 0 {
            return Err(ConfigError::ZeroFadeDuration);
        }

        if self.fill_count == 0 {
            return Err(ConfigError::ZeroFillCount);
        }

        Ok(())
    }
}

impl<D: TimeDuration> Default for SparkleConfig<D> {
    fn default() -> Self {
        Self {
            fill_count: Self::DEFAULT_FILL_COUNT,
            fade_duration: D::from_millis(Self::DEFAULT_FADE_MILLIS),
            ignition_jitter: D::from_millis(Self::DEFAULT_JITTER_MILLIS),
            churn_window: D::from_millis(Self::DEFAULT_CHURN_MILLIS),
        }
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Fade duration is zero.
    ZeroFadeDuration,

    /// Fill count is zero.
    ZeroFillCount,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroFadeDuration => {
                write!(f, "fade duration must be greater than zero")
            }
            ConfigError::ZeroFillCount => {
                write!(f, "fill count must be at least one cell")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use core::time::Duration;

    #[test]
    fn defaults_match_sparkle_timing() {
        let config = SparkleConfig::<Duration>::default();
        assert_eq!(config.fill_count, 30);
        assert_eq!(config.fade_duration, Duration::from_secs(3));
        assert_eq!(config.ignition_jitter, Duration::from_millis(150));
        assert_eq!(config.churn_window, Duration::from_secs(10));
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn defaults_come_from_associated_constants() {
        type Config = SparkleConfig<Duration>;
        let config = Config::default();
        assert_eq!(config.fill_count, Config::DEFAULT_FILL_COUNT);
        assert_eq!(config.fade_duration.as_millis() as u64, Config::DEFAULT_FADE_MILLIS);
        assert_eq!(config.ignition_jitter.as_millis() as u64, Config::DEFAULT_JITTER_MILLIS);
        assert_eq!(config.churn_window.as_millis() as u64, Config::DEFAULT_CHURN_MILLIS);
    }

    #[test]
    fn validate_rejects_zero_fade() {
        let config = SparkleConfig::<Duration>::default().fade_duration(Duration::ZERO);
        assert_eq!(config.validate(), Err(ConfigError::ZeroFadeDuration));
    }

    #[test]
    fn validate_rejects_zero_fill() {
        let config = SparkleConfig::<Duration>::default().fill_count(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroFillCount));
    }
}
