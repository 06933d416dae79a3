//! Time abstraction traits for platform-agnostic timing.
//!
//! Implementations are provided for `core::time::Duration`, and with the `std`
//! feature for `std::time::Instant` together with the [`SystemClock`] source.

/// Trait for abstracting monotonic clock sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;

    /// Converts duration to microseconds.
    ///
    /// Fade progress is computed from this value. Override it when the
    /// underlying timer resolves finer than a millisecond.
    fn as_micros(&self) -> u64 {
        self.as_millis().saturating_mul(1_000)
    }
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}

impl TimeDuration for core::time::Duration {
    fn as_millis(&self) -> u64 {
        core::time::Duration::as_millis(self) as u64
    }

    fn from_millis(millis: u64) -> Self {
        core::time::Duration::from_millis(millis)
    }

    fn as_micros(&self) -> u64 {
        core::time::Duration::as_micros(self) as u64
    }
}

#[cfg(feature = "std")]
impl TimeInstant for std::time::Instant {
    type Duration = core::time::Duration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        self.saturating_duration_since(earlier)
    }
}

/// Monotonic host clock backed by `std::time::Instant`.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[cfg(feature = "std")]
impl TimeSource<std::time::Instant> for SystemClock {
    fn now(&self) -> std::time::Instant {
        std::time::Instant::now()
    }
}
