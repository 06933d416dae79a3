//! Shared test infrastructure for rgb-cube integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use palette::Srgb;
use rgb_cube::{CELL_COUNT, CellIndex, CellStrip, TimeDuration, TimeInstant, TimeSource};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

// ============================================================================
// Mock Time Sources
// ============================================================================

/// Mock time source with controllable time advancement
///
/// A non-zero step moves time forward on every read, standing in for a wall
/// clock under busy-polling loops.
pub struct MockTimeSource {
    current_time: core::cell::Cell<TestInstant>,
    step: u64,
    reads: core::cell::Cell<u64>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self::stepping(0)
    }

    /// Time source that advances by `step` milliseconds after every read
    pub fn stepping(step: u64) -> Self {
        Self {
            current_time: core::cell::Cell::new(TestInstant(0)),
            step,
            reads: core::cell::Cell::new(0),
        }
    }

    /// Advance time by the given duration
    pub fn advance(&self, duration: TestDuration) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + duration.0));
    }

    pub fn set_time(&self, time: TestInstant) {
        self.current_time.set(time);
    }

    /// Number of times `now` has been called
    pub fn reads(&self) -> u64 {
        self.reads.get()
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        let now = self.current_time.get();
        self.current_time.set(TestInstant(now.0 + self.step));
        self.reads.set(self.reads.get() + 1);
        now
    }
}

// ============================================================================
// Mock Strip
// ============================================================================

/// Mock strip that keeps the last color written to every cell
pub struct MockStrip {
    pending: [Srgb; CELL_COUNT],
    shown: [Srgb; CELL_COUNT],
    writes: usize,
    commits: usize,
}

impl MockStrip {
    pub fn new() -> Self {
        Self {
            pending: [BLACK; CELL_COUNT],
            shown: [BLACK; CELL_COUNT],
            writes: 0,
            commits: 0,
        }
    }

    /// Color written for `cell`, committed or not
    pub fn pending_color(&self, cell: CellIndex) -> Srgb {
        self.pending[cell.0]
    }

    /// Color of `cell` as of the last commit
    pub fn shown_color(&self, cell: CellIndex) -> Srgb {
        self.shown[cell.0]
    }

    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn commits(&self) -> usize {
        self.commits
    }
}

impl CellStrip for MockStrip {
    fn set_cell_color(&mut self, index: CellIndex, color: Srgb) {
        self.pending[index.0] = color;
        self.writes += 1;
    }

    fn commit(&mut self) {
        self.shown = self.pending;
        self.commits += 1;
    }
}

// ============================================================================
// Colors
// ============================================================================

pub const BLACK: Srgb = Srgb::new(0.0, 0.0, 0.0);
pub const RED: Srgb = Srgb::new(1.0, 0.0, 0.0);
pub const GREEN: Srgb = Srgb::new(0.0, 1.0, 0.0);
pub const ORANGE: Srgb = Srgb::new(1.0, 0.5, 0.0);

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Compare two colors with floating-point tolerance
pub fn colors_equal(a: Srgb, b: Srgb) -> bool {
    const EPSILON: f32 = 0.001;
    (a.red - b.red).abs() < EPSILON
        && (a.green - b.green).abs() < EPSILON
        && (a.blue - b.blue).abs() < EPSILON
}
