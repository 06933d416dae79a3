#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`cell_index`**: Maps a 5x5x5 lattice coordinate to its position on the strip
//! - **`Animation`**: A timed fade of one cell (`FadeIn` or `FadeOut`)
//! - **`Cube`**: Owns per-cell state and the set of active fades, ticks them each frame
//! - **`CellStrip`**: Trait to implement for your LED strip hardware
//! - **`TimeSource`**: Trait to implement for your timing system
//! - **`Choreographer`**: Runs the ignite / churn / extinguish sparkle sequence
//! - **`SparkleConfig`**: Fill count and timing of a sparkle sequence
//!
//! The library uses `Srgb<f32>` (0.0-1.0 range) for all color operations.
//! When implementing `CellStrip` for your hardware, convert these values to your
//! strip's native format (e.g. with [`colors::to_rgb8`]).

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod animation;
pub mod choreographer;
pub mod colors;
pub mod config;
pub mod cube;
pub mod time;
pub mod types;

pub use animation::{Animation, AnimationError, FadeKind, FadeStatus};
pub use choreographer::{Choreographer, SparkleError, SparkleReport};
pub use config::{ConfigError, SparkleConfig};
pub use cube::{CellStates, CellStrip, Cube, CubeError};
pub use time::{TimeDuration, TimeInstant, TimeSource};
#[cfg(feature = "std")]
pub use time::SystemClock;
pub use types::{CELL_COUNT, CellIndex, CellState, GRID_SIZE, GridCoordinate, cell_index};
