//! Timing constants for the simulator.
//!
//! These constants use `std::time::Duration` which is not available in
//! `no_std` environments, so they live here rather than in the core crate.

use std::time::Duration;

/// Target frame time (~50 FPS). The main loop sleeps if a frame completes
/// early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Blink flag half-period; the firmware toggles its flag at 1 Hz.
pub const BLINK_INTERVAL: Duration = Duration::from_secs(1);
