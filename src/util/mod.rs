//! Shared utilities.

/// Clamped frame deltas and smoothed FPS.
pub mod frame_clock;
