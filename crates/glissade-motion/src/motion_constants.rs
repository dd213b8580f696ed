//! Shared motion constants for consistent control feel.
//!
//! These values are matched between the overflow-style sliders so that the
//! thumb and track gestures of one control never disagree about the
//! underlying physics.

/// Period of the inertial coasting tick, in milliseconds.
///
/// Coasting is driven by a fixed-interval tick independent of the render
/// loop. The engine is written against the period, not the frame rate, so
/// hosts with slower timers simply deliver several ticks at once through
/// [`FixedTicker`](crate::FixedTicker).
pub const TICK_PERIOD_MS: u64 = 10;

/// Per-tick exponential decay factor applied to the coasting velocity.
///
/// 0.97 per 10ms tick gives a time constant of roughly 33 ticks; a thrown
/// track glides to rest in well under two seconds.
pub const VELOCITY_DECAY: f32 = 0.97;

/// Velocity magnitude below which the coasting engine snaps to rest.
///
/// Exponential decay never reaches zero on its own; anything slower than
/// this is imperceptible and is forced to exactly 0 to stop asymptotic
/// creep.
pub const VELOCITY_REST_THRESHOLD: f32 = 1.0;
