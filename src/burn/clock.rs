//! Integer tick clock for the burn model.
//!
//! Durations and cooldowns arrive as seconds but the simulation only ever counts whole ticks,
//! so long runs never accumulate floating-point drift.

/// Length of one tick in seconds.
pub const TICK_SECONDS: f64 = 0.5;

/// Tolerance used when converting seconds to a whole number of ticks.
pub const EPSILON: f64 = 1e-9;

/// Longest run accepted from configuration or the command line.
pub const MAX_TICKS: u64 = 1_000_000;

/// Number of ticks whose start time is strictly below `duration`.
///
/// A duration that lands on a tick boundary excludes that boundary tick. Non-positive and
/// non-finite durations yield zero ticks.
pub fn tick_count(duration: f64) -> u64 {
    if !duration.is_finite() || duration <= 0.0 {
        return 0;
    }
    (duration / TICK_SECONDS - EPSILON).ceil().max(0.0) as u64
}

/// Number of tick-end countdowns before an item with this cooldown is ready again.
///
/// Equivalent to subtracting [`TICK_SECONDS`] from a float timer (floored at zero) until it
/// reaches zero.
pub fn cooldown_ticks(cooldown: f64) -> u64 {
    if !cooldown.is_finite() || cooldown <= 0.0 {
        return 0;
    }
    (cooldown / TICK_SECONDS - EPSILON).ceil().max(0.0) as u64
}

/// Start time of a tick, in seconds.
#[inline]
pub fn tick_time(tick: u64) -> f64 {
    tick as f64 * TICK_SECONDS
}
