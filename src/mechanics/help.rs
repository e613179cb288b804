/// Guild-help mechanics: the per-event reduction rule.

/// Floor on a single help's baseline reduction, seconds.
pub const BASELINE_FLOOR: f64 = 60.0;

/// Average landing delay credited back per help by the deterministic rule.
pub const MEAN_DELAY: f64 = 30.0;

/// Remaining value at or below which the randomized rule rounds down to 0.
pub const RANDOM_EXIT_FLOOR: f64 = 60.0;

/// Stock jitter range for randomized help timing, seconds.
pub const JITTER_RANGE: (f64, f64) = (40.0, 60.0);

/// Baseline reduction for one help: 1% of remaining, floored.
#[inline]
pub fn baseline(remaining: f64) -> f64 {
    (remaining * 0.01).max(BASELINE_FLOOR)
}
