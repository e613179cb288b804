/// Speed-boost mechanics: percentage boosts become a duration divisor.

/// Boost multiplier from a percentage: 1 + pct/100.
#[inline]
pub fn multiplier(pct: f64) -> f64 {
    1.0 + pct.max(0.0) / 100.0
}

/// Effective duration under a boost: raw / multiplier.
#[inline]
pub fn scaled(raw_seconds: f64, pct: f64) -> f64 {
    raw_seconds / multiplier(pct)
}
