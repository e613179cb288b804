//! Inverse search: the largest raw duration that still fits a target
//! window.
//!
//! Instantiates the crate's `bisect_max` primitive with a probe that
//! deducts the free speedup, boost-scales, runs the help simulator and
//! compares the remaining time to the window. No closed form for the
//! simulated remaining time is assumed, only its monotonicity in the raw
//! duration.

use crate::systems::help_sim::HelpSim;
use crate::{Fit, bisect_max};

/// Search tuning. `precision` is the bisection step (1 = exact seconds).
/// `span_mult` bounds the space at `target * span_mult`, assuming boosts
/// and the free speedup cannot shrink a duration by more than that factor;
/// the bound is not re-expanded if it binds.
#[derive(Clone, Copy, Debug)]
pub struct SearchCfg {
    pub precision: i64,
    pub span_mult: i64,
}
impl Default for SearchCfg {
    fn default() -> Self {
        Self {
            precision: 1,
            span_mult: 5,
        }
    }
}

/// Largest raw duration (seconds) whose remaining time after the free
/// speedup, the boost and `helps` help events is at most `target_seconds`.
///
/// Returns 0 when nothing in `[0, target * span_mult]` fits, including the
/// degenerate `target_seconds <= 0` — a valid "nothing fits" answer, not a
/// failure. Candidates whose post-speedup effective time is non-positive
/// are skipped rather than recorded. `sim` must be monotone (deterministic
/// policy) for the result to be the true maximum.
pub fn max_feasible_duration(
    target_seconds: i64,
    helps: u32,
    boost_pct: f64,
    free_speedup_seconds: i64,
    cfg: SearchCfg,
    sim: &HelpSim,
) -> i64 {
    let high = target_seconds.saturating_mul(cfg.span_mult.max(1));
    bisect_max(0, high, cfg.precision, |mid| {
        let effective = mid - free_speedup_seconds;
        if effective <= 0 {
            return Fit::Skip;
        }
        if sim.remaining_boosted(effective as f64, boost_pct, helps) <= target_seconds as f64 {
            Fit::Within
        } else {
            Fit::Over
        }
    })
}
