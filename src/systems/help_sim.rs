//! Guild-help reduction simulator.
//!
//! Applies N strictly sequential help events to a remaining duration. Each
//! event cuts the larger of 1% of the then-current remaining and a 60s
//! floor, adjusted for help landing delay: the deterministic policy credits
//! the 30s average delay back, the randomized policy adds a uniform delay
//! drawn per event. The policies also exit early at different thresholds
//! (0s vs 60s); both are kept as explicit, testable behavior rather than
//! unified.

use std::cell::RefCell;
use std::rc::Rc;

use bevy_prng::WyRand;
use rand_core::SeedableRng;

use crate::mechanics::{boost, help, stoch};

/// Per-event reduction rule.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ReductionPolicy {
    /// Average-case cut `baseline - 30`; exits once remaining <= 0.
    Deterministic,
    /// Jittered cut `baseline + U(jitter)`; exits once remaining <= 60.
    Randomized { jitter: (f64, f64) },
}

impl ReductionPolicy {
    /// Remaining value at or below which the loop rounds down to 0.
    #[inline]
    fn exit_floor(&self) -> f64 {
        match self {
            ReductionPolicy::Deterministic => 0.0,
            ReductionPolicy::Randomized { .. } => help::RANDOM_EXIT_FLOOR,
        }
    }
}

/// A reduction policy plus its seeded randomness source.
pub struct HelpSim {
    policy: ReductionPolicy,
    rng: Rc<RefCell<WyRand>>,
}

impl HelpSim {
    pub fn new(policy: ReductionPolicy, seed: u64) -> Self {
        Self {
            policy,
            rng: Rc::new(RefCell::new(WyRand::from_seed(seed.to_le_bytes()))),
        }
    }

    /// Deterministic policy; the seed is never consumed.
    pub fn deterministic() -> Self {
        Self::new(ReductionPolicy::Deterministic, 0)
    }

    /// Randomized policy with the stock jitter range.
    pub fn randomized(seed: u64) -> Self {
        Self::new(
            ReductionPolicy::Randomized {
                jitter: help::JITTER_RANGE,
            },
            seed,
        )
    }

    /// Remaining duration after `helps` sequential help events.
    ///
    /// `helps == 0` returns the input unchanged; otherwise the policy's
    /// early exit clamps the result to 0 and skips the leftover events.
    pub fn remaining_after_helps(&self, remaining_seconds: f64, helps: u32) -> f64 {
        let mut remaining = remaining_seconds;
        for _ in 0..helps {
            let cut = match self.policy {
                ReductionPolicy::Deterministic => help::baseline(remaining) - help::MEAN_DELAY,
                ReductionPolicy::Randomized { jitter: (lo, hi) } => {
                    help::baseline(remaining) + stoch::uniform(&self.rng, lo, hi)
                }
            };
            remaining -= cut;
            if remaining <= self.policy.exit_floor() {
                return 0.0;
            }
        }
        remaining
    }

    /// Boost-aware entry point: divides by the boost multiplier first, then
    /// runs the help loop. Monotone in `effective_seconds` under the
    /// deterministic policy, which the inverse search relies on.
    pub fn remaining_boosted(&self, effective_seconds: f64, boost_pct: f64, helps: u32) -> f64 {
        self.remaining_after_helps(boost::scaled(effective_seconds, boost_pct), helps)
    }
}
