// src/estimators/castle.rs

//! Castle build-time estimator.
//!
//! Answers the classic planning question: given a completion window,
//! expected guild helps, a speed boost and a free speedup, what is the
//! longest raw build that still finishes in time — and what does its timer
//! read with the boost alone, before any helps land?
//!
//! Inputs arrive as one caller-owned value per call; nothing is retained
//! between invocations. This layer also owns input validation: the systems
//! underneath accept any well-typed numbers and answer degenerately.

use crate::mechanics::{boost, clock};
use crate::systems::help_sim::HelpSim;
use crate::systems::target_fit::{self, SearchCfg};

use thiserror::Error;

/// Most helps a single action can realistically attract.
pub const MAX_HELPS: u32 = 100;

#[derive(Debug, Error, PartialEq)]
pub enum EstimateError {
    #[error("target window must be positive, got {0}s")]
    NonPositiveTarget(i64),
    #[error("help count {0} exceeds the 100-help cap")]
    TooManyHelps(u32),
    #[error("speed boost must be non-negative, got {0}%")]
    NegativeBoost(f64),
    #[error("free speedup must be non-negative, got {0}s")]
    NegativeFreeSpeedup(i64),
}

/// Caller-supplied scenario for one estimate.
#[derive(Clone, Copy, Debug)]
pub struct CastleTargets {
    pub target_seconds: i64,
    pub helps: u32,
    pub boost_pct: f64,
    pub free_speedup_seconds: i64,
}

/// Result pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CastleEstimate {
    /// Longest raw (unboosted) duration that still fits the window.
    pub max_raw_seconds: i64,
    /// Timer for that build with the boost alone, before any helps.
    pub boost_only_timer_seconds: f64,
}

impl CastleEstimate {
    /// One display line in day/clock form.
    pub fn summary(&self) -> String {
        format!(
            "max raw build {} | boost-only timer {}",
            clock::format_dhms(self.max_raw_seconds as f64),
            clock::format_dhms(self.boost_only_timer_seconds),
        )
    }
}

/// Validate, search, and derive the boost-only timer. Deterministic policy
/// throughout; the search's monotonicity precondition demands it.
pub fn estimate(tgt: CastleTargets, cfg: SearchCfg) -> Result<CastleEstimate, EstimateError> {
    if tgt.target_seconds <= 0 {
        return Err(EstimateError::NonPositiveTarget(tgt.target_seconds));
    }
    if tgt.helps > MAX_HELPS {
        return Err(EstimateError::TooManyHelps(tgt.helps));
    }
    if tgt.boost_pct < 0.0 {
        return Err(EstimateError::NegativeBoost(tgt.boost_pct));
    }
    if tgt.free_speedup_seconds < 0 {
        return Err(EstimateError::NegativeFreeSpeedup(tgt.free_speedup_seconds));
    }

    let sim = HelpSim::deterministic();
    let max_raw = target_fit::max_feasible_duration(
        tgt.target_seconds,
        tgt.helps,
        tgt.boost_pct,
        tgt.free_speedup_seconds,
        cfg,
        &sim,
    );

    let effective = (max_raw - tgt.free_speedup_seconds).max(0) as f64;
    Ok(CastleEstimate {
        max_raw_seconds: max_raw,
        boost_only_timer_seconds: boost::scaled(effective, tgt.boost_pct),
    })
}
