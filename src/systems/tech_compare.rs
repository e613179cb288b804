//! Side-by-side completion comparison for tech entries.
//!
//! Each entry's (already boost-adjusted) duration runs through the help
//! simulator independently; entries are then ranked by power gained per
//! hour of final duration. Entries do not interact.

use crate::systems::help_sim::HelpSim;

/// One tech option: what it grants and how long it takes unaided.
#[derive(Clone, Debug)]
pub struct TechEntry {
    pub name: String,
    pub power: f64,
    /// Boost-adjusted duration, seconds.
    pub duration_seconds: f64,
}

/// Simulated outcome for one entry.
#[derive(Clone, Debug)]
pub struct TechOutcome {
    pub name: String,
    /// Remaining duration after helps, seconds.
    pub final_seconds: f64,
    /// Power per hour of final duration (epsilon-guarded denominator).
    pub power_per_hour: f64,
}

/// Run every entry through the simulator and rank by power-per-hour,
/// best first.
pub fn rank_by_efficiency(entries: &[TechEntry], sim: &HelpSim, helps: u32) -> Vec<TechOutcome> {
    let mut out: Vec<TechOutcome> = entries
        .iter()
        .map(|e| {
            let final_seconds = sim.remaining_after_helps(e.duration_seconds, helps);
            let hours = (final_seconds / 3_600.0).max(1e-9);
            TechOutcome {
                name: e.name.clone(),
                final_seconds,
                power_per_hour: e.power / hours,
            }
        })
        .collect();
    out.sort_by(|a, b| {
        b.power_per_hour
            .partial_cmp(&a.power_per_hour)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    out
}
