// demos/tech_compare.rs
// Run with:
//   cargo run --example tech_compare --features "system-tech_compare"

use build_timer::mechanics::clock::format_dhms;
use build_timer::systems::help_sim::HelpSim;
use build_timer::systems::tech_compare::{TechEntry, rank_by_efficiency};

fn main() {
    let entries = vec![
        TechEntry {
            name: "masonry III".into(),
            power: 900.0,
            duration_seconds: 6.0 * 3_600.0,
        },
        TechEntry {
            name: "archery IV".into(),
            power: 1_400.0,
            duration_seconds: 16.0 * 3_600.0,
        },
        TechEntry {
            name: "logistics II".into(),
            power: 260.0,
            duration_seconds: 2.0 * 3_600.0,
        },
    ];

    // Jittered help timing; change the seed for a different run.
    let sim = HelpSim::randomized(0x5eed);
    let ranked = rank_by_efficiency(&entries, &sim, 12);

    println!("== Tech ranking (12 helps) ==");
    for o in &ranked {
        println!(
            "{:<14} {:>8.1} power/h  finishes in {}",
            o.name,
            o.power_per_hour,
            format_dhms(o.final_seconds)
        );
    }
}
