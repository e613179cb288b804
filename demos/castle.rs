// demos/castle.rs
// Run with:
//   cargo run --example castle --features "estimator-castle"

use build_timer::estimators::castle::{CastleTargets, estimate};
use build_timer::mechanics::clock::format_dhms;
use build_timer::systems::target_fit::SearchCfg;

fn main() {
    // An 8-day completion window with a strong boost and a steady guild.
    let tgt = CastleTargets {
        target_seconds: 8 * 86_400,
        helps: 20,
        boost_pct: 110.0,
        free_speedup_seconds: 5 * 60,
    };

    match estimate(tgt, SearchCfg::default()) {
        Ok(est) => {
            println!("== Castle Estimate ==");
            println!("window            {}", format_dhms(tgt.target_seconds as f64));
            println!("max raw build     {}", format_dhms(est.max_raw_seconds as f64));
            println!("boost-only timer  {}", format_dhms(est.boost_only_timer_seconds));
        }
        Err(e) => println!("estimate rejected: {e}"),
    }
}
