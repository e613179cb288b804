// tests/target_fit.rs
use build_timer::systems::help_sim::HelpSim;
use build_timer::systems::target_fit::{SearchCfg, max_feasible_duration};

#[test]
fn doubling_boost_doubles_the_feasible_build() {
    let sim = HelpSim::deterministic();
    // no helps, 100% boost: D/2 <= 86_400 peaks at D = 172_800
    let d = max_feasible_duration(86_400, 0, 100.0, 0, SearchCfg::default(), &sim);
    assert_eq!(d, 172_800);
}

#[test]
fn no_boost_no_helps_is_the_window_itself() {
    let sim = HelpSim::deterministic();
    let d = max_feasible_duration(86_400, 0, 0.0, 0, SearchCfg::default(), &sim);
    assert_eq!(d, 86_400);
}

#[test]
fn result_is_the_tight_upper_bound() {
    let sim = HelpSim::deterministic();
    let target = 86_400;
    let (helps, boost, free) = (20u32, 110.0, 300i64);
    let d = max_feasible_duration(target, helps, boost, free, SearchCfg::default(), &sim);
    assert!(d > 0);
    assert!(sim.remaining_boosted((d - free) as f64, boost, helps) <= target as f64);
    assert!(sim.remaining_boosted((d + 1 - free) as f64, boost, helps) > target as f64);
}

#[test]
fn helps_extend_the_feasible_build() {
    let sim = HelpSim::deterministic();
    let cfg = SearchCfg::default();
    let without = max_feasible_duration(86_400, 0, 0.0, 0, cfg, &sim);
    let with = max_feasible_duration(86_400, 50, 0.0, 0, cfg, &sim);
    assert!(with > without, "{with} vs {without}");
}

#[test]
fn free_speedup_extends_the_feasible_build_by_its_credit() {
    let sim = HelpSim::deterministic();
    let cfg = SearchCfg::default();
    let base = max_feasible_duration(86_400, 0, 0.0, 0, cfg, &sim);
    let credited = max_feasible_duration(86_400, 0, 0.0, 300, cfg, &sim);
    assert_eq!(credited, base + 300);
}

#[test]
fn nothing_fits_when_the_free_speedup_swallows_the_range() {
    let sim = HelpSim::deterministic();
    // every candidate up to target*5 = 500 leaves a non-positive effective time
    let d = max_feasible_duration(100, 0, 0.0, 1_000, SearchCfg::default(), &sim);
    assert_eq!(d, 0);
}

#[test]
fn degenerate_target_returns_zero() {
    let sim = HelpSim::deterministic();
    assert_eq!(
        max_feasible_duration(0, 10, 50.0, 300, SearchCfg::default(), &sim),
        0
    );
    assert_eq!(
        max_feasible_duration(-5, 10, 50.0, 300, SearchCfg::default(), &sim),
        0
    );
}

#[test]
fn coarse_precision_stays_close_and_feasible() {
    let sim = HelpSim::deterministic();
    let (target, helps, boost, free) = (86_400i64, 10u32, 100.0, 300i64);
    let exact = max_feasible_duration(target, helps, boost, free, SearchCfg::default(), &sim);
    let coarse = max_feasible_duration(
        target,
        helps,
        boost,
        free,
        SearchCfg {
            precision: 60,
            span_mult: 5,
        },
        &sim,
    );
    assert!(coarse <= exact);
    // a 60s step can stop short in both search phases, but never by more
    assert!(exact - coarse < 120, "coarse {coarse} exact {exact}");
    assert!(sim.remaining_boosted((coarse - free) as f64, boost, helps) <= target as f64);
}
