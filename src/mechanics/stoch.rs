/// Stochastic mechanics: RNG helpers for help-timing jitter.
/// Note: uses `bevy_prng::WyRand` with `Rc<RefCell<>>` so callers
/// can keep closures `Fn` while mutating RNG state.
use bevy_prng::WyRand;
use rand_core::RngCore;
use std::cell::RefCell;

/// Uniform(0,1) from the top 53 bits of a WyRand word.
#[inline]
pub fn unit(rng: &RefCell<WyRand>) -> f64 {
    let mut r = rng.borrow_mut();
    ((r.next_u64() >> 11) as f64) / ((1u64 << 53) as f64)
}

/// Uniform(lo, hi); a degenerate range collapses to `lo`.
#[inline]
pub fn uniform(rng: &RefCell<WyRand>, lo: f64, hi: f64) -> f64 {
    lo + unit(rng) * (hi - lo).max(0.0)
}
