/*!
`build_timer` — a minimal, pure time-reduction simulator and inverse search
for boosted build timers.

What it does
- Models the remaining duration of a timed action under a percentage speed
  boost and a sequence of discrete "guild help" reductions.
- Inverts that model: finds the largest raw duration whose post-boost,
  post-help remaining time still fits a target window, by integer bisection
  over an opaque feasibility probe (`bisect_max`).

How to use (call surface only)
- `bisect_max(low, high, step, probe)` is the generic primitive: it asks the
  probe about one candidate at a time (`Fit::Within` / `Fit::Over` /
  `Fit::Skip`) and returns the largest accepted candidate.
- Concrete simulation and search live under `systems::*` (feature-gated);
  shared scalar math lives under `mechanics::*`.

What it does NOT do
- No closed form: the probe is opaque, only monotonicity is assumed.
- No persistence, no I/O, no shared state. Every call stands alone.
*/

/// Probe verdict for one bisection candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fit {
    /// Candidate fits; record it and search upward.
    Within,
    /// Candidate overshoots; search downward by `step`.
    Over,
    /// Candidate is structurally infeasible; shrink the upper bound by one.
    Skip,
}

/// Largest `x` in `[low, high]` the probe accepts, or 0 if none is.
///
/// The probe must be monotone: once a candidate answers `Over`, every
/// larger candidate must too. `step` trades accuracy for fewer probes;
/// 1 is exact.
pub fn bisect_max<P>(mut low: i64, mut high: i64, step: i64, mut probe: P) -> i64
where
    P: FnMut(i64) -> Fit,
{
    let step = step.max(1);
    let mut best = 0;
    while low <= high {
        let mid = low + (high - low) / 2;
        match probe(mid) {
            Fit::Within => {
                best = mid;
                low = mid + step;
            }
            Fit::Over => {
                high = mid - step;
            }
            Fit::Skip => {
                high = mid - 1;
            }
        }
    }
    best
}

pub mod mechanics;
pub mod systems;
pub mod estimators;
