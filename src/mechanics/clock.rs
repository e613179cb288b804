/// Clock mechanics: day/hour/minute/second splits for second counts.

/// Floor-split a second count into (days, hours, minutes, seconds).
/// Negative inputs clamp to 0.
#[inline]
pub fn split_dhms(seconds: f64) -> (u64, u64, u64, u64) {
    let total = seconds.max(0.0) as u64;
    (
        total / 86_400,
        total % 86_400 / 3_600,
        total % 3_600 / 60,
        total % 60,
    )
}

/// Render a second count as `"{d}d {hh}:{mm}:{ss}"`.
pub fn format_dhms(seconds: f64) -> String {
    let (d, h, m, s) = split_dhms(seconds);
    format!("{d}d {h:02}:{m:02}:{s:02}")
}
