//! Formatting helpers for presenting swim times and deltas.
//!
//! Rounding is half-up (away from zero on ties) at the requested precision,
//! applied to the shortest decimal form of the value, so `1.005` renders as
//! `1.01` even though its binary form sits just below the tie.
//!
//! The `< 60` branch is chosen on the raw value, so `59.999` renders as
//! `60.00s` rather than carrying into `1:00.00`. The minute branch behaves the
//! same way: `119.999` renders as `1:60.00`.

use std::str::FromStr;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Canonical display for a time in seconds: `ss.ccs` below a minute, `m:ss.cc` above.
///
/// Absent or non-finite input returns `fallback` verbatim.
pub fn format_time(seconds: Option<f64>, fallback: &str) -> String {
    let Some(seconds) = seconds.filter(|s| s.is_finite()) else {
        return fallback.to_string();
    };

    if seconds < 60.0 {
        return format!("{}s", fixed(seconds, 2));
    }

    let minutes = (seconds / 60.0).floor();
    let remainder = fixed(seconds % 60.0, 2);
    let (whole, cents) = remainder.split_once('.').unwrap_or((remainder.as_str(), "00"));

    format!("{minutes:.0}:{whole:0>2}.{cents}")
}

/// Signed seconds with two decimals, e.g. `+0.70s` or `-0.50s`. Zero carries a `+`.
pub fn format_signed_seconds(diff: f64) -> String {
    let body = fixed(diff, 2);
    if body.starts_with('-') {
        format!("{body}s")
    } else {
        format!("+{body}s")
    }
}

/// Whole-number score such as a stability coefficient, or `N/A`.
pub fn format_score(value: Option<f64>) -> String {
    match value.filter(|v| v.is_finite()) {
        Some(v) => fixed(v, 0),
        None => "N/A".to_string(),
    }
}

/// Fixed-point rendering with round-half-up on the decimal value.
pub fn fixed(value: f64, decimals: u32) -> String {
    let Some(exact) = Decimal::from_str(&value.to_string())
        .ok()
        .or_else(|| Decimal::from_f64(value))
    else {
        // Beyond `Decimal` range.
        return format!("{value:.prec$}", prec = decimals as usize);
    };

    let mut rounded =
        exact.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    rounded.rescale(decimals);
    rounded.to_string()
}
