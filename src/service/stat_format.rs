//! Compact display strings for channel statistics.
//!
//! A count is shown as its binary logarithm plus a decimal abbreviation, e.g.
//! `1_230_000` becomes `"2^20.23 (1.23M)"`.

use crate::error::format::FormatError;

const THOUSAND: f64 = 1_000.0;
const MILLION: f64 = 1_000_000.0;

/// Formats a raw count as `"2^<exponent> (<magnitude><unit>)"`.
///
/// Counts below one million use `K`, everything else `M`. The magnitude is
/// rounded to 2 decimal places and the exponent to 3; either is printed
/// without a fractional part when rounding leaves none.
///
/// # Returns
/// - `Ok(String)` - The display string
/// - `Err(FormatError::ZeroCount)` - `raw_count` is 0, whose logarithm is undefined
pub fn format_stat(raw_count: u64) -> Result<String, FormatError> {
    if raw_count == 0 {
        return Err(FormatError::ZeroCount);
    }

    let count = raw_count as f64;
    let (magnitude, unit) = if raw_count < 1_000_000 {
        (count / THOUSAND, "K")
    } else {
        (count / MILLION, "M")
    };

    let magnitude = round_to(magnitude, 2);
    let exponent = round_to(count.log2(), 3);

    Ok(format!(
        "2^{} ({}{})",
        trim_number(exponent),
        trim_number(magnitude),
        unit
    ))
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Renders whole values without a decimal point and everything else with the
/// shortest representation that round-trips.
fn trim_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
