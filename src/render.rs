//! Pure numeric rendering helpers.
//!
//! Grouped-decimal output for smallish values, fixed significant-digit
//! rendering for suffix prefixes, and exponential notation for the
//! scientific fallback. No suffix or option logic lives here.

/// Trims trailing zeros (and a dangling `.`) from a fixed-point string,
/// then inserts thousands separators into the integer part.
pub fn group_thousands(formatted: String) -> String {
    let trimmed = if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    };

    let parts = trimmed.split('.').collect::<Vec<_>>();

    let integer_part = parts[0]
        .chars()
        .rev()
        .collect::<String>()
        .as_bytes()
        .chunks(3)
        .map(|c| std::str::from_utf8(c).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(",")
        .chars()
        .rev()
        .collect::<String>();

    let integer_part = integer_part
        .strip_prefix("-,")
        .map(|rest| format!("-{}", rest))
        .or_else(|| integer_part.strip_prefix(',').map(str::to_string))
        .unwrap_or(integer_part);

    if parts.len() > 1 {
        format!("{}.{}", integer_part, parts[1])
    } else {
        integer_part
    }
}

/// Number of fractional digits needed to show `sigfigs` significant
/// digits of `value`. Negative means the value has more integer digits
/// than requested significant digits.
fn fraction_digits(value: f64, sigfigs: u32) -> i32 {
    let exponent = value.abs().log10().floor() as i32;
    sigfigs.max(1) as i32 - 1 - exponent
}

/// Rounds `value` at `sigfigs` significant digits and returns it along
/// with the fractional digit count to render.
///
/// The digit count is re-derived from the *rounded* value: rounding can
/// carry into a new power of ten (9.999 @ 3 → 10.0, which needs one
/// fractional digit, not two).
fn round_at_sigfigs(value: f64, sigfigs: u32) -> (f64, usize) {
    let decimals = fraction_digits(value, sigfigs);
    let rounded = if decimals >= 0 {
        let scale = 10f64.powi(decimals);
        (value * scale).round() / scale
    } else {
        let scale = 10f64.powi(-decimals);
        (value / scale).round() * scale
    };
    let decimals = fraction_digits(rounded, sigfigs);
    (rounded, decimals.max(0) as usize)
}

/// Fixed-notation rendering to exactly `sigfigs` significant digits,
/// trailing zeros kept (`250.0` @ 5 → `"250.00"`).
pub fn to_sigfigs(value: f64, sigfigs: u32) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let (rounded, decimals) = round_at_sigfigs(value, sigfigs);
    format!("{:.*}", decimals, rounded)
}

/// Grouped-decimal rendering capped at `sigfigs` *maximum* significant
/// digits: rounds, trims trailing zeros, inserts thousands separators.
pub fn grouped_max_sigfigs(value: f64, sigfigs: u32) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let (rounded, decimals) = round_at_sigfigs(value, sigfigs);
    group_thousands(format!("{:.*}", decimals, rounded))
}

/// Exponential notation: mantissa with `sigfigs - 1` fractional digits,
/// lowercase `e`, no `+` in the exponent (`1.23e7`).
pub fn exponential(value: f64, sigfigs: u32) -> String {
    format!("{:.*e}", (sigfigs.max(1) - 1) as usize, value)
}
