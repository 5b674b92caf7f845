//! Canonical display text for numeric results.

/// Longest result string shown in plain notation.
pub const MAX_DISPLAY_LEN: usize = 12;

/// Fractional digits kept before trailing zeros are stripped.
pub const MAX_FRACTION_DIGITS: usize = 10;

/// Fractional mantissa digits in scientific notation.
pub const SCIENTIFIC_DIGITS: usize = 6;

/// Format a numeric result for display.
///
/// Integers render without a fractional part. Other values are rounded to
/// ten fractional digits and printed in their shortest form. Anything
/// longer than twelve characters falls back to scientific notation with
/// six fractional mantissa digits and a signed exponent.
///
/// This is a pure function.
///
/// # Example
///
/// ```rust
/// use reckon::core::format_result;
///
/// assert_eq!(format_result(3.0), "3");
/// assert_eq!(format_result(0.1 + 0.2), "0.3");
/// assert_eq!(format_result(1.0 / 3.0), "0.3333333333");
/// assert_eq!(format_result(1e20), "1.000000e+20");
/// ```
pub fn format_result(value: f64) -> String {
    let plain = if value.fract() == 0.0 {
        without_negative_zero(value).to_string()
    } else {
        let rounded = format!("{:.*}", MAX_FRACTION_DIGITS, value)
            .parse::<f64>()
            .unwrap_or(value);
        without_negative_zero(rounded).to_string()
    };

    if plain.chars().count() > MAX_DISPLAY_LEN {
        scientific(value)
    } else {
        plain
    }
}

fn without_negative_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

fn scientific(value: f64) -> String {
    let raw = format!("{:.*e}", SCIENTIFIC_DIGITS, value);
    match raw.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => raw,
    }
}
