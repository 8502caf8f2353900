//! Result formatting
//!
//! Precision depends on magnitude first and category second. The rules are
//! checked strictly in order, so an integral temperature prints as an
//! integer rather than with two decimals. Decimals are cut from the exact
//! binary value and exact ties round away from zero.

/// Render a converted value for display
pub fn format_conversion(value: f64, category: &str) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();

    if magnitude < 0.000001 || magnitude > 999_999_999.0 {
        return to_exponential(value, 6);
    }

    if magnitude < 0.01 {
        return to_fixed(value, 6);
    }

    if magnitude < 1.0 {
        return to_fixed(value, 4);
    }

    if value.fract() == 0.0 {
        return format!("{}", value);
    }

    if category == "temperature" {
        return to_fixed(value, 2);
    }

    if magnitude < 100.0 {
        to_fixed(value, 3)
    } else {
        to_fixed(value, 2)
    }
}

fn non_finite(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value > 0.0 {
        "Infinity".to_string()
    } else {
        "-Infinity".to_string()
    }
}

/// Exact decimal expansion of a finite magnitude: every digit without the
/// point, and how many of them sit before it
fn exact_digits(magnitude: f64) -> (Vec<u8>, usize) {
    // 1074 fractional digits cover the smallest subnormal exactly
    let text = format!("{:.1074}", magnitude);
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let digits = int_part
        .bytes()
        .chain(frac_part.bytes())
        .map(|b| b - b'0')
        .collect();
    (digits, int_part.len())
}

/// Keep the first `keep` digits, rounding ties away from zero.
/// Returns true when the carry added a leading digit.
fn round_half_up(digits: &mut Vec<u8>, keep: usize) -> bool {
    let round_up = digits.get(keep).is_some_and(|d| *d >= 5);
    digits.truncate(keep);
    if !round_up {
        return false;
    }
    for d in digits.iter_mut().rev() {
        if *d == 9 {
            *d = 0;
        } else {
            *d += 1;
            return false;
        }
    }
    digits.insert(0, 1);
    true
}

fn push_digits(out: &mut String, digits: &[u8]) {
    out.extend(digits.iter().map(|d| char::from(b'0' + d)));
}

/// Fixed notation with `frac` decimals: `100.125` at 2 gives `100.13`
fn to_fixed(value: f64, frac: usize) -> String {
    if !value.is_finite() {
        return non_finite(value);
    }

    let (mut digits, mut int_len) = exact_digits(value.abs());
    if round_half_up(&mut digits, int_len + frac) {
        int_len += 1;
    }

    let mut out = String::new();
    if value < 0.0 {
        out.push('-');
    }
    push_digits(&mut out, &digits[..int_len]);
    if frac > 0 {
        out.push('.');
        push_digits(&mut out, &digits[int_len..]);
    }
    out
}

/// Exponential notation with an explicit exponent sign: `1.500000e+9`
fn to_exponential(value: f64, frac: usize) -> String {
    if !value.is_finite() {
        return non_finite(value);
    }

    let (digits, int_len) = exact_digits(value.abs());
    let Some(first) = digits.iter().position(|d| *d != 0) else {
        return format!("0.{}e+0", "0".repeat(frac));
    };

    let mut exponent = int_len as i64 - 1 - first as i64;
    let mut mantissa = digits[first..].to_vec();
    if round_half_up(&mut mantissa, frac + 1) {
        exponent += 1;
        mantissa.truncate(frac + 1);
    }

    let mut out = String::new();
    if value < 0.0 {
        out.push('-');
    }
    push_digits(&mut out, &mantissa[..1]);
    if frac > 0 {
        out.push('.');
        push_digits(&mut out, &mantissa[1..]);
    }
    out.push('e');
    if exponent >= 0 {
        out.push('+');
    }
    out.push_str(&exponent.to_string());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(format_conversion(0.0, "length"), "0");
        assert_eq!(format_conversion(-0.0, "temperature"), "0");
    }

    #[test]
    fn test_large_uses_exponential() {
        assert_eq!(format_conversion(1_500_000_000.0, "length"), "1.500000e+9");
        assert_eq!(format_conversion(-2e12, "digital"), "-2.000000e+12");
    }

    #[test]
    fn test_tiny_uses_exponential() {
        assert_eq!(format_conversion(1.602176634e-19, "energy"), "1.602177e-19");
    }

    #[test]
    fn test_small_fixed_six() {
        assert_eq!(format_conversion(0.00123, "length"), "0.001230");
    }

    #[test]
    fn test_below_one_fixed_four() {
        assert_eq!(format_conversion(0.5, "length"), "0.5000");
        assert_eq!(format_conversion(-0.25, "length"), "-0.2500");
    }

    #[test]
    fn test_integer_has_no_point() {
        assert_eq!(format_conversion(1000.0, "length"), "1000");
        assert_eq!(format_conversion(32.0, "temperature"), "32");
        assert_eq!(format_conversion(999_999_999.0, "digital"), "999999999");
    }

    #[test]
    fn test_temperature_two_decimals() {
        assert_eq!(format_conversion(98.6, "temperature"), "98.60");
        assert_eq!(format_conversion(373.15, "temperature"), "373.15");
    }

    #[test]
    fn test_magnitude_split() {
        assert_eq!(format_conversion(3.28084, "length"), "3.281");
        assert_eq!(format_conversion(1609.344, "length"), "1609.34");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_conversion(f64::INFINITY, "length"), "Infinity");
        assert_eq!(format_conversion(f64::NEG_INFINITY, "length"), "-Infinity");
        assert_eq!(format_conversion(f64::NAN, "length"), "NaN");
    }

    #[test]
    fn test_ties_round_away_from_zero() {
        assert_eq!(format_conversion(100.125, "digital"), "100.13");
        assert_eq!(format_conversion(0.03125, "digital"), "0.0313");
        assert_eq!(format_conversion(1.125, "temperature"), "1.13");
        assert_eq!(format_conversion(-1.125, "temperature"), "-1.13");
        assert_eq!(format_conversion(2.5e-7, "length"), "2.500000e-7");
        assert_eq!(format_conversion(1_234_566_500.0, "length"), "1.234567e+9");
    }

    #[test]
    fn test_digital_session_default_pair() {
        let bytes = crate::convert_digital(801.0, "bit", "byte").unwrap();
        assert_eq!(format_conversion(bytes, "digital"), "100.13");
        let quarter = crate::convert_digital(0.25, "bit", "byte").unwrap();
        assert_eq!(format_conversion(quarter, "digital"), "0.0313");
    }

    #[test]
    fn test_carry_into_new_digit() {
        assert_eq!(format_conversion(99.9996, "length"), "100.000");
        assert_eq!(format_conversion(9_999_999_999.0, "length"), "1.000000e+10");
    }

    #[test]
    fn test_thresholds() {
        assert_eq!(format_conversion(1e-6, "length"), "0.000001");
        assert_eq!(format_conversion(0.01, "length"), "0.0100");
        assert_eq!(format_conversion(1.0, "length"), "1");
        assert_eq!(format_conversion(-1e-7, "length"), "-1.000000e-7");
        assert_eq!(format_conversion(1_000_000_000.0, "length"), "1.000000e+9");
    }
}
