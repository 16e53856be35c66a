//! Currency helpers shared by every component.
//!
//! Amounts are plain `f64` dollar values. Derived figures stay unrounded
//! while a form is being edited; rounding to whole cents happens once, at
//! the receipt boundary. Display formatting always shows exactly two
//! fractional digits.

/// Rounds a dollar amount to whole cents.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Formats a dollar amount with exactly two fractional digits, e.g. `"5.00"`.
#[must_use]
pub fn format_amount(value: f64) -> String {
    format!("{value:.2}")
}

/// Parses free-form amount entry.
///
/// Anything that does not parse as a finite number collapses to `0.0`;
/// entry fields never surface parse errors to the guest.
#[must_use]
pub fn parse_amount(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== round2 tests =====

    #[test]
    fn test_round2_exact_cents() {
        assert_eq!(round2(10.0), 10.0);
        assert_eq!(round2(39.4), 39.4);
    }

    #[test]
    fn test_round2_fractional_cents() {
        assert_eq!(round2(12.3456), 12.35);
        assert_eq!(round2(1.5015), 1.5);
    }

    #[test]
    fn test_round2_float_noise() {
        assert_eq!(round2(0.1 + 0.2), 0.3);
    }

    #[test]
    fn test_round2_negative() {
        assert_eq!(round2(-2.346), -2.35);
    }

    #[test]
    fn test_round2_zero() {
        assert_eq!(round2(0.0), 0.0);
    }

    // ===== format_amount tests =====

    #[test]
    fn test_format_amount_whole() {
        assert_eq!(format_amount(5.0), "5.00");
    }

    #[test]
    fn test_format_amount_one_decimal() {
        assert_eq!(format_amount(39.4), "39.40");
    }

    #[test]
    fn test_format_amount_two_decimals() {
        assert_eq!(format_amount(10.01), "10.01");
    }

    #[test]
    fn test_format_amount_zero() {
        assert_eq!(format_amount(0.0), "0.00");
    }

    #[test]
    fn test_format_amount_rounds_display() {
        assert_eq!(format_amount(1.005), "1.00");
        assert_eq!(format_amount(2.999), "3.00");
    }

    // ===== parse_amount tests =====

    #[test]
    fn test_parse_amount_integer_text() {
        assert_eq!(parse_amount("7"), 7.0);
    }

    #[test]
    fn test_parse_amount_decimal_text() {
        assert_eq!(parse_amount("12.50"), 12.5);
    }

    #[test]
    fn test_parse_amount_trims_whitespace() {
        assert_eq!(parse_amount("  4.25  "), 4.25);
    }

    #[test]
    fn test_parse_amount_garbage() {
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("12abc"), 0.0);
        assert_eq!(parse_amount("$5"), 0.0);
    }

    #[test]
    fn test_parse_amount_empty() {
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("   "), 0.0);
    }

    #[test]
    fn test_parse_amount_negative_passes_through() {
        // Negative entries parse; the submit guard blocks them later
        assert_eq!(parse_amount("-3"), -3.0);
    }

    #[test]
    fn test_parse_amount_non_finite_collapses() {
        assert_eq!(parse_amount("inf"), 0.0);
        assert_eq!(parse_amount("-inf"), 0.0);
        assert_eq!(parse_amount("NaN"), 0.0);
    }

    #[test]
    fn test_parse_amount_scientific_notation() {
        assert_eq!(parse_amount("1e2"), 100.0);
    }
}
