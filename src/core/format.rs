//! Display formatting for operands.
//!
//! Formatting is display-only: it never feeds back into stored state.

use super::number::{parse_float, shortest_digits};

/// Format an operand for display with en-US thousands grouping.
///
/// The integer part (everything before the first `.`) is parsed, rounded to
/// zero fractional digits and grouped with `,`. A decimal part, when
/// present, is reattached verbatim so that trailing zeros typed by the user
/// stay visible.
///
/// ```rust
/// use keypad_calc::core::format_operand;
///
/// assert_eq!(format_operand(Some("1234567.890")), Some("1,234,567.890".to_string()));
/// assert_eq!(format_operand(Some("12.")), Some("12.".to_string()));
/// assert_eq!(format_operand(None), None);
/// ```
pub fn format_operand(operand: Option<&str>) -> Option<String> {
    let operand = operand?;
    let formatted = match operand.split_once('.') {
        Some((integer, decimal)) => format!("{}.{decimal}", format_integer(parse_float(integer))),
        None => format_integer(parse_float(operand)),
    };
    Some(formatted)
}

/// Format a number with no fractional digits and grouped thousands.
///
/// Rounds half away from zero. `NaN` renders as `"NaN"` and infinities as
/// `"∞"`/`"-∞"`.
pub fn format_integer(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }

    let sign = if value.is_sign_negative() { "-" } else { "" };
    if value.is_infinite() {
        return format!("{sign}∞");
    }

    // Digits past the shortest round-trip form are zeros.
    let (mut digits, n) = shortest_digits(value.abs().round());
    let padding = usize::try_from(n).unwrap_or(0).saturating_sub(digits.len());
    digits.push_str(&"0".repeat(padding));
    format!("{sign}{}", group_thousands(&digits))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_integer_digits() {
        assert_eq!(format_integer(0.0), "0");
        assert_eq!(format_integer(999.0), "999");
        assert_eq!(format_integer(1000.0), "1,000");
        assert_eq!(format_integer(1234567.0), "1,234,567");
        assert_eq!(format_integer(-987654.0), "-987,654");
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(format_integer(2.5), "3");
        assert_eq!(format_integer(-2.5), "-3");
        assert_eq!(format_integer(1e-7), "0");
    }

    #[test]
    fn large_values_keep_only_significant_digits() {
        assert_eq!(format_integer(1e21), "1,000,000,000,000,000,000,000");
        assert_eq!(
            format_integer(2f64.powi(70)),
            "1,180,591,620,717,411,300,000"
        );
        assert_eq!(
            format_integer(2f64.powi(53)),
            "9,007,199,254,740,992"
        );
    }

    #[test]
    fn typed_operands_beyond_exact_integers_pad_with_zeros() {
        assert_eq!(
            format_operand(Some("12345678901234567891")).as_deref(),
            Some("12,345,678,901,234,567,000")
        );
        assert_eq!(
            format_operand(Some("121932631112635260")).as_deref(),
            Some("121,932,631,112,635,260")
        );
    }

    #[test]
    fn negative_zero_keeps_its_sign() {
        assert_eq!(format_integer(-0.0), "-0");
        assert_eq!(format_integer(-0.4), "-0");
    }

    #[test]
    fn non_finite_values_have_fixed_renderings() {
        assert_eq!(format_integer(f64::NAN), "NaN");
        assert_eq!(format_integer(f64::INFINITY), "∞");
        assert_eq!(format_integer(f64::NEG_INFINITY), "-∞");
    }

    #[test]
    fn operand_keeps_decimal_part_verbatim() {
        assert_eq!(format_operand(Some("1000.500")).as_deref(), Some("1,000.500"));
        assert_eq!(format_operand(Some("0.")).as_deref(), Some("0."));
        assert_eq!(format_operand(Some("3.14159")).as_deref(), Some("3.14159"));
    }

    #[test]
    fn operand_results_format_through_their_value() {
        assert_eq!(format_operand(Some("-5")).as_deref(), Some("-5"));
        assert_eq!(format_operand(Some("Infinity")).as_deref(), Some("∞"));
        assert_eq!(format_operand(Some("-Infinity")).as_deref(), Some("-∞"));
        assert_eq!(format_operand(Some("NaN")).as_deref(), Some("NaN"));
        assert_eq!(
            format_operand(Some("1e+21")).as_deref(),
            Some("1,000,000,000,000,000,000,000")
        );
        assert_eq!(format_operand(Some("1.5e+21")).as_deref(), Some("1.5e+21"));
    }

    #[test]
    fn empty_integer_part_renders_nan() {
        assert_eq!(format_operand(Some("")).as_deref(), Some("NaN"));
        assert_eq!(format_operand(Some(".")).as_deref(), Some("NaN."));
        assert_eq!(format_operand(Some(".5")).as_deref(), Some("NaN.5"));
    }

    #[test]
    fn absent_operand_stays_absent() {
        assert_eq!(format_operand(None), None);
    }
}
