//! Conversions between operand strings and `f64`.
//!
//! Operands are stored as text. Reading them back uses prefix parsing (the
//! longest leading numeric literal wins, anything unparsable is `NaN`) and
//! computed results are written in the shortest form that round-trips,
//! switching to exponent notation outside `[1e-6, 1e21)`.

/// Parse the longest numeric prefix of `input` as an `f64`.
///
/// Leading whitespace is skipped. A prefix may be an optionally signed
/// `Infinity`, or an optionally signed decimal literal with an optional
/// exponent. When no prefix is numeric the result is `NaN`.
///
/// ```rust
/// use keypad_calc::core::parse_float;
///
/// assert_eq!(parse_float("12.5"), 12.5);
/// assert_eq!(parse_float("1e+21"), 1e21);
/// assert_eq!(parse_float("-Infinity"), f64::NEG_INFINITY);
/// assert!(parse_float("").is_nan());
/// assert!(parse_float(".").is_nan());
/// ```
pub fn parse_float(input: &str) -> f64 {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        end += 1 + frac_digits;
    }

    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Render an `f64` the way a computed result is stored in an operand.
///
/// ```rust
/// use keypad_calc::core::number_to_string;
///
/// assert_eq!(number_to_string(20.0), "20");
/// assert_eq!(number_to_string(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(number_to_string(1e21), "1e+21");
/// assert_eq!(number_to_string(f64::INFINITY), "Infinity");
/// ```
pub fn number_to_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let (digits, exponent) = shortest_digits(value.abs());
    format!("{sign}{}", layout_digits(&digits, exponent))
}

/// Shortest round-trip significand digits and the decimal exponent `n`
/// such that `value = 0.d1d2d3... * 10^n`.
pub(crate) fn shortest_digits(value: f64) -> (String, i32) {
    // LowerExp already emits the shortest representation that round-trips.
    let scientific = format!("{value:e}");
    let (mantissa, exp) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let exp: i32 = exp.parse().unwrap_or(0);
    (digits, exp + 1)
}

fn layout_digits(digits: &str, n: i32) -> String {
    let k = digits.len() as i32;

    if k <= n && n <= 21 {
        return format!("{digits}{}", "0".repeat((n - k) as usize));
    }
    if 0 < n && n <= 21 {
        let (int_part, frac_part) = digits.split_at(n as usize);
        return format!("{int_part}.{frac_part}");
    }
    if -6 < n && n <= 0 {
        return format!("0.{}{digits}", "0".repeat((-n) as usize));
    }

    let e = n - 1;
    let exp_sign = if e >= 0 { '+' } else { '-' };
    let (lead, rest) = digits.split_at(1);
    if rest.is_empty() {
        format!("{lead}e{exp_sign}{}", e.abs())
    } else {
        format!("{lead}.{rest}e{exp_sign}{}", e.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_operands() {
        assert_eq!(parse_float("0"), 0.0);
        assert_eq!(parse_float("007"), 7.0);
        assert_eq!(parse_float("12."), 12.0);
        assert_eq!(parse_float(".5"), 0.5);
        assert_eq!(parse_float("-5"), -5.0);
    }

    #[test]
    fn parses_longest_numeric_prefix() {
        assert_eq!(parse_float("12.5abc"), 12.5);
        assert_eq!(parse_float("3e"), 3.0);
        assert_eq!(parse_float("3e+"), 3.0);
        assert_eq!(parse_float("1.5e-7"), 1.5e-7);
        assert_eq!(parse_float("  42"), 42.0);
    }

    #[test]
    fn unparsable_input_is_nan() {
        assert!(parse_float("").is_nan());
        assert!(parse_float(".").is_nan());
        assert!(parse_float("-").is_nan());
        assert!(parse_float("NaN").is_nan());
        assert!(parse_float("inf").is_nan());
        assert!(parse_float("abc").is_nan());
    }

    #[test]
    fn parses_signed_infinities() {
        assert_eq!(parse_float("Infinity"), f64::INFINITY);
        assert_eq!(parse_float("+Infinity"), f64::INFINITY);
        assert_eq!(parse_float("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn integers_render_without_fraction() {
        assert_eq!(number_to_string(5.0), "5");
        assert_eq!(number_to_string(-12.0), "-12");
        assert_eq!(number_to_string(1e20), "100000000000000000000");
    }

    #[test]
    fn negative_zero_renders_as_zero() {
        assert_eq!(number_to_string(-0.0), "0");
    }

    #[test]
    fn fractions_use_shortest_round_trip_digits() {
        assert_eq!(number_to_string(12.5), "12.5");
        assert_eq!(number_to_string(1.0 / 3.0), "0.3333333333333333");
        assert_eq!(number_to_string(0.000001), "0.000001");
        assert_eq!(number_to_string(-0.25), "-0.25");
    }

    #[test]
    fn extreme_magnitudes_use_exponent_form() {
        assert_eq!(number_to_string(1e21), "1e+21");
        assert_eq!(number_to_string(1.5e21), "1.5e+21");
        assert_eq!(number_to_string(1e-7), "1e-7");
        assert_eq!(number_to_string(-2.5e-8), "-2.5e-8");
        assert_eq!(number_to_string(f64::MAX), "1.7976931348623157e+308");
    }

    #[test]
    fn non_finite_values_render_by_name() {
        assert_eq!(number_to_string(f64::NAN), "NaN");
        assert_eq!(number_to_string(f64::INFINITY), "Infinity");
        assert_eq!(number_to_string(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn rendered_results_parse_back() {
        for value in [20.0, -0.125, 1e21, 3.14159, 1e-9, 123456789.0] {
            assert_eq!(parse_float(&number_to_string(value)), value);
        }
    }
}
