//! Conversions between entry text and `f64`.
//!
//! Entry text is parsed leniently: the longest numeric prefix wins and
//! anything after it is ignored. Results are formatted back with the
//! shortest digit string that round-trips, so `0.1 + 0.2` shows as
//! `0.30000000000000004` and `7.0` shows as `7`.

/// Parse the numeric prefix of `text`.
///
/// Leading whitespace is skipped. An optional sign may be followed by
/// `Infinity` or by a decimal literal with an optional fraction and
/// exponent. Returns `NaN` when no numeric prefix exists.
///
/// # Example
///
/// ```rust
/// use calcpad::core::parse_float;
///
/// assert_eq!(parse_float("42"), 42.0);
/// assert_eq!(parse_float("1.2.3"), 1.2);
/// assert_eq!(parse_float("-Infinity"), f64::NEG_INFINITY);
/// assert!(parse_float("abc").is_nan());
/// ```
pub fn parse_float(text: &str) -> f64 {
    let bytes = text.trim_start().as_bytes();
    let mut pos = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };
    let sign = if negative { -1.0 } else { 1.0 };

    if bytes[pos..].starts_with(b"Infinity") {
        return sign * f64::INFINITY;
    }

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let int_digits = &bytes[int_start..pos];

    let mut frac_digits: &[u8] = &[];
    if pos < bytes.len() && bytes[pos] == b'.' {
        let frac_start = pos + 1;
        let mut end = frac_start;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        frac_digits = &bytes[frac_start..end];
        pos = end;
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return f64::NAN;
    }

    // An exponent only counts when at least one digit follows it.
    let mut exponent: &[u8] = &[];
    if pos < bytes.len() && matches!(bytes[pos], b'e' | b'E') {
        let mut end = pos + 1;
        if end < bytes.len() && matches!(bytes[end], b'+' | b'-') {
            end += 1;
        }
        let digits_start = end;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        if end > digits_start {
            exponent = &bytes[pos + 1..end];
        }
    }

    let mut literal = String::with_capacity(int_digits.len() + frac_digits.len() + 8);
    if negative {
        literal.push('-');
    }
    push_digits(&mut literal, int_digits);
    literal.push('.');
    push_digits(&mut literal, frac_digits);
    if !exponent.is_empty() {
        literal.push('e');
        literal.extend(exponent.iter().map(|&b| b as char));
    }

    literal.parse().unwrap_or(f64::NAN)
}

fn push_digits(out: &mut String, digits: &[u8]) {
    if digits.is_empty() {
        out.push('0');
    } else {
        out.extend(digits.iter().map(|&b| b as char));
    }
}

/// Format `value` the way it appears on the display.
///
/// Uses the shortest round-trip digits. Decimal notation is used while the
/// decimal exponent lies in `[-6, 21)`, exponent notation (`1e+21`,
/// `1e-7`) outside it. Negative zero prints as `0`.
///
/// # Example
///
/// ```rust
/// use calcpad::core::format_number;
///
/// assert_eq!(format_number(7.0), "7");
/// assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_number(f64::NAN), "NaN");
/// assert_eq!(format_number(1e21), "1e+21");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };

    // `{:e}` yields the shortest round-trip digits, e.g. "1.2345e3".
    let scientific = format!("{:e}", value.abs());
    let (mantissa, exp) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    let n = exp + 1;

    let body = if k <= n && n <= 21 {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int_part, frac_part) = digits.split_at(n as usize);
        format!("{int_part}.{frac_part}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat((-n) as usize))
    } else {
        let exp_sign = if n - 1 < 0 { '-' } else { '+' };
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{lead}e{exp_sign}{}", (n - 1).abs())
        } else {
            format!("{lead}.{rest}e{exp_sign}{}", (n - 1).abs())
        }
    };

    format!("{sign}{body}")
}

/// Serde adapter that stores an `f64` as its display text.
///
/// JSON has no NaN or Infinity, so `serde_json` would write them as `null`
/// and then refuse to read them back.
pub(crate) mod as_text {
    use super::{format_number, parse_float};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_number(*value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Ok(parse_float(&text))
    }
}
