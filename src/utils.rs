//! Numeric helpers that follow the browser's number semantics, so values read
//! from form fields behave the same as they would in page script.

use once_cell::sync::Lazy;
use regex::Regex;

// Compiled regexes for number parsing
static PARSE_INT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([+-]?)(?:0[xX]([0-9a-fA-F]*)|([0-9]+))").unwrap());
static DECIMAL_LITERAL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$").unwrap());
static RADIX_LITERAL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^0(?:([xX])([0-9a-fA-F]+)|([oO])([0-7]+)|([bB])([01]+))$").unwrap());
static PLAIN_DECIMAL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([+-]?)([0-9]*)(?:\.([0-9]*))?$").unwrap());

fn digits_to_f64(digits: &str, radix: u32) -> f64 {
    if radix == 10 {
        // correctly rounded, even past 2^53
        return digits.parse::<f64>().unwrap_or(f64::NAN);
    }
    digits
        .chars()
        .filter_map(|c| c.to_digit(radix))
        .fold(0.0, |acc, d| acc * radix as f64 + d as f64)
}

/// Whitespace as page script sees it: `WhiteSpace` plus `LineTerminator`.
/// Unlike `char::is_whitespace` this includes U+FEFF and excludes U+0085.
pub fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'
            | '\u{000A}'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

fn js_trim(input: &str) -> &str {
    input.trim_matches(is_js_whitespace)
}

/// Split a plain decimal string (`"-1234.50"`, `".5"`, `"7."`) into its sign,
/// integer digits and fraction digits without going through `f64`.
/// Exponents, radix prefixes and empty input give `None`.
pub fn split_plain_decimal(input: &str) -> Option<(bool, &str, &str)> {
    let captures = PLAIN_DECIMAL_REGEX.captures(js_trim(input))?;
    let integer = captures.get(2).map_or("", |m| m.as_str());
    let fraction = captures.get(3).map_or("", |m| m.as_str());
    if integer.is_empty() && fraction.is_empty() {
        return None;
    }
    Some((&captures[1] == "-", integer, fraction))
}

/// Integer parsing with `parseInt` rules: leading whitespace and an optional
/// sign are skipped, then the longest run of digits is read and the rest is
/// ignored. Returns `NaN` when no digits are found.
///
/// ```
/// use price_slider::utils::parse_int;
/// assert_eq!(parse_int(" 4500 "), 4500.0);
/// assert_eq!(parse_int("12.9kg"), 12.0);
/// assert!(parse_int("abc").is_nan());
/// ```
pub fn parse_int(input: &str) -> f64 {
    let trimmed = input.trim_start_matches(is_js_whitespace);
    let Some(captures) = PARSE_INT_REGEX.captures(trimmed) else {
        return f64::NAN;
    };

    let magnitude = match (captures.get(2), captures.get(3)) {
        (Some(hex), _) if hex.as_str().is_empty() => return f64::NAN,
        (Some(hex), _) => digits_to_f64(hex.as_str(), 16),
        (None, Some(dec)) => digits_to_f64(dec.as_str(), 10),
        (None, None) => return f64::NAN,
    };

    if &captures[1] == "-" {
        -magnitude
    } else {
        magnitude
    }
}

/// Whole-string conversion with `Number()` rules: surrounding whitespace is
/// ignored, the empty string is zero, and anything that is not a complete
/// numeric literal is `NaN`.
pub fn to_number(input: &str) -> f64 {
    let trimmed = js_trim(input);
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if DECIMAL_LITERAL_REGEX.is_match(trimmed) {
        return trimmed.parse::<f64>().unwrap_or(f64::NAN);
    }

    if let Some(captures) = RADIX_LITERAL_REGEX.captures(trimmed) {
        let (radix, digits) = if captures.get(1).is_some() {
            (16, &captures[2])
        } else if captures.get(3).is_some() {
            (8, &captures[4])
        } else {
            (2, &captures[6])
        };
        return digits_to_f64(digits, radix);
    }

    f64::NAN
}

/// Render a number the way string concatenation does in page script
/// (`String(value)`), e.g. `100`, `33.33333333333333`, `1e-7`, `NaN`.
pub fn number_to_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    // `{:e}` yields the shortest round-tripping digits, e.g. "-3.3333e1"
    let scientific = format!("{:e}", value.abs());
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some(parts) => parts,
        None => return value.to_string(),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let k = digits.len() as i32;
    let n = exponent + 1;

    let body = if k <= n && n <= 21 {
        format!("{}{}", digits, "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        format!("{}.{}", &digits[..n as usize], &digits[n as usize..])
    } else if -6 < n && n <= 0 {
        format!("0.{}{}", "0".repeat((-n) as usize), digits)
    } else {
        let sign = if n - 1 < 0 { '-' } else { '+' };
        let (head, tail) = digits.split_at(1);
        if tail.is_empty() {
            format!("{}e{}{}", head, sign, (n - 1).abs())
        } else {
            format!("{}.{}e{}{}", head, tail, sign, (n - 1).abs())
        }
    };

    if value < 0.0 {
        format!("-{}", body)
    } else {
        body
    }
}
