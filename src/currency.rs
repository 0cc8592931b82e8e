//! Currency display strings for the price range labels.
//!
//! Amounts are grouped the way the `en-IN` locale groups them: the last three
//! integer digits form one group and everything before that is split into
//! pairs (`1,50,000`). At most three fraction digits are kept, rounding ties
//! away from zero on the exact decimal value, and trailing zeros are dropped.

use crate::config::CURRENCY_LABEL;
use crate::utils::{split_plain_decimal, to_number};

const MAX_FRACTION_DIGITS: usize = 3;
// Every finite f64 has an exact decimal expansion within this many places.
const EXACT_FRACTION_DIGITS: usize = 1074;

/// A price held as decimal digits, so rounding sees the exact value.
#[derive(Debug, Clone, PartialEq)]
pub enum Amount {
    NaN,
    Infinite { negative: bool },
    Decimal {
        negative: bool,
        integer: String,
        fraction: String,
    },
}

impl Amount {
    pub fn from_f64(value: f64) -> Self {
        if value.is_nan() {
            return Amount::NaN;
        }
        let negative = value.is_sign_negative();
        if value.is_infinite() {
            return Amount::Infinite { negative };
        }

        let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
        let (integer, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
        Amount::Decimal {
            negative,
            integer: integer.to_string(),
            fraction: fraction.trim_end_matches('0').to_string(),
        }
    }

    /// Field strings that are plain decimals keep every digit; anything
    /// else goes through `Number()` first.
    pub fn from_field(raw: &str) -> Self {
        match split_plain_decimal(raw) {
            Some((negative, integer, fraction)) => Amount::Decimal {
                negative,
                integer: integer.to_string(),
                fraction: fraction.to_string(),
            },
            None => Amount::from_f64(to_number(raw)),
        }
    }
}

/// Anything that can be shown as a price: plain numbers, or the raw string
/// held by a form field.
pub trait ToPrice {
    fn to_price(&self) -> f64;

    fn to_amount(&self) -> Amount {
        Amount::from_f64(self.to_price())
    }
}

impl ToPrice for f64 {
    fn to_price(&self) -> f64 {
        *self
    }
}

impl ToPrice for u32 {
    fn to_price(&self) -> f64 {
        *self as f64
    }
}

impl ToPrice for i64 {
    fn to_price(&self) -> f64 {
        *self as f64
    }
}

impl ToPrice for str {
    fn to_price(&self) -> f64 {
        to_number(self)
    }

    fn to_amount(&self) -> Amount {
        Amount::from_field(self)
    }
}

impl ToPrice for String {
    fn to_price(&self) -> f64 {
        to_number(self)
    }

    fn to_amount(&self) -> Amount {
        Amount::from_field(self)
    }
}

impl<T: ToPrice + ?Sized> ToPrice for &T {
    fn to_price(&self) -> f64 {
        (**self).to_price()
    }

    fn to_amount(&self) -> Amount {
        (**self).to_amount()
    }
}

/// Format with the default label, e.g. `format_currency(75000.0) == "PKR75,000"`.
pub fn format_currency<T: ToPrice + ?Sized>(value: &T) -> String {
    format_currency_with(CURRENCY_LABEL, value)
}

pub fn format_currency_with<T: ToPrice + ?Sized>(label: &str, value: &T) -> String {
    format!("{}{}", label, format_amount(&value.to_amount()))
}

/// Locale-grouped rendering of a number without any label.
pub fn format_grouped(value: f64) -> String {
    format_amount(&Amount::from_f64(value))
}

pub fn format_amount(amount: &Amount) -> String {
    let (negative, integer, fraction) = match amount {
        Amount::NaN => return "NaN".to_string(),
        Amount::Infinite { negative } => {
            return if *negative { "-∞" } else { "∞" }.to_string();
        }
        Amount::Decimal {
            negative,
            integer,
            fraction,
        } => (*negative, integer, fraction),
    };

    let (integer, fraction) = round_half_expand(integer, fraction, MAX_FRACTION_DIGITS);

    let mut out = String::with_capacity(integer.len() * 3 / 2 + fraction.len() + 2);
    if negative {
        out.push('-');
    }
    out.push_str(&group_indian(&integer));
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(&fraction);
    }
    out
}

/// Round to `places` fraction digits with ties away from zero. Returns the
/// integer digits (at least `"0"`) and the fraction without trailing zeros.
fn round_half_expand(integer: &str, fraction: &str, places: usize) -> (String, String) {
    let mut digits: Vec<u8> = integer
        .trim_start_matches('0')
        .bytes()
        .chain(fraction.bytes().chain(std::iter::repeat(b'0')).take(places))
        .collect();

    if fraction.as_bytes().get(places).is_some_and(|d| *d >= b'5') {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, b'1');
                break;
            }
            i -= 1;
            if digits[i] == b'9' {
                digits[i] = b'0';
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let split = digits.len() - places;
    let integer: String = digits[..split].iter().map(|&d| d as char).collect();
    let fraction: String = digits[split..].iter().map(|&d| d as char).collect();
    let integer = if integer.is_empty() { "0".to_string() } else { integer };
    (integer, fraction.trim_end_matches('0').to_string())
}

/// Insert separators into a plain digit string: `7500000` -> `75,00,000`.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, last_three) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::with_capacity(head.len() / 2 + 2);
    // a leading odd digit stands alone, the rest pair up
    let split = head.len() % 2;
    if split == 1 {
        groups.push(&head[..1]);
    }
    groups.extend(
        head.as_bytes()[split..]
            .chunks(2)
            .filter_map(|pair| std::str::from_utf8(pair).ok()),
    );
    groups.push(last_three);
    groups.join(",")
}
