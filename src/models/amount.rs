//! Amount type for expense and budget values
//!
//! Amounts are plain `f64` values. Parsing is lenient: the longest numeric
//! prefix of the input is used and input without one becomes NaN, which then
//! propagates through every sum and difference.

use std::fmt;
use std::ops::{Add, Sub};

/// Text shown for a non-finite positive amount
const INFINITY_TEXT: &str = "Infinity";

/// Magnitudes from here up are shown in exponent form
const EXPONENT_ABOVE: f64 = 1e21;

/// Non-zero magnitudes below this are shown in exponent form
const EXPONENT_BELOW: f64 = 1e-6;

/// Enough fraction digits to print any `f64` exactly
const EXACT_FRACTION_DIGITS: usize = 1074;

/// A monetary amount as entered by the user
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Amount(f64);

impl Amount {
    /// Create an amount from a raw value
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Create a zero amount
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Get the underlying value
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Check if the amount is NaN
    pub fn is_nan(&self) -> bool {
        self.0.is_nan()
    }

    /// Check if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }

    /// Parse an amount from user input
    ///
    /// Leading whitespace is skipped, then the longest prefix of the form
    /// `[+-]digits[.digits][e[+-]digits]` (or `[+-]Infinity`) is read.
    /// Anything after that prefix is ignored. Input without a numeric
    /// prefix yields NaN; this never fails.
    ///
    /// # Examples
    /// ```
    /// use expense_tracker::models::Amount;
    /// assert_eq!(Amount::parse("12.5").value(), 12.5);
    /// assert_eq!(Amount::parse(" 7abc").value(), 7.0);
    /// assert!(Amount::parse("abc").is_nan());
    /// ```
    pub fn parse(input: &str) -> Self {
        let s = input.trim_start();
        let bytes = s.as_bytes();
        let len = bytes.len();

        let mut end = 0;
        if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
            end = 1;
        }

        if s[end..].starts_with(INFINITY_TEXT) {
            return if s.starts_with('-') {
                Self(f64::NEG_INFINITY)
            } else {
                Self(f64::INFINITY)
            };
        }

        let int_start = end;
        while end < len && bytes[end].is_ascii_digit() {
            end += 1;
        }
        let mut digits = end - int_start;

        if end < len && bytes[end] == b'.' {
            let frac_start = end + 1;
            let mut frac_end = frac_start;
            while frac_end < len && bytes[frac_end].is_ascii_digit() {
                frac_end += 1;
            }
            let frac_digits = frac_end - frac_start;
            if digits + frac_digits > 0 {
                end = frac_end;
                digits += frac_digits;
            }
        }

        if digits == 0 {
            return Self(f64::NAN);
        }

        // Exponent only counts when at least one digit follows it
        if end < len && (bytes[end] == b'e' || bytes[end] == b'E') {
            let mut exp_end = end + 1;
            if exp_end < len && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
                exp_end += 1;
            }
            let exp_digits_start = exp_end;
            while exp_end < len && bytes[exp_end].is_ascii_digit() {
                exp_end += 1;
            }
            if exp_end > exp_digits_start {
                end = exp_end;
            }
        }

        s[..end].parse::<f64>().map(Self).unwrap_or(Self(f64::NAN))
    }

    /// Format rounded to two decimal places, e.g. `70.00` or `NaN`
    ///
    /// Rounding works on the exact binary value, and a value exactly halfway
    /// between two cents rounds away from zero (`0.125` gives `0.13`). The
    /// sign is kept even when the rounded value is zero. Magnitudes of 1e21
    /// and above use the shortest form instead.
    pub fn format_fixed(&self) -> String {
        if let Some(text) = non_finite_text(self.0) {
            return text.to_string();
        }

        let magnitude = self.0.abs();
        if magnitude >= EXPONENT_ABOVE {
            return self.to_string();
        }

        let cents = round_to_cents(magnitude);
        if self.0 < 0.0 {
            format!("-{}", cents)
        } else {
            cents
        }
    }

    /// Format rounded to two decimals with a leading currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        format!("{}{}", symbol, self.format_fixed())
    }
}

/// Round a non-negative finite value to two decimals, halves going up
fn round_to_cents(magnitude: f64) -> String {
    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, magnitude);
    let (whole, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let fraction = fraction.as_bytes();
    let digit = |i: usize| fraction.get(i).copied().unwrap_or(b'0');

    let mut digits: Vec<u8> = whole.bytes().collect();
    digits.push(digit(0));
    digits.push(digit(1));

    if digit(2) >= b'5' {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - 2;
    let (whole, cents) = digits.split_at(split);
    format!(
        "{}.{}",
        String::from_utf8_lossy(whole),
        String::from_utf8_lossy(cents)
    )
}

fn non_finite_text(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("NaN")
    } else if value == f64::INFINITY {
        Some(INFINITY_TEXT)
    } else if value == f64::NEG_INFINITY {
        Some("-Infinity")
    } else {
        None
    }
}

/// Shortest form of the value: `12.5`, `12`, `NaN`, `1e+21`, `1e-7`
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(text) = non_finite_text(self.0) {
            return f.write_str(text);
        }
        if self.0 == 0.0 {
            // Covers -0.0 as well
            return f.write_str("0");
        }

        let magnitude = self.0.abs();
        if magnitude >= EXPONENT_ABOVE || magnitude < EXPONENT_BELOW {
            let text = format!("{:e}", self.0);
            return match text.split_once('e') {
                Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                    write!(f, "{}e+{}", mantissa, exponent)
                }
                _ => f.write_str(&text),
            };
        }

        write!(f, "{}", self.0)
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sub for Amount {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + a)
    }
}

impl<'a> std::iter::Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
