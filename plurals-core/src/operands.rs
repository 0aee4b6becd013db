//! CLDR operand decomposition.
//!
//! Plural conditions never look at a number directly. They look at the
//! operands defined by UTS #35:
//!
//! | operand | meaning | `"1.50"` |
//! |---------|---------|----------|
//! | `n` | absolute value | 1.5 |
//! | `i` | integer digits | 1 |
//! | `v` | visible fraction digit count | 2 |
//! | `w` | fraction digit count without trailing zeros | 1 |
//! | `f` | visible fraction digits | 50 |
//! | `t` | fraction digits without trailing zeros | 5 |
//! | `e` | compact decimal exponent (`c` is a synonym) | 0 |
//!
//! `1.5` and `"1.50"` therefore differ: the string keeps its trailing zero.

use crate::{PluralError, Result};
use std::str::FromStr;

/// Largest number of digits kept for `i`, `f` and `t`.
///
/// Every modulus used by CLDR divides 10^18, so keeping the low 18 integer
/// digits preserves all rule outcomes.
pub const MAX_DIGITS: usize = 18;

/// Operands of a plural value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PluralOperands {
    /// Absolute value
    pub n: f64,
    /// Integer digits of `n`
    pub i: u64,
    /// Number of visible fraction digits, with trailing zeros
    pub v: usize,
    /// Number of visible fraction digits, without trailing zeros
    pub w: usize,
    /// Visible fraction digits, with trailing zeros
    pub f: u64,
    /// Visible fraction digits, without trailing zeros
    pub t: u64,
    /// Compact decimal exponent
    pub e: u32,
}

impl PluralOperands {
    /// Operands of a non-negative integer.
    pub fn from_integer(value: u64) -> Self {
        Self {
            n: value as f64,
            i: value,
            ..Self::default()
        }
    }

    /// Whether the value has no visible fraction digits.
    pub fn is_integer(&self) -> bool {
        self.v == 0
    }

    fn from_parts(int_digits: &str, frac_digits: &str, exponent: u32) -> Result<Self> {
        if frac_digits.len() > MAX_DIGITS {
            return Err(PluralError::InvalidOperand(format!(
                "more than {} fraction digits",
                MAX_DIGITS
            )));
        }

        let significant = int_digits.trim_start_matches('0');
        let low = &significant[significant.len().saturating_sub(MAX_DIGITS)..];
        let i = parse_digits(low)?;

        let trimmed = frac_digits.trim_end_matches('0');
        let f = parse_digits(frac_digits)?;
        let t = parse_digits(trimmed)?;

        let n = if frac_digits.is_empty() {
            int_digits.parse::<f64>()
        } else {
            format!("{}.{}", int_digits, frac_digits).parse::<f64>()
        }
        .map_err(|e| PluralError::InvalidOperand(e.to_string()))?;

        Ok(Self {
            n,
            i,
            v: frac_digits.len(),
            w: trimmed.len(),
            f,
            t,
            e: exponent,
        })
    }
}

fn parse_digits(digits: &str) -> Result<u64> {
    if digits.is_empty() {
        return Ok(0);
    }
    digits
        .parse::<u64>()
        .map_err(|e| PluralError::InvalidOperand(format!("{:?}: {}", digits, e)))
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

impl FromStr for PluralOperands {
    type Err = PluralError;

    /// Parse a decimal literal such as `"3"`, `"-1.50"` or `"1.2c6"`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || PluralError::InvalidOperand(format!("{:?} is not a decimal number", s));

        let trimmed = s.trim();
        let unsigned = trimmed
            .strip_prefix('-')
            .or_else(|| trimmed.strip_prefix('+'))
            .unwrap_or(trimmed);

        let (mantissa, exponent) = match unsigned.find(['c', 'e', 'C', 'E']) {
            Some(pos) => {
                let raw = &unsigned[pos + 1..];
                if !all_digits(raw) {
                    return Err(invalid());
                }
                let exponent: u32 = raw.parse().map_err(|_| invalid())?;
                if exponent as usize > MAX_DIGITS {
                    return Err(PluralError::InvalidOperand(format!(
                        "exponent {} out of range",
                        exponent
                    )));
                }
                (&unsigned[..pos], exponent)
            }
            None => (unsigned, 0),
        };

        let (int_part, frac_part) = match mantissa.split_once('.') {
            Some((int_part, frac_part)) if all_digits(int_part) && all_digits(frac_part) => {
                (int_part, frac_part)
            }
            None if all_digits(mantissa) => (mantissa, ""),
            _ => return Err(invalid()),
        };

        // Compact notation moves the decimal point right by the exponent.
        let shift = exponent as usize;
        if shift == 0 {
            return Self::from_parts(int_part, frac_part, 0);
        }
        let (int_digits, frac_digits) = if shift >= frac_part.len() {
            let mut digits = String::with_capacity(int_part.len() + shift);
            digits.push_str(int_part);
            digits.push_str(frac_part);
            digits.extend(std::iter::repeat_n('0', shift - frac_part.len()));
            (digits, "")
        } else {
            (
                format!("{}{}", int_part, &frac_part[..shift]),
                &frac_part[shift..],
            )
        };
        Self::from_parts(&int_digits, frac_digits, exponent)
    }
}

impl TryFrom<f64> for PluralOperands {
    type Error = PluralError;

    /// Uses the shortest decimal representation of the float, so `1.5`
    /// has one visible fraction digit and `2.0` has none.
    fn try_from(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(PluralError::InvalidOperand(format!("{} is not finite", value)));
        }
        let shortest = value.abs().to_string();
        match shortest.parse::<Self>() {
            Ok(operands) => Ok(operands),
            // Tiny magnitudes print with more fraction digits than we keep.
            Err(_) => format!("{:.*}", MAX_DIGITS, value.abs())
                .trim_end_matches('0')
                .trim_end_matches('.')
                .parse(),
        }
    }
}

impl TryFrom<&str> for PluralOperands {
    type Error = PluralError;

    fn try_from(value: &str) -> Result<Self> {
        value.parse()
    }
}

impl From<&PluralOperands> for PluralOperands {
    fn from(value: &PluralOperands) -> Self {
        *value
    }
}

macro_rules! impl_from_unsigned {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for PluralOperands {
                fn from(value: $ty) -> Self {
                    Self::from_integer(value as u64)
                }
            }
        )*
    };
}

macro_rules! impl_from_signed {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for PluralOperands {
                fn from(value: $ty) -> Self {
                    Self::from_integer(value.unsigned_abs() as u64)
                }
            }
        )*
    };
}

impl_from_unsigned!(u8, u16, u32, u64, usize);
impl_from_signed!(i8, i16, i32, i64, isize);
