//! Rendering of [`Number`]s as decimal strings.
//!
//! Exact values print exactly: integers with all of their digits, rationals as `numerator /
//! denominator`. Reals print rounded to a number of significant digits, switching to scientific
//! notation (`d.ddd*10^e`) when the magnitude strays too far from 1 for fixed notation to be
//! readable.

use rug::{float::Round, Float};
use std::fmt::{self, Display, Formatter};
use super::{Number, DEFAULT_DIGITS};

/// Formats a [`Float`] to the given number of significant digits.
///
/// Fixed notation is used when the exponent of the leading digit is at least -4 and less than
/// `digits`; otherwise the value is rendered in scientific notation. Trailing zeros after the
/// decimal point are trimmed in both forms.
pub fn format_float(value: &Float, digits: usize) -> String {
    if value.is_zero() {
        return String::from("0");
    }

    let (sign, mantissa, exp) = value.to_sign_string_exp_round(10, Some(digits), Round::Nearest);
    // `exp` is the count of digits to the left of the decimal point, so the leading digit has
    // magnitude 10^(exp - 1)
    let exp = exp.unwrap_or(0) as isize;
    let mantissa = mantissa.trim_end_matches('0');
    let mantissa = if mantissa.is_empty() { "0" } else { mantissa };

    let mut out = String::new();
    if sign {
        out.push('-');
    }

    let leading = exp - 1;
    if leading >= digits as isize || leading < -4 {
        out.push_str(&mantissa[..1]);
        if mantissa.len() > 1 {
            out.push('.');
            out.push_str(&mantissa[1..]);
        }
        out.push_str("*10^");
        out.push_str(&leading.to_string());
    } else if exp <= 0 {
        out.push_str("0.");
        for _ in exp..0 {
            out.push('0');
        }
        out.push_str(mantissa);
    } else if exp as usize >= mantissa.len() {
        out.push_str(mantissa);
        for _ in mantissa.len()..exp as usize {
            out.push('0');
        }
    } else {
        out.push_str(&mantissa[..exp as usize]);
        out.push('.');
        out.push_str(&mantissa[exp as usize..]);
    }

    out
}

/// Formats a [`Number`] to the given number of significant digits, approximating exact values.
pub fn format_precision(value: &Number, digits: usize) -> String {
    format_float(&value.to_float(), digits)
}

impl Display for Number {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(n) => write!(f, "{}", n),
            Number::Rational(n) => write!(f, "{}/{}", n.numer(), n.denom()),
            Number::Real(n) => write!(f, "{}", format_float(n, DEFAULT_DIGITS)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::{float, int, rational};
    use pretty_assertions::assert_eq;
    use rug::ops::Pow;

    #[test]
    fn fixed_notation() {
        assert_eq!(format_float(&float(120), 8), "120");
        assert_eq!(format_float(&float(1.5), 8), "1.5");
        assert_eq!(format_float(&float(-0.25), 8), "-0.25");
        assert_eq!(format_float(&float(0), 8), "0");
    }

    #[test]
    fn scientific_notation() {
        let large = float(int(10).pow(10000));
        assert_eq!(format_float(&large, 8), "1*10^10000");

        let small = float(0.00001);
        assert_eq!(format_float(&small, 8), "1*10^-5");
    }

    #[test]
    fn boundary_between_notations() {
        // 0.0001 has leading digit at 10^-4, which still renders fixed
        assert_eq!(format_float(&float(0.0001), 8), "0.0001");
        // 10^8 at 8 significant digits no longer fits fixed notation
        assert_eq!(format_float(&float(100_000_000), 8), "1*10^8");
        assert_eq!(format_float(&float(10_000_000), 8), "10000000");
    }

    #[test]
    fn exact_display() {
        assert_eq!(Number::Integer(int(42)).to_string(), "42");
        assert_eq!(Number::Rational(rational((-1, 1000))).to_string(), "-1/1000");
    }
}
