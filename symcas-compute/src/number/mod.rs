//! Exact and approximate numeric values.
//!
//! Every numeric value in an expression is a [`Number`], which is an [`Integer`], a [`Rational`],
//! or a [`Float`] (here called a "real"). Arithmetic promotes operands upward along that ladder
//! when they disagree; results are canonicalized back down where exactness allows, so a
//! [`Rational`] with denominator 1 always becomes an [`Integer`]. A real is never demoted, even
//! when it happens to hold an integral value.

pub mod fmt;

use rug::{Float, Integer, Rational};
use std::cmp::Ordering;
use crate::primitive::{float, int};

/// The default number of significant digits used when rendering a number.
pub const DEFAULT_DIGITS: usize = 80;

/// A numeric value, stored at the lowest level of the ladder that can represent it exactly.
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    Integer(Integer),
    Rational(Rational),
    Real(Float),
}

impl Number {
    /// The position of this variant on the promotion ladder.
    fn rank(&self) -> u8 {
        match self {
            Number::Integer(_) => 0,
            Number::Rational(_) => 1,
            Number::Real(_) => 2,
        }
    }

    /// Promotes the value to the given rank. Demotion is not performed; a value already above the
    /// given rank is returned unchanged.
    fn promote(self, rank: u8) -> Number {
        match (self, rank) {
            (Number::Integer(n), 1) => Number::Rational(Rational::from(n)),
            (Number::Integer(n), 2) => Number::Real(float(n)),
            (Number::Rational(n), 2) => Number::Real(float(n)),
            (value, _) => value,
        }
    }

    /// Promotes both values to their common rank.
    fn promote_pair(lhs: Number, rhs: Number) -> (Number, Number) {
        let rank = lhs.rank().max(rhs.rank());
        (lhs.promote(rank), rhs.promote(rank))
    }

    /// Replaces a [`Rational`] with denominator 1 by the equivalent [`Integer`]. Reals are left
    /// untouched.
    pub fn canonicalize(self) -> Number {
        match self {
            Number::Rational(n) if *n.denom() == 1 => Number::Integer(n.into_numer_denom().0),
            value => value,
        }
    }

    /// Returns true if the value is exactly zero.
    pub fn is_zero(&self) -> bool {
        match self {
            Number::Integer(n) => n.is_zero(),
            Number::Rational(n) => n.numer().is_zero(),
            Number::Real(n) => n.is_zero(),
        }
    }

    /// Returns true if the value is exactly one.
    pub fn is_one(&self) -> bool {
        match self {
            Number::Integer(n) => *n == 1,
            Number::Rational(n) => *n == 1,
            Number::Real(n) => *n == 1,
        }
    }

    /// Returns true if the value is strictly negative.
    pub fn is_negative(&self) -> bool {
        match self {
            Number::Integer(n) => n.is_negative(),
            Number::Rational(n) => n.numer().is_negative(),
            Number::Real(n) => n.is_sign_negative() && !n.is_zero(),
        }
    }

    /// Returns true if the value is an exact integer.
    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    /// Returns the underlying [`Integer`] if the value is one.
    pub fn as_integer(&self) -> Option<&Integer> {
        match self {
            Number::Integer(n) => Some(n),
            _ => None,
        }
    }

    /// Converts the value to a [`Float`] without consuming it.
    pub fn to_float(&self) -> Float {
        match self {
            Number::Integer(n) => float(n),
            Number::Rational(n) => float(n),
            Number::Real(n) => n.clone(),
        }
    }

    /// Returns the absolute value.
    pub fn abs(self) -> Number {
        match self {
            Number::Integer(n) => Number::Integer(n.abs()),
            Number::Rational(n) => Number::Rational(n.abs()),
            Number::Real(n) => Number::Real(n.abs()),
        }
    }

    /// Divides the value by `rhs`, returning [`None`] if `rhs` is zero. Exact operands produce an
    /// exact (rational) result.
    pub fn checked_div(self, rhs: Number) -> Option<Number> {
        if rhs.is_zero() {
            return None;
        }

        Some(match Number::promote_pair(self, rhs) {
            (Number::Integer(a), Number::Integer(b)) => {
                Number::Rational(Rational::from((a, b))).canonicalize()
            },
            (Number::Rational(a), Number::Rational(b)) => Number::Rational(a / b).canonicalize(),
            (Number::Real(a), Number::Real(b)) => Number::Real(a / b),
            _ => unreachable!("both operands share a rank after promotion"),
        })
    }

    /// Compares two numbers by value, promoting as needed. Exact operands are compared exactly.
    pub fn cmp_value(&self, other: &Number) -> Ordering {
        match Number::promote_pair(self.clone(), other.clone()) {
            (Number::Integer(a), Number::Integer(b)) => a.cmp(&b),
            (Number::Rational(a), Number::Rational(b)) => a.cmp(&b),
            // domain checks keep NaN out of the tree, so the comparison always succeeds
            (Number::Real(a), Number::Real(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
            _ => unreachable!("both operands share a rank after promotion"),
        }
    }
}

impl From<Integer> for Number {
    fn from(n: Integer) -> Self {
        Number::Integer(n)
    }
}

impl From<Rational> for Number {
    fn from(n: Rational) -> Self {
        Number::Rational(n).canonicalize()
    }
}

impl From<Float> for Number {
    fn from(n: Float) -> Self {
        Number::Real(n)
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Number::Integer(int(n))
    }
}

impl std::ops::Add for Number {
    type Output = Number;

    fn add(self, rhs: Number) -> Number {
        match Number::promote_pair(self, rhs) {
            (Number::Integer(a), Number::Integer(b)) => Number::Integer(a + b),
            (Number::Rational(a), Number::Rational(b)) => Number::Rational(a + b).canonicalize(),
            (Number::Real(a), Number::Real(b)) => Number::Real(a + b),
            _ => unreachable!("both operands share a rank after promotion"),
        }
    }
}

impl std::ops::Sub for Number {
    type Output = Number;

    fn sub(self, rhs: Number) -> Number {
        self + (-rhs)
    }
}

impl std::ops::Mul for Number {
    type Output = Number;

    fn mul(self, rhs: Number) -> Number {
        match Number::promote_pair(self, rhs) {
            (Number::Integer(a), Number::Integer(b)) => Number::Integer(a * b),
            (Number::Rational(a), Number::Rational(b)) => Number::Rational(a * b).canonicalize(),
            (Number::Real(a), Number::Real(b)) => Number::Real(a * b),
            _ => unreachable!("both operands share a rank after promotion"),
        }
    }
}

impl std::ops::Neg for Number {
    type Output = Number;

    fn neg(self) -> Number {
        match self {
            Number::Integer(n) => Number::Integer(-n),
            Number::Rational(n) => Number::Rational(-n),
            Number::Real(n) => Number::Real(-n),
        }
    }
}
