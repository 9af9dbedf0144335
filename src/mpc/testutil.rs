//! Test-only exact rational field.

use core::ops::{Add, Mul, Sub};

use crate::core::field::Field;
use crate::mpc::SssError;

/// A reduced fraction `num / den` with `den > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Rational {
    num: i128,
    den: i128,
}

fn gcd(a: i128, b: i128) -> i128 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

impl Rational {
    pub(crate) fn new(num: i128, den: i128) -> Self {
        assert!(den != 0, "zero denominator");
        let sign = if den < 0 { -1 } else { 1 };
        let g = gcd(num, den).max(1);
        Self { num: sign * num / g, den: sign * den / g }
    }

    pub(crate) fn int(n: i128) -> Self {
        Self::new(n, 1)
    }
}

pub(crate) fn ints(values: &[i128]) -> Vec<Rational> {
    values.iter().map(|&v| Rational::int(v)).collect()
}

impl Add for Rational {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Rational::new(self.num * rhs.den + rhs.num * self.den, self.den * rhs.den)
    }
}

impl Sub for Rational {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Rational::new(self.num * rhs.den - rhs.num * self.den, self.den * rhs.den)
    }
}

impl Mul for Rational {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Rational::new(self.num * rhs.num, self.den * rhs.den)
    }
}

impl Field for Rational {
    fn zero() -> Self {
        Rational::int(0)
    }

    fn one() -> Self {
        Rational::int(1)
    }

    fn checked_div(self, rhs: Self) -> Result<Self, SssError> {
        if rhs.is_zero() {
            return Err(SssError::InvalidFieldOperation);
        }
        Ok(Rational::new(self.num * rhs.den, self.den * rhs.num))
    }
}
