//! Coefficient-form polynomials and Lagrange interpolation.
//!
//! `Polynomial<F>` stores `c[0] + c[1]*x + ... + c[n]*x^n` over any [`Field`]. The zero
//! polynomial is `[zero]`; trailing zero coefficients are kept, so the structural degree
//! (`len - 1`) is what the sharing engine relies on.

extern crate alloc;
use alloc::vec;
use alloc::vec::Vec;
use zeroize::Zeroize;

use crate::core::field::Field;
use crate::core::gf256::GF256;
use crate::mpc::{Interpolant, SssError};

/// A polynomial given by its coefficients, index `i` holding the coefficient of x^i.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
pub struct Polynomial<F> {
    coefficients: Vec<F>,
}

impl<F: Field> Polynomial<F> {
    /// Creates a polynomial from coefficients. An empty slice is the zero polynomial.
    pub fn new(coefficients: Vec<F>) -> Self {
        if coefficients.is_empty() {
            return Self::zero();
        }
        Self { coefficients }
    }

    pub fn zero() -> Self {
        Self::constant(F::zero())
    }

    pub fn constant(c: F) -> Self {
        Self { coefficients: vec![c] }
    }

    pub fn coefficients(&self) -> &[F] {
        &self.coefficients
    }

    /// Structural degree: number of stored coefficients minus one.
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Product by convolution of the coefficient sequences.
    ///
    /// The result has `self.len() + other.len() - 1` coefficients.
    pub fn multiply(&self, other: &Self) -> Self {
        let mut result = vec![F::zero(); self.coefficients.len() + other.coefficients.len() - 1];
        for (i, &a) in self.coefficients.iter().enumerate() {
            for (j, &b) in other.coefficients.iter().enumerate() {
                result[i + j] = result[i + j] + a * b;
            }
        }
        Self { coefficients: result }
    }

    /// Sum, padding the shorter operand with zeros.
    pub fn add(&self, other: &Self) -> Self {
        let len = self.coefficients.len().max(other.coefficients.len());
        let coefficients = (0..len)
            .map(|i| {
                let a = self.coefficients.get(i).copied().unwrap_or_else(F::zero);
                let b = other.coefficients.get(i).copied().unwrap_or_else(F::zero);
                a + b
            })
            .collect();
        Self { coefficients }
    }

    /// Multiplies every coefficient by `factor`.
    pub fn scale(&self, factor: F) -> Self {
        Self {
            coefficients: self.coefficients.iter().map(|&c| c * factor).collect(),
        }
    }

    /// Evaluates the polynomial at `x`.
    ///
    /// Accumulates successive powers of `x` alongside the coefficients. A constant
    /// polynomial returns its constant for every `x`.
    pub fn evaluate(&self, x: F) -> F {
        let mut power = F::one();
        let mut sum = F::zero();
        for (i, &c) in self.coefficients.iter().enumerate() {
            if i > 0 {
                power = power * x;
            }
            sum = sum + c * power;
        }
        sum
    }
}

/// Rejects empty or mismatched point sets and repeated x-values.
pub(crate) fn check_points<F: Field>(xs: &[F], ys: &[F]) -> Result<(), SssError> {
    if xs.is_empty() {
        return Err(SssError::EmptyShareSet);
    }
    if xs.len() != ys.len() {
        return Err(SssError::InconsistentShares("x and y counts differ"));
    }
    // N is small (<= 255 for GF(256)), O(N^2) is fine
    for i in 0..xs.len() {
        for j in (i + 1)..xs.len() {
            if xs[i] == xs[j] {
                return Err(SssError::DuplicateInterpolationPoint);
            }
        }
    }
    Ok(())
}

/// Returns the unique minimal-degree polynomial through `(xs[i], ys[i])`.
///
/// Builds each Lagrange basis polynomial L_j(x) = prod_{m != j} (x - x_m) / (x_j - x_m) and
/// sums y_j * L_j. A single point yields the constant polynomial `ys[0]`.
///
/// # Errors
/// * `SssError::EmptyShareSet` for no points.
/// * `SssError::InconsistentShares` if `xs` and `ys` differ in length.
/// * `SssError::DuplicateInterpolationPoint` if two x-values are equal.
pub fn interpolate<F: Field>(xs: &[F], ys: &[F]) -> Result<Polynomial<F>, SssError> {
    check_points(xs, ys)?;
    if xs.len() == 1 {
        return Ok(Polynomial::constant(ys[0]));
    }

    let mut result = Polynomial::zero();
    for (j, (&xj, &yj)) in xs.iter().zip(ys).enumerate() {
        let mut numerator = Polynomial::constant(F::one());
        let mut denominator = F::one();
        for (m, &xm) in xs.iter().enumerate() {
            if m == j {
                continue;
            }
            numerator = numerator.multiply(&Polynomial::new(vec![F::zero() - xm, F::one()]));
            denominator = denominator * (xj - xm);
        }
        let basis = numerator.scale(F::one().checked_div(denominator)?);
        result = result.add(&basis.scale(yj));
    }
    Ok(result)
}

impl<F: Zeroize> Zeroize for Polynomial<F> {
    fn zeroize(&mut self) {
        self.coefficients.zeroize();
    }
}

impl Interpolant for Polynomial<GF256> {
    fn interpolate(xs: &[GF256], ys: &[GF256]) -> Result<Self, SssError> {
        interpolate(xs, ys)
    }

    /// Uses the random values directly as the coefficients of x^1 .. x^(k-1).
    fn with_secret(secret: GF256, randomness: &[GF256]) -> Result<Self, SssError> {
        let mut coefficients = Vec::with_capacity(randomness.len() + 1);
        coefficients.push(secret);
        coefficients.extend_from_slice(randomness);
        Ok(Polynomial::new(coefficients))
    }

    fn evaluate_at(&self, x: GF256) -> Result<GF256, SssError> {
        Ok(self.evaluate(x))
    }

    fn point_count(&self) -> usize {
        self.coefficients.len()
    }
}
