//! Barycentric-form interpolants.
//!
//! Instead of coefficients, a `BarycentricPolynomial` keeps the interpolation points and a
//! weight per point, w_j = 1 / prod_{m != j} (x_j - x_m). Setup is O(n^2); every evaluation
//! afterwards is O(n) via the true barycentric formula
//!
//! ```text
//!         sum_j  w_j / (x - x_j) * y_j
//! p(x) = ------------------------------
//!         sum_j  w_j / (x - x_j)
//! ```
//!
//! which needs no knowledge of the polynomial's degree and is exact over an exact field.
//! Evaluating at a stored node returns its `y` directly.

extern crate alloc;
use alloc::vec::Vec;
use zeroize::Zeroize;

use crate::core::field::Field;
use crate::core::gf256::GF256;
use crate::mpc::polynomial::check_points;
use crate::mpc::{Interpolant, SssError};

/// One interpolation node with its precomputed weight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BarycentricPoint<F> {
    pub x: F,
    pub y: F,
    pub weight: F,
}

/// A polynomial represented by its interpolation nodes and barycentric weights.
///
/// All x-values are distinct; this is checked when interpolating.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
pub struct BarycentricPolynomial<F> {
    points: Vec<BarycentricPoint<F>>,
}

impl<F: Field> BarycentricPolynomial<F> {
    /// Precomputes the weights of the polynomial through `(xs[i], ys[i])`.
    ///
    /// # Errors
    /// * `SssError::EmptyShareSet` for no points.
    /// * `SssError::InconsistentShares` if `xs` and `ys` differ in length.
    /// * `SssError::DuplicateInterpolationPoint` if two x-values are equal.
    pub fn interpolate(xs: &[F], ys: &[F]) -> Result<Self, SssError> {
        check_points(xs, ys)?;
        let mut points = Vec::with_capacity(xs.len());
        for (j, (&xj, &yj)) in xs.iter().zip(ys).enumerate() {
            let product = xs
                .iter()
                .enumerate()
                .filter(|&(m, _)| m != j)
                .fold(F::one(), |acc, (_, &xm)| acc * (xj - xm));
            let weight = F::one().checked_div(product)?;
            points.push(BarycentricPoint { x: xj, y: yj, weight });
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[BarycentricPoint<F>] {
        &self.points
    }

    /// Evaluates the interpolant at `x`.
    pub fn evaluate(&self, x: F) -> Result<F, SssError> {
        // Exact node: the formula below would be 0/0.
        if let Some(point) = self.points.iter().find(|p| p.x == x) {
            return Ok(point.y);
        }
        let mut numerator = F::zero();
        let mut denominator = F::zero();
        for point in &self.points {
            let term = point.weight.checked_div(x - point.x)?;
            numerator = numerator + term * point.y;
            denominator = denominator + term;
        }
        numerator.checked_div(denominator)
    }
}

impl<F: Zeroize> Zeroize for BarycentricPolynomial<F> {
    fn zeroize(&mut self) {
        for point in self.points.iter_mut() {
            point.x.zeroize();
            point.y.zeroize();
            point.weight.zeroize();
        }
        self.points.clear();
    }
}

impl Interpolant for BarycentricPolynomial<GF256> {
    fn interpolate(xs: &[GF256], ys: &[GF256]) -> Result<Self, SssError> {
        BarycentricPolynomial::interpolate(xs, ys)
    }

    /// Interpolates through (0, secret) and (i, r_i) for i = 1..k-1.
    ///
    /// Uniform random values at fixed non-zero nodes give a uniformly random polynomial
    /// with the secret as its constant term, same as drawing random coefficients.
    fn with_secret(secret: GF256, randomness: &[GF256]) -> Result<Self, SssError> {
        let xs: Vec<GF256> = (0..=randomness.len())
            .map(|i| u8::try_from(i).map(GF256).map_err(|_| SssError::InvalidThreshold))
            .collect::<Result<_, _>>()?;
        let mut ys = Vec::with_capacity(xs.len());
        ys.push(secret);
        ys.extend_from_slice(randomness);
        BarycentricPolynomial::interpolate(&xs, &ys)
    }

    fn evaluate_at(&self, x: GF256) -> Result<GF256, SssError> {
        self.evaluate(x)
    }

    fn point_count(&self) -> usize {
        self.points.len()
    }
}
