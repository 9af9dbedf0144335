//! Secret Sharing.
//!
//! This module implements Shamir's Secret Sharing (SSS) over GF(256).
//!
//! # Components
//! - `polynomial`: coefficient-form polynomials and Lagrange interpolation over any [`Field`].
//! - `barycentric`: barycentric-form interpolants for cheap repeated evaluation.
//! - `sss`: the sharing engine that splits secrets and reconstructs them from shares.
//! - `share`: the share record handed to shareholders.
//!
//! # Security
//! - **Constant-Time Field**: All GF(256) operations are branch-free.
//! - **Zeroization**: Share payloads, random coefficients and engine polynomials are wiped.
//! - **No Integrity**: Reconstruction accepts any share set. Too few or tampered shares yield a
//!   wrong secret without an error; authenticate shares with `codec::signature` when that
//!   matters.
//!
//! [`Field`]: crate::core::Field

pub mod barycentric;
pub mod polynomial;
pub mod share;
pub mod sss;

#[cfg(test)]
pub(crate) mod testutil;

use zeroize::Zeroize;

use crate::core::gf256::GF256;

pub use barycentric::BarycentricPolynomial;
pub use polynomial::Polynomial;
pub use sss::{CoefficientSss, SecretSharingEngine, Sss};

/// Errors for field arithmetic, interpolation, sharing and share encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SssError {
    /// Division by, or inversion of, the additive identity.
    #[error("division by zero in field arithmetic")]
    InvalidFieldOperation,
    /// Two interpolation points share an x-value.
    #[error("interpolation points must have distinct x-values")]
    DuplicateInterpolationPoint,
    /// No shares (or no points) were supplied.
    #[error("no shares supplied")]
    EmptyShareSet,
    /// Shares cannot be combined: missing index, mismatched payload lengths, etc.
    #[error("inconsistent shares: {0}")]
    InconsistentShares(&'static str),
    /// The additive identity was requested as a share index; x = 0 is the secret.
    #[error("share index 0 is reserved for the secret")]
    ReservedIndex,
    /// Verification had neither an embedded nor a supplied public key.
    #[error("no public key available to verify the share")]
    MissingSignatureKey,
    /// Text is neither a raw nor a labeled share token.
    #[error("malformed share token: {0}")]
    MalformedWireToken(&'static str),
    /// Verification was requested for a share that carries no signature.
    #[error("share is not signed")]
    UnsignedShare,
    /// Threshold outside 2..=255, or fewer shares requested than the threshold.
    #[error("invalid threshold configuration")]
    InvalidThreshold,
    /// Secret or share payload with no bytes.
    #[error("secret or share payload is empty")]
    EmptyPayload,
    /// The entropy source failed to deliver.
    #[error("random number generator failure")]
    RngFailure,
    /// Key material could not be decoded.
    #[error("invalid key material")]
    InvalidKey,
    /// Persisted engine state could not be parsed or is inconsistent.
    #[error("malformed engine state")]
    MalformedJson,
    /// Configuration values are unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}

/// Interpolation strategy used by the sharing engine for each secret byte.
///
/// Both forms describe the same polynomial; they differ in what is stored and in the cost
/// of evaluation.
pub trait Interpolant: Sized + Zeroize {
    /// Builds the minimal-degree polynomial through `(xs[i], ys[i])`.
    fn interpolate(xs: &[GF256], ys: &[GF256]) -> Result<Self, SssError>;

    /// Builds a fresh polynomial of degree `randomness.len()` whose value at zero is `secret`.
    fn with_secret(secret: GF256, randomness: &[GF256]) -> Result<Self, SssError>;

    /// Evaluates the polynomial at `x`.
    fn evaluate_at(&self, x: GF256) -> Result<GF256, SssError>;

    /// Number of points that determine the polynomial (degree + 1).
    fn point_count(&self) -> usize;
}
