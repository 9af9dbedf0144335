//! Shamir's Secret Sharing engine over GF(256).
//!
//! The engine holds one polynomial per secret byte. It is built either from a secret
//! (fresh random polynomials whose constant terms are the secret bytes) or from shares
//! (polynomials interpolated through the shares' points). Both states answer the same
//! read-only queries: `share(x)`, `secret()` and `required_shares()`.
//!
//! # Security
//! - **Randomness**: Coefficients come from an `EntropySource`; production callers pass
//!   `OsEntropy`. Coefficient buffers are zeroized after use.
//! - **Zeroization**: The engine wipes its polynomials on drop.
//! - **No Integrity**: `from_shares` trusts its input. With fewer than the original threshold,
//!   or with a tampered share, it silently interpolates a different polynomial and `secret()`
//!   returns the wrong bytes.
//!
//! # Example
//! ```
//! use shrz::entropy::OsEntropy;
//! use shrz::mpc::Sss;
//!
//! let engine = Sss::from_secret(&[1], 2, &mut OsEntropy::new()).unwrap();
//! let shares = [engine.share(17).unwrap(), engine.share(101).unwrap()];
//! assert_eq!(Sss::from_shares(&shares).unwrap().secret().unwrap(), vec![1]);
//! ```

extern crate alloc;
use alloc::vec::Vec;
use core::fmt;
use zeroize::{Zeroize, Zeroizing};

use crate::core::gf256::GF256;
use crate::entropy::EntropySource;
use crate::mpc::barycentric::BarycentricPolynomial;
use crate::mpc::polynomial::Polynomial;
use crate::mpc::share::Share;
use crate::mpc::{Interpolant, SssError};

/// Secret sharing engine generic over the per-byte interpolation strategy.
pub struct SecretSharingEngine<P: Interpolant> {
    polynomials: Vec<P>,
    required: u8,
}

/// Engine storing barycentric interpolants: O(k) per evaluated byte.
pub type Sss = SecretSharingEngine<BarycentricPolynomial<GF256>>;

/// Engine storing coefficient-form polynomials built by Lagrange interpolation.
pub type CoefficientSss = SecretSharingEngine<Polynomial<GF256>>;

impl<P: Interpolant> SecretSharingEngine<P> {
    /// Splits `secret` with threshold `k`.
    ///
    /// For each secret byte, draws `k - 1` random field elements and builds a degree `k - 1`
    /// polynomial whose value at zero is that byte.
    ///
    /// # Arguments
    /// * `secret` - The secret data to split.
    /// * `k` - The number of shares required for reconstruction (2..=255).
    /// * `rng` - Entropy source for the random coefficients.
    ///
    /// # Errors
    /// * `SssError::EmptyPayload` for an empty secret.
    /// * `SssError::InvalidThreshold` for `k < 2`.
    /// * `SssError::RngFailure` if the entropy source fails.
    pub fn from_secret<R: EntropySource + ?Sized>(
        secret: &[u8],
        k: u8,
        rng: &mut R,
    ) -> Result<Self, SssError> {
        if secret.is_empty() {
            return Err(SssError::EmptyPayload);
        }
        if k < 2 {
            return Err(SssError::InvalidThreshold);
        }

        // Allocated once and reused for every byte.
        let mut random_buf = Zeroizing::new(alloc::vec![0u8; (k - 1) as usize]);
        let mut coeffs: Zeroizing<Vec<GF256>> = Zeroizing::new(Vec::with_capacity((k - 1) as usize));
        let mut polynomials = Vec::with_capacity(secret.len());

        for &byte in secret {
            rng.fill(&mut random_buf).map_err(|e| {
                log::warn!("entropy source {} failed: {:?}", rng.name(), e);
                SssError::RngFailure
            })?;
            coeffs.clear();
            coeffs.extend(random_buf.iter().copied().map(GF256));
            polynomials.push(P::with_secret(GF256(byte), &coeffs)?);
        }

        log::debug!("split {}-byte secret with threshold {}", secret.len(), k);
        Ok(Self { polynomials, required: k })
    }

    /// Rebuilds the engine from a set of shares.
    ///
    /// Transposes the shares into one point set per byte position and interpolates each.
    /// The resulting `required_shares()` is the number of shares supplied. Supplying fewer
    /// than the original threshold is not detected and produces a different polynomial.
    ///
    /// # Errors
    /// * `SssError::EmptyShareSet` for no shares.
    /// * `SssError::InconsistentShares` if a share has no index or payload lengths differ.
    /// * `SssError::DuplicateInterpolationPoint` if two shares carry the same index.
    pub fn from_shares(shares: &[Share]) -> Result<Self, SssError> {
        let first = shares.first().ok_or(SssError::EmptyShareSet)?;
        let share_len = first.y_values().len();

        // 1. Validation
        let mut xs = Vec::with_capacity(shares.len());
        for share in shares {
            let x = share
                .x_value()
                .ok_or(SssError::InconsistentShares("share did not contain an index"))?;
            if x == 0 {
                return Err(SssError::ReservedIndex);
            }
            if share.y_values().len() != share_len {
                return Err(SssError::InconsistentShares("share payload lengths differ"));
            }
            xs.push(GF256(x));
        }
        if share_len == 0 {
            return Err(SssError::InconsistentShares("shares carry no payload"));
        }
        for i in 0..xs.len() {
            for j in (i + 1)..xs.len() {
                if xs[i] == xs[j] {
                    return Err(SssError::DuplicateInterpolationPoint);
                }
            }
        }
        let required = u8::try_from(xs.len()).map_err(|_| SssError::InvalidThreshold)?;

        // 2. Interpolate byte-by-byte
        let mut ys: Zeroizing<Vec<GF256>> = Zeroizing::new(Vec::with_capacity(shares.len()));
        let mut polynomials = Vec::with_capacity(share_len);
        for p in 0..share_len {
            ys.clear();
            ys.extend(shares.iter().map(|s| GF256(s.y_values()[p])));
            polynomials.push(P::interpolate(&xs, &ys)?);
        }

        log::debug!("reconstructed {}-byte engine from {} shares", share_len, shares.len());
        Ok(Self { polynomials, required })
    }

    /// Wraps already-built polynomials, checking they describe a consistent engine.
    ///
    /// # Errors
    /// * `SssError::EmptyPayload` for no polynomials.
    /// * `SssError::InconsistentShares` if the point counts differ or are outside 1..=255.
    pub fn from_polynomials(polynomials: Vec<P>) -> Result<Self, SssError> {
        let first = polynomials.first().ok_or(SssError::EmptyPayload)?;
        let count = first.point_count();
        if polynomials.iter().any(|p| p.point_count() != count) {
            return Err(SssError::InconsistentShares("polynomials differ in degree"));
        }
        let required = u8::try_from(count)
            .ok()
            .filter(|&r| r > 0)
            .ok_or(SssError::InconsistentShares("polynomial degree out of range"))?;
        Ok(Self { polynomials, required })
    }

    fn evaluate_all(&self, x: GF256) -> Result<Vec<u8>, SssError> {
        self.polynomials
            .iter()
            .map(|p| p.evaluate_at(x).map(u8::from))
            .collect()
    }

    /// Produces the share at index `x`.
    ///
    /// # Errors
    /// * `SssError::ReservedIndex` for `x == 0`; that evaluation is the secret itself.
    pub fn share(&self, x: u8) -> Result<Share, SssError> {
        if x == 0 {
            return Err(SssError::ReservedIndex);
        }
        Share::new(x, Some(self.required), self.evaluate_all(GF256(x))?)
    }

    /// Produces shares at indices `1..=n`.
    ///
    /// # Errors
    /// * `SssError::InvalidThreshold` if `n` is smaller than `required_shares()`.
    pub fn split(&self, n: u8) -> Result<Vec<Share>, SssError> {
        if n < self.required {
            return Err(SssError::InvalidThreshold);
        }
        (1..=n).map(|x| self.share(x)).collect()
    }

    /// The secret: every polynomial evaluated at zero.
    ///
    /// Correct only when the engine was built from the secret or from enough genuine shares.
    pub fn secret(&self) -> Result<Vec<u8>, SssError> {
        self.evaluate_all(GF256::ZERO)
    }

    /// Number of shares needed to reconstruct: the common degree of the polynomials plus one.
    pub fn required_shares(&self) -> u8 {
        self.required
    }

    /// Length of the secret in bytes.
    pub fn secret_len(&self) -> usize {
        self.polynomials.len()
    }

    pub fn polynomials(&self) -> &[P] {
        &self.polynomials
    }
}

#[cfg(feature = "serde")]
impl<P> SecretSharingEngine<P>
where
    P: Interpolant + serde::Serialize + serde::de::DeserializeOwned,
{
    /// Serializes the engine state as a JSON array with one entry per secret byte.
    pub fn to_json(&self) -> Result<alloc::string::String, SssError> {
        serde_json::to_string(&self.polynomials).map_err(|_| SssError::MalformedJson)
    }

    /// Restores an engine from `to_json` output.
    ///
    /// # Errors
    /// * `SssError::MalformedJson` if the text does not parse or the polynomials are not
    ///   uniform.
    pub fn from_json(json: &str) -> Result<Self, SssError> {
        let polynomials: Vec<P> = serde_json::from_str(json).map_err(|e| {
            log::warn!("rejected engine state: {}", e);
            SssError::MalformedJson
        })?;
        Self::from_polynomials(polynomials).map_err(|_| SssError::MalformedJson)
    }
}

impl<P: Interpolant> fmt::Debug for SecretSharingEngine<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretSharingEngine")
            .field("secret_len", &self.polynomials.len())
            .field("required_shares", &self.required)
            .field("polynomials", &"***SENSITIVE***")
            .finish()
    }
}

impl<P: Interpolant> Drop for SecretSharingEngine<P> {
    fn drop(&mut self) {
        self.polynomials.zeroize();
    }
}
