//! Randomness sources for polynomial generation.
//!
//! The sharing engine never draws randomness itself; it asks an `EntropySource` to fill a
//! buffer with the random coefficients of each byte's polynomial. Production code uses
//! [`OsEntropy`], the platform CSPRNG. [`CustomSource`] replays caller-supplied bytes, which
//! makes splitting reproducible in tests.
//!
//! # Design
//! - **Fail Loudly**: A source that cannot deliver returns an error; the engine surfaces it as
//!   `SssError::RngFailure` rather than continuing with weak coefficients.

pub mod custom;
pub mod os;

pub use custom::CustomSource;
pub use os::OsEntropy;

/// Error types for entropy collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntropyError {
    /// Failed to collect sufficient entropy bytes.
    CollectionFailed,
    /// Source is exhausted (e.g., fixed buffer).
    Exhausted,
}

/// A trait for entropy sources.
pub trait EntropySource {
    /// Returns a unique identifier for the source.
    fn name(&self) -> &'static str;

    /// Fills `dest` with random bytes from the source.
    ///
    /// # Arguments
    /// * `dest` - Buffer to fill with entropy.
    ///
    /// # Returns
    /// * `Ok(())` on success.
    /// * `Err(EntropyError)` if the source fails.
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError>;

    /// Returns the estimated entropy per byte (in bits, 0.0-8.0).
    fn entropy_estimate(&self) -> f64;
}
