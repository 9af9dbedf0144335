//! Operating-system CSPRNG.

use rand_core::{OsRng, RngCore};

use super::{EntropyError, EntropySource};

/// Entropy drawn from the platform CSPRNG through `getrandom`.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl OsEntropy {
    pub fn new() -> Self {
        Self
    }
}

impl EntropySource for OsEntropy {
    fn name(&self) -> &'static str {
        "OsRng"
    }

    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        OsRng.try_fill_bytes(dest).map_err(|e| {
            log::warn!("OS entropy source failed: {}", e);
            EntropyError::CollectionFailed
        })
    }

    fn entropy_estimate(&self) -> f64 {
        8.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fills_buffer() {
        let mut source = OsEntropy::new();
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        source.fill(&mut a).unwrap();
        source.fill(&mut b).unwrap();
        // 2^-256 chance of a false failure
        assert_ne!(a, b);
        assert_eq!(source.name(), "OsRng");
    }
}
