//! Custom User-Provided Entropy Source.
//!
//! Replays bytes injected by the caller, in order. Useful for reproducible splits and for
//! feeding randomness gathered outside this crate.

extern crate alloc;
use alloc::vec::Vec;
use zeroize::Zeroizing;
use super::{EntropyError, EntropySource};

/// Source that buffers user-injected entropy.
pub struct CustomSource {
    buffer: Zeroizing<Vec<u8>>,
}

impl CustomSource {
    /// Creates a new empty CustomSource.
    pub fn new() -> Self {
        Self { buffer: Zeroizing::new(Vec::new()) }
    }

    /// Creates a source preloaded with `bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut source = Self::new();
        source.add_bytes(bytes);
        source
    }

    /// Add entropy bytes to the pool.
    pub fn add_bytes(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
    }

    /// Number of bytes still available.
    pub fn remaining(&self) -> usize {
        self.buffer.len()
    }
}

impl Default for CustomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl EntropySource for CustomSource {
    fn name(&self) -> &'static str {
        "CustomInput"
    }

    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        if self.buffer.len() < dest.len() {
            return Err(EntropyError::Exhausted);
        }
        dest.copy_from_slice(&self.buffer[..dest.len()]);
        self.buffer.drain(..dest.len());
        Ok(())
    }

    fn entropy_estimate(&self) -> f64 {
        // Quality of injected bytes is unknown; assume the worst reasonable case.
        2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drains_in_order() {
        let mut source = CustomSource::from_bytes(&[1, 2, 3, 4, 5]);
        let mut buf = [0u8; 2];
        source.fill(&mut buf).unwrap();
        assert_eq!(buf, [1, 2]);
        source.fill(&mut buf).unwrap();
        assert_eq!(buf, [3, 4]);
        assert_eq!(source.remaining(), 1);
        assert_eq!(source.fill(&mut buf), Err(EntropyError::Exhausted));
        // A failed fill leaves the pool untouched.
        assert_eq!(source.remaining(), 1);
    }
}
