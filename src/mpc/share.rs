//! Secret Share Definition.
//!
//! A share is the evaluation of every per-byte polynomial at one point $x$:
//! - $x$ (index): A non-zero byte unique to each shareholder. Absent for a raw, unlabeled
//!   share whose index is tracked out of band.
//! - requirement: the threshold $k$ the share was produced under, when known.
//! - $y$ (payload): one evaluation per secret byte.
//!
//! `Share` is a plain immutable record. Signing and text encoding live in `codec`.
//!
//! # Security
//! - Implements `Zeroize` and `ZeroizeOnDrop` to wipe the payload from memory.
//! - `Debug` implementation redacts the payload.

extern crate alloc;
use alloc::vec::Vec;
use core::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::SssError;

/// A share of a secret.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Share {
    /// The x-coordinate (1..=255), or `None` for a raw share.
    /// Public information (who owns the share).
    #[zeroize(skip)]
    x_value: Option<u8>,

    /// Number of shares needed to reconstruct.
    #[zeroize(skip)]
    requirement: Option<u8>,

    /// The y-coordinates (one per byte of the secret).
    /// Highly sensitive information.
    y_values: Vec<u8>,
}

impl fmt::Debug for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Share")
            .field("x_value", &self.x_value)
            .field("requirement", &self.requirement)
            .field("length", &self.y_values.len())
            .field("y_values", &"***SENSITIVE***")
            .finish()
    }
}

impl Share {
    /// Creates a labeled share.
    ///
    /// # Arguments
    /// * `x_value` - The x-coordinate (must be non-zero).
    /// * `requirement` - The threshold, if known.
    /// * `y_values` - The payload (must not be empty).
    ///
    /// # Returns
    /// * `Ok(Share)` if valid.
    /// * `Err(SssError::ReservedIndex)` for `x_value == 0`.
    /// * `Err(SssError::EmptyPayload)` for an empty payload.
    pub fn new(x_value: u8, requirement: Option<u8>, y_values: Vec<u8>) -> Result<Self, SssError> {
        if x_value == 0 {
            return Err(SssError::ReservedIndex);
        }
        if y_values.is_empty() {
            return Err(SssError::EmptyPayload);
        }
        Ok(Self { x_value: Some(x_value), requirement, y_values })
    }

    /// Creates a raw share carrying only a payload.
    pub fn raw(y_values: Vec<u8>) -> Result<Self, SssError> {
        if y_values.is_empty() {
            return Err(SssError::EmptyPayload);
        }
        Ok(Self { x_value: None, requirement: None, y_values })
    }

    pub fn x_value(&self) -> Option<u8> {
        self.x_value
    }

    pub fn requirement(&self) -> Option<u8> {
        self.requirement
    }

    /// Returns a reference to the payload bytes.
    pub fn y_values(&self) -> &[u8] {
        &self.y_values
    }

    /// Canonical bytes covered by a signature: `[x] ++ [requirement] ++ payload`, with absent
    /// fields omitted. Binding the index and threshold stops a signed payload from being
    /// relabeled.
    pub fn signable_data(&self) -> Zeroizing<Vec<u8>> {
        let mut data = Vec::with_capacity(self.y_values.len() + 2);
        data.extend(self.x_value);
        data.extend(self.requirement);
        data.extend_from_slice(&self.y_values);
        Zeroizing::new(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_creation() {
        let s = Share::new(1, Some(2), alloc::vec![10, 20]).unwrap();
        assert_eq!(s.x_value(), Some(1));
        assert_eq!(s.requirement(), Some(2));
        assert_eq!(s.y_values(), &[10, 20]);

        let raw = Share::raw(alloc::vec![7]).unwrap();
        assert_eq!(raw.x_value(), None);
        assert_eq!(raw.requirement(), None);
    }

    #[test]
    fn test_share_validation() {
        assert_eq!(Share::new(0, None, alloc::vec![1]), Err(SssError::ReservedIndex));
        assert_eq!(Share::new(1, None, alloc::vec![]), Err(SssError::EmptyPayload));
        assert_eq!(Share::raw(alloc::vec![]), Err(SssError::EmptyPayload));
    }

    #[test]
    fn test_signable_data_order() {
        let s = Share::new(5, Some(3), alloc::vec![0xAA, 0xBB]).unwrap();
        assert_eq!(s.signable_data().as_slice(), &[5, 3, 0xAA, 0xBB]);

        let no_req = Share::new(5, None, alloc::vec![0xAA]).unwrap();
        assert_eq!(no_req.signable_data().as_slice(), &[5, 0xAA]);

        let raw = Share::raw(alloc::vec![0xAA]).unwrap();
        assert_eq!(raw.signable_data().as_slice(), &[0xAA]);
    }

    #[test]
    fn test_debug_redaction() {
        let s = Share::new(5, None, alloc::vec![0xFF; 32]).unwrap();
        let debug_str = alloc::format!("{:?}", s);
        assert!(debug_str.contains("x_value: Some(5)"));
        assert!(debug_str.contains("length: 32"));
        assert!(debug_str.contains("***SENSITIVE***"));
        assert!(!debug_str.contains("255")); // 0xFF shouldn't appear
    }
}
