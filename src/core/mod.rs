//! Arithmetic and encoding primitives.
//!
//! - `field`: the capability set polynomial algebra is written against.
//! - `gf256`: the AES field GF(2^8) that secrets are shared over.
//! - `base64`: base64 with a configurable URL-safe alphabet for share tokens.

pub mod base64;
pub mod field;
pub mod gf256;

pub use field::Field;
pub use gf256::GF256;
