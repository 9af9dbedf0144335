//! Shamir's Secret Sharing over GF(2^8).
//!
//! A secret is processed byte-wise: every byte becomes the constant term of its own
//! random polynomial, and a share is the evaluation of all of those polynomials at one
//! non-zero field element. Any `k` shares interpolate the polynomials back; `k - 1`
//! shares reveal nothing about the secret.
//!
//! # Layout
//! - [`core`]: field arithmetic and the base64 helper used by the wire format.
//! - [`mpc`]: polynomial algebra, interpolation, the sharing engine and the share record.
//! - [`codec`]: ECDSA P-256 share signatures and the `shrz:` text encoding.
//! - [`entropy`]: randomness sources feeding the engine.
//! - [`config`]: named constants and the share-format configuration.
//!
//! # Usage
//! ```
//! use shrz::entropy::OsEntropy;
//! use shrz::mpc::Sss;
//!
//! let engine = Sss::from_secret(b"attack at dawn", 3, &mut OsEntropy::new()).unwrap();
//! let shares = [engine.share(4).unwrap(), engine.share(9).unwrap(), engine.share(200).unwrap()];
//! let restored = Sss::from_shares(&shares).unwrap();
//! assert_eq!(restored.secret().unwrap(), b"attack at dawn".to_vec());
//! ```

extern crate alloc;

pub mod core;
pub mod entropy;
pub mod mpc;
pub mod codec;
pub mod config;

pub use crate::codec::signature::{generate_key_pair, sign, verify, KeyPair, PublicKey, ShareSignature};
pub use crate::codec::wire::{ShareDecoder, ShareEncoder, SignedShare};
pub use crate::mpc::{share::Share, Sss, SssError};
