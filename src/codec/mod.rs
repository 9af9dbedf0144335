//! Share authentication and text encoding.
//!
//! - `signature`: ECDSA P-256 / SHA-256 signatures over a share's canonical bytes.
//! - `wire`: the `shrz:` token format carrying a share and, optionally, its signature.
//!
//! Both are stateless services over the plain `Share` record.

pub mod signature;
pub mod wire;
