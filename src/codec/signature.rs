//! Share signatures.
//!
//! A signature covers `Share::signable_data()`, i.e. index, threshold and payload, so a signed
//! share cannot be relabeled to another index or threshold. Signatures use ECDSA over P-256
//! with SHA-256 and are stored in fixed 64-byte `r || s` form. Public keys travel as
//! uncompressed SEC1 points.

extern crate alloc;
use alloc::vec::Vec;
use core::fmt;

use p256::ecdsa::signature::{Signer, Verifier};
use p256::ecdsa::{Signature, SigningKey, VerifyingKey};
use p256::elliptic_curve::sec1::ToEncodedPoint;
use p256::pkcs8::DecodePrivateKey;
use rand_core::{CryptoRngCore, OsRng};

use crate::config::constants::{
    PUBLIC_KEY_FORMAT, SIGNATURE_ALGORITHM, SIGNATURE_CURVE, SIGNATURE_HASH, SIGNATURE_LEN,
};
use crate::mpc::share::Share;
use crate::mpc::SssError;

/// A P-256 verification key.
#[derive(Clone, PartialEq, Eq)]
pub struct PublicKey(VerifyingKey);

impl PublicKey {
    /// Exports the key as an uncompressed SEC1 point (65 bytes).
    pub fn export_raw(&self) -> Vec<u8> {
        self.0.to_encoded_point(false).as_bytes().to_vec()
    }

    /// Imports a SEC1-encoded point.
    ///
    /// # Errors
    /// * `SssError::InvalidKey` if the bytes are not a point on P-256.
    pub fn import_raw(bytes: &[u8]) -> Result<Self, SssError> {
        VerifyingKey::from_sec1_bytes(bytes)
            .map(PublicKey)
            .map_err(|_| SssError::InvalidKey)
    }

    pub fn verifying_key(&self) -> &VerifyingKey {
        &self.0
    }
}

impl From<VerifyingKey> for PublicKey {
    fn from(key: VerifyingKey) -> Self {
        PublicKey(key)
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicKey")
            .field("format", &PUBLIC_KEY_FORMAT)
            .field("sec1", &hex::encode(self.export_raw()))
            .finish()
    }
}

/// A signing key together with its public half.
#[derive(Clone)]
pub struct KeyPair {
    signing: SigningKey,
    public: PublicKey,
}

impl KeyPair {
    /// Generates a fresh key pair from `rng`.
    pub fn generate<R: CryptoRngCore>(rng: &mut R) -> Self {
        Self::from_signing_key(SigningKey::random(rng))
    }

    pub fn from_signing_key(signing: SigningKey) -> Self {
        let public = PublicKey(*signing.verifying_key());
        Self { signing, public }
    }

    /// Imports a PKCS#8 DER-encoded P-256 private key and derives its public key.
    ///
    /// # Errors
    /// * `SssError::InvalidKey` if the document is not a P-256 private key.
    pub fn from_pkcs8_der(der: &[u8]) -> Result<Self, SssError> {
        SigningKey::from_pkcs8_der(der)
            .map(Self::from_signing_key)
            .map_err(|_| SssError::InvalidKey)
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    pub fn signing_key(&self) -> &SigningKey {
        &self.signing
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public", &self.public)
            .field("signing", &"***SENSITIVE***")
            .finish()
    }
}

/// Generates a key pair from the platform CSPRNG.
pub fn generate_key_pair() -> KeyPair {
    KeyPair::generate(&mut OsRng)
}

/// A detached share signature and, optionally, the key that made it.
#[derive(Clone, PartialEq, Eq)]
pub struct ShareSignature {
    pub signature: Vec<u8>,
    pub pubkey: Option<PublicKey>,
}

impl fmt::Debug for ShareSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShareSignature")
            .field("signature", &hex::encode(&self.signature))
            .field("pubkey", &self.pubkey)
            .finish()
    }
}

/// Signs the canonical bytes of `share` and embeds the signer's public key.
pub fn sign(share: &Share, keypair: &KeyPair) -> ShareSignature {
    let signature: Signature = keypair.signing.sign(&share.signable_data());
    log::debug!(
        "signed share {:?} with {}/{}/{}",
        share.x_value(),
        SIGNATURE_ALGORITHM,
        SIGNATURE_CURVE,
        SIGNATURE_HASH
    );
    ShareSignature {
        signature: signature.to_bytes().to_vec(),
        pubkey: Some(keypair.public.clone()),
    }
}

/// Checks `signature` against the canonical bytes of `share`.
///
/// The key embedded in the signature takes precedence over `fallback`. Signature bytes that
/// are not a well-formed P-256 signature verify as `false`.
///
/// # Errors
/// * `SssError::MissingSignatureKey` if neither key is available.
pub fn verify(
    share: &Share,
    signature: &ShareSignature,
    fallback: Option<&PublicKey>,
) -> Result<bool, SssError> {
    let key = signature
        .pubkey
        .as_ref()
        .or(fallback)
        .ok_or(SssError::MissingSignatureKey)?;
    let parsed = match Signature::from_slice(&signature.signature) {
        Ok(parsed) => parsed,
        Err(_) => {
            log::warn!("share {:?}: signature is not {} bytes of r || s", share.x_value(), SIGNATURE_LEN);
            return Ok(false);
        }
    };
    let valid = key.0.verify(&share.signable_data(), &parsed).is_ok();
    if !valid {
        log::warn!("share {:?}: signature verification failed", share.x_value());
    }
    Ok(valid)
}
