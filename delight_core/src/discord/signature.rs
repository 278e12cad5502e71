//! Ed25519 verification of interaction callbacks.
//!
//! Discord signs `timestamp ‖ raw body` with the application's key pair and
//! sends the signature and timestamp as request headers. Verification runs
//! before any payload parsing.

use ed25519_dalek::{Signature, VerifyingKey};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SignatureError {
    #[error("malformed public key")]
    MalformedPublicKey,

    #[error("malformed signature")]
    MalformedSignature,

    #[error("invalid request signature")]
    InvalidSignature,
}

pub fn verify_signature(
    public_key_hex: &str,
    signature_hex: &str,
    timestamp: &str,
    body: &[u8],
) -> Result<(), SignatureError> {
    let key_bytes: [u8; 32] = hex::decode(public_key_hex)
        .map_err(|_| SignatureError::MalformedPublicKey)?
        .try_into()
        .map_err(|_| SignatureError::MalformedPublicKey)?;
    let verifying_key =
        VerifyingKey::from_bytes(&key_bytes).map_err(|_| SignatureError::MalformedPublicKey)?;

    let signature_bytes: [u8; 64] = hex::decode(signature_hex)
        .map_err(|_| SignatureError::MalformedSignature)?
        .try_into()
        .map_err(|_| SignatureError::MalformedSignature)?;
    let signature = Signature::from_bytes(&signature_bytes);

    let mut message = Vec::with_capacity(timestamp.len() + body.len());
    message.extend_from_slice(timestamp.as_bytes());
    message.extend_from_slice(body);

    verifying_key
        .verify_strict(&message, &signature)
        .map_err(|_| SignatureError::InvalidSignature)
}
