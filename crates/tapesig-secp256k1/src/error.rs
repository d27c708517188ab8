//! Error types for the secp256k1 capabilities.
//!
//! Verification never produces these; a bad signature is just `false`.
//! They come from key construction, signing, and address parsing.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SecpError {
    #[error("invalid secret key")]
    InvalidSecretKey,

    #[error("invalid public key")]
    InvalidPublicKey,

    #[error("signing failed: {0}")]
    Signing(String),

    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// Result type for secp256k1 operations.
pub type Result<T> = std::result::Result<T, SecpError>;
