//! Error types for tapesig core.
//!
//! Every variant here is a precondition failure: it aborts the operation with
//! no partial result. Cryptographic mismatches are never errors; they surface
//! as `verified = false` on a record.

use thiserror::Error;

/// Precondition failures raised while decoding arguments or encoding messages.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("missing argument: {argument}")]
    MissingArgument { argument: &'static str },

    #[error("empty argument: {argument}")]
    EmptyArgument { argument: &'static str },

    #[error("failed to decode {argument}: {reason}")]
    Decode {
        argument: &'static str,
        reason: String,
    },

    #[error("invalid {argument}: {reason}")]
    InvalidIndex {
        argument: &'static str,
        reason: String,
    },

    #[error("invalid {argument}: {reason}")]
    InvalidTimestamp {
        argument: &'static str,
        reason: String,
    },

    #[error("length {0} exceeds the pushdata range")]
    PushdataTooLarge(usize),

    #[error("non-minimal pushdata prefix for length {0}")]
    NonMinimalPushdata(usize),

    #[error("byte 0x{0:02x} is not a pushdata prefix")]
    NotPushdata(u8),

    #[error("script truncated at offset {offset}")]
    TruncatedScript { offset: usize },
}

impl CodecError {
    /// The positional argument this failure is attributed to, if any.
    pub fn argument(&self) -> Option<&'static str> {
        match self {
            CodecError::MissingArgument { argument }
            | CodecError::EmptyArgument { argument }
            | CodecError::Decode { argument, .. }
            | CodecError::InvalidIndex { argument, .. }
            | CodecError::InvalidTimestamp { argument, .. } => Some(*argument),
            _ => None,
        }
    }
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CodecError>;
