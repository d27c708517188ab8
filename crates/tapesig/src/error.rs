//! Error types for the engine.

use tapesig_core::CodecError;
use thiserror::Error;

use crate::operation::Family;

/// Precondition failures that abort an operation with no partial result.
///
/// A signature that fails to verify is not an error; it is recorded with
/// `verified = false`.
#[derive(Debug, Error)]
pub enum EngineError {
    /// An argument was missing, empty, or failed to decode.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// The accumulator already holds results of another operation family.
    #[error("cannot apply a {found} operation to a {expected} result")]
    FamilyMismatch { expected: Family, found: Family },

    /// A payload argument was not valid JSON.
    #[error("invalid {argument}: {reason}")]
    InvalidPayload {
        argument: &'static str,
        reason: String,
    },

    /// A content type argument was not usable text.
    #[error("invalid {argument}: {reason}")]
    InvalidContentType {
        argument: &'static str,
        reason: String,
    },

    /// The accumulator could not be rendered to JSON.
    #[error("render error: {0}")]
    Render(#[from] serde_json::Error),
}

impl EngineError {
    /// The positional argument this failure is attributed to, if any.
    pub fn argument(&self) -> Option<&'static str> {
        match self {
            EngineError::Codec(e) => e.argument(),
            EngineError::InvalidPayload { argument, .. }
            | EngineError::InvalidContentType { argument, .. } => Some(*argument),
            _ => None,
        }
    }
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
