//! The operation catalogue.
//!
//! Each operation belongs to one result family, which decides the shape of
//! the accumulator it writes to.

use std::fmt;

use serde::{Deserialize, Serialize};
use tapesig_core::{ChildDerivation, MessagePolicy, TimestampBinding};

/// The shape of result an operation produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    /// A list of independent signature records.
    Signatures,
    /// A parent record and a child record.
    Chained,
    /// Flat `type` and `hash` fields, no signature.
    Descriptor,
    /// Signature records plus a decoded payload.
    Payload,
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Family::Signatures => "signatures",
            Family::Chained => "chained",
            Family::Descriptor => "descriptor",
            Family::Payload => "payload",
        };
        f.write_str(name)
    }
}

/// An operation and the variant choices it was registered with.
///
/// Message policies, timestamp bindings, and child derivations are always
/// selected here, never detected from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// `[signature, pubkey, index, timestamp?]`
    ///
    /// Signed-message signature over the hash of a tape.
    TapeSignature {
        policy: MessagePolicy,
        binding: TimestampBinding,
    },

    /// `[prefix, data, signature, pubkey]`
    ///
    /// Signed-message signature over the text `prefix.data`.
    PrefixedMessage,

    /// `[signature, message, pubkey]`
    ///
    /// DER-ECDSA signature over an arbitrary message; no tape involved.
    DerSignature,

    /// `[index, parent_signature, parent_pubkey, child_signature, child_pubkey, timestamp?]`
    ///
    /// Parent signs the tape (pushdata policy); child signs a message derived
    /// from the parent's signature and key.
    ChainedSignature {
        derivation: ChildDerivation,
        binding: TimestampBinding,
    },

    /// `[type, hash]`
    Descriptor,

    /// `[payload, signature, pubkey, index, timestamp?]`
    ///
    /// A tape signature whose JSON payload is exposed once verified.
    SignedPayload {
        policy: MessagePolicy,
        binding: TimestampBinding,
    },
}

impl Operation {
    /// The result family this operation writes.
    pub fn family(&self) -> Family {
        match self {
            Operation::TapeSignature { .. }
            | Operation::PrefixedMessage
            | Operation::DerSignature => Family::Signatures,
            Operation::ChainedSignature { .. } => Family::Chained,
            Operation::Descriptor => Family::Descriptor,
            Operation::SignedPayload { .. } => Family::Payload,
        }
    }

    /// A short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::TapeSignature { .. } => "tape_signature",
            Operation::PrefixedMessage => "prefixed_message",
            Operation::DerSignature => "der_signature",
            Operation::ChainedSignature { .. } => "chained_signature",
            Operation::Descriptor => "descriptor",
            Operation::SignedPayload { .. } => "signed_payload",
        }
    }

    /// Positional argument names. A trailing `?` marks an optional argument.
    pub fn arguments(&self) -> &'static [&'static str] {
        match self {
            Operation::TapeSignature { .. } => &["signature", "pubkey", "index", "timestamp?"],
            Operation::PrefixedMessage => &["prefix", "data", "signature", "pubkey"],
            Operation::DerSignature => &["signature", "message", "pubkey"],
            Operation::ChainedSignature { .. } => &[
                "index",
                "parent_signature",
                "parent_pubkey",
                "child_signature",
                "child_pubkey",
                "timestamp?",
            ],
            Operation::Descriptor => &["type", "hash"],
            Operation::SignedPayload { .. } => {
                &["payload", "signature", "pubkey", "index", "timestamp?"]
            }
        }
    }
}
