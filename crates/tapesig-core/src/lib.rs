//! # tapesig core
//!
//! Pure primitives for verifying signatures asserted over tape cells: the
//! positional data/opcode sequence of one output of a ledger record.
//!
//! This crate contains no I/O. The tape itself and every signature scheme are
//! reached through the capability traits in [`capability`], so the logic here
//! can be driven by real key material or by deterministic fakes.
//!
//! ## Key Types
//!
//! - [`TapeCell`] / [`Tape`] - The ordered cell sequence of one output
//! - [`Argument`] - A positional operation argument, binary or textual
//! - [`MessagePolicy`] - How a tape is serialized into the signed message
//! - [`TimestampBinding`] - How an optional timestamp is bound to the hash
//! - [`ChildDerivation`] - How a child signature's message follows from its parent
//! - [`SignatureRecord`] / [`ChainRecord`] - Verification outcomes
//!
//! ## Canonical encoding
//!
//! Pushdata length prefixes are always minimal. See [`pushdata`].

pub mod capability;
pub mod chain;
pub mod codec;
pub mod crypto;
pub mod error;
pub mod message;
pub mod pushdata;
pub mod record;
pub mod timestamp;
pub mod types;

pub use capability::{AddressResolver, EcdsaDerVerifier, MessageSchemeVerifier, NoTape, TapeReader};
pub use chain::{Chain, ChainLink, ChildDerivation, DerivedMessage};
pub use codec::{
    normalize_digest, normalize_index, normalize_pubkey, normalize_signature, optional, required,
    EncodedInput, TapeIndex,
};
pub use crypto::Sha256Hash;
pub use error::{CodecError, Result};
pub use message::MessagePolicy;
pub use record::{ChainRecord, DescriptorRecord, RecordMessage, SignatureRecord};
pub use timestamp::{BoundTimestamp, TimestampBinding};
pub use types::{Argument, Tape, TapeCell};
