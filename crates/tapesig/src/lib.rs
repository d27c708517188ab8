//! # tapesig
//!
//! Verify signatures asserted over tape cells.
//!
//! ## Overview
//!
//! A record carries one or more outputs, each an ordered sequence of data and
//! opcode cells (a *tape*). A signature over a tape is checked by rebuilding
//! the signed message from the cells under an explicit policy, hashing it,
//! optionally binding a timestamp, and handing the result to a signature
//! capability. Outcomes are collected in an [`Accumulator`] whose shape is
//! fixed by the first operation applied.
//!
//! - **Operations**: tape signatures, prefixed messages, DER signatures,
//!   parent/child chains, content descriptors, signed JSON payloads
//! - **Policies**: concatenation or pushdata message reconstruction
//! - **Bindings**: decimal-text or big-endian timestamp binding
//!
//! A signature that does not verify is a result, not an error. Errors are
//! reserved for malformed arguments and family mismatches.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tapesig::{Accumulator, Engine, EngineConfig, Operation};
//! use tapesig::core::{Argument, MessagePolicy, NoTape, TimestampBinding};
//!
//! let engine = Engine::secp256k1(EngineConfig::default());
//! let operation = Operation::TapeSignature {
//!     policy: MessagePolicy::Pushdata,
//!     binding: TimestampBinding::DecimalText,
//! };
//! let args = [
//!     Argument::from("H0v8...base64 signature"),
//!     Argument::from("1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH"),
//!     Argument::from("1"),
//! ];
//!
//! let acc = engine
//!     .apply(operation, Accumulator::new(), &args, &NoTape)
//!     .unwrap();
//! println!("{}", acc.to_json().unwrap());
//! ```
//!
//! ## Re-exports
//!
//! - `tapesig::core` - Tape types, codecs, message policies, records
//! - `tapesig::secp256k1` - secp256k1 verifier, keys, and addresses

pub mod accumulator;
pub mod engine;
pub mod error;
pub mod operation;

// Re-export component crates
pub use tapesig_core as core;
pub use tapesig_secp256k1 as secp256k1;

// Re-export main types for convenience
pub use accumulator::{Accumulator, PayloadRecord};
pub use engine::{Engine, EngineConfig};
pub use error::{EngineError, Result};
pub use operation::{Family, Operation};

// Re-export commonly used core types
pub use tapesig_core::{
    Argument, ChainRecord, ChildDerivation, DescriptorRecord, MessagePolicy, SignatureRecord,
    Tape, TapeCell, TapeReader, TimestampBinding,
};
