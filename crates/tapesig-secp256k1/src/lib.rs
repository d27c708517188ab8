//! # tapesig secp256k1
//!
//! Concrete signature capabilities over secp256k1:
//!
//! - [`Secp256k1Verifier`] implements both
//!   [`MessageSchemeVerifier`](tapesig_core::MessageSchemeVerifier) (65-byte
//!   compact recoverable signatures over the Bitcoin signed-message digest)
//!   and [`EcdsaDerVerifier`](tapesig_core::EcdsaDerVerifier).
//! - [`Keypair`] produces both signature shapes, for fixtures and tooling.
//! - [`address`] derives and parses P2PKH addresses, so a signed-message
//!   signature can be checked against an address instead of a key.

pub mod address;
pub mod error;
pub mod keypair;
pub mod message;
pub mod verifier;

pub use address::{Address, Network};
pub use error::{Result, SecpError};
pub use keypair::Keypair;
pub use message::signed_message_digest;
pub use verifier::Secp256k1Verifier;
