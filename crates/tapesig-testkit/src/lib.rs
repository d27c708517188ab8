//! # tapesig testkit
//!
//! Testing utilities for tapesig.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Tapes with their expected messages and hashes under
//!   each message policy
//! - **Generators**: Proptest strategies for tapes, cells, indexes, and keys
//! - **Fixtures**: An in-memory tape reader, deterministic fake verifiers,
//!   and a signer that produces real secp256k1 signatures over tapes
//!
//! ## Golden Vectors
//!
//! ```rust
//! use tapesig_testkit::vectors::all_vectors;
//!
//! for vector in all_vectors() {
//!     let hash = vector.policy.hash(&vector.tape()).unwrap();
//!     assert_eq!(hash.to_hex(), vector.expected_hash);
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use tapesig_core::{MessagePolicy, TimestampBinding};
//! use tapesig_testkit::fixtures::{op_return_tape, MemoryTape, TestFixture};
//!
//! let fixture = TestFixture::with_seed([0x42; 32]);
//! let tapes = MemoryTape::new().with(1, op_return_tape());
//! let signature = fixture.sign_tape(
//!     &op_return_tape(),
//!     MessagePolicy::Pushdata,
//!     TimestampBinding::DecimalText,
//!     None,
//! );
//! assert_eq!(signature.len(), 65);
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{
    fake_sign, multi_party_fixtures, op_return_tape, FakeDerVerifier, FakeMessageVerifier,
    to_base64, MemoryTape, StaticAddressResolver, TestFixture,
};
pub use generators::{tape_from_params, TapeParams};
pub use vectors::{all_vectors, verify_all_vectors, GoldenVector};
