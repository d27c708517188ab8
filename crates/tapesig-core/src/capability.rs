//! Capabilities injected by the host.
//!
//! The tape lookup and both signature schemes live outside this crate. All of
//! them are synchronous and side-effect free from the caller's point of view.

use bytes::Bytes;

use crate::types::Tape;

/// Resolves the tape for an output index of the enclosing record.
pub trait TapeReader {
    /// Return the cells for `index`, or `None` when the index cannot be
    /// resolved. `None` means "unverifiable", never an error.
    fn lookup(&self, index: u64) -> Option<Tape>;
}

/// Verifies 65-byte recoverable signatures bound to an address or public key.
pub trait MessageSchemeVerifier {
    /// Must return `false`, never panic, on any mismatch or unparsable input.
    fn verify(&self, signature: &[u8], message: &[u8], pubkey: &[u8]) -> bool;
}

/// Verifies DER-encoded ECDSA signatures.
pub trait EcdsaDerVerifier {
    /// When `hash_before_verify` is set, `digest` is hashed once more before
    /// verification. Must return `false`, never panic, on any mismatch.
    fn verify(&self, signature: &[u8], digest: &[u8], pubkey: &[u8], hash_before_verify: bool)
        -> bool;
}

/// Maps an address-format identity string to the key bytes the verifier expects.
pub trait AddressResolver {
    /// Return `None` if the address is unknown or malformed.
    fn resolve(&self, address: &str) -> Option<Bytes>;
}

impl<T: TapeReader + ?Sized> TapeReader for Box<T> {
    fn lookup(&self, index: u64) -> Option<Tape> {
        (**self).lookup(index)
    }
}

impl<T: MessageSchemeVerifier + ?Sized> MessageSchemeVerifier for Box<T> {
    fn verify(&self, signature: &[u8], message: &[u8], pubkey: &[u8]) -> bool {
        (**self).verify(signature, message, pubkey)
    }
}

impl<T: EcdsaDerVerifier + ?Sized> EcdsaDerVerifier for Box<T> {
    fn verify(
        &self,
        signature: &[u8],
        digest: &[u8],
        pubkey: &[u8],
        hash_before_verify: bool,
    ) -> bool {
        (**self).verify(signature, digest, pubkey, hash_before_verify)
    }
}

/// A tape reader with no outputs; every lookup is unresolved.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTape;

impl TapeReader for NoTape {
    fn lookup(&self, _index: u64) -> Option<Tape> {
        None
    }
}
