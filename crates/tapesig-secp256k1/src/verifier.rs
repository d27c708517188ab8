//! secp256k1 implementations of the verification capabilities.

use k256::ecdsa::signature::hazmat::PrehashVerifier;
use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};
use sha2::{Digest, Sha256};
use tapesig_core::{EcdsaDerVerifier, MessageSchemeVerifier};

use crate::address::Address;
use crate::message::signed_message_digest;

const COMPACT_SIGNATURE_LEN: usize = 65;

/// Verifies signed-message and DER signatures over secp256k1.
///
/// For signed-message signatures the `pubkey` may be SEC1 key bytes (33 or 65
/// bytes) or the text of a P2PKH address. Both predicates are total: every
/// malformed input simply fails verification.
#[derive(Debug, Clone, Copy, Default)]
pub struct Secp256k1Verifier;

impl Secp256k1Verifier {
    pub fn new() -> Self {
        Self
    }

    /// Recover the signing key from a compact signature.
    ///
    /// Returns the key and whether the header declares a compressed key.
    pub fn recover(signature: &[u8], message: &[u8]) -> Option<(VerifyingKey, bool)> {
        if signature.len() != COMPACT_SIGNATURE_LEN {
            return None;
        }
        let header = signature[0];
        if !(27..=34).contains(&header) {
            return None;
        }
        let compressed = header >= 31;
        let mut recovery_id = RecoveryId::from_byte((header - 27) & 0x03)?;

        let mut sig = Signature::from_slice(&signature[1..]).ok()?;
        // High-S signatures recover the same key once normalized with the
        // y-parity flipped.
        if let Some(normalized) = sig.normalize_s() {
            sig = normalized;
            recovery_id = RecoveryId::new(!recovery_id.is_y_odd(), recovery_id.is_x_reduced());
        }

        let digest = signed_message_digest(message);
        let key = VerifyingKey::recover_from_prehash(&digest, &sig, recovery_id).ok()?;
        Some((key, compressed))
    }
}

impl MessageSchemeVerifier for Secp256k1Verifier {
    fn verify(&self, signature: &[u8], message: &[u8], pubkey: &[u8]) -> bool {
        let Some((recovered, compressed)) = Self::recover(signature, message) else {
            return false;
        };

        if let Ok(expected) = VerifyingKey::from_sec1_bytes(pubkey) {
            return expected == recovered;
        }

        let Some(expected) = std::str::from_utf8(pubkey)
            .ok()
            .and_then(|text| text.parse::<Address>().ok())
        else {
            return false;
        };

        let encoded = recovered.to_encoded_point(compressed);
        Address::from_pubkey(encoded.as_bytes(), expected.network()) == expected
    }
}

impl EcdsaDerVerifier for Secp256k1Verifier {
    fn verify(
        &self,
        signature: &[u8],
        digest: &[u8],
        pubkey: &[u8],
        hash_before_verify: bool,
    ) -> bool {
        let Ok(key) = VerifyingKey::from_sec1_bytes(pubkey) else {
            return false;
        };
        let Ok(sig) = Signature::from_der(signature) else {
            return false;
        };
        let sig = sig.normalize_s().unwrap_or(sig);

        let prehash = if hash_before_verify {
            Sha256::digest(digest).to_vec()
        } else {
            digest.to_vec()
        };
        key.verify_prehash(&prehash, &sig).is_ok()
    }
}
