//! Signing keys.
//!
//! Wraps a k256 `SigningKey`. Used by fixtures and tooling to produce the two
//! signature shapes the verifier accepts.

use std::fmt;

use k256::ecdsa::signature::hazmat::PrehashSigner;
use k256::ecdsa::{Signature, SigningKey};
use sha2::{Digest, Sha256};

use crate::address::{Address, Network};
use crate::error::{Result, SecpError};
use crate::message::signed_message_digest;

/// Header byte offset for compact signatures made with a compressed key.
const COMPRESSED_HEADER_BASE: u8 = 31;

/// A secp256k1 keypair.
#[derive(Clone)]
pub struct Keypair {
    signing_key: SigningKey,
}

impl Keypair {
    /// Generate a new random keypair.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        Self {
            signing_key: SigningKey::random(&mut rng),
        }
    }

    /// Create from a 32-byte secret scalar.
    pub fn from_seed(seed: &[u8; 32]) -> Result<Self> {
        let signing_key = SigningKey::from_slice(seed).map_err(|_| SecpError::InvalidSecretKey)?;
        Ok(Self { signing_key })
    }

    /// Compressed SEC1 public key (33 bytes).
    pub fn public_key(&self) -> Vec<u8> {
        self.signing_key
            .verifying_key()
            .to_encoded_point(true)
            .as_bytes()
            .to_vec()
    }

    /// Compressed public key as lowercase hex (66 characters).
    pub fn public_key_hex(&self) -> String {
        hex::encode(self.public_key())
    }

    /// P2PKH address of the compressed public key.
    pub fn address(&self, network: Network) -> Address {
        Address::from_pubkey(&self.public_key(), network)
    }

    /// Produce a 65-byte compact recoverable signature over `message` using
    /// the signed-message digest.
    pub fn sign_message(&self, message: &[u8]) -> Result<[u8; 65]> {
        let digest = signed_message_digest(message);
        let (signature, recovery_id) = self
            .signing_key
            .sign_prehash_recoverable(&digest)
            .map_err(|e| SecpError::Signing(e.to_string()))?;

        let mut out = [0u8; 65];
        out[0] = COMPRESSED_HEADER_BASE + recovery_id.to_byte();
        out[1..].copy_from_slice(&signature.to_bytes());
        Ok(out)
    }

    /// Produce a DER-encoded ECDSA signature.
    ///
    /// With `hash_before_verify`, `digest` is hashed with SHA-256 first,
    /// mirroring the verifier's flag.
    pub fn sign_der(&self, digest: &[u8], hash_before_verify: bool) -> Result<Vec<u8>> {
        let prehash = if hash_before_verify {
            Sha256::digest(digest).to_vec()
        } else {
            digest.to_vec()
        };
        let signature: Signature = self
            .signing_key
            .sign_prehash(&prehash)
            .map_err(|e| SecpError::Signing(e.to_string()))?;
        Ok(signature.to_der().as_bytes().to_vec())
    }
}

impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Keypair({})", &self.public_key_hex()[..16])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_from_seed() {
        let kp1 = Keypair::from_seed(&[0x42; 32]).unwrap();
        let kp2 = Keypair::from_seed(&[0x42; 32]).unwrap();
        assert_eq!(kp1.public_key(), kp2.public_key());
        assert_eq!(kp1.public_key().len(), 33);
    }

    #[test]
    fn test_zero_seed_rejected() {
        assert!(matches!(
            Keypair::from_seed(&[0u8; 32]),
            Err(SecpError::InvalidSecretKey)
        ));
    }

    #[test]
    fn test_generator_key() {
        let mut seed = [0u8; 32];
        seed[31] = 1;
        let kp = Keypair::from_seed(&seed).unwrap();
        assert_eq!(
            kp.public_key_hex(),
            "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"
        );
        assert_eq!(
            kp.address(Network::Mainnet).to_string(),
            "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH"
        );
    }

    #[test]
    fn test_compact_header_marks_compressed() {
        let kp = Keypair::from_seed(&[0x42; 32]).unwrap();
        let sig = kp.sign_message(b"hello").unwrap();
        assert!((31..=34).contains(&sig[0]));
    }

    #[test]
    fn test_der_length() {
        let kp = Keypair::from_seed(&[0x42; 32]).unwrap();
        let sig = kp.sign_der(b"hello", true).unwrap();
        assert!((68..=72).contains(&sig.len()));
        assert_eq!(sig[0], 0x30);
    }
}
