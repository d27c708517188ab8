//! P2PKH addresses.
//!
//! `base58(version ++ ripemd160(sha256(pubkey)) ++ checksum)` where the
//! checksum is the first four bytes of `sha256d` over the preceding bytes.

use std::fmt;
use std::str::FromStr;

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

use crate::error::{Result, SecpError};
use crate::message::sha256d;

/// Address network, selecting the version byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    Mainnet,
    Testnet,
}

impl Network {
    pub const fn version(self) -> u8 {
        match self {
            Network::Mainnet => 0x00,
            Network::Testnet => 0x6f,
        }
    }

    pub fn from_version(version: u8) -> Option<Self> {
        match version {
            0x00 => Some(Network::Mainnet),
            0x6f => Some(Network::Testnet),
            _ => None,
        }
    }
}

/// A pay-to-public-key-hash address.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address {
    network: Network,
    hash: [u8; 20],
}

impl Address {
    /// Derive the address for serialized public key bytes.
    ///
    /// Compressed and uncompressed encodings of the same point produce
    /// different addresses.
    pub fn from_pubkey(pubkey: &[u8], network: Network) -> Self {
        Self {
            network,
            hash: hash160(pubkey),
        }
    }

    pub fn network(&self) -> Network {
        self.network
    }

    /// The 20-byte public key hash.
    pub fn hash(&self) -> &[u8; 20] {
        &self.hash
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut payload = Vec::with_capacity(25);
        payload.push(self.network.version());
        payload.extend_from_slice(&self.hash);
        let checksum = sha256d(&payload);
        payload.extend_from_slice(&checksum[..4]);
        f.write_str(&bs58::encode(payload).into_string())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({self})")
    }
}

impl FromStr for Address {
    type Err = SecpError;

    fn from_str(s: &str) -> Result<Self> {
        let bytes = bs58::decode(s)
            .into_vec()
            .map_err(|e| SecpError::InvalidAddress(e.to_string()))?;
        if bytes.len() != 25 {
            return Err(SecpError::InvalidAddress(format!(
                "expected 25 bytes, got {}",
                bytes.len()
            )));
        }

        let (payload, checksum) = bytes.split_at(21);
        if sha256d(payload)[..4] != *checksum {
            return Err(SecpError::InvalidAddress("checksum mismatch".into()));
        }

        let network = Network::from_version(payload[0])
            .ok_or_else(|| SecpError::InvalidAddress(format!("unknown version {}", payload[0])))?;
        let mut hash = [0u8; 20];
        hash.copy_from_slice(&payload[1..]);
        Ok(Self { network, hash })
    }
}

/// `ripemd160(sha256(data))`
pub fn hash160(data: &[u8]) -> [u8; 20] {
    let mut out = [0u8; 20];
    out.copy_from_slice(&Ripemd160::digest(Sha256::digest(data)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    // Generator point G, compressed.
    const G_COMPRESSED: &str = "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";

    #[test]
    fn test_generator_address() {
        let pubkey = hex::decode(G_COMPRESSED).unwrap();
        let address = Address::from_pubkey(&pubkey, Network::Mainnet);
        assert_eq!(address.to_string(), "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH");
    }

    #[test]
    fn test_parse_roundtrip() {
        let parsed: Address = "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH".parse().unwrap();
        assert_eq!(parsed.network(), Network::Mainnet);
        assert_eq!(parsed.to_string(), "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH");
    }

    #[test]
    fn test_parse_rejects_bad_checksum() {
        assert!("1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMJ".parse::<Address>().is_err());
    }

    #[test]
    fn test_testnet_prefix() {
        let pubkey = hex::decode(G_COMPRESSED).unwrap();
        let address = Address::from_pubkey(&pubkey, Network::Testnet);
        let text = address.to_string();
        assert!(text.starts_with('m') || text.starts_with('n'));
        assert_eq!(text.parse::<Address>().unwrap(), address);
    }
}
