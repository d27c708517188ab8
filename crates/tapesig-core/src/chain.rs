//! Parent to child signature chaining.
//!
//! A child signature commits to "this parent signature at this tape
//! position". Its message is derived from the tape index and the parent's
//! signature and key, never from the tape itself and never from any link
//! further up the chain.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::codec::TapeIndex;
use crate::crypto::Sha256Hash;
use crate::error::{CodecError, Result};
use crate::pushdata::write_push;

/// How a child's message is derived from its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChildDerivation {
    /// `index_text ++ parent_signature ++ parent_pubkey`, with the index
    /// argument taken verbatim as the host passed it.
    HashOnly,
    /// Each component as a pushdata push; the index as a single byte.
    Pushdata,
}

impl ChildDerivation {
    /// The preimage whose SHA-256 the child signature covers.
    pub fn preimage(
        self,
        index: &TapeIndex,
        parent_signature: &[u8],
        parent_pubkey: &[u8],
    ) -> Result<Vec<u8>> {
        match self {
            Self::HashOnly => {
                let mut buf = Vec::with_capacity(
                    index.raw().len() + parent_signature.len() + parent_pubkey.len(),
                );
                buf.extend_from_slice(index.raw());
                buf.extend_from_slice(parent_signature);
                buf.extend_from_slice(parent_pubkey);
                Ok(buf)
            }
            Self::Pushdata => {
                let byte = u8::try_from(index.value()).map_err(|_| CodecError::InvalidIndex {
                    argument: "index",
                    reason: format!(
                        "index {} does not fit the single-byte pushdata form",
                        index.value()
                    ),
                })?;
                let mut buf = Vec::with_capacity(parent_signature.len() + parent_pubkey.len() + 8);
                write_push(&mut buf, &[byte])?;
                write_push(&mut buf, parent_signature)?;
                write_push(&mut buf, parent_pubkey)?;
                Ok(buf)
            }
        }
    }

    /// SHA-256 of the derived preimage.
    pub fn digest(
        self,
        index: &TapeIndex,
        parent_signature: &[u8],
        parent_pubkey: &[u8],
    ) -> Result<Sha256Hash> {
        Ok(Sha256Hash::hash(&self.preimage(index, parent_signature, parent_pubkey)?))
    }
}

/// One signer in a chain: a normalized signature and public key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainLink {
    pub signature: Bytes,
    pub pubkey: Bytes,
}

impl ChainLink {
    pub fn new(signature: impl Into<Bytes>, pubkey: impl Into<Bytes>) -> Self {
        Self {
            signature: signature.into(),
            pubkey: pubkey.into(),
        }
    }
}

/// A derived message for one link of a chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedMessage {
    /// The bytes that were hashed.
    pub preimage: Vec<u8>,
    /// Their SHA-256.
    pub hash: Sha256Hash,
}

/// An ordered list of "derive the next message from the previous link" steps.
///
/// The root link's message comes from the tape and is supplied by the caller.
/// Every later link's message is a function of the tape index and the link
/// directly before it.
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    index: &'a TapeIndex,
    derivation: ChildDerivation,
}

impl<'a> Chain<'a> {
    pub fn new(index: &'a TapeIndex, derivation: ChildDerivation) -> Self {
        Self { index, derivation }
    }

    /// The message for the link that follows `previous`.
    pub fn derive_next(&self, previous: &ChainLink) -> Result<DerivedMessage> {
        let preimage = self
            .derivation
            .preimage(self.index, &previous.signature, &previous.pubkey)?;
        let hash = Sha256Hash::hash(&preimage);
        Ok(DerivedMessage { preimage, hash })
    }

    /// Messages for every link after the root, in order.
    ///
    /// Returns one entry per link in `links[1..]`.
    pub fn derive(&self, links: &[ChainLink]) -> Result<Vec<DerivedMessage>> {
        links
            .windows(2)
            .map(|pair| self.derive_next(&pair[0]))
            .collect()
    }
}
