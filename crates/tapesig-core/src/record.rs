//! Verification result records.
//!
//! Binary fields serialize as lowercase hex. Optional fields that were never
//! set are omitted from serialized output rather than written as null or zero.

use bytes::Bytes;
use serde::{Serialize, Serializer};

/// The outcome of checking one signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignatureRecord {
    /// Normalized signature bytes.
    #[serde(serialize_with = "serialize_hex")]
    pub signature: Bytes,

    /// Normalized public key (or address) bytes.
    #[serde(serialize_with = "serialize_hex")]
    pub pubkey: Bytes,

    /// Hex SHA-256 of the reconstructed message. Absent when it could not be
    /// computed, e.g. because the tape index did not resolve.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,

    verified: bool,

    /// Decoded timestamp, present only when one was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,

    /// The reconstructed message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<RecordMessage>,
}

impl SignatureRecord {
    /// A new, unverified record.
    pub fn new(signature: impl Into<Bytes>, pubkey: impl Into<Bytes>) -> Self {
        Self {
            signature: signature.into(),
            pubkey: pubkey.into(),
            hash: None,
            verified: false,
            timestamp: None,
            message: None,
        }
    }

    /// Whether a verification call confirmed this signature.
    pub fn verified(&self) -> bool {
        self.verified
    }

    /// Store the result of a verification call.
    pub fn confirm(&mut self, outcome: bool) {
        self.verified = outcome;
    }
}

/// A reconstructed message: text when it is valid UTF-8, bytes otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordMessage {
    Text(String),
    Bytes(Bytes),
}

impl RecordMessage {
    /// The message bytes regardless of representation.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Text(text) => text.as_bytes(),
            Self::Bytes(bytes) => bytes,
        }
    }
}

impl From<Vec<u8>> for RecordMessage {
    fn from(bytes: Vec<u8>) -> Self {
        match String::from_utf8(bytes) {
            Ok(text) => Self::Text(text),
            Err(e) => Self::Bytes(Bytes::from(e.into_bytes())),
        }
    }
}

impl Serialize for RecordMessage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(text) => serializer.serialize_str(text),
            Self::Bytes(bytes) => serializer.serialize_str(&hex::encode(bytes)),
        }
    }
}

/// A parent signature and the child signature chained to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChainRecord {
    pub parent: SignatureRecord,
    pub child: SignatureRecord,
}

/// A content descriptor: media type and content hash, no signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DescriptorRecord {
    #[serde(rename = "type")]
    pub content_type: String,
    pub hash: String,
}

fn serialize_hex<S: Serializer>(bytes: &Bytes, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&hex::encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_unverified() {
        let record = SignatureRecord::new(vec![1u8], vec![2u8]);
        assert!(!record.verified());
        assert!(record.hash.is_none());
        assert!(record.timestamp.is_none());
    }

    #[test]
    fn test_serialization_omits_absent_fields() {
        let record = SignatureRecord::new(vec![0xab], vec![0xcd]);
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["signature"], "ab");
        assert_eq!(json["pubkey"], "cd");
        assert_eq!(json["verified"], false);
        assert!(json.get("hash").is_none());
        assert!(json.get("timestamp").is_none());
        assert!(json.get("message").is_none());
    }

    #[test]
    fn test_message_representation() {
        assert_eq!(
            RecordMessage::from(b"app.data".to_vec()),
            RecordMessage::Text("app.data".into())
        );
        let binary = RecordMessage::from(vec![0xff, 0x00]);
        assert_eq!(binary.as_bytes(), &[0xff, 0x00]);
        assert_eq!(serde_json::to_value(&binary).unwrap(), "ff00");
    }

    #[test]
    fn test_descriptor_field_names() {
        let record = DescriptorRecord {
            content_type: "text/plain".into(),
            hash: "00".into(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "text/plain");
        assert_eq!(json["hash"], "00");
    }
}
