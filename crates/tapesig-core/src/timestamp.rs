//! Timestamp binding.
//!
//! A timestamp, when supplied, is appended to the computed hash (never to the
//! plaintext message) to form the subject handed to the verifier. Two
//! incompatible bindings exist and each operation selects one explicitly.

use serde::{Deserialize, Serialize};

use crate::codec::is_decimal;
use crate::crypto::Sha256Hash;
use crate::error::{CodecError, Result};
use crate::types::Argument;

/// How a timestamp is bound to a hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimestampBinding {
    /// Subject is `hex(hash)` followed by the timestamp's decimal text verbatim.
    DecimalText,
    /// Subject is the raw hash followed by the timestamp as 8 big-endian bytes.
    BigEndianU64,
}

/// A decoded timestamp and the suffix it contributes to the subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundTimestamp {
    value: i64,
    suffix: Vec<u8>,
}

impl BoundTimestamp {
    /// The decoded value reported in records.
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Bytes appended to the hash.
    pub fn suffix(&self) -> &[u8] {
        &self.suffix
    }
}

impl TimestampBinding {
    /// Decode a timestamp argument under this binding.
    ///
    /// `DecimalText` accepts an optional leading `-` followed by digits and
    /// keeps the text as given. `BigEndianU64` accepts exactly eight raw bytes
    /// or decimal text, which is re-encoded as eight big-endian bytes.
    pub fn decode(self, arg: &Argument, argument: &'static str) -> Result<BoundTimestamp> {
        match self {
            Self::DecimalText => {
                let value = parse_decimal(arg, argument)?;
                Ok(BoundTimestamp {
                    value,
                    suffix: arg.as_bytes().to_vec(),
                })
            }
            Self::BigEndianU64 => {
                let value = match arg.as_bytes() {
                    bytes if bytes.len() == 8 && !arg.as_text().is_some_and(is_decimal) => {
                        let mut be = [0u8; 8];
                        be.copy_from_slice(bytes);
                        i64::from_be_bytes(be)
                    }
                    _ => parse_decimal(arg, argument)?,
                };
                Ok(BoundTimestamp {
                    value,
                    suffix: value.to_be_bytes().to_vec(),
                })
            }
        }
    }

    /// The bytes the verifier is asked to check for `hash`.
    pub fn subject(self, hash: &Sha256Hash, timestamp: Option<&BoundTimestamp>) -> Vec<u8> {
        let mut subject = match self {
            Self::DecimalText => hash.to_hex().into_bytes(),
            Self::BigEndianU64 => hash.as_bytes().to_vec(),
        };
        if let Some(ts) = timestamp {
            subject.extend_from_slice(ts.suffix());
        }
        subject
    }
}

fn parse_decimal(arg: &Argument, argument: &'static str) -> Result<i64> {
    let text = arg.as_text().ok_or_else(|| CodecError::InvalidTimestamp {
        argument,
        reason: "not valid UTF-8".into(),
    })?;
    let digits = text.strip_prefix('-').unwrap_or(text);
    if !is_decimal(digits) {
        return Err(CodecError::InvalidTimestamp {
            argument,
            reason: format!("{text:?} is not a decimal integer"),
        });
    }
    text.parse::<i64>().map_err(|e| CodecError::InvalidTimestamp {
        argument,
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hash() -> Sha256Hash {
        Sha256Hash::hash(b"foobar")
    }

    #[test]
    fn test_decimal_text_subject() {
        let ts = TimestampBinding::DecimalText
            .decode(&Argument::from("1700000000"), "timestamp")
            .unwrap();
        assert_eq!(ts.value(), 1_700_000_000);

        let subject = TimestampBinding::DecimalText.subject(&hash(), Some(&ts));
        let expected = format!("{}1700000000", hash().to_hex());
        assert_eq!(subject, expected.into_bytes());
    }

    #[test]
    fn test_decimal_text_keeps_text_verbatim() {
        let ts = TimestampBinding::DecimalText
            .decode(&Argument::from("007"), "timestamp")
            .unwrap();
        assert_eq!(ts.value(), 7);
        assert_eq!(ts.suffix(), b"007");
    }

    #[test]
    fn test_big_endian_from_raw_bytes() {
        let raw = 1_700_000_000i64.to_be_bytes();
        let ts = TimestampBinding::BigEndianU64
            .decode(&Argument::from(&raw), "timestamp")
            .unwrap();
        assert_eq!(ts.value(), 1_700_000_000);

        let subject = TimestampBinding::BigEndianU64.subject(&hash(), Some(&ts));
        assert_eq!(subject.len(), 40);
        assert_eq!(&subject[..32], hash().as_bytes());
        assert_eq!(&subject[32..], &raw);
    }

    #[test]
    fn test_big_endian_from_decimal_text() {
        let from_text = TimestampBinding::BigEndianU64
            .decode(&Argument::from("1700000000"), "timestamp")
            .unwrap();
        let from_raw = TimestampBinding::BigEndianU64
            .decode(&Argument::from(&1_700_000_000i64.to_be_bytes()), "timestamp")
            .unwrap();
        assert_eq!(from_text, from_raw);
    }

    #[test]
    fn test_bindings_are_distinct() {
        let arg = Argument::from("1700000000");
        let text = TimestampBinding::DecimalText.decode(&arg, "timestamp").unwrap();
        let binary = TimestampBinding::BigEndianU64.decode(&arg, "timestamp").unwrap();
        assert_eq!(text.value(), binary.value());
        assert_ne!(
            TimestampBinding::DecimalText.subject(&hash(), Some(&text)),
            TimestampBinding::BigEndianU64.subject(&hash(), Some(&binary))
        );
    }

    #[test]
    fn test_no_timestamp_appends_nothing() {
        assert_eq!(
            TimestampBinding::DecimalText.subject(&hash(), None),
            hash().to_hex().into_bytes()
        );
        assert_eq!(
            TimestampBinding::BigEndianU64.subject(&hash(), None),
            hash().as_bytes().to_vec()
        );
    }

    #[test]
    fn test_rejects_non_numeric() {
        let err = TimestampBinding::DecimalText
            .decode(&Argument::from("soon"), "timestamp")
            .unwrap_err();
        assert!(matches!(err, CodecError::InvalidTimestamp { argument: "timestamp", .. }));

        let err = TimestampBinding::BigEndianU64
            .decode(&Argument::from(vec![1u8, 2, 3]), "timestamp")
            .unwrap_err();
        assert_eq!(err.argument(), Some("timestamp"));
    }
}
