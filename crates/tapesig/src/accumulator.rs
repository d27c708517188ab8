//! The result value threaded through successive operations.
//!
//! Each operation family owns one variant. The dynamic JSON form only exists
//! at the boundary, via [`Accumulator::to_json`].

use serde_json::{Map, Value};
use tapesig_core::{ChainRecord, DescriptorRecord, SignatureRecord};

use crate::error::{EngineError, Result};
use crate::operation::Family;

/// Signature records plus the payload they authorize.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PayloadRecord {
    pub signatures: Vec<SignatureRecord>,
    /// The decoded payload, present only once a signature over it verified.
    pub data: Option<Value>,
}

/// The accumulated result of one or more operations.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Accumulator {
    /// No operation has run yet.
    #[default]
    Empty,
    Signatures(Vec<SignatureRecord>),
    Chained(ChainRecord),
    Descriptor(DescriptorRecord),
    Payload(PayloadRecord),
}

impl Accumulator {
    pub fn new() -> Self {
        Self::Empty
    }

    /// The family fixed by the first operation, if any has run.
    pub fn family(&self) -> Option<Family> {
        match self {
            Accumulator::Empty => None,
            Accumulator::Signatures(_) => Some(Family::Signatures),
            Accumulator::Chained(_) => Some(Family::Chained),
            Accumulator::Descriptor(_) => Some(Family::Descriptor),
            Accumulator::Payload(_) => Some(Family::Payload),
        }
    }

    /// Signature records of the list-shaped families.
    pub fn signatures(&self) -> &[SignatureRecord] {
        match self {
            Accumulator::Signatures(records) => records,
            Accumulator::Payload(payload) => &payload.signatures,
            _ => &[],
        }
    }

    pub fn chain(&self) -> Option<&ChainRecord> {
        match self {
            Accumulator::Chained(chain) => Some(chain),
            _ => None,
        }
    }

    pub fn descriptor(&self) -> Option<&DescriptorRecord> {
        match self {
            Accumulator::Descriptor(descriptor) => Some(descriptor),
            _ => None,
        }
    }

    pub fn data(&self) -> Option<&Value> {
        match self {
            Accumulator::Payload(payload) => payload.data.as_ref(),
            _ => None,
        }
    }

    /// Append one signature record.
    pub(crate) fn push_signature(self, record: SignatureRecord) -> Result<Self> {
        match self {
            Accumulator::Empty => Ok(Accumulator::Signatures(vec![record])),
            Accumulator::Signatures(mut records) => {
                records.push(record);
                Ok(Accumulator::Signatures(records))
            }
            other => Err(mismatch(&other, Family::Signatures)),
        }
    }

    /// Set the parent and child records, replacing any previous pair.
    pub(crate) fn set_chain(self, chain: ChainRecord) -> Result<Self> {
        match self {
            Accumulator::Empty | Accumulator::Chained(_) => Ok(Accumulator::Chained(chain)),
            other => Err(mismatch(&other, Family::Chained)),
        }
    }

    /// Set the descriptor fields, replacing any previous descriptor.
    pub(crate) fn set_descriptor(self, descriptor: DescriptorRecord) -> Result<Self> {
        match self {
            Accumulator::Empty | Accumulator::Descriptor(_) => {
                Ok(Accumulator::Descriptor(descriptor))
            }
            other => Err(mismatch(&other, Family::Descriptor)),
        }
    }

    /// Append a signature record and, when given, replace the payload data.
    pub(crate) fn push_payload(self, record: SignatureRecord, data: Option<Value>) -> Result<Self> {
        let mut payload = match self {
            Accumulator::Empty => PayloadRecord::default(),
            Accumulator::Payload(payload) => payload,
            other => return Err(mismatch(&other, Family::Payload)),
        };
        payload.signatures.push(record);
        if data.is_some() {
            payload.data = data;
        }
        Ok(Accumulator::Payload(payload))
    }

    /// Render as a JSON object.
    ///
    /// - signatures: `{"signatures": [..]}`
    /// - chained: `{"signatures": {"parent": .., "child": ..}}`
    /// - descriptor: `{"type": .., "hash": ..}`
    /// - payload: `{"signatures": [..], "data": ..}`
    pub fn to_json(&self) -> Result<Value> {
        let mut object = Map::new();
        match self {
            Accumulator::Empty => {}
            Accumulator::Signatures(records) => {
                object.insert("signatures".into(), serde_json::to_value(records)?);
            }
            Accumulator::Chained(chain) => {
                object.insert("signatures".into(), serde_json::to_value(chain)?);
            }
            Accumulator::Descriptor(descriptor) => {
                if let Value::Object(fields) = serde_json::to_value(descriptor)? {
                    object.extend(fields);
                }
            }
            Accumulator::Payload(payload) => {
                object.insert(
                    "signatures".into(),
                    serde_json::to_value(&payload.signatures)?,
                );
                if let Some(data) = &payload.data {
                    object.insert("data".into(), data.clone());
                }
            }
        }
        Ok(Value::Object(object))
    }
}

fn mismatch(existing: &Accumulator, found: Family) -> EngineError {
    EngineError::FamilyMismatch {
        // Only non-empty accumulators reach here.
        expected: existing.family().unwrap_or(found),
        found,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> SignatureRecord {
        SignatureRecord::new(vec![0x01], vec![0x02])
    }

    #[test]
    fn test_empty_renders_empty_object() {
        assert_eq!(Accumulator::new().to_json().unwrap(), serde_json::json!({}));
    }

    #[test]
    fn test_signatures_append() {
        let acc = Accumulator::new()
            .push_signature(record())
            .unwrap()
            .push_signature(record())
            .unwrap();
        assert_eq!(acc.signatures().len(), 2);
        assert_eq!(acc.family(), Some(Family::Signatures));

        let json = acc.to_json().unwrap();
        assert_eq!(json["signatures"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn test_family_mismatch() {
        let acc = Accumulator::new().push_signature(record()).unwrap();
        let err = acc
            .set_descriptor(DescriptorRecord {
                content_type: "text/plain".into(),
                hash: "00".into(),
            })
            .unwrap_err();
        assert!(matches!(
            err,
            EngineError::FamilyMismatch {
                expected: Family::Signatures,
                found: Family::Descriptor
            }
        ));
    }

    #[test]
    fn test_chain_renders_under_signatures() {
        let acc = Accumulator::new()
            .set_chain(ChainRecord {
                parent: record(),
                child: record(),
            })
            .unwrap();
        let json = acc.to_json().unwrap();
        assert_eq!(json["signatures"]["parent"]["verified"], false);
        assert_eq!(json["signatures"]["child"]["signature"], "01");
    }

    #[test]
    fn test_descriptor_renders_flat() {
        let acc = Accumulator::new()
            .set_descriptor(DescriptorRecord {
                content_type: "text/plain".into(),
                hash: "ab".into(),
            })
            .unwrap();
        assert_eq!(
            acc.to_json().unwrap(),
            serde_json::json!({"type": "text/plain", "hash": "ab"})
        );
    }

    #[test]
    fn test_payload_data_kept_when_later_record_fails() {
        let acc = Accumulator::new()
            .push_payload(record(), Some(serde_json::json!({"k": 1})))
            .unwrap()
            .push_payload(record(), None)
            .unwrap();
        assert_eq!(acc.signatures().len(), 2);
        assert_eq!(acc.data(), Some(&serde_json::json!({"k": 1})));
    }
}
