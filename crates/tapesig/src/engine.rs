//! The Engine: applies operations to an accumulator.
//!
//! Every call is a pure transform `(accumulator, arguments) -> accumulator`.
//! The only externalities are the tape lookup and the verification
//! capabilities, all of which are synchronous and side-effect free.

use bytes::Bytes;
use serde_json::Value;
use tracing::{debug, trace, warn};

use tapesig_core::{
    normalize_digest, normalize_index, normalize_pubkey, normalize_signature, optional, required,
    AddressResolver, Argument, BoundTimestamp, Chain, ChainLink, ChainRecord, ChildDerivation,
    CodecError, DerivedMessage, DescriptorRecord, EcdsaDerVerifier, MessagePolicy,
    MessageSchemeVerifier, RecordMessage, Sha256Hash, SignatureRecord, TapeIndex, TapeReader,
    TimestampBinding,
};
use tapesig_secp256k1::Secp256k1Verifier;

use crate::accumulator::Accumulator;
use crate::error::{EngineError, Result};
use crate::operation::Operation;

/// Configuration for the Engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Attach the reconstructed message to tape-derived records.
    pub record_messages: bool,
    /// Passed as `hash_before_verify` to the DER verifier.
    pub hash_der_messages: bool,
    /// Largest tape index accepted from decimal text.
    pub max_index: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            record_messages: true,
            hash_der_messages: true,
            max_index: u64::from(u32::MAX),
        }
    }
}

/// Applies operations using injected verification capabilities.
pub struct Engine<M, D> {
    message_verifier: M,
    der_verifier: D,
    address_resolver: Option<Box<dyn AddressResolver>>,
    config: EngineConfig,
}

impl Engine<Secp256k1Verifier, Secp256k1Verifier> {
    /// An engine backed by the secp256k1 verifier for both schemes.
    pub fn secp256k1(config: EngineConfig) -> Self {
        Self::new(Secp256k1Verifier::new(), Secp256k1Verifier::new(), config)
    }
}

impl<M: MessageSchemeVerifier, D: EcdsaDerVerifier> Engine<M, D> {
    /// Create a new engine.
    pub fn new(message_verifier: M, der_verifier: D, config: EngineConfig) -> Self {
        Self {
            message_verifier,
            der_verifier,
            address_resolver: None,
            config,
        }
    }

    /// Resolve address-format public keys through `resolver`.
    ///
    /// Without a resolver, address text is handed to the verifier as-is.
    pub fn with_address_resolver(mut self, resolver: impl AddressResolver + 'static) -> Self {
        self.address_resolver = Some(Box::new(resolver));
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Apply one operation.
    ///
    /// `tape` resolves output indexes of the record being verified. A failed
    /// precondition returns an error and discards the accumulator; a failed
    /// verification is recorded and returned normally.
    pub fn apply(
        &self,
        operation: Operation,
        acc: Accumulator,
        args: &[Argument],
        tape: &dyn TapeReader,
    ) -> Result<Accumulator> {
        debug!(operation = operation.name(), args = args.len(), "applying operation");

        match operation {
            Operation::TapeSignature { policy, binding } => {
                let record = self.tape_signature(policy, binding, args, tape)?;
                acc.push_signature(record)
            }
            Operation::PrefixedMessage => acc.push_signature(self.prefixed_message(args)?),
            Operation::DerSignature => acc.push_signature(self.der_signature(args)?),
            Operation::ChainedSignature {
                derivation,
                binding,
            } => acc.set_chain(self.chained_signature(derivation, binding, args, tape)?),
            Operation::Descriptor => acc.set_descriptor(self.descriptor(args)?),
            Operation::SignedPayload { policy, binding } => {
                let (record, data) = self.signed_payload(policy, binding, args, tape)?;
                acc.push_payload(record, data)
            }
        }
    }

    /// Apply a sequence of operations, starting from an empty accumulator.
    pub fn apply_all<'a>(
        &self,
        steps: impl IntoIterator<Item = (Operation, &'a [Argument])>,
        tape: &dyn TapeReader,
    ) -> Result<Accumulator> {
        steps
            .into_iter()
            .try_fold(Accumulator::new(), |acc, (operation, args)| {
                self.apply(operation, acc, args, tape)
            })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Operations
    // ─────────────────────────────────────────────────────────────────────────

    fn tape_signature(
        &self,
        policy: MessagePolicy,
        binding: TimestampBinding,
        args: &[Argument],
        tape: &dyn TapeReader,
    ) -> Result<SignatureRecord> {
        let link = ChainLink::new(
            self.signature(args, 0, "signature")?,
            self.pubkey(args, 1, "pubkey")?,
        );
        let index = self.index(args, 2)?;
        let timestamp = timestamp(args, 3, binding)?;

        let record = self.tape_leg(tape, &index, policy, binding, &link, timestamp.as_ref())?;
        debug!(index = index.value(), verified = record.verified(), "tape signature evaluated");
        Ok(record)
    }

    fn prefixed_message(&self, args: &[Argument]) -> Result<SignatureRecord> {
        let prefix = required(args, 0, "prefix")?;
        let data = required(args, 1, "data")?;
        let mut record = SignatureRecord::new(
            self.signature(args, 2, "signature")?,
            self.pubkey(args, 3, "pubkey")?,
        );

        let mut message = Vec::with_capacity(prefix.len() + data.len() + 1);
        message.extend_from_slice(prefix.as_bytes());
        message.push(b'.');
        message.extend_from_slice(data.as_bytes());

        let verified = self
            .message_verifier
            .verify(&record.signature, &message, &record.pubkey);
        record.confirm(verified);
        record.hash = Some(Sha256Hash::hash(&message).to_hex());
        record.message = Some(RecordMessage::from(message));

        debug!(verified, "prefixed message evaluated");
        Ok(record)
    }

    fn der_signature(&self, args: &[Argument]) -> Result<SignatureRecord> {
        let signature = self.signature(args, 0, "signature")?;
        let message = required(args, 1, "message")?;
        let pubkey = self.pubkey(args, 2, "pubkey")?;

        let verified = self.der_verifier.verify(
            &signature,
            message.as_bytes(),
            &pubkey,
            self.config.hash_der_messages,
        );

        let mut record = SignatureRecord::new(signature, pubkey);
        record.confirm(verified);
        record.hash = Some(Sha256Hash::hash(message.as_bytes()).to_hex());
        if self.config.record_messages {
            record.message = Some(RecordMessage::from(message.as_bytes().to_vec()));
        }

        debug!(verified, "der signature evaluated");
        Ok(record)
    }

    fn chained_signature(
        &self,
        derivation: ChildDerivation,
        binding: TimestampBinding,
        args: &[Argument],
        tape: &dyn TapeReader,
    ) -> Result<ChainRecord> {
        let index = self.index(args, 0)?;
        let parent = ChainLink::new(
            self.signature(args, 1, "parent_signature")?,
            self.pubkey(args, 2, "parent_pubkey")?,
        );
        let child = ChainLink::new(
            self.signature(args, 3, "child_signature")?,
            self.pubkey(args, 4, "child_pubkey")?,
        );
        let timestamp = timestamp(args, 5, binding)?;

        // The child's message never touches the tape, so it is derived
        // before the lookup and evaluated whatever the parent's outcome.
        let derived = Chain::new(&index, derivation).derive_next(&parent)?;

        let parent = self.tape_leg(
            tape,
            &index,
            MessagePolicy::Pushdata,
            binding,
            &parent,
            timestamp.as_ref(),
        )?;
        let child = self.derived_leg(&child, derived, binding, timestamp.as_ref());

        debug!(
            index = index.value(),
            parent_verified = parent.verified(),
            child_verified = child.verified(),
            "chained signature evaluated"
        );
        Ok(ChainRecord { parent, child })
    }

    fn descriptor(&self, args: &[Argument]) -> Result<DescriptorRecord> {
        let content_type = required(args, 0, "type")?
            .as_text()
            .ok_or_else(|| EngineError::InvalidContentType {
                argument: "type",
                reason: "not valid UTF-8".into(),
            })?
            .to_owned();
        let hash = normalize_digest(required(args, 1, "hash")?, "hash")?;

        Ok(DescriptorRecord {
            content_type,
            hash: hex::encode(hash),
        })
    }

    fn signed_payload(
        &self,
        policy: MessagePolicy,
        binding: TimestampBinding,
        args: &[Argument],
        tape: &dyn TapeReader,
    ) -> Result<(SignatureRecord, Option<Value>)> {
        let payload = required(args, 0, "payload")?;
        let value: Value =
            serde_json::from_slice(payload.as_bytes()).map_err(|e| EngineError::InvalidPayload {
                argument: "payload",
                reason: e.to_string(),
            })?;

        let link = ChainLink::new(
            self.signature(args, 1, "signature")?,
            self.pubkey(args, 2, "pubkey")?,
        );
        let index = self.index(args, 3)?;
        let timestamp = timestamp(args, 4, binding)?;

        let record = self.tape_leg(tape, &index, policy, binding, &link, timestamp.as_ref())?;
        debug!(index = index.value(), verified = record.verified(), "signed payload evaluated");

        let data = record.verified().then_some(value);
        Ok((record, data))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Legs
    // ─────────────────────────────────────────────────────────────────────────

    /// Verify a signature over the hash of the tape at `index`.
    fn tape_leg(
        &self,
        tape: &dyn TapeReader,
        index: &TapeIndex,
        policy: MessagePolicy,
        binding: TimestampBinding,
        link: &ChainLink,
        timestamp: Option<&BoundTimestamp>,
    ) -> Result<SignatureRecord> {
        let mut record = SignatureRecord::new(link.signature.clone(), link.pubkey.clone());
        record.timestamp = timestamp.map(BoundTimestamp::value);

        let Some(cells) = tape.lookup(index.value()) else {
            warn!(index = index.value(), "tape index did not resolve, signature is unverifiable");
            return Ok(record);
        };

        let message = policy.build(&cells)?;
        let hash = Sha256Hash::hash(&message);
        trace!(
            index = index.value(),
            cells = cells.len(),
            message_len = message.len(),
            hash = %hash,
            "reconstructed tape message"
        );

        self.check(&mut record, &hash, binding, timestamp);
        record.hash = Some(hash.to_hex());
        if self.config.record_messages {
            record.message = Some(RecordMessage::from(message));
        }
        Ok(record)
    }

    /// Verify a signature over a message derived from a previous link.
    fn derived_leg(
        &self,
        link: &ChainLink,
        derived: DerivedMessage,
        binding: TimestampBinding,
        timestamp: Option<&BoundTimestamp>,
    ) -> SignatureRecord {
        let mut record = SignatureRecord::new(link.signature.clone(), link.pubkey.clone());
        record.timestamp = timestamp.map(BoundTimestamp::value);

        self.check(&mut record, &derived.hash, binding, timestamp);
        record.hash = Some(derived.hash.to_hex());
        if self.config.record_messages {
            record.message = Some(RecordMessage::from(derived.preimage));
        }
        record
    }

    fn check(
        &self,
        record: &mut SignatureRecord,
        hash: &Sha256Hash,
        binding: TimestampBinding,
        timestamp: Option<&BoundTimestamp>,
    ) {
        let subject = binding.subject(hash, timestamp);
        let verified = self
            .message_verifier
            .verify(&record.signature, &subject, &record.pubkey);
        record.confirm(verified);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Argument decoding
    // ─────────────────────────────────────────────────────────────────────────

    fn signature(&self, args: &[Argument], position: usize, name: &'static str) -> Result<Bytes> {
        Ok(normalize_signature(required(args, position, name)?, name)?)
    }

    fn pubkey(&self, args: &[Argument], position: usize, name: &'static str) -> Result<Bytes> {
        Ok(normalize_pubkey(
            required(args, position, name)?,
            name,
            self.address_resolver.as_deref(),
        )?)
    }

    fn index(&self, args: &[Argument], position: usize) -> Result<TapeIndex> {
        let index = normalize_index(required(args, position, "index")?, "index")?;
        if index.value() > self.config.max_index {
            return Err(CodecError::InvalidIndex {
                argument: "index",
                reason: format!(
                    "index {} exceeds the configured maximum {}",
                    index.value(),
                    self.config.max_index
                ),
            }
            .into());
        }
        Ok(index)
    }
}

fn timestamp(
    args: &[Argument],
    position: usize,
    binding: TimestampBinding,
) -> Result<Option<BoundTimestamp>> {
    Ok(optional(args, position)
        .map(|arg| binding.decode(arg, "timestamp"))
        .transpose()?)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use tapesig_core::{NoTape, Tape, TapeCell};

    use super::*;
    use crate::operation::Family;

    /// Accepts a signature iff it equals `sha256(pubkey ++ message)`.
    struct HashVerifier;

    impl MessageSchemeVerifier for HashVerifier {
        fn verify(&self, signature: &[u8], message: &[u8], pubkey: &[u8]) -> bool {
            signature == sign(pubkey, message).as_slice()
        }
    }

    impl EcdsaDerVerifier for HashVerifier {
        fn verify(&self, signature: &[u8], digest: &[u8], pubkey: &[u8], hash: bool) -> bool {
            let subject = if hash {
                Sha256Hash::hash(digest).as_bytes().to_vec()
            } else {
                digest.to_vec()
            };
            signature == sign(pubkey, &subject).as_slice()
        }
    }

    fn sign(pubkey: &[u8], message: &[u8]) -> Vec<u8> {
        let mut buf = pubkey.to_vec();
        buf.extend_from_slice(message);
        Sha256Hash::hash(&buf).as_bytes().to_vec()
    }

    struct Tapes(BTreeMap<u64, Tape>);

    impl TapeReader for Tapes {
        fn lookup(&self, index: u64) -> Option<Tape> {
            self.0.get(&index).cloned()
        }
    }

    const PUBKEY: [u8; 33] = [0x02; 33];

    fn tapes() -> Tapes {
        let tape = Tape::new(vec![
            TapeCell::opcode(0x00),
            TapeCell::opcode(0x6a),
            TapeCell::data(&b"foo"[..]),
            TapeCell::data(&b"bar"[..]),
        ]);
        Tapes(BTreeMap::from([(1, tape)]))
    }

    fn engine() -> Engine<HashVerifier, HashVerifier> {
        Engine::new(HashVerifier, HashVerifier, EngineConfig::default())
    }

    fn tape_signature(policy: MessagePolicy) -> Vec<u8> {
        let hash = policy.hash(&tapes().0[&1]).unwrap();
        sign(&PUBKEY, &TimestampBinding::DecimalText.subject(&hash, None))
    }

    const SIGNATURES: Operation = Operation::TapeSignature {
        policy: MessagePolicy::Pushdata,
        binding: TimestampBinding::DecimalText,
    };

    #[test]
    fn test_tape_signature_verifies() {
        let args = [
            Argument::from(tape_signature(MessagePolicy::Pushdata)),
            Argument::from(&PUBKEY),
            Argument::from("1"),
        ];
        let acc = engine()
            .apply(SIGNATURES, Accumulator::new(), &args, &tapes())
            .unwrap();

        let record = &acc.signatures()[0];
        assert!(record.verified());
        assert_eq!(
            record.hash.as_deref(),
            Some("677ae98e74ebe6d68f93440bf2ebebdf35d7645a28c44220c88cab430b3b5734")
        );
        assert!(record.timestamp.is_none());
    }

    #[test]
    fn test_policy_is_not_inferred() {
        // A pushdata-policy signature does not verify under concatenation.
        let args = [
            Argument::from(tape_signature(MessagePolicy::Pushdata)),
            Argument::from(&PUBKEY),
            Argument::from("1"),
        ];
        let operation = Operation::TapeSignature {
            policy: MessagePolicy::Concatenation,
            binding: TimestampBinding::DecimalText,
        };
        let acc = engine()
            .apply(operation, Accumulator::new(), &args, &tapes())
            .unwrap();
        assert!(!acc.signatures()[0].verified());
    }

    #[test]
    fn test_unresolved_tape_has_no_hash() {
        let args = [
            Argument::from(vec![0x01; 32]),
            Argument::from(&PUBKEY),
            Argument::from("7"),
            Argument::from("1700000000"),
        ];
        let acc = engine()
            .apply(SIGNATURES, Accumulator::new(), &args, &NoTape)
            .unwrap();

        let record = &acc.signatures()[0];
        assert!(!record.verified());
        assert!(record.hash.is_none());
        assert!(record.message.is_none());
        assert_eq!(record.timestamp, Some(1_700_000_000));
    }

    #[test]
    fn test_timestamp_binds_to_hash() {
        let hash = MessagePolicy::Pushdata.hash(&tapes().0[&1]).unwrap();
        let ts = TimestampBinding::DecimalText
            .decode(&Argument::from("42"), "timestamp")
            .unwrap();
        let signature = sign(&PUBKEY, &TimestampBinding::DecimalText.subject(&hash, Some(&ts)));

        let with = [
            Argument::from(signature.clone()),
            Argument::from(&PUBKEY),
            Argument::from("1"),
            Argument::from("42"),
        ];
        let without = &with[..3];

        let acc = engine()
            .apply(SIGNATURES, Accumulator::new(), &with, &tapes())
            .unwrap();
        let acc = engine().apply(SIGNATURES, acc, without, &tapes()).unwrap();

        assert!(acc.signatures()[0].verified());
        assert_eq!(acc.signatures()[0].timestamp, Some(42));
        assert!(!acc.signatures()[1].verified());
    }

    #[test]
    fn test_missing_argument_is_named() {
        let args = [Argument::from(vec![0x01; 32]), Argument::from(&PUBKEY)];
        let err = engine()
            .apply(SIGNATURES, Accumulator::new(), &args, &tapes())
            .unwrap_err();
        assert_eq!(err.argument(), Some("index"));
    }

    #[test]
    fn test_index_above_maximum_is_rejected() {
        let config = EngineConfig {
            max_index: 10,
            ..EngineConfig::default()
        };
        let engine = Engine::new(HashVerifier, HashVerifier, config);
        let args = [
            Argument::from(vec![0x01; 32]),
            Argument::from(&PUBKEY),
            Argument::from("11"),
        ];
        let err = engine
            .apply(SIGNATURES, Accumulator::new(), &args, &tapes())
            .unwrap_err();
        assert!(matches!(
            err,
            EngineError::Codec(CodecError::InvalidIndex { argument: "index", .. })
        ));
    }

    #[test]
    fn test_record_messages_off() {
        let engine = Engine::new(
            HashVerifier,
            HashVerifier,
            EngineConfig {
                record_messages: false,
                ..EngineConfig::default()
            },
        );
        let args = [
            Argument::from(tape_signature(MessagePolicy::Pushdata)),
            Argument::from(&PUBKEY),
            Argument::from("1"),
        ];
        let acc = engine
            .apply(SIGNATURES, Accumulator::new(), &args, &tapes())
            .unwrap();
        assert!(acc.signatures()[0].verified());
        assert!(acc.signatures()[0].message.is_none());
    }

    #[test]
    fn test_prefixed_message() {
        let signature = sign(&PUBKEY, b"app.hello");
        let args = [
            Argument::from("app"),
            Argument::from("hello"),
            Argument::from(signature),
            Argument::from(&PUBKEY),
        ];
        let acc = engine()
            .apply(Operation::PrefixedMessage, Accumulator::new(), &args, &NoTape)
            .unwrap();

        let record = &acc.signatures()[0];
        assert!(record.verified());
        assert_eq!(record.message, Some(RecordMessage::Text("app.hello".into())));
        assert_eq!(
            record.hash.as_deref(),
            Some(Sha256Hash::hash(b"app.hello").to_hex().as_str())
        );
    }

    #[test]
    fn test_der_signature_uses_configured_hashing() {
        let digest = Sha256Hash::hash(b"Hello world");
        let signature = sign(&PUBKEY, digest.as_bytes());
        let args = [
            Argument::from(signature),
            Argument::from("Hello world"),
            Argument::from(&PUBKEY),
        ];
        let acc = engine()
            .apply(Operation::DerSignature, Accumulator::new(), &args, &NoTape)
            .unwrap();
        assert!(acc.signatures()[0].verified());
        assert_eq!(
            acc.signatures()[0].hash.as_deref(),
            Some("64ec88ca00b268e5ba1a35678a1b5316d212f4f366b2477232534a8aeca37f3c")
        );
    }

    #[test]
    fn test_chained_corrupted_child() {
        let parent_sig = tape_signature(MessagePolicy::Pushdata);
        let index = TapeIndex::new(1, &b"1"[..]);
        let derived = ChildDerivation::Pushdata
            .digest(&index, &parent_sig, &PUBKEY)
            .unwrap();
        let mut child_sig = sign(&PUBKEY, &TimestampBinding::DecimalText.subject(&derived, None));

        let operation = Operation::ChainedSignature {
            derivation: ChildDerivation::Pushdata,
            binding: TimestampBinding::DecimalText,
        };
        let args = |child: Vec<u8>| {
            [
                Argument::from("1"),
                Argument::from(parent_sig.clone()),
                Argument::from(&PUBKEY),
                Argument::from(child),
                Argument::from(&PUBKEY),
            ]
        };

        let acc = engine()
            .apply(operation, Accumulator::new(), &args(child_sig.clone()), &tapes())
            .unwrap();
        let chain = acc.chain().unwrap();
        assert!(chain.parent.verified());
        assert!(chain.child.verified());
        assert_eq!(chain.child.hash, Some(derived.to_hex()));

        child_sig[0] ^= 0xff;
        let acc = engine()
            .apply(operation, Accumulator::new(), &args(child_sig), &tapes())
            .unwrap();
        let chain = acc.chain().unwrap();
        assert!(chain.parent.verified());
        assert!(!chain.child.verified());
    }

    #[test]
    fn test_descriptor() {
        let digest = [0xab; 32];
        let raw = [Argument::from("text/plain"), Argument::from(&digest)];
        let text = [
            Argument::from("text/plain"),
            Argument::from(hex::encode(digest)),
        ];

        let a = engine()
            .apply(Operation::Descriptor, Accumulator::new(), &raw, &NoTape)
            .unwrap();
        let b = engine()
            .apply(Operation::Descriptor, Accumulator::new(), &text, &NoTape)
            .unwrap();
        assert_eq!(a, b);
        assert_eq!(a.descriptor().unwrap().hash, hex::encode(digest));
    }

    #[test]
    fn test_signed_payload_data_requires_verification() {
        let payload = Operation::SignedPayload {
            policy: MessagePolicy::Pushdata,
            binding: TimestampBinding::DecimalText,
        };
        let good = [
            Argument::from(r#"{"name":"tapesig"}"#),
            Argument::from(tape_signature(MessagePolicy::Pushdata)),
            Argument::from(&PUBKEY),
            Argument::from("1"),
        ];
        let acc = engine()
            .apply(payload, Accumulator::new(), &good, &tapes())
            .unwrap();
        assert_eq!(acc.data(), Some(&serde_json::json!({"name": "tapesig"})));

        let mut bad = good.clone();
        bad[1] = Argument::from(vec![0x00; 32]);
        let acc = engine()
            .apply(payload, Accumulator::new(), &bad, &tapes())
            .unwrap();
        assert!(acc.data().is_none());
        assert_eq!(acc.family(), Some(Family::Payload));
    }

    #[test]
    fn test_invalid_payload_is_fatal() {
        let payload = Operation::SignedPayload {
            policy: MessagePolicy::Pushdata,
            binding: TimestampBinding::DecimalText,
        };
        let args = [
            Argument::from("{not json"),
            Argument::from(vec![0x00; 32]),
            Argument::from(&PUBKEY),
            Argument::from("1"),
        ];
        let err = engine()
            .apply(payload, Accumulator::new(), &args, &tapes())
            .unwrap_err();
        assert_eq!(err.argument(), Some("payload"));
    }

    #[test]
    fn test_family_mismatch_across_operations() {
        let descriptor = [Argument::from("text/plain"), Argument::from(&[0u8; 32])];
        let acc = engine()
            .apply(Operation::Descriptor, Accumulator::new(), &descriptor, &NoTape)
            .unwrap();

        let args = [
            Argument::from(vec![0x01; 32]),
            Argument::from(&PUBKEY),
            Argument::from("1"),
        ];
        let err = engine().apply(SIGNATURES, acc, &args, &tapes()).unwrap_err();
        assert!(matches!(err, EngineError::FamilyMismatch { .. }));
    }

    #[test]
    fn test_apply_all_folds_in_order() {
        let first = [
            Argument::from(tape_signature(MessagePolicy::Pushdata)),
            Argument::from(&PUBKEY),
            Argument::from("1"),
        ];
        let second = [
            Argument::from(vec![0x00; 32]),
            Argument::from(&PUBKEY),
            Argument::from("1"),
        ];
        let acc = engine()
            .apply_all([(SIGNATURES, &first[..]), (SIGNATURES, &second[..])], &tapes())
            .unwrap();
        let verified: Vec<bool> = acc.signatures().iter().map(|r| r.verified()).collect();
        assert_eq!(verified, vec![true, false]);
    }
}
