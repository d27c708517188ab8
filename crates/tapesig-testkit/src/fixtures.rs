//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use std::collections::BTreeMap;

use base64::Engine as _;
use bytes::Bytes;
use sha2::{Digest, Sha256};
use tapesig_core::{
    AddressResolver, Argument, ChainLink, ChildDerivation, EcdsaDerVerifier, MessagePolicy,
    MessageSchemeVerifier, Sha256Hash, Tape, TapeCell, TapeIndex, TapeReader, TimestampBinding,
};
use tapesig_secp256k1::{Address, Keypair, Network};

/// An in-memory tape reader keyed by output index.
#[derive(Debug, Clone, Default)]
pub struct MemoryTape {
    tapes: BTreeMap<u64, Tape>,
}

impl MemoryTape {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tape at `index`, replacing any previous one.
    pub fn with(mut self, index: u64, tape: Tape) -> Self {
        self.insert(index, tape);
        self
    }

    pub fn insert(&mut self, index: u64, tape: Tape) {
        self.tapes.insert(index, tape);
    }

    pub fn len(&self) -> usize {
        self.tapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tapes.is_empty()
    }
}

impl TapeReader for MemoryTape {
    fn lookup(&self, index: u64) -> Option<Tape> {
        self.tapes.get(&index).cloned()
    }
}

/// `OP_FALSE OP_RETURN "foo" "bar"`.
pub fn op_return_tape() -> Tape {
    Tape::new(vec![
        TapeCell::opcode(0x00),
        TapeCell::opcode(0x6a),
        TapeCell::data(&b"foo"[..]),
        TapeCell::data(&b"bar"[..]),
    ])
}

/// Deterministic 65-byte stand-in signature binding `pubkey` to `message`.
pub fn fake_sign(pubkey: &[u8], message: &[u8]) -> Vec<u8> {
    let forward = Sha256::new().chain_update(pubkey).chain_update(message).finalize();
    let backward = Sha256::new().chain_update(message).chain_update(pubkey).finalize();

    let mut signature = Vec::with_capacity(65);
    signature.push(0x1f);
    signature.extend_from_slice(&forward);
    signature.extend_from_slice(&backward);
    signature
}

/// Accepts exactly the signatures produced by [`fake_sign`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FakeMessageVerifier;

impl MessageSchemeVerifier for FakeMessageVerifier {
    fn verify(&self, signature: &[u8], message: &[u8], pubkey: &[u8]) -> bool {
        signature == fake_sign(pubkey, message).as_slice()
    }
}

/// Accepts [`fake_sign`] signatures over the (optionally hashed) digest.
#[derive(Debug, Clone, Copy, Default)]
pub struct FakeDerVerifier;

impl EcdsaDerVerifier for FakeDerVerifier {
    fn verify(
        &self,
        signature: &[u8],
        digest: &[u8],
        pubkey: &[u8],
        hash_before_verify: bool,
    ) -> bool {
        if hash_before_verify {
            signature == fake_sign(pubkey, &Sha256::digest(digest)).as_slice()
        } else {
            signature == fake_sign(pubkey, digest).as_slice()
        }
    }
}

/// Resolves a fixed set of addresses.
#[derive(Debug, Clone, Default)]
pub struct StaticAddressResolver {
    entries: BTreeMap<String, Bytes>,
}

impl StaticAddressResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, address: impl Into<String>, pubkey: impl Into<Bytes>) -> Self {
        self.entries.insert(address.into(), pubkey.into());
        self
    }
}

impl AddressResolver for StaticAddressResolver {
    fn resolve(&self, address: &str) -> Option<Bytes> {
        self.entries.get(address).cloned()
    }
}

/// A test fixture with a secp256k1 keypair.
pub struct TestFixture {
    pub keypair: Keypair,
}

impl TestFixture {
    /// Create a new test fixture with a random keypair.
    pub fn new() -> Self {
        Self {
            keypair: Keypair::generate(),
        }
    }

    /// Create with a deterministic keypair from seed.
    pub fn with_seed(seed: [u8; 32]) -> Self {
        Self {
            keypair: Keypair::from_seed(&seed).expect("seed is a valid secret scalar"),
        }
    }

    /// Compressed public key bytes.
    pub fn public_key(&self) -> Vec<u8> {
        self.keypair.public_key()
    }

    pub fn public_key_hex(&self) -> String {
        self.keypair.public_key_hex()
    }

    /// Mainnet P2PKH address.
    pub fn address(&self) -> Address {
        self.keypair.address(Network::Mainnet)
    }

    /// Sign `tape` the way a tape signature operation checks it.
    pub fn sign_tape(
        &self,
        tape: &Tape,
        policy: MessagePolicy,
        binding: TimestampBinding,
        timestamp: Option<&str>,
    ) -> [u8; 65] {
        let hash = policy.hash(tape).expect("tape fits pushdata limits");
        self.sign_subject(&hash, binding, timestamp)
    }

    /// Sign the message a child derives from `parent` at `index`.
    pub fn sign_child(
        &self,
        derivation: ChildDerivation,
        index: &TapeIndex,
        parent: &ChainLink,
        binding: TimestampBinding,
        timestamp: Option<&str>,
    ) -> [u8; 65] {
        let hash = derivation
            .digest(index, &parent.signature, &parent.pubkey)
            .expect("index fits the derivation");
        self.sign_subject(&hash, binding, timestamp)
    }

    /// Sign the text `prefix.data`.
    pub fn sign_prefixed(&self, prefix: &str, data: &str) -> [u8; 65] {
        self.keypair
            .sign_message(format!("{prefix}.{data}").as_bytes())
            .expect("signing succeeds")
    }

    /// DER signature over `message`, hashed once before signing.
    pub fn sign_der(&self, message: &[u8]) -> Vec<u8> {
        self.keypair.sign_der(message, true).expect("signing succeeds")
    }

    fn sign_subject(
        &self,
        hash: &Sha256Hash,
        binding: TimestampBinding,
        timestamp: Option<&str>,
    ) -> [u8; 65] {
        let timestamp = timestamp.map(|ts| {
            binding
                .decode(&Argument::from(ts), "timestamp")
                .expect("valid timestamp")
        });
        self.keypair
            .sign_message(&binding.subject(hash, timestamp.as_ref()))
            .expect("signing succeeds")
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Padded base64, the textual form hosts use for compact signatures.
pub fn to_base64(signature: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(signature)
}

/// Create multiple test fixtures for multi-party tests.
pub fn multi_party_fixtures(count: usize) -> Vec<TestFixture> {
    (0..count)
        .map(|i| {
            let mut seed = [0x11u8; 32];
            seed[0] = i as u8 + 1;
            TestFixture::with_seed(seed)
        })
        .collect()
}
