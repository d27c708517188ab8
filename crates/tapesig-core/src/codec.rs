//! Input normalization.
//!
//! Hosts pass signatures, keys, and indexes either as raw bytes or as text in
//! one of several encodings. Detection is heuristic and runs in a fixed order:
//! length first, then character set. The order is part of the wire contract;
//! verification outcomes must match legacy records bit for bit.

use base64::Engine as _;
use bytes::Bytes;

use crate::capability::AddressResolver;
use crate::error::{CodecError, Result};
use crate::types::Argument;

/// Length of a 65-byte compact signature in padded base64.
pub const BASE64_SIGNATURE_LEN: usize = 88;

/// Length of a 33-byte compressed public key in hex.
pub const HEX_PUBKEY_LEN: usize = 66;

/// Length of a 32-byte digest in hex.
pub const HEX_DIGEST_LEN: usize = 64;

/// Address-format strings fall in this length range.
const ADDRESS_LEN: std::ops::RangeInclusive<usize> = 26..=35;

const BASE58_ALPHABET: &[u8] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// A positional value after encoding detection, before decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodedInput {
    RawBinary(Bytes),
    Base64Text(String),
    HexText(String),
    AddressText(String),
}

impl EncodedInput {
    /// Classify a signature argument.
    pub fn detect_signature(arg: &Argument) -> Self {
        match arg.as_text() {
            Some(text) if text.len() == BASE64_SIGNATURE_LEN && text.bytes().all(is_base64_char) => {
                Self::Base64Text(text.to_owned())
            }
            _ => Self::RawBinary(arg.to_bytes()),
        }
    }

    /// Classify a public key argument.
    pub fn detect_pubkey(arg: &Argument) -> Self {
        match arg.as_text() {
            Some(text) if text.len() == HEX_PUBKEY_LEN && text.bytes().all(|b| b.is_ascii_hexdigit()) => {
                Self::HexText(text.to_owned())
            }
            Some(text) if is_address(text) => Self::AddressText(text.to_owned()),
            _ => Self::RawBinary(arg.to_bytes()),
        }
    }

    /// Decode to canonical bytes.
    ///
    /// Address text goes through `resolver` when one is present and is
    /// otherwise passed through as its raw bytes.
    pub fn decode(
        self,
        argument: &'static str,
        resolver: Option<&dyn AddressResolver>,
    ) -> Result<Bytes> {
        match self {
            Self::RawBinary(bytes) => Ok(bytes),
            Self::Base64Text(text) => base64::engine::general_purpose::STANDARD
                .decode(text.as_bytes())
                .map(Bytes::from)
                .map_err(|e| CodecError::Decode {
                    argument,
                    reason: e.to_string(),
                }),
            Self::HexText(text) => hex::decode(&text).map(Bytes::from).map_err(|e| {
                CodecError::Decode {
                    argument,
                    reason: e.to_string(),
                }
            }),
            Self::AddressText(text) => match resolver {
                Some(resolver) => resolver.resolve(&text).ok_or_else(|| CodecError::Decode {
                    argument,
                    reason: format!("address {text} could not be resolved"),
                }),
                None => Ok(Bytes::from(text)),
            },
        }
    }
}

/// A tape index together with the argument bytes it was parsed from.
///
/// Some child derivations commit to the index exactly as the host passed it,
/// so the raw form is kept alongside the parsed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TapeIndex {
    value: u64,
    raw: Bytes,
}

impl TapeIndex {
    pub fn new(value: u64, raw: impl Into<Bytes>) -> Self {
        Self {
            value,
            raw: raw.into(),
        }
    }

    /// The parsed index.
    pub fn value(&self) -> u64 {
        self.value
    }

    /// The argument bytes, unparsed.
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }
}

/// Fetch a required, non-empty argument.
pub fn required<'a>(args: &'a [Argument], position: usize, argument: &'static str) -> Result<&'a Argument> {
    let arg = args
        .get(position)
        .ok_or(CodecError::MissingArgument { argument })?;
    if arg.is_empty() {
        return Err(CodecError::EmptyArgument { argument });
    }
    Ok(arg)
}

/// Fetch an optional argument. Missing and empty are both "not supplied".
pub fn optional(args: &[Argument], position: usize) -> Option<&Argument> {
    args.get(position).filter(|arg| !arg.is_empty())
}

/// Normalize a signature: 88-character base64 text is decoded, anything else
/// is taken as already binary.
pub fn normalize_signature(arg: &Argument, argument: &'static str) -> Result<Bytes> {
    EncodedInput::detect_signature(arg).decode(argument, None)
}

/// Normalize a public key: 66-character hex is decoded, address text is
/// resolved, anything else is taken as already binary.
pub fn normalize_pubkey(
    arg: &Argument,
    argument: &'static str,
    resolver: Option<&dyn AddressResolver>,
) -> Result<Bytes> {
    EncodedInput::detect_pubkey(arg).decode(argument, resolver)
}

/// Normalize a tape index.
///
/// Decimal text (`^[0-9]+$`) is parsed as an unsigned integer. Anything else
/// must be the legacy single-byte binary form. Note that a single byte which
/// happens to be an ASCII digit is read as text.
pub fn normalize_index(arg: &Argument, argument: &'static str) -> Result<TapeIndex> {
    if let Some(text) = arg.as_text().filter(|t| is_decimal(t)) {
        let value = text.parse::<u64>().map_err(|e| CodecError::InvalidIndex {
            argument,
            reason: e.to_string(),
        })?;
        return Ok(TapeIndex::new(value, arg.to_bytes()));
    }

    match arg.as_bytes() {
        [byte] => Ok(TapeIndex::new(u64::from(*byte), arg.to_bytes())),
        _ => Err(CodecError::InvalidIndex {
            argument,
            reason: format!(
                "expected decimal text or a single byte, got {} bytes",
                arg.len()
            ),
        }),
    }
}

/// Normalize a 32-byte digest given as raw bytes or as 64 hex characters.
pub fn normalize_digest(arg: &Argument, argument: &'static str) -> Result<[u8; 32]> {
    let bytes = match arg.as_text() {
        Some(text) if text.len() == HEX_DIGEST_LEN && text.bytes().all(|b| b.is_ascii_hexdigit()) => {
            EncodedInput::HexText(text.to_owned()).decode(argument, None)?
        }
        _ => arg.to_bytes(),
    };

    bytes[..].try_into().map_err(|_| CodecError::Decode {
        argument,
        reason: format!("expected 32 bytes, got {}", bytes.len()),
    })
}

/// Whether `text` looks like an address: Base58 alphabet, 26 to 35 characters.
pub fn is_address(text: &str) -> bool {
    ADDRESS_LEN.contains(&text.len()) && text.bytes().all(|b| BASE58_ALPHABET.contains(&b))
}

fn is_base64_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'+' | b'/' | b'=')
}

pub(crate) fn is_decimal(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}
