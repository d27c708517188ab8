//! Tape and argument types.
//!
//! A tape is the ordered cell sequence of one output of a ledger record. Each
//! cell carries either data bytes or a bare opcode, never both.

use std::fmt;
use std::ops::Range;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::error::{CodecError, Result};
use crate::pushdata;

/// The highest opcode that is a direct push of that many bytes.
const MAX_DIRECT_PUSH: u8 = 0x4b;

/// One element of a tape.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TapeCell {
    /// Raw pushed data.
    Data(Bytes),
    /// A bare opcode marker.
    Opcode(u8),
}

impl TapeCell {
    /// Create a data cell.
    pub fn data(bytes: impl Into<Bytes>) -> Self {
        Self::Data(bytes.into())
    }

    /// Create an opcode cell.
    pub const fn opcode(op: u8) -> Self {
        Self::Opcode(op)
    }

    /// The data bytes, if this is a data cell.
    pub fn as_data(&self) -> Option<&[u8]> {
        match self {
            Self::Data(b) => Some(b),
            Self::Opcode(_) => None,
        }
    }

    /// The opcode, if this is an opcode cell.
    pub fn as_opcode(&self) -> Option<u8> {
        match self {
            Self::Opcode(op) => Some(*op),
            Self::Data(_) => None,
        }
    }
}

impl fmt::Debug for TapeCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Data(b) => write!(f, "Data({})", hex::encode(b)),
            Self::Opcode(op) => write!(f, "Opcode(0x{op:02x})"),
        }
    }
}

/// The ordered cells of one output. Cell `i` sits at zero-based index `i`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tape {
    cells: Vec<TapeCell>,
}

impl Tape {
    /// Create a tape from cells in index order.
    pub fn new(cells: Vec<TapeCell>) -> Self {
        Self { cells }
    }

    /// All cells in index order.
    pub fn cells(&self) -> &[TapeCell] {
        &self.cells
    }

    /// Get the cell at `index`.
    pub fn get(&self, index: usize) -> Option<&TapeCell> {
        self.cells.get(index)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate the cells in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, TapeCell> {
        self.cells.iter()
    }

    /// A new tape holding the cells in `range`, clamped to the tape's length.
    pub fn slice(&self, range: Range<usize>) -> Self {
        let end = range.end.min(self.cells.len());
        let start = range.start.min(end);
        Self::new(self.cells[start..end].to_vec())
    }

    /// Parse a raw output script into cells.
    ///
    /// Direct pushes (`0x01..=0x4b`) and `OP_PUSHDATA1/2/4` become data cells;
    /// every other byte, including `0x00`, becomes an opcode cell. Pushes need
    /// not be minimal.
    pub fn from_script(script: &[u8]) -> Result<Self> {
        let mut cells = Vec::new();
        let mut offset = 0;

        while offset < script.len() {
            let op = script[offset];
            let is_push = (0x01..=MAX_DIRECT_PUSH).contains(&op)
                || matches!(
                    op,
                    pushdata::OP_PUSHDATA1 | pushdata::OP_PUSHDATA2 | pushdata::OP_PUSHDATA4
                );

            if !is_push {
                cells.push(TapeCell::Opcode(op));
                offset += 1;
                continue;
            }

            let (len, consumed) = pushdata::read_push_len(&script[offset..])
                .map_err(|_| CodecError::TruncatedScript { offset })?;
            let start = offset + consumed;
            let end = start
                .checked_add(len)
                .filter(|end| *end <= script.len())
                .ok_or(CodecError::TruncatedScript { offset })?;

            cells.push(TapeCell::Data(Bytes::copy_from_slice(&script[start..end])));
            offset = end;
        }

        Ok(Self { cells })
    }
}

impl FromIterator<TapeCell> for Tape {
    fn from_iter<I: IntoIterator<Item = TapeCell>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Tape {
    type Item = &'a TapeCell;
    type IntoIter = std::slice::Iter<'a, TapeCell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// A positional operation argument.
///
/// Hosts hand over raw bytes; whether those bytes are "textual" is decided
/// per argument by the normalizers in [`crate::codec`].
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Argument(Bytes);

impl Argument {
    /// Create from raw bytes.
    pub fn from_bytes(bytes: impl Into<Bytes>) -> Self {
        Self(bytes.into())
    }

    /// Create from text.
    pub fn from_text(text: &str) -> Self {
        Self(Bytes::copy_from_slice(text.as_bytes()))
    }

    /// Get the raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Get a cheap clone of the underlying buffer.
    pub fn to_bytes(&self) -> Bytes {
        self.0.clone()
    }

    /// The argument as text, if it is valid UTF-8.
    pub fn as_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.0).ok()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_text() {
            Some(text) => write!(f, "Argument({text:?})"),
            None => write!(f, "Argument(0x{})", hex::encode(&self.0)),
        }
    }
}

impl AsRef<[u8]> for Argument {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<&str> for Argument {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

impl From<String> for Argument {
    fn from(text: String) -> Self {
        Self(Bytes::from(text))
    }
}

impl From<Vec<u8>> for Argument {
    fn from(bytes: Vec<u8>) -> Self {
        Self(Bytes::from(bytes))
    }
}

impl From<&[u8]> for Argument {
    fn from(bytes: &[u8]) -> Self {
        Self(Bytes::copy_from_slice(bytes))
    }
}

impl<const N: usize> From<&[u8; N]> for Argument {
    fn from(bytes: &[u8; N]) -> Self {
        Self(Bytes::copy_from_slice(bytes))
    }
}

impl From<Bytes> for Argument {
    fn from(bytes: Bytes) -> Self {
        Self(bytes)
    }
}
