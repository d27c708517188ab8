//! Message reconstruction from tape cells.
//!
//! The policy is chosen by the caller per operation and is never inferred
//! from the tape. Cells are always consumed in index order.

use serde::{Deserialize, Serialize};

use crate::crypto::Sha256Hash;
use crate::error::Result;
use crate::pushdata::write_push;
use crate::types::{Tape, TapeCell};

/// How a tape is serialized into the message that was signed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessagePolicy {
    /// Data bytes of every cell, back to back. Opcode cells contribute nothing.
    Concatenation,
    /// Data cells as length-prefixed pushes, opcode cells as their single byte.
    Pushdata,
}

impl MessagePolicy {
    /// Build the message bytes for `tape`.
    pub fn build(self, tape: &Tape) -> Result<Vec<u8>> {
        match self {
            Self::Concatenation => Ok(concatenation(tape)),
            Self::Pushdata => pushdata(tape),
        }
    }

    /// SHA-256 of the built message.
    pub fn hash(self, tape: &Tape) -> Result<Sha256Hash> {
        Ok(Sha256Hash::hash(&self.build(tape)?))
    }
}

/// Concatenate the data bytes of every cell.
pub fn concatenation(tape: &Tape) -> Vec<u8> {
    let len = tape.iter().filter_map(TapeCell::as_data).map(<[u8]>::len).sum();
    let mut buf = Vec::with_capacity(len);
    for data in tape.iter().filter_map(TapeCell::as_data) {
        buf.extend_from_slice(data);
    }
    buf
}

/// Serialize the tape as a script: pushes for data cells, raw opcode bytes otherwise.
pub fn pushdata(tape: &Tape) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    for cell in tape {
        match cell {
            TapeCell::Data(data) => write_push(&mut buf, data)?,
            TapeCell::Opcode(op) => buf.push(*op),
        }
    }
    Ok(buf)
}
