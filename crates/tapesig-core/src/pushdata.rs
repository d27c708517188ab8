//! Canonical pushdata length prefixes.
//!
//! A length `n` is encoded with the smallest form that can hold it:
//!
//! | range               | encoding                      |
//! |---------------------|-------------------------------|
//! | `n < 76`            | `n`                           |
//! | `76 <= n < 256`     | `0x4c n`                      |
//! | `256 <= n < 65536`  | `0x4d` + 2 bytes little-endian |
//! | `65536 <= n < 2^32` | `0x4e` + 4 bytes little-endian |
//!
//! Anything larger cannot be pushed and is a precondition failure.

use crate::error::{CodecError, Result};

pub const OP_PUSHDATA1: u8 = 0x4c;
pub const OP_PUSHDATA2: u8 = 0x4d;
pub const OP_PUSHDATA4: u8 = 0x4e;

/// Encode the pushdata length prefix for `n` bytes.
pub fn pushdata_len(n: usize) -> Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(5);
    write_len(&mut buf, n)?;
    Ok(buf)
}

/// Append the pushdata length prefix for `n` bytes to `buf`.
pub fn write_len(buf: &mut Vec<u8>, n: usize) -> Result<()> {
    if n < OP_PUSHDATA1 as usize {
        buf.push(n as u8);
    } else if n <= 0xff {
        buf.push(OP_PUSHDATA1);
        buf.push(n as u8);
    } else if n <= 0xffff {
        buf.push(OP_PUSHDATA2);
        buf.extend_from_slice(&(n as u16).to_le_bytes());
    } else if n <= 0xffff_ffff {
        buf.push(OP_PUSHDATA4);
        buf.extend_from_slice(&(n as u32).to_le_bytes());
    } else {
        return Err(CodecError::PushdataTooLarge(n));
    }
    Ok(())
}

/// Append `data` preceded by its length prefix.
pub fn write_push(buf: &mut Vec<u8>, data: &[u8]) -> Result<()> {
    write_len(buf, data.len())?;
    buf.extend_from_slice(data);
    Ok(())
}

/// Decode a length prefix at the start of `bytes`.
///
/// Returns `(length, prefix_size)`. Non-minimal prefixes are rejected so that
/// decoding is the exact inverse of [`pushdata_len`].
pub fn read_len(bytes: &[u8]) -> Result<(usize, usize)> {
    let (len, min, consumed) = decode_len(bytes)?;
    if len < min {
        return Err(CodecError::NonMinimalPushdata(len));
    }
    Ok((len, consumed))
}

/// Decode a length prefix as it appears in a script.
///
/// Like [`read_len`], but non-minimal prefixes such as `0x4c 0x03` are
/// accepted: scripts on the ledger are not required to push minimally.
pub fn read_push_len(bytes: &[u8]) -> Result<(usize, usize)> {
    let (len, _, consumed) = decode_len(bytes)?;
    Ok((len, consumed))
}

/// `(length, smallest length that needs this prefix, prefix_size)`.
fn decode_len(bytes: &[u8]) -> Result<(usize, usize, usize)> {
    let (&first, rest) = bytes
        .split_first()
        .ok_or(CodecError::TruncatedScript { offset: 0 })?;

    match first {
        n if n < OP_PUSHDATA1 => Ok((n as usize, 0, 1)),
        OP_PUSHDATA1 => {
            let b: [u8; 1] = take(rest)?;
            Ok((b[0] as usize, 0x4c, 2))
        }
        OP_PUSHDATA2 => {
            let b: [u8; 2] = take(rest)?;
            Ok((u16::from_le_bytes(b) as usize, 0x100, 3))
        }
        OP_PUSHDATA4 => {
            let b: [u8; 4] = take(rest)?;
            Ok((u32::from_le_bytes(b) as usize, 0x1_0000, 5))
        }
        other => Err(CodecError::NotPushdata(other)),
    }
}

fn take<const N: usize>(bytes: &[u8]) -> Result<[u8; N]> {
    bytes
        .get(..N)
        .and_then(|b| b.try_into().ok())
        .ok_or(CodecError::TruncatedScript { offset: 0 })
}
