//! The Bitcoin signed-message digest.
//!
//! `sha256d(varint(len(magic)) ++ magic ++ varint(len(message)) ++ message)`

use sha2::{Digest, Sha256};

const MAGIC: &[u8] = b"Bitcoin Signed Message:\n";

/// Digest signed by a compact recoverable signature over `message`.
pub fn signed_message_digest(message: &[u8]) -> [u8; 32] {
    let mut buf = Vec::with_capacity(MAGIC.len() + message.len() + 10);
    write_varint(&mut buf, MAGIC.len() as u64);
    buf.extend_from_slice(MAGIC);
    write_varint(&mut buf, message.len() as u64);
    buf.extend_from_slice(message);
    sha256d(&buf)
}

/// Two rounds of SHA-256.
pub fn sha256d(data: &[u8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&Sha256::digest(Sha256::digest(data)));
    out
}

fn write_varint(buf: &mut Vec<u8>, n: u64) {
    if n < 0xfd {
        buf.push(n as u8);
    } else if n <= 0xffff {
        buf.push(0xfd);
        buf.extend_from_slice(&(n as u16).to_le_bytes());
    } else if n <= 0xffff_ffff {
        buf.push(0xfe);
        buf.extend_from_slice(&(n as u32).to_le_bytes());
    } else {
        buf.push(0xff);
        buf.extend_from_slice(&n.to_le_bytes());
    }
}
