//! Variable-length unsigned integer encoding.
//!
//! The wire rule: split the value into 7-bit groups, least-significant group
//! first; set the high bit on every byte except the last. A `u64` therefore
//! occupies at most 10 bytes. The same encoding serves as the length prefix
//! of variable-length byte blocks and as the variant discriminant at the
//! front of a tagged wire value.

use crate::error::CodecError;

/// Maximum encoded length of a `u64`.
pub const MAX_VARINT_LEN: usize = 10;

/// Append the varint encoding of `value` to `buf`.
pub fn encode_into(buf: &mut Vec<u8>, mut value: u64) {
    loop {
        let group = (value & 0x7f) as u8;
        value >>= 7;
        if value == 0 {
            buf.push(group);
            return;
        }
        buf.push(group | 0x80);
    }
}

/// Encode `value` as a fresh byte vector.
pub fn encode(value: u64) -> Vec<u8> {
    let mut buf = Vec::with_capacity(MAX_VARINT_LEN);
    encode_into(&mut buf, value);
    buf
}

/// Decode a varint from the front of `buf`, returning the value and the
/// number of bytes consumed.
pub fn decode(buf: &[u8]) -> Result<(u64, usize), CodecError> {
    let mut value = 0u64;
    for (i, &byte) in buf.iter().enumerate() {
        if i >= MAX_VARINT_LEN {
            return Err(CodecError::InvalidField(format!(
                "varint longer than {} bytes",
                MAX_VARINT_LEN
            )));
        }
        value |= u64::from(byte & 0x7f) << (7 * i as u32);
        if byte & 0x80 == 0 {
            return Ok((value, i + 1));
        }
    }
    Err(CodecError::TruncatedInput {
        needed: buf.len() + 1,
        remaining: buf.len(),
    })
}

/// Count the leading bytes of `buf` that form a varint prefix: everything up
/// to and including the first byte with the high bit clear.
///
/// When no terminating byte exists the whole buffer length is returned; the
/// caller must treat that degenerate case as a framing error rather than
/// silently accepting it.
pub fn scan_length(buf: &[u8]) -> usize {
    for (i, &byte) in buf.iter().enumerate() {
        if byte & 0x80 == 0 {
            return i + 1;
        }
    }
    buf.len()
}
