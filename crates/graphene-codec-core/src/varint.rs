//! Variable-length integer encoding.
//!
//! Each byte carries 7 payload bits, least significant group first. The high
//! bit is a continuation flag, set on every byte except the last. Values are
//! handled as unsigned 64-bit patterns: signed inputs are reinterpreted, not
//! zig-zag encoded, so a negative `i64` always takes ten bytes.

use bytes::{Buf, BufMut};

use crate::error::{CodecError, Result};

const DATA_BITS_PER_BYTE: u32 = 7;
const DATA_BITS_MASK: u8 = 0x7F;
const CONTINUATION_BIT_MASK: u8 = 0x80;

/// Maximum encoded length of a 64-bit value.
pub const MAX_LEN: usize = 10;

/// Write `value` as a varint.
pub fn write(value: u64, buf: &mut impl BufMut) {
    let mut val = value;
    while val >= u64::from(CONTINUATION_BIT_MASK) {
        buf.put_u8((val as u8) | CONTINUATION_BIT_MASK);
        val >>= DATA_BITS_PER_BYTE;
    }
    buf.put_u8(val as u8);
}

/// Write a signed value using its two's-complement bit pattern.
pub fn write_signed(value: i64, buf: &mut impl BufMut) {
    write(value as u64, buf);
}

/// Read a varint.
///
/// Fails with [`CodecError::MalformedVarint`] if the input ends while the
/// continuation bit is still set, with [`CodecError::VarintOverflow`] if the
/// encoded value needs more than 64 bits, and with
/// [`CodecError::NonCanonicalVarint`] if a longer-than-necessary encoding
/// ends in a zero byte. Every value therefore has exactly one accepted
/// encoding, the one [`write`] produces.
pub fn read(buf: &mut impl Buf) -> Result<u64> {
    let mut result: u64 = 0;
    let mut shift: u32 = 0;

    loop {
        if !buf.has_remaining() {
            return Err(CodecError::MalformedVarint);
        }
        let byte = buf.get_u8();

        // The last possible byte may only carry the bits that still fit. Since
        // the continuation flag is the top bit this also rejects a tenth byte
        // that claims more input follows.
        let remaining_bits = u64::BITS - shift;
        if remaining_bits <= DATA_BITS_PER_BYTE {
            let relevant_bits = u8::BITS - byte.leading_zeros();
            if relevant_bits > remaining_bits {
                return Err(CodecError::VarintOverflow);
            }
        }

        if byte == 0 && shift > 0 {
            return Err(CodecError::NonCanonicalVarint);
        }

        result |= u64::from(byte & DATA_BITS_MASK) << shift;

        if byte & CONTINUATION_BIT_MASK == 0 {
            return Ok(result);
        }
        shift += DATA_BITS_PER_BYTE;
    }
}

/// Read a varint and reinterpret its bit pattern as signed.
pub fn read_signed(buf: &mut impl Buf) -> Result<i64> {
    read(buf).map(|v| v as i64)
}

/// Number of bytes `value` occupies once encoded.
pub fn size(value: u64) -> usize {
    let data_bits = u64::BITS - value.leading_zeros();
    usize::max(1, data_bits.div_ceil(DATA_BITS_PER_BYTE) as usize)
}
