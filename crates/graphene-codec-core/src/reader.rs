//! Cursor over binary input.

use bytes::Buf;

use crate::config::CodecConfig;
use crate::error::{CodecError, Result};
use crate::varint;

/// A binary source positioned at the start of the next value.
///
/// Binary payloads carry no framing, so each decoder consumes exactly the
/// bytes its own shape requires and leaves the cursor on whatever follows.
#[derive(Debug)]
pub struct BinaryReader<'a> {
    buf: &'a [u8],
    config: &'a CodecConfig,
}

impl<'a> BinaryReader<'a> {
    /// Create a reader with the given configuration.
    pub fn new(buf: &'a [u8], config: &'a CodecConfig) -> Self {
        Self { buf, config }
    }

    pub fn config(&self) -> &CodecConfig {
        self.config
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.buf.remaining()
    }

    pub fn is_empty(&self) -> bool {
        !self.buf.has_remaining()
    }

    /// The unconsumed input.
    pub fn rest(&self) -> &'a [u8] {
        self.buf
    }

    fn ensure(&self, needed: usize) -> Result<()> {
        if self.buf.remaining() < needed {
            return Err(CodecError::UnexpectedEof {
                needed,
                remaining: self.buf.remaining(),
            });
        }
        Ok(())
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        self.ensure(1)?;
        Ok(self.buf.get_u8())
    }

    pub fn read_u16_le(&mut self) -> Result<u16> {
        self.ensure(2)?;
        Ok(self.buf.get_u16_le())
    }

    pub fn read_u32_le(&mut self) -> Result<u32> {
        self.ensure(4)?;
        Ok(self.buf.get_u32_le())
    }

    /// Read a varint as an unsigned 64-bit pattern.
    pub fn read_varint(&mut self) -> Result<u64> {
        varint::read(&mut self.buf)
    }

    /// Read a varint length prefix, bounded by `config.max_length`.
    pub fn read_length(&mut self) -> Result<usize> {
        let len = self.read_varint()?;
        let max = self.config.max_length;
        if len > max as u64 {
            return Err(CodecError::LengthLimitExceeded { len, max });
        }
        Ok(len as usize)
    }

    /// Take the next `len` bytes.
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        self.ensure(len)?;
        let (head, tail) = self.buf.split_at(len);
        self.buf = tail;
        Ok(head)
    }

    /// Finish a top-level decode, rejecting leftovers unless configured not to.
    pub fn finish(self) -> Result<()> {
        if !self.config.allow_trailing_bytes && !self.is_empty() {
            return Err(CodecError::TrailingBytes(self.remaining()));
        }
        Ok(())
    }
}
