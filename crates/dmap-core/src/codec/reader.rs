use super::error::DecodeError;
use super::layout;
use crate::registry::TagCode;

/// Forward-only cursor over a container payload.
pub struct DmapReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> DmapReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.pos == self.buf.len()
    }

    pub fn read_code(&mut self) -> Result<TagCode, DecodeError> {
        let bytes = self.take(layout::CODE_LEN)?;
        Ok(TagCode::new([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn read_u32_be(&mut self) -> Result<u32, DecodeError> {
        let bytes = self.take(layout::LENGTH_LEN)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Consume the `declared`-byte payload of an entry, failing fast when
    /// the length field overruns the buffer.
    pub fn read_payload(&mut self, code: TagCode, declared: u32) -> Result<&'a [u8], DecodeError> {
        let len = declared as usize;
        if self.remaining() < len {
            return Err(DecodeError::LengthOverrun {
                code,
                declared,
                remaining: self.remaining(),
            });
        }
        let start = self.pos;
        self.pos += len;
        Ok(&self.buf[start..self.pos])
    }

    /// Consume everything left in the buffer.
    pub fn rest(&mut self) -> &'a [u8] {
        let start = self.pos;
        self.pos = self.buf.len();
        &self.buf[start..]
    }

    fn take(&mut self, needed: usize) -> Result<&'a [u8], DecodeError> {
        if self.remaining() < needed {
            return Err(DecodeError::TruncatedHeader {
                offset: self.pos,
                needed,
                remaining: self.remaining(),
            });
        }
        let start = self.pos;
        self.pos += needed;
        Ok(&self.buf[start..self.pos])
    }
}
