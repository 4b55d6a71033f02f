use std::borrow::Cow;

use crate::{decode::Decode, pad};

use super::Error;

#[derive(Debug)]
pub struct Decoder<'b> {
    pub buffer: &'b [u8],
    pub pos: usize,
}

impl<'b> Decoder<'b> {
    pub fn new(bytes: &'b [u8]) -> Decoder<'b> {
        Decoder {
            buffer: bytes,
            pos: 0,
        }
    }

    /// Decode any type that implements [`Decode`].
    pub fn decode<T: Decode<'b>>(&mut self) -> Result<T, Error> {
        T::decode(self)
    }

    /// Number of bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.pos
    }

    /// Whether the whole buffer has been consumed.
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Decode a slice of exactly `len` bytes, without a length prefix or
    /// padding. This is suitable for retrieving data that is already in wire
    /// format, where the surrounding schema knows the length out of band.
    pub fn raw(&mut self, len: usize) -> Result<&'b [u8], Error> {
        self.ensure_bytes(len)?;

        let v = &self.buffer[self.pos..self.pos + len];

        self.pos += len;

        Ok(v)
    }

    /// Decode a length-prefixed byte field.
    /// First we decode a 4 byte big endian signed length.
    /// A length of zero consumes the prefix only and yields the empty slice.
    /// A negative length is a hard format violation.
    /// Otherwise we return the payload bytes following the prefix and skip
    /// the 0 to 3 filler bytes that align the field to a multiple of 4.
    /// The returned slice borrows from the decoder's buffer.
    pub fn bytes(&mut self) -> Result<&'b [u8], Error> {
        self.bytes_max(0)
    }

    /// Decode a length-prefixed byte field of at most `max` bytes.
    /// Identical to [`Self::bytes`], except that a decoded length greater
    /// than `max` is rejected before the payload is looked at. A `max` of
    /// zero means unbounded.
    pub fn bytes_max(&mut self, max: usize) -> Result<&'b [u8], Error> {
        self.ensure_bytes(4)?;

        let p = &self.buffer[self.pos..self.pos + 4];
        let len = i32::from_be_bytes([p[0], p[1], p[2], p[3]]);

        if len == 0 {
            self.pos += 4;

            return Ok(&[]);
        }

        if len < 0 || max > 0 && len as usize > max {
            return Err(Error::ElementSizeExceeded {
                field: "bytes field",
                size: len as i64,
                limit: max as i64,
            });
        }

        let len = len as usize;

        self.ensure_bytes(4 + len)?;

        let v = &self.buffer[self.pos + 4..self.pos + 4 + len];

        // The trailing filler of the last field may be cut short by the end
        // of the buffer; never advance past the end.
        self.pos = usize::min(self.pos + 4 + len + pad::padding(len), self.buffer.len());

        Ok(v)
    }

    /// Decode a length-prefixed string.
    /// Converts the byte field to text. Invalid UTF-8 sequences are replaced
    /// with U+FFFD rather than rejected. An empty field yields an empty
    /// string.
    pub fn string(&mut self) -> Result<Cow<'b, str>, Error> {
        self.string_max(0)
    }

    /// Decode a length-prefixed string of at most `max` bytes.
    pub fn string_max(&mut self, max: usize) -> Result<Cow<'b, str>, Error> {
        let buf = self.bytes_max(max)?;

        Ok(String::from_utf8_lossy(buf))
    }

    /// Decode a bool, encoded as an unsigned byte. Any non-zero value is
    /// true.
    pub fn bool(&mut self) -> Result<bool, Error> {
        Ok(self.u8()? != 0)
    }

    /// Decode an unsigned byte.
    /// Scalars narrower than 32 bits still occupy a full 4 byte slot on the
    /// wire; only the low order byte is significant.
    pub fn u8(&mut self) -> Result<u8, Error> {
        Ok(self.u32()? as u8)
    }

    /// Decode a 16 bit unsigned integer from a full 4 byte slot; only the
    /// two low order bytes are significant.
    pub fn u16(&mut self) -> Result<u16, Error> {
        Ok(self.u32()? as u16)
    }

    /// Decode a 32 bit unsigned integer from 4 big endian bytes.
    pub fn u32(&mut self) -> Result<u32, Error> {
        let b = self.raw(4)?;

        Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    /// Decode a 64 bit unsigned integer from 8 big endian bytes.
    pub fn u64(&mut self) -> Result<u64, Error> {
        let b = self.raw(8)?;

        Ok(u64::from_be_bytes([
            b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7],
        ]))
    }

    /// Ensures the buffer has `required` unconsumed bytes.
    /// Fails with [`Error::UnexpectedEndOfInput`] if fewer bytes remain.
    /// The cursor is not moved.
    fn ensure_bytes(&mut self, required: usize) -> Result<(), Error> {
        if required > self.buffer.len() - self.pos {
            Err(Error::UnexpectedEndOfInput)
        } else {
            Ok(())
        }
    }
}
