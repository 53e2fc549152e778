//! Primitive reader and writer
//!
//! `LevelReader` counts every byte it hands out so structural errors can
//! report where they happened. `LevelWriter` mirrors it for output.

use super::{Decode, Encode};
use crate::codec::{MAX_NESTING, MAX_PREALLOC};
use crate::error::{Error, Result};
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{self, Read, Write};
use uuid::Uuid;

/// Position-tracking reader for level streams
pub struct LevelReader<R: Read> {
    reader: R,
    position: u64,
    depth: usize,
}

impl<R: Read> LevelReader<R> {
    /// Create a new level reader starting at offset 0
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            position: 0,
            depth: 0,
        }
    }

    /// Number of bytes consumed so far
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Unwrap the underlying source
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Read a one-byte boolean. Any non-zero byte is `true`.
    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_u8()? != 0)
    }

    /// Read a varint that must fit in 32 bits
    pub fn read_varint_u32(&mut self) -> Result<u32> {
        // read_varint guarantees the value fits
        Ok(self.read_varint(u32::BITS)? as u32)
    }

    /// Read a varint that must fit in 64 bits
    pub fn read_varint_u64(&mut self) -> Result<u64> {
        self.read_varint(u64::BITS)
    }

    fn read_varint(&mut self, bits: u32) -> Result<u64> {
        let offset = self.position;
        let mut value = 0u64;

        for index in 0..bits.div_ceil(7) {
            let byte = self.read_u8()?;
            let group = u64::from(byte & 0x7F);
            let shift = index * 7;

            let room = bits - shift;
            if room < 7 && group >> room != 0 {
                return Err(Error::VarintOverflow { offset, bits });
            }

            value |= group << shift;

            if byte & 0x80 == 0 {
                return Ok(value);
            }
        }

        // Continuation bit still set after the widest legal encoding
        Err(Error::VarintOverflow { offset, bits })
    }

    /// Read a length or element count
    pub fn read_len(&mut self) -> Result<usize> {
        Ok(self.read_varint_u32()? as usize)
    }

    /// Read a length-prefixed raw byte block
    pub fn read_byte_block(&mut self) -> Result<Vec<u8>> {
        let len = self.read_len()?;
        self.read_bytes(len)
    }

    fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut bytes = Vec::with_capacity(len.min(MAX_PREALLOC));
        self.by_ref().take(len as u64).read_to_end(&mut bytes)?;

        if bytes.len() != len {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("expected {len} bytes, stream ended after {}", bytes.len()),
            )
            .into());
        }

        Ok(bytes)
    }

    /// Read a length-prefixed UTF-8 string
    pub fn read_string(&mut self) -> Result<String> {
        let offset = self.position;
        let bytes = self.read_byte_block()?;
        String::from_utf8(bytes).map_err(|_| Error::InvalidString { offset })
    }

    /// Run `f` one nesting level deeper.
    ///
    /// Recursive types (action lists, value operands) decode through this
    /// so hostile input cannot exhaust the stack.
    pub fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        if self.depth >= MAX_NESTING {
            return Err(Error::NestingTooDeep {
                offset: self.position,
                limit: MAX_NESTING,
            });
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Read a one-byte union discriminant together with its offset
    pub fn read_tag(&mut self) -> Result<(u8, u64)> {
        let offset = self.position;
        Ok((self.read_u8()?, offset))
    }
}

impl<R: Read> Read for LevelReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.reader.read(buf)?;
        self.position += n as u64;
        Ok(n)
    }
}

/// Writer for level streams
pub struct LevelWriter<W: Write> {
    writer: W,
    position: u64,
    depth: usize,
}

impl<W: Write> LevelWriter<W> {
    /// Create a new level writer
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            position: 0,
            depth: 0,
        }
    }

    /// Number of bytes written so far
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Unwrap the sink
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Run `f` one nesting level deeper.
    ///
    /// Counts levels exactly like [`LevelReader::nested`], so anything that
    /// encodes also decodes.
    pub fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        if self.depth >= MAX_NESTING {
            return Err(Error::NestingTooDeep {
                offset: self.position,
                limit: MAX_NESTING,
            });
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Write a boolean as a single 0 or 1 byte
    pub fn write_bool(&mut self, value: bool) -> Result<()> {
        self.write_u8(u8::from(value))?;
        Ok(())
    }

    /// Write an unsigned LEB128 varint, low group first
    pub fn write_varint(&mut self, mut value: u64) -> Result<()> {
        loop {
            let byte = (value & 0x7F) as u8;
            value >>= 7;
            if value == 0 {
                self.write_u8(byte)?;
                return Ok(());
            }
            self.write_u8(byte | 0x80)?;
        }
    }

    /// Write a length or element count
    pub fn write_len(&mut self, len: usize) -> Result<()> {
        let len = u32::try_from(len).map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("length {len} does not fit in a 32-bit count"),
            )
        })?;
        self.write_varint(u64::from(len))
    }

    /// Write a length-prefixed raw byte block
    pub fn write_byte_block(&mut self, bytes: &[u8]) -> Result<()> {
        self.write_len(bytes.len())?;
        self.write_all(bytes)?;
        Ok(())
    }

    /// Write a length-prefixed UTF-8 string
    pub fn write_string(&mut self, value: &str) -> Result<()> {
        self.write_byte_block(value.as_bytes())
    }
}

impl<W: Write> Write for LevelWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.writer.write(buf)?;
        self.position += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

// =============================================================================
// Primitive codecs
// =============================================================================

impl Decode for bool {
    fn decode<R: Read>(reader: &mut LevelReader<R>) -> Result<Self> {
        reader.read_bool()
    }
}

impl Encode for bool {
    fn encode<W: Write>(&self, writer: &mut LevelWriter<W>) -> Result<()> {
        writer.write_bool(*self)
    }
}

impl Decode for u8 {
    fn decode<R: Read>(reader: &mut LevelReader<R>) -> Result<Self> {
        Ok(reader.read_u8()?)
    }
}

impl Encode for u8 {
    fn encode<W: Write>(&self, writer: &mut LevelWriter<W>) -> Result<()> {
        writer.write_u8(*self)?;
        Ok(())
    }
}

impl Decode for i32 {
    fn decode<R: Read>(reader: &mut LevelReader<R>) -> Result<Self> {
        Ok(reader.read_i32::<LittleEndian>()?)
    }
}

impl Encode for i32 {
    fn encode<W: Write>(&self, writer: &mut LevelWriter<W>) -> Result<()> {
        writer.write_i32::<LittleEndian>(*self)?;
        Ok(())
    }
}

impl Decode for i64 {
    fn decode<R: Read>(reader: &mut LevelReader<R>) -> Result<Self> {
        Ok(reader.read_i64::<LittleEndian>()?)
    }
}

impl Encode for i64 {
    fn encode<W: Write>(&self, writer: &mut LevelWriter<W>) -> Result<()> {
        writer.write_i64::<LittleEndian>(*self)?;
        Ok(())
    }
}

impl Decode for f32 {
    fn decode<R: Read>(reader: &mut LevelReader<R>) -> Result<Self> {
        Ok(reader.read_f32::<LittleEndian>()?)
    }
}

impl Encode for f32 {
    fn encode<W: Write>(&self, writer: &mut LevelWriter<W>) -> Result<()> {
        writer.write_f32::<LittleEndian>(*self)?;
        Ok(())
    }
}

impl Decode for String {
    fn decode<R: Read>(reader: &mut LevelReader<R>) -> Result<Self> {
        reader.read_string()
    }
}

impl Encode for String {
    fn encode<W: Write>(&self, writer: &mut LevelWriter<W>) -> Result<()> {
        writer.write_string(self)
    }
}

/// Fixed byte arrays carry no length prefix
impl<const N: usize> Decode for [u8; N] {
    fn decode<R: Read>(reader: &mut LevelReader<R>) -> Result<Self> {
        let mut bytes = [0u8; N];
        reader.read_exact(&mut bytes)?;
        Ok(bytes)
    }
}

impl<const N: usize> Encode for [u8; N] {
    fn encode<W: Write>(&self, writer: &mut LevelWriter<W>) -> Result<()> {
        writer.write_all(self)?;
        Ok(())
    }
}

/// Level ids are stored in their hyphenated string form
impl Decode for Uuid {
    fn decode<R: Read>(reader: &mut LevelReader<R>) -> Result<Self> {
        let offset = reader.position();
        let value = reader.read_string()?;
        Uuid::parse_str(&value).map_err(|_| Error::InvalidUuid { value, offset })
    }
}

impl Encode for Uuid {
    fn encode<W: Write>(&self, writer: &mut LevelWriter<W>) -> Result<()> {
        writer.write_string(&self.hyphenated().to_string())
    }
}
