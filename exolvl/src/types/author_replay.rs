use crate::codec::{Decode, Encode, LevelReader, LevelWriter};
use crate::error::Result;
use std::io::{Read, Write};

/// Recorded author run, kept as opaque bytes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AuthorReplay(pub Vec<u8>);

impl Decode for AuthorReplay {
    fn decode<R: Read>(reader: &mut LevelReader<R>) -> Result<Self> {
        Ok(Self(reader.read_byte_block()?))
    }
}

impl Encode for AuthorReplay {
    fn encode<W: Write>(&self, writer: &mut LevelWriter<W>) -> Result<()> {
        writer.write_byte_block(&self.0)
    }
}
