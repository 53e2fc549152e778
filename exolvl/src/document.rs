//! Level document assembly
//!
//! ```text
//! "NYA^"         4-byte magic
//! LocalLevel     starts with serialization_version: i32
//! LevelData      field table chosen by that version
//! AuthorReplay   varint length + bytes
//! ```
//!
//! Reads and writes are all-or-nothing. A write encodes the whole document
//! into memory first and hands it to the sink in one call.

use crate::codec::{Decode, Encode, LevelReader, LevelWriter};
use crate::error::{Error, Result};
use crate::gzip;
use crate::types::{AuthorReplay, LevelData, LocalLevel, Timestamp};
use crate::version::{FieldResolver, FormatVersion};
use crate::MAGIC;
use ::image::DynamicImage;
use std::borrow::Cow;
use std::io::{Read, Write};
use uuid::Uuid;

/// Options for decoding from a byte slice
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadOptions {
    /// Accept bytes after the author replay instead of failing
    pub allow_trailing_bytes: bool,
}

/// Options for encoding
#[derive(Debug, Clone, Copy, Default)]
pub struct WriteOptions {
    /// Version written to the header. Fields newer than this are dropped.
    pub target_version: FormatVersion,
}

impl WriteOptions {
    /// Write for a specific format version
    pub fn with_version(target_version: FormatVersion) -> Self {
        Self { target_version }
    }
}

/// A complete `.exolvl` level
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelDocument {
    pub local_level: LocalLevel,
    pub level_data: LevelData,
    pub author_replay: AuthorReplay,
}

impl LevelDocument {
    /// Fresh level with a random id, stamped with the current time
    pub fn new(level_name: impl Into<String>) -> Self {
        let level_id = Uuid::new_v4();
        let now = Timestamp::now();

        Self {
            local_level: LocalLevel {
                level_id,
                level_name: level_name.into(),
                creation_date: now,
                update_date: now,
                ..LocalLevel::default()
            },
            level_data: LevelData::new(level_id),
            author_replay: AuthorReplay::default(),
        }
    }

    /// Version recorded in the header (the version this document was read at)
    pub fn version(&self) -> FormatVersion {
        self.local_level.serialization_version
    }

    /// Decode the base64 thumbnail into pixels
    pub fn thumbnail(&self) -> Result<DynamicImage> {
        self.local_level.thumbnail.decode()
    }

    /// Decode a level from a stream of raw (decompressed) bytes
    pub fn read<R: Read>(source: R) -> Result<Self> {
        Self::read_from(&mut LevelReader::new(source))
    }

    fn read_from<R: Read>(reader: &mut LevelReader<R>) -> Result<Self> {
        let magic = <[u8; 4]>::decode(reader)?;
        if magic != MAGIC {
            return Err(Error::WrongMagic { found: magic });
        }

        let local_level = LocalLevel::decode(reader)?;
        let resolver = FieldResolver::new(local_level.serialization_version);
        let level_data = LevelData::decode_versioned(reader, &resolver)?;
        let author_replay = AuthorReplay::decode(reader)?;

        tracing::debug!(
            version = %resolver.version(),
            name = %local_level.level_name,
            objects = level_data.objects.len(),
            scripts = level_data.nova_scripts.len(),
            bytes = reader.position(),
            "read level"
        );

        Ok(Self {
            local_level,
            level_data,
            author_replay,
        })
    }

    /// Decode a level from raw bytes, rejecting anything after it
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes_with(bytes, &ReadOptions::default())
    }

    /// Decode from raw bytes with explicit options
    pub fn from_bytes_with(bytes: &[u8], options: &ReadOptions) -> Result<Self> {
        let mut reader = LevelReader::new(bytes);
        let document = Self::read_from(&mut reader)?;

        let offset = reader.position();
        let remaining = bytes.len() - offset as usize;
        if remaining > 0 && !options.allow_trailing_bytes {
            return Err(Error::TrailingBytes { offset, remaining });
        }

        Ok(document)
    }

    /// Decode a level as saved by the game. Accepts gzip-wrapped or raw bytes.
    pub fn from_compressed_bytes(bytes: &[u8]) -> Result<Self> {
        if gzip::is_gzip(bytes) {
            Self::from_bytes(&gzip::extract(bytes)?)
        } else {
            Self::from_bytes(bytes)
        }
    }

    /// Encode at the current version
    pub fn write<W: Write>(&self, sink: W) -> Result<()> {
        self.write_with(sink, &WriteOptions::default())
    }

    /// Encode with explicit options, handing the sink the finished bytes
    pub fn write_with<W: Write>(&self, mut sink: W, options: &WriteOptions) -> Result<()> {
        let bytes = self.to_bytes_with(options)?;
        sink.write_all(&bytes)?;
        Ok(())
    }

    /// Encode at the current version
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        self.to_bytes_with(&WriteOptions::default())
    }

    /// Encode into a buffer for the target version in `options`
    pub fn to_bytes_with(&self, options: &WriteOptions) -> Result<Vec<u8>> {
        let resolver = FieldResolver::new(options.target_version);
        let mut writer = LevelWriter::new(Vec::new());

        // The header records the version the rest is laid out for
        let mut local_level = Cow::Borrowed(&self.local_level);
        if local_level.serialization_version != resolver.version() {
            local_level.to_mut().serialization_version = resolver.version();
        }

        MAGIC.encode(&mut writer)?;
        local_level.encode(&mut writer)?;
        self.level_data.encode_versioned(&mut writer, &resolver)?;
        self.author_replay.encode(&mut writer)?;

        tracing::debug!(
            version = %resolver.version(),
            name = %self.local_level.level_name,
            bytes = writer.position(),
            "wrote level"
        );

        Ok(writer.into_inner())
    }

    /// Encode at the current version and gzip the result
    pub fn to_compressed_bytes(&self) -> Result<Vec<u8>> {
        gzip::compress(&self.to_bytes()?)
    }
}
