//! Exolvl: reader and writer for Exoracer `.exolvl` level files
//!
//! Decodes a level into a fully materialized [`LevelDocument`] and encodes
//! it back, byte for byte, across the historical format versions.
//!
//! # Format Overview
//!
//! ```text
//! ┌────────────────────────────┐
//! │ magic "NYA^"               │
//! ├────────────────────────────┤
//! │ LocalLevel                 │  editor metadata, starts with the version
//! ├────────────────────────────┤
//! │ LevelData                  │  tiles, objects, layers, scripts, ...
//! │   └── NovaScript           │  tagged-union action/value trees
//! ├────────────────────────────┤
//! │ AuthorReplay               │  opaque bytes
//! └────────────────────────────┘
//! ```
//!
//! Files saved by the game are additionally gzip-wrapped; see [`gzip`].
//!
//! # Usage
//!
//! ```ignore
//! use exolvl::LevelDocument;
//!
//! let bytes = std::fs::read("level.exolvl")?;
//! let mut level = LevelDocument::from_compressed_bytes(&bytes)?;
//!
//! println!("{} ({})", level.local_level.level_name, level.version());
//! level.level_data.laps = 3;
//!
//! std::fs::write("level.exolvl", level.to_compressed_bytes()?)?;
//! ```

pub mod codec;
mod document;
mod error;
pub mod gzip;
pub mod novascript;
pub mod types;
pub mod version;

pub use document::{LevelDocument, ReadOptions, WriteOptions};
pub use error::{Error, Result};
pub use version::{FieldResolver, FormatVersion, VersionedField};

use std::io::{Read, Write};

/// Magic bytes at the start of every raw level stream
pub const MAGIC: [u8; 4] = *b"NYA^";

/// Decode a level from a raw (decompressed) stream
pub fn read<R: Read>(source: R) -> Result<LevelDocument> {
    LevelDocument::read(source)
}

/// Encode a level at the current format version
pub fn write<W: Write>(document: &LevelDocument, sink: W) -> Result<()> {
    document.write(sink)
}
