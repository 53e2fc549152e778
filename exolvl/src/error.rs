//! Level codec error types

use std::io;

/// Everything that can go wrong while reading or writing a level.
///
/// Structural errors carry the byte offset (from the start of the level
/// stream) at which the offending value began.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("wrong magic: expected \"NYA^\", found {found:02x?}")]
    WrongMagic { found: [u8; 4] },

    #[error("invalid action type {tag} at offset {offset}")]
    InvalidActionType { tag: u8, offset: u64 },

    #[error("invalid dynamic type {tag} at offset {offset}")]
    InvalidDynamicType { tag: u8, offset: u64 },

    #[error("invalid static type {tag} at offset {offset}")]
    InvalidStaticType { tag: u8, offset: u64 },

    #[error("invalid object property type {tag} at offset {offset}")]
    InvalidObjectPropertyType { tag: u8, offset: u64 },

    /// The varint was well formed but does not fit the destination width.
    #[error("varint at offset {offset} overflows a {bits}-bit integer")]
    VarintOverflow { offset: u64, bits: u32 },

    #[error("string at offset {offset} is not valid UTF-8")]
    InvalidString { offset: u64 },

    #[error("invalid level id {value:?} at offset {offset}")]
    InvalidUuid { value: String, offset: u64 },

    #[error("unknown theme {name:?} at offset {offset}")]
    InvalidTheme { name: String, offset: u64 },

    /// Action or value trees nested past `MAX_NESTING`, on read or write
    #[error("nesting deeper than {limit} levels at offset {offset}")]
    NestingTooDeep { offset: u64, limit: usize },

    #[error("{remaining} trailing bytes after level at offset {offset}")]
    TrailingBytes { offset: u64, remaining: usize },

    /// Thumbnail text that is not valid base64
    #[error("invalid thumbnail encoding: {0}")]
    InvalidThumbnail(#[source] base64::DecodeError),

    #[error("image error: {0}")]
    Image(#[source] image::ImageError),
}

/// Result alias used throughout the crate
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// Byte offset of a structural error, if it has one
    pub fn offset(&self) -> Option<u64> {
        match self {
            Error::InvalidActionType { offset, .. }
            | Error::InvalidDynamicType { offset, .. }
            | Error::InvalidStaticType { offset, .. }
            | Error::InvalidObjectPropertyType { offset, .. }
            | Error::VarintOverflow { offset, .. }
            | Error::InvalidString { offset }
            | Error::InvalidUuid { offset, .. }
            | Error::InvalidTheme { offset, .. }
            | Error::NestingTooDeep { offset, .. }
            | Error::TrailingBytes { offset, .. } => Some(*offset),
            Error::WrongMagic { .. } => Some(0),
            Error::Io(_) | Error::InvalidThumbnail(_) | Error::Image(_) => None,
        }
    }

    /// True when the stream ended before the level was complete
    pub fn is_truncated(&self) -> bool {
        matches!(self, Error::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof)
    }
}
