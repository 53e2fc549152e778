//! Format versions and version-gated fields
//!
//! Every level stores its serialization version near the top of the file.
//! The version is read once and decides, for the rest of the pass, which
//! fields exist on the wire:
//!
//! ```text
//! v16  legacy editor levels
//! v17  + LevelData::colour_palette
//! v18  current
//! ```
//!
//! Fields absent at a version are skipped on read and filled with their
//! default. Writing to an older version silently drops them.

use crate::codec::{Decode, Encode, LevelReader, LevelWriter};
use crate::error::Result;
use std::fmt;
use std::io::{Read, Write};

/// Serialization version of a level file
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormatVersion(pub i32);

impl FormatVersion {
    pub const V16: Self = Self(16);
    pub const V17: Self = Self(17);
    pub const V18: Self = Self(18);

    /// Version written by default
    pub const CURRENT: Self = Self::V18;

    /// Oldest version this crate has a field table for
    pub const OLDEST: Self = Self::V16;

    /// Level data carries a colour palette (v17+)
    pub fn has_colour_palette(self) -> bool {
        self >= VersionedField::ColourPalette.introduced_in()
    }

    /// Whether this version falls inside the known field table
    pub fn is_known(self) -> bool {
        (Self::OLDEST..=Self::CURRENT).contains(&self)
    }
}

impl Default for FormatVersion {
    fn default() -> Self {
        Self::CURRENT
    }
}

impl fmt::Display for FormatVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl Decode for FormatVersion {
    fn decode<R: Read>(reader: &mut LevelReader<R>) -> Result<Self> {
        Ok(Self(i32::decode(reader)?))
    }
}

impl Encode for FormatVersion {
    fn encode<W: Write>(&self, writer: &mut LevelWriter<W>) -> Result<()> {
        self.0.encode(writer)
    }
}

/// Fields whose presence depends on the format version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VersionedField {
    ColourPalette,
}

impl VersionedField {
    pub const ALL: &'static [VersionedField] = &[VersionedField::ColourPalette];

    /// First version that stores this field
    pub const fn introduced_in(self) -> FormatVersion {
        match self {
            VersionedField::ColourPalette => FormatVersion::V17,
        }
    }

    /// Field name, for logs
    pub const fn name(self) -> &'static str {
        match self {
            VersionedField::ColourPalette => "colour_palette",
        }
    }
}

/// Presence table for one read or write pass.
///
/// Built once from the document's version and consulted for every gated
/// field, so the version cannot change halfway through a pass.
#[derive(Debug, Clone, Copy)]
pub struct FieldResolver {
    version: FormatVersion,
}

impl FieldResolver {
    /// Resolver for documents laid out at `version`
    pub fn new(version: FormatVersion) -> Self {
        if !version.is_known() {
            tracing::debug!(%version, "level version outside the known field table");
        }
        Self { version }
    }

    /// Version the field table was chosen for
    pub fn version(&self) -> FormatVersion {
        self.version
    }

    /// Whether `field` exists on the wire at this version
    pub fn present(&self, field: VersionedField) -> bool {
        self.version >= field.introduced_in()
    }

    /// Read a gated field, or produce its default when the version lacks it
    pub fn read_or_default<T, R>(&self, field: VersionedField, reader: &mut LevelReader<R>) -> Result<T>
    where
        T: Decode + Default,
        R: Read,
    {
        if self.present(field) {
            T::decode(reader)
        } else {
            tracing::debug!(field = field.name(), version = %self.version, "field absent, using default");
            Ok(T::default())
        }
    }

    /// Write a gated field if the version has it, otherwise drop it
    pub fn write_if_present<T, W>(&self, field: VersionedField, value: &T, writer: &mut LevelWriter<W>) -> Result<()>
    where
        T: Encode + Default + PartialEq,
        W: Write,
    {
        if self.present(field) {
            value.encode(writer)
        } else {
            if *value != T::default() {
                tracing::debug!(
                    field = field.name(),
                    version = %self.version,
                    "dropping populated field not stored at target version"
                );
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode_from_slice, encode_to_vec};

    #[test]
    fn test_version_ordering() {
        assert!(FormatVersion::V16 < FormatVersion::V17);
        assert!(FormatVersion::CURRENT.has_colour_palette());
        assert!(FormatVersion::V17.has_colour_palette());
        assert!(!FormatVersion::V16.has_colour_palette());
        assert_eq!(FormatVersion::default(), FormatVersion::V18);
        assert_eq!(FormatVersion::V17.to_string(), "v17");
    }

    #[test]
    fn test_known_versions() {
        assert!(FormatVersion::V16.is_known());
        assert!(FormatVersion::CURRENT.is_known());
        assert!(!FormatVersion(15).is_known());
        assert!(!FormatVersion(19).is_known());
    }

    #[test]
    fn test_every_field_is_gated_after_oldest() {
        for field in VersionedField::ALL {
            assert!(field.introduced_in() > FormatVersion::OLDEST);
            assert!(field.introduced_in() <= FormatVersion::CURRENT);
        }
    }

    #[test]
    fn test_resolver_presence() {
        let legacy = FieldResolver::new(FormatVersion::V16);
        let current = FieldResolver::new(FormatVersion::CURRENT);
        assert!(!legacy.present(VersionedField::ColourPalette));
        assert!(current.present(VersionedField::ColourPalette));
        assert_eq!(legacy.version(), FormatVersion::V16);
    }

    #[test]
    fn test_read_or_default_consumes_nothing_when_absent() {
        let bytes = [1u8, 5, 0, 0, 0];
        let mut reader = LevelReader::new(&bytes[..]);
        let resolver = FieldResolver::new(FormatVersion::V16);

        let value: Vec<i32> = resolver
            .read_or_default(VersionedField::ColourPalette, &mut reader)
            .unwrap();
        assert!(value.is_empty());
        assert_eq!(reader.position(), 0);

        let resolver = FieldResolver::new(FormatVersion::V17);
        let value: Vec<i32> = resolver
            .read_or_default(VersionedField::ColourPalette, &mut reader)
            .unwrap();
        assert_eq!(value, vec![5]);
    }

    #[test]
    fn test_write_if_present_drops_on_downgrade() {
        let value = vec![1i32, 2];

        let mut writer = LevelWriter::new(Vec::new());
        FieldResolver::new(FormatVersion::V16)
            .write_if_present(VersionedField::ColourPalette, &value, &mut writer)
            .unwrap();
        assert!(writer.into_inner().is_empty());

        let mut writer = LevelWriter::new(Vec::new());
        FieldResolver::new(FormatVersion::V18)
            .write_if_present(VersionedField::ColourPalette, &value, &mut writer)
            .unwrap();
        assert_eq!(writer.into_inner(), encode_to_vec(&value).unwrap());
    }

    #[test]
    fn test_version_wire_form() {
        assert_eq!(encode_to_vec(&FormatVersion::V17).unwrap(), [17, 0, 0, 0]);
        assert_eq!(
            decode_from_slice::<FormatVersion>(&[18, 0, 0, 0]).unwrap(),
            FormatVersion::CURRENT
        );
    }
}
