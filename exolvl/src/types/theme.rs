use crate::codec::{Decode, Encode, LevelReader, LevelWriter};
use crate::error::{Error, Result};
use std::fmt;
use std::io::{Read, Write};

/// Visual theme, stored by its lowercase name
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Theme {
    #[default]
    Mountains,
    Halloween,
    Christmas,
    Custom,
}

impl Theme {
    pub const ALL: [Theme; 4] = [
        Theme::Mountains,
        Theme::Halloween,
        Theme::Christmas,
        Theme::Custom,
    ];

    /// Name as written in the level file
    pub const fn as_str(self) -> &'static str {
        match self {
            Theme::Mountains => "mountains",
            Theme::Halloween => "halloween",
            Theme::Christmas => "christmas",
            Theme::Custom => "custom",
        }
    }

    /// Parse a stored theme name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|theme| theme.as_str() == name)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Decode for Theme {
    fn decode<R: Read>(reader: &mut LevelReader<R>) -> Result<Self> {
        let offset = reader.position();
        let name = reader.read_string()?;
        Self::from_name(&name).ok_or(Error::InvalidTheme { name, offset })
    }
}

impl Encode for Theme {
    fn encode<W: Write>(&self, writer: &mut LevelWriter<W>) -> Result<()> {
        writer.write_string(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode_from_slice, encode_to_vec};

    #[test]
    fn test_theme_names() {
        for theme in Theme::ALL {
            let bytes = encode_to_vec(&theme).unwrap();
            assert_eq!(decode_from_slice::<Theme>(&bytes).unwrap(), theme);
        }
        assert_eq!(Theme::default().to_string(), "mountains");
    }

    #[test]
    fn test_unknown_theme() {
        let err = decode_from_slice::<Theme>(&[4, b'm', b'o', b'o', b'n']).unwrap_err();
        assert!(matches!(err, Error::InvalidTheme { ref name, offset: 0 } if name == "moon"));
    }
}
