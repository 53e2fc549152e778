//! Level thumbnails
//!
//! Unlike pattern frames and prefab previews, the thumbnail is stored as a
//! string holding base64 text of the encoded image (PNG in practice).

use super::Image;
use crate::codec::{Decode, Encode, LevelReader, LevelWriter};
use crate::error::{Error, Result};
use ::image::DynamicImage;
use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use std::io::{Read, Write};

/// Base64 text of an encoded image
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Thumbnail(pub String);

impl Thumbnail {
    /// Wrap text that is already base64
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// Encode raw image bytes
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(BASE64.encode(bytes))
    }

    /// Base64 text as stored
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The encoded image bytes behind the base64 text
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        BASE64.decode(&self.0).map_err(Error::InvalidThumbnail)
    }

    /// Decode into pixels
    pub fn decode(&self) -> Result<DynamicImage> {
        Image::new(self.to_bytes()?).decode()
    }

    /// Encode pixels as base64 PNG
    pub fn from_dynamic(image: &DynamicImage) -> Result<Self> {
        let png = Image::from_dynamic(image)?;
        Ok(Self::from_bytes(png.as_bytes()))
    }
}

impl Decode for Thumbnail {
    fn decode<R: Read>(reader: &mut LevelReader<R>) -> Result<Self> {
        Ok(Self(reader.read_string()?))
    }
}

impl Encode for Thumbnail {
    fn encode<W: Write>(&self, writer: &mut LevelWriter<W>) -> Result<()> {
        writer.write_string(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode_from_slice, encode_to_vec};
    use ::image::{Rgba, RgbaImage};

    #[test]
    fn test_base64_png_decodes() {
        let pixels = RgbaImage::from_pixel(1, 1, Rgba([0, 128, 255, 255]));
        let png = Image::from_dynamic(&DynamicImage::ImageRgba8(pixels)).unwrap();
        let thumbnail = Thumbnail::new(BASE64.encode(png.as_bytes()));
        assert!(thumbnail.as_str().starts_with("iVBORw0KGgo"));

        let decoded = thumbnail.decode().unwrap().to_rgba8();
        assert_eq!(decoded.get_pixel(0, 0), &Rgba([0, 128, 255, 255]));
    }

    #[test]
    fn test_stored_as_string() {
        let thumbnail = Thumbnail::from_bytes(&[1, 2, 3]);
        let bytes = encode_to_vec(&thumbnail).unwrap();
        assert_eq!(bytes, [4, b'A', b'Q', b'I', b'D']);
        assert_eq!(decode_from_slice::<Thumbnail>(&bytes).unwrap(), thumbnail);
    }

    #[test]
    fn test_invalid_text() {
        let thumbnail = Thumbnail::new("not base64!");
        assert!(matches!(thumbnail.decode(), Err(Error::InvalidThumbnail(_))));

        // valid base64, but not an image
        let garbage = Thumbnail::from_bytes(b"plain");
        assert!(matches!(garbage.decode(), Err(Error::Image(_))));
    }
}
