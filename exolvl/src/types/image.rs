//! Embedded image bytes
//!
//! Pattern frames and prefab previews are stored as opaque encoded images
//! (PNG in practice). The codec never looks inside them; `Image::decode`
//! hands the bytes to the `image` crate on request.

use crate::codec::{Decode, Encode, LevelReader, LevelWriter};
use crate::error::{Error, Result};
use ::image::{DynamicImage, ImageFormat};
use std::io::{Cursor, Read, Write};

/// Encoded image bytes, stored as a length-prefixed block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Image(pub Vec<u8>);

impl Image {
    /// Wrap already-encoded image bytes
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Decode the stored bytes into pixels
    pub fn decode(&self) -> Result<DynamicImage> {
        ::image::load_from_memory(&self.0).map_err(Error::Image)
    }

    /// Encode pixels as PNG for storage in a level
    pub fn from_dynamic(image: &DynamicImage) -> Result<Self> {
        let mut out = Cursor::new(Vec::new());
        image
            .write_to(&mut out, ImageFormat::Png)
            .map_err(Error::Image)?;
        Ok(Self(out.into_inner()))
    }
}

impl From<Vec<u8>> for Image {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl Decode for Image {
    fn decode<R: Read>(reader: &mut LevelReader<R>) -> Result<Self> {
        Ok(Self(reader.read_byte_block()?))
    }
}

impl Encode for Image {
    fn encode<W: Write>(&self, writer: &mut LevelWriter<W>) -> Result<()> {
        writer.write_byte_block(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::image::{Rgba, RgbaImage};

    #[test]
    fn test_png_through_image_crate() {
        let mut pixels = RgbaImage::new(2, 2);
        pixels.put_pixel(1, 0, Rgba([255, 0, 0, 255]));
        let stored = Image::from_dynamic(&DynamicImage::ImageRgba8(pixels)).unwrap();
        assert!(stored.as_bytes().starts_with(b"\x89PNG"));

        let decoded = stored.decode().unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (2, 2));
        assert_eq!(decoded.get_pixel(1, 0), &Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn test_garbage_is_image_error() {
        let stored = Image::new(vec![1, 2, 3, 4]);
        assert!(matches!(stored.decode(), Err(Error::Image(_))));
    }
}
