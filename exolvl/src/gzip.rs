//! Gzip envelope
//!
//! Levels saved by the game are gzip-compressed. The level codec works on
//! the decompressed stream; these helpers strip or add the wrapper.

use crate::error::Result;
use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use std::io::{Read, Write};

/// Gzip member header magic
const GZIP_MAGIC: [u8; 2] = [0x1F, 0x8B];

/// Whether `bytes` start with the gzip magic
pub fn is_gzip(bytes: &[u8]) -> bool {
    bytes.starts_with(&GZIP_MAGIC)
}

/// Decompress a gzip-wrapped level
pub fn extract(bytes: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = GzDecoder::new(bytes);
    let mut out = Vec::new();
    decoder.read_to_end(&mut out)?;
    Ok(out)
}

/// Wrap raw level bytes in gzip, as the game stores them
pub fn compress(bytes: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(bytes)?;
    Ok(encoder.finish()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gzip_round_trip() {
        let raw = b"NYA^ level bytes".repeat(20);
        let packed = compress(&raw).unwrap();
        assert!(is_gzip(&packed));
        assert!(packed.len() < raw.len());
        assert_eq!(extract(&packed).unwrap(), raw);
    }

    #[test]
    fn test_extract_rejects_plain_bytes() {
        assert!(!is_gzip(b"NYA^"));
        assert!(extract(b"NYA^ not gzip").is_err());
    }
}
