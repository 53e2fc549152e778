//! Tests for the wire codec

use super::*;
use crate::error::Error;
use std::collections::BTreeMap;
use uuid::Uuid;

fn varint_bytes(value: u64) -> Vec<u8> {
    let mut writer = LevelWriter::new(Vec::new());
    writer.write_varint(value).unwrap();
    writer.into_inner()
}

#[test]
fn test_varint_known_encodings() {
    assert_eq!(varint_bytes(0), [0x00]);
    assert_eq!(varint_bytes(1), [0x01]);
    assert_eq!(varint_bytes(127), [0x7F]);
    assert_eq!(varint_bytes(128), [0x80, 0x01]);
    assert_eq!(varint_bytes(300), [0xAC, 0x02]);
    assert_eq!(varint_bytes(u32::MAX as u64), [0xFF, 0xFF, 0xFF, 0xFF, 0x0F]);
    assert_eq!(varint_bytes(u64::MAX).len(), 10);
}

#[test]
fn test_varint_decode() {
    let mut reader = LevelReader::new(&[0xAC, 0x02, 0xFF, 0xFF, 0xFF, 0xFF, 0x0F][..]);
    assert_eq!(reader.read_varint_u32().unwrap(), 300);
    assert_eq!(reader.read_varint_u32().unwrap(), u32::MAX);
    assert_eq!(reader.position(), 7);

    let max = varint_bytes(u64::MAX);
    let mut reader = LevelReader::new(max.as_slice());
    assert_eq!(reader.read_varint_u64().unwrap(), u64::MAX);
}

#[test]
fn test_varint_accepts_padded_zero_groups() {
    // 5 encoded as two bytes with an empty high group
    let mut reader = LevelReader::new(&[0x85, 0x00][..]);
    assert_eq!(reader.read_varint_u32().unwrap(), 5);
}

#[test]
fn test_varint_overflow_u32() {
    // 2^32 needs a sixth bit in the fifth group
    let bytes = varint_bytes(1 << 32);
    let mut reader = LevelReader::new(bytes.as_slice());
    let err = reader.read_varint_u32().unwrap_err();
    assert!(matches!(err, Error::VarintOverflow { offset: 0, bits: 32 }));
}

#[test]
fn test_varint_overflow_too_many_bytes() {
    let bytes = [0x80u8; 11];
    let mut reader = LevelReader::new(&bytes[..]);
    let err = reader.read_varint_u64().unwrap_err();
    assert!(matches!(err, Error::VarintOverflow { offset: 0, bits: 64 }));
}

#[test]
fn test_varint_overflow_reports_offset() {
    let mut bytes = vec![0x01, 0x02];
    bytes.extend_from_slice(&[0xFF, 0xFF, 0xFF, 0xFF, 0x7F]);
    let mut reader = LevelReader::new(bytes.as_slice());
    reader.read_varint_u32().unwrap();
    reader.read_varint_u32().unwrap();
    let err = reader.read_varint_u32().unwrap_err();
    assert_eq!(err.offset(), Some(2));
}

#[test]
fn test_truncated_varint_is_eof() {
    let mut reader = LevelReader::new(&[0x80, 0x80][..]);
    assert!(reader.read_varint_u32().unwrap_err().is_truncated());
}

#[test]
fn test_fixed_width_little_endian() {
    assert_eq!(encode_to_vec(&0x0102_0304i32).unwrap(), [4, 3, 2, 1]);
    assert_eq!(encode_to_vec(&-1i64).unwrap(), [0xFF; 8]);
    assert_eq!(encode_to_vec(&1.0f32).unwrap(), [0x00, 0x00, 0x80, 0x3F]);
    assert_eq!(decode_from_slice::<i32>(&[4, 3, 2, 1]).unwrap(), 0x0102_0304);
}

#[test]
fn test_bool_any_nonzero_is_true() {
    assert!(decode_from_slice::<bool>(&[0x02]).unwrap());
    assert!(!decode_from_slice::<bool>(&[0x00]).unwrap());
    assert_eq!(encode_to_vec(&true).unwrap(), [1]);
}

#[test]
fn test_string_layout() {
    let bytes = encode_to_vec(&"héllo".to_string()).unwrap();
    assert_eq!(bytes[0], 6);
    assert_eq!(&bytes[1..], "héllo".as_bytes());
    assert_eq!(decode_from_slice::<String>(&bytes).unwrap(), "héllo");
}

#[test]
fn test_string_rejects_invalid_utf8() {
    let err = decode_from_slice::<String>(&[2, 0xC3, 0x28]).unwrap_err();
    assert!(matches!(err, Error::InvalidString { offset: 0 }));
}

#[test]
fn test_string_truncated() {
    let err = decode_from_slice::<String>(&[10, b'a', b'b']).unwrap_err();
    assert!(err.is_truncated());
}

#[test]
fn test_huge_count_does_not_preallocate() {
    // Claims u32::MAX elements, provides none
    let err = decode_from_slice::<Vec<i32>>(&[0xFF, 0xFF, 0xFF, 0xFF, 0x0F]).unwrap_err();
    assert!(err.is_truncated());
}

#[test]
fn test_vec_preserves_order_and_count() {
    let values = vec![3i32, 1, 2];
    let bytes = encode_to_vec(&values).unwrap();
    assert_eq!(bytes[0], 3);
    assert_eq!(bytes.len(), 1 + 3 * 4);
    assert_eq!(decode_from_slice::<Vec<i32>>(&bytes).unwrap(), values);
}

#[test]
fn test_nested_vec() {
    let corners = vec![vec![1i32, 2], vec![], vec![3]];
    let bytes = encode_to_vec(&corners).unwrap();
    assert_eq!(decode_from_slice::<Vec<Vec<i32>>>(&bytes).unwrap(), corners);
}

#[test]
fn test_option_presence_flag() {
    assert_eq!(encode_to_vec(&None::<i32>).unwrap(), [0]);
    assert_eq!(encode_to_vec(&Some(7i32)).unwrap(), [1, 7, 0, 0, 0]);
    assert_eq!(decode_from_slice::<Option<i32>>(&[0]).unwrap(), None);
    assert_eq!(
        decode_from_slice::<Option<String>>(&[1, 1, b'x']).unwrap(),
        Some("x".to_string())
    );
}

#[test]
fn test_map_is_key_ordered() {
    let mut map = BTreeMap::new();
    map.insert(20i32, "b".to_string());
    map.insert(10i32, "a".to_string());
    let bytes = encode_to_vec(&map).unwrap();

    assert_eq!(bytes[0], 2);
    assert_eq!(&bytes[1..5], &10i32.to_le_bytes());
    assert_eq!(decode_from_slice::<BTreeMap<i32, String>>(&bytes).unwrap(), map);
}

#[test]
fn test_uuid_as_string() {
    let id = Uuid::from_u128(0x0123_4567_89ab_cdef_0123_4567_89ab_cdef);
    let bytes = encode_to_vec(&id).unwrap();
    assert_eq!(bytes[0], 36);
    assert_eq!(&bytes[1..], b"01234567-89ab-cdef-0123-456789abcdef");
    assert_eq!(decode_from_slice::<Uuid>(&bytes).unwrap(), id);
}

#[test]
fn test_uuid_rejects_garbage() {
    let err = decode_from_slice::<Uuid>(&[3, b'a', b'b', b'c']).unwrap_err();
    assert!(matches!(err, Error::InvalidUuid { ref value, offset: 0 } if value == "abc"));
}

#[test]
fn test_fixed_array_has_no_prefix() {
    assert_eq!(encode_to_vec(&[9u8, 8, 7, 6]).unwrap(), [9, 8, 7, 6]);
    assert_eq!(decode_from_slice::<[u8; 2]>(&[5, 6, 7]).unwrap(), [5, 6]);
}

#[test]
fn test_writer_tracks_position() {
    let mut writer = LevelWriter::new(Vec::new());
    writer.write_string("abc").unwrap();
    writer.write_varint(300).unwrap();
    assert_eq!(writer.position(), 6);
}
