//! Wire codec shared by every level type
//!
//! All fixed-width values are little-endian. Lengths and counts are
//! unsigned LEB128 varints.
//!
//! ```text
//! bool       u8, non-zero is true (written as 0 or 1)
//! i32/i64    little-endian two's complement
//! f32        little-endian IEEE 754
//! varint     7 bits per byte, low group first, 0x80 = more bytes follow
//! String     varint byte length, UTF-8 bytes
//! bytes      varint length, raw bytes
//! Vec<T>     varint count, then count x T
//! Option<T>  u8 presence flag, then T when present
//! BTreeMap   varint count, then (K, V) pairs in ascending key order
//! ```

mod container;
mod primitive;

#[cfg(test)]
mod tests;

pub use container::{MAX_NESTING, MAX_PREALLOC};
pub use primitive::{LevelReader, LevelWriter};

use crate::error::Result;
use std::io::{Read, Write};

/// A value that can be read from a level stream.
pub trait Decode: Sized {
    fn decode<R: Read>(reader: &mut LevelReader<R>) -> Result<Self>;
}

/// A value that can be written to a level stream.
pub trait Encode {
    fn encode<W: Write>(&self, writer: &mut LevelWriter<W>) -> Result<()>;
}

/// Decode a single value from a byte slice, ignoring anything after it.
pub fn decode_from_slice<T: Decode>(bytes: &[u8]) -> Result<T> {
    T::decode(&mut LevelReader::new(bytes))
}

/// Encode a single value into a fresh buffer.
pub fn encode_to_vec<T: Encode + ?Sized>(value: &T) -> Result<Vec<u8>> {
    let mut writer = LevelWriter::new(Vec::new());
    value.encode(&mut writer)?;
    Ok(writer.into_inner())
}

/// Declare a struct whose wire form is its fields in declaration order.
///
/// Generates the struct plus matching `Decode` and `Encode` impls, so the
/// read and write orders cannot drift apart.
macro_rules! wire_struct {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                pub $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        pub struct $name {
            $(
                $(#[$field_meta])*
                pub $field: $ty,
            )*
        }

        impl $crate::codec::Decode for $name {
            fn decode<R: ::std::io::Read>(
                reader: &mut $crate::codec::LevelReader<R>,
            ) -> $crate::error::Result<Self> {
                Ok(Self {
                    $( $field: <$ty as $crate::codec::Decode>::decode(reader)?, )*
                })
            }
        }

        impl $crate::codec::Encode for $name {
            fn encode<W: ::std::io::Write>(
                &self,
                writer: &mut $crate::codec::LevelWriter<W>,
            ) -> $crate::error::Result<()> {
                $( $crate::codec::Encode::encode(&self.$field, writer)?; )*
                Ok(())
            }
        }
    };
}

pub(crate) use wire_struct;
