//! Sequence, optional and map codecs

use super::{Decode, Encode, LevelReader, LevelWriter};
use crate::error::Result;
use std::collections::BTreeMap;
use std::io::{Read, Write};

/// Upper bound on capacity reserved from an untrusted count.
///
/// Larger sequences still decode, they just grow as elements arrive.
pub const MAX_PREALLOC: usize = 4096;

/// Deepest action or value tree a reader accepts or a writer produces.
///
/// Action and value levels count together: a `Repeat` holding a `Wait`
/// whose duration is a constant is three levels deep.
pub const MAX_NESTING: usize = 128;

impl<T: Decode> Decode for Vec<T> {
    fn decode<R: Read>(reader: &mut LevelReader<R>) -> Result<Self> {
        let len = reader.read_len()?;
        let mut items = Vec::with_capacity(len.min(MAX_PREALLOC));
        for _ in 0..len {
            items.push(T::decode(reader)?);
        }
        Ok(items)
    }
}

impl<T: Encode> Encode for [T] {
    fn encode<W: Write>(&self, writer: &mut LevelWriter<W>) -> Result<()> {
        writer.write_len(self.len())?;
        for item in self {
            item.encode(writer)?;
        }
        Ok(())
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn encode<W: Write>(&self, writer: &mut LevelWriter<W>) -> Result<()> {
        self.as_slice().encode(writer)
    }
}

impl<T: Decode> Decode for Option<T> {
    fn decode<R: Read>(reader: &mut LevelReader<R>) -> Result<Self> {
        if reader.read_bool()? {
            Ok(Some(T::decode(reader)?))
        } else {
            Ok(None)
        }
    }
}

impl<T: Encode> Encode for Option<T> {
    fn encode<W: Write>(&self, writer: &mut LevelWriter<W>) -> Result<()> {
        match self {
            Some(value) => {
                writer.write_bool(true)?;
                value.encode(writer)
            }
            None => writer.write_bool(false),
        }
    }
}

/// Later duplicates of a key replace earlier ones.
impl<K: Decode + Ord, V: Decode> Decode for BTreeMap<K, V> {
    fn decode<R: Read>(reader: &mut LevelReader<R>) -> Result<Self> {
        let len = reader.read_len()?;
        let mut map = BTreeMap::new();
        for _ in 0..len {
            let key = K::decode(reader)?;
            let value = V::decode(reader)?;
            map.insert(key, value);
        }
        Ok(map)
    }
}

impl<K: Encode, V: Encode> Encode for BTreeMap<K, V> {
    fn encode<W: Write>(&self, writer: &mut LevelWriter<W>) -> Result<()> {
        writer.write_len(self.len())?;
        for (key, value) in self {
            key.encode(writer)?;
            value.encode(writer)?;
        }
        Ok(())
    }
}
