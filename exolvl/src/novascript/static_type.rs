use crate::codec::{Decode, Encode, LevelReader, LevelWriter};
use crate::error::{Error, Result};
use std::io::{Read, Write};

macro_rules! static_types {
    ($( $name:ident = $tag:literal ),* $(,)?) => {
        /// Declared type of a variable, parameter or value expression
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum StaticType {
            #[default]
            $( $name, )*
        }

        impl StaticType {
            pub const ALL: &'static [StaticType] = &[$( StaticType::$name ),*];

            /// Wire discriminant
            pub const fn tag(self) -> u8 {
                match self {
                    $( StaticType::$name => $tag, )*
                }
            }

            /// Look up a discriminant
            pub const fn from_tag(tag: u8) -> Option<Self> {
                match tag {
                    $( $tag => Some(StaticType::$name), )*
                    _ => None,
                }
            }
        }
    };
}

static_types! {
    Bool = 0,
    Int = 1,
    Float = 2,
    String = 3,
    Colour = 4,
    Vector = 5,
    Sound = 6,
    Music = 7,
    Object = 8,
    ObjectSet = 9,
    Transition = 10,
    Easing = 11,
    Sprite = 12,
    Script = 13,
    Layer = 14,
}

impl Decode for StaticType {
    fn decode<R: Read>(reader: &mut LevelReader<R>) -> Result<Self> {
        let (tag, offset) = reader.read_tag()?;
        Self::from_tag(tag).ok_or(Error::InvalidStaticType { tag, offset })
    }
}

impl Encode for StaticType {
    fn encode<W: Write>(&self, writer: &mut LevelWriter<W>) -> Result<()> {
        self.tag().encode(writer)
    }
}
