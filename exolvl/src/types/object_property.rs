//! Typed object properties
//!
//! One byte discriminant followed by the payload. Gaps in the tag table
//! (29-31, 33, 70) are unused by the game and rejected on read.

use super::{Colour, Vec2};
use crate::codec::{Decode, Encode, LevelReader, LevelWriter};
use crate::error::{Error, Result};
use std::io::{Read, Write};

macro_rules! object_properties {
    ($( $name:ident = $tag:literal ($ty:ty) ),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum ObjectProperty {
            $( $name($ty), )*
        }

        impl ObjectProperty {
            /// Every valid discriminant, in table order
            pub const TAGS: &'static [u8] = &[$($tag),*];

            /// Wire discriminant of this variant
            pub const fn tag(&self) -> u8 {
                match self {
                    $( Self::$name(_) => $tag, )*
                }
            }

            /// Variant name, for logs and diagnostics
            pub const fn name(&self) -> &'static str {
                match self {
                    $( Self::$name(_) => stringify!($name), )*
                }
            }

            #[cfg(test)]
            pub(crate) fn with_default_payload(tag: u8) -> Option<Self> {
                match tag {
                    $( $tag => Some(Self::$name(Default::default())), )*
                    _ => None,
                }
            }
        }

        impl Decode for ObjectProperty {
            fn decode<R: Read>(reader: &mut LevelReader<R>) -> Result<Self> {
                let (tag, offset) = reader.read_tag()?;
                Ok(match tag {
                    $( $tag => Self::$name(<$ty as Decode>::decode(reader)?), )*
                    tag => return Err(Error::InvalidObjectPropertyType { tag, offset }),
                })
            }
        }

        impl Encode for ObjectProperty {
            fn encode<W: Write>(&self, writer: &mut LevelWriter<W>) -> Result<()> {
                self.tag().encode(writer)?;
                match self {
                    $( Self::$name(value) => value.encode(writer), )*
                }
            }
        }
    };
}

object_properties! {
    Colour = 0 (Colour),
    Resolution = 1 (i32),
    FillMode = 2 (i32),
    SecondaryColour = 3 (Colour),
    Thickness = 4 (f32),
    TotalAngle = 5 (i32),
    Corners = 6 (i32),
    Blending = 7 (i32),
    GridOffset = 8 (Vec2),
    CornerRadius = 9 (f32),
    Width = 10 (f32),
    Height = 11 (f32),
    BorderColour = 12 (Colour),
    BorderThickness = 13 (f32),
    PhysicsType = 14 (i32),
    Friction = 15 (f32),
    TerrainCorners = 16 (Vec<Vec<Vec2>>),
    Direction = 17 (i32),
    Impulse = 18 (i32),
    Killer = 19 (bool),
    RoundReflexAngles = 20 (bool),
    RoundCollider = 21 (bool),
    Radius = 22 (f32),
    Size = 23 (f32),
    ReverseDirection = 24 (bool),
    CollisionDetector = 25 (bool),
    Pattern = 26 (i32),
    PatternTiling = 27 (Vec2),
    PatternOffset = 28 (Vec2),
    Bounce = 32 (bool),
    RestoreVelocity = 34 (bool),
    Sprite = 35 (String),
    Trigger = 36 (bool),
    Health = 37 (f32),
    DamageFromJump = 38 (bool),
    DamageFromDash = 39 (bool),
    ReverseDirOnDamage = 40 (bool),
    Floating = 41 (bool),
    LinkedObjects = 42 (Vec<i32>),
    FlipX = 43 (bool),
    FlipY = 44 (bool),
    Text = 45 (String),
    FontSize = 46 (f32),
    EditorColour = 47 (Colour),
    Colour2 = 48 (Colour),
    Colour3 = 49 (Colour),
    Colour4 = 50 (Colour),
    ParticleTexture = 51 (String),
    Duration = 52 (f32),
    Delay = 53 (f32),
    Loop = 54 (bool),
    AutoPlay = 55 (bool),
    LifetimeMin = 56 (f32),
    LifetimeMax = 57 (f32),
    SimulationSpace = 58 (i32),
    Rate = 59 (f32),
    Burst = 60 (i32),
    EmitterShape = 61 (i32),
    EmitterWidth = 62 (f32),
    EmitterHeight = 63 (f32),
    EmitterTotalAngle = 64 (f32),
    SizeMin = 65 (f32),
    SizeMax = 66 (f32),
    SizeOverLifetime = 67 (bool),
    StartSizeMultiplier = 68 (f32),
    EndSizeMultiplier = 69 (f32),
    SpeedMin = 71 (f32),
    SpeedMax = 72 (f32),
    SpeedLimit = 73 (f32),
    SpeedDampen = 74 (f32),
    RotationMin = 75 (f32),
    RotationMax = 76 (f32),
    RotationSpeed = 77 (f32),
    ColourOverLifetime = 78 (bool),
    StartColourMultiplier = 79 (Colour),
    EndColourMultiplier = 80 (Colour),
    GravityMultiplier = 81 (f32),
    AnchorPos = 82 (Vec2),
    MoonInnerRadius = 83 (f32),
    MoonOffset = 84 (f32),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode_from_slice, encode_to_vec};
    use std::collections::HashSet;

    #[test]
    fn test_tags_unique() {
        let unique: HashSet<_> = ObjectProperty::TAGS.iter().collect();
        assert_eq!(unique.len(), ObjectProperty::TAGS.len());
        assert_eq!(ObjectProperty::TAGS.len(), 80);
    }

    #[test]
    fn test_every_tag_round_trips() {
        for &tag in ObjectProperty::TAGS {
            let property = ObjectProperty::with_default_payload(tag).unwrap();
            assert_eq!(property.tag(), tag);

            let bytes = encode_to_vec(&property).unwrap();
            assert_eq!(bytes[0], tag);
            let decoded = decode_from_slice::<ObjectProperty>(&bytes).unwrap();
            assert_eq!(decoded, property, "tag {tag} ({})", property.name());
        }
    }

    #[test]
    fn test_unknown_tags_rejected() {
        for tag in (0..=u8::MAX).filter(|tag| !ObjectProperty::TAGS.contains(tag)) {
            let err = decode_from_slice::<ObjectProperty>(&[tag, 0, 0, 0, 0]).unwrap_err();
            assert!(
                matches!(err, Error::InvalidObjectPropertyType { tag: t, offset: 0 } if t == tag),
                "tag {tag}"
            );
        }
    }

    #[test]
    fn test_terrain_corners_payload() {
        let property = ObjectProperty::TerrainCorners(vec![
            vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(1.0, 1.0)],
            vec![],
        ]);
        let bytes = encode_to_vec(&property).unwrap();
        assert_eq!(&bytes[..3], &[16, 2, 3]);
        assert_eq!(decode_from_slice::<ObjectProperty>(&bytes).unwrap(), property);
    }
}
