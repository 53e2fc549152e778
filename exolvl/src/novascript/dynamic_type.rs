//! Value expression kinds
//!
//! Every `NovaValue` starts with one of these discriminants. The table
//! records, per kind, the static type the expression evaluates to and
//! whether it is a literal, a variable or parameter reference, or a
//! computed expression over `sub_values`.

use super::StaticType;
use crate::codec::{Decode, Encode, LevelReader, LevelWriter};
use crate::error::{Error, Result};
use std::io::{Read, Write};

/// How a value expression obtains its result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Literal stored in the value slots
    Constant,
    /// Reads a script or global variable by id
    Variable,
    /// Reads a function parameter by id
    Parameter,
    /// Operator or query over `sub_values`
    Computed,
}

macro_rules! dynamic_types {
    ($( $name:ident = $tag:literal => $static_type:ident, $kind:ident ),* $(,)?) => {
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum DynamicType {
            #[default]
            $( $name, )*
        }

        impl DynamicType {
            pub const ALL: &'static [DynamicType] = &[$( DynamicType::$name ),*];

            /// Wire discriminant
            pub const fn tag(self) -> u8 {
                match self {
                    $( DynamicType::$name => $tag, )*
                }
            }

            /// Look up a discriminant
            pub const fn from_tag(tag: u8) -> Option<Self> {
                match tag {
                    $( $tag => Some(DynamicType::$name), )*
                    _ => None,
                }
            }

            /// Type the expression evaluates to
            pub const fn static_type(self) -> StaticType {
                match self {
                    $( DynamicType::$name => StaticType::$static_type, )*
                }
            }

            /// Whether the value is a constant, a reference or computed
            pub const fn kind(self) -> ValueKind {
                match self {
                    $( DynamicType::$name => ValueKind::$kind, )*
                }
            }
        }
    };
}

dynamic_types! {
    BoolConstant = 0 => Bool, Constant,
    BoolVariable = 1 => Bool, Variable,
    BoolNot = 2 => Bool, Computed,
    BoolAnd = 3 => Bool, Computed,
    BoolOr = 4 => Bool, Computed,
    BoolEqualBool = 5 => Bool, Computed,
    BoolEqualNumber = 6 => Bool, Computed,
    BoolEqualString = 7 => Bool, Computed,
    BoolEqualColour = 8 => Bool, Computed,
    BoolEqualVector = 9 => Bool, Computed,
    BoolEqualObject = 10 => Bool, Computed,
    BoolNotEqualBool = 11 => Bool, Computed,
    BoolNotEqualNumber = 12 => Bool, Computed,
    BoolNotEqualString = 13 => Bool, Computed,
    BoolNotEqualColour = 14 => Bool, Computed,
    BoolNotEqualVector = 15 => Bool, Computed,
    BoolNotEqualObject = 16 => Bool, Computed,
    BoolLess = 17 => Bool, Computed,
    BoolLessOrEqual = 18 => Bool, Computed,
    BoolGreater = 19 => Bool, Computed,
    BoolGreaterOrEqual = 20 => Bool, Computed,
    BoolObjectDead = 21 => Bool, Computed,
    BoolPlayerOnGround = 22 => Bool, Computed,
    BoolPlayerOnWalljump = 23 => Bool, Computed,
    BoolPlayerOnBooster = 24 => Bool, Computed,
    BoolPlayerOnSwing = 25 => Bool, Computed,
    BoolPlayerInFloatingZone = 26 => Bool, Computed,
    BoolPlayerUsingGlider = 27 => Bool, Computed,
    BoolObjectsColliding = 28 => Bool, Computed,
    BoolInputPressed = 29 => Bool, Computed,
    BoolInputPressedLeft = 30 => Bool, Computed,
    BoolInputPressedRight = 31 => Bool, Computed,
    BoolInputHeld = 32 => Bool, Computed,
    BoolInputHeldLeft = 33 => Bool, Computed,
    BoolInputHeldRight = 34 => Bool, Computed,
    BoolInputReleased = 35 => Bool, Computed,
    BoolInputReleasedLeft = 36 => Bool, Computed,
    BoolInputReleasedRight = 37 => Bool, Computed,
    IntConstant = 38 => Int, Constant,
    IntVariable = 39 => Int, Variable,
    IntAdd = 40 => Int, Computed,
    IntSubtract = 41 => Int, Computed,
    IntMultiply = 42 => Int, Computed,
    IntDivide = 43 => Int, Computed,
    IntModulo = 44 => Int, Computed,
    IntMin = 45 => Int, Computed,
    IntMax = 46 => Int, Computed,
    IntAbs = 47 => Int, Computed,
    IntSign = 48 => Int, Computed,
    IntRound = 49 => Int, Computed,
    IntCeil = 50 => Int, Computed,
    IntFloor = 51 => Int, Computed,
    IntRandom = 52 => Int, Computed,
    IntRepeatCount = 53 => Int, Computed,
    IntObjectDirection = 54 => Int, Computed,
    IntObjectSetCount = 55 => Int, Computed,
    FloatConstant = 56 => Float, Constant,
    FloatVariable = 57 => Float, Variable,
    FloatAdd = 58 => Float, Computed,
    FloatSubtract = 59 => Float, Computed,
    FloatMultiply = 60 => Float, Computed,
    FloatDivide = 61 => Float, Computed,
    FloatModulo = 62 => Float, Computed,
    FloatMin = 63 => Float, Computed,
    FloatMax = 64 => Float, Computed,
    FloatAbs = 65 => Float, Computed,
    FloatSign = 66 => Float, Computed,
    FloatRound = 67 => Float, Computed,
    FloatCeil = 68 => Float, Computed,
    FloatFloor = 69 => Float, Computed,
    FloatCos = 70 => Float, Computed,
    FloatSin = 71 => Float, Computed,
    FloatTan = 72 => Float, Computed,
    FloatAcos = 73 => Float, Computed,
    FloatAsin = 74 => Float, Computed,
    FloatAtan = 75 => Float, Computed,
    FloatSqrt = 76 => Float, Computed,
    FloatPow = 77 => Float, Computed,
    FloatRandom = 78 => Float, Computed,
    FloatTime = 79 => Float, Computed,
    FloatSemitones = 80 => Float, Computed,
    FloatVectorX = 81 => Float, Computed,
    FloatVectorY = 82 => Float, Computed,
    FloatVectorLength = 83 => Float, Computed,
    FloatVectorLengthSqr = 84 => Float, Computed,
    FloatVectorDistance = 85 => Float, Computed,
    FloatVectorDistanceSqr = 86 => Float, Computed,
    FloatVectorDot = 87 => Float, Computed,
    FloatVectorAngle = 88 => Float, Computed,
    FloatVectorAngleBetween = 89 => Float, Computed,
    FloatObjectRotation = 90 => Float, Computed,
    FloatObjectGlobalRotation = 91 => Float, Computed,
    FloatCameraViewportSize = 92 => Float, Computed,
    FloatDamageAmount = 93 => Float, Computed,
    StringConstant = 94 => String, Constant,
    StringVariable = 95 => String, Variable,
    StringFromInt = 96 => String, Computed,
    StringFromFloat = 97 => String, Computed,
    StringConcat = 98 => String, Computed,
    ColourConstant = 99 => Colour, Constant,
    ColourValues = 100 => Colour, Computed,
    ColourVariable = 101 => Colour, Variable,
    ColourObjectColour = 102 => Colour, Computed,
    VectorConstant = 103 => Vector, Constant,
    VectorValues = 104 => Vector, Computed,
    VectorVariable = 105 => Vector, Variable,
    VectorAdd = 106 => Vector, Computed,
    VectorSubtract = 107 => Vector, Computed,
    VectorMultiply = 108 => Vector, Computed,
    VectorDivide = 109 => Vector, Computed,
    VectorNormalize = 110 => Vector, Computed,
    VectorPerpendicular = 111 => Vector, Computed,
    VectorReflect = 112 => Vector, Computed,
    VectorObjectPos = 113 => Vector, Computed,
    VectorObjectGlobalPos = 114 => Vector, Computed,
    VectorObjectScale = 115 => Vector, Computed,
    VectorObjectGlobalScale = 116 => Vector, Computed,
    VectorObjectVelocity = 117 => Vector, Computed,
    VectorCameraPos = 118 => Vector, Computed,
    SoundConstant = 119 => Sound, Constant,
    SoundVariable = 120 => Sound, Variable,
    MusicConstant = 121 => Music, Constant,
    MusicVariable = 122 => Music, Variable,
    ObjectConstant = 123 => Object, Constant,
    ObjectVariable = 124 => Object, Variable,
    ObjectAnyObject = 125 => Object, Computed,
    ObjectFirstFromSet = 126 => Object, Computed,
    ObjectRandomFromSet = 127 => Object, Computed,
    ObjectElementFromSet = 128 => Object, Computed,
    ObjectSourceObject = 129 => Object, Computed,
    ObjectCollidedObject = 130 => Object, Computed,
    ObjectTargetObject = 131 => Object, Computed,
    ObjectPlayer = 132 => Object, Computed,
    ObjectParent = 133 => Object, Computed,
    ObjectSetConstant = 134 => ObjectSet, Constant,
    ObjectSetVariable = 135 => ObjectSet, Variable,
    ObjectSetConcat = 136 => ObjectSet, Computed,
    ObjectSetPlayers = 137 => ObjectSet, Computed,
    ObjectSetObjectsWithTag = 138 => ObjectSet, Computed,
    TransitionConstant = 139 => Transition, Constant,
    TransitionVariable = 140 => Transition, Variable,
    EasingConstant = 141 => Easing, Constant,
    EasingVariable = 142 => Easing, Variable,
    ObjectSetChildren = 143 => ObjectSet, Computed,
    BoolObjectActivated = 144 => Bool, Computed,
    FloatLevelTime = 145 => Float, Computed,
    BoolPlayerJumpLocked = 146 => Bool, Computed,
    StringObjectTag = 147 => String, Computed,
    SpriteConstant = 148 => Sprite, Constant,
    SpriteVariable = 149 => Sprite, Variable,
    ScriptConstant = 150 => Script, Constant,
    ScriptVariable = 151 => Script, Variable,
    BoolParameter = 152 => Bool, Parameter,
    IntParameter = 153 => Int, Parameter,
    FloatParameter = 154 => Float, Parameter,
    StringParameter = 155 => String, Parameter,
    ColourParameter = 156 => Colour, Parameter,
    VectorParameter = 157 => Vector, Parameter,
    SoundParameter = 158 => Sound, Parameter,
    MusicParameter = 159 => Music, Parameter,
    ObjectParameter = 160 => Object, Parameter,
    ObjectSetParameter = 161 => ObjectSet, Parameter,
    TransitionParameter = 162 => Transition, Parameter,
    EasingParameter = 163 => Easing, Parameter,
    SpriteParameter = 164 => Sprite, Parameter,
    ScriptParameter = 165 => Script, Parameter,
    BoolObjectsCollidingWithPoint = 166 => Bool, Computed,
    FloatRoundDecimals = 167 => Float, Computed,
    VectorPointerPositionDeprecated = 168 => Vector, Computed,
    VectorPointerWorldPositionDeprecated = 169 => Vector, Computed,
    VectorCollisionPoint = 170 => Vector, Computed,
    VectorCollisionNormal = 171 => Vector, Computed,
    ObjectRepeatObject = 172 => Object, Computed,
    VectorClosestFromPoint = 173 => Vector, Computed,
    ObjectSetAllObjects = 174 => ObjectSet, Computed,
    ObjectSetObjectsInLayer = 175 => ObjectSet, Computed,
    ObjectSetObjectsInCircle = 176 => ObjectSet, Computed,
    LayerConstant = 177 => Layer, Constant,
    LayerVariable = 178 => Layer, Variable,
    LayerParameter = 179 => Layer, Parameter,
    VectorRotate = 180 => Vector, Computed,
    IntLastSoundInstance = 181 => Int, Computed,
    ObjectSetUnion = 182 => ObjectSet, Computed,
    ObjectSetIntersection = 183 => ObjectSet, Computed,
    ObjectSetDifference = 184 => ObjectSet, Computed,
    ObjectSetRemoveAtIndex = 185 => ObjectSet, Computed,
    VectorPointerPosition = 186 => Vector, Computed,
    VectorPointerWorldPosition = 187 => Vector, Computed,
    BoolPointerDown = 188 => Bool, Computed,
    BoolPointerHeld = 189 => Bool, Computed,
    BoolPointerReleased = 190 => Bool, Computed,
    FloatColourR = 191 => Float, Computed,
    FloatColourG = 192 => Float, Computed,
    FloatColourB = 193 => Float, Computed,
    FloatColourA = 194 => Float, Computed,
    StringSubstring = 195 => String, Computed,
    IntStringLength = 196 => Int, Computed,
}

impl DynamicType {
    /// Literal kind producing `static_type`, if the type has one
    pub fn constant_of(static_type: StaticType) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.kind() == ValueKind::Constant && kind.static_type() == static_type)
    }
}

impl Decode for DynamicType {
    fn decode<R: Read>(reader: &mut LevelReader<R>) -> Result<Self> {
        let (tag, offset) = reader.read_tag()?;
        Self::from_tag(tag).ok_or(Error::InvalidDynamicType { tag, offset })
    }
}

impl Encode for DynamicType {
    fn encode<W: Write>(&self, writer: &mut LevelWriter<W>) -> Result<()> {
        self.tag().encode(writer)
    }
}
