use super::{DynamicType, ValueKind};
use crate::codec::{Decode, Encode, LevelReader, LevelWriter};
use crate::error::Result;
use crate::types::{Colour, Vec2};
use std::io::{Read, Write};

/// A value expression.
///
/// Every expression shares this envelope; `dynamic_type` decides which
/// slots carry meaning. Constants use the slot matching their type,
/// variable and parameter references put the id in `int_value`, and
/// computed expressions keep their operands in `sub_values`.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NovaValue {
    pub dynamic_type: DynamicType,
    pub bool_value: bool,
    pub int_value: i32,
    pub float_value: f32,
    pub string_value: Option<String>,
    pub colour_value: Colour,
    pub vector_value: Vec2,
    pub int_list_value: Option<Vec<i32>>,
    pub sub_values: Option<Vec<NovaValue>>,
}

impl NovaValue {
    /// Empty envelope of the given kind
    pub fn of(dynamic_type: DynamicType) -> Self {
        Self {
            dynamic_type,
            ..Self::default()
        }
    }

    /// Boolean constant
    pub fn bool(value: bool) -> Self {
        Self {
            bool_value: value,
            ..Self::of(DynamicType::BoolConstant)
        }
    }

    /// Integer constant
    pub fn int(value: i32) -> Self {
        Self {
            int_value: value,
            ..Self::of(DynamicType::IntConstant)
        }
    }

    /// Float constant
    pub fn float(value: f32) -> Self {
        Self {
            float_value: value,
            ..Self::of(DynamicType::FloatConstant)
        }
    }

    /// String constant
    pub fn string(value: impl Into<String>) -> Self {
        Self {
            string_value: Some(value.into()),
            ..Self::of(DynamicType::StringConstant)
        }
    }

    /// Colour constant
    pub fn colour(value: Colour) -> Self {
        Self {
            colour_value: value,
            ..Self::of(DynamicType::ColourConstant)
        }
    }

    /// Vector constant
    pub fn vector(value: Vec2) -> Self {
        Self {
            vector_value: value,
            ..Self::of(DynamicType::VectorConstant)
        }
    }

    /// Object set literal (entity ids)
    pub fn object_set(ids: Vec<i32>) -> Self {
        Self {
            int_list_value: Some(ids),
            ..Self::of(DynamicType::ObjectSetConstant)
        }
    }

    /// Reference to a variable or parameter by id.
    ///
    /// `dynamic_type` must be a variable or parameter kind.
    pub fn reference(dynamic_type: DynamicType, id: i32) -> Self {
        debug_assert!(matches!(
            dynamic_type.kind(),
            ValueKind::Variable | ValueKind::Parameter
        ));
        Self {
            int_value: id,
            ..Self::of(dynamic_type)
        }
    }

    /// Operator or query over operand expressions
    pub fn computed(dynamic_type: DynamicType, operands: Vec<NovaValue>) -> Self {
        Self {
            sub_values: Some(operands),
            ..Self::of(dynamic_type)
        }
    }

    /// Constant, reference or computed, from the dynamic type
    pub fn kind(&self) -> ValueKind {
        self.dynamic_type.kind()
    }

    /// Operands of a computed expression
    pub fn operands(&self) -> &[NovaValue] {
        self.sub_values.as_deref().unwrap_or_default()
    }

    /// Nesting depth of the expression tree (a leaf is 1)
    pub fn depth(&self) -> usize {
        1 + self.operands().iter().map(NovaValue::depth).max().unwrap_or(0)
    }
}

impl Decode for NovaValue {
    fn decode<R: Read>(reader: &mut LevelReader<R>) -> Result<Self> {
        reader.nested(|reader| {
            Ok(Self {
                dynamic_type: Decode::decode(reader)?,
                bool_value: Decode::decode(reader)?,
                int_value: Decode::decode(reader)?,
                float_value: Decode::decode(reader)?,
                string_value: Decode::decode(reader)?,
                colour_value: Decode::decode(reader)?,
                vector_value: Decode::decode(reader)?,
                int_list_value: Decode::decode(reader)?,
                sub_values: Decode::decode(reader)?,
            })
        })
    }
}

impl Encode for NovaValue {
    fn encode<W: Write>(&self, writer: &mut LevelWriter<W>) -> Result<()> {
        writer.nested(|writer| {
            self.dynamic_type.encode(writer)?;
            self.bool_value.encode(writer)?;
            self.int_value.encode(writer)?;
            self.float_value.encode(writer)?;
            self.string_value.encode(writer)?;
            self.colour_value.encode(writer)?;
            self.vector_value.encode(writer)?;
            self.int_list_value.encode(writer)?;
            self.sub_values.encode(writer)
        })
    }
}
