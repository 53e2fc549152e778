use super::{NovaValue, StaticType};
use crate::codec::wire_struct;

wire_struct! {
    /// Script-local or global variable
    #[derive(Debug, Clone, Default, PartialEq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Variable {
        pub variable_id: i32,
        pub name: String,
        pub static_type: StaticType,
        pub initial_value: NovaValue,
    }
}

wire_struct! {
    /// Input of a function script
    #[derive(Debug, Clone, Default, PartialEq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Parameter {
        pub parameter_id: i32,
        pub name: String,
        pub static_type: StaticType,
        pub default_value: NovaValue,
    }
}
