use super::NovaValue;
use crate::codec::wire_struct;

wire_struct! {
    /// Call of a function script by id
    #[derive(Debug, Clone, Default, PartialEq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct FunctionCall {
        pub id: i32,
        pub parameters: Vec<CallParameter>,
    }
}

wire_struct! {
    /// Argument bound to one of the callee's parameters
    #[derive(Debug, Clone, Default, PartialEq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct CallParameter {
        pub parameter_id: i32,
        pub value: NovaValue,
    }
}
