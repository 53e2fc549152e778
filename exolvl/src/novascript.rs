//! NovaScript: the level editor's visual scripting model
//!
//! A script is a trigger condition plus an ordered body of actions. Action
//! arguments are `NovaValue` expressions, which are themselves trees over
//! constants, variable and parameter references, and computed kinds.
//!
//! ```text
//! NovaScript
//! ├── condition: NovaValue
//! ├── activation_list: Vec<Activator>
//! ├── parameters / variables (function inputs, script-local state)
//! └── actions: Vec<Action>
//!     └── Action { closed, wait, ActionType }
//!         └── Repeat / RepeatWhile / ConditionBlock / RepeatForEachObject
//!             └── Vec<Action> ...
//! ```

mod action;
mod dynamic_type;
mod function;
mod nova_value;
mod static_type;
mod variable;


pub use action::{Action, ActionType};
pub use dynamic_type::{DynamicType, ValueKind};
pub use function::{CallParameter, FunctionCall};
pub use nova_value::NovaValue;
pub use static_type::StaticType;
pub use variable::{Parameter, Variable};

use crate::codec::wire_struct;

wire_struct! {
    #[derive(Debug, Clone, Default, PartialEq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct NovaScript {
        pub script_id: i32,
        pub script_name: String,
        /// Only runs when called through `ActionType::RunFunction`
        pub is_function: bool,
        /// How many times the script may fire, -1 for unlimited
        pub activation_count: i32,
        pub condition: NovaValue,
        pub activation_list: Vec<Activator>,
        pub parameters: Vec<Parameter>,
        pub variables: Vec<Variable>,
        pub actions: Vec<Action>,
    }
}

impl NovaScript {
    /// Every action in the body, nested ones included, depth-first
    pub fn all_actions(&self) -> Vec<&Action> {
        let mut all = Vec::new();
        for action in &self.actions {
            action.walk(&mut |action, _| all.push(action));
        }
        all
    }

    /// Deepest action nesting in the body (0 for an empty body)
    pub fn max_depth(&self) -> usize {
        let mut deepest = 0;
        for action in &self.actions {
            action.walk(&mut |_, depth| deepest = deepest.max(depth + 1));
        }
        deepest
    }
}

wire_struct! {
    /// Event that fires a script
    #[derive(Debug, Clone, Default, PartialEq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Activator {
        pub activator_type: i32,
        pub parameters: Vec<NovaValue>,
    }
}
