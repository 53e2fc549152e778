use super::Vec2;
use crate::codec::wire_struct;

wire_struct! {
    /// Editor layer. `children` lists object entity ids in draw order.
    #[derive(Debug, Clone, Default, PartialEq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Layer {
        pub layer_id: i32,
        pub layer_name: String,
        pub selected: bool,
        pub invisible: bool,
        pub locked: bool,
        pub foreground_type: i32,
        pub parallax: Vec2,
        pub fixed_size: bool,
        pub children: Vec<i32>,
    }
}
