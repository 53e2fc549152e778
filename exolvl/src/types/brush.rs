use super::{ObjectProperty, Vec2};
use crate::codec::wire_struct;

wire_struct! {
    /// Scatter brush for painting objects in the editor
    #[derive(Debug, Clone, Default, PartialEq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Brush {
        pub brush_id: i32,
        pub spread: Vec2,
        pub frequency: f32,
        pub grid: BrushGrid,
        pub objects: Vec<BrushObject>,
    }
}

wire_struct! {
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct BrushGrid {
        pub x: i32,
        pub y: i32,
    }
}

wire_struct! {
    #[derive(Debug, Clone, Default, PartialEq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct BrushObject {
        pub entity_id: i32,
        pub properties: Vec<ObjectProperty>,
        pub weight: f32,
        pub scale: f32,
        pub rotation: f32,
        pub flip_x: bool,
        pub flip_y: bool,
    }
}
