use super::{ObjectProperty, Vec2};
use crate::codec::wire_struct;

wire_struct! {
    /// A placed entity.
    ///
    /// `in_layer` and `in_group` are entity/layer ids, not ownership;
    /// resolve them through `LevelData`.
    #[derive(Debug, Clone, Default, PartialEq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Object {
        pub entity_id: i32,
        pub tile_id: i32,
        pub prefab_entity_id: i32,
        pub prefab_id: i32,
        pub position: Vec2,
        pub scale: Vec2,
        pub rotation: f32,
        pub tag: String,
        pub properties: Vec<ObjectProperty>,
        pub in_layer: i32,
        pub in_group: i32,
        pub group_members: Vec<i32>,
    }
}

impl Object {
    /// First property with the given discriminant
    pub fn property(&self, tag: u8) -> Option<&ObjectProperty> {
        self.properties.iter().find(|property| property.tag() == tag)
    }
}
