use super::{Image, Object};
use crate::codec::wire_struct;

wire_struct! {
    /// Reusable group of objects with a preview image
    #[derive(Debug, Clone, Default, PartialEq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Prefab {
        pub prefab_id: i32,
        pub prefab_image_data: Image,
        pub items: Vec<Object>,
    }
}
