use super::Image;
use crate::codec::wire_struct;

wire_struct! {
    /// Animated fill pattern, one image per frame
    #[derive(Debug, Clone, Default, PartialEq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Pattern {
        pub pattern_id: i32,
        pub pattern_frames: Vec<Image>,
    }
}
