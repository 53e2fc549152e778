use super::{Thumbnail, Timestamp};
use crate::codec::wire_struct;
use crate::version::FormatVersion;
use uuid::Uuid;

wire_struct! {
    /// Editor-side metadata. Never uploaded with the level.
    ///
    /// `serialization_version` is the first field on the wire and decides
    /// the layout of the `LevelData` that follows.
    #[derive(Debug, Clone, PartialEq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct LocalLevel {
        pub serialization_version: FormatVersion,
        pub level_id: Uuid,
        pub level_version: i32,
        pub level_name: String,
        pub thumbnail: Thumbnail,
        pub creation_date: Timestamp,
        pub update_date: Timestamp,
        /// Milliseconds
        pub author_time: i64,
        pub author_lap_times: Vec<i64>,
        pub silver_medal_time: i64,
        pub gold_medal_time: i64,
        pub laps: i32,
        pub private: bool,
        /// Made in the NovaScript editor rather than the legacy one
        pub nova_level: bool,
    }
}

impl Default for LocalLevel {
    fn default() -> Self {
        Self {
            serialization_version: FormatVersion::CURRENT,
            level_id: Uuid::nil(),
            level_version: 1,
            level_name: "New level".to_string(),
            thumbnail: Thumbnail::default(),
            creation_date: Timestamp::default(),
            update_date: Timestamp::default(),
            author_time: 0,
            author_lap_times: Vec::new(),
            silver_medal_time: 0,
            gold_medal_time: 0,
            laps: 1,
            private: false,
            nova_level: true,
        }
    }
}
