//! Level document types
//!
//! Plain data mirroring the on-disk layout. Types with a fixed field order
//! are declared through `wire_struct!`; the ones with conditional or
//! validated fields implement their codecs by hand.

mod author_replay;
mod brush;
mod image;
mod layer;
mod level_data;
mod local_level;
mod math;
mod object;
mod object_property;
mod pattern;
mod prefab;
mod theme;
mod thumbnail;
mod timestamp;

pub use author_replay::AuthorReplay;
pub use brush::{Brush, BrushGrid, BrushObject};
pub use self::image::Image;
pub use layer::Layer;
pub use level_data::{LevelData, TileLayers};
pub use local_level::LocalLevel;
pub use math::{Colour, Vec2};
pub use object::Object;
pub use object_property::ObjectProperty;
pub use pattern::Pattern;
pub use prefab::Prefab;
pub use theme::Theme;
pub use thumbnail::Thumbnail;
pub use timestamp::Timestamp;
