//! Level data block
//!
//! The part of a level the game actually plays. Layout (in order):
//!
//! ```text
//! level_id, level_version, nova_level
//! tile layers (6 x Vec<i32>)
//! objects, layers, prefabs, brushes, patterns
//! colour_palette                     (v17+)
//! medal times, laps, center_camera
//! scripts (legacy ids), nova_scripts, global_variables
//! theme, background colour, 4 reserved bytes
//! copied-terrain settings
//! music, rule toggles, gravity
//! ```

use super::{Brush, Colour, Layer, Object, Pattern, Prefab, Theme, Vec2};
use crate::codec::{Decode, Encode, LevelReader, LevelWriter, wire_struct};
use crate::error::Result;
use crate::novascript::{NovaScript, Variable};
use crate::version::{FieldResolver, VersionedField};
use std::io::{Read, Write};
use uuid::Uuid;

wire_struct! {
    /// Tile id grids, back to front
    #[derive(Debug, Clone, Default, PartialEq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct TileLayers {
        pub under_decoration: Vec<i32>,
        pub background_decoration: Vec<i32>,
        pub terrain: Vec<i32>,
        pub floating_zone: Vec<i32>,
        pub object: Vec<i32>,
        pub foreground_decoration: Vec<i32>,
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelData {
    pub level_id: Uuid,
    pub level_version: i32,
    pub nova_level: bool,
    pub tiles: TileLayers,
    pub objects: Vec<Object>,
    pub layers: Vec<Layer>,
    pub prefabs: Vec<Prefab>,
    pub brushes: Vec<Brush>,
    pub patterns: Vec<Pattern>,
    /// Empty when read from a level older than v17
    pub colour_palette: Vec<Colour>,
    pub author_time: i64,
    pub author_lap_times: Vec<i64>,
    pub silver_medal_time: i64,
    pub gold_medal_time: i64,
    pub laps: i32,
    pub center_camera: bool,
    /// Legacy editor script ids
    pub scripts: Vec<i32>,
    pub nova_scripts: Vec<NovaScript>,
    pub global_variables: Vec<Variable>,
    pub theme: Theme,
    pub custom_background_colour: Colour,
    /// Meaning unknown, preserved verbatim
    pub reserved: [u8; 4],
    pub custom_terrain_pattern_id: i32,
    pub custom_terrain_pattern_tiling: Vec2,
    pub custom_terrain_pattern_offset: Vec2,
    pub custom_terrain_colour: Colour,
    pub custom_terrain_secondary_colour: Colour,
    pub custom_terrain_blend_mode: i32,
    pub custom_terrain_border_colour: Colour,
    pub custom_terrain_border_thickness: f32,
    pub custom_terrain_border_corner_radius: f32,
    pub custom_terrain_round_reflex_angles: bool,
    pub custom_terrain_round_collider: bool,
    pub custom_terrain_friction: f32,
    pub default_music: bool,
    pub music_ids: Vec<String>,
    pub allow_direction_change: bool,
    pub disable_replays: bool,
    pub disable_revive_pads: bool,
    pub disable_start_animation: bool,
    pub gravity: Vec2,
}

impl LevelData {
    /// Default gravity for new levels
    pub const DEFAULT_GRAVITY: Vec2 = Vec2::new(0.0, -75.0);

    /// Empty level data as the editor creates it
    pub fn new(level_id: Uuid) -> Self {
        Self {
            level_id,
            ..Self::default()
        }
    }

    /// Object by entity id
    pub fn object(&self, entity_id: i32) -> Option<&Object> {
        self.objects.iter().find(|object| object.entity_id == entity_id)
    }

    /// Layer by id
    pub fn layer(&self, layer_id: i32) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.layer_id == layer_id)
    }

    /// Prefab by id
    pub fn prefab(&self, prefab_id: i32) -> Option<&Prefab> {
        self.prefabs.iter().find(|prefab| prefab.prefab_id == prefab_id)
    }

    /// Brush by id
    pub fn brush(&self, brush_id: i32) -> Option<&Brush> {
        self.brushes.iter().find(|brush| brush.brush_id == brush_id)
    }

    /// Pattern by id
    pub fn pattern(&self, pattern_id: i32) -> Option<&Pattern> {
        self.patterns.iter().find(|pattern| pattern.pattern_id == pattern_id)
    }

    /// NovaScript by id
    pub fn script(&self, script_id: i32) -> Option<&NovaScript> {
        self.nova_scripts.iter().find(|script| script.script_id == script_id)
    }

    /// Global variable by id
    pub fn global_variable(&self, variable_id: i32) -> Option<&Variable> {
        self.global_variables
            .iter()
            .find(|variable| variable.variable_id == variable_id)
    }

    /// Objects placed on a layer, in the layer's child order
    pub fn objects_in_layer(&self, layer_id: i32) -> Vec<&Object> {
        self.layer(layer_id)
            .map(|layer| layer.children.iter().filter_map(|&id| self.object(id)).collect())
            .unwrap_or_default()
    }

    /// Read the block using the field table of `resolver`
    pub fn decode_versioned<R: Read>(
        reader: &mut LevelReader<R>,
        resolver: &FieldResolver,
    ) -> Result<Self> {
        let level_id = Uuid::decode(reader)?;
        let level_version = i32::decode(reader)?;
        let nova_level = bool::decode(reader)?;
        let tiles = TileLayers::decode(reader)?;
        let objects = Vec::<Object>::decode(reader)?;
        let layers = Vec::<Layer>::decode(reader)?;
        let prefabs = Vec::<Prefab>::decode(reader)?;
        let brushes = Vec::<Brush>::decode(reader)?;
        let patterns = Vec::<Pattern>::decode(reader)?;
        let colour_palette: Vec<Colour> =
            resolver.read_or_default(VersionedField::ColourPalette, reader)?;

        tracing::debug!(
            objects = objects.len(),
            layers = layers.len(),
            prefabs = prefabs.len(),
            patterns = patterns.len(),
            offset = reader.position(),
            "read level entities"
        );

        Ok(Self {
            level_id,
            level_version,
            nova_level,
            tiles,
            objects,
            layers,
            prefabs,
            brushes,
            patterns,
            colour_palette,
            author_time: Decode::decode(reader)?,
            author_lap_times: Decode::decode(reader)?,
            silver_medal_time: Decode::decode(reader)?,
            gold_medal_time: Decode::decode(reader)?,
            laps: Decode::decode(reader)?,
            center_camera: Decode::decode(reader)?,
            scripts: Decode::decode(reader)?,
            nova_scripts: Decode::decode(reader)?,
            global_variables: Decode::decode(reader)?,
            theme: Decode::decode(reader)?,
            custom_background_colour: Decode::decode(reader)?,
            reserved: Decode::decode(reader)?,
            custom_terrain_pattern_id: Decode::decode(reader)?,
            custom_terrain_pattern_tiling: Decode::decode(reader)?,
            custom_terrain_pattern_offset: Decode::decode(reader)?,
            custom_terrain_colour: Decode::decode(reader)?,
            custom_terrain_secondary_colour: Decode::decode(reader)?,
            custom_terrain_blend_mode: Decode::decode(reader)?,
            custom_terrain_border_colour: Decode::decode(reader)?,
            custom_terrain_border_thickness: Decode::decode(reader)?,
            custom_terrain_border_corner_radius: Decode::decode(reader)?,
            custom_terrain_round_reflex_angles: Decode::decode(reader)?,
            custom_terrain_round_collider: Decode::decode(reader)?,
            custom_terrain_friction: Decode::decode(reader)?,
            default_music: Decode::decode(reader)?,
            music_ids: Decode::decode(reader)?,
            allow_direction_change: Decode::decode(reader)?,
            disable_replays: Decode::decode(reader)?,
            disable_revive_pads: Decode::decode(reader)?,
            disable_start_animation: Decode::decode(reader)?,
            gravity: Decode::decode(reader)?,
        })
    }

    /// Write the block using the field table of `resolver`
    pub fn encode_versioned<W: Write>(
        &self,
        writer: &mut LevelWriter<W>,
        resolver: &FieldResolver,
    ) -> Result<()> {
        self.level_id.encode(writer)?;
        self.level_version.encode(writer)?;
        self.nova_level.encode(writer)?;
        self.tiles.encode(writer)?;
        self.objects.encode(writer)?;
        self.layers.encode(writer)?;
        self.prefabs.encode(writer)?;
        self.brushes.encode(writer)?;
        self.patterns.encode(writer)?;
        resolver.write_if_present(VersionedField::ColourPalette, &self.colour_palette, writer)?;
        self.author_time.encode(writer)?;
        self.author_lap_times.encode(writer)?;
        self.silver_medal_time.encode(writer)?;
        self.gold_medal_time.encode(writer)?;
        self.laps.encode(writer)?;
        self.center_camera.encode(writer)?;
        self.scripts.encode(writer)?;
        self.nova_scripts.encode(writer)?;
        self.global_variables.encode(writer)?;
        self.theme.encode(writer)?;
        self.custom_background_colour.encode(writer)?;
        self.reserved.encode(writer)?;
        self.custom_terrain_pattern_id.encode(writer)?;
        self.custom_terrain_pattern_tiling.encode(writer)?;
        self.custom_terrain_pattern_offset.encode(writer)?;
        self.custom_terrain_colour.encode(writer)?;
        self.custom_terrain_secondary_colour.encode(writer)?;
        self.custom_terrain_blend_mode.encode(writer)?;
        self.custom_terrain_border_colour.encode(writer)?;
        self.custom_terrain_border_thickness.encode(writer)?;
        self.custom_terrain_border_corner_radius.encode(writer)?;
        self.custom_terrain_round_reflex_angles.encode(writer)?;
        self.custom_terrain_round_collider.encode(writer)?;
        self.custom_terrain_friction.encode(writer)?;
        self.default_music.encode(writer)?;
        self.music_ids.encode(writer)?;
        self.allow_direction_change.encode(writer)?;
        self.disable_replays.encode(writer)?;
        self.disable_revive_pads.encode(writer)?;
        self.disable_start_animation.encode(writer)?;
        self.gravity.encode(writer)?;
        Ok(())
    }
}

impl Default for LevelData {
    fn default() -> Self {
        Self {
            level_id: Uuid::nil(),
            level_version: 1,
            nova_level: true,
            tiles: TileLayers::default(),
            objects: Vec::new(),
            layers: Vec::new(),
            prefabs: Vec::new(),
            brushes: Vec::new(),
            patterns: Vec::new(),
            colour_palette: Vec::new(),
            author_time: 0,
            author_lap_times: Vec::new(),
            silver_medal_time: 0,
            gold_medal_time: 0,
            laps: 1,
            center_camera: false,
            scripts: Vec::new(),
            nova_scripts: Vec::new(),
            global_variables: Vec::new(),
            theme: Theme::default(),
            custom_background_colour: Colour::default(),
            reserved: [0; 4],
            custom_terrain_pattern_id: 0,
            custom_terrain_pattern_tiling: Vec2::ZERO,
            custom_terrain_pattern_offset: Vec2::ZERO,
            custom_terrain_colour: Colour::default(),
            custom_terrain_secondary_colour: Colour::default(),
            custom_terrain_blend_mode: 0,
            custom_terrain_border_colour: Colour::default(),
            custom_terrain_border_thickness: 0.0,
            custom_terrain_border_corner_radius: 0.0,
            custom_terrain_round_reflex_angles: false,
            custom_terrain_round_collider: false,
            custom_terrain_friction: 0.0,
            default_music: true,
            music_ids: Vec::new(),
            allow_direction_change: false,
            disable_replays: false,
            disable_revive_pads: false,
            disable_start_animation: false,
            gravity: Self::DEFAULT_GRAVITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::FormatVersion;

    fn sample() -> LevelData {
        let mut data = LevelData::new(Uuid::from_u128(7));
        data.objects = vec![
            Object { entity_id: 1, in_layer: 10, ..Object::default() },
            Object { entity_id: 2, in_layer: 10, ..Object::default() },
        ];
        data.layers = vec![Layer {
            layer_id: 10,
            layer_name: "front".to_string(),
            children: vec![2, 1, 99],
            ..Layer::default()
        }];
        data.colour_palette = vec![Colour::WHITE, Colour::rgb(1.0, 0.0, 0.0)];
        data.music_ids = vec!["track-a".to_string()];
        data.reserved = [1, 2, 3, 4];
        data
    }

    fn encode(data: &LevelData, version: FormatVersion) -> Vec<u8> {
        let mut writer = LevelWriter::new(Vec::new());
        data.encode_versioned(&mut writer, &FieldResolver::new(version))
            .unwrap();
        writer.into_inner()
    }

    fn decode(bytes: &[u8], version: FormatVersion) -> LevelData {
        let mut reader = LevelReader::new(bytes);
        let data = LevelData::decode_versioned(&mut reader, &FieldResolver::new(version)).unwrap();
        assert_eq!(reader.position() as usize, bytes.len());
        data
    }

    #[test]
    fn test_current_version_round_trip() {
        let data = sample();
        let bytes = encode(&data, FormatVersion::CURRENT);
        assert_eq!(decode(&bytes, FormatVersion::CURRENT), data);
    }

    #[test]
    fn test_palette_dropped_before_v17() {
        let data = sample();
        let current = encode(&data, FormatVersion::V17);
        let legacy = encode(&data, FormatVersion::V16);

        // varint count + two colours
        assert_eq!(current.len() - legacy.len(), 1 + 2 * 16);

        let decoded = decode(&legacy, FormatVersion::V16);
        assert!(decoded.colour_palette.is_empty());
        assert_eq!(decoded.objects, data.objects);
        assert_eq!(decoded.gravity, data.gravity);
    }

    #[test]
    fn test_lookups() {
        let data = sample();
        assert_eq!(data.object(2).map(|o| o.entity_id), Some(2));
        assert!(data.object(3).is_none());
        assert_eq!(data.layer(10).map(|l| l.layer_name.as_str()), Some("front"));

        let ids: Vec<_> = data.objects_in_layer(10).iter().map(|o| o.entity_id).collect();
        assert_eq!(ids, [2, 1]);
        assert!(data.objects_in_layer(11).is_empty());
    }

    #[test]
    fn test_defaults_match_new_editor_level() {
        let data = LevelData::default();
        assert_eq!(data.laps, 1);
        assert!(data.default_music);
        assert_eq!(data.gravity, Vec2::new(0.0, -75.0));
        assert_eq!(data.theme, Theme::Mountains);

        // custom terrain settings start zeroed, colours opaque black
        assert_eq!(data.custom_terrain_pattern_tiling, Vec2::ZERO);
        assert_eq!(data.custom_terrain_pattern_offset, Vec2::ZERO);
        assert_eq!(data.custom_terrain_colour, Colour::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(data.custom_background_colour, Colour::BLACK);
    }
}
