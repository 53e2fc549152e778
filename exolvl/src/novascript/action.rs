//! Script actions
//!
//! ```text
//! Action     = tag:u8 closed:bool wait:bool payload
//! payload    = fields of the ActionType variant, in declaration order
//! Vec<Action> fields nest further actions (Repeat, ConditionBlock, ...)
//! ```

use super::{FunctionCall, NovaValue};
use crate::codec::{Decode, Encode, LevelReader, LevelWriter};
use crate::error::{Error, Result};
use std::io::{Read, Write};

/// One statement in a script body
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Action {
    /// Collapsed in the editor
    pub closed: bool,
    /// Wait for the action to finish before running the next one
    pub wait: bool,
    pub action_type: ActionType,
}

impl Action {
    /// Expanded action that does not wait
    pub fn new(action_type: ActionType) -> Self {
        Self {
            closed: false,
            wait: false,
            action_type,
        }
    }

    /// Visit this action and every nested action depth-first.
    ///
    /// `depth` is 0 for `self`.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Action, usize)) {
        self.walk_at(0, visit);
    }

    fn walk_at<'a>(&'a self, depth: usize, visit: &mut impl FnMut(&'a Action, usize)) {
        visit(self, depth);
        for list in self.action_type.child_lists() {
            for child in list {
                child.walk_at(depth + 1, visit);
            }
        }
    }
}

impl Decode for Action {
    fn decode<R: Read>(reader: &mut LevelReader<R>) -> Result<Self> {
        let (tag, offset) = reader.read_tag()?;
        if !ActionType::is_known_tag(tag) {
            return Err(Error::InvalidActionType { tag, offset });
        }

        let closed = reader.read_bool()?;
        let wait = reader.read_bool()?;
        let action_type = reader.nested(|reader| ActionType::decode_payload(tag, offset, reader))?;

        Ok(Self {
            closed,
            wait,
            action_type,
        })
    }
}

impl Encode for Action {
    fn encode<W: Write>(&self, writer: &mut LevelWriter<W>) -> Result<()> {
        self.action_type.tag().encode(writer)?;
        writer.write_bool(self.closed)?;
        writer.write_bool(self.wait)?;
        writer.nested(|writer| self.action_type.encode_payload(writer))
    }
}

macro_rules! action_types {
    ($(
        $name:ident = $tag:literal $({
            $( $field:ident : $ty:ty ),* $(,)?
        })?
    ),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum ActionType {
            $( $name $({ $( $field: $ty, )* })?, )*
        }

        impl ActionType {
            /// Every valid discriminant, in table order
            pub const TAGS: &'static [u8] = &[$($tag),*];

            /// Wire discriminant of this variant
            pub const fn tag(&self) -> u8 {
                match self {
                    $( Self::$name { .. } => $tag, )*
                }
            }

            /// Variant name, for logs and diagnostics
            pub const fn name(&self) -> &'static str {
                match self {
                    $( Self::$name { .. } => stringify!($name), )*
                }
            }

            /// Whether `tag` names an action in this table
            pub const fn is_known_tag(tag: u8) -> bool {
                matches!(tag, $( $tag )|*)
            }

            // One non-inlined frame per variant, on both paths. Nested action
            // lists recurse through these and must stay shallow in debug builds.
            fn decode_payload<R: Read>(
                tag: u8,
                offset: u64,
                reader: &mut LevelReader<R>,
            ) -> Result<Self> {
                match tag {
                    $(
                        $tag => {
                            #[inline(never)]
                            #[allow(unused_variables)]
                            fn decode_variant<R: Read>(
                                reader: &mut LevelReader<R>,
                            ) -> Result<ActionType> {
                                Ok(ActionType::$name $({
                                    $( $field: <$ty as Decode>::decode(reader)?, )*
                                })?)
                            }
                            decode_variant(reader)
                        }
                    )*
                    tag => Err(Error::InvalidActionType { tag, offset }),
                }
            }

            fn encode_payload<W: Write>(&self, writer: &mut LevelWriter<W>) -> Result<()> {
                match self {
                    $(
                        Self::$name $({ $( $field, )* })? => {
                            #[inline(never)]
                            #[allow(unused_variables)]
                            fn encode_variant<W: Write>(
                                writer: &mut LevelWriter<W>,
                                $($( $field: &$ty, )*)?
                            ) -> Result<()> {
                                $($( $field.encode(writer)?; )*)?
                                Ok(())
                            }
                            encode_variant(writer, $($( $field, )*)?)
                        }
                    )*
                }
            }

            #[cfg(test)]
            pub(crate) fn with_default_payload(tag: u8) -> Option<Self> {
                match tag {
                    $(
                        $tag => Some(Self::$name $({
                            $( $field: Default::default(), )*
                        })?),
                    )*
                    _ => None,
                }
            }
        }
    };
}

action_types! {
    Repeat = 0 { actions: Vec<Action>, count: NovaValue },
    RepeatWhile = 1 { actions: Vec<Action>, condition: NovaValue },
    ConditionBlock = 2 {
        if_actions: Vec<Action>,
        else_actions: Vec<Action>,
        condition: NovaValue,
    },
    Wait = 3 { duration: NovaValue },
    WaitFrames = 4 { frames: NovaValue },
    Move = 5 {
        target_objects: NovaValue,
        position: NovaValue,
        global: NovaValue,
        duration: NovaValue,
        easing: NovaValue,
    },
    Scale = 6 {
        target_objects: NovaValue,
        scale: NovaValue,
        duration: NovaValue,
        easing: NovaValue,
    },
    Rotate = 7 {
        target_objects: NovaValue,
        rotation: NovaValue,
        shortest_path: NovaValue,
        global: NovaValue,
        duration: NovaValue,
        easing: NovaValue,
    },
    RotateAround = 8 {
        target_objects: NovaValue,
        pivot: NovaValue,
        rotation: NovaValue,
        rotate_target: NovaValue,
        duration: NovaValue,
        easing: NovaValue,
    },
    SetVariable = 9 { variable: i32, value: Option<NovaValue> },
    ResetVariable = 10 { variable: i32 },
    ResetObject = 11 { target_objects: NovaValue },
    SetColour = 12 {
        target_objects: NovaValue,
        colour: NovaValue,
        channel: NovaValue,
        duration: NovaValue,
        easing: NovaValue,
    },
    SetTransparency = 13 {
        target_objects: NovaValue,
        transparency: NovaValue,
        channel: NovaValue,
        duration: NovaValue,
        easing: NovaValue,
    },
    SetSecondaryColour = 14 {
        target_objects: NovaValue,
        colour: NovaValue,
        duration: NovaValue,
        easing: NovaValue,
    },
    SetSecondaryTransparency = 15 {
        target_objects: NovaValue,
        transparency: NovaValue,
        duration: NovaValue,
        easing: NovaValue,
    },
    SetBorderColour = 16 {
        target_objects: NovaValue,
        colour: NovaValue,
        duration: NovaValue,
        easing: NovaValue,
    },
    SetBorderTransparency = 17 {
        target_objects: NovaValue,
        transparency: NovaValue,
        duration: NovaValue,
        easing: NovaValue,
    },
    SetSprite = 18 { target_objects: NovaValue, sprite: NovaValue },
    SetText = 19 { target_objects: NovaValue, text: NovaValue },
    SetEnabled = 20 { target_objects: NovaValue, enabled: NovaValue },
    Activate = 21 { target_objects: NovaValue },
    Deactivate = 22 { target_objects: NovaValue },
    Damage = 23 { target_objects: NovaValue, damage: NovaValue },
    Kill = 24 { target_objects: NovaValue },
    GameFinish = 25,
    CameraPan = 26 { position: NovaValue, duration: NovaValue, easing: NovaValue },
    CameraFollowPlayer = 27,
    CameraZoom = 28 { viewport_size: NovaValue, duration: NovaValue, easing: NovaValue },
    CameraZoomReset = 29 { duration: NovaValue, easing: NovaValue },
    CameraOffset = 30 { offset: NovaValue, duration: NovaValue, easing: NovaValue },
    CameraOffsetReset = 31 { duration: NovaValue, easing: NovaValue },
    CameraShake = 32 {
        strength: NovaValue,
        roughness: NovaValue,
        fade_in: NovaValue,
        fade_out: NovaValue,
        duration: NovaValue,
    },
    PlaySound = 33 { sound: NovaValue, volume: NovaValue, pitch: NovaValue },
    PlayMusic = 34 { music: NovaValue, volume: NovaValue, pitch: NovaValue },
    SetDirection = 35 { target_objects: NovaValue, direction: NovaValue },
    SetGravity = 36 { target_objects: NovaValue, gravity: NovaValue },
    SetVelocity = 37 { target_objects: NovaValue, velocity: NovaValue },
    SetCinematic = 38 { enabled: NovaValue },
    SetInputEnabled = 39 { enabled: NovaValue },
    SetTimerEnabled = 40 { enabled: NovaValue },
    GameTextShow = 41 { text: NovaValue, duration: NovaValue },
    DialogueShow = 42 { text: NovaValue, position: NovaValue, reverse_direction: NovaValue },
    StopScript = 43 { script: NovaValue },
    TransitionIn = 44 {
        transition: NovaValue,
        colour: NovaValue,
        duration: NovaValue,
        easing: NovaValue,
    },
    TransitionOut = 45 {
        transition: NovaValue,
        colour: NovaValue,
        duration: NovaValue,
        easing: NovaValue,
    },
    TimeScale = 46 { time_scale: NovaValue, duration: NovaValue, easing: NovaValue },
    RunFunction = 47 { function: FunctionCall },
    SetVariableOverTime = 48 {
        variable: i32,
        value: Option<NovaValue>,
        duration: NovaValue,
        easing: NovaValue,
    },
    RepeatForEachObject = 49 { target_objects: NovaValue, actions: Vec<Action> },
    StopSound = 50 { sound_instance: NovaValue, fade_out: NovaValue },
    PlayParticleSystem = 51 { target_objects: NovaValue },
    StopParticleSystem = 52 { target_objects: NovaValue, clear: NovaValue },
}

impl ActionType {
    /// Nested action lists owned by this action, in wire order
    pub fn child_lists(&self) -> Vec<&[Action]> {
        match self {
            Self::Repeat { actions, .. }
            | Self::RepeatWhile { actions, .. }
            | Self::RepeatForEachObject { actions, .. } => vec![actions.as_slice()],
            Self::ConditionBlock {
                if_actions,
                else_actions,
                ..
            } => vec![if_actions.as_slice(), else_actions.as_slice()],
            _ => Vec::new(),
        }
    }
}
