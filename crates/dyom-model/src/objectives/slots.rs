//! Padding slots of the legacy objective layout.
//!
//! Every objective record in the legacy file is a fixed block of integer,
//! float and string slots. Slots no variant assigns a meaning to are kept
//! here under their `unused_N` names so values found in old documents
//! survive a re-encode.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::decode::{Decoder, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    Int,
    Float,
    Text,
}

impl SlotKind {
    /// JSON type name, as used by the schema descriptors.
    pub const fn field_type(self) -> &'static str {
        match self {
            SlotKind::Int => "integer",
            SlotKind::Float => "number",
            SlotKind::Text => "string",
        }
    }

    /// Blank value as it appears in JSON.
    pub const fn default_json(self) -> &'static str {
        match self {
            SlotKind::Int => "0",
            SlotKind::Float => "0.0",
            SlotKind::Text => "\"\"",
        }
    }

    fn blank(self) -> SlotValue {
        match self {
            SlotKind::Int => SlotValue::Int(0),
            SlotKind::Float => SlotValue::Float(0.0),
            SlotKind::Text => SlotValue::Text(String::new()),
        }
    }
}

/// One named slot of a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub name: &'static str,
    pub kind: SlotKind,
}

const fn int(name: &'static str) -> Slot {
    Slot {
        name,
        kind: SlotKind::Int,
    }
}

const fn float(name: &'static str) -> Slot {
    Slot {
        name,
        kind: SlotKind::Float,
    }
}

const fn text(name: &'static str) -> Slot {
    Slot {
        name,
        kind: SlotKind::Text,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SlotValue {
    Int(i32),
    Float(f32),
    Text(String),
}

impl SlotValue {
    pub const fn kind(&self) -> SlotKind {
        match self {
            SlotValue::Int(_) => SlotKind::Int,
            SlotValue::Float(_) => SlotKind::Float,
            SlotValue::Text(_) => SlotKind::Text,
        }
    }

    fn is_blank(&self) -> bool {
        match self {
            SlotValue::Int(value) => *value == 0,
            SlotValue::Float(value) => *value == 0.0,
            SlotValue::Text(value) => value.is_empty(),
        }
    }
}

/// Values of one record's padding slots, in layout order.
#[derive(Debug, Clone, PartialEq)]
pub struct LegacySlots {
    layout: &'static [Slot],
    values: Vec<SlotValue>,
}

impl LegacySlots {
    /// Every slot of `layout` at its blank value.
    pub fn blank(layout: &'static [Slot]) -> Self {
        Self {
            layout,
            values: layout.iter().map(|slot| slot.kind.blank()).collect(),
        }
    }

    pub fn layout(&self) -> &'static [Slot] {
        self.layout
    }

    pub fn get(&self, name: &str) -> Option<&SlotValue> {
        self.position(name).map(|index| &self.values[index])
    }

    /// Overwrite a slot. Returns `false` when the layout has no slot of
    /// that name and kind.
    pub fn set(&mut self, name: &str, value: SlotValue) -> bool {
        match self.position(name) {
            Some(index) if self.layout[index].kind == value.kind() => {
                self.values[index] = value;
                true
            }
            _ => false,
        }
    }

    /// Whether every slot still holds its blank value.
    pub fn is_blank(&self) -> bool {
        self.values.iter().all(SlotValue::is_blank)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &SlotValue)> + '_ {
        self.layout.iter().map(|slot| slot.name).zip(&self.values)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.layout.iter().position(|slot| slot.name == name)
    }

    pub(crate) fn decode(d: &mut Decoder, rec: &Record, layout: &'static [Slot]) -> Option<Self> {
        let values: Vec<Option<SlotValue>> = layout
            .iter()
            .map(|slot| match slot.kind {
                SlotKind::Int => d
                    .int_or(rec, slot.name, i64::from(i32::MIN)..=i64::from(i32::MAX), 0)
                    .map(SlotValue::Int),
                SlotKind::Float => d.float_or(rec, slot.name, None, 0.0).map(SlotValue::Float),
                SlotKind::Text => d.text_or(rec, slot.name, None).map(SlotValue::Text),
            })
            .collect();
        let values = values.into_iter().collect::<Option<Vec<_>>>()?;
        Some(Self { layout, values })
    }

    /// Write every slot into a map that is being serialized.
    pub(crate) fn serialize_entries<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }
        Ok(())
    }
}

impl Serialize for LegacySlots {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        self.serialize_entries(&mut map)?;
        map.end()
    }
}

// =============================================================================
// Layouts
// =============================================================================

pub const CAR: &[Slot] = &[
    int("unused_1"),
    int("unused_2"),
    int("unused_3"),
    int("unused_4"),
];

pub const CHECKPOINT: &[Slot] = &[
    int("unused_1"),
    int("unused_2"),
    int("unused_3"),
    int("unused_4"),
    int("unused_5"),
    int("unused_6"),
];

pub const PICKUP: &[Slot] = &[
    float("unused_1"),
    int("unused_2"),
    int("unused_3"),
    int("unused_4"),
    int("unused_5"),
    int("unused_6"),
    float("unused_7"),
];

pub const ACTOR: &[Slot] = &[int("unused_1")];

pub const CUTSCENE: &[Slot] = &[
    int("unused_1"),
    int("unused_2"),
    int("unused_3"),
    int("unused_4"),
];

pub const PLAYER_TELEPORT: &[Slot] = &[
    int("unused_1"),
    int("unused_2"),
    int("unused_3"),
    int("unused_4"),
    int("unused_5"),
    int("unused_6"),
    text("unused_7"),
];

pub const COUNTDOWN: &[Slot] = &[
    float("unused_1"),
    int("unused_2"),
    int("unused_3"),
    int("unused_4"),
    int("unused_5"),
    int("unused_6"),
    int("unused_7"),
    int("unused_8"),
    int("unused_9"),
    int("unused_10"),
];

pub const PLAYER_TELEPORT_CAR: &[Slot] = &[int("unused_1"), int("unused_2"), int("unused_3")];

pub const TIMEOUT: &[Slot] = &[
    float("unused_1"),
    int("unused_2"),
    int("unused_3"),
    int("unused_4"),
    int("unused_5"),
    int("unused_6"),
    int("unused_7"),
    int("unused_8"),
    float("unused_9"),
];

/// Shared by weather and citizen behaviour.
pub const WORLD_STATE: &[Slot] = &[
    float("unused_1"),
    int("unused_2"),
    int("unused_3"),
    int("unused_4"),
    int("unused_5"),
    int("unused_6"),
    int("unused_7"),
    int("unused_8"),
    int("unused_9"),
    int("unused_10"),
    text("unused_11"),
];

/// Shared by day time, time limit and both money objectives.
pub const SETTING: &[Slot] = &[
    float("unused_1"),
    int("unused_2"),
    int("unused_3"),
    int("unused_4"),
    int("unused_5"),
    int("unused_6"),
    int("unused_7"),
    int("unused_8"),
    int("unused_9"),
    float("unused_10"),
    text("unused_11"),
];

pub const WANTED_LEVEL: &[Slot] = &[
    float("unused_1"),
    float("unused_2"),
    int("unused_3"),
    int("unused_4"),
    int("unused_5"),
    int("unused_6"),
    int("unused_7"),
    int("unused_8"),
    text("unused_9"),
];

/// Shared by timer start and player disarm.
pub const PLAIN: &[Slot] = &[
    float("unused_1"),
    int("unused_2"),
    int("unused_3"),
    int("unused_4"),
    int("unused_5"),
    int("unused_6"),
    int("unused_7"),
    int("unused_8"),
    int("unused_9"),
    int("unused_10"),
    int("unused_11"),
    text("unused_12"),
];

pub const PHONE_CALL: &[Slot] = &[
    float("unused_1"),
    int("unused_2"),
    int("unused_3"),
    int("unused_4"),
    int("unused_5"),
    int("unused_6"),
    int("unused_7"),
    int("unused_8"),
    int("unused_9"),
    float("unused_10"),
];

pub const OBJECT: &[Slot] = &[
    int("unused_1"),
    int("unused_2"),
    int("unused_3"),
    int("unused_4"),
    float("unused_5"),
];

pub const PLAYER_ANIMATION: &[Slot] = &[
    float("unused_1"),
    int("unused_2"),
    int("unused_3"),
    int("unused_4"),
    int("unused_5"),
    int("unused_6"),
    int("unused_7"),
    int("unused_8"),
    int("unused_9"),
    text("unused_10"),
];
