//! Checkpoints, cutscenes and world-state objectives.

use dyom_bits::CutsceneBehaviour;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::ObjectiveBase;
use super::slots::{self, LegacySlots};
use crate::decode::{Decoder, Record};
use crate::error::DecodeErrorKind;
use crate::geometry::Position;
use crate::primitives::{CheckpointShape, CitizenBehaviourMode, RadarMarker, Weather};
use crate::references::{EntityRef, RefKind};

pub const MIN_CHECKPOINT_RADIUS: f32 = 0.2;
pub const MAX_CHECKPOINT_RADIUS: f32 = 6000.0;

/// Highest actor index a cutscene camera can follow.
pub const MAX_CUTSCENE_ACTOR: u8 = 99;

/// Reach a marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectiveCheckpoint {
    #[serde(flatten)]
    pub base: ObjectiveBase,
    /// Metres. The trigger diameter is twice this.
    pub radius: f32,
    pub shape: CheckpointShape,
    pub radar_marker: RadarMarker,
    pub text: String,
    /// Raw slot the legacy layout carries with no known meaning.
    pub unknown_1: i32,
    #[serde(flatten)]
    pub legacy: LegacySlots,
}

impl ObjectiveCheckpoint {
    pub(crate) fn decode(d: &mut Decoder, rec: &Record) -> Option<Self> {
        let base = ObjectiveBase::decode(d, rec);
        let radius = d.float_or(
            rec,
            "radius",
            Some(MIN_CHECKPOINT_RADIUS..=MAX_CHECKPOINT_RADIUS),
            2.0,
        );
        let shape = d.or(rec, "shape", CheckpointShape::default());
        let radar_marker = d.or(rec, "radar_marker", RadarMarker::YELLOW);
        let text = d.text_or(rec, "text", None);
        let unknown_1 = d.int_or(
            rec,
            "unknown_1",
            i64::from(i32::MIN)..=i64::from(i32::MAX),
            0,
        );
        let legacy = LegacySlots::decode(d, rec, slots::CHECKPOINT);
        Some(Self {
            base: base?,
            radius: radius?,
            shape: shape?,
            radar_marker: radar_marker?,
            text: text?,
            unknown_1: unknown_1?,
            legacy: legacy?,
        })
    }
}

/// A scripted camera shot from the base position towards `target`.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectiveCutscene {
    pub base: ObjectiveBase,
    /// Height of the editor icon, usually the camera height.
    pub position_icon_z: f32,
    pub target: Position,
    /// Milliseconds.
    pub duration: u32,
    pub behaviour: CutsceneBehaviour,
    /// Actor the camera tracks in the actor-relative camera modes.
    pub actor_idx: Option<u8>,
    /// Camera path, an id in the movements list.
    pub movement_id: Option<i32>,
    pub text: String,
    pub legacy: LegacySlots,
}

impl ObjectiveCutscene {
    pub fn references(&self) -> impl Iterator<Item = EntityRef> + '_ {
        let actor = self
            .actor_idx
            .filter(|_| self.behaviour.camera.is_actor_relative())
            .map(|actor| EntityRef::new("actor_idx", RefKind::Actor, i32::from(actor)));
        let movement = self
            .movement_id
            .map(|movement| EntityRef::new("movement_id", RefKind::Movement, movement));
        actor.into_iter().chain(movement)
    }

    pub(crate) fn decode(d: &mut Decoder, rec: &Record) -> Option<Self> {
        let base = ObjectiveBase::decode(d, rec);
        let position_icon_z = d.float_required(rec, "position_icon_z", None);
        let target_x = d.float_required(rec, "target_position_x", None);
        let target_y = d.float_required(rec, "target_position_y", None);
        let target_z = d.float_required(rec, "target_position_z", None);
        let duration = d.int_or(rec, "duration", 0..=i64::from(u32::MAX), 3000);
        let behaviour = d.or(rec, "behaviour", CutsceneBehaviour::default());
        let actor_idx = d.int_optional(rec, "actor_idx", 0..=i64::from(MAX_CUTSCENE_ACTOR));
        let movement_id =
            d.int_optional(rec, "movement_id", i64::from(i32::MIN)..=i64::from(i32::MAX));
        let text = d.text_or(rec, "text", None);
        let legacy = LegacySlots::decode(d, rec, slots::CUTSCENE);
        Some(Self {
            base: base?,
            position_icon_z: position_icon_z?,
            target: Position::new(target_x?, target_y?, target_z?),
            duration: duration?,
            behaviour: behaviour?,
            actor_idx: actor_idx?,
            movement_id: movement_id?,
            text: text?,
            legacy: legacy?,
        })
    }
}

impl Serialize for ObjectiveCutscene {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("position_x", &self.base.position.x)?;
        map.serialize_entry("position_y", &self.base.position.y)?;
        map.serialize_entry("position_z", &self.base.position.z)?;
        map.serialize_entry("direction", &self.base.direction)?;
        map.serialize_entry("interior", &self.base.interior)?;
        map.serialize_entry("position_icon_z", &self.position_icon_z)?;
        map.serialize_entry("target_position_x", &self.target.x)?;
        map.serialize_entry("target_position_y", &self.target.y)?;
        map.serialize_entry("target_position_z", &self.target.z)?;
        map.serialize_entry("duration", &self.duration)?;
        map.serialize_entry("behaviour", &self.behaviour)?;
        if let Some(actor_idx) = self.actor_idx {
            map.serialize_entry("actor_idx", &actor_idx)?;
        }
        if let Some(movement_id) = self.movement_id {
            map.serialize_entry("movement_id", &movement_id)?;
        }
        map.serialize_entry("text", &self.text)?;
        self.legacy.serialize_entries(&mut map)?;
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectiveWeather {
    #[serde(flatten)]
    pub base: ObjectiveBase,
    pub weather: Weather,
    #[serde(flatten)]
    pub legacy: LegacySlots,
}

impl ObjectiveWeather {
    pub(crate) fn decode(d: &mut Decoder, rec: &Record) -> Option<Self> {
        let base = ObjectiveBase::decode(d, rec);
        let weather = d.or(rec, "weather", Weather::default());
        let legacy = LegacySlots::decode(d, rec, slots::WORLD_STATE);
        Some(Self {
            base: base?,
            weather: weather?,
            legacy: legacy?,
        })
    }
}

/// Set the clock to `hour`:00.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectiveDayTime {
    #[serde(flatten)]
    pub base: ObjectiveBase,
    pub hour: u8,
    #[serde(flatten)]
    pub legacy: LegacySlots,
}

impl ObjectiveDayTime {
    pub(crate) fn decode(d: &mut Decoder, rec: &Record) -> Option<Self> {
        let base = ObjectiveBase::decode(d, rec);
        let hour = d.int_or(rec, "hour", 0..=23, 8);
        let legacy = LegacySlots::decode(d, rec, slots::SETTING);
        Some(Self {
            base: base?,
            hour: hour?,
            legacy: legacy?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectiveCitizenBehaviour {
    #[serde(flatten)]
    pub base: ObjectiveBase,
    pub mode: CitizenBehaviourMode,
    #[serde(flatten)]
    pub legacy: LegacySlots,
}

impl ObjectiveCitizenBehaviour {
    pub(crate) fn decode(d: &mut Decoder, rec: &Record) -> Option<Self> {
        let base = ObjectiveBase::decode(d, rec);
        let mode = d.or(rec, "mode", CitizenBehaviourMode::default());
        let legacy = LegacySlots::decode(d, rec, slots::WORLD_STATE);
        Some(Self {
            base: base?,
            mode: mode?,
            legacy: legacy?,
        })
    }
}

/// Set the wanted level and the band it may move in, 0..=6 stars.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectiveWantedLevel {
    #[serde(flatten)]
    pub base: ObjectiveBase,
    pub level_current: u8,
    pub level_min: u8,
    pub level_max: u8,
    #[serde(flatten)]
    pub legacy: LegacySlots,
}

impl ObjectiveWantedLevel {
    pub(crate) fn decode(d: &mut Decoder, rec: &Record) -> Option<Self> {
        let base = ObjectiveBase::decode(d, rec);
        let level_current = d.int_or(rec, "level_current", 0..=6, 0);
        let level_min = d.int_or(rec, "level_min", 0..=6, 0);
        let level_max = d.int_or(rec, "level_max", 0..=6, 6);
        let legacy = LegacySlots::decode(d, rec, slots::WANTED_LEVEL);
        let (level_min, level_max) = (level_min?, level_max?);
        if level_min > level_max {
            d.report(
                "level_min",
                DecodeErrorKind::Invalid(format!(
                    "minimum wanted level {level_min} exceeds maximum {level_max}"
                )),
            );
            return None;
        }
        Some(Self {
            base: base?,
            level_current: level_current?,
            level_min,
            level_max,
            legacy: legacy?,
        })
    }
}
