//! Objectives that spawn an entity for the player to deal with.

use dyom_bits::{ActorFlags, CarFlags, PickupObjectiveFlags};
use serde::Serialize;

use super::ObjectiveBase;
use super::slots::{self, LegacySlots};
use crate::actor::{AnimationInfo, decode_animation};
use crate::decode::{Decoder, Record};
use crate::geometry::{MAX_DEGREES, Rotation};
use crate::primitives::{
    Animation, CarModel, ObjectInteraction, ObjectModel, PaintColor, RadarMarker, Skin, Weapon,
};
use crate::references::EntityRef;

/// Enter (or, with `must_destroy`, destroy) a vehicle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectiveCar {
    #[serde(flatten)]
    pub base: ObjectiveBase,
    pub car_id: CarModel,
    pub color_primary: PaintColor,
    pub color_secondary: PaintColor,
    pub health: u16,
    pub radar_marker: RadarMarker,
    pub flags: CarFlags,
    pub text: String,
    #[serde(flatten)]
    pub legacy: LegacySlots,
}

impl ObjectiveCar {
    pub(crate) fn decode(d: &mut Decoder, rec: &Record) -> Option<Self> {
        let base = ObjectiveBase::decode(d, rec);
        let car_id = d.or(rec, "car_id", DEFAULT_CAR);
        let color_primary = d.or(rec, "color_primary", PaintColor::default());
        let color_secondary = d.or(rec, "color_secondary", DEFAULT_SECONDARY_COLOR);
        let health = d.int_or(rec, "health", 0..=1000, 1000);
        let radar_marker = d.or(rec, "radar_marker", RadarMarker::BLUE);
        let flags = d.or(rec, "flags", CarFlags::default());
        let text = d.text_or(rec, "text", None);
        let legacy = LegacySlots::decode(d, rec, slots::CAR);
        Some(Self {
            base: base?,
            car_id: car_id?,
            color_primary: color_primary?,
            color_secondary: color_secondary?,
            health: health?,
            radar_marker: radar_marker?,
            flags: flags?,
            text: text?,
            legacy: legacy?,
        })
    }
}

/// Collect a pickup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectivePickup {
    #[serde(flatten)]
    pub base: ObjectiveBase,
    pub object_id: ObjectModel,
    pub ammo: u32,
    pub radar_marker: RadarMarker,
    pub flags: PickupObjectiveFlags,
    pub text: String,
    #[serde(flatten)]
    pub legacy: LegacySlots,
}

impl ObjectivePickup {
    pub(crate) fn decode(d: &mut Decoder, rec: &Record) -> Option<Self> {
        let base = ObjectiveBase::decode(d, rec);
        let object_id = d.or(rec, "object_id", DEFAULT_PICKUP_MODEL);
        let ammo = d.int_or(rec, "ammo", 0..=i64::from(u32::MAX), 0);
        let radar_marker = d.or(rec, "radar_marker", RadarMarker::GREEN);
        let flags = d.or(rec, "flags", PickupObjectiveFlags::default());
        let text = d.text_or(rec, "text", None);
        let legacy = LegacySlots::decode(d, rec, slots::PICKUP);
        Some(Self {
            base: base?,
            object_id: object_id?,
            ammo: ammo?,
            radar_marker: radar_marker?,
            flags: flags?,
            text: text?,
            legacy: legacy?,
        })
    }
}

/// Kill, protect or escort an actor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectiveActor {
    #[serde(flatten)]
    pub base: ObjectiveBase,
    pub skin: Skin,
    pub weapon: Weapon,
    pub ammo: u32,
    pub health: u16,
    pub accuracy: u8,
    pub radar_marker: RadarMarker,
    pub flags: ActorFlags,
    pub animation: Animation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation_info: Option<AnimationInfo>,
    pub text: String,
    #[serde(flatten)]
    pub legacy: LegacySlots,
}

impl ObjectiveActor {
    pub fn references(&self) -> impl Iterator<Item = EntityRef> + '_ {
        self.animation_info.iter().filter_map(AnimationInfo::reference)
    }

    pub(crate) fn decode(d: &mut Decoder, rec: &Record) -> Option<Self> {
        let base = ObjectiveBase::decode(d, rec);
        let skin = d.or(rec, "skin", DEFAULT_SKIN);
        let weapon = d.or(rec, "weapon", Weapon::default());
        let ammo = d.int_or(rec, "ammo", 0..=i64::from(u32::MAX), 0);
        let health = d.int_or(rec, "health", 0..=200, 100);
        let accuracy = d.int_or(rec, "accuracy", 0..=100, 50);
        let radar_marker = d.or(rec, "radar_marker", RadarMarker::RED);
        let flags = d.or(rec, "flags", ActorFlags::default());
        let animation = decode_animation(d, rec, Animation::NONE);
        let text = d.text_or(rec, "text", None);
        let legacy = LegacySlots::decode(d, rec, slots::ACTOR);
        let (animation, animation_info) = animation?;
        Some(Self {
            base: base?,
            skin: skin?,
            weapon: weapon?,
            ammo: ammo?,
            health: health?,
            accuracy: accuracy?,
            radar_marker: radar_marker?,
            flags: flags?,
            animation,
            animation_info,
            text: text?,
            legacy: legacy?,
        })
    }
}

/// Touch, damage, photograph or shoot an object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectiveObject {
    #[serde(flatten)]
    pub base: ObjectiveBase,
    pub object_id: ObjectModel,
    #[serde(flatten)]
    pub rotation: Rotation,
    pub objective: ObjectInteraction,
    pub radar_marker: RadarMarker,
    pub text: String,
    #[serde(flatten)]
    pub legacy: LegacySlots,
}

impl ObjectiveObject {
    pub(crate) fn decode(d: &mut Decoder, rec: &Record) -> Option<Self> {
        let base = ObjectiveBase::decode(d, rec);
        let object_id = d.or(rec, "object_id", DEFAULT_OBJECT_MODEL);
        let rotation = d.rotation(rec, Some(0.0..=MAX_DEGREES));
        let objective = d.or(rec, "objective", ObjectInteraction::default());
        let radar_marker = d.or(rec, "radar_marker", RadarMarker::BLUE);
        let text = d.text_or(rec, "text", None);
        let legacy = LegacySlots::decode(d, rec, slots::OBJECT);
        Some(Self {
            base: base?,
            object_id: object_id?,
            rotation: rotation?,
            objective: objective?,
            radar_marker: radar_marker?,
            text: text?,
            legacy: legacy?,
        })
    }
}

const DEFAULT_CAR: CarModel = CarModel::new_const(526);
const DEFAULT_SECONDARY_COLOR: PaintColor = PaintColor::new_const(36);
const DEFAULT_SKIN: Skin = Skin::new_const(102);
const DEFAULT_PICKUP_MODEL: ObjectModel = ObjectModel::new_const(1210);
const DEFAULT_OBJECT_MODEL: ObjectModel = ObjectModel::new_const(1221);
