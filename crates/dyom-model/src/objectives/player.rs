//! Objectives that act on the player directly.

use dyom_bits::CarFlags;
use serde::Serialize;

use super::ObjectiveBase;
use super::slots::{self, LegacySlots};
use crate::actor::{AnimationInfo, decode_animation};
use crate::decode::{Decoder, Record};
use crate::primitives::{Animation, CarModel, PaintColor, RadarMarker, Skin, VehicleSeat, Weapon};
use crate::references::EntityRef;

/// Lowest amount a money objective accepts.
pub const MIN_MONEY: i32 = -999_999_999;

const DEFAULT_TELEPORT_CAR: CarModel = CarModel::new_const(405);
const DEFAULT_SECONDARY_COLOR: PaintColor = PaintColor::new_const(36);
const DEFAULT_MONEY: i32 = 500;

/// Move the player, optionally changing skin, weapon and health.
///
/// Zero `skin` and `weapon` keep the current ones.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectivePlayerTeleport {
    #[serde(flatten)]
    pub base: ObjectiveBase,
    pub skin: Skin,
    pub weapon: Weapon,
    pub ammo: u32,
    pub health: u16,
    #[serde(flatten)]
    pub legacy: LegacySlots,
}

impl ObjectivePlayerTeleport {
    pub(crate) fn decode(d: &mut Decoder, rec: &Record) -> Option<Self> {
        let base = ObjectiveBase::decode(d, rec);
        let skin = d.or(rec, "skin", Skin::default());
        let weapon = d.or(rec, "weapon", Weapon::default());
        let ammo = d.int_or(rec, "ammo", 0..=i64::from(u32::MAX), 1);
        let health = d.int_or(rec, "health", 0..=200, 100);
        let legacy = LegacySlots::decode(d, rec, slots::PLAYER_TELEPORT);
        Some(Self {
            base: base?,
            skin: skin?,
            weapon: weapon?,
            ammo: ammo?,
            health: health?,
            legacy: legacy?,
        })
    }
}

/// Put the player into a freshly spawned vehicle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectivePlayerTeleportCar {
    #[serde(flatten)]
    pub base: ObjectiveBase,
    pub car_id: CarModel,
    pub color_primary: PaintColor,
    pub color_secondary: PaintColor,
    pub health: u16,
    pub seat: VehicleSeat,
    pub radar_marker: RadarMarker,
    pub flags: CarFlags,
    pub text: String,
    #[serde(flatten)]
    pub legacy: LegacySlots,
}

impl ObjectivePlayerTeleportCar {
    pub(crate) fn decode(d: &mut Decoder, rec: &Record) -> Option<Self> {
        let base = ObjectiveBase::decode(d, rec);
        let car_id = d.or(rec, "car_id", DEFAULT_TELEPORT_CAR);
        let color_primary = d.or(rec, "color_primary", PaintColor::default());
        let color_secondary = d.or(rec, "color_secondary", DEFAULT_SECONDARY_COLOR);
        let health = d.int_or(rec, "health", 0..=1000, 1000);
        let seat = d.or(rec, "seat", VehicleSeat::default());
        let radar_marker = d.or(rec, "radar_marker", RadarMarker::NONE);
        let flags = d.or(rec, "flags", CarFlags::default());
        let text = d.text_or(rec, "text", None);
        let legacy = LegacySlots::decode(d, rec, slots::PLAYER_TELEPORT_CAR);
        Some(Self {
            base: base?,
            car_id: car_id?,
            color_primary: color_primary?,
            color_secondary: color_secondary?,
            health: health?,
            seat: seat?,
            radar_marker: radar_marker?,
            flags: flags?,
            text: text?,
            legacy: legacy?,
        })
    }
}

/// Take every weapon away from the player.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectivePlayerDisarm {
    #[serde(flatten)]
    pub base: ObjectiveBase,
    #[serde(flatten)]
    pub legacy: LegacySlots,
}

impl ObjectivePlayerDisarm {
    pub(crate) fn decode(d: &mut Decoder, rec: &Record) -> Option<Self> {
        let base = ObjectiveBase::decode(d, rec);
        let legacy = LegacySlots::decode(d, rec, slots::PLAIN);
        Some(Self {
            base: base?,
            legacy: legacy?,
        })
    }
}

/// Play an animation on the player.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectivePlayerAnimation {
    #[serde(flatten)]
    pub base: ObjectiveBase,
    pub animation: Animation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation_info: Option<AnimationInfo>,
    #[serde(flatten)]
    pub legacy: LegacySlots,
}

impl ObjectivePlayerAnimation {
    pub fn references(&self) -> impl Iterator<Item = EntityRef> + '_ {
        self.animation_info.iter().filter_map(AnimationInfo::reference)
    }

    pub(crate) fn decode(d: &mut Decoder, rec: &Record) -> Option<Self> {
        let base = ObjectiveBase::decode(d, rec);
        let animation = decode_animation(d, rec, Animation::NONE);
        let legacy = LegacySlots::decode(d, rec, slots::PLAYER_ANIMATION);
        let (animation, animation_info) = animation?;
        Some(Self {
            base: base?,
            animation,
            animation_info,
            legacy: legacy?,
        })
    }
}

/// Give the player money.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectiveMoneyAdd {
    #[serde(flatten)]
    pub base: ObjectiveBase,
    pub money: i32,
    #[serde(flatten)]
    pub legacy: LegacySlots,
}

impl ObjectiveMoneyAdd {
    pub(crate) fn decode(d: &mut Decoder, rec: &Record) -> Option<Self> {
        let base = ObjectiveBase::decode(d, rec);
        let money = decode_money(d, rec);
        let legacy = LegacySlots::decode(d, rec, slots::SETTING);
        Some(Self {
            base: base?,
            money: money?,
            legacy: legacy?,
        })
    }
}

/// Take money from the player.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectiveMoneySub {
    #[serde(flatten)]
    pub base: ObjectiveBase,
    pub money: i32,
    #[serde(flatten)]
    pub legacy: LegacySlots,
}

impl ObjectiveMoneySub {
    pub(crate) fn decode(d: &mut Decoder, rec: &Record) -> Option<Self> {
        let base = ObjectiveBase::decode(d, rec);
        let money = decode_money(d, rec);
        let legacy = LegacySlots::decode(d, rec, slots::SETTING);
        Some(Self {
            base: base?,
            money: money?,
            legacy: legacy?,
        })
    }
}

fn decode_money(d: &mut Decoder, rec: &Record) -> Option<i32> {
    d.int_or(
        rec,
        "money",
        i64::from(MIN_MONEY)..=i64::from(i32::MAX),
        DEFAULT_MONEY,
    )
}
