//! Mission objectives.
//!
//! An objective is one step of mission progression. Each record carries an
//! `objective_type` tag that selects one of 21 fixed field sets; tag 4 was
//! never assigned. [`Objective`] is the closed union over those shapes.

mod entity;
mod player;
pub mod slots;
mod timer;
mod world;

use serde::{Serialize, Serializer};

use crate::decode::{Decoder, Record};
use crate::error::DecodeErrorKind;
use crate::geometry::Position;
use crate::references::EntityRef;

pub use entity::{ObjectiveActor, ObjectiveCar, ObjectiveObject, ObjectivePickup};
pub use player::{
    MIN_MONEY, ObjectiveMoneyAdd, ObjectiveMoneySub, ObjectivePlayerAnimation,
    ObjectivePlayerDisarm, ObjectivePlayerTeleport, ObjectivePlayerTeleportCar,
};
pub use slots::{LegacySlots, Slot, SlotKind, SlotValue};
pub use timer::{
    ObjectiveCountdown, ObjectivePhoneCall, ObjectiveTimelimit, ObjectiveTimeout,
    ObjectiveTimerStart,
};
pub use world::{
    MAX_CHECKPOINT_RADIUS, MAX_CUTSCENE_ACTOR, MIN_CHECKPOINT_RADIUS, ObjectiveCheckpoint,
    ObjectiveCitizenBehaviour, ObjectiveCutscene, ObjectiveDayTime, ObjectiveWantedLevel,
    ObjectiveWeather,
};

// =============================================================================
// Type tag
// =============================================================================

/// The `objective_type` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ObjectiveType {
    Car,
    Checkpoint,
    Pickup,
    Actor,
    Cutscene,
    PlayerTeleport,
    Countdown,
    PlayerTeleportCar,
    Timeout,
    Weather,
    DayTime,
    CitizenBehaviour,
    WantedLevel,
    Timelimit,
    TimerStart,
    PlayerDisarm,
    PhoneCall,
    Object,
    MoneyAdd,
    MoneySub,
    PlayerAnimation,
}

impl ObjectiveType {
    pub const ALL: [ObjectiveType; 21] = [
        ObjectiveType::Car,
        ObjectiveType::Checkpoint,
        ObjectiveType::Pickup,
        ObjectiveType::Actor,
        ObjectiveType::Cutscene,
        ObjectiveType::PlayerTeleport,
        ObjectiveType::Countdown,
        ObjectiveType::PlayerTeleportCar,
        ObjectiveType::Timeout,
        ObjectiveType::Weather,
        ObjectiveType::DayTime,
        ObjectiveType::CitizenBehaviour,
        ObjectiveType::WantedLevel,
        ObjectiveType::Timelimit,
        ObjectiveType::TimerStart,
        ObjectiveType::PlayerDisarm,
        ObjectiveType::PhoneCall,
        ObjectiveType::Object,
        ObjectiveType::MoneyAdd,
        ObjectiveType::MoneySub,
        ObjectiveType::PlayerAnimation,
    ];

    pub const fn tag(self) -> u8 {
        match self {
            ObjectiveType::Car => 1,
            ObjectiveType::Checkpoint => 2,
            ObjectiveType::Pickup => 3,
            ObjectiveType::Actor => 5,
            ObjectiveType::Cutscene => 6,
            ObjectiveType::PlayerTeleport => 7,
            ObjectiveType::Countdown => 8,
            ObjectiveType::PlayerTeleportCar => 9,
            ObjectiveType::Timeout => 10,
            ObjectiveType::Weather => 11,
            ObjectiveType::DayTime => 12,
            ObjectiveType::CitizenBehaviour => 13,
            ObjectiveType::WantedLevel => 14,
            ObjectiveType::Timelimit => 15,
            ObjectiveType::TimerStart => 16,
            ObjectiveType::PlayerDisarm => 17,
            ObjectiveType::PhoneCall => 18,
            ObjectiveType::Object => 19,
            ObjectiveType::MoneyAdd => 20,
            ObjectiveType::MoneySub => 21,
            ObjectiveType::PlayerAnimation => 22,
        }
    }

    /// Look up a tag. Returns `None` for 4 and anything outside 1..=22.
    pub fn from_tag(tag: i64) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| i64::from(kind.tag()) == tag)
    }

    /// Name of the record type carrying this tag, e.g. `ObjectiveCar`.
    pub const fn type_name(self) -> &'static str {
        match self {
            ObjectiveType::Car => "ObjectiveCar",
            ObjectiveType::Checkpoint => "ObjectiveCheckpoint",
            ObjectiveType::Pickup => "ObjectivePickup",
            ObjectiveType::Actor => "ObjectiveActor",
            ObjectiveType::Cutscene => "ObjectiveCutscene",
            ObjectiveType::PlayerTeleport => "ObjectivePlayerTeleport",
            ObjectiveType::Countdown => "ObjectiveCountdown",
            ObjectiveType::PlayerTeleportCar => "ObjectivePlayerTeleportCar",
            ObjectiveType::Timeout => "ObjectiveTimeout",
            ObjectiveType::Weather => "ObjectiveWeather",
            ObjectiveType::DayTime => "ObjectiveDayTime",
            ObjectiveType::CitizenBehaviour => "ObjectiveCitizenBehaviour",
            ObjectiveType::WantedLevel => "ObjectiveWantedLevel",
            ObjectiveType::Timelimit => "ObjectiveTimelimit",
            ObjectiveType::TimerStart => "ObjectiveTimerStart",
            ObjectiveType::PlayerDisarm => "ObjectivePlayerDisarm",
            ObjectiveType::PhoneCall => "ObjectivePhoneCall",
            ObjectiveType::Object => "ObjectiveObject",
            ObjectiveType::MoneyAdd => "ObjectiveMoneyAdd",
            ObjectiveType::MoneySub => "ObjectiveMoneySub",
            ObjectiveType::PlayerAnimation => "ObjectivePlayerAnimation",
        }
    }
}

// =============================================================================
// Shared fields
// =============================================================================

/// Fields every objective record carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ObjectiveBase {
    #[serde(flatten)]
    pub position: Position,
    /// Heading in degrees. Checkpoints use it to orient arrows and rings.
    pub direction: f32,
    pub interior: u8,
}

impl ObjectiveBase {
    pub const fn at(position: Position) -> Self {
        Self {
            position,
            direction: 0.0,
            interior: 0,
        }
    }

    pub(crate) fn decode(d: &mut Decoder, rec: &Record) -> Option<Self> {
        let position = d.position(rec);
        let direction = d.degrees(rec, "direction");
        let interior = d.int_or(rec, "interior", 0..=i64::from(u8::MAX), 0);
        Some(Self {
            position: position?,
            direction: direction?,
            interior: interior?,
        })
    }
}

// =============================================================================
// The union
// =============================================================================

/// One objective, tagged by its `objective_type`.
#[derive(Debug, Clone, PartialEq)]
pub enum Objective {
    Car(ObjectiveCar),
    Checkpoint(ObjectiveCheckpoint),
    Pickup(ObjectivePickup),
    Actor(ObjectiveActor),
    Cutscene(ObjectiveCutscene),
    PlayerTeleport(ObjectivePlayerTeleport),
    Countdown(ObjectiveCountdown),
    PlayerTeleportCar(ObjectivePlayerTeleportCar),
    Timeout(ObjectiveTimeout),
    Weather(ObjectiveWeather),
    DayTime(ObjectiveDayTime),
    CitizenBehaviour(ObjectiveCitizenBehaviour),
    WantedLevel(ObjectiveWantedLevel),
    Timelimit(ObjectiveTimelimit),
    TimerStart(ObjectiveTimerStart),
    PlayerDisarm(ObjectivePlayerDisarm),
    PhoneCall(ObjectivePhoneCall),
    Object(ObjectiveObject),
    MoneyAdd(ObjectiveMoneyAdd),
    MoneySub(ObjectiveMoneySub),
    PlayerAnimation(ObjectivePlayerAnimation),
}

/// Expands `$body` once per variant with `$inner` bound to the record.
macro_rules! each_variant {
    ($value:expr, $inner:ident => $body:expr) => {
        match $value {
            Objective::Car($inner) => $body,
            Objective::Checkpoint($inner) => $body,
            Objective::Pickup($inner) => $body,
            Objective::Actor($inner) => $body,
            Objective::Cutscene($inner) => $body,
            Objective::PlayerTeleport($inner) => $body,
            Objective::Countdown($inner) => $body,
            Objective::PlayerTeleportCar($inner) => $body,
            Objective::Timeout($inner) => $body,
            Objective::Weather($inner) => $body,
            Objective::DayTime($inner) => $body,
            Objective::CitizenBehaviour($inner) => $body,
            Objective::WantedLevel($inner) => $body,
            Objective::Timelimit($inner) => $body,
            Objective::TimerStart($inner) => $body,
            Objective::PlayerDisarm($inner) => $body,
            Objective::PhoneCall($inner) => $body,
            Objective::Object($inner) => $body,
            Objective::MoneyAdd($inner) => $body,
            Objective::MoneySub($inner) => $body,
            Objective::PlayerAnimation($inner) => $body,
        }
    };
}

impl Objective {
    pub const fn objective_type(&self) -> ObjectiveType {
        match self {
            Objective::Car(_) => ObjectiveType::Car,
            Objective::Checkpoint(_) => ObjectiveType::Checkpoint,
            Objective::Pickup(_) => ObjectiveType::Pickup,
            Objective::Actor(_) => ObjectiveType::Actor,
            Objective::Cutscene(_) => ObjectiveType::Cutscene,
            Objective::PlayerTeleport(_) => ObjectiveType::PlayerTeleport,
            Objective::Countdown(_) => ObjectiveType::Countdown,
            Objective::PlayerTeleportCar(_) => ObjectiveType::PlayerTeleportCar,
            Objective::Timeout(_) => ObjectiveType::Timeout,
            Objective::Weather(_) => ObjectiveType::Weather,
            Objective::DayTime(_) => ObjectiveType::DayTime,
            Objective::CitizenBehaviour(_) => ObjectiveType::CitizenBehaviour,
            Objective::WantedLevel(_) => ObjectiveType::WantedLevel,
            Objective::Timelimit(_) => ObjectiveType::Timelimit,
            Objective::TimerStart(_) => ObjectiveType::TimerStart,
            Objective::PlayerDisarm(_) => ObjectiveType::PlayerDisarm,
            Objective::PhoneCall(_) => ObjectiveType::PhoneCall,
            Objective::Object(_) => ObjectiveType::Object,
            Objective::MoneyAdd(_) => ObjectiveType::MoneyAdd,
            Objective::MoneySub(_) => ObjectiveType::MoneySub,
            Objective::PlayerAnimation(_) => ObjectiveType::PlayerAnimation,
        }
    }

    pub fn base(&self) -> &ObjectiveBase {
        each_variant!(self, inner => &inner.base)
    }

    pub fn base_mut(&mut self) -> &mut ObjectiveBase {
        each_variant!(self, inner => &mut inner.base)
    }

    /// Padding slots of the legacy layout.
    pub fn legacy(&self) -> &LegacySlots {
        each_variant!(self, inner => &inner.legacy)
    }

    /// Text shown to the player, for the variants that have one.
    pub fn text(&self) -> Option<&str> {
        match self {
            Objective::Car(inner) => Some(inner.text.as_str()),
            Objective::Checkpoint(inner) => Some(inner.text.as_str()),
            Objective::Pickup(inner) => Some(inner.text.as_str()),
            Objective::Actor(inner) => Some(inner.text.as_str()),
            Objective::Cutscene(inner) => Some(inner.text.as_str()),
            Objective::Countdown(inner) => Some(inner.text.as_str()),
            Objective::PlayerTeleportCar(inner) => Some(inner.text.as_str()),
            Objective::Timeout(inner) => Some(inner.text.as_str()),
            Objective::PhoneCall(inner) => Some(inner.text.as_str()),
            Objective::Object(inner) => Some(inner.text.as_str()),
            _ => None,
        }
    }

    /// Every reference into another collection this objective carries.
    pub fn references(&self) -> Vec<EntityRef> {
        match self {
            Objective::Actor(inner) => inner.references().collect(),
            Objective::Cutscene(inner) => inner.references().collect(),
            Objective::PlayerAnimation(inner) => inner.references().collect(),
            _ => Vec::new(),
        }
    }

    /// Decode one entry of the `objectives` list.
    pub(crate) fn decode(d: &mut Decoder, index: usize, rec: &Record) -> Option<Self> {
        let tag: i64 = d.int_required(rec, "objective_type", i64::MIN..=i64::MAX)?;
        let Some(kind) = ObjectiveType::from_tag(tag) else {
            d.report(
                "objective_type",
                DecodeErrorKind::UnknownObjectiveType { index, tag },
            );
            return None;
        };
        match kind {
            ObjectiveType::Car => ObjectiveCar::decode(d, rec).map(Objective::Car),
            ObjectiveType::Checkpoint => {
                ObjectiveCheckpoint::decode(d, rec).map(Objective::Checkpoint)
            }
            ObjectiveType::Pickup => ObjectivePickup::decode(d, rec).map(Objective::Pickup),
            ObjectiveType::Actor => ObjectiveActor::decode(d, rec).map(Objective::Actor),
            ObjectiveType::Cutscene => ObjectiveCutscene::decode(d, rec).map(Objective::Cutscene),
            ObjectiveType::PlayerTeleport => {
                ObjectivePlayerTeleport::decode(d, rec).map(Objective::PlayerTeleport)
            }
            ObjectiveType::Countdown => {
                ObjectiveCountdown::decode(d, rec).map(Objective::Countdown)
            }
            ObjectiveType::PlayerTeleportCar => {
                ObjectivePlayerTeleportCar::decode(d, rec).map(Objective::PlayerTeleportCar)
            }
            ObjectiveType::Timeout => ObjectiveTimeout::decode(d, rec).map(Objective::Timeout),
            ObjectiveType::Weather => ObjectiveWeather::decode(d, rec).map(Objective::Weather),
            ObjectiveType::DayTime => ObjectiveDayTime::decode(d, rec).map(Objective::DayTime),
            ObjectiveType::CitizenBehaviour => {
                ObjectiveCitizenBehaviour::decode(d, rec).map(Objective::CitizenBehaviour)
            }
            ObjectiveType::WantedLevel => {
                ObjectiveWantedLevel::decode(d, rec).map(Objective::WantedLevel)
            }
            ObjectiveType::Timelimit => {
                ObjectiveTimelimit::decode(d, rec).map(Objective::Timelimit)
            }
            ObjectiveType::TimerStart => {
                ObjectiveTimerStart::decode(d, rec).map(Objective::TimerStart)
            }
            ObjectiveType::PlayerDisarm => {
                ObjectivePlayerDisarm::decode(d, rec).map(Objective::PlayerDisarm)
            }
            ObjectiveType::PhoneCall => {
                ObjectivePhoneCall::decode(d, rec).map(Objective::PhoneCall)
            }
            ObjectiveType::Object => ObjectiveObject::decode(d, rec).map(Objective::Object),
            ObjectiveType::MoneyAdd => ObjectiveMoneyAdd::decode(d, rec).map(Objective::MoneyAdd),
            ObjectiveType::MoneySub => ObjectiveMoneySub::decode(d, rec).map(Objective::MoneySub),
            ObjectiveType::PlayerAnimation => {
                ObjectivePlayerAnimation::decode(d, rec).map(Objective::PlayerAnimation)
            }
        }
    }
}

/// Variant fields plus the tag, as one flat record.
#[derive(Serialize)]
struct Tagged<'a, T: Serialize> {
    objective_type: u8,
    #[serde(flatten)]
    fields: &'a T,
}

impl Serialize for Objective {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let objective_type = self.objective_type().tag();
        each_variant!(self, inner => Tagged { objective_type, fields: inner }.serialize(serializer))
    }
}
