//! Actors (pedestrians) and the animation parameters they share with
//! actor and player-animation objectives.

use dyom_bits::ActorFlags;
use serde::Serialize;

use crate::decode::{Decoder, Record};
use crate::error::DecodeErrorKind;
use crate::geometry::Position;
use crate::lifetime::Lifetime;
use crate::primitives::{Animation, DriverBehaviour, Gang, Skin, VehicleSeat, Weapon};
use crate::references::{EntityRef, RefKind};

/// Extra parameters for animations that need them.
///
/// Which fields may be set depends on the animation:
///
/// | field              | allowed with                                     |
/// |--------------------|--------------------------------------------------|
/// | `route`            | movement animations and vehicle animations       |
/// | `vehicle_seat`     | vehicle animations (enter, exit, sit)            |
/// | `driver_behaviour` | `vehicle_seat` is the driver seat                |
///
/// For vehicle animations `route` holds the index of the car to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct AnimationInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_seat: Option<VehicleSeat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_behaviour: Option<DriverBehaviour>,
}

impl AnimationInfo {
    pub const fn is_empty(&self) -> bool {
        self.route.is_none() && self.vehicle_seat.is_none() && self.driver_behaviour.is_none()
    }

    /// The route (or car) reference, if any.
    pub fn reference(&self) -> Option<EntityRef> {
        self.route
            .map(|route| EntityRef::new("route", RefKind::RouteOrCar, route))
    }

    /// Rules that depend on `animation` are skipped when the animation
    /// itself failed to decode.
    pub(crate) fn decode(d: &mut Decoder, rec: &Record, animation: Option<Animation>) -> Option<Self> {
        let route = d.int_optional(rec, "route", i64::from(i32::MIN)..=i64::from(i32::MAX));
        let vehicle_seat = d.optional::<VehicleSeat>(rec, "vehicle_seat");
        let driver_behaviour = d.optional::<DriverBehaviour>(rec, "driver_behaviour");
        let info = Self {
            route: route?,
            vehicle_seat: vehicle_seat?,
            driver_behaviour: driver_behaviour?,
        };

        let before = d.error_count();
        if let Some(animation) = animation {
            if info.route.is_some() && !(animation.is_movement() || animation.is_vehicle()) {
                d.report(
                    "route",
                    DecodeErrorKind::Invalid(format!(
                        "animation {animation} does not take a route"
                    )),
                );
            }
            if info.vehicle_seat.is_some() && !animation.is_vehicle() {
                d.report(
                    "vehicle_seat",
                    DecodeErrorKind::Invalid(format!(
                        "animation {animation} is not a vehicle animation"
                    )),
                );
            }
        }
        if info.driver_behaviour.is_some() && info.vehicle_seat != Some(VehicleSeat::Driver) {
            d.report(
                "driver_behaviour",
                DecodeErrorKind::Invalid("only allowed in the driver seat".to_string()),
            );
        }
        (d.error_count() == before).then_some(info)
    }
}

/// Read `animation` and the optional `animation_info` that goes with it.
pub(crate) fn decode_animation(
    d: &mut Decoder,
    rec: &Record,
    default: Animation,
) -> Option<(Animation, Option<AnimationInfo>)> {
    let animation = d.or(rec, "animation", default);
    let info = d.nested_optional(rec, "animation_info", |d, inner| {
        AnimationInfo::decode(d, inner, animation)
    });
    Some((animation?, info?))
}

/// A pedestrian placed in the world.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Actor {
    pub skin: Skin,
    #[serde(flatten)]
    pub position: Position,
    pub direction: f32,
    pub interior: u8,
    pub gang: Gang,
    pub flags: ActorFlags,
    pub weapon: Weapon,
    pub ammo: u32,
    /// Shooting accuracy, percent.
    pub accuracy: u8,
    /// Health, percent of normal (0..=200).
    pub health: u16,
    #[serde(flatten)]
    pub lifetime: Lifetime,
    /// The mission fails when this actor dies.
    pub must_survive: bool,
    pub animation: Animation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation_info: Option<AnimationInfo>,
}

impl Actor {
    pub fn new(skin: Skin, position: Position) -> Self {
        Self {
            skin,
            position,
            direction: 0.0,
            interior: 0,
            gang: Gang::default(),
            flags: ActorFlags::default(),
            weapon: Weapon::default(),
            ammo: 1_000_000,
            accuracy: 50,
            health: 100,
            lifetime: Lifetime::default(),
            must_survive: false,
            animation: Animation::NONE,
            animation_info: None,
        }
    }

    pub fn references(&self) -> impl Iterator<Item = EntityRef> + '_ {
        self.animation_info.iter().filter_map(AnimationInfo::reference)
    }

    pub(crate) fn decode(d: &mut Decoder, rec: &Record) -> Option<Self> {
        let skin = d.required::<Skin>(rec, "skin");
        let position = d.position(rec);
        let direction = d.degrees(rec, "direction");
        let interior = d.int_or(rec, "interior", 0..=i64::from(u8::MAX), 0);
        let gang = d.or(rec, "gang", Gang::default());
        let flags = d.or(rec, "flags", ActorFlags::default());
        let weapon = d.or(rec, "weapon", Weapon::default());
        let ammo = d.int_or(rec, "ammo", 0..=i64::from(u32::MAX), 1_000_000);
        let accuracy = d.int_or(rec, "accuracy", 0..=100, 50);
        let health = d.int_or(rec, "health", 0..=200, 100);
        let lifetime = Lifetime::decode(d, rec);
        let must_survive = d.or(rec, "must_survive", false);
        let animation = decode_animation(d, rec, Animation::NONE);
        let (animation, animation_info) = animation?;
        Some(Self {
            skin: skin?,
            position: position?,
            direction: direction?,
            interior: interior?,
            gang: gang?,
            flags: flags?,
            weapon: weapon?,
            ammo: ammo?,
            accuracy: accuracy?,
            health: health?,
            lifetime: lifetime?,
            must_survive: must_survive?,
            animation,
            animation_info,
        })
    }
}
