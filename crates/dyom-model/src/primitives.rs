//! Bounded integer ids and closed integer enumerations.
//!
//! Every primitive rejects out-of-range values at construction, so a value
//! of one of these types is always a legal id for the mission format.
//! Ranges follow the game's own tables; some of them skip historical ids.

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::decode::{FieldValue, int_in};
use crate::error::{DecodeErrorKind, RangeError};

macro_rules! bounded_int {
    (
        $(#[$meta:meta])*
        $name:ident, min = $min:expr, max = $max:expr
        $(, default = $default:expr)?
        $(, reserved = [$($lo:literal ..= $hi:literal),+ $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            pub const MIN: i32 = $min;
            pub const MAX: Option<i32> = $max;
            /// Ids inside `MIN..=MAX` that the game never assigned.
            pub const RESERVED: &'static [RangeInclusive<i32>] = &[$($($lo..=$hi),+)?];

            pub fn new(value: i32) -> Result<Self, RangeError> {
                let what = stringify!($name);
                if value < Self::MIN {
                    return Err(RangeError::Below {
                        what,
                        value: i64::from(value),
                        min: i64::from(Self::MIN),
                    });
                }
                if let Some(max) = Self::MAX
                    && value > max
                {
                    return Err(RangeError::Above {
                        what,
                        value: i64::from(value),
                        max: i64::from(max),
                    });
                }
                if Self::RESERVED.iter().any(|gap| gap.contains(&value)) {
                    return Err(RangeError::Reserved {
                        what,
                        value: i64::from(value),
                    });
                }
                Ok(Self(value))
            }

            pub const fn get(self) -> i32 {
                self.0
            }

            /// Build a constant.
            ///
            /// # Panics
            ///
            /// Panics when `value` lies outside `MIN..=MAX`. In a `const`
            /// item this is a compile error.
            pub const fn new_const(value: i32) -> Self {
                assert!(value >= Self::MIN);
                if let Some(max) = Self::MAX {
                    assert!(value <= max);
                }
                Self(value)
            }
        }

        $(
            impl Default for $name {
                fn default() -> Self {
                    Self($default)
                }
            }
        )?

        impl TryFrom<i32> for $name {
            type Error = RangeError;

            fn try_from(value: i32) -> Result<Self, RangeError> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FieldValue for $name {
            fn from_json(value: &Value) -> Result<Self, DecodeErrorKind> {
                let raw: i32 = int_in(
                    value,
                    stringify!($name),
                    i64::from(i32::MIN),
                    i64::from(i32::MAX),
                )?;
                Ok(Self::new(raw)?)
            }
        }
    };
}

macro_rules! int_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $value:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[ $( Self::$variant, )+ ];

            pub const fn raw(self) -> i32 {
                match self {
                    $( Self::$variant => $value, )+
                }
            }

            pub fn from_raw(raw: i32) -> Result<Self, RangeError> {
                match raw {
                    $( $value => Ok(Self::$variant), )+
                    _ => Err(RangeError::Unknown {
                        what: stringify!($name),
                        value: i64::from(raw),
                    }),
                }
            }
        }

        impl TryFrom<i32> for $name {
            type Error = RangeError;

            fn try_from(raw: i32) -> Result<Self, RangeError> {
                Self::from_raw(raw)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_i32(self.raw())
            }
        }

        impl FieldValue for $name {
            fn from_json(value: &Value) -> Result<Self, DecodeErrorKind> {
                let raw: i32 = int_in(
                    value,
                    stringify!($name),
                    i64::from(i32::MIN),
                    i64::from(i32::MAX),
                )?;
                Ok(Self::from_raw(raw)?)
            }
        }
    };
}

// =============================================================================
// Bounded ids
// =============================================================================

bounded_int! {
    /// Weather preset, 0 (sunny, clear) to 22 (interior, cloudy).
    Weather, min = 0, max = Some(22), default = 0
}

bounded_int! {
    /// Weapon id. 0 is unarmed and 48 picks a random weapon; ids 19-21 do
    /// not exist in the game.
    Weapon, min = 0, max = Some(48), default = 0, reserved = [19..=21]
}

bounded_int! {
    /// Character model. Story characters use ids from 1000 upwards.
    Skin, min = 0, max = None, default = 0
}

bounded_int! {
    /// Ped group controlling AI allegiance. 15 and 16 are unused.
    Gang, min = 4, max = Some(26), default = 4, reserved = [15..=16]
}

bounded_int! {
    /// Actor or player animation.
    ///
    /// Negative ids are built-in behaviours (walk a route, enter a vehicle,
    /// ...); `-1` is no animation; 0..=129 select a custom animation.
    Animation, min = -12, max = Some(129), default = -1
}

bounded_int! {
    /// Radar blip colour. `-1` hides the blip.
    RadarMarker, min = -1, max = Some(4), default = -1
}

bounded_int! {
    /// Vehicle model id.
    CarModel, min = 400, max = Some(611)
}

bounded_int! {
    /// Object model id. Negative ids are visual effects rather than models.
    ObjectModel, min = -467, max = None
}

bounded_int! {
    /// Vehicle paint colour. `-1` lets the game pick one at random.
    PaintColor, min = -1, max = Some(126), default = 0
}

impl Animation {
    pub const NONE: Self = Self(-1);
    pub const WALK: Self = Self(-2);
    pub const RUN: Self = Self(-3);
    pub const VEHICLE_ENTER: Self = Self(-4);
    pub const VEHICLE_EXIT: Self = Self(-5);
    pub const VEHICLE_SIT: Self = Self(-6);
    pub const SPRINT: Self = Self(-9);
    pub const WALK_CROUCH: Self = Self(-10);
    pub const MULTIPLE_LOCATIONS: Self = Self(-11);

    /// Animations that walk a route.
    pub const fn is_movement(self) -> bool {
        matches!(self.0, -2 | -3 | -9 | -10 | -11)
    }

    /// Animations that enter, leave or sit in a vehicle.
    pub const fn is_vehicle(self) -> bool {
        matches!(self.0, -6..=-4)
    }

    pub const fn is_custom(self) -> bool {
        self.0 >= 0
    }
}

impl RadarMarker {
    pub const NONE: Self = Self(-1);
    pub const RED: Self = Self(0);
    pub const GREEN: Self = Self(1);
    pub const BLUE: Self = Self(2);
    pub const WHITE: Self = Self(3);
    pub const YELLOW: Self = Self(4);

    pub const fn is_visible(self) -> bool {
        self.0 >= 0
    }
}

impl PaintColor {
    pub const RANDOM: Self = Self(-1);

    pub const fn is_random(self) -> bool {
        self.0 < 0
    }
}

impl ObjectModel {
    pub const fn is_effect(self) -> bool {
        self.0 < 0
    }
}

// =============================================================================
// Closed enumerations
// =============================================================================

int_enum! {
    /// Seat an actor or the player takes in a vehicle.
    VehicleSeat {
        #[default]
        Driver = 0,
        Passenger = 1,
        RearLeft = 2,
        RearRight = 3,
    }
}

int_enum! {
    /// What an actor in the driver seat does with the vehicle.
    DriverBehaviour {
        #[default]
        None = 0,
        RouteSlow = 1,
        RouteNormal = 2,
        RouteFast = 3,
        AttackPlayer = 4,
        FollowPlayer = 5,
    }
}

int_enum! {
    CheckpointShape {
        #[default]
        Campfire = 0,
        BeaconArrow = 1,
        BeaconFinish = 2,
        Beacon = 3,
        Ring = 4,
        Invisible = 5,
    }
}

int_enum! {
    /// Ambient pedestrian and traffic density.
    CitizenBehaviourMode {
        #[default]
        Normal = 0,
        Riot = 1,
        NoCars = 2,
        NoPeds = 3,
        Empty = 4,
    }
}

int_enum! {
    /// How the player completes an object objective.
    ObjectInteraction {
        #[default]
        Touch = 0,
        Damage = 1,
        Photograph = 2,
        Shoot = 3,
    }
}

int_enum! {
    /// Pickup respawn and trigger behaviour.
    PickupBehaviour {
        Unpickable = 1,
        /// Respawns after 30 seconds.
        Respawn = 2,
        #[default]
        Once = 3,
        /// Explodes for pedestrians and vehicles.
        Mine = 10,
        MineVehicle = 12,
        Vehicle = 14,
        /// Respawns after 6 minutes.
        RespawnSlow = 15,
        Money = 19,
    }
}
