//! Static descriptions of the mission record types.
//!
//! Documentation and export tools walk these descriptors instead of the
//! decoder. Each record type has one [`TypeDescriptor`] listing its JSON
//! fields in document order. The objective union lists the shared fields
//! once and each variant lists only its own.
//!
//! ```
//! use dyom_model::schema::{Describe, mission_schema};
//! use dyom_model::Mission;
//!
//! let root = Mission::descriptor();
//! assert_eq!(root.name, "Mission");
//! assert!(mission_schema().iter().any(|ty| ty.name == "ObjectiveCutscene"));
//! ```

use crate::actor::{Actor, AnimationInfo};
use crate::car::Car;
use crate::mission::{InitialSettings, Mission, MissionInfo, PathsCollection, PlayerInitial};
use crate::object::Object;
use crate::objectives::{
    Objective, ObjectiveActor, ObjectiveCar, ObjectiveCheckpoint, ObjectiveCitizenBehaviour,
    ObjectiveCountdown, ObjectiveCutscene, ObjectiveDayTime, ObjectiveMoneyAdd, ObjectiveMoneySub,
    ObjectiveObject, ObjectivePhoneCall, ObjectivePickup, ObjectivePlayerAnimation,
    ObjectivePlayerDisarm, ObjectivePlayerTeleport, ObjectivePlayerTeleportCar,
    ObjectiveTimelimit, ObjectiveTimeout, ObjectiveTimerStart, ObjectiveWantedLevel,
    ObjectiveWeather,
};
use crate::objectives::slots::{self, Slot};
use crate::pickup::Pickup;
use crate::route::{Route, RoutePoint};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Decoding fails when the field is absent.
    Required,
    /// The field may be omitted; `default` applies when there is one.
    Optional,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    pub name: &'static str,
    /// `integer`, `number`, `string`, `boolean`, a primitive id name such as
    /// `Weapon`, a record name, or `array<Record>`.
    pub field_type: &'static str,
    pub presence: Presence,
    /// Default as it would appear in JSON.
    pub default: Option<&'static str>,
    pub nested: Option<&'static TypeDescriptor>,
}

impl FieldDescriptor {
    pub const fn is_required(&self) -> bool {
        matches!(self.presence, Presence::Required)
    }

    const fn with_nested(mut self, nested: &'static TypeDescriptor) -> Self {
        self.nested = Some(nested);
        self
    }
}

#[derive(Debug)]
pub struct TypeDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    /// `objective_type` of an objective variant.
    pub tag: Option<u8>,
    pub fields: &'static [FieldDescriptor],
    /// Padding slots of the legacy objective layout, after `fields`.
    pub padding: &'static [Slot],
    /// Members of a tagged union, in tag order.
    pub variants: &'static [&'static TypeDescriptor],
}

impl TypeDescriptor {
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn padding_slot(&self, name: &str) -> Option<&Slot> {
        self.padding.iter().find(|slot| slot.name == name)
    }

    /// Whether `name` is a field or a padding slot of this type.
    pub fn has_key(&self, name: &str) -> bool {
        self.field(name).is_some() || self.padding_slot(name).is_some()
    }

    pub fn variant(&self, tag: u8) -> Option<&'static TypeDescriptor> {
        self.variants.iter().copied().find(|v| v.tag == Some(tag))
    }
}

/// Types with a static schema description.
pub trait Describe {
    fn descriptor() -> &'static TypeDescriptor;
}

const fn required(name: &'static str, field_type: &'static str) -> FieldDescriptor {
    FieldDescriptor {
        name,
        field_type,
        presence: Presence::Required,
        default: None,
        nested: None,
    }
}

const fn optional(
    name: &'static str,
    field_type: &'static str,
    default: &'static str,
) -> FieldDescriptor {
    FieldDescriptor {
        name,
        field_type,
        presence: Presence::Optional,
        default: Some(default),
        nested: None,
    }
}

/// Optional with no default: absence carries meaning.
const fn absent_ok(name: &'static str, field_type: &'static str) -> FieldDescriptor {
    FieldDescriptor {
        name,
        field_type,
        presence: Presence::Optional,
        default: None,
        nested: None,
    }
}

macro_rules! record {
    ($name:expr, $description:expr, $fields:expr $(,)?) => {
        TypeDescriptor {
            name: $name,
            description: $description,
            tag: None,
            fields: $fields,
            padding: &[],
            variants: &[],
        }
    };
}

macro_rules! variant {
    ($name:expr, $tag:expr, $description:expr, $fields:expr, $padding:expr $(,)?) => {
        TypeDescriptor {
            name: $name,
            description: $description,
            tag: Some($tag),
            fields: $fields,
            padding: $padding,
            variants: &[],
        }
    };
}

// =============================================================================
// Composite values
// =============================================================================

static ACTOR_FLAGS: TypeDescriptor = record!(
    "ActorFlags",
    "Actor behaviour flags. Also accepted as the packed integer.",
    &[
        optional("hold_position", "boolean", "false"),
        optional("attack_direct", "boolean", "false"),
        optional("follow", "boolean", "false"),
        optional("headshot_immune", "boolean", "false"),
        optional("kill_whole_gang", "boolean", "false"),
        optional("health_bar", "boolean", "false"),
        optional("enemy_2", "boolean", "false"),
        optional("unknown_bits", "integer", "0"),
    ],
);

static CAR_FLAGS: TypeDescriptor = record!(
    "CarFlags",
    "Vehicle immunity and behaviour flags. Also accepted as the packed integer.",
    &[
        optional("immune_bullet", "boolean", "false"),
        optional("immune_explosion", "boolean", "false"),
        optional("immune_tyres", "boolean", "false"),
        optional("immune_collision", "boolean", "false"),
        optional("locked", "boolean", "false"),
        optional("handbraked", "boolean", "false"),
        optional("must_destroy", "boolean", "false"),
        optional("driveby", "boolean", "false"),
        optional("unknown_bits", "integer", "0"),
    ],
);

static PICKUP_OBJECTIVE_FLAGS: TypeDescriptor = record!(
    "PickupObjectiveFlags",
    "Pickup objective flags. Also accepted as the packed integer.",
    &[
        optional("collect_all", "boolean", "false"),
        optional("counter", "boolean", "false"),
        optional("unknown_bits", "integer", "0"),
    ],
);

static CUTSCENE_BEHAVIOUR: TypeDescriptor = record!(
    "CutsceneBehaviour",
    "Camera mode and switches. Also accepted as the packed integer.",
    &[
        optional("camera_mode", "integer", "0"),
        optional("slow_motion", "boolean", "false"),
        optional("camera_shake", "boolean", "false"),
        optional("skip_fade", "boolean", "false"),
        optional("skip_widescreen", "boolean", "false"),
        optional("unknown_bits", "integer", "0"),
    ],
);

static ANIMATION_INFO: TypeDescriptor = record!(
    "AnimationInfo",
    "Parameters for animations that take a route, a car or a seat.",
    &[
        absent_ok("route", "integer"),
        absent_ok("vehicle_seat", "VehicleSeat"),
        absent_ok("driver_behaviour", "DriverBehaviour"),
    ],
);

// =============================================================================
// Entities and paths
// =============================================================================

static ACTOR: TypeDescriptor = record!(
    "Actor",
    "A pedestrian placed in the world.",
    &[
        required("skin", "Skin"),
        required("position_x", "number"),
        required("position_y", "number"),
        required("position_z", "number"),
        optional("direction", "number", "0.0"),
        optional("interior", "integer", "0"),
        optional("gang", "Gang", "4"),
        optional("flags", "ActorFlags", "0").with_nested(&ACTOR_FLAGS),
        optional("weapon", "Weapon", "0"),
        optional("ammo", "integer", "1000000"),
        optional("accuracy", "integer", "50"),
        optional("health", "integer", "100"),
        optional("spawn", "integer", "0"),
        optional("despawn", "integer", "1000"),
        optional("must_survive", "boolean", "false"),
        optional("animation", "Animation", "-1"),
        absent_ok("animation_info", "AnimationInfo").with_nested(&ANIMATION_INFO),
    ],
);

static CAR: TypeDescriptor = record!(
    "Car",
    "A vehicle placed in the world.",
    &[
        required("car_id", "CarModel"),
        required("color_primary", "PaintColor"),
        required("color_secondary", "PaintColor"),
        required("position_x", "number"),
        required("position_y", "number"),
        required("position_z", "number"),
        optional("direction", "number", "0.0"),
        optional("interior", "integer", "0"),
        optional("health", "integer", "1000"),
        optional("flags", "CarFlags", "0").with_nested(&CAR_FLAGS),
        optional("spawn", "integer", "0"),
        optional("despawn", "integer", "1000"),
        optional("must_survive", "boolean", "false"),
    ],
);

static PICKUP: TypeDescriptor = record!(
    "Pickup",
    "A collectible item.",
    &[
        required("object_id", "ObjectModel"),
        optional("ammo", "integer", "0"),
        optional("behaviour", "PickupBehaviour", "3"),
        required("position_x", "number"),
        required("position_y", "number"),
        required("position_z", "number"),
        optional("spawn", "integer", "0"),
        optional("despawn", "integer", "1000"),
    ],
);

static OBJECT: TypeDescriptor = record!(
    "Object",
    "A model or effect placed in the world, optionally moving along a path.",
    &[
        required("object_id", "ObjectModel"),
        required("position_x", "number"),
        required("position_y", "number"),
        required("position_z", "number"),
        optional("rotation_x", "number", "0.0"),
        optional("rotation_y", "number", "0.0"),
        optional("rotation_z", "number", "0.0"),
        optional("interior", "integer", "0"),
        optional("behaviour", "ObjectBehaviour", "0"),
        absent_ok("route_id", "integer"),
        optional("spawn", "integer", "0"),
        optional("despawn", "integer", "1000"),
    ],
);

static ROUTE_POINT: TypeDescriptor = record!(
    "RoutePoint",
    "One point of a path.",
    &[
        optional("position_x", "number", "0.0"),
        optional("position_y", "number", "0.0"),
        optional("position_z", "number", "0.0"),
        optional("rotation_x", "number", "0.0"),
        optional("rotation_y", "number", "0.0"),
        optional("rotation_z", "number", "0.0"),
    ],
);

static ROUTE: TypeDescriptor = record!(
    "Route",
    "An ordered path: an actor route, an object movement or an object displacement.",
    &[
        required("id", "integer"),
        required("type", "string"),
        optional("points", "array<RoutePoint>", "[]").with_nested(&ROUTE_POINT),
        optional("loop", "boolean", "false"),
        optional("duration", "number", "1.0"),
        optional("trigger_diameter", "number", "1.0"),
    ],
);

// =============================================================================
// Objectives
// =============================================================================

static OBJECTIVE_CAR: TypeDescriptor = variant!(
    "ObjectiveCar",
    1,
    "Enter or destroy a vehicle.",
    &[
        optional("car_id", "CarModel", "526"),
        optional("color_primary", "PaintColor", "0"),
        optional("color_secondary", "PaintColor", "36"),
        optional("health", "integer", "1000"),
        optional("radar_marker", "RadarMarker", "2"),
        optional("flags", "CarFlags", "0").with_nested(&CAR_FLAGS),
        optional("text", "string", "\"\""),
    ],
    slots::CAR,
);

static OBJECTIVE_CHECKPOINT: TypeDescriptor = variant!(
    "ObjectiveCheckpoint",
    2,
    "Reach a marker.",
    &[
        optional("radius", "number", "2.0"),
        optional("shape", "CheckpointShape", "0"),
        optional("radar_marker", "RadarMarker", "4"),
        optional("text", "string", "\"\""),
        optional("unknown_1", "integer", "0"),
    ],
    slots::CHECKPOINT,
);

static OBJECTIVE_PICKUP: TypeDescriptor = variant!(
    "ObjectivePickup",
    3,
    "Collect a pickup.",
    &[
        optional("object_id", "ObjectModel", "1210"),
        optional("ammo", "integer", "0"),
        optional("radar_marker", "RadarMarker", "1"),
        optional("flags", "PickupObjectiveFlags", "0").with_nested(&PICKUP_OBJECTIVE_FLAGS),
        optional("text", "string", "\"\""),
    ],
    slots::PICKUP,
);

static OBJECTIVE_ACTOR: TypeDescriptor = variant!(
    "ObjectiveActor",
    5,
    "Kill, protect or escort an actor.",
    &[
        optional("skin", "Skin", "102"),
        optional("weapon", "Weapon", "0"),
        optional("ammo", "integer", "0"),
        optional("health", "integer", "100"),
        optional("accuracy", "integer", "50"),
        optional("radar_marker", "RadarMarker", "0"),
        optional("flags", "ActorFlags", "0").with_nested(&ACTOR_FLAGS),
        optional("animation", "Animation", "-1"),
        absent_ok("animation_info", "AnimationInfo").with_nested(&ANIMATION_INFO),
        optional("text", "string", "\"\""),
    ],
    slots::ACTOR,
);

static OBJECTIVE_CUTSCENE: TypeDescriptor = variant!(
    "ObjectiveCutscene",
    6,
    "A scripted camera shot.",
    &[
        required("position_icon_z", "number"),
        required("target_position_x", "number"),
        required("target_position_y", "number"),
        required("target_position_z", "number"),
        optional("duration", "integer", "3000"),
        optional("behaviour", "CutsceneBehaviour", "0").with_nested(&CUTSCENE_BEHAVIOUR),
        absent_ok("actor_idx", "integer"),
        absent_ok("movement_id", "integer"),
        optional("text", "string", "\"\""),
    ],
    slots::CUTSCENE,
);

static OBJECTIVE_PLAYER_TELEPORT: TypeDescriptor = variant!(
    "ObjectivePlayerTeleport",
    7,
    "Move the player and optionally change skin, weapon and health.",
    &[
        optional("skin", "Skin", "0"),
        optional("weapon", "Weapon", "0"),
        optional("ammo", "integer", "1"),
        optional("health", "integer", "100"),
    ],
    slots::PLAYER_TELEPORT,
);

static OBJECTIVE_COUNTDOWN: TypeDescriptor = variant!(
    "ObjectiveCountdown",
    8,
    "On-screen countdown.",
    &[
        optional("duration", "integer", "3000"),
        optional("text", "string", "\"\""),
    ],
    slots::COUNTDOWN,
);

static OBJECTIVE_PLAYER_TELEPORT_CAR: TypeDescriptor = variant!(
    "ObjectivePlayerTeleportCar",
    9,
    "Put the player into a new vehicle.",
    &[
        optional("car_id", "CarModel", "405"),
        optional("color_primary", "PaintColor", "0"),
        optional("color_secondary", "PaintColor", "36"),
        optional("health", "integer", "1000"),
        optional("seat", "VehicleSeat", "0"),
        optional("radar_marker", "RadarMarker", "-1"),
        optional("flags", "CarFlags", "0").with_nested(&CAR_FLAGS),
        optional("text", "string", "\"\""),
    ],
    slots::PLAYER_TELEPORT_CAR,
);

static OBJECTIVE_TIMEOUT: TypeDescriptor = variant!(
    "ObjectiveTimeout",
    10,
    "Wait for a fixed time.",
    &[
        optional("duration", "integer", "3000"),
        optional("show_timer", "boolean", "false"),
        optional("text", "string", "\"\""),
    ],
    slots::TIMEOUT,
);

static OBJECTIVE_WEATHER: TypeDescriptor = variant!(
    "ObjectiveWeather",
    11,
    "Change the weather.",
    &[optional("weather", "Weather", "0")],
    slots::WORLD_STATE,
);

static OBJECTIVE_DAY_TIME: TypeDescriptor = variant!(
    "ObjectiveDayTime",
    12,
    "Set the clock.",
    &[optional("hour", "integer", "8")],
    slots::SETTING,
);

static OBJECTIVE_CITIZEN_BEHAVIOUR: TypeDescriptor = variant!(
    "ObjectiveCitizenBehaviour",
    13,
    "Change pedestrian and traffic density.",
    &[optional("mode", "CitizenBehaviourMode", "0")],
    slots::WORLD_STATE,
);

static OBJECTIVE_WANTED_LEVEL: TypeDescriptor = variant!(
    "ObjectiveWantedLevel",
    14,
    "Set the wanted level and its bounds.",
    &[
        optional("level_current", "integer", "0"),
        optional("level_min", "integer", "0"),
        optional("level_max", "integer", "6"),
    ],
    slots::WANTED_LEVEL,
);

static OBJECTIVE_TIMELIMIT: TypeDescriptor = variant!(
    "ObjectiveTimelimit",
    15,
    "Set, extend or remove the mission time limit.",
    &[optional("duration", "integer", "30000")],
    slots::SETTING,
);

static OBJECTIVE_TIMER_START: TypeDescriptor =
    variant!("ObjectiveTimerStart", 16, "Start the mission timer.", &[], slots::PLAIN);

static OBJECTIVE_PLAYER_DISARM: TypeDescriptor =
    variant!("ObjectivePlayerDisarm", 17, "Remove the player's weapons.", &[], slots::PLAIN);

static OBJECTIVE_PHONE_CALL: TypeDescriptor = variant!(
    "ObjectivePhoneCall",
    18,
    "Phone call with a message.",
    &[
        optional("duration", "integer", "4000"),
        optional("text", "string", "\"\""),
    ],
    slots::PHONE_CALL,
);

static OBJECTIVE_OBJECT: TypeDescriptor = variant!(
    "ObjectiveObject",
    19,
    "Touch, damage, photograph or shoot an object.",
    &[
        optional("object_id", "ObjectModel", "1221"),
        optional("rotation_x", "number", "0.0"),
        optional("rotation_y", "number", "0.0"),
        optional("rotation_z", "number", "0.0"),
        optional("objective", "ObjectInteraction", "0"),
        optional("radar_marker", "RadarMarker", "2"),
        optional("text", "string", "\"\""),
    ],
    slots::OBJECT,
);

static OBJECTIVE_MONEY_ADD: TypeDescriptor = variant!(
    "ObjectiveMoneyAdd",
    20,
    "Give the player money.",
    &[optional("money", "integer", "500")],
    slots::SETTING,
);

static OBJECTIVE_MONEY_SUB: TypeDescriptor = variant!(
    "ObjectiveMoneySub",
    21,
    "Take money from the player.",
    &[optional("money", "integer", "500")],
    slots::SETTING,
);

static OBJECTIVE_PLAYER_ANIMATION: TypeDescriptor = variant!(
    "ObjectivePlayerAnimation",
    22,
    "Play an animation on the player.",
    &[
        optional("animation", "Animation", "-1"),
        absent_ok("animation_info", "AnimationInfo").with_nested(&ANIMATION_INFO),
    ],
    slots::PLAYER_ANIMATION,
);

static OBJECTIVE: TypeDescriptor = TypeDescriptor {
    name: "Objective",
    description: "One mission step. `objective_type` selects the variant.",
    tag: None,
    fields: &[
        required("objective_type", "integer"),
        required("position_x", "number"),
        required("position_y", "number"),
        required("position_z", "number"),
        optional("direction", "number", "0.0"),
        optional("interior", "integer", "0"),
    ],
    padding: &[],
    variants: &[
        &OBJECTIVE_CAR,
        &OBJECTIVE_CHECKPOINT,
        &OBJECTIVE_PICKUP,
        &OBJECTIVE_ACTOR,
        &OBJECTIVE_CUTSCENE,
        &OBJECTIVE_PLAYER_TELEPORT,
        &OBJECTIVE_COUNTDOWN,
        &OBJECTIVE_PLAYER_TELEPORT_CAR,
        &OBJECTIVE_TIMEOUT,
        &OBJECTIVE_WEATHER,
        &OBJECTIVE_DAY_TIME,
        &OBJECTIVE_CITIZEN_BEHAVIOUR,
        &OBJECTIVE_WANTED_LEVEL,
        &OBJECTIVE_TIMELIMIT,
        &OBJECTIVE_TIMER_START,
        &OBJECTIVE_PLAYER_DISARM,
        &OBJECTIVE_PHONE_CALL,
        &OBJECTIVE_OBJECT,
        &OBJECTIVE_MONEY_ADD,
        &OBJECTIVE_MONEY_SUB,
        &OBJECTIVE_PLAYER_ANIMATION,
    ],
};

// =============================================================================
// Document root
// =============================================================================

static MISSION_INFO: TypeDescriptor = record!(
    "MissionInfo",
    "Title, credits and intro screen.",
    &[
        required("name", "string"),
        required("author", "string"),
        optional("intro_text_1", "string", "\"\""),
        optional("intro_text_2", "string", "\"\""),
        optional("intro_text_3", "string", "\"\""),
        optional("sound_filename", "string", "\"\""),
        optional("published", "boolean", "false"),
    ],
);

static PLAYER_INITIAL: TypeDescriptor = record!(
    "PlayerInitial",
    "Player state at mission start.",
    &[
        optional("interior", "integer", "0"),
        optional("position_x", "number", "2488.56"),
        optional("position_y", "number", "-1666.84"),
        optional("position_z", "number", "12.38"),
        optional("direction", "number", "0.0"),
        optional("skin", "Skin", "0"),
        optional("health", "integer", "100"),
        optional("weapon", "Weapon", "0"),
        optional("ammo", "integer", "1000000"),
    ],
);

static INITIAL_SETTINGS: TypeDescriptor = record!(
    "InitialSettings",
    "World and player state when the mission begins.",
    &[
        optional("timelimit", "integer", "0"),
        optional("day_time", "integer", "8"),
        optional("weather", "Weather", "0"),
        optional("wanted_level_min", "integer", "0"),
        optional("wanted_level_max", "integer", "6"),
        optional("riot", "boolean", "false"),
        optional("timed", "boolean", "false"),
        optional("player", "PlayerInitial", "{}").with_nested(&PLAYER_INITIAL),
    ],
);

static PATHS_COLLECTION: TypeDescriptor = record!(
    "PathsCollection",
    "Routes, movements and displacements. Ids are scoped to their list.",
    &[
        optional("routes", "array<Route>", "[]").with_nested(&ROUTE),
        optional("movements", "array<Route>", "[]").with_nested(&ROUTE),
        optional("displacements", "array<Route>", "[]").with_nested(&ROUTE),
    ],
);

static MISSION: TypeDescriptor = record!(
    "Mission",
    "A complete mission document.",
    &[
        required("mission", "MissionInfo").with_nested(&MISSION_INFO),
        optional("initial", "InitialSettings", "{}").with_nested(&INITIAL_SETTINGS),
        optional("objectives", "array<Objective>", "[]").with_nested(&OBJECTIVE),
        optional("actors", "array<Actor>", "[]").with_nested(&ACTOR),
        optional("cars", "array<Car>", "[]").with_nested(&CAR),
        optional("pickups", "array<Pickup>", "[]").with_nested(&PICKUP),
        optional("objects", "array<Object>", "[]").with_nested(&OBJECT),
        optional("paths", "PathsCollection", "{}").with_nested(&PATHS_COLLECTION),
    ],
);

macro_rules! describe {
    ($($ty:ty => $descriptor:ident),+ $(,)?) => {
        $(
            impl Describe for $ty {
                fn descriptor() -> &'static TypeDescriptor {
                    &$descriptor
                }
            }
        )+
    };
}

describe! {
    Mission => MISSION,
    MissionInfo => MISSION_INFO,
    InitialSettings => INITIAL_SETTINGS,
    PlayerInitial => PLAYER_INITIAL,
    PathsCollection => PATHS_COLLECTION,
    Route => ROUTE,
    RoutePoint => ROUTE_POINT,
    Actor => ACTOR,
    AnimationInfo => ANIMATION_INFO,
    Car => CAR,
    Pickup => PICKUP,
    Object => OBJECT,
    Objective => OBJECTIVE,
    ObjectiveCar => OBJECTIVE_CAR,
    ObjectiveCheckpoint => OBJECTIVE_CHECKPOINT,
    ObjectivePickup => OBJECTIVE_PICKUP,
    ObjectiveActor => OBJECTIVE_ACTOR,
    ObjectiveCutscene => OBJECTIVE_CUTSCENE,
    ObjectivePlayerTeleport => OBJECTIVE_PLAYER_TELEPORT,
    ObjectiveCountdown => OBJECTIVE_COUNTDOWN,
    ObjectivePlayerTeleportCar => OBJECTIVE_PLAYER_TELEPORT_CAR,
    ObjectiveTimeout => OBJECTIVE_TIMEOUT,
    ObjectiveWeather => OBJECTIVE_WEATHER,
    ObjectiveDayTime => OBJECTIVE_DAY_TIME,
    ObjectiveCitizenBehaviour => OBJECTIVE_CITIZEN_BEHAVIOUR,
    ObjectiveWantedLevel => OBJECTIVE_WANTED_LEVEL,
    ObjectiveTimelimit => OBJECTIVE_TIMELIMIT,
    ObjectiveTimerStart => OBJECTIVE_TIMER_START,
    ObjectivePlayerDisarm => OBJECTIVE_PLAYER_DISARM,
    ObjectivePhoneCall => OBJECTIVE_PHONE_CALL,
    ObjectiveObject => OBJECTIVE_OBJECT,
    ObjectiveMoneyAdd => OBJECTIVE_MONEY_ADD,
    ObjectiveMoneySub => OBJECTIVE_MONEY_SUB,
    ObjectivePlayerAnimation => OBJECTIVE_PLAYER_ANIMATION,
}

/// Every record type reachable from [`Mission`], depth first, each once.
pub fn mission_schema() -> Vec<&'static TypeDescriptor> {
    fn visit(ty: &'static TypeDescriptor, out: &mut Vec<&'static TypeDescriptor>) {
        if out.iter().any(|seen| seen.name == ty.name) {
            return;
        }
        out.push(ty);
        for nested in ty.fields.iter().filter_map(|field| field.nested) {
            visit(nested, out);
        }
        for variant in ty.variants {
            visit(variant, out);
        }
    }

    let mut out = Vec::new();
    visit(&MISSION, &mut out);
    out
}

pub fn find_descriptor(name: &str) -> Option<&'static TypeDescriptor> {
    mission_schema().into_iter().find(|ty| ty.name == name)
}
