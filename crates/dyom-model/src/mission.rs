//! The mission document root.

use serde::Serialize;
use serde_json::Value;

use crate::actor::Actor;
use crate::car::Car;
use crate::decode::{Decoder, Record};
use crate::error::{DecodeErrorKind, Result};
use crate::geometry::Position;
use crate::object::Object;
use crate::objectives::Objective;
use crate::pickup::Pickup;
use crate::primitives::{Skin, Weapon, Weather};
use crate::route::{Route, RouteKind};

pub const MAX_NAME_CHARS: usize = 50;
pub const MAX_INTRO_CHARS: usize = 100;

/// Where the player starts when no position is given: Grove Street.
pub const DEFAULT_PLAYER_POSITION: Position = Position::new(2488.56, -1666.84, 12.38);

/// Title, credits and intro screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MissionInfo {
    pub name: String,
    pub author: String,
    pub intro_text_1: String,
    pub intro_text_2: String,
    pub intro_text_3: String,
    /// Custom audio, `SD/XXXXX/xx.mp3`.
    pub sound_filename: String,
    /// Published missions are read-only in the editor.
    pub published: bool,
}

impl MissionInfo {
    pub fn new(name: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            author: author.into(),
            ..Self::default()
        }
    }

    fn decode(d: &mut Decoder, rec: &Record) -> Option<Self> {
        let name = d.text_required(rec, "name", Some(MAX_NAME_CHARS));
        let author = d.text_required(rec, "author", Some(MAX_NAME_CHARS));
        let intro_text_1 = d.text_or(rec, "intro_text_1", Some(MAX_INTRO_CHARS));
        let intro_text_2 = d.text_or(rec, "intro_text_2", Some(MAX_INTRO_CHARS));
        let intro_text_3 = d.text_or(rec, "intro_text_3", Some(MAX_INTRO_CHARS));
        let sound_filename = d.text_or(rec, "sound_filename", None);
        let published = d.or(rec, "published", false);
        Some(Self {
            name: name?,
            author: author?,
            intro_text_1: intro_text_1?,
            intro_text_2: intro_text_2?,
            intro_text_3: intro_text_3?,
            sound_filename: sound_filename?,
            published: published?,
        })
    }
}

/// Player state at mission start.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerInitial {
    pub interior: u8,
    #[serde(flatten)]
    pub position: Position,
    pub direction: f32,
    pub skin: Skin,
    pub health: u16,
    pub weapon: Weapon,
    pub ammo: u32,
}

impl Default for PlayerInitial {
    fn default() -> Self {
        Self {
            interior: 0,
            position: DEFAULT_PLAYER_POSITION,
            direction: 0.0,
            skin: Skin::default(),
            health: 100,
            weapon: Weapon::default(),
            ammo: 1_000_000,
        }
    }
}

impl PlayerInitial {
    fn decode(d: &mut Decoder, rec: &Record) -> Option<Self> {
        let defaults = Self::default();
        let interior = d.int_or(rec, "interior", 0..=i64::from(u8::MAX), defaults.interior);
        let position = d.position_or(rec, defaults.position);
        let direction = d.degrees(rec, "direction");
        let skin = d.or(rec, "skin", defaults.skin);
        let health = d.int_or(rec, "health", 0..=200, defaults.health);
        let weapon = d.or(rec, "weapon", defaults.weapon);
        let ammo = d.int_or(rec, "ammo", 0..=i64::from(u32::MAX), defaults.ammo);
        Some(Self {
            interior: interior?,
            position: position?,
            direction: direction?,
            skin: skin?,
            health: health?,
            weapon: weapon?,
            ammo: ammo?,
        })
    }
}

/// World and player state when the mission begins.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InitialSettings {
    /// Mission time limit in milliseconds, 0 for none.
    pub timelimit: u32,
    pub day_time: u8,
    pub weather: Weather,
    pub wanted_level_min: u8,
    pub wanted_level_max: u8,
    /// Los Santos riot mode.
    pub riot: bool,
    /// Show the mission timer.
    pub timed: bool,
    pub player: PlayerInitial,
}

impl Default for InitialSettings {
    fn default() -> Self {
        Self {
            timelimit: 0,
            day_time: 8,
            weather: Weather::default(),
            wanted_level_min: 0,
            wanted_level_max: 6,
            riot: false,
            timed: false,
            player: PlayerInitial::default(),
        }
    }
}

impl InitialSettings {
    fn decode(d: &mut Decoder, rec: &Record) -> Option<Self> {
        let defaults = Self::default();
        let timelimit = d.int_or(rec, "timelimit", 0..=i64::from(u32::MAX), defaults.timelimit);
        let day_time = d.int_or(rec, "day_time", 0..=23, defaults.day_time);
        let weather = d.or(rec, "weather", defaults.weather);
        let wanted_level_min = d.int_or(rec, "wanted_level_min", 0..=6, defaults.wanted_level_min);
        let wanted_level_max = d.int_or(rec, "wanted_level_max", 0..=6, defaults.wanted_level_max);
        let riot = d.or(rec, "riot", false);
        let timed = d.or(rec, "timed", false);
        let player = d.nested_or(rec, "player", PlayerInitial::default, PlayerInitial::decode);

        let (wanted_level_min, wanted_level_max) = (wanted_level_min?, wanted_level_max?);
        if wanted_level_min > wanted_level_max {
            d.report(
                "wanted_level_min",
                DecodeErrorKind::Invalid(format!(
                    "minimum wanted level {wanted_level_min} exceeds maximum {wanted_level_max}"
                )),
            );
            return None;
        }
        Some(Self {
            timelimit: timelimit?,
            day_time: day_time?,
            weather: weather?,
            wanted_level_min,
            wanted_level_max,
            riot: riot?,
            timed: timed?,
            player: player?,
        })
    }
}

/// The three path lists. Ids are scoped to their own list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PathsCollection {
    pub routes: Vec<Route>,
    pub movements: Vec<Route>,
    pub displacements: Vec<Route>,
}

impl PathsCollection {
    /// Points across all three lists; the game caps this total.
    pub fn total_points(&self) -> usize {
        self.iter().map(|route| route.points.len()).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes
            .iter()
            .chain(&self.movements)
            .chain(&self.displacements)
    }

    fn decode(d: &mut Decoder, rec: &Record) -> Option<Self> {
        let routes = decode_paths(d, rec, "routes", RouteKind::Route);
        let movements = decode_paths(d, rec, "movements", RouteKind::Movement);
        let displacements = decode_paths(d, rec, "displacements", RouteKind::Displacement);
        Some(Self {
            routes: routes?,
            movements: movements?,
            displacements: displacements?,
        })
    }
}

fn decode_paths(
    d: &mut Decoder,
    rec: &Record,
    list: &'static str,
    expected: RouteKind,
) -> Option<Vec<Route>> {
    let routes = d.list(rec, list, |d, _, inner| Route::decode(d, inner))?;
    for route in routes.iter().filter(|route| route.kind != expected) {
        tracing::warn!(
            list,
            id = route.id,
            kind = route.kind.as_str(),
            "path type does not match the list it is stored in"
        );
    }
    Some(routes)
}

/// A complete mission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mission {
    #[serde(rename = "mission")]
    pub info: MissionInfo,
    pub initial: InitialSettings,
    pub objectives: Vec<Objective>,
    pub actors: Vec<Actor>,
    pub cars: Vec<Car>,
    pub pickups: Vec<Pickup>,
    pub objects: Vec<Object>,
    pub paths: PathsCollection,
}

impl Mission {
    pub fn new(info: MissionInfo) -> Self {
        Self {
            info,
            initial: InitialSettings::default(),
            objectives: Vec::new(),
            actors: Vec::new(),
            cars: Vec::new(),
            pickups: Vec::new(),
            objects: Vec::new(),
            paths: PathsCollection::default(),
        }
    }

    /// Decode a mission from its JSON form.
    ///
    /// Every field is checked against its declared type and range. On
    /// failure the error list holds one entry per bad field, in document
    /// order; no partial mission is returned. Cross-references are not
    /// resolved here.
    pub fn from_json(value: &Value) -> Result<Self> {
        let mut d = Decoder::new();
        let mission = d.expect_record(value).and_then(|rec| Self::decode(&mut d, rec));
        let result = d.finish(mission);
        match &result {
            Ok(mission) => tracing::debug!(
                name = %mission.info.name,
                objectives = mission.objectives.len(),
                actors = mission.actors.len(),
                cars = mission.cars.len(),
                pickups = mission.pickups.len(),
                objects = mission.objects.len(),
                route_points = mission.paths.total_points(),
                "decoded mission"
            ),
            Err(errors) => tracing::debug!(errors = errors.len(), "mission failed to decode"),
        }
        result
    }

    /// Re-encode into the decomposed JSON form.
    pub fn to_json(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }

    fn decode(d: &mut Decoder, rec: &Record) -> Option<Self> {
        let info = d.nested_required(rec, "mission", MissionInfo::decode);
        let initial = d.nested_or(rec, "initial", InitialSettings::default, InitialSettings::decode);
        let objectives = d.list(rec, "objectives", Objective::decode);
        let actors = d.list(rec, "actors", |d, _, inner| Actor::decode(d, inner));
        let cars = d.list(rec, "cars", |d, _, inner| Car::decode(d, inner));
        let pickups = d.list(rec, "pickups", |d, _, inner| Pickup::decode(d, inner));
        let objects = d.list(rec, "objects", |d, _, inner| Object::decode(d, inner));
        let paths = d.nested_or(rec, "paths", PathsCollection::default, PathsCollection::decode);
        Some(Self {
            info: info?,
            initial: initial?,
            objectives: objectives?,
            actors: actors?,
            cars: cars?,
            pickups: pickups?,
            objects: objects?,
            paths: paths?,
        })
    }
}
