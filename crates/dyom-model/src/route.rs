//! Paths: actor routes, object movements and object displacements.

use serde::Serialize;
use serde_json::Value;

use crate::decode::{Decoder, FieldValue, Record, json_kind};
use crate::error::DecodeErrorKind;
use crate::geometry::{Position, Rotation};

/// Which list a path belongs in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteKind {
    /// Waypoints walked or driven by actors.
    #[default]
    Route,
    /// Looping path followed by an object.
    Movement,
    /// One-shot move of an object, timed by `duration`.
    Displacement,
    Invalid,
}

impl RouteKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            RouteKind::Route => "route",
            RouteKind::Movement => "movement",
            RouteKind::Displacement => "displacement",
            RouteKind::Invalid => "invalid",
        }
    }
}

impl FieldValue for RouteKind {
    fn from_json(value: &Value) -> Result<Self, DecodeErrorKind> {
        match value.as_str() {
            Some("route") => Ok(RouteKind::Route),
            Some("movement") => Ok(RouteKind::Movement),
            Some("displacement") => Ok(RouteKind::Displacement),
            Some("invalid") => Ok(RouteKind::Invalid),
            Some(other) => Err(DecodeErrorKind::Invalid(format!(
                "unknown route type `{other}`"
            ))),
            None => Err(DecodeErrorKind::WrongType {
                expected: "string",
                found: json_kind(value),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RoutePoint {
    #[serde(flatten)]
    pub position: Position,
    /// Only used by movements.
    #[serde(flatten)]
    pub rotation: Rotation,
}

impl RoutePoint {
    pub const fn at(position: Position) -> Self {
        Self {
            position,
            rotation: Rotation::new(0.0, 0.0, 0.0),
        }
    }

    fn decode(d: &mut Decoder, rec: &Record) -> Option<Self> {
        let position = d.position_or(rec, Position::default());
        let rotation = d.rotation(rec, None);
        Some(Self {
            position: position?,
            rotation: rotation?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    /// Id that actors and objects use to refer to this path.
    pub id: i32,
    #[serde(rename = "type")]
    pub kind: RouteKind,
    pub points: Vec<RoutePoint>,
    #[serde(rename = "loop")]
    pub looped: bool,
    /// Seconds a displacement takes.
    pub duration: f32,
    pub trigger_diameter: f32,
}

impl Route {
    pub fn new(id: i32, kind: RouteKind) -> Self {
        Self {
            id,
            kind,
            points: Vec::new(),
            looped: false,
            duration: 1.0,
            trigger_diameter: 1.0,
        }
    }

    pub fn with_points(mut self, points: impl IntoIterator<Item = RoutePoint>) -> Self {
        self.points.extend(points);
        self
    }

    pub(crate) fn decode(d: &mut Decoder, rec: &Record) -> Option<Self> {
        let id = d.int_required(rec, "id", 0..=i64::from(i32::MAX));
        let kind = d.required::<RouteKind>(rec, "type");
        let points = d.list(rec, "points", |d, _, point| RoutePoint::decode(d, point));
        let looped = d.or(rec, "loop", false);
        let duration = d.float_or(rec, "duration", Some(0.0..=f32::MAX), 1.0);
        let trigger_diameter = d.float_or(rec, "trigger_diameter", Some(0.0..=f32::MAX), 1.0);
        Some(Self {
            id: id?,
            kind: kind?,
            points: points?,
            looped: looped?,
            duration: duration?,
            trigger_diameter: trigger_diameter?,
        })
    }
}
