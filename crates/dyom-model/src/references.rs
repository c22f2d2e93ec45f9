//! Cross-collection references embedded in entities and objectives.
//!
//! A reference is a plain integer that is meant to index another
//! collection. The model only exposes them; resolving is left to the
//! validator.

use std::fmt;

/// The collection a reference points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RefKind {
    /// Ordinal position in `actors`.
    Actor,
    /// Ordinal position in `cars`.
    Car,
    /// Ordinal position in `objects`.
    Object,
    /// Ordinal position in `pickups`.
    Pickup,
    /// Id of an entry in `paths.routes`.
    Route,
    /// Id of an entry in `paths.movements`.
    Movement,
    /// Id of an entry in `paths.displacements`.
    Displacement,
    /// Route id, or a car ordinal for vehicle animations.
    RouteOrCar,
}

impl RefKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            RefKind::Actor => "actor",
            RefKind::Car => "car",
            RefKind::Object => "object",
            RefKind::Pickup => "pickup",
            RefKind::Route => "route",
            RefKind::Movement => "movement",
            RefKind::Displacement => "displacement",
            RefKind::RouteOrCar => "route or car",
        }
    }
}

impl fmt::Display for RefKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reference found in a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityRef {
    /// Name used when reporting the reference, usually the field name.
    pub field: &'static str,
    pub kind: RefKind,
    pub value: i32,
}

impl EntityRef {
    pub const fn new(field: &'static str, kind: RefKind, value: i32) -> Self {
        Self { field, kind, value }
    }

    /// Negative values mean "no reference".
    pub const fn is_set(&self) -> bool {
        self.value >= 0
    }
}
