//! Typed document model for DYOM missions.
//!
//! A mission is decoded from its JSON form with [`Mission::from_json`].
//! Decoding checks types, ranges and the packed composites field by field
//! and collects every failure with its document path. Cross-references and
//! engine limits are left to the validator crate.
//!
//! ```
//! use dyom_model::Mission;
//! use serde_json::json;
//!
//! let mission = Mission::from_json(&json!({
//!     "mission": { "name": "Heist", "author": "CJ" },
//!     "actors": [
//!         { "skin": 0, "position_x": 1.0, "position_y": 2.0, "position_z": 3.0 }
//!     ]
//! }))
//! .unwrap();
//! assert_eq!(mission.actors.len(), 1);
//! assert_eq!(mission.initial.day_time, 8);
//! ```

pub mod actor;
pub mod car;
mod decode;
pub mod error;
pub mod geometry;
pub mod lifetime;
pub mod mission;
pub mod object;
pub mod objectives;
pub mod pickup;
pub mod primitives;
pub mod references;
pub mod route;
pub mod schema;

pub use actor::{Actor, AnimationInfo};
pub use car::Car;
pub use error::{DecodeError, DecodeErrorKind, DecodeErrors, RangeError, Result};
pub use geometry::{Position, Rotation};
pub use lifetime::{Lifetime, NEVER_DESPAWN};
pub use mission::{InitialSettings, Mission, MissionInfo, PathsCollection, PlayerInitial};
pub use object::Object;
pub use objectives::{LegacySlots, Objective, ObjectiveBase, ObjectiveType, SlotKind, SlotValue};
pub use pickup::Pickup;
pub use primitives::{
    Animation, CarModel, CheckpointShape, CitizenBehaviourMode, DriverBehaviour, Gang,
    ObjectInteraction, ObjectModel, PaintColor, PickupBehaviour, RadarMarker, Skin,
    VehicleSeat, Weapon, Weather,
};
pub use references::{EntityRef, RefKind};
pub use route::{Route, RouteKind, RoutePoint};
pub use schema::{Describe, FieldDescriptor, Presence, TypeDescriptor};

pub use dyom_bits::{
    ActorFlags, CameraMode, CarFlags, CutsceneBehaviour, ObjectBehaviour, PickupObjectiveFlags,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
