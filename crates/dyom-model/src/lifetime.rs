//! Spawn/despawn window shared by every placeable entity.

use serde::Serialize;

use crate::decode::{Decoder, Record};

/// Despawn index meaning "stays until the mission ends".
pub const NEVER_DESPAWN: u16 = 1000;

/// Objective indices bounding the time an entity exists in the world.
///
/// The entity appears when objective `spawn` starts (0 is mission start)
/// and disappears when objective `despawn` starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Lifetime {
    pub spawn: u16,
    pub despawn: u16,
}

impl Default for Lifetime {
    fn default() -> Self {
        Self {
            spawn: 0,
            despawn: NEVER_DESPAWN,
        }
    }
}

impl Lifetime {
    pub const fn is_permanent(&self) -> bool {
        self.spawn == 0 && self.despawn == NEVER_DESPAWN
    }

    pub(crate) fn decode(d: &mut Decoder, rec: &Record) -> Option<Self> {
        let spawn = d.int_or(rec, "spawn", 0..=i64::from(u16::MAX), 0);
        let despawn = d.int_or(rec, "despawn", 0..=i64::from(NEVER_DESPAWN), NEVER_DESPAWN);
        Some(Self {
            spawn: spawn?,
            despawn: despawn?,
        })
    }
}
