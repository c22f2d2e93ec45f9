//! Object `interior` composite.
//!
//! ```text
//! bit  31 ........ 6 | 5 4 3 | 2 1 0
//!      behaviour id  | zero  | interior id
//! ```
//!
//! `value = interior_id + (behaviour << 6)`.

use serde::{Serialize, Serializer};

use crate::error::{BitsError, Result};

const INTERIOR_BITS: u32 = 0x3F;
const BEHAVIOUR_SHIFT: u32 = 6;

/// Highest interior id that fits the packed layout.
pub const MAX_INTERIOR_ID: u8 = 7;

/// Movement behaviour of a placed object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ObjectBehaviour {
    /// Static object, no route.
    #[default]
    None,
    /// Moves along a displacement when the player comes close.
    DisplaceOnApproach,
    /// Loops along a movement path, slow.
    MoveSlow,
    /// Loops along a movement path, medium speed.
    MoveNormal,
    /// Loops along a movement path, fast.
    MoveFast,
}

impl ObjectBehaviour {
    pub const fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            0 => Some(Self::None),
            1 => Some(Self::DisplaceOnApproach),
            2 => Some(Self::MoveSlow),
            3 => Some(Self::MoveNormal),
            4 => Some(Self::MoveFast),
            _ => None,
        }
    }

    pub const fn raw(self) -> u8 {
        match self {
            Self::None => 0,
            Self::DisplaceOnApproach => 1,
            Self::MoveSlow => 2,
            Self::MoveNormal => 3,
            Self::MoveFast => 4,
        }
    }

    /// Every behaviour except `None` needs a route id.
    pub const fn needs_route(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Behaviours 2..=4 follow a movement path.
    pub const fn follows_movement(self) -> bool {
        matches!(self, Self::MoveSlow | Self::MoveNormal | Self::MoveFast)
    }
}

impl Serialize for ObjectBehaviour {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.raw())
    }
}

/// Decoded object `interior` field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ObjectInterior {
    interior_id: u8,
    behaviour: ObjectBehaviour,
}

impl ObjectInterior {
    /// Build from parts. Fails if `interior_id` does not fit in three bits.
    pub fn new(interior_id: u8, behaviour: ObjectBehaviour) -> Result<Self> {
        if interior_id > MAX_INTERIOR_ID {
            return Err(BitsError::InteriorOutOfRange {
                interior: u32::from(interior_id),
                raw: u32::from(interior_id) + (u32::from(behaviour.raw()) << BEHAVIOUR_SHIFT),
            });
        }
        Ok(Self {
            interior_id,
            behaviour,
        })
    }

    /// Split a packed value.
    ///
    /// Bits 3-5 must be clear: a set bit there means the interior id
    /// exceeds 7, which is reported instead of masked away.
    pub fn decode(raw: u32) -> Result<Self> {
        let interior = raw & INTERIOR_BITS;
        if interior > u32::from(MAX_INTERIOR_ID) {
            return Err(BitsError::InteriorOutOfRange { interior, raw });
        }
        let behaviour_raw = raw >> BEHAVIOUR_SHIFT;
        let behaviour = ObjectBehaviour::from_raw(behaviour_raw).ok_or(
            BitsError::BehaviourOutOfRange {
                behaviour: behaviour_raw,
                raw,
            },
        )?;
        Ok(Self {
            // interior <= 7 was checked above
            interior_id: interior as u8,
            behaviour,
        })
    }

    #[must_use]
    pub const fn encode(&self) -> u32 {
        (self.interior_id as u32) + ((self.behaviour.raw() as u32) << BEHAVIOUR_SHIFT)
    }

    pub const fn interior_id(&self) -> u8 {
        self.interior_id
    }

    pub const fn behaviour(&self) -> ObjectBehaviour {
        self.behaviour
    }
}

impl TryFrom<u32> for ObjectInterior {
    type Error = BitsError;

    fn try_from(raw: u32) -> Result<Self> {
        Self::decode(raw)
    }
}
