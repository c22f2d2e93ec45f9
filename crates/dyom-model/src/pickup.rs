//! Pickups: weapons, health, armour, money and custom models.

use serde::Serialize;

use crate::decode::{Decoder, Record};
use crate::geometry::Position;
use crate::lifetime::Lifetime;
use crate::primitives::{ObjectModel, PickupBehaviour};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pickup {
    pub object_id: ObjectModel,
    /// Ammunition for weapon pickups, 0 for the weapon's default.
    pub ammo: u32,
    pub behaviour: PickupBehaviour,
    #[serde(flatten)]
    pub position: Position,
    #[serde(flatten)]
    pub lifetime: Lifetime,
}

impl Pickup {
    pub fn new(object_id: ObjectModel, position: Position) -> Self {
        Self {
            object_id,
            ammo: 0,
            behaviour: PickupBehaviour::default(),
            position,
            lifetime: Lifetime::default(),
        }
    }

    pub(crate) fn decode(d: &mut Decoder, rec: &Record) -> Option<Self> {
        let object_id = d.required::<ObjectModel>(rec, "object_id");
        let ammo = d.int_or(rec, "ammo", 0..=i64::from(u32::MAX), 0);
        let behaviour = d.or(rec, "behaviour", PickupBehaviour::default());
        let position = d.position(rec);
        let lifetime = Lifetime::decode(d, rec);
        Some(Self {
            object_id: object_id?,
            ammo: ammo?,
            behaviour: behaviour?,
            position: position?,
            lifetime: lifetime?,
        })
    }
}
