//! Placed objects and their interior/behaviour composite.

use dyom_bits::{BitsError, MAX_INTERIOR_ID, ObjectBehaviour, ObjectInterior};
use serde::Serialize;
use serde_json::Value;

use crate::decode::{Decoder, FieldValue, Record, int_in, present};
use crate::error::{DecodeErrorKind, RangeError};
use crate::geometry::{MAX_DEGREES, Position, Rotation};
use crate::lifetime::Lifetime;
use crate::primitives::ObjectModel;
use crate::references::{EntityRef, RefKind};

/// A model or effect placed in the world.
///
/// `interior` and `behaviour` are stored decomposed; the legacy format
/// packs them into one integer, see [`Object::packed_interior`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Object {
    pub object_id: ObjectModel,
    #[serde(flatten)]
    pub position: Position,
    #[serde(flatten)]
    pub rotation: Rotation,
    pub interior: u8,
    pub behaviour: ObjectBehaviour,
    /// Path followed when `behaviour` is not `None`: a displacement id for
    /// `DisplaceOnApproach`, a movement id otherwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_id: Option<i32>,
    #[serde(flatten)]
    pub lifetime: Lifetime,
}

impl Object {
    pub fn new(object_id: ObjectModel, position: Position) -> Self {
        Self {
            object_id,
            position,
            rotation: Rotation::default(),
            interior: 0,
            behaviour: ObjectBehaviour::None,
            route_id: None,
            lifetime: Lifetime::default(),
        }
    }

    /// The legacy `interior + (behaviour << 6)` value.
    pub fn packed_interior(&self) -> Result<u32, BitsError> {
        ObjectInterior::new(self.interior, self.behaviour).map(|packed| packed.encode())
    }

    pub fn references(&self) -> impl Iterator<Item = EntityRef> + '_ {
        let behaviour = self.behaviour;
        self.route_id.into_iter().filter_map(move |route| match behaviour {
            ObjectBehaviour::None => None,
            ObjectBehaviour::DisplaceOnApproach => Some(EntityRef::new(
                "displacement_id",
                RefKind::Displacement,
                route,
            )),
            ObjectBehaviour::MoveSlow | ObjectBehaviour::MoveNormal | ObjectBehaviour::MoveFast => {
                Some(EntityRef::new("movement_id", RefKind::Movement, route))
            }
        })
    }

    pub(crate) fn decode(d: &mut Decoder, rec: &Record) -> Option<Self> {
        let object_id = d.required::<ObjectModel>(rec, "object_id");
        let position = d.position(rec);
        let rotation = d.rotation(rec, Some(0.0..=MAX_DEGREES));
        let interior = decode_interior(d, rec);
        let route_id = d.int_optional(rec, "route_id", i64::from(i32::MIN)..=i64::from(i32::MAX));
        let lifetime = Lifetime::decode(d, rec);

        let (interior, behaviour) = interior?;
        let route_id = route_id?;
        if behaviour.needs_route() && route_id.is_none() {
            d.report(
                "route_id",
                DecodeErrorKind::Invalid(format!(
                    "required when behaviour is {}",
                    behaviour.raw()
                )),
            );
            return None;
        }
        if !behaviour.needs_route() && route_id.is_some() {
            d.report(
                "route_id",
                DecodeErrorKind::Invalid("only allowed when behaviour is not 0".to_string()),
            );
            return None;
        }
        Some(Self {
            object_id: object_id?,
            position: position?,
            rotation: rotation?,
            interior,
            behaviour,
            route_id,
            lifetime: lifetime?,
        })
    }
}

/// Accepts the decomposed `interior` + `behaviour` pair, or a packed
/// legacy `interior` when no `behaviour` key is present.
fn decode_interior(d: &mut Decoder, rec: &Record) -> Option<(u8, ObjectBehaviour)> {
    let raw: Option<u32> = d.int_or(rec, "interior", 0..=i64::from(u32::MAX), 0);
    if present(rec, "behaviour").is_none() {
        return match ObjectInterior::decode(raw?) {
            Ok(packed) => Some((packed.interior_id(), packed.behaviour())),
            Err(error) => {
                d.report("interior", error.into());
                None
            }
        };
    }
    let behaviour = d.required::<ObjectBehaviour>(rec, "behaviour");
    let raw = raw?;
    if raw > u32::from(MAX_INTERIOR_ID) {
        d.report(
            "interior",
            RangeError::Above {
                what: "interior",
                value: i64::from(raw),
                max: i64::from(MAX_INTERIOR_ID),
            }
            .into(),
        );
        return None;
    }
    // raw <= 7 here
    Some((raw as u8, behaviour?))
}

impl FieldValue for ObjectBehaviour {
    fn from_json(value: &Value) -> Result<Self, DecodeErrorKind> {
        let raw: u32 = int_in(value, "ObjectBehaviour", 0, i64::from(u32::MAX))?;
        ObjectBehaviour::from_raw(raw).ok_or_else(|| {
            RangeError::Unknown {
                what: "ObjectBehaviour",
                value: i64::from(raw),
            }
            .into()
        })
    }
}
