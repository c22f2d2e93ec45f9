//! Vehicles placed in the world.

use dyom_bits::CarFlags;
use serde::Serialize;

use crate::decode::{Decoder, Record};
use crate::error::DecodeErrorKind;
use crate::geometry::Position;
use crate::lifetime::Lifetime;
use crate::primitives::{CarModel, PaintColor};

pub const DEFAULT_CAR_HEALTH: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Car {
    pub car_id: CarModel,
    pub color_primary: PaintColor,
    pub color_secondary: PaintColor,
    #[serde(flatten)]
    pub position: Position,
    pub direction: f32,
    pub interior: u8,
    pub health: u32,
    pub flags: CarFlags,
    #[serde(flatten)]
    pub lifetime: Lifetime,
    /// The mission fails when this vehicle is destroyed.
    pub must_survive: bool,
}

impl Car {
    pub fn new(car_id: CarModel, position: Position) -> Self {
        Self {
            car_id,
            color_primary: PaintColor::default(),
            color_secondary: PaintColor::default(),
            position,
            direction: 0.0,
            interior: 0,
            health: DEFAULT_CAR_HEALTH,
            flags: CarFlags::default(),
            lifetime: Lifetime::default(),
            must_survive: false,
        }
    }

    pub(crate) fn decode(d: &mut Decoder, rec: &Record) -> Option<Self> {
        let car_id = d.required::<CarModel>(rec, "car_id");
        let color_primary = placed_color(d, rec, "color_primary");
        let color_secondary = placed_color(d, rec, "color_secondary");
        let position = d.position(rec);
        let direction = d.degrees(rec, "direction");
        let interior = d.int_or(rec, "interior", 0..=i64::from(u8::MAX), 0);
        let health = d.int_or(rec, "health", 0..=i64::from(u32::MAX), DEFAULT_CAR_HEALTH);
        let flags = d.or(rec, "flags", CarFlags::default());
        let lifetime = Lifetime::decode(d, rec);
        let must_survive = d.or(rec, "must_survive", false);
        Some(Self {
            car_id: car_id?,
            color_primary: color_primary?,
            color_secondary: color_secondary?,
            position: position?,
            direction: direction?,
            interior: interior?,
            health: health?,
            flags: flags?,
            lifetime: lifetime?,
            must_survive: must_survive?,
        })
    }
}

/// Placed vehicles need a concrete colour; only objectives may ask for a
/// random one.
fn placed_color(d: &mut Decoder, rec: &Record, name: &'static str) -> Option<PaintColor> {
    let color = d.required::<PaintColor>(rec, name)?;
    if color.is_random() {
        d.report(
            name,
            DecodeErrorKind::Invalid("random colour (-1) is not allowed on placed cars".to_string()),
        );
        return None;
    }
    Some(color)
}
