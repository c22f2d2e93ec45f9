//! World coordinates and orientation.

use serde::Serialize;

/// A point in world space. Serialized as `position_x/y/z`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Position {
    #[serde(rename = "position_x")]
    pub x: f32,
    #[serde(rename = "position_y")]
    pub y: f32,
    #[serde(rename = "position_z")]
    pub z: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Euler angles in degrees. Serialized as `rotation_x/y/z`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Rotation {
    #[serde(rename = "rotation_x")]
    pub x: f32,
    #[serde(rename = "rotation_y")]
    pub y: f32,
    #[serde(rename = "rotation_z")]
    pub z: f32,
}

impl Rotation {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Headings and rotations are stored in degrees, `0..=360`.
pub const MAX_DEGREES: f32 = 360.0;
