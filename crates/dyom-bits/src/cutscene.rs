//! Cutscene `behaviour` composite.
//!
//! | Bits  | Meaning                         |
//! |-------|---------------------------------|
//! | 0-7   | camera mode (0..=8)             |
//! | 8     | slow motion                     |
//! | 9     | camera shake                    |
//! | 10    | skip fade in/out                |
//! | 11    | skip widescreen bars            |
//! | 12-31 | not assigned, carried verbatim  |

use serde::{Serialize, Serializer};

use crate::error::{BitsError, Result};

const MODE_MASK: u32 = 0xFF;
const SLOW_MOTION: u32 = 1 << 8;
const CAMERA_SHAKE: u32 = 1 << 9;
const SKIP_FADE: u32 = 1 << 10;
const SKIP_WIDESCREEN: u32 = 1 << 11;
const KNOWN_BITS: u32 = MODE_MASK | SLOW_MOTION | CAMERA_SHAKE | SKIP_FADE | SKIP_WIDESCREEN;

/// Camera behaviour during a cutscene.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CameraMode {
    #[default]
    Static,
    /// Linear move from the position to the target.
    Linear,
    /// Eased move from the position to the target.
    Smooth,
    ActorFollow,
    ActorFirstPerson,
    ActorThirdPerson,
    PlayerFollow,
    PlayerFirstPerson,
    PlayerThirdPerson,
}

impl CameraMode {
    pub const ALL: [CameraMode; 9] = [
        CameraMode::Static,
        CameraMode::Linear,
        CameraMode::Smooth,
        CameraMode::ActorFollow,
        CameraMode::ActorFirstPerson,
        CameraMode::ActorThirdPerson,
        CameraMode::PlayerFollow,
        CameraMode::PlayerFirstPerson,
        CameraMode::PlayerThirdPerson,
    ];

    pub const fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            0 => Some(Self::Static),
            1 => Some(Self::Linear),
            2 => Some(Self::Smooth),
            3 => Some(Self::ActorFollow),
            4 => Some(Self::ActorFirstPerson),
            5 => Some(Self::ActorThirdPerson),
            6 => Some(Self::PlayerFollow),
            7 => Some(Self::PlayerFirstPerson),
            8 => Some(Self::PlayerThirdPerson),
            _ => None,
        }
    }

    pub const fn raw(self) -> u8 {
        match self {
            Self::Static => 0,
            Self::Linear => 1,
            Self::Smooth => 2,
            Self::ActorFollow => 3,
            Self::ActorFirstPerson => 4,
            Self::ActorThirdPerson => 5,
            Self::PlayerFollow => 6,
            Self::PlayerFirstPerson => 7,
            Self::PlayerThirdPerson => 8,
        }
    }

    /// Modes 3..=5 look at an actor and use the cutscene's actor index.
    pub const fn is_actor_relative(self) -> bool {
        matches!(
            self,
            Self::ActorFollow | Self::ActorFirstPerson | Self::ActorThirdPerson
        )
    }
}

impl Serialize for CameraMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.raw())
    }
}

/// Decoded cutscene `behaviour` field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct CutsceneBehaviour {
    #[serde(rename = "camera_mode")]
    pub camera: CameraMode,
    pub slow_motion: bool,
    pub camera_shake: bool,
    pub skip_fade: bool,
    pub skip_widescreen: bool,
    /// Bits 12-31, kept verbatim.
    #[serde(skip_serializing_if = "is_zero")]
    pub unknown_bits: u32,
}

fn is_zero(value: &u32) -> bool {
    *value == 0
}

impl CutsceneBehaviour {
    pub const fn with_camera(camera: CameraMode) -> Self {
        Self {
            camera,
            slow_motion: false,
            camera_shake: false,
            skip_fade: false,
            skip_widescreen: false,
            unknown_bits: 0,
        }
    }

    /// Split a packed value. Fails when the low byte is not a camera mode.
    pub fn decode(raw: u32) -> Result<Self> {
        let mode = raw & MODE_MASK;
        let camera =
            CameraMode::from_raw(mode).ok_or(BitsError::CameraModeOutOfRange { mode, raw })?;
        Ok(Self {
            camera,
            slow_motion: raw & SLOW_MOTION != 0,
            camera_shake: raw & CAMERA_SHAKE != 0,
            skip_fade: raw & SKIP_FADE != 0,
            skip_widescreen: raw & SKIP_WIDESCREEN != 0,
            unknown_bits: raw & !KNOWN_BITS,
        })
    }

    #[must_use]
    pub const fn encode(&self) -> u32 {
        let mut raw = (self.camera.raw() as u32) | (self.unknown_bits & !KNOWN_BITS);
        if self.slow_motion {
            raw |= SLOW_MOTION;
        }
        if self.camera_shake {
            raw |= CAMERA_SHAKE;
        }
        if self.skip_fade {
            raw |= SKIP_FADE;
        }
        if self.skip_widescreen {
            raw |= SKIP_WIDESCREEN;
        }
        raw
    }
}

impl TryFrom<u32> for CutsceneBehaviour {
    type Error = BitsError;

    fn try_from(raw: u32) -> Result<Self> {
        Self::decode(raw)
    }
}
