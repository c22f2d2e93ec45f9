//! Error types for composite field decoding.

use thiserror::Error;

/// Errors raised when a packed integer does not describe a legal value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BitsError {
    /// Interior id bits (0-5) hold a value above 7.
    #[error("interior id {interior} exceeds 7 (packed value {raw})")]
    InteriorOutOfRange { interior: u32, raw: u32 },

    /// Object behaviour id is not one of 0..=4.
    #[error("object behaviour {behaviour} is not in 0..=4 (packed value {raw})")]
    BehaviourOutOfRange { behaviour: u32, raw: u32 },

    /// Cutscene camera mode (low byte) is not one of 0..=8.
    #[error("camera mode {mode} is not in 0..=8 (packed value {raw})")]
    CameraModeOutOfRange { mode: u32, raw: u32 },
}

pub type Result<T> = std::result::Result<T, BitsError>;
