//! Bit-packed composite fields of the DYOM mission format.
//!
//! The legacy mission file stores several logical values inside a single
//! integer. This crate holds the packing arithmetic for those fields and
//! nothing else, so a binary reader/writer can reuse it without pulling in
//! the document model.
//!
//! # Composites
//!
//! | Field                        | Layout                                             |
//! |------------------------------|----------------------------------------------------|
//! | actor / car / pickup `flags` | one bit per named flag, unnamed bits kept opaque   |
//! | object `interior`            | `interior_id` in bits 0-2, behaviour from bit 6 up |
//! | cutscene `behaviour`         | camera mode in the low byte, flags in bits 8-11    |
//!
//! Every codec is a pair of pure functions with `encode(decode(x)) == x`
//! for every legal `x`.
//!
//! ```
//! use dyom_bits::{ObjectBehaviour, ObjectInterior};
//!
//! let packed = ObjectInterior::decode(194).unwrap();
//! assert_eq!(packed.interior_id(), 2);
//! assert_eq!(packed.behaviour(), ObjectBehaviour::MoveNormal);
//! assert_eq!(packed.encode(), 194);
//! ```

mod cutscene;
mod error;
mod flags;
mod interior;

pub use cutscene::{CameraMode, CutsceneBehaviour};
pub use error::{BitsError, Result};
pub use flags::{ActorFlags, CarFlags, PickupObjectiveFlags};
pub use interior::{MAX_INTERIOR_ID, ObjectBehaviour, ObjectInterior};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
