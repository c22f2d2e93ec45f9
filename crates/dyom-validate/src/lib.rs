//! Semantic validation of decoded DYOM missions.
//!
//! Decoding already guarantees every field is well-typed and in range.
//! Validation checks what a single field cannot: collection sizes against
//! the engine's caps, the route point budget shared by all path lists, and
//! that every reference points at something that exists.
//!
//! Validation never fails and never stops early; every pass runs and its
//! findings are collected into one [`ValidationResult`].
//!
//! ```
//! use dyom_model::{Mission, MissionInfo};
//!
//! let mission = Mission::new(MissionInfo::new("Empty", "Nobody"));
//! let result = dyom_validate::validate(&mission);
//! assert!(result.is_valid());
//! assert_eq!(result.info[0], "Objectives: 0/100");
//! ```

mod checks;
mod error;
pub mod options;
mod result;

use dyom_model::Mission;

pub use error::OptionsError;
pub use options::{Limits, ValidationOptions};
pub use result::ValidationResult;

/// Validate with the engine's default limits.
pub fn validate(mission: &Mission) -> ValidationResult {
    validate_with(mission, &ValidationOptions::default())
}

pub fn validate_with(mission: &Mission, options: &ValidationOptions) -> ValidationResult {
    let result = checks::run_all(mission, options);
    tracing::debug!(
        mission = %mission.info.name,
        errors = result.errors.len(),
        warnings = result.warnings.len(),
        "validated mission"
    );
    result
}
