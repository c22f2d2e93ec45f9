//! Validation limits and thresholds.
//!
//! The defaults are the engine's own caps. A TOML file can lower them for
//! tooling that targets a stricter build:
//!
//! ```toml
//! warn_ratio = 0.8
//!
//! [limits]
//! actors = 60
//! ```

use serde::{Deserialize, Serialize};

use crate::error::OptionsError;

pub const MAX_OBJECTIVES: usize = 100;
pub const MAX_ACTORS: usize = 100;
pub const MAX_CARS: usize = 50;
pub const MAX_PICKUPS: usize = 50;
pub const MAX_OBJECTS: usize = 100;
/// Shared by routes, movements and displacements.
pub const MAX_ROUTE_POINTS: usize = 399;

pub const DEFAULT_WARN_RATIO: f64 = 0.9;

/// Maximum population per collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Limits {
    pub objectives: usize,
    pub actors: usize,
    pub cars: usize,
    pub pickups: usize,
    pub objects: usize,
    pub route_points: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            objectives: MAX_OBJECTIVES,
            actors: MAX_ACTORS,
            cars: MAX_CARS,
            pickups: MAX_PICKUPS,
            objects: MAX_OBJECTS,
            route_points: MAX_ROUTE_POINTS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationOptions {
    pub limits: Limits,
    /// Fraction of a limit above which a count draws a warning.
    pub warn_ratio: f64,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            limits: Limits::default(),
            warn_ratio: DEFAULT_WARN_RATIO,
        }
    }
}

impl ValidationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_warn_ratio(mut self, warn_ratio: f64) -> Self {
        self.warn_ratio = warn_ratio;
        self
    }

    /// Parse options from TOML. Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, OptionsError> {
        let options: Self = toml::from_str(source)?;
        options.check()?;
        tracing::debug!(
            warn_ratio = options.warn_ratio,
            route_points = options.limits.route_points,
            "loaded validation options"
        );
        Ok(options)
    }

    pub fn check(&self) -> Result<(), OptionsError> {
        if !(self.warn_ratio > 0.0 && self.warn_ratio <= 1.0) {
            return Err(OptionsError::WarnRatio {
                value: self.warn_ratio,
            });
        }
        Ok(())
    }

    /// Whether `count` falls in the warning band `ratio * max < count < max`.
    pub fn approaching(&self, count: usize, max: usize) -> bool {
        count < max && count as f64 > max as f64 * self.warn_ratio
    }
}
