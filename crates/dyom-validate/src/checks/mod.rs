//! Validation check modules.
//!
//! Each pass reads the mission and returns its own result. Passes never
//! depend on each other, so all of them always run.

mod limits;
mod references;

use dyom_model::Mission;

use crate::options::ValidationOptions;
use crate::result::ValidationResult;

/// Run every pass and concatenate their results in pass order.
pub(crate) fn run_all(mission: &Mission, options: &ValidationOptions) -> ValidationResult {
    let mut result = ValidationResult::new();

    // 1. Entity and objective population limits
    result.merge(limits::check_populations(mission, options));

    // 2. Route point budget shared by all path lists
    result.merge(limits::check_route_points(mission, options));

    // 3. Route references held by actors and objects
    result.merge(references::check_entities(mission));

    // 4. Entity and path references held by objectives
    result.merge(references::check_objectives(mission));

    result
}
