//! Population limits and the route point budget.

use dyom_model::Mission;

use crate::options::ValidationOptions;
use crate::result::ValidationResult;

pub(super) fn check_populations(mission: &Mission, options: &ValidationOptions) -> ValidationResult {
    let limits = &options.limits;
    let populations = [
        ("Objectives", "objectives", mission.objectives.len(), limits.objectives),
        ("Actors", "actors", mission.actors.len(), limits.actors),
        ("Cars", "cars", mission.cars.len(), limits.cars),
        ("Pickups", "pickups", mission.pickups.len(), limits.pickups),
        ("Objects", "objects", mission.objects.len(), limits.objects),
    ];

    let mut result = ValidationResult::new();
    for (label, kind, count, max) in populations {
        result.add_info(format!("{label}: {count}/{max}"));
        if count > max {
            tracing::debug!(kind, count, max, "population over limit");
            result.add_error(format!("Too many {kind}: {count} (max: {max})"));
        } else if options.approaching(count, max) {
            result.add_warning(format!("Approaching limit for {kind}: {count}/{max}"));
        }
    }
    result
}

pub(super) fn check_route_points(mission: &Mission, options: &ValidationOptions) -> ValidationResult {
    let total = mission.paths.total_points();
    let max = options.limits.route_points;

    let mut result = ValidationResult::new();
    result.add_info(format!("Total route points: {total}/{max}"));
    if total > max {
        tracing::debug!(total, max, "route points over budget");
        result.add_error(format!("Too many total route points: {total} (max: {max})"));
    } else if options.approaching(total, max) {
        result.add_warning(format!("Approaching route point limit: {total}/{max}"));
    }
    result
}
