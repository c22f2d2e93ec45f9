//! Reference resolution.
//!
//! Entity references are ordinals into their collection. Path references
//! are ids, scoped to one of the three path lists; the lists never share a
//! namespace. Negative values mean "no reference" and are skipped.

use std::collections::BTreeSet;

use dyom_model::{EntityRef, Mission, RefKind, Route};

use crate::result::ValidationResult;

/// Everything a reference may resolve to.
struct ReferenceIndex {
    actors: usize,
    cars: usize,
    objects: usize,
    pickups: usize,
    routes: BTreeSet<i32>,
    movements: BTreeSet<i32>,
    displacements: BTreeSet<i32>,
}

impl ReferenceIndex {
    fn new(mission: &Mission) -> Self {
        fn ids(routes: &[Route]) -> BTreeSet<i32> {
            routes.iter().map(|route| route.id).collect()
        }

        Self {
            actors: mission.actors.len(),
            cars: mission.cars.len(),
            objects: mission.objects.len(),
            pickups: mission.pickups.len(),
            routes: ids(&mission.paths.routes),
            movements: ids(&mission.paths.movements),
            displacements: ids(&mission.paths.displacements),
        }
    }

    fn resolves(&self, reference: &EntityRef) -> bool {
        let value = reference.value;
        let ordinal = |len: usize| usize::try_from(value).is_ok_and(|index| index < len);
        match reference.kind {
            RefKind::Actor => ordinal(self.actors),
            RefKind::Car => ordinal(self.cars),
            RefKind::Object => ordinal(self.objects),
            RefKind::Pickup => ordinal(self.pickups),
            RefKind::Route => self.routes.contains(&value),
            RefKind::Movement => self.movements.contains(&value),
            RefKind::Displacement => self.displacements.contains(&value),
            // vehicle animations store a car index in the route slot
            RefKind::RouteOrCar => self.routes.contains(&value) || ordinal(self.cars),
        }
    }

    fn check(
        &self,
        result: &mut ValidationResult,
        owner: &str,
        index: usize,
        references: impl IntoIterator<Item = EntityRef>,
    ) {
        for reference in references.into_iter().filter(EntityRef::is_set) {
            if !self.resolves(&reference) {
                tracing::debug!(
                    owner,
                    index,
                    field = reference.field,
                    kind = %reference.kind,
                    value = reference.value,
                    "unresolved reference"
                );
                result.add_error(format!(
                    "{owner} {index}: Invalid {} {}",
                    reference.field, reference.value
                ));
            }
        }
    }
}

pub(super) fn check_entities(mission: &Mission) -> ValidationResult {
    let index = ReferenceIndex::new(mission);
    let mut result = ValidationResult::new();
    for (i, actor) in mission.actors.iter().enumerate() {
        index.check(&mut result, "Actor", i, actor.references());
    }
    for (i, object) in mission.objects.iter().enumerate() {
        index.check(&mut result, "Object", i, object.references());
    }
    result
}

pub(super) fn check_objectives(mission: &Mission) -> ValidationResult {
    let index = ReferenceIndex::new(mission);
    let mut result = ValidationResult::new();
    for (i, objective) in mission.objectives.iter().enumerate() {
        index.check(&mut result, "Objective", i, objective.references());
    }
    result
}
