//! Tests for reference resolution.

use dyom_model::{
    Actor, Animation, AnimationInfo, Car, CarModel, Mission, MissionInfo, Object,
    ObjectBehaviour, ObjectModel, Position, Route, RouteKind, Skin,
};
use dyom_validate::validate;
use serde_json::json;

fn mission() -> Mission {
    Mission::new(MissionInfo::new("References", "Tester"))
}

fn moving_object(behaviour: ObjectBehaviour, route_id: i32) -> Object {
    let mut object = Object::new(ObjectModel::new(1337).expect("model"), Position::default());
    object.behaviour = behaviour;
    object.route_id = Some(route_id);
    object
}

fn walking_actor(route: i32) -> Actor {
    let mut actor = Actor::new(Skin::new(0).expect("skin"), Position::default());
    actor.animation = Animation::WALK;
    actor.animation_info = Some(AnimationInfo {
        route: Some(route),
        ..AnimationInfo::default()
    });
    actor
}

// =============================================================================
// Objects
// =============================================================================

#[test]
fn displacing_object_resolves_against_displacements() {
    let mut mission = mission();
    mission.objects.push(moving_object(ObjectBehaviour::DisplaceOnApproach, 5));
    mission.paths.displacements.push(Route::new(5, RouteKind::Displacement));

    assert!(validate(&mission).is_valid());
}

#[test]
fn displacing_object_ignores_movements() {
    let mut mission = mission();
    mission.objects.push(moving_object(ObjectBehaviour::DisplaceOnApproach, 5));
    mission.paths.movements.push(Route::new(5, RouteKind::Movement));

    let result = validate(&mission);
    assert_eq!(result.errors, ["Object 0: Invalid displacement_id 5"]);
}

#[test]
fn moving_object_resolves_against_movements() {
    let mut mission = mission();
    mission.objects.push(moving_object(ObjectBehaviour::MoveSlow, 2));
    mission.objects.push(moving_object(ObjectBehaviour::MoveFast, 3));
    mission.paths.movements.push(Route::new(2, RouteKind::Movement));
    mission.paths.displacements.push(Route::new(3, RouteKind::Displacement));

    let result = validate(&mission);
    assert_eq!(result.errors, ["Object 1: Invalid movement_id 3"]);
}

#[test]
fn static_object_has_nothing_to_resolve() {
    let mut mission = mission();
    mission.objects.push(Object::new(
        ObjectModel::new(1337).expect("model"),
        Position::default(),
    ));
    assert!(validate(&mission).is_valid());
}

// =============================================================================
// Actors
// =============================================================================

#[test]
fn actor_route_must_exist() {
    let mut mission = mission();
    mission.actors.push(walking_actor(0));
    mission.actors.push(walking_actor(4));
    mission.paths.routes.push(Route::new(0, RouteKind::Route));

    let result = validate(&mission);
    assert_eq!(result.errors, ["Actor 1: Invalid route 4"]);
}

#[test]
fn negative_route_is_never_checked() {
    let mut mission = mission();
    mission.actors.push(walking_actor(-1));

    let result = validate(&mission);
    assert!(result.is_valid());
}

#[test]
fn vehicle_animation_may_name_a_car() {
    let mut mission = mission();
    let mut actor = Actor::new(Skin::new(0).expect("skin"), Position::default());
    actor.animation = Animation::VEHICLE_ENTER;
    actor.animation_info = Some(AnimationInfo {
        route: Some(1),
        ..AnimationInfo::default()
    });
    mission.actors.push(actor);
    let car = Car::new(CarModel::new(400).expect("model"), Position::default());
    mission.cars = vec![car; 2];

    assert!(validate(&mission).is_valid());

    mission.cars.truncate(1);
    assert_eq!(validate(&mission).errors, ["Actor 0: Invalid route 1"]);
}

#[test]
fn route_ids_are_scoped_per_list() {
    let mut mission = mission();
    mission.actors.push(walking_actor(7));
    mission.paths.movements.push(Route::new(7, RouteKind::Movement));
    mission.paths.displacements.push(Route::new(7, RouteKind::Displacement));

    let result = validate(&mission);
    assert_eq!(result.errors, ["Actor 0: Invalid route 7"]);
}

// =============================================================================
// Objectives
// =============================================================================

fn decode(document: serde_json::Value) -> Mission {
    Mission::from_json(&document).expect("decode mission")
}

#[test]
fn cutscene_references_resolve() {
    let mission = decode(json!({
        "mission": { "name": "References", "author": "Tester" },
        "objectives": [{
            "objective_type": 6,
            "position_x": 0.0, "position_y": 0.0, "position_z": 10.0,
            "position_icon_z": 10.0,
            "target_position_x": 1.0, "target_position_y": 1.0, "target_position_z": 1.0,
            "behaviour": 3,
            "actor_idx": 1,
            "movement_id": 2
        }],
        "actors": [
            { "skin": 0, "position_x": 0.0, "position_y": 0.0, "position_z": 0.0 }
        ],
        "paths": { "routes": [{ "id": 2, "type": "route" }] }
    }));

    let result = validate(&mission);
    assert_eq!(
        result.errors,
        [
            "Objective 0: Invalid actor_idx 1",
            "Objective 0: Invalid movement_id 2",
        ]
    );
}

#[test]
fn cutscene_actor_is_ignored_outside_actor_modes() {
    let mission = decode(json!({
        "mission": { "name": "References", "author": "Tester" },
        "objectives": [{
            "objective_type": 6,
            "position_x": 0.0, "position_y": 0.0, "position_z": 10.0,
            "position_icon_z": 10.0,
            "target_position_x": 1.0, "target_position_y": 1.0, "target_position_z": 1.0,
            "behaviour": 7,
            "actor_idx": 50
        }]
    }));
    assert!(validate(&mission).is_valid());
}

#[test]
fn actor_objective_route_resolves() {
    let mission = decode(json!({
        "mission": { "name": "References", "author": "Tester" },
        "objectives": [
            {
                "objective_type": 5,
                "position_x": 0.0, "position_y": 0.0, "position_z": 0.0,
                "animation": -3,
                "animation_info": { "route": 0 }
            },
            {
                "objective_type": 22,
                "position_x": 0.0, "position_y": 0.0, "position_z": 0.0,
                "animation": -2,
                "animation_info": { "route": 9 }
            }
        ],
        "paths": { "routes": [{ "id": 0, "type": "route" }] }
    }));

    let result = validate(&mission);
    assert_eq!(result.errors, ["Objective 1: Invalid route 9"]);
}

#[test]
fn errors_follow_pass_order() {
    let mut mission = decode(json!({
        "mission": { "name": "References", "author": "Tester" },
        "objectives": [{
            "objective_type": 22,
            "position_x": 0.0, "position_y": 0.0, "position_z": 0.0,
            "animation": -2,
            "animation_info": { "route": 3 }
        }]
    }));
    mission.objects.push(moving_object(ObjectBehaviour::MoveNormal, 1));
    mission.actors.push(walking_actor(2));

    let result = validate(&mission);
    assert_eq!(
        result.errors,
        [
            "Actor 0: Invalid route 2",
            "Object 0: Invalid movement_id 1",
            "Objective 0: Invalid route 3",
        ]
    );
}
