//! Tests for population limits and the route point budget.

use dyom_model::{
    Actor, Car, CarModel, Mission, MissionInfo, Position, Route, RouteKind, RoutePoint, Skin,
};
use dyom_validate::{Limits, ValidationOptions, validate, validate_with};

fn mission() -> Mission {
    Mission::new(MissionInfo::new("Limits", "Tester"))
}

fn with_actors(count: usize) -> Mission {
    let actor = Actor::new(Skin::new(0).expect("skin"), Position::default());
    let mut mission = mission();
    mission.actors = vec![actor; count];
    mission
}

fn route(id: i32, kind: RouteKind, points: usize) -> Route {
    Route::new(id, kind).with_points(std::iter::repeat_n(RoutePoint::default(), points))
}

fn mentions(messages: &[String], needle: &str) -> bool {
    messages.iter().any(|message| message.contains(needle))
}

#[test]
fn empty_mission_reports_every_count() {
    let result = validate(&mission());
    assert!(result.is_valid());
    assert!(result.warnings.is_empty());
    assert_eq!(
        result.info,
        [
            "Objectives: 0/100",
            "Actors: 0/100",
            "Cars: 0/50",
            "Pickups: 0/50",
            "Objects: 0/100",
            "Total route points: 0/399",
        ]
    );
}

#[test]
fn exactly_at_limit_is_silent() {
    let result = validate(&with_actors(100));
    assert!(result.is_valid());
    assert!(!mentions(&result.warnings, "actors"));
    assert!(mentions(&result.info, "Actors: 100/100"));
}

#[test]
fn above_ninety_percent_warns() {
    let result = validate(&with_actors(91));
    assert!(result.is_valid());
    assert_eq!(result.warnings, ["Approaching limit for actors: 91/100"]);
}

#[test]
fn ninety_percent_does_not_warn() {
    let result = validate(&with_actors(90));
    assert!(result.warnings.is_empty());
}

#[test]
fn over_limit_is_an_error() {
    let result = validate(&with_actors(101));
    assert!(!result.is_valid());
    assert_eq!(result.errors, ["Too many actors: 101 (max: 100)"]);
    assert!(result.warnings.is_empty());
}

#[test]
fn car_limit_is_fifty() {
    let car = Car::new(CarModel::new(400).expect("model"), Position::default());
    let mut mission = mission();
    mission.cars = vec![car; 51];
    let result = validate(&mission);
    assert_eq!(result.errors, ["Too many cars: 51 (max: 50)"]);
}

#[test]
fn route_points_at_budget_pass() {
    let mut mission = mission();
    mission.paths.routes.push(route(0, RouteKind::Route, 133));
    mission.paths.movements.push(route(0, RouteKind::Movement, 133));
    mission.paths.displacements.push(route(0, RouteKind::Displacement, 133));

    let result = validate(&mission);
    assert!(result.is_valid());
    assert!(mentions(&result.info, "Total route points: 399/399"));
    assert!(!mentions(&result.warnings, "route point"));
}

#[test]
fn route_points_over_budget_fail() {
    let mut mission = mission();
    mission.paths.routes.push(route(0, RouteKind::Route, 134));
    mission.paths.movements.push(route(0, RouteKind::Movement, 133));
    mission.paths.displacements.push(route(0, RouteKind::Displacement, 133));

    let result = validate(&mission);
    assert_eq!(result.errors, ["Too many total route points: 400 (max: 399)"]);
}

#[test]
fn route_points_near_budget_warn() {
    let mut mission = mission();
    mission.paths.routes.push(route(0, RouteKind::Route, 360));
    let result = validate(&mission);
    assert_eq!(result.warnings, ["Approaching route point limit: 360/399"]);
}

#[test]
fn custom_limits_apply() {
    let options = ValidationOptions::new()
        .with_limits(Limits {
            actors: 10,
            ..Limits::default()
        })
        .with_warn_ratio(0.5);

    let result = validate_with(&with_actors(6), &options);
    assert_eq!(result.warnings, ["Approaching limit for actors: 6/10"]);

    let result = validate_with(&with_actors(11), &options);
    assert_eq!(result.errors, ["Too many actors: 11 (max: 10)"]);
}

#[test]
fn every_pass_runs_after_a_failure() {
    let mut mission = with_actors(101);
    mission.paths.routes.push(route(0, RouteKind::Route, 400));
    let result = validate(&mission);
    assert_eq!(
        result.errors,
        [
            "Too many actors: 101 (max: 100)",
            "Too many total route points: 400 (max: 399)",
        ]
    );
}
