//! Tests for the rendered validation report.

use dyom_model::{
    Actor, Car, CarModel, Mission, MissionInfo, Object, ObjectBehaviour, ObjectModel, Position,
    Skin,
};
use dyom_validate::{ValidationResult, validate};

fn report_mission() -> Mission {
    let mut mission = Mission::new(MissionInfo::new("Report", "Tester"));
    let actor = Actor::new(Skin::new(0).expect("skin"), Position::default());
    mission.actors = vec![actor; 91];
    let car = Car::new(CarModel::new(400).expect("model"), Position::default());
    mission.cars = vec![car; 51];
    let mut object = Object::new(ObjectModel::new(1337).expect("model"), Position::default());
    object.behaviour = ObjectBehaviour::DisplaceOnApproach;
    object.route_id = Some(5);
    mission.objects.push(object);
    mission
}

#[test]
fn render_groups_by_severity() {
    let result = validate(&report_mission());
    assert!(!result.is_valid());
    insta::assert_snapshot!(result.render(), @r"
    INFO: Objectives: 0/100
    INFO: Actors: 91/100
    INFO: Cars: 51/50
    INFO: Pickups: 0/50
    INFO: Objects: 1/100
    INFO: Total route points: 0/399
    WARNING: Approaching limit for actors: 91/100
    ERROR: Too many cars: 51 (max: 50)
    ERROR: Object 0: Invalid displacement_id 5
    ");
}

#[test]
fn result_serializes_as_three_lists() {
    let result = validate(&report_mission());
    insta::assert_json_snapshot!(result.errors, @r#"
    [
      "Too many cars: 51 (max: 50)",
      "Object 0: Invalid displacement_id 5"
    ]
    "#);
    let value = serde_json::to_value(&result).expect("serialize result");
    assert_eq!(value["warnings"].as_array().map(Vec::len), Some(1));
    assert_eq!(value["info"].as_array().map(Vec::len), Some(6));
}

#[test]
fn merge_keeps_lists_in_order() {
    let mut first = ValidationResult::new();
    first.add_info("a");
    first.add_error("x");
    let mut second = ValidationResult::new();
    second.add_info("b");
    second.add_warning("w");
    second.add_error("y");

    first.merge(second);
    assert_eq!(first.info, ["a", "b"]);
    assert_eq!(first.errors, ["x", "y"]);
    assert_eq!(first.total(), 5);
    assert_eq!(first.to_string(), "INFO: a\nINFO: b\nWARNING: w\nERROR: x\nERROR: y");
}

#[test]
fn empty_result_renders_nothing() {
    let result = ValidationResult::default();
    assert!(result.is_valid());
    assert_eq!(result.render(), "");
}
