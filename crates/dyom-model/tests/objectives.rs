//! Tests for the objective union.

use dyom_model::objectives::{MIN_MONEY, ObjectiveTimelimit};
use dyom_model::{
    CarModel, CheckpointShape, CitizenBehaviourMode, DecodeErrorKind, Mission, ObjectInteraction,
    Objective, ObjectiveType, RadarMarker, RefKind,
};
use serde_json::{Value, json};

fn base(tag: u8) -> Value {
    let mut record = json!({
        "objective_type": tag,
        "position_x": 10.0,
        "position_y": 20.0,
        "position_z": 30.0
    });
    if tag == ObjectiveType::Cutscene.tag() {
        let map = record.as_object_mut().expect("record object");
        map.insert("position_icon_z".to_string(), json!(35.0));
        map.insert("target_position_x".to_string(), json!(0.0));
        map.insert("target_position_y".to_string(), json!(0.0));
        map.insert("target_position_z".to_string(), json!(0.0));
    }
    record
}

fn with(tag: u8, extra: Value) -> Value {
    let mut record = base(tag);
    let (Some(map), Value::Object(extra)) = (record.as_object_mut(), extra) else {
        panic!("expected objects");
    };
    map.extend(extra);
    record
}

fn decode(objectives: Vec<Value>) -> Mission {
    Mission::from_json(&json!({
        "mission": { "name": "Objectives", "author": "Tester" },
        "objectives": objectives
    }))
    .expect("decode objectives")
}

fn decode_one(record: Value) -> Objective {
    decode(vec![record]).objectives.remove(0)
}

#[test]
fn tags_skip_four() {
    let tags: Vec<u8> = ObjectiveType::ALL.iter().map(|kind| kind.tag()).collect();
    assert_eq!(tags.len(), 21);
    assert!(!tags.contains(&4));
    assert_eq!(tags.first(), Some(&1));
    assert_eq!(tags.last(), Some(&22));
    assert_eq!(ObjectiveType::from_tag(4), None);
    assert_eq!(ObjectiveType::from_tag(0), None);
    assert_eq!(ObjectiveType::from_tag(23), None);
}

#[test]
fn every_variant_decodes_from_its_base_fields() {
    let records: Vec<Value> = ObjectiveType::ALL.iter().map(|kind| base(kind.tag())).collect();
    let mission = decode(records);
    assert_eq!(mission.objectives.len(), ObjectiveType::ALL.len());
    for (objective, kind) in mission.objectives.iter().zip(ObjectiveType::ALL) {
        assert_eq!(objective.objective_type(), kind);
        assert_eq!(objective.base().position.y, 20.0);
        assert_eq!(objective.base().interior, 0);
    }
}

#[test]
fn type_names_follow_variants() {
    assert_eq!(ObjectiveType::Car.type_name(), "ObjectiveCar");
    assert_eq!(
        ObjectiveType::PlayerTeleportCar.type_name(),
        "ObjectivePlayerTeleportCar"
    );
}

#[test]
fn missing_tag_is_reported() {
    let errors = Mission::from_json(&json!({
        "mission": { "name": "Objectives", "author": "Tester" },
        "objectives": [{ "position_x": 0.0, "position_y": 0.0, "position_z": 0.0 }]
    }))
    .expect_err("objective without a tag");
    assert_eq!(
        errors.at("objectives[0].objective_type").map(|e| &e.kind),
        Some(&DecodeErrorKind::Missing)
    );
}

#[test]
fn base_position_is_required() {
    let errors = Mission::from_json(&json!({
        "mission": { "name": "Objectives", "author": "Tester" },
        "objectives": [{ "objective_type": 16, "position_x": 0.0 }]
    }))
    .expect_err("objective without a position");
    assert!(errors.at("objectives[0].position_y").is_some());
    assert!(errors.at("objectives[0].position_z").is_some());
}

// =============================================================================
// Variant defaults and fields
// =============================================================================

#[test]
fn car_defaults() {
    let Objective::Car(car) = decode_one(base(1)) else {
        panic!("expected car objective");
    };
    assert_eq!(car.car_id, CarModel::new(526).expect("model"));
    assert_eq!(car.color_secondary.get(), 36);
    assert_eq!(car.health, 1000);
    assert_eq!(car.radar_marker, RadarMarker::BLUE);
    assert!(car.text.is_empty());
}

#[test]
fn car_objective_allows_random_colour() {
    let Objective::Car(car) = decode_one(with(1, json!({ "color_primary": -1 }))) else {
        panic!("expected car objective");
    };
    assert!(car.color_primary.is_random());
}

#[test]
fn checkpoint_radius_is_bounded() {
    let Objective::Checkpoint(checkpoint) =
        decode_one(with(2, json!({ "radius": 12.5, "shape": 4 })))
    else {
        panic!("expected checkpoint");
    };
    assert_eq!(checkpoint.radius, 12.5);
    assert_eq!(checkpoint.shape, CheckpointShape::Ring);
    assert_eq!(checkpoint.radar_marker, RadarMarker::YELLOW);

    let errors = Mission::from_json(&json!({
        "mission": { "name": "Objectives", "author": "Tester" },
        "objectives": [with(2, json!({ "radius": 0.1 }))]
    }))
    .expect_err("radius below minimum");
    assert!(matches!(
        errors.at("objectives[0].radius").map(|e| &e.kind),
        Some(DecodeErrorKind::FloatRange { .. })
    ));
}

#[test]
fn pickup_flags() {
    let Objective::Pickup(pickup) = decode_one(with(3, json!({ "flags": 6 }))) else {
        panic!("expected pickup objective");
    };
    assert!(pickup.flags.collect_all);
    assert!(pickup.flags.counter);
    assert_eq!(pickup.object_id.get(), 1210);
}

#[test]
fn actor_objective_exposes_route_reference() {
    let Objective::Actor(actor) = decode_one(with(
        5,
        json!({ "animation": -2, "animation_info": { "route": 7 }, "text": "Follow him" }),
    )) else {
        panic!("expected actor objective");
    };
    assert_eq!(actor.skin.get(), 102);
    assert_eq!(actor.radar_marker, RadarMarker::RED);
    let objective = Objective::Actor(actor);
    assert_eq!(objective.text(), Some("Follow him"));
    let refs = objective.references();
    assert_eq!(refs.len(), 1);
    assert_eq!(refs[0].kind, RefKind::RouteOrCar);
    assert_eq!(refs[0].value, 7);
}

#[test]
fn cutscene_references_actor_only_in_actor_modes() {
    let tracking = decode_one(with(
        6,
        json!({ "behaviour": 3, "actor_idx": 2, "movement_id": 1 }),
    ));
    let refs = tracking.references();
    assert_eq!(refs.len(), 2);
    assert_eq!(refs[0].kind, RefKind::Actor);
    assert_eq!(refs[0].value, 2);
    assert_eq!(refs[1].kind, RefKind::Movement);

    let fixed = decode_one(with(6, json!({ "behaviour": 1, "actor_idx": 2 })));
    assert!(fixed.references().is_empty());
}

#[test]
fn cutscene_actor_index_is_bounded() {
    let errors = Mission::from_json(&json!({
        "mission": { "name": "Objectives", "author": "Tester" },
        "objectives": [with(6, json!({ "actor_idx": 100 }))]
    }))
    .expect_err("actor index above 99");
    assert!(errors.at("objectives[0].actor_idx").is_some());
}

#[test]
fn cutscene_requires_target() {
    let errors = Mission::from_json(&json!({
        "mission": { "name": "Objectives", "author": "Tester" },
        "objectives": [{
            "objective_type": 6,
            "position_x": 0.0, "position_y": 0.0, "position_z": 0.0,
            "position_icon_z": 1.0
        }]
    }))
    .expect_err("cutscene without a target");
    let paths: Vec<&str> = errors.iter().map(|e| e.path.as_str()).collect();
    assert_eq!(
        paths,
        [
            "objectives[0].target_position_x",
            "objectives[0].target_position_y",
            "objectives[0].target_position_z"
        ]
    );
}

#[test]
fn teleport_car_defaults() {
    let Objective::PlayerTeleportCar(teleport) = decode_one(base(9)) else {
        panic!("expected teleport car");
    };
    assert_eq!(teleport.car_id.get(), 405);
    assert_eq!(teleport.radar_marker, RadarMarker::NONE);
}

#[test]
fn timers_and_phone_call() {
    let mission = decode(vec![
        with(8, json!({ "duration": 5000, "text": "Go" })),
        with(10, json!({ "show_timer": true })),
        with(15, json!({ "duration": ObjectiveTimelimit::DISABLE })),
        base(18),
    ]);
    let [
        Objective::Countdown(countdown),
        Objective::Timeout(timeout),
        Objective::Timelimit(timelimit),
        Objective::PhoneCall(call),
    ] = mission.objectives.as_slice()
    else {
        panic!("unexpected variants");
    };
    assert_eq!(countdown.duration, 5000);
    assert!(timeout.show_timer);
    assert_eq!(timeout.duration, 3000);
    assert_eq!(timelimit.duration, -1);
    assert_eq!(call.duration, 4000);
}

#[test]
fn world_state_objectives() {
    let mission = decode(vec![
        with(11, json!({ "weather": 9 })),
        with(12, json!({ "hour": 23 })),
        with(13, json!({ "mode": 1 })),
        with(14, json!({ "level_current": 2, "level_min": 1, "level_max": 4 })),
    ]);
    let [
        Objective::Weather(weather),
        Objective::DayTime(day_time),
        Objective::CitizenBehaviour(citizens),
        Objective::WantedLevel(wanted),
    ] = mission.objectives.as_slice()
    else {
        panic!("unexpected variants");
    };
    assert_eq!(weather.weather.get(), 9);
    assert_eq!(day_time.hour, 23);
    assert_eq!(citizens.mode, CitizenBehaviourMode::Riot);
    assert_eq!((wanted.level_min, wanted.level_max), (1, 4));
}

#[test]
fn wanted_level_bounds_must_be_ordered() {
    let errors = Mission::from_json(&json!({
        "mission": { "name": "Objectives", "author": "Tester" },
        "objectives": [with(14, json!({ "level_min": 5, "level_max": 3 }))]
    }))
    .expect_err("min above max");
    assert!(errors.at("objectives[0].level_min").is_some());
}

#[test]
fn object_objective_interaction() {
    let Objective::Object(object) = decode_one(with(
        19,
        json!({ "objective": 2, "rotation_z": 90.0 }),
    )) else {
        panic!("expected object objective");
    };
    assert_eq!(object.objective, ObjectInteraction::Photograph);
    assert_eq!(object.rotation.z, 90.0);
    assert_eq!(object.object_id.get(), 1221);
}

#[test]
fn money_has_a_floor() {
    let Objective::MoneySub(money) = decode_one(with(21, json!({ "money": MIN_MONEY }))) else {
        panic!("expected money objective");
    };
    assert_eq!(money.money, MIN_MONEY);

    let errors = Mission::from_json(&json!({
        "mission": { "name": "Objectives", "author": "Tester" },
        "objectives": [with(20, json!({ "money": i64::from(MIN_MONEY) - 1 }))]
    }))
    .expect_err("money below floor");
    assert!(errors.at("objectives[0].money").is_some());
}

#[test]
fn text_only_on_variants_that_show_it() {
    let mission = decode(vec![base(7), base(16), base(17), with(2, json!({ "text": "Here" }))]);
    assert_eq!(mission.objectives[0].text(), None);
    assert_eq!(mission.objectives[1].text(), None);
    assert_eq!(mission.objectives[2].text(), None);
    assert_eq!(mission.objectives[3].text(), Some("Here"));
}

#[test]
fn base_mut_edits_shared_fields() {
    let mut objective = decode_one(base(16));
    objective.base_mut().interior = 3;
    assert_eq!(objective.base().interior, 3);
}

#[test]
fn serialized_objective_carries_its_tag() {
    let objective = decode_one(with(12, json!({ "hour": 6 })));
    let value = serde_json::to_value(&objective).expect("serialize");
    assert_eq!(value["objective_type"], json!(12));
    assert_eq!(value["hour"], json!(6));
    assert_eq!(value["position_x"], json!(10.0));
}
