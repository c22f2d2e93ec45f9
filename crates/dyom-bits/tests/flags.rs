//! Tests for the flag set codecs.

use dyom_bits::{ActorFlags, CarFlags, PickupObjectiveFlags};
use proptest::prelude::*;

#[test]
fn actor_flags_decode_named_bits() {
    let flags = ActorFlags::decode(2 | 16 | 64);
    assert!(flags.hold_position);
    assert!(flags.headshot_immune);
    assert!(flags.health_bar);
    assert!(!flags.follow);
    assert_eq!(flags.unknown_bits, 0);
}

#[test]
fn unknown_bits_survive_encode() {
    // bit 0 and bit 20 are not named for actors
    let raw = 1 | (1 << 20) | 4;
    let flags = ActorFlags::decode(raw);
    assert!(flags.attack_direct);
    assert_eq!(flags.unknown_bits, 1 | (1 << 20));
    assert_eq!(flags.encode(), raw);
}

#[test]
fn car_must_destroy_is_bit_256() {
    let flags = CarFlags::decode(256 | 32);
    assert!(flags.must_destroy);
    assert!(flags.locked);
    assert!(!flags.driveby);
    assert_eq!(u32::from(flags), 288);
}

#[test]
fn pickup_objective_flags() {
    let flags = PickupObjectiveFlags::from(6);
    assert!(flags.collect_all);
    assert!(flags.counter);
    assert_eq!(PickupObjectiveFlags::NAMED_MASK, 6);
}

#[test]
fn set_and_get_by_name() {
    let mut flags = CarFlags::default();
    assert!(flags.set("immune_tyres", true));
    assert_eq!(flags.get("immune_tyres"), Some(true));
    assert_eq!(flags.encode(), 8);

    assert!(flags.set("immune_tyres", false));
    assert_eq!(flags.encode(), 0);

    assert!(!flags.set("wings", true));
    assert_eq!(flags.get("wings"), None);
}

#[test]
fn iter_lists_every_named_flag_in_order() {
    let flags = ActorFlags::decode(8);
    let names: Vec<_> = flags.iter().map(|(name, _)| name).collect();
    assert_eq!(
        names,
        [
            "hold_position",
            "attack_direct",
            "follow",
            "headshot_immune",
            "kill_whole_gang",
            "health_bar",
            "enemy_2",
        ]
    );
    let set: Vec<_> = flags.iter().filter(|(_, on)| *on).collect();
    assert_eq!(set, [("follow", true)]);
}

#[test]
fn serializes_as_named_booleans() {
    let json = serde_json::to_value(PickupObjectiveFlags::decode(2)).expect("serialize flags");
    assert_eq!(
        json,
        serde_json::json!({ "collect_all": true, "counter": false })
    );

    let json = serde_json::to_value(PickupObjectiveFlags::decode(2 | 64)).expect("serialize flags");
    assert_eq!(json["unknown_bits"], 64);
}

proptest! {
    #[test]
    fn actor_flags_roundtrip(raw in any::<u32>()) {
        prop_assert_eq!(ActorFlags::decode(raw).encode(), raw);
    }

    #[test]
    fn car_flags_roundtrip(raw in any::<u32>()) {
        prop_assert_eq!(CarFlags::decode(raw).encode(), raw);
    }

    #[test]
    fn pickup_flags_roundtrip(raw in any::<u32>()) {
        prop_assert_eq!(PickupObjectiveFlags::decode(raw).encode(), raw);
    }
}
