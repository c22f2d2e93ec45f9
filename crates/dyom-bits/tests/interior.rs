//! Tests for the object interior composite.

use dyom_bits::{BitsError, MAX_INTERIOR_ID, ObjectBehaviour, ObjectInterior};
use proptest::prelude::*;

#[test]
fn decode_splits_interior_and_behaviour() {
    let interior = ObjectInterior::decode(194).expect("decode 194");
    assert_eq!(interior.interior_id(), 2);
    assert_eq!(interior.behaviour(), ObjectBehaviour::MoveNormal);
}

#[test]
fn plain_interior_has_no_behaviour() {
    let interior = ObjectInterior::decode(5).expect("decode 5");
    assert_eq!(interior.interior_id(), 5);
    assert_eq!(interior.behaviour(), ObjectBehaviour::None);
    assert!(!interior.behaviour().needs_route());
}

#[test]
fn new_encodes_packed_value() {
    let interior = ObjectInterior::new(2, ObjectBehaviour::MoveNormal).expect("valid parts");
    assert_eq!(interior.encode(), 194);

    let interior = ObjectInterior::new(0, ObjectBehaviour::DisplaceOnApproach).expect("valid parts");
    assert_eq!(interior.encode(), 64);
}

#[test]
fn rejects_interior_above_seven() {
    assert_eq!(
        ObjectInterior::decode(8),
        Err(BitsError::InteriorOutOfRange {
            interior: 8,
            raw: 8
        })
    );
    assert!(ObjectInterior::new(MAX_INTERIOR_ID + 1, ObjectBehaviour::None).is_err());
}

#[test]
fn rejects_unknown_behaviour() {
    // behaviour 5
    assert_eq!(
        ObjectInterior::try_from(320),
        Err(BitsError::BehaviourOutOfRange {
            behaviour: 5,
            raw: 320
        })
    );
}

#[test]
fn behaviour_route_kinds() {
    assert!(!ObjectBehaviour::DisplaceOnApproach.follows_movement());
    assert!(ObjectBehaviour::DisplaceOnApproach.needs_route());
    for raw in 2..=4 {
        let behaviour = ObjectBehaviour::from_raw(raw).expect("known behaviour");
        assert!(behaviour.follows_movement());
        assert_eq!(u32::from(behaviour.raw()), raw);
    }
    assert_eq!(ObjectBehaviour::from_raw(5), None);
}

proptest! {
    #[test]
    fn legal_values_roundtrip(interior in 0u32..=7, behaviour in 0u32..=4) {
        let raw = interior + (behaviour << 6);
        let decoded = ObjectInterior::decode(raw).expect("legal value");
        prop_assert_eq!(u32::from(decoded.interior_id()), interior);
        prop_assert_eq!(u32::from(decoded.behaviour().raw()), behaviour);
        prop_assert_eq!(decoded.encode(), raw);
    }

    #[test]
    fn decode_never_panics(raw in any::<u32>()) {
        if let Ok(decoded) = ObjectInterior::decode(raw) {
            prop_assert_eq!(decoded.encode(), raw);
        }
    }
}
