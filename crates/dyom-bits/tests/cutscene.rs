//! Tests for the cutscene behaviour composite.

use dyom_bits::{BitsError, CameraMode, CutsceneBehaviour};
use proptest::prelude::*;

#[test]
fn decode_reads_mode_and_flags() {
    let behaviour = CutsceneBehaviour::decode(4 | 256 | 2048).expect("legal behaviour");
    assert_eq!(behaviour.camera, CameraMode::ActorFirstPerson);
    assert!(behaviour.slow_motion);
    assert!(!behaviour.camera_shake);
    assert!(!behaviour.skip_fade);
    assert!(behaviour.skip_widescreen);
    assert_eq!(behaviour.encode(), 4 | 256 | 2048);
}

#[test]
fn rejects_camera_mode_above_eight() {
    assert_eq!(
        CutsceneBehaviour::decode(9 | 512),
        Err(BitsError::CameraModeOutOfRange {
            mode: 9,
            raw: 9 | 512
        })
    );
}

#[test]
fn high_bits_are_kept() {
    let raw = 1 | (1 << 16);
    let behaviour = CutsceneBehaviour::try_from(raw).expect("legal behaviour");
    assert_eq!(behaviour.camera, CameraMode::Linear);
    assert_eq!(behaviour.unknown_bits, 1 << 16);
    assert_eq!(behaviour.encode(), raw);
}

#[test]
fn actor_relative_modes() {
    let relative: Vec<u8> = CameraMode::ALL
        .iter()
        .filter(|mode| mode.is_actor_relative())
        .map(|mode| mode.raw())
        .collect();
    assert_eq!(relative, [3, 4, 5]);
}

#[test]
fn serializes_camera_mode_as_integer() {
    let behaviour = CutsceneBehaviour {
        camera_shake: true,
        ..CutsceneBehaviour::with_camera(CameraMode::Smooth)
    };
    let json = serde_json::to_value(behaviour).expect("serialize behaviour");
    assert_eq!(
        json,
        serde_json::json!({
            "camera_mode": 2,
            "slow_motion": false,
            "camera_shake": true,
            "skip_fade": false,
            "skip_widescreen": false,
        })
    );
}

proptest! {
    #[test]
    fn legal_values_roundtrip(mode in 0u32..=8, flags in 0u32..16, high in 0u32..(1 << 20)) {
        let raw = mode | (flags << 8) | (high << 12);
        let decoded = CutsceneBehaviour::decode(raw).expect("legal value");
        prop_assert_eq!(u32::from(decoded.camera.raw()), mode);
        prop_assert_eq!(decoded.encode(), raw);
    }
}
