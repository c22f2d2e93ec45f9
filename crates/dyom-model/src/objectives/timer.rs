//! Timers, waits and phone calls.

use serde::Serialize;

use super::ObjectiveBase;
use super::slots::{self, LegacySlots};
use crate::decode::{Decoder, Record};

/// On-screen countdown before the next objective, in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectiveCountdown {
    #[serde(flatten)]
    pub base: ObjectiveBase,
    pub duration: u32,
    pub text: String,
    #[serde(flatten)]
    pub legacy: LegacySlots,
}

impl ObjectiveCountdown {
    pub(crate) fn decode(d: &mut Decoder, rec: &Record) -> Option<Self> {
        let base = ObjectiveBase::decode(d, rec);
        let duration = d.int_or(rec, "duration", 0..=i64::from(u32::MAX), 3000);
        let text = d.text_or(rec, "text", None);
        let legacy = LegacySlots::decode(d, rec, slots::COUNTDOWN);
        Some(Self {
            base: base?,
            duration: duration?,
            text: text?,
            legacy: legacy?,
        })
    }
}

/// Wait for `duration` milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectiveTimeout {
    #[serde(flatten)]
    pub base: ObjectiveBase,
    pub duration: u32,
    pub show_timer: bool,
    pub text: String,
    #[serde(flatten)]
    pub legacy: LegacySlots,
}

impl ObjectiveTimeout {
    pub(crate) fn decode(d: &mut Decoder, rec: &Record) -> Option<Self> {
        let base = ObjectiveBase::decode(d, rec);
        let duration = d.int_or(rec, "duration", 0..=i64::from(u32::MAX), 3000);
        let show_timer = d.or(rec, "show_timer", false);
        let text = d.text_or(rec, "text", None);
        let legacy = LegacySlots::decode(d, rec, slots::TIMEOUT);
        Some(Self {
            base: base?,
            duration: duration?,
            show_timer: show_timer?,
            text: text?,
            legacy: legacy?,
        })
    }
}

/// Change the mission time limit.
///
/// A positive `duration` sets the limit in milliseconds, `-1` removes it,
/// and any other negative value adds its magnitude to the current limit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectiveTimelimit {
    #[serde(flatten)]
    pub base: ObjectiveBase,
    pub duration: i32,
    #[serde(flatten)]
    pub legacy: LegacySlots,
}

impl ObjectiveTimelimit {
    pub const DISABLE: i32 = -1;

    pub(crate) fn decode(d: &mut Decoder, rec: &Record) -> Option<Self> {
        let base = ObjectiveBase::decode(d, rec);
        let duration = d.int_or(
            rec,
            "duration",
            i64::from(i32::MIN)..=i64::from(i32::MAX),
            30_000,
        );
        let legacy = LegacySlots::decode(d, rec, slots::SETTING);
        Some(Self {
            base: base?,
            duration: duration?,
            legacy: legacy?,
        })
    }
}

/// Start the mission timer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectiveTimerStart {
    #[serde(flatten)]
    pub base: ObjectiveBase,
    #[serde(flatten)]
    pub legacy: LegacySlots,
}

impl ObjectiveTimerStart {
    pub(crate) fn decode(d: &mut Decoder, rec: &Record) -> Option<Self> {
        let base = ObjectiveBase::decode(d, rec);
        let legacy = LegacySlots::decode(d, rec, slots::PLAIN);
        Some(Self {
            base: base?,
            legacy: legacy?,
        })
    }
}

/// Ring the player's phone and show `text` for `duration` milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectivePhoneCall {
    #[serde(flatten)]
    pub base: ObjectiveBase,
    pub duration: u32,
    pub text: String,
    #[serde(flatten)]
    pub legacy: LegacySlots,
}

impl ObjectivePhoneCall {
    pub(crate) fn decode(d: &mut Decoder, rec: &Record) -> Option<Self> {
        let base = ObjectiveBase::decode(d, rec);
        let duration = d.int_or(rec, "duration", 0..=i64::from(u32::MAX), 4000);
        let text = d.text_or(rec, "text", None);
        let legacy = LegacySlots::decode(d, rec, slots::PHONE_CALL);
        Some(Self {
            base: base?,
            duration: duration?,
            text: text?,
            legacy: legacy?,
        })
    }
}
