//! Field-level decoding from the JSON form of a mission.
//!
//! [`Decoder`] walks a `serde_json::Value` tree and keeps the path of the
//! field it is looking at. Each failing field records a [`DecodeError`]
//! and decoding carries on with its siblings, so one pass reports every
//! structural problem in the document.
//!
//! Record decoders follow one shape: read every field first (each read
//! returns `None` after recording its error), then assemble the value with
//! `?` so a record with any failed field yields `None`.

use std::ops::RangeInclusive;

use dyom_bits::{ActorFlags, CameraMode, CarFlags, CutsceneBehaviour, PickupObjectiveFlags};
use serde_json::{Map, Value};

use crate::error::{DecodeError, DecodeErrorKind, DecodeErrors, RangeError};
use crate::geometry::{MAX_DEGREES, Position, Rotation};

/// A JSON object being decoded into one record.
pub(crate) type Record = Map<String, Value>;

/// A value that can be read from a single JSON field.
pub(crate) trait FieldValue: Sized {
    fn from_json(value: &Value) -> Result<Self, DecodeErrorKind>;
}

#[derive(Debug, Clone, Copy)]
enum Segment {
    Field(&'static str),
    Index(usize),
}

#[derive(Debug, Default)]
pub(crate) struct Decoder {
    path: Vec<Segment>,
    errors: Vec<DecodeError>,
}

impl Decoder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn finish<T>(self, value: Option<T>) -> Result<T, DecodeErrors> {
        match value {
            Some(value) if self.errors.is_empty() => Ok(value),
            _ => Err(DecodeErrors(self.errors)),
        }
    }

    pub(crate) fn error_count(&self) -> usize {
        self.errors.len()
    }

    fn path_to(&self, field: Option<&str>) -> String {
        let mut path = String::new();
        let segments = self.path.iter().copied().map(|segment| match segment {
            Segment::Field(name) => (false, name.to_string()),
            Segment::Index(index) => (true, index.to_string()),
        });
        let tail = field.map(|name| (false, name.to_string()));
        for (is_index, text) in segments.chain(tail) {
            if is_index {
                path.push('[');
                path.push_str(&text);
                path.push(']');
            } else {
                if !path.is_empty() {
                    path.push('.');
                }
                path.push_str(&text);
            }
        }
        if path.is_empty() {
            path.push('$');
        }
        path
    }

    /// Record an error on `field` of the record currently being decoded.
    pub(crate) fn report(&mut self, field: &str, kind: DecodeErrorKind) {
        let path = self.path_to(Some(field));
        self.errors.push(DecodeError { path, kind });
    }

    /// Record an error on the record currently being decoded.
    pub(crate) fn report_here(&mut self, kind: DecodeErrorKind) {
        let path = self.path_to(None);
        self.errors.push(DecodeError { path, kind });
    }

    fn scoped<T>(&mut self, segment: Segment, f: impl FnOnce(&mut Self) -> T) -> T {
        self.path.push(segment);
        let value = f(self);
        self.path.pop();
        value
    }

    // =========================================================================
    // Scalars
    // =========================================================================

    /// Read a field that must be present.
    pub(crate) fn required<T: FieldValue>(&mut self, rec: &Record, name: &'static str) -> Option<T> {
        match present(rec, name) {
            Some(value) => self.convert(name, value),
            None => {
                self.report(name, DecodeErrorKind::Missing);
                None
            }
        }
    }

    /// Read a field, falling back to `default` when it is absent or null.
    pub(crate) fn or<T: FieldValue>(&mut self, rec: &Record, name: &'static str, default: T) -> Option<T> {
        match present(rec, name) {
            Some(value) => self.convert(name, value),
            None => Some(default),
        }
    }

    /// Read a field whose absence is meaningful.
    pub(crate) fn optional<T: FieldValue>(&mut self, rec: &Record, name: &'static str) -> Option<Option<T>> {
        match present(rec, name) {
            Some(value) => self.convert(name, value).map(Some),
            None => Some(None),
        }
    }

    fn convert<T: FieldValue>(&mut self, name: &'static str, value: &Value) -> Option<T> {
        match T::from_json(value) {
            Ok(value) => Some(value),
            Err(kind) => {
                self.report(name, kind);
                None
            }
        }
    }

    /// Read an integer constrained to `range`, defaulting when absent.
    pub(crate) fn int_or<T: TryFrom<i64>>(
        &mut self,
        rec: &Record,
        name: &'static str,
        range: RangeInclusive<i64>,
        default: T,
    ) -> Option<T> {
        match present(rec, name) {
            Some(value) => self.int_value(name, value, &range),
            None => Some(default),
        }
    }

    pub(crate) fn int_required<T: TryFrom<i64>>(
        &mut self,
        rec: &Record,
        name: &'static str,
        range: RangeInclusive<i64>,
    ) -> Option<T> {
        match present(rec, name) {
            Some(value) => self.int_value(name, value, &range),
            None => {
                self.report(name, DecodeErrorKind::Missing);
                None
            }
        }
    }

    pub(crate) fn int_optional<T: TryFrom<i64>>(
        &mut self,
        rec: &Record,
        name: &'static str,
        range: RangeInclusive<i64>,
    ) -> Option<Option<T>> {
        match present(rec, name) {
            Some(value) => self.int_value(name, value, &range).map(Some),
            None => Some(None),
        }
    }

    fn int_value<T: TryFrom<i64>>(
        &mut self,
        name: &'static str,
        value: &Value,
        range: &RangeInclusive<i64>,
    ) -> Option<T> {
        match int_in(value, "value", *range.start(), *range.end()) {
            Ok(value) => Some(value),
            Err(kind) => {
                self.report(name, kind);
                None
            }
        }
    }

    /// Read a float, optionally constrained to `range`, defaulting when absent.
    pub(crate) fn float_or(
        &mut self,
        rec: &Record,
        name: &'static str,
        range: Option<RangeInclusive<f32>>,
        default: f32,
    ) -> Option<f32> {
        match present(rec, name) {
            Some(value) => self.float_value(name, value, range.as_ref()),
            None => Some(default),
        }
    }

    pub(crate) fn float_required(
        &mut self,
        rec: &Record,
        name: &'static str,
        range: Option<RangeInclusive<f32>>,
    ) -> Option<f32> {
        match present(rec, name) {
            Some(value) => self.float_value(name, value, range.as_ref()),
            None => {
                self.report(name, DecodeErrorKind::Missing);
                None
            }
        }
    }

    fn float_value(
        &mut self,
        name: &'static str,
        value: &Value,
        range: Option<&RangeInclusive<f32>>,
    ) -> Option<f32> {
        let number = self.convert::<f32>(name, value)?;
        if let Some(range) = range
            && !range.contains(&number)
        {
            self.report(
                name,
                DecodeErrorKind::FloatRange {
                    value: f64::from(number),
                    min: f64::from(*range.start()),
                    max: f64::from(*range.end()),
                },
            );
            return None;
        }
        Some(number)
    }

    /// Read a heading in degrees, defaulting to 0.
    pub(crate) fn degrees(&mut self, rec: &Record, name: &'static str) -> Option<f32> {
        self.float_or(rec, name, Some(0.0..=MAX_DEGREES), 0.0)
    }

    /// Read a string, defaulting to empty, limited to `max_chars` characters.
    pub(crate) fn text_or(&mut self, rec: &Record, name: &'static str, max_chars: Option<usize>) -> Option<String> {
        let text = self.or::<String>(rec, name, String::new())?;
        self.check_len(name, text, max_chars)
    }

    pub(crate) fn text_required(&mut self, rec: &Record, name: &'static str, max_chars: Option<usize>) -> Option<String> {
        let text = self.required::<String>(rec, name)?;
        self.check_len(name, text, max_chars)
    }

    fn check_len(&mut self, name: &'static str, text: String, max_chars: Option<usize>) -> Option<String> {
        let len = text.chars().count();
        if let Some(max) = max_chars
            && len > max
        {
            self.report(name, DecodeErrorKind::TooLong { len, max });
            return None;
        }
        Some(text)
    }

    // =========================================================================
    // Composite fields
    // =========================================================================

    /// Read a required `position_x/y/z` triple.
    pub(crate) fn position(&mut self, rec: &Record) -> Option<Position> {
        let x = self.float_required(rec, "position_x", None);
        let y = self.float_required(rec, "position_y", None);
        let z = self.float_required(rec, "position_z", None);
        Some(Position::new(x?, y?, z?))
    }

    pub(crate) fn position_or(&mut self, rec: &Record, default: Position) -> Option<Position> {
        let x = self.float_or(rec, "position_x", None, default.x);
        let y = self.float_or(rec, "position_y", None, default.y);
        let z = self.float_or(rec, "position_z", None, default.z);
        Some(Position::new(x?, y?, z?))
    }

    /// Read `rotation_x/y/z`, each defaulting to 0.
    pub(crate) fn rotation(&mut self, rec: &Record, range: Option<RangeInclusive<f32>>) -> Option<Rotation> {
        let x = self.float_or(rec, "rotation_x", range.clone(), 0.0);
        let y = self.float_or(rec, "rotation_y", range.clone(), 0.0);
        let z = self.float_or(rec, "rotation_z", range, 0.0);
        Some(Rotation::new(x?, y?, z?))
    }

    // =========================================================================
    // Nesting
    // =========================================================================

    /// Decode a nested record. An absent field yields `default()`.
    pub(crate) fn nested_or<T>(
        &mut self,
        rec: &Record,
        name: &'static str,
        default: impl FnOnce() -> T,
        decode: impl FnOnce(&mut Self, &Record) -> Option<T>,
    ) -> Option<T> {
        match present(rec, name) {
            Some(value) => self.scoped(Segment::Field(name), |d| {
                let inner = d.expect_record(value)?;
                decode(d, inner)
            }),
            None => Some(default()),
        }
    }

    pub(crate) fn nested_required<T>(
        &mut self,
        rec: &Record,
        name: &'static str,
        decode: impl FnOnce(&mut Self, &Record) -> Option<T>,
    ) -> Option<T> {
        match present(rec, name) {
            Some(value) => self.scoped(Segment::Field(name), |d| {
                let inner = d.expect_record(value)?;
                decode(d, inner)
            }),
            None => {
                self.report(name, DecodeErrorKind::Missing);
                None
            }
        }
    }

    pub(crate) fn nested_optional<T>(
        &mut self,
        rec: &Record,
        name: &'static str,
        decode: impl FnOnce(&mut Self, &Record) -> Option<T>,
    ) -> Option<Option<T>> {
        match present(rec, name) {
            Some(value) => self
                .scoped(Segment::Field(name), |d| {
                    let inner = d.expect_record(value)?;
                    decode(d, inner)
                })
                .map(Some),
            None => Some(None),
        }
    }

    /// Decode every element of a list field. An absent field is an empty
    /// list. Every element is visited even after a failure.
    pub(crate) fn list<T>(
        &mut self,
        rec: &Record,
        name: &'static str,
        mut decode: impl FnMut(&mut Self, usize, &Record) -> Option<T>,
    ) -> Option<Vec<T>> {
        let Some(value) = present(rec, name) else {
            return Some(Vec::new());
        };
        let Some(items) = value.as_array() else {
            self.report(
                name,
                DecodeErrorKind::WrongType {
                    expected: "array",
                    found: json_kind(value),
                },
            );
            return None;
        };
        self.scoped(Segment::Field(name), |d| {
            let mut decoded = Vec::with_capacity(items.len());
            let mut failed = false;
            for (index, item) in items.iter().enumerate() {
                let element = d.scoped(Segment::Index(index), |d| {
                    let inner = d.expect_record(item)?;
                    decode(d, index, inner)
                });
                match element {
                    Some(element) => decoded.push(element),
                    None => failed = true,
                }
            }
            (!failed).then_some(decoded)
        })
    }

    pub(crate) fn expect_record<'v>(&mut self, value: &'v Value) -> Option<&'v Record> {
        match value.as_object() {
            Some(record) => Some(record),
            None => {
                self.report_here(DecodeErrorKind::WrongType {
                    expected: "object",
                    found: json_kind(value),
                });
                None
            }
        }
    }
}

/// A field counts as absent when it is missing or `null`.
pub(crate) fn present<'v>(rec: &'v Record, name: &str) -> Option<&'v Value> {
    rec.get(name).filter(|value| !value.is_null())
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(number) if number.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Read an integer and check it against `min..=max` before narrowing.
pub(crate) fn int_in<T: TryFrom<i64>>(
    value: &Value,
    what: &'static str,
    min: i64,
    max: i64,
) -> Result<T, DecodeErrorKind> {
    let raw = match value {
        Value::Number(number) => number.as_i64().or_else(|| {
            // u64 above i64::MAX is out of range for every field anyway
            number.as_u64().map(|_| i64::MAX)
        }),
        _ => None,
    };
    let Some(raw) = raw else {
        return Err(DecodeErrorKind::WrongType {
            expected: "integer",
            found: json_kind(value),
        });
    };
    if raw < min {
        return Err(RangeError::Below {
            what,
            value: raw,
            min,
        }
        .into());
    }
    if raw > max {
        return Err(RangeError::Above {
            what,
            value: raw,
            max,
        }
        .into());
    }
    T::try_from(raw).map_err(|_| DecodeErrorKind::Invalid(format!("{what} {raw} does not fit")))
}

// =============================================================================
// FieldValue implementations
// =============================================================================

impl FieldValue for bool {
    /// Accepts `true`/`false` and the legacy `0`/`1` integers.
    fn from_json(value: &Value) -> Result<Self, DecodeErrorKind> {
        match value {
            Value::Bool(flag) => Ok(*flag),
            Value::Number(_) => Ok(int_in::<u8>(value, "flag", 0, 1)? == 1),
            _ => Err(DecodeErrorKind::WrongType {
                expected: "boolean",
                found: json_kind(value),
            }),
        }
    }
}

impl FieldValue for String {
    fn from_json(value: &Value) -> Result<Self, DecodeErrorKind> {
        value
            .as_str()
            .map(str::to_owned)
            .ok_or(DecodeErrorKind::WrongType {
                expected: "string",
                found: json_kind(value),
            })
    }
}

impl FieldValue for f32 {
    fn from_json(value: &Value) -> Result<Self, DecodeErrorKind> {
        match value.as_f64() {
            // mission files store single precision floats
            Some(number) => {
                let narrowed = number as f32;
                if !narrowed.is_finite() {
                    return Err(DecodeErrorKind::FloatRange {
                        value: number,
                        min: f64::from(f32::MIN),
                        max: f64::from(f32::MAX),
                    });
                }
                Ok(narrowed)
            }
            None => Err(DecodeErrorKind::WrongType {
                expected: "number",
                found: json_kind(value),
            }),
        }
    }
}

macro_rules! flag_field {
    ($($flags:ty),+ $(,)?) => {
        $(
            /// Accepts the packed integer or an object of named booleans.
            impl FieldValue for $flags {
                fn from_json(value: &Value) -> Result<Self, DecodeErrorKind> {
                    match value {
                        Value::Number(_) => {
                            let raw: u32 = int_in(value, "flags", 0, i64::from(u32::MAX))?;
                            Ok(<$flags>::decode(raw))
                        }
                        Value::Object(entries) => {
                            let mut flags = <$flags>::default();
                            for (name, entry) in entries {
                                if name == "unknown_bits" {
                                    let bits: u32 = int_in(entry, "unknown_bits", 0, i64::from(u32::MAX))?;
                                    if bits & <$flags>::NAMED_MASK != 0 {
                                        return Err(DecodeErrorKind::Invalid(format!(
                                            "unknown_bits {bits} overlaps named flags"
                                        )));
                                    }
                                    flags.unknown_bits = bits;
                                } else if !flags.set(name, bool::from_json(entry)?) {
                                    tracing::warn!(flag = %name, "ignoring unknown flag");
                                }
                            }
                            Ok(flags)
                        }
                        _ => Err(DecodeErrorKind::WrongType {
                            expected: "integer or object",
                            found: json_kind(value),
                        }),
                    }
                }
            }
        )+
    };
}

flag_field!(ActorFlags, CarFlags, PickupObjectiveFlags);

/// Low twelve bits of the cutscene composite carry the named parts.
const CUTSCENE_NAMED_BITS: u32 = 0xFFF;

impl FieldValue for CutsceneBehaviour {
    /// Accepts the packed integer or an object with `camera_mode` and the
    /// four boolean switches.
    fn from_json(value: &Value) -> Result<Self, DecodeErrorKind> {
        match value {
            Value::Number(_) => {
                let raw: u32 = int_in(value, "behaviour", 0, i64::from(u32::MAX))?;
                Ok(CutsceneBehaviour::decode(raw)?)
            }
            Value::Object(entries) => {
                let mut behaviour = CutsceneBehaviour::default();
                for (name, entry) in entries {
                    match name.as_str() {
                        "camera_mode" => {
                            let mode: u32 = int_in(entry, "camera_mode", 0, 8)?;
                            behaviour.camera = CameraMode::from_raw(mode)
                                .ok_or(RangeError::Above {
                                    what: "camera_mode",
                                    value: i64::from(mode),
                                    max: 8,
                                })?;
                        }
                        "slow_motion" => behaviour.slow_motion = bool::from_json(entry)?,
                        "camera_shake" => behaviour.camera_shake = bool::from_json(entry)?,
                        "skip_fade" => behaviour.skip_fade = bool::from_json(entry)?,
                        "skip_widescreen" => behaviour.skip_widescreen = bool::from_json(entry)?,
                        "unknown_bits" => {
                            let bits: u32 = int_in(entry, "unknown_bits", 0, i64::from(u32::MAX))?;
                            if bits & CUTSCENE_NAMED_BITS != 0 {
                                return Err(DecodeErrorKind::Invalid(format!(
                                    "unknown_bits {bits} overlaps camera mode or switches"
                                )));
                            }
                            behaviour.unknown_bits = bits;
                        }
                        other => {
                            tracing::warn!(
                                field = %other,
                                "ignoring unknown cutscene behaviour field"
                            );
                        }
                    }
                }
                Ok(behaviour)
            }
            _ => Err(DecodeErrorKind::WrongType {
                expected: "integer or object",
                found: json_kind(value),
            }),
        }
    }
}
