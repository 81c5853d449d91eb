//! Scene parameter record and its field schema
//!
//! Defines:
//! - `SceneParams`: the seven-field record describing a rendered scene
//! - `FieldSpec`/`SCHEMA`: the single source of truth for names, bounds
//!   and defaults
//! - Whole-record validation shared by replace and merge

use crate::error::{StoreError, Violation};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Environmental parameters of a rendered scene.
///
/// Every field carries an inclusive range constraint (see [`SCHEMA`]).
/// Wire names are exact and case-sensitive (`timeOfDay`, not `time_of_day`).
/// Omitted fields deserialize to their defaults, so a partial body is a
/// valid full-replace candidate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneParams {
    /// Hour of day, [0.0, 24.0]
    #[serde(default = "defaults::time_of_day")]
    pub time_of_day: f64,
    /// Rain intensity, [0.0, 1.0]
    #[serde(default = "defaults::rain")]
    pub rain: f64,
    /// Surface wetness, [0.0, 1.0]
    #[serde(default = "defaults::wetness")]
    pub wetness: f64,
    /// Fog density, [0.0, 1.0]
    #[serde(default = "defaults::fog")]
    pub fog: f64,
    /// Cloud cover, [0.0, 1.0]
    #[serde(default = "defaults::cloudiness")]
    pub cloudiness: f64,
    /// Wind strength, [0.0, 1.0]
    #[serde(default = "defaults::wind")]
    pub wind: f64,
    /// Camera exposure, [0.3, 2.0]
    #[serde(default = "defaults::exposure")]
    pub exposure: f64,
}

mod defaults {
    pub(super) fn time_of_day() -> f64 {
        16.0
    }
    pub(super) fn rain() -> f64 {
        0.4
    }
    pub(super) fn wetness() -> f64 {
        0.5
    }
    pub(super) fn fog() -> f64 {
        0.35
    }
    pub(super) fn cloudiness() -> f64 {
        0.4
    }
    pub(super) fn wind() -> f64 {
        0.3
    }
    pub(super) fn exposure() -> f64 {
        1.0
    }
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            time_of_day: defaults::time_of_day(),
            rain: defaults::rain(),
            wetness: defaults::wetness(),
            fog: defaults::fog(),
            cloudiness: defaults::cloudiness(),
            wind: defaults::wind(),
            exposure: defaults::exposure(),
        }
    }
}

/// Schema entry for one field: wire name, inclusive bounds, accessors.
pub struct FieldSpec {
    /// Exact wire name
    pub name: &'static str,
    /// Inclusive lower bound
    pub min: f64,
    /// Inclusive upper bound
    pub max: f64,
    get: fn(&SceneParams) -> f64,
    set: fn(&mut SceneParams, f64),
}

impl FieldSpec {
    /// Whether `value` satisfies this field's range constraint.
    #[inline]
    #[must_use]
    pub fn in_range(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Read this field out of a record.
    #[inline]
    #[must_use]
    pub fn get(&self, params: &SceneParams) -> f64 {
        (self.get)(params)
    }
}

/// The fixed field schema. Replace and merge both validate against this
/// table; there is no second copy of the bounds anywhere.
pub static SCHEMA: [FieldSpec; 7] = [
    FieldSpec {
        name: "timeOfDay",
        min: 0.0,
        max: 24.0,
        get: |p| p.time_of_day,
        set: |p, v| p.time_of_day = v,
    },
    FieldSpec {
        name: "rain",
        min: 0.0,
        max: 1.0,
        get: |p| p.rain,
        set: |p, v| p.rain = v,
    },
    FieldSpec {
        name: "wetness",
        min: 0.0,
        max: 1.0,
        get: |p| p.wetness,
        set: |p, v| p.wetness = v,
    },
    FieldSpec {
        name: "fog",
        min: 0.0,
        max: 1.0,
        get: |p| p.fog,
        set: |p, v| p.fog = v,
    },
    FieldSpec {
        name: "cloudiness",
        min: 0.0,
        max: 1.0,
        get: |p| p.cloudiness,
        set: |p, v| p.cloudiness = v,
    },
    FieldSpec {
        name: "wind",
        min: 0.0,
        max: 1.0,
        get: |p| p.wind,
        set: |p, v| p.wind = v,
    },
    FieldSpec {
        name: "exposure",
        min: 0.3,
        max: 2.0,
        get: |p| p.exposure,
        set: |p, v| p.exposure = v,
    },
];

/// Look up a schema entry by wire name.
#[inline]
#[must_use]
pub fn field(name: &str) -> Option<&'static FieldSpec> {
    SCHEMA.iter().find(|f| f.name == name)
}

impl SceneParams {
    /// Validate every field against the schema.
    ///
    /// Collects all violations so the caller can report every offending
    /// field, not just the first.
    ///
    /// # Errors
    /// - `StoreError::Validation` if any field is out of range
    pub fn validate(&self) -> Result<(), StoreError> {
        let violations: Vec<Violation> = SCHEMA
            .iter()
            .filter(|spec| !spec.in_range(spec.get(self)))
            .map(|spec| Violation::OutOfRange {
                field: spec.name,
                value: spec.get(self),
                min: spec.min,
                max: spec.max,
            })
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(StoreError::Validation(violations))
        }
    }

    /// Overlay a JSON patch onto `self`, producing an unvalidated candidate.
    ///
    /// Unknown field names and non-numeric values are violations; like range
    /// checking, all of them are collected before failing. The candidate is
    /// not range-validated here — callers run [`SceneParams::validate`] on
    /// the result so the error covers inherited fields too.
    ///
    /// # Errors
    /// - `StoreError::Validation` on unknown field names or non-numeric values
    pub fn with_patch(&self, patch: &Map<String, Value>) -> Result<Self, StoreError> {
        let mut candidate = *self;
        let mut violations = Vec::new();

        for (name, value) in patch {
            let Some(spec) = field(name) else {
                violations.push(Violation::UnknownField { field: name.clone() });
                continue;
            };
            match value.as_f64() {
                Some(v) => (spec.set)(&mut candidate, v),
                None => violations.push(Violation::NotANumber {
                    field: name.clone(),
                    value: value.to_string(),
                }),
            }
        }

        if violations.is_empty() {
            Ok(candidate)
        } else {
            Err(StoreError::Validation(violations))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_are_valid() {
        assert!(SceneParams::default().validate().is_ok());
    }

    #[test]
    fn schema_lookup() {
        assert_eq!(field("timeOfDay").map(|f| f.max), Some(24.0));
        assert_eq!(field("exposure").map(|f| f.min), Some(0.3));
        assert!(field("time_of_day").is_none(), "wire names are exact");
    }

    #[test]
    fn validate_reports_every_violation() {
        let params = SceneParams {
            rain: -1.0,
            exposure: 9.0,
            ..SceneParams::default()
        };
        let err = params.validate().unwrap_err();
        match err {
            StoreError::Validation(violations) => {
                assert_eq!(violations.len(), 2);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn patch_overlays_only_named_fields() {
        let base = SceneParams::default();
        let patch = json!({"rain": 0.9}).as_object().unwrap().clone();
        let candidate = base.with_patch(&patch).unwrap();

        assert_eq!(candidate.rain, 0.9);
        assert_eq!(candidate.wetness, base.wetness);
        assert_eq!(candidate.time_of_day, base.time_of_day);
    }

    #[test]
    fn patch_rejects_unknown_field() {
        let patch = json!({"snow": 0.5}).as_object().unwrap().clone();
        let err = SceneParams::default().with_patch(&patch).unwrap_err();
        assert!(err.to_string().contains("snow"));
    }

    #[test]
    fn patch_rejects_non_numeric_value() {
        let patch = json!({"rain": "heavy"}).as_object().unwrap().clone();
        let err = SceneParams::default().with_patch(&patch).unwrap_err();
        assert!(err.to_string().contains("rain"));
    }

    #[test]
    fn omitted_fields_deserialize_to_defaults() {
        let params: SceneParams = serde_json::from_str(r#"{"rain": 0.8}"#).unwrap();
        assert_eq!(params.rain, 0.8);
        assert_eq!(params.time_of_day, 16.0);
        assert_eq!(params.exposure, 1.0);
    }

    #[test]
    fn wire_names_are_camel_case() {
        let json = serde_json::to_value(SceneParams::default()).unwrap();
        let obj = json.as_object().unwrap();
        for spec in &SCHEMA {
            assert!(obj.contains_key(spec.name), "missing {}", spec.name);
        }
    }
}
