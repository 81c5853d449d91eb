//! Error types for the scene parameter store
//!
//! Two failure kinds exist, both deterministic functions of the input:
//! - an empty patch (nothing to merge)
//! - a validation failure (range, unknown field, non-numeric value)
//!
//! No error is fatal; the store stays usable after any rejection.

/// Store operation errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    /// Merge invoked with no fields to apply
    #[error("empty patch: no fields to apply")]
    EmptyPatch,

    /// One or more fields violate the schema
    #[error("validation failed: {}", format_violations(.0))]
    Validation(Vec<Violation>),
}

impl StoreError {
    /// Violations carried by this error, if any.
    #[inline]
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        match self {
            Self::Validation(v) => v,
            Self::EmptyPatch => &[],
        }
    }
}

/// A single schema violation in a replace or merge candidate
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Violation {
    /// Field value falls outside its inclusive range
    #[error("{field}: {value} out of range [{min}, {max}]")]
    OutOfRange {
        /// Wire name of the field
        field: &'static str,
        /// Offending value
        value: f64,
        /// Inclusive lower bound
        min: f64,
        /// Inclusive upper bound
        max: f64,
    },

    /// Field name not in the schema
    #[error("{field}: unknown field")]
    UnknownField {
        /// Name supplied by the caller
        field: String,
    },

    /// Field value is not a number
    #[error("{field}: expected a number, got {value}")]
    NotANumber {
        /// Wire name of the field
        field: String,
        /// JSON rendering of the offending value
        value: String,
    },
}

fn format_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_patch_display() {
        assert!(StoreError::EmptyPatch.to_string().contains("empty patch"));
    }

    #[test]
    fn validation_display_names_field_and_bound() {
        let err = StoreError::Validation(vec![Violation::OutOfRange {
            field: "exposure",
            value: 5.0,
            min: 0.3,
            max: 2.0,
        }]);
        let msg = err.to_string();
        assert!(msg.contains("exposure"));
        assert!(msg.contains("[0.3, 2]"));
    }

    #[test]
    fn validation_display_joins_multiple_violations() {
        let err = StoreError::Validation(vec![
            Violation::UnknownField {
                field: "snow".to_string(),
            },
            Violation::OutOfRange {
                field: "rain",
                value: 2.0,
                min: 0.0,
                max: 1.0,
            },
        ]);
        let msg = err.to_string();
        assert!(msg.contains("snow"));
        assert!(msg.contains("rain"));
    }

    #[test]
    fn violations_accessor() {
        assert!(StoreError::EmptyPatch.violations().is_empty());
        let err = StoreError::Validation(vec![Violation::UnknownField {
            field: "x".to_string(),
        }]);
        assert_eq!(err.violations().len(), 1);
    }
}
