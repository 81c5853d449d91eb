//! The scene parameter store
//!
//! Holds the one live `SceneParams` record and mediates every read and
//! write through validation. All-or-nothing: a rejected operation leaves
//! the record exactly as it was.

use crate::error::StoreError;
use crate::params::SceneParams;
use parking_lot::RwLock;
use serde_json::{Map, Value};

/// Process-wide store for the current scene parameters.
///
/// The write lock is held across the whole validate-overlay-commit
/// sequence, so concurrent merges serialize and can never interleave
/// field-by-field into a record that was never validated as a whole.
#[derive(Debug, Default)]
pub struct SceneStore {
    inner: RwLock<SceneParams>,
}

impl SceneStore {
    /// Create a store holding the default record.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding a caller-supplied record.
    ///
    /// # Errors
    /// - `StoreError::Validation` if the initial record is out of range
    pub fn with_params(params: SceneParams) -> Result<Self, StoreError> {
        params.validate()?;
        Ok(Self {
            inner: RwLock::new(params),
        })
    }

    /// Current record. Infallible, no side effects.
    #[inline]
    #[must_use]
    pub fn get(&self) -> SceneParams {
        *self.inner.read()
    }

    /// Replace the record with `candidate` after validating every field.
    ///
    /// On success the stored record becomes exactly the candidate, which
    /// is returned. On failure the store is unchanged.
    ///
    /// # Errors
    /// - `StoreError::Validation` naming each out-of-range field
    pub fn replace(&self, candidate: SceneParams) -> Result<SceneParams, StoreError> {
        candidate.validate()?;
        let mut guard = self.inner.write();
        *guard = candidate;
        tracing::info!(?candidate, "scene replaced");
        Ok(candidate)
    }

    /// Merge a partial update into the current record.
    ///
    /// The candidate is the current record overlaid with `patch`, then
    /// validated as a whole record — inherited fields included. Rejected
    /// patches leave the store completely unchanged; there is no partial
    /// application.
    ///
    /// # Errors
    /// - `StoreError::EmptyPatch` if `patch` has no entries
    /// - `StoreError::Validation` on unknown fields, non-numeric values,
    ///   or any resulting out-of-range field
    pub fn merge(&self, patch: &Map<String, Value>) -> Result<SceneParams, StoreError> {
        if patch.is_empty() {
            return Err(StoreError::EmptyPatch);
        }

        // Write lock for the full sequence: a concurrent merge must not
        // commit between our read of the base record and our commit.
        let mut guard = self.inner.write();
        let candidate = guard.with_patch(patch)?;
        candidate.validate()?;
        *guard = candidate;
        tracing::info!(fields = ?patch.keys().collect::<Vec<_>>(), "scene merged");
        Ok(candidate)
    }
}
