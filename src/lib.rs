//! Scene Control - HTTP surface for scene-rendering parameters
//!
//! A single in-memory record of environmental parameters (time of day,
//! rain, wetness, fog, cloudiness, wind, exposure), each constrained to
//! an inclusive numeric range, exposed over HTTP alongside a static
//! front-end:
//! - Read the current record
//! - Replace it wholesale (omitted fields take defaults)
//! - Merge a partial update, all-or-nothing
//!
//! Replace and merge validate the *whole* resulting record against one
//! shared schema, so a rejected operation can never leave a field out of
//! range, even transiently.
//!
//! # Example
//!
//! ```rust
//! use scene_control::{SceneParams, SceneStore};
//!
//! let store = SceneStore::new();
//! let patch = serde_json::json!({"rain": 0.9});
//! let updated = store.merge(patch.as_object().unwrap())?;
//!
//! assert_eq!(updated.rain, 0.9);
//! assert_eq!(updated.fog, SceneParams::default().fog);
//! # Ok::<(), scene_control::StoreError>(())
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

// Core modules
pub mod config;
pub mod error;
pub mod params;
pub mod server;
pub mod store;

// Re-exports for convenience
pub use config::ServerConfig;
pub use error::{StoreError, Violation};
pub use params::{field, FieldSpec, SceneParams, SCHEMA};
pub use store::SceneStore;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the scene store
    pub use crate::{SceneParams, SceneStore, ServerConfig, StoreError, Violation};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
