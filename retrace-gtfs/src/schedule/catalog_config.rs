use serde::{Deserialize, Serialize};

/// options applied while building a [`crate::schedule::ScheduleCatalog`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CatalogConfig {
    /// also index stop times where riders can only alight. useful for systems
    /// without exit validation, where a tap may be recorded at such a stop.
    pub include_dropoff_only: bool,
}
