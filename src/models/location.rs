//! Location model.

use serde::{Deserialize, Serialize};

/// A salon location that owns employees and receives forecasts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Unique identifier for the location.
    pub id: String,
    /// Display name.
    pub name: String,
}

impl Location {
    /// Creates a location from an ID and display name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
