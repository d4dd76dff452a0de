//! Station directory entries derived from the loaded readings.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Represents a weather station present in the loaded dataset.
///
/// Stations are not stored separately; one `Station` exists per distinct
/// `station_id` among the readings and is computed once per load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Station {
    /// The station identifier as found in the source file (e.g. "66062").
    pub id: String,
    /// Display name. Falls back to `"Station {id}"` when no mapping is known.
    pub name: String,
}

impl Station {
    /// Builds a station, resolving its display name through `names`.
    pub fn resolve(id: &str, names: &HashMap<String, String>) -> Self {
        Self {
            id: id.to_string(),
            name: display_name(id, names),
        }
    }
}

/// Display name for a station id: the mapped name if present, otherwise `"Station {id}"`.
pub fn display_name(id: &str, names: &HashMap<String, String>) -> String {
    names
        .get(id)
        .cloned()
        .unwrap_or_else(|| format!("Station {id}"))
}
