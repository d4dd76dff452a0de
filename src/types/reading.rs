//! The long-format observation row held by the [`crate::TabularStore`].

use serde::{Deserialize, Serialize};

/// One monthly temperature observation for a station.
///
/// A `Reading` is produced for every month column of every station-year row in the
/// source file, so a missing measurement is still a `Reading` with `temperature: None`.
/// For a given `(station_id, year, month)` there is at most one `Reading`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Opaque station identifier as it appears in the source (e.g. `"66062"`).
    pub station_id: String,
    /// Display name, `"Station {id}"` unless a name mapping supplied one.
    pub station_name: String,
    pub year: i32,
    /// Calendar month, 1 (January) to 12 (December).
    pub month: u32,
    /// Monthly mean temperature in °C, `None` when the source cell held no number.
    pub temperature: Option<f64>,
}

impl Reading {
    /// Ordering key used by the store: `(station_id, year, month)`.
    pub fn sort_key(&self) -> (&str, i32, u32) {
        (self.station_id.as_str(), self.year, self.month)
    }

    pub fn has_value(&self) -> bool {
        self.temperature.is_some()
    }
}
