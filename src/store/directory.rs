use crate::types::station::Station;
use std::collections::HashSet;

/// The set of stations known to a loaded snapshot, ordered by display name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StationDirectory {
    stations: Vec<Station>,
    ids: HashSet<String>,
}

impl StationDirectory {
    /// Builds a directory, sorting by name and then by id.
    pub fn new(mut stations: Vec<Station>) -> Self {
        stations.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        let ids = stations.iter().map(|s| s.id.clone()).collect();
        Self { stations, ids }
    }

    pub fn list(&self) -> &[Station] {
        &self.stations
    }

    pub fn exists(&self, station_id: &str) -> bool {
        self.ids.contains(station_id)
    }

    /// Ids that are not in the directory, in the order given.
    pub fn validate(&self, station_ids: &[String]) -> Vec<String> {
        station_ids
            .iter()
            .filter(|id| !self.exists(id))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}
