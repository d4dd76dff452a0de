//! Provides the `StationsClient` for station directory lookups.

use crate::types::station::Station;
use crate::{ClimateError, ClimateStats};

/// Station directory operations, obtained via [`ClimateStats::stations()`].
pub struct StationsClient<'a> {
    client: &'a ClimateStats,
}

impl<'a> StationsClient<'a> {
    pub(crate) fn new(client: &'a ClimateStats) -> Self {
        Self { client }
    }

    /// All stations, sorted by display name (ties by id).
    ///
    /// # Errors
    ///
    /// [`ClimateError::DataLoad`] if the store could not be loaded.
    pub async fn list(&self) -> Result<Vec<Station>, ClimateError> {
        Ok(self.client.store().stations().await?)
    }

    pub async fn exists(&self, station_id: &str) -> Result<bool, ClimateError> {
        Ok(self.client.store().station_exists(station_id).await?)
    }

    /// Ids not present in the directory, in the order given. Empty means all are known.
    pub async fn validate(&self, station_ids: &[String]) -> Result<Vec<String>, ClimateError> {
        let snapshot = self.client.store().snapshot().await?;
        Ok(snapshot.directory.validate(station_ids))
    }
}
