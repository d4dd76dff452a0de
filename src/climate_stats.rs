//! Main entry point: a [`ClimateStats`] owns the tabular store and hands out one client
//! per read operation.

use crate::ai::client::CompletionClient;
use crate::api::StationQuery;
use crate::clients::analytics_client::AnalyticsClient;
use crate::clients::annual_client::AnnualClient;
use crate::clients::insights_client::InsightsClient;
use crate::clients::monthly_client::MonthlyClient;
use crate::clients::stations_client::StationsClient;
use crate::config::Settings;
use crate::error::ClimateError;
use crate::store::tabular_store::TabularStore;
use crate::types::reading::Reading;
use log::info;
use std::sync::Arc;

/// The main handle for querying climate statistics.
///
/// Cloning is cheap; clones share the same store.
///
/// # Examples
///
/// ```no_run
/// # use climate_stats::{ClimateStats, ClimateError, Settings};
/// # #[tokio::main]
/// # async fn main() -> Result<(), ClimateError> {
/// let climate = ClimateStats::from_settings(&Settings::from_env()?).await?;
///
/// let ids = vec!["66062".to_string()];
/// let annual = climate
///     .annual()
///     .stations(&ids)
///     .year_from(1950)
///     .call()
///     .await?;
/// println!("{} years for {}", annual.total_years, ids[0]);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ClimateStats {
    store: Arc<TabularStore>,
}

impl ClimateStats {
    /// Wraps an existing store. Nothing is loaded until the first query.
    pub fn new(store: Arc<TabularStore>) -> Self {
        Self { store }
    }

    /// Builds a store from `settings` and loads it eagerly.
    ///
    /// # Errors
    ///
    /// Returns [`ClimateError::DataLoad`] when the configured file cannot be loaded.
    pub async fn from_settings(settings: &Settings) -> Result<Self, ClimateError> {
        let store = TabularStore::builder()
            .source(settings.data_file_path.clone())
            .station_names(settings.station_names.clone())
            .build();
        let snapshot = store.load().await?;
        info!(
            "Climate store ready ({} stations, environment {})",
            snapshot.directory.len(),
            settings.environment
        );
        Ok(Self::new(Arc::new(store)))
    }

    pub fn store(&self) -> &Arc<TabularStore> {
        &self.store
    }

    pub fn stations(&self) -> StationsClient<'_> {
        StationsClient::new(self)
    }

    pub fn monthly(&self) -> MonthlyClient<'_> {
        MonthlyClient::new(self)
    }

    pub fn annual(&self) -> AnnualClient<'_> {
        AnnualClient::new(self)
    }

    pub fn analytics(&self) -> AnalyticsClient<'_> {
        AnalyticsClient::new(self)
    }

    pub fn insights<'a, L: CompletionClient>(&'a self, llm: &'a L) -> InsightsClient<'a, L> {
        InsightsClient::new(self, llm)
    }

    /// Validates a query against the current directory and fetches the matching rows.
    pub(crate) async fn validated_readings(
        &self,
        query: StationQuery,
    ) -> Result<(StationQuery, Vec<Reading>), ClimateError> {
        let snapshot = self.store.snapshot().await?;
        let query = query.validate(&snapshot.directory)?;
        let readings = snapshot.query(&query.station_ids, query.year_from, query.year_to)?;
        Ok((query, readings))
    }
}
