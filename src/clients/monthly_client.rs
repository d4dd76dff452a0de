//! Provides the `MonthlyClient` for per-month readings of selected stations.

use crate::aggregation::monthly::project_monthly;
use crate::api::StationQuery;
use crate::types::climate_data::MonthlyDataResponse;
use crate::{ClimateError, ClimateStats};
use bon::bon;
use log::debug;

/// A client builder for monthly readings.
///
/// Instances are created by calling [`ClimateStats::monthly()`].
pub struct MonthlyClient<'a> {
    client: &'a ClimateStats,
}

#[bon]
impl<'a> MonthlyClient<'a> {
    pub(crate) fn new(client: &'a ClimateStats) -> Self {
        Self { client }
    }

    /// Fetches the monthly readings for `station_ids`.
    ///
    /// # Optional Builder Methods
    ///
    /// * `.year_from(i32)` / `.year_to(i32)`: inclusive year bounds.
    ///
    /// # Returns
    ///
    /// One entry per station in the order requested; each entry lists its readings in
    /// `(year, month)` order, missing temperatures included as `None`.
    ///
    /// # Errors
    ///
    /// * [`ClimateError::EmptyStationSelection`], [`ClimateError::InvalidYearRange`] or
    ///   [`ClimateError::StationNotFound`] for an invalid request.
    /// * [`ClimateError::DataLoad`] if the store could not be loaded.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use climate_stats::{ClimateStats, ClimateError, Settings};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), ClimateError> {
    /// let climate = ClimateStats::from_settings(&Settings::default()).await?;
    /// let ids = vec!["66062".to_string(), "101234".to_string()];
    /// let monthly = climate
    ///     .monthly()
    ///     .stations(&ids)
    ///     .year_from(1990)
    ///     .year_to(1999)
    ///     .call()
    ///     .await?;
    /// println!("{} monthly points", monthly.total_points);
    /// # Ok(())
    /// # }
    /// ```
    #[builder(start_fn = stations)]
    #[doc(hidden)]
    pub async fn build_stations(
        &self,
        #[builder(start_fn)] station_ids: &[String],
        year_from: Option<i32>,
        year_to: Option<i32>,
    ) -> Result<MonthlyDataResponse, ClimateError> {
        let (query, readings) = self
            .client
            .validated_readings(StationQuery::new(station_ids, year_from, year_to))
            .await?;
        let response = project_monthly(&readings, &query.station_ids);
        debug!(
            "Monthly projection: {} stations, {} points",
            response.stations.len(),
            response.total_points
        );
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::{climate_for, csv_file, ids, SAMPLE_ROWS};
    use crate::ClimateError;

    #[tokio::test]
    async fn test_monthly_window() {
        let file = csv_file(SAMPLE_ROWS);
        let climate = climate_for(&file);

        let monthly = climate
            .monthly()
            .stations(&ids(&["66062", "101234"]))
            .year_from(1951)
            .year_to(1951)
            .call()
            .await
            .unwrap();

        assert_eq!(monthly.stations.len(), 2);
        assert_eq!(monthly.stations[0].station_id, "66062");
        assert_eq!(monthly.stations[0].data.len(), 12);
        assert_eq!(monthly.stations[1].data[0].temperature, Some(5.0));
        assert_eq!(monthly.total_points, 24);
    }

    #[tokio::test]
    async fn test_nulls_passed_through() {
        let file = csv_file(SAMPLE_ROWS);
        let climate = climate_for(&file);

        let monthly = climate
            .monthly()
            .stations(&ids(&["66062"]))
            .year_from(1952)
            .call()
            .await
            .unwrap();
        let data = &monthly.stations[0].data;
        assert_eq!(data.len(), 12);
        assert_eq!(data[1].temperature, None);
        assert_eq!(data[11].temperature, None);
    }

    #[tokio::test]
    async fn test_unknown_station_rejected() {
        let file = csv_file(SAMPLE_ROWS);
        let climate = climate_for(&file);

        let err = climate
            .monthly()
            .stations(&ids(&["66062", "999"]))
            .call()
            .await
            .unwrap_err();
        assert!(matches!(err, ClimateError::StationNotFound { ref station_ids } if station_ids == &ids(&["999"])));
        assert_eq!(err.status_code(), 404);
    }
}
