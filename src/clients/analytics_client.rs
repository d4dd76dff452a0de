//! Provides the `AnalyticsClient` for whole-period station summaries.

use crate::aggregation::analytics::summarize;
use crate::api::StationQuery;
use crate::types::analytics::AnalyticsResponse;
use crate::{ClimateError, ClimateStats};
use bon::bon;

/// A client builder for summary analytics, obtained via [`ClimateStats::analytics()`].
pub struct AnalyticsClient<'a> {
    client: &'a ClimateStats,
}

#[bon]
impl<'a> AnalyticsClient<'a> {
    pub(crate) fn new(client: &'a ClimateStats) -> Self {
        Self { client }
    }

    /// Summarises each requested station over the selected years: extremes with the
    /// month they occurred in, mean and spread, hottest and coldest year and data
    /// coverage.
    ///
    /// Stations with no temperature at all in the window are left out.
    #[builder(start_fn = stations)]
    #[doc(hidden)]
    pub async fn build_stations(
        &self,
        #[builder(start_fn)] station_ids: &[String],
        year_from: Option<i32>,
        year_to: Option<i32>,
    ) -> Result<AnalyticsResponse, ClimateError> {
        let (query, readings) = self
            .client
            .validated_readings(StationQuery::new(station_ids, year_from, year_to))
            .await?;
        Ok(summarize(&readings, &query.station_ids))
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::{climate_for, csv_file, ids, SAMPLE_ROWS};

    #[tokio::test]
    async fn test_summary() {
        let file = csv_file(SAMPLE_ROWS);
        let climate = climate_for(&file);

        let analytics = climate
            .analytics()
            .stations(&ids(&["66062", "101234"]))
            .call()
            .await
            .unwrap();

        assert_eq!(analytics.total_stations, 2);
        assert_eq!(analytics.year_range, (1950, 1952));

        let sydney = &analytics.stations[0];
        assert_eq!(sydney.station_id, "66062");
        assert_eq!((sydney.max_temp, sydney.max_temp_year, sydney.max_temp_month), (24.0, 1952, 1));
        assert_eq!((sydney.min_temp, sydney.min_temp_year, sydney.min_temp_month), (12.0, 1951, 7));
        // 34 of 36 months present.
        assert_eq!(sydney.data_coverage, 94.4);

        let other = &analytics.stations[1];
        assert_eq!(other.data_coverage, 50.0);
        assert_eq!(other.hottest_year, 1951);
        assert_eq!(other.coldest_year, 1951);
    }

    #[tokio::test]
    async fn test_window_without_values_omits_station() {
        let file = csv_file(SAMPLE_ROWS);
        let climate = climate_for(&file);

        let analytics = climate
            .analytics()
            .stations(&ids(&["101234"]))
            .year_from(1952)
            .call()
            .await
            .unwrap();

        assert!(analytics.stations.is_empty());
        assert_eq!(analytics.total_stations, 0);
        assert_eq!(analytics.year_range, (1952, 1952));
    }
}
