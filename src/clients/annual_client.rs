//! Provides the `AnnualClient` for per-year statistics with ±1σ bounds.

use crate::aggregation::annual::aggregate_annual;
use crate::api::StationQuery;
use crate::types::climate_data::AnnualDataResponse;
use crate::{ClimateError, ClimateStats};
use bon::bon;
use log::debug;

/// A client builder for yearly aggregates, obtained via [`ClimateStats::annual()`].
pub struct AnnualClient<'a> {
    client: &'a ClimateStats,
}

#[bon]
impl<'a> AnnualClient<'a> {
    pub(crate) fn new(client: &'a ClimateStats) -> Self {
        Self { client }
    }

    /// Computes mean, population standard deviation, extremes and the ±1σ band for
    /// every year of every requested station.
    ///
    /// Years without a single temperature are skipped. `total_years` in the response
    /// is the longest per-station series.
    ///
    /// # Errors
    ///
    /// Same as [`crate::MonthlyClient::build_stations`].
    #[builder(start_fn = stations)]
    #[doc(hidden)]
    pub async fn build_stations(
        &self,
        #[builder(start_fn)] station_ids: &[String],
        year_from: Option<i32>,
        year_to: Option<i32>,
    ) -> Result<AnnualDataResponse, ClimateError> {
        let (query, readings) = self
            .client
            .validated_readings(StationQuery::new(station_ids, year_from, year_to))
            .await?;
        let response = aggregate_annual(&readings, &query.station_ids);
        debug!(
            "Annual aggregation over {} readings: {} stations, {} years",
            readings.len(),
            response.stations.len(),
            response.total_years
        );
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::{climate_for, csv_file, ids, SAMPLE_ROWS};

    #[tokio::test]
    async fn test_annual_series() {
        let file = csv_file(SAMPLE_ROWS);
        let climate = climate_for(&file);

        let annual = climate
            .annual()
            .stations(&ids(&["101234", "66062"]))
            .call()
            .await
            .unwrap();

        // 101234 has no values in 1952, so only 1951 survives.
        assert_eq!(annual.stations[0].station_id, "101234");
        let years: Vec<i32> = annual.stations[0].data.iter().map(|p| p.year).collect();
        assert_eq!(years, vec![1951]);
        assert_eq!(annual.stations[0].data[0].mean, 10.5);
        assert_eq!(annual.stations[0].data[0].min_temp, 5.0);
        assert_eq!(annual.stations[0].data[0].max_temp, 16.0);

        assert_eq!(annual.stations[1].data.len(), 3);
        assert_eq!(annual.total_years, 3);
        for point in &annual.stations[1].data {
            assert!(point.lower_bound <= point.mean && point.mean <= point.upper_bound);
        }
    }

    #[tokio::test]
    async fn test_inverted_range_rejected() {
        let file = csv_file(SAMPLE_ROWS);
        let climate = climate_for(&file);

        let err = climate
            .annual()
            .stations(&ids(&["66062"]))
            .year_from(1952)
            .year_to(1950)
            .call()
            .await
            .unwrap_err();
        assert_eq!(err.error_type(), "invalid_date_range");
    }
}
