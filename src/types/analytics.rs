use serde::{Deserialize, Serialize};

/// Fallback `year_range` reported when a query matches no readings at all.
pub const DEFAULT_YEAR_RANGE: (i32, i32) = (1859, 2019);

/// Whole-range statistics for a single station.
///
/// Temperatures are rounded to 2 decimals and `data_coverage` to 1 decimal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationSummary {
    pub station_id: String,
    pub station_name: String,
    pub min_temp: f64,
    pub min_temp_year: i32,
    pub min_temp_month: u32,
    pub max_temp: f64,
    pub max_temp_year: i32,
    pub max_temp_month: u32,
    pub mean_temp: f64,
    pub std_temp: f64,
    pub coldest_year: i32,
    pub coldest_year_temp: f64,
    pub hottest_year: i32,
    pub hottest_year_temp: f64,
    /// Percentage of readings in range that carry a temperature, 0–100.
    pub data_coverage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsResponse {
    pub stations: Vec<StationSummary>,
    /// `(min_year, max_year)` over every reading matched by the query.
    pub year_range: (i32, i32),
    pub total_stations: usize,
}
