//! Response shapes for the monthly and annual operations.

use serde::{Deserialize, Serialize};

/// A single month's reading for a station. `temperature` stays `None` for gaps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyDataPoint {
    pub year: i32,
    pub month: u32,
    pub temperature: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationMonthlyData {
    pub station_id: String,
    pub station_name: String,
    pub data: Vec<MonthlyDataPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyDataResponse {
    pub stations: Vec<StationMonthlyData>,
    /// Number of points emitted across all included stations.
    pub total_points: usize,
}

/// Yearly statistics for one station, all values rounded to 2 decimals.
///
/// `upper_bound` and `lower_bound` are derived from the *rounded* `mean` and `std`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnualDataPoint {
    pub year: i32,
    pub mean: f64,
    /// Population standard deviation (divides by N).
    pub std: f64,
    pub min_temp: f64,
    pub max_temp: f64,
    pub upper_bound: f64,
    pub lower_bound: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationAnnualData {
    pub station_id: String,
    pub station_name: String,
    pub data: Vec<AnnualDataPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnualDataResponse {
    pub stations: Vec<StationAnnualData>,
    /// Largest number of year entries produced for any single station.
    pub total_years: usize,
}
