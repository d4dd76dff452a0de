use crate::aggregation::stats::{mean, population_std, round_to};
use crate::types::climate_data::{AnnualDataPoint, AnnualDataResponse, StationAnnualData};
use crate::types::reading::Reading;
use std::collections::BTreeMap;

/// Computes yearly statistics for a single year's present temperatures.
///
/// Returns `None` for a year without any value, those years are not reported.
/// Mean and std are rounded first and the ±1σ bounds are derived from the rounded values.
pub fn annual_point(year: i32, values: &[f64]) -> Option<AnnualDataPoint> {
    let mean = round_to(mean(values)?, 2);
    // A lone value has no spread.
    let std = if values.len() < 2 {
        0.0
    } else {
        round_to(population_std(values)?, 2)
    };
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Some(AnnualDataPoint {
        year,
        mean,
        std,
        min_temp: round_to(min, 2),
        max_temp: round_to(max, 2),
        upper_bound: round_to(mean + std, 2),
        lower_bound: round_to(mean - std, 2),
    })
}

/// Builds per-station, per-year statistics from filtered and sorted readings.
///
/// Stations come back in `station_ids` order; a station with no readings at all is
/// left out, a station whose readings are all null is kept with an empty series.
/// `total_years` is the largest year count of any single station.
pub fn aggregate_annual(readings: &[Reading], station_ids: &[String]) -> AnnualDataResponse {
    let mut stations = Vec::new();
    let mut total_years = 0;

    for station_id in station_ids {
        let mut station_name = None;
        let mut by_year: BTreeMap<i32, Vec<f64>> = BTreeMap::new();

        for r in readings.iter().filter(|r| &r.station_id == station_id) {
            station_name.get_or_insert_with(|| r.station_name.clone());
            let values = by_year.entry(r.year).or_default();
            if let Some(t) = r.temperature {
                values.push(t);
            }
        }

        let Some(station_name) = station_name else {
            continue;
        };

        let data: Vec<AnnualDataPoint> = by_year
            .iter()
            .filter_map(|(year, values)| annual_point(*year, values))
            .collect();

        total_years = total_years.max(data.len());
        stations.push(StationAnnualData {
            station_id: station_id.clone(),
            station_name,
            data,
        });
    }

    AnnualDataResponse {
        stations,
        total_years,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn year_of(station: &str, year: i32, temps: &[Option<f64>]) -> Vec<Reading> {
        temps
            .iter()
            .enumerate()
            .map(|(i, t)| Reading {
                station_id: station.to_string(),
                station_name: format!("Station {station}"),
                year,
                month: i as u32 + 1,
                temperature: *t,
            })
            .collect()
    }

    #[test]
    fn test_zero_variance_year() {
        let readings = year_of("A", 1990, &[Some(15.0), Some(15.0), Some(15.0), Some(15.0)]);
        let response = aggregate_annual(&readings, &["A".to_string()]);
        let point = &response.stations[0].data[0];

        assert_eq!(point.std, 0.0);
        assert_eq!(point.upper_bound, point.mean);
        assert_eq!(point.lower_bound, point.mean);
    }

    #[test]
    fn test_single_value_year_has_zero_std() {
        let readings = year_of("A", 1990, &[None, Some(15.0), None]);
        let response = aggregate_annual(&readings, &["A".to_string()]);
        let point = &response.stations[0].data[0];

        assert_eq!(point.mean, 15.0);
        assert_eq!(point.std, 0.0);
        assert_eq!(point.min_temp, 15.0);
        assert_eq!(point.max_temp, 15.0);
    }

    #[test]
    fn test_all_null_year_is_dropped() {
        let mut readings = year_of("A", 1990, &[None, None, None]);
        readings.extend(year_of("A", 1991, &[Some(10.0), Some(20.0)]));
        let response = aggregate_annual(&readings, &["A".to_string()]);

        let years: Vec<i32> = response.stations[0].data.iter().map(|p| p.year).collect();
        assert_eq!(years, vec![1991]);
        assert_eq!(response.total_years, 1);
    }

    #[test]
    fn test_bounds_use_rounded_mean_and_std() {
        let readings = year_of("A", 2000, &[Some(10.004), Some(20.008), Some(12.0)]);
        let response = aggregate_annual(&readings, &["A".to_string()]);
        let p = &response.stations[0].data[0];

        assert_eq!(p.upper_bound, round_to(p.mean + p.std, 2));
        assert_eq!(p.lower_bound, round_to(p.mean - p.std, 2));
        assert!(p.lower_bound <= p.mean && p.mean <= p.upper_bound);
    }

    #[test]
    fn test_midpoint_mean_rounds_to_even() {
        // Mean 10.125 and std 0.125 are exact binary midpoints.
        let readings = year_of("A", 2000, &[Some(10.0), Some(10.25)]);
        let response = aggregate_annual(&readings, &["A".to_string()]);
        let p = &response.stations[0].data[0];

        assert_eq!(p.mean, 10.12);
        assert_eq!(p.std, 0.12);
        assert_eq!(p.upper_bound, 10.24);
        assert_eq!(p.lower_bound, 10.0);
    }

    #[test]
    fn test_basic_sigma_bounds() {
        // Population std of [15, 25] is 5 around a mean of 20.
        let readings = year_of("A", 2000, &[Some(15.0), Some(25.0)]);
        let response = aggregate_annual(&readings, &["A".to_string()]);
        let p = &response.stations[0].data[0];

        assert_eq!(p.mean, 20.0);
        assert_eq!(p.std, 5.0);
        assert_eq!(p.lower_bound, 15.0);
        assert_eq!(p.upper_bound, 25.0);
    }

    #[test]
    fn test_total_years_is_max_across_stations() {
        let mut readings = year_of("A", 2000, &[Some(1.0)]);
        readings.extend(year_of("A", 2001, &[Some(1.0)]));
        readings.extend(year_of("A", 2002, &[Some(1.0)]));
        readings.extend(year_of("B", 1999, &[Some(1.0)]));
        let ids = vec!["B".to_string(), "A".to_string(), "C".to_string()];
        let response = aggregate_annual(&readings, &ids);

        assert_eq!(response.stations.len(), 2);
        assert_eq!(response.stations[0].station_id, "B");
        assert_eq!(response.total_years, 3);
    }

    #[test]
    fn test_all_null_station_kept_with_empty_series() {
        let readings = year_of("A", 2000, &[None, None]);
        let response = aggregate_annual(&readings, &["A".to_string()]);

        assert_eq!(response.stations.len(), 1);
        assert!(response.stations[0].data.is_empty());
        assert_eq!(response.total_years, 0);
    }
}
