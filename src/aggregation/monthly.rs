use crate::types::climate_data::{MonthlyDataPoint, MonthlyDataResponse, StationMonthlyData};
use crate::types::reading::Reading;

/// Groups already filtered and sorted readings into one record per requested station.
///
/// Stations appear in `station_ids` order. A station without any matching reading is
/// left out. Null temperatures are passed through untouched.
pub fn project_monthly(readings: &[Reading], station_ids: &[String]) -> MonthlyDataResponse {
    let mut stations = Vec::new();
    let mut total_points = 0;

    for station_id in station_ids {
        let rows: Vec<&Reading> = readings
            .iter()
            .filter(|r| &r.station_id == station_id)
            .collect();
        let Some(first) = rows.first() else {
            continue;
        };

        let data: Vec<MonthlyDataPoint> = rows
            .iter()
            .map(|r| MonthlyDataPoint {
                year: r.year,
                month: r.month,
                temperature: r.temperature,
            })
            .collect();

        total_points += data.len();
        stations.push(StationMonthlyData {
            station_id: station_id.clone(),
            station_name: first.station_name.clone(),
            data,
        });
    }

    MonthlyDataResponse {
        stations,
        total_points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(station: &str, year: i32, month: u32, temperature: Option<f64>) -> Reading {
        Reading {
            station_id: station.to_string(),
            station_name: format!("Station {station}"),
            year,
            month,
            temperature,
        }
    }

    #[test]
    fn test_caller_order_and_nulls() {
        let readings = vec![
            reading("A", 2000, 1, Some(1.0)),
            reading("A", 2000, 2, None),
            reading("B", 2000, 1, Some(3.0)),
        ];
        let ids = vec!["B".to_string(), "A".to_string()];
        let response = project_monthly(&readings, &ids);

        assert_eq!(response.stations.len(), 2);
        assert_eq!(response.stations[0].station_id, "B");
        assert_eq!(response.stations[1].station_id, "A");
        assert_eq!(response.stations[1].data[1].temperature, None);
        assert_eq!(response.total_points, 3);
    }

    #[test]
    fn test_station_without_rows_is_omitted() {
        let readings = vec![reading("A", 2000, 1, Some(1.0))];
        let ids = vec!["A".to_string(), "ghost".to_string()];
        let response = project_monthly(&readings, &ids);

        assert_eq!(response.stations.len(), 1);
        assert!(response.stations.iter().all(|s| s.station_id != "ghost"));
        assert_eq!(response.total_points, 1);
    }
}
