//! Request validation shared by every read operation.
//!
//! An HTTP layer maps query strings onto [`StationQuery`], calls
//! [`StationQuery::validate`] and turns a [`ClimateError`] into a response with
//! [`ClimateError::status_code`] and [`ClimateError::to_body`].

use crate::error::ClimateError;
use crate::store::directory::StationDirectory;
use std::ops::RangeInclusive;

/// Years accepted as query bounds.
pub const VALID_YEARS: RangeInclusive<i32> = 1859..=2100;

/// Splits a comma separated id list, trimming whitespace and dropping empty entries.
///
/// ```
/// use climate_stats::api::parse_station_ids;
///
/// assert_eq!(parse_station_ids("66062, 101234,"), vec!["66062", "101234"]);
/// assert!(parse_station_ids(" , ").is_empty());
/// ```
pub fn parse_station_ids(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}

/// Station ids plus an optional inclusive year window.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StationQuery {
    pub station_ids: Vec<String>,
    pub year_from: Option<i32>,
    pub year_to: Option<i32>,
}

impl StationQuery {
    pub fn new(station_ids: &[String], year_from: Option<i32>, year_to: Option<i32>) -> Self {
        Self {
            station_ids: station_ids.to_vec(),
            year_from,
            year_to,
        }
    }

    /// Checks the query against the station directory.
    ///
    /// Returns the query with duplicate ids removed (first occurrence kept).
    ///
    /// # Errors
    ///
    /// * [`ClimateError::EmptyStationSelection`] when no id was given.
    /// * [`ClimateError::InvalidYearRange`] when a bound falls outside [`VALID_YEARS`]
    ///   or `year_from > year_to`.
    /// * [`ClimateError::StationNotFound`] naming every unknown id.
    pub fn validate(self, directory: &StationDirectory) -> Result<Self, ClimateError> {
        let query = self.validate_shape()?;
        let unknown = directory.validate(&query.station_ids);
        if !unknown.is_empty() {
            return Err(ClimateError::StationNotFound {
                station_ids: unknown,
            });
        }
        Ok(query)
    }

    /// The checks that do not need the station directory.
    pub fn validate_shape(self) -> Result<Self, ClimateError> {
        let mut station_ids: Vec<String> = Vec::with_capacity(self.station_ids.len());
        for id in self.station_ids {
            let id = id.trim().to_string();
            if !id.is_empty() && !station_ids.contains(&id) {
                station_ids.push(id);
            }
        }
        if station_ids.is_empty() {
            return Err(ClimateError::EmptyStationSelection);
        }

        let out_of_range = |year: Option<i32>| year.is_some_and(|y| !VALID_YEARS.contains(&y));
        let reason = if out_of_range(self.year_from) || out_of_range(self.year_to) {
            Some(format!(
                "years must lie within {}..={}",
                VALID_YEARS.start(),
                VALID_YEARS.end()
            ))
        } else if matches!((self.year_from, self.year_to), (Some(from), Some(to)) if from > to) {
            Some("year_from must not exceed year_to".to_string())
        } else {
            None
        };
        if let Some(reason) = reason {
            return Err(ClimateError::InvalidYearRange {
                year_from: self.year_from,
                year_to: self.year_to,
                reason,
            });
        }

        Ok(Self {
            station_ids,
            year_from: self.year_from,
            year_to: self.year_to,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::station::Station;
    use std::collections::HashMap;

    fn directory() -> StationDirectory {
        let names = HashMap::new();
        StationDirectory::new(vec![
            Station::resolve("66062", &names),
            Station::resolve("101234", &names),
        ])
    }

    fn ids(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_unknown_stations_are_named() {
        let err = StationQuery::new(&ids(&["66062", "999", "888"]), None, None)
            .validate(&directory())
            .unwrap_err();
        match err {
            ClimateError::StationNotFound { station_ids } => {
                assert_eq!(station_ids, ids(&["999", "888"]));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_empty_selection() {
        let err = StationQuery::new(&ids(&[" ", ""]), None, None)
            .validate(&directory())
            .unwrap_err();
        assert!(matches!(err, ClimateError::EmptyStationSelection));
    }

    #[test]
    fn test_year_range_checks() {
        let inverted = StationQuery::new(&ids(&["66062"]), Some(2000), Some(1990))
            .validate(&directory())
            .unwrap_err();
        assert_eq!(inverted.error_type(), "invalid_date_range");

        let too_early = StationQuery::new(&ids(&["66062"]), Some(1700), None).validate_shape();
        assert!(matches!(
            too_early,
            Err(ClimateError::InvalidYearRange { year_from: Some(1700), .. })
        ));

        let equal = StationQuery::new(&ids(&["66062"]), Some(1990), Some(1990)).validate_shape();
        assert!(equal.is_ok());
    }

    #[test]
    fn test_duplicates_removed_in_order() {
        let query = StationQuery::new(&ids(&["101234", "66062", "101234"]), None, Some(2000))
            .validate(&directory())
            .unwrap();
        assert_eq!(query.station_ids, ids(&["101234", "66062"]));
        assert_eq!(query.year_to, Some(2000));
    }
}
