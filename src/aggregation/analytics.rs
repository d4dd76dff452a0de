use crate::aggregation::stats::{mean, population_std, round_to};
use crate::types::analytics::{AnalyticsResponse, StationSummary, DEFAULT_YEAR_RANGE};
use crate::types::reading::Reading;
use std::collections::BTreeMap;

/// Running mean accumulator for one year.
#[derive(Default)]
struct YearAccumulator {
    sum: f64,
    count: usize,
}

impl YearAccumulator {
    fn mean(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }
}

/// Year with the highest (`hottest = true`) or lowest yearly mean.
///
/// Years are visited in ascending order and only a strictly better mean replaces the
/// current pick, so ties resolve to the earliest year.
fn extreme_year(yearly_means: &[(i32, f64)], hottest: bool) -> Option<(i32, f64)> {
    let mut best: Option<(i32, f64)> = None;
    for &(year, value) in yearly_means {
        let better = match best {
            None => true,
            Some((_, current)) if hottest => value > current,
            Some((_, current)) => value < current,
        };
        if better {
            best = Some((year, value));
        }
    }
    best
}

/// Summary statistics for one station's readings, in stored order.
///
/// Returns `None` when the station has no reading with a temperature.
pub fn summarize_station(station_id: &str, rows: &[&Reading]) -> Option<StationSummary> {
    let first = rows.first()?;

    let mut coldest: Option<&Reading> = None;
    let mut warmest: Option<&Reading> = None;
    let mut values = Vec::with_capacity(rows.len());
    let mut by_year: BTreeMap<i32, YearAccumulator> = BTreeMap::new();

    for &row in rows {
        let Some(t) = row.temperature else {
            continue;
        };
        values.push(t);

        let year = by_year.entry(row.year).or_default();
        year.sum += t;
        year.count += 1;

        // Strict comparisons keep the first occurrence on ties.
        if coldest.and_then(|r| r.temperature).map_or(true, |c| t < c) {
            coldest = Some(row);
        }
        if warmest.and_then(|r| r.temperature).map_or(true, |w| t > w) {
            warmest = Some(row);
        }
    }

    let (coldest, warmest) = (coldest?, warmest?);
    let min_temp = coldest.temperature?;
    let max_temp = warmest.temperature?;
    let mean_temp = mean(&values)?;
    let std_temp = if values.len() < 2 {
        0.0
    } else {
        population_std(&values)?
    };

    let yearly_means: Vec<(i32, f64)> = by_year
        .iter()
        .filter_map(|(year, acc)| acc.mean().map(|m| (*year, m)))
        .collect();
    let (hottest_year, hottest_year_temp) = extreme_year(&yearly_means, true)?;
    let (coldest_year, coldest_year_temp) = extreme_year(&yearly_means, false)?;

    let data_coverage = round_to(values.len() as f64 / rows.len() as f64 * 100.0, 1);

    Some(StationSummary {
        station_id: station_id.to_string(),
        station_name: first.station_name.clone(),
        min_temp: round_to(min_temp, 2),
        min_temp_year: coldest.year,
        min_temp_month: coldest.month,
        max_temp: round_to(max_temp, 2),
        max_temp_year: warmest.year,
        max_temp_month: warmest.month,
        mean_temp: round_to(mean_temp, 2),
        std_temp: round_to(std_temp, 2),
        coldest_year,
        coldest_year_temp: round_to(coldest_year_temp, 2),
        hottest_year,
        hottest_year_temp: round_to(hottest_year_temp, 2),
        data_coverage,
    })
}

/// Builds the analytics response for the requested stations.
///
/// `readings` must already be restricted to the requested stations and year window;
/// `year_range` spans all of them, falling back to [`DEFAULT_YEAR_RANGE`] when empty.
pub fn summarize(readings: &[Reading], station_ids: &[String]) -> AnalyticsResponse {
    let year_range = readings
        .iter()
        .map(|r| r.year)
        .fold(None, |span: Option<(i32, i32)>, year| match span {
            None => Some((year, year)),
            Some((lo, hi)) => Some((lo.min(year), hi.max(year))),
        })
        .unwrap_or(DEFAULT_YEAR_RANGE);

    let stations: Vec<StationSummary> = station_ids
        .iter()
        .filter_map(|station_id| {
            let rows: Vec<&Reading> = readings
                .iter()
                .filter(|r| &r.station_id == station_id)
                .collect();
            summarize_station(station_id, &rows)
        })
        .collect();

    AnalyticsResponse {
        total_stations: stations.len(),
        stations,
        year_range,
    }
}
