use crate::store::directory::StationDirectory;
use crate::store::error::DataLoadError;
use crate::store::tabular_store::StoreSnapshot;
use crate::types::month::MONTH_COLUMNS;
use crate::types::station::{display_name, Station};
use log::{info, warn};
use polars::prelude::*;
use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};
use tokio::{fs, task};

pub const STATION_COLUMN: &str = "Station Number";
pub const YEAR_COLUMN: &str = "Year";

/// One long-format row before it is turned into columns.
struct LongRow {
    station_id: String,
    year: i32,
    month: u32,
    temperature: Option<f64>,
}

/// Reads the wide, semicolon-delimited station file and reshapes it into the long
/// reading table held by the store.
pub struct ReadingLoader {
    station_names: HashMap<String, String>,
}

impl ReadingLoader {
    pub fn new(station_names: HashMap<String, String>) -> Self {
        Self { station_names }
    }

    /// Loads `path` into a fresh snapshot.
    ///
    /// The file is checked for existence first; parsing and reshaping happen on the
    /// blocking pool.
    pub async fn load(&self, path: &Path) -> Result<StoreSnapshot, DataLoadError> {
        match fs::metadata(path).await {
            Ok(meta) if meta.is_file() => {}
            Ok(_) => return Err(DataLoadError::NotFound(path.to_path_buf())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!("Data file {:?} does not exist", path);
                return Err(DataLoadError::NotFound(path.to_path_buf()));
            }
            Err(e) => return Err(DataLoadError::Io(path.to_path_buf(), e)),
        }

        let path_buf = path.to_path_buf();
        let names = self.station_names.clone();
        let snapshot = task::spawn_blocking(move || Self::parse_file(path_buf, &names)).await??;

        info!(
            "Loaded {} data points for {} stations from {:?} (years {})",
            snapshot.frame.height(),
            snapshot.directory.len(),
            path,
            snapshot
                .year_span
                .map(|(lo, hi)| format!("{lo}-{hi}"))
                .unwrap_or_else(|| "none".to_string()),
        );
        Ok(snapshot)
    }

    fn parse_file(
        path: PathBuf,
        names: &HashMap<String, String>,
    ) -> Result<StoreSnapshot, DataLoadError> {
        let parse_err = |source: PolarsError| DataLoadError::Parse {
            path: path.clone(),
            source,
        };

        // Every column is read as text; numeric parsing is done per cell below so a bad
        // month cell becomes a null instead of failing the whole column.
        let wide = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(0))
            .map_parse_options(|options| options.with_separator(b';'))
            .try_into_reader_with_file_path(Some(path.clone()))
            .map_err(parse_err)?
            .finish()
            .map_err(parse_err)?;

        let rows = Self::reshape(&wide, &path)?;
        Self::build_snapshot(rows, names).map_err(parse_err)
    }

    /// Finds the actual header for each required column, ignoring surrounding whitespace.
    fn resolve_columns(wide: &DataFrame) -> Result<(String, String, Vec<String>), DataLoadError> {
        let found: Vec<String> = wide
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();
        let lookup = |wanted: &str| found.iter().find(|name| name.trim() == wanted).cloned();

        let required = [STATION_COLUMN, YEAR_COLUMN]
            .into_iter()
            .chain(MONTH_COLUMNS.iter().copied());
        let missing: Vec<String> = required
            .filter(|wanted| lookup(wanted).is_none())
            .map(str::to_string)
            .collect();
        if !missing.is_empty() {
            warn!("Data file is missing columns {:?}", missing);
            return Err(DataLoadError::SchemaMismatch { missing, found });
        }

        let station = lookup(STATION_COLUMN).unwrap_or_default();
        let year = lookup(YEAR_COLUMN).unwrap_or_default();
        let months = MONTH_COLUMNS
            .iter()
            .map(|m| lookup(m).unwrap_or_default())
            .collect();
        Ok((station, year, months))
    }

    fn reshape(wide: &DataFrame, path: &Path) -> Result<Vec<LongRow>, DataLoadError> {
        let (station_col, year_col, month_cols) = Self::resolve_columns(wide)?;
        let parse_err = |source: PolarsError| DataLoadError::Parse {
            path: path.to_path_buf(),
            source,
        };

        let stations = wide.column(&station_col).and_then(|c| c.str().cloned());
        let stations = stations.map_err(parse_err)?;
        let years = wide.column(&year_col).and_then(|c| c.str().cloned());
        let years = years.map_err(parse_err)?;
        let months = month_cols
            .iter()
            .map(|name| wide.column(name).and_then(|c| c.str().cloned()))
            .collect::<PolarsResult<Vec<StringChunked>>>()
            .map_err(parse_err)?;

        let invalid = |idx: usize, column: &str, value: Option<&str>| DataLoadError::InvalidRow {
            path: path.to_path_buf(),
            // Header is line 1.
            line: idx + 2,
            column: column.to_string(),
            value: value.unwrap_or_default().to_string(),
        };

        let mut rows = Vec::with_capacity(wide.height() * MONTH_COLUMNS.len());
        for idx in 0..wide.height() {
            let raw_station = stations.get(idx);
            let station_id = match raw_station.map(str::trim) {
                Some(id) if !id.is_empty() => id.to_string(),
                _ => return Err(invalid(idx, STATION_COLUMN, raw_station)),
            };
            let raw_year = years.get(idx);
            let year = raw_year
                .and_then(|y| y.trim().parse::<i32>().ok())
                .ok_or_else(|| invalid(idx, YEAR_COLUMN, raw_year))?;

            for (month_idx, column) in months.iter().enumerate() {
                rows.push(LongRow {
                    station_id: station_id.clone(),
                    year,
                    month: month_idx as u32 + 1,
                    temperature: column.get(idx).and_then(parse_temperature),
                });
            }
        }
        Ok(rows)
    }

    fn build_snapshot(
        mut rows: Vec<LongRow>,
        names: &HashMap<String, String>,
    ) -> PolarsResult<StoreSnapshot> {
        rows.sort_by(|a, b| {
            (a.station_id.as_str(), a.year, a.month).cmp(&(b.station_id.as_str(), b.year, b.month))
        });

        let ids: BTreeSet<&str> = rows.iter().map(|r| r.station_id.as_str()).collect();
        let resolved: HashMap<&str, String> =
            ids.iter().map(|id| (*id, display_name(id, names))).collect();

        let directory = StationDirectory::new(
            resolved
                .iter()
                .map(|(id, name)| Station {
                    id: id.to_string(),
                    name: name.clone(),
                })
                .collect(),
        );

        let year_span = rows.iter().map(|r| r.year).fold(None, |span, year| match span {
            None => Some((year, year)),
            Some((lo, hi)) => Some((i32::min(lo, year), i32::max(hi, year))),
        });

        let frame = DataFrame::new(vec![
            Column::new(
                "station_id".into(),
                rows.iter().map(|r| r.station_id.as_str()).collect::<Vec<_>>(),
            ),
            Column::new(
                "station_name".into(),
                rows.iter()
                    .map(|r| resolved[r.station_id.as_str()].as_str())
                    .collect::<Vec<_>>(),
            ),
            Column::new("year".into(), rows.iter().map(|r| r.year).collect::<Vec<i32>>()),
            Column::new("month".into(), rows.iter().map(|r| r.month).collect::<Vec<u32>>()),
            Column::new(
                "temperature".into(),
                rows.iter().map(|r| r.temperature).collect::<Vec<Option<f64>>>(),
            ),
        ])?;

        Ok(StoreSnapshot {
            frame,
            directory,
            year_span,
        })
    }
}

/// A month cell as a temperature; anything that is not a finite number is missing.
fn parse_temperature(cell: &str) -> Option<f64> {
    cell.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_temperature_cells() {
        assert_eq!(parse_temperature("23.4"), Some(23.4));
        assert_eq!(parse_temperature(" -1.5 "), Some(-1.5));
        assert_eq!(parse_temperature(""), None);
        assert_eq!(parse_temperature("null"), None);
        assert_eq!(parse_temperature("NA"), None);
        assert_eq!(parse_temperature("NaN"), None);
        assert_eq!(parse_temperature("warm"), None);
    }
}
