use crate::store::error::StoreError;
use crate::types::reading::Reading;
use polars::prelude::*;

fn required<T>(value: Option<T>, column: &str, row: usize) -> Result<T, StoreError> {
    value.ok_or_else(|| StoreError::UnexpectedNull {
        column: column.to_string(),
        row,
    })
}

/// Converts a collected reading frame into owned [`Reading`]s, preserving row order.
pub fn extract_readings(frame: &DataFrame) -> Result<Vec<Reading>, StoreError> {
    let ids = frame.column("station_id")?.str()?;
    let names = frame.column("station_name")?.str()?;
    let years = frame.column("year")?.i32()?;
    let months = frame.column("month")?.u32()?;
    let temperatures = frame.column("temperature")?.f64()?;

    ids.into_iter()
        .zip(names)
        .zip(years)
        .zip(months)
        .zip(temperatures)
        .enumerate()
        .map(|(row, ((((id, name), year), month), temperature))| {
            Ok(Reading {
                station_id: required(id, "station_id", row)?.to_string(),
                station_name: required(name, "station_name", row)?.to_string(),
                year: required(year, "year", row)?,
                month: required(month, "month", row)?,
                temperature,
            })
        })
        .collect()
}
