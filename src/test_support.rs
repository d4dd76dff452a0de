use crate::climate_stats::ClimateStats;
use crate::store::tabular_store::TabularStore;
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;

pub const HEADER: &str = "Station Number;Year;Jan;Feb;Mar;Apr;May;Jun;Jul;Aug;Sep;Oct;Nov;Dec";

/// Two stations over three years with a few gaps.
pub const SAMPLE_ROWS: &[&str] = &[
    "66062;1950;23.4;23.1;21.9;19.0;16.2;13.5;12.7;13.9;16.2;18.4;20.3;22.0",
    "66062;1951;22.1;22.0;20.9;18.1;15.3;12.8;12.0;13.3;15.5;17.8;19.4;21.1",
    "66062;1952;24.0;;22.5;19.6;16.8;14.1;13.0;14.4;16.9;18.9;20.8;",
    "101234;1951;5.0;6.0;7.0;8.0;9.0;10.0;11.0;12.0;13.0;14.0;15.0;16.0",
    "101234;1952;;;;;;;;;;;;",
];

pub fn csv_file(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{HEADER}").unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    file.flush().unwrap();
    file
}

pub fn climate_for(file: &NamedTempFile) -> ClimateStats {
    ClimateStats::new(Arc::new(
        TabularStore::builder().source(file.path()).build(),
    ))
}

pub fn ids(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}
