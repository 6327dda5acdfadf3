//! Load debt series from the embedded baseline dataset or caller-supplied
//! JSON/CSV files
//!
//! External statistics collaborators deliver whatever wire format they like;
//! callers map their responses into `DebtRecord` shape before handing a
//! series to the engine. The loaders here cover the two formats the
//! dashboard itself ships and downloads.

use std::path::Path;

use crate::error::EngineResult;
use crate::series::{DebtRecord, Series};

/// Embedded baseline dataset: the sparse known data points the historical
/// window is reconstructed from
const STATIC_BASELINE_JSON: &str = include_str!("../../data/static_debt_data.json");

/// Sparse baseline series bundled with the engine
pub fn static_baseline() -> EngineResult<Series> {
    let records: Vec<DebtRecord> = serde_json::from_str(STATIC_BASELINE_JSON)?;
    Series::from_records(records)
}

/// Load a series from a JSON array of records
pub fn load_series_json<P: AsRef<Path>>(path: P) -> EngineResult<Series> {
    let text = std::fs::read_to_string(path)?;
    let records: Vec<DebtRecord> = serde_json::from_str(&text)?;
    Series::from_records(records)
}

/// Load a series from a CSV file with the export column layout
pub fn load_series_csv<P: AsRef<Path>>(path: P) -> EngineResult<Series> {
    load_series_from_reader(csv::Reader::from_path(path)?)
}

/// Load a series from any CSV reader (e.g. string buffer, network stream)
pub fn load_series_from_reader<R: std::io::Read>(mut reader: csv::Reader<R>) -> EngineResult<Series> {
    let mut records = Vec::new();
    for result in reader.deserialize() {
        let record: DebtRecord = result?;
        records.push(record);
    }
    Series::from_records(records)
}
