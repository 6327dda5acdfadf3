//! CSV export of a debt series
//!
//! Defines the logical schema: one row per record, fixed column order
//! `year,totalDebt,externalDebt,internalDebt,budgetDeficit,debtPerCitizen`.
//! An absent per-citizen figure serializes as an empty field. Byte delivery
//! (file download, HTTP response) is the caller's concern.

use std::io::Write;
use std::path::Path;

use crate::error::EngineResult;
use crate::series::Series;

/// Write the series as CSV, headers included
pub fn write_csv<W: Write>(series: &Series, writer: W) -> EngineResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in series {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write the series as a CSV file at `path`
pub fn write_csv_path<P: AsRef<Path>>(series: &Series, path: P) -> EngineResult<()> {
    write_csv(series, std::fs::File::create(path)?)
}

/// Render the series as a CSV string
pub fn to_csv_string(series: &Series) -> EngineResult<String> {
    let mut buf = Vec::new();
    write_csv(series, &mut buf)?;
    String::from_utf8(buf).map_err(|e| {
        std::io::Error::new(std::io::ErrorKind::InvalidData, e).into()
    })
}
