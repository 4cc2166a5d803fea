//! CSV export of result rows

use crate::error::{ErrorCode, Result, RouteError};
use crate::format::ResultRow;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Column header of every exported file
pub const HEADER: [&str; 2] = ["subject", "statistic"];

/// Write `rows` as `subject,statistic` CSV to `path`
pub fn export_csv(rows: &[ResultRow], path: &Path) -> Result<()> {
    let file = std::fs::File::create(path).map_err(|e| {
        RouteError::export(ErrorCode::OUTPUT_CSV_WRITE, path, "cannot create file").with_source(e)
    })?;
    write_csv(rows, file)
        .map_err(|e| RouteError::export(ErrorCode::OUTPUT_CSV_WRITE, path, "write failed").with_source(e))?;

    debug!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

/// Write `rows` as CSV to any writer
pub fn write_csv<W: Write>(rows: &[ResultRow], writer: W) -> std::result::Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(HEADER)?;
    for row in rows {
        writer.write_record([row.subject.as_str(), row.statistic.to_string().as_str()])?;
    }
    writer.flush()?;
    Ok(())
}

/// Render `rows` as a CSV string
pub fn to_csv_string(rows: &[ResultRow]) -> std::result::Result<String, csv::Error> {
    let mut buffer = Vec::new();
    write_csv(rows, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
