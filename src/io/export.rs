//! CSV export of the cumulative NPV curve.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::finance::CashFlowResult;

/// Column header for the NPV curve export.
const HEADER: [&str; 3] = ["year", "npv", "breakeven"];

/// Exports the NPV curve to a CSV file at the given path.
///
/// Writes a header row followed by one row per analysis year. Produces
/// deterministic output for identical inputs.
///
/// # Arguments
///
/// * `result` - Evaluation whose NPV curve is exported
/// * `path` - Output file path
///
/// # Errors
///
/// Returns a `csv::Error` if file creation or writing fails.
pub fn export_csv(result: &CashFlowResult, path: &Path) -> csv::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(result, buf)
}

/// Writes the NPV curve as CSV to any writer.
///
/// Columns are the year index, the cumulative NPV, and a constant zero
/// breakeven line for charting.
///
/// # Errors
///
/// Returns a `csv::Error` if writing fails.
pub fn write_csv(result: &CashFlowResult, writer: impl Write) -> csv::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);
    wtr.write_record(HEADER)?;

    for (year, npv) in result.years.iter().zip(&result.npv_values) {
        wtr.write_record(&[year.to_string(), format!("{npv:.2}"), "0".to_string()])?;
    }

    wtr.flush()?;
    Ok(())
}
