use std::path::Path;

use thiserror::Error;
use tracing::warn;

use crate::input::path_display;
use crate::model::table::Table;

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

/// Writes the table as comma-separated text: header row, then one row per
/// record, no index column. Overwrites `out_path`.
pub fn run_stage2_write(table: &Table, out_path: &Path) -> Result<(), WriteError> {
    let writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Necessary)
        .from_path(out_path)?;

    if let Err(err) = write_rows(writer, table) {
        if let Err(rm_err) = std::fs::remove_file(out_path) {
            warn!(
                path = %path_display(out_path),
                error = %rm_err,
                "could not remove partial output"
            );
        }
        return Err(err);
    }

    println!("Data converted to {} successfully!", path_display(out_path));
    Ok(())
}

fn write_rows<W: std::io::Write>(mut writer: csv::Writer<W>, table: &Table) -> Result<(), WriteError> {
    writer.write_record(table.header())?;
    let mut cells = Vec::with_capacity(table.columns().len());
    for record in table.records() {
        cells.clear();
        cells.extend(table.columns().iter().map(|c| record.cell(*c)));
        writer.write_record(&cells)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_write.rs"]
mod tests;
