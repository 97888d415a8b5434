use std::path::Path;

use thiserror::Error;

use crate::input::{InputError, open_reader};
use crate::model::schema::{SchemaError, columns_from_header, record_from_cells};
use crate::model::table::Table;

#[derive(Debug, Error)]
pub enum DelimitedTableError {
    #[error("input error: {0}")]
    Input(#[from] InputError),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),
}

/// Reads a comma-separated table with a header row back into a [`Table`].
pub fn read_delimited_table(path: &Path) -> Result<Table, DelimitedTableError> {
    let reader = open_reader(path)?;
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let columns = columns_from_header(csv_reader.headers()?)?;
    let mut records = Vec::new();
    for (index, row) in csv_reader.records().enumerate() {
        let row = row?;
        records.push(record_from_cells(index, &columns, &row)?);
    }
    Ok(Table::new(columns, records)?)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/delimited.rs"]
mod tests;
