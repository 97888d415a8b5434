use std::path::Path;

use thiserror::Error;

use crate::input::{InputError, open_reader};
use crate::model::record::Column;
use crate::model::schema::{RawRecord, SchemaError};
use crate::model::table::Table;

#[derive(Debug, Error)]
pub enum JsonTableError {
    #[error("input error: {0}")]
    Input(#[from] InputError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),
}

/// Reads a JSON array of test case objects. Column order follows the keys
/// of the first record; every record must carry exactly the schema fields.
pub fn read_json_table(path: &Path) -> Result<Table, JsonTableError> {
    let reader = open_reader(path)?;
    let raw: Vec<RawRecord> = serde_json::from_reader(reader)?;
    Ok(table_from_raw(raw)?)
}

fn table_from_raw(raw: Vec<RawRecord>) -> Result<Table, SchemaError> {
    let columns = match raw.first() {
        Some(first) => first.columns(0)?,
        None => Column::ALL.to_vec(),
    };

    let mut records = Vec::with_capacity(raw.len());
    for (index, row) in raw.into_iter().enumerate() {
        records.push(row.into_record(index)?);
    }
    Table::new(columns, records)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/json.rs"]
mod tests;
