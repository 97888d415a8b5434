use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::input::json::{JsonTableError, read_json_table};
use crate::input::path_display;
use crate::model::table::Table;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to load {path}: {source}")]
    Json {
        path: String,
        source: JsonTableError,
    },
}

pub fn run_stage1_load(json_path: &Path) -> Result<Table, LoadError> {
    let table = read_json_table(json_path).map_err(|source| LoadError::Json {
        path: path_display(json_path).to_string(),
        source,
    })?;
    debug!(
        path = %path_display(json_path),
        rows = table.len(),
        header = %table.header().join(","),
        "parsed test case records"
    );
    Ok(table)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_load.rs"]
mod tests;
