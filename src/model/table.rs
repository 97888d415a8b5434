use crate::model::record::{Column, TestCaseRecord};
use crate::model::schema::SchemaError;

/// In-memory test case table. `columns` is always a permutation of
/// [`Column::ALL`] and fixes the order cells are written in.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
    records: Vec<TestCaseRecord>,
}

impl Table {
    pub fn new(columns: Vec<Column>, records: Vec<TestCaseRecord>) -> Result<Self, SchemaError> {
        for (pos, column) in columns.iter().enumerate() {
            if columns[..pos].contains(column) {
                return Err(SchemaError::DuplicateColumn(*column));
            }
        }
        if let Some(missing) = Column::ALL.into_iter().find(|c| !columns.contains(c)) {
            return Err(SchemaError::MissingColumn(missing));
        }
        Ok(Self { columns, records })
    }

    #[cfg(test)]
    pub(crate) fn with_default_columns(records: Vec<TestCaseRecord>) -> Self {
        Self {
            columns: Column::ALL.to_vec(),
            records,
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn records(&self) -> &[TestCaseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn header(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.name()).collect()
    }

    pub fn durations(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.duration).collect()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/table.rs"]
mod tests;
