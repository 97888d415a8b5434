use std::fmt;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde_json::Value as JsonValue;
use thiserror::Error;

use crate::model::record::{Column, TestCaseRecord};

#[derive(Debug, Error, PartialEq)]
pub enum SchemaError {
    #[error("record {index}: missing field `{field}`")]
    MissingField { index: usize, field: Column },
    #[error("record {index}: unknown field `{field}`")]
    UnknownField { index: usize, field: String },
    #[error("record {index}: duplicate field `{field}`")]
    DuplicateField { index: usize, field: Column },
    #[error("record {index}: field `{field}` expected {expected}, found {found}")]
    InvalidType {
        index: usize,
        field: Column,
        expected: &'static str,
        found: String,
    },
    #[error("header is missing column `{0}`")]
    MissingColumn(Column),
    #[error("header has unknown column `{0}`")]
    UnknownColumn(String),
    #[error("header repeats column `{0}`")]
    DuplicateColumn(Column),
}

/// JSON object fields in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord(pub Vec<(String, JsonValue)>);

impl<'de> Deserialize<'de> for RawRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RawRecordVisitor;

        impl<'de> Visitor<'de> for RawRecordVisitor {
            type Value = RawRecord;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a test case object")
            }

            fn visit_map<A>(self, mut map: A) -> Result<RawRecord, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut fields = Vec::with_capacity(map.size_hint().unwrap_or(Column::ALL.len()));
                while let Some((key, value)) = map.next_entry::<String, JsonValue>()? {
                    fields.push((key, value));
                }
                Ok(RawRecord(fields))
            }
        }

        deserializer.deserialize_map(RawRecordVisitor)
    }
}

impl RawRecord {
    /// Keys mapped onto the schema, in document order.
    pub fn columns(&self, index: usize) -> Result<Vec<Column>, SchemaError> {
        let mut columns = Vec::with_capacity(self.0.len());
        for (key, _) in &self.0 {
            let column = Column::from_name(key).ok_or_else(|| SchemaError::UnknownField {
                index,
                field: key.clone(),
            })?;
            if columns.contains(&column) {
                return Err(SchemaError::DuplicateField {
                    index,
                    field: column,
                });
            }
            columns.push(column);
        }
        Ok(columns)
    }

    pub fn into_record(self, index: usize) -> Result<TestCaseRecord, SchemaError> {
        let mut slots: [Option<JsonValue>; 5] = Default::default();
        for (key, value) in self.0 {
            let column = Column::from_name(&key)
                .ok_or(SchemaError::UnknownField { index, field: key })?;
            let slot = &mut slots[column_slot(column)];
            if slot.is_some() {
                return Err(SchemaError::DuplicateField {
                    index,
                    field: column,
                });
            }
            *slot = Some(value);
        }

        let mut take = |column: Column| {
            slots[column_slot(column)]
                .take()
                .ok_or(SchemaError::MissingField {
                    index,
                    field: column,
                })
        };
        let id = take(Column::TestCaseId)?;
        let name = take(Column::TestCaseName)?;
        let status = take(Column::Status)?;
        let duration = take(Column::Duration)?;
        let timestamps = take(Column::Timestamps)?;

        Ok(TestCaseRecord {
            test_case_id: json_integer(index, Column::TestCaseId, &id)?,
            test_case_name: json_string(index, Column::TestCaseName, name)?,
            status: json_string(index, Column::Status, status)?,
            duration: json_number(index, Column::Duration, &duration)?,
            timestamps: json_string(index, Column::Timestamps, timestamps)?,
        })
    }
}

/// Validates one delimited row laid out as `columns`.
pub fn record_from_cells(
    index: usize,
    columns: &[Column],
    cells: &csv::StringRecord,
) -> Result<TestCaseRecord, SchemaError> {
    let cell = |column: Column| {
        columns
            .iter()
            .position(|c| *c == column)
            .and_then(|pos| cells.get(pos))
            .ok_or(SchemaError::MissingField {
                index,
                field: column,
            })
    };

    let id_text = cell(Column::TestCaseId)?;
    let test_case_id = id_text
        .trim()
        .parse::<i64>()
        .map_err(|_| SchemaError::InvalidType {
            index,
            field: Column::TestCaseId,
            expected: "an integer",
            found: format!("`{id_text}`"),
        })?;
    let duration_text = cell(Column::Duration)?;
    let duration = duration_text
        .trim()
        .parse::<f64>()
        .map_err(|_| SchemaError::InvalidType {
            index,
            field: Column::Duration,
            expected: "a number",
            found: format!("`{duration_text}`"),
        })?;

    Ok(TestCaseRecord {
        test_case_id,
        test_case_name: cell(Column::TestCaseName)?.to_string(),
        status: cell(Column::Status)?.to_string(),
        duration,
        timestamps: cell(Column::Timestamps)?.to_string(),
    })
}

/// Checks that a header names every schema column exactly once.
pub fn columns_from_header(header: &csv::StringRecord) -> Result<Vec<Column>, SchemaError> {
    let mut columns = Vec::with_capacity(header.len());
    for name in header.iter() {
        let column = Column::from_name(name.trim())
            .ok_or_else(|| SchemaError::UnknownColumn(name.to_string()))?;
        if columns.contains(&column) {
            return Err(SchemaError::DuplicateColumn(column));
        }
        columns.push(column);
    }
    if let Some(missing) = Column::ALL.into_iter().find(|c| !columns.contains(c)) {
        return Err(SchemaError::MissingColumn(missing));
    }
    Ok(columns)
}

fn column_slot(column: Column) -> usize {
    match column {
        Column::TestCaseId => 0,
        Column::TestCaseName => 1,
        Column::Status => 2,
        Column::Duration => 3,
        Column::Timestamps => 4,
    }
}

fn json_integer(index: usize, field: Column, value: &JsonValue) -> Result<i64, SchemaError> {
    value.as_i64().ok_or_else(|| SchemaError::InvalidType {
        index,
        field,
        expected: "an integer",
        found: describe(value),
    })
}

fn json_number(index: usize, field: Column, value: &JsonValue) -> Result<f64, SchemaError> {
    value.as_f64().ok_or_else(|| SchemaError::InvalidType {
        index,
        field,
        expected: "a number",
        found: describe(value),
    })
}

fn json_string(index: usize, field: Column, value: JsonValue) -> Result<String, SchemaError> {
    match value {
        JsonValue::String(s) => Ok(s),
        other => Err(SchemaError::InvalidType {
            index,
            field,
            expected: "a string",
            found: describe(&other),
        }),
    }
}

fn describe(value: &JsonValue) -> String {
    match value {
        JsonValue::Null => "null".to_string(),
        JsonValue::Bool(b) => format!("boolean `{b}`"),
        JsonValue::Number(n) => format!("number `{n}`"),
        JsonValue::String(s) => format!("string {s:?}"),
        JsonValue::Array(_) => "an array".to_string(),
        JsonValue::Object(_) => "an object".to_string(),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/schema.rs"]
mod tests;
