use std::fmt;

pub const STATUS_PASSED: &str = "passed";
pub const STATUS_FAILED: &str = "failed";

/// One executed test case, as found in the results JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct TestCaseRecord {
    pub test_case_id: i64,
    pub test_case_name: String,
    pub status: String,
    pub duration: f64,
    pub timestamps: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    TestCaseId,
    TestCaseName,
    Status,
    Duration,
    Timestamps,
}

impl Column {
    pub const ALL: [Column; 5] = [
        Column::TestCaseId,
        Column::TestCaseName,
        Column::Status,
        Column::Duration,
        Column::Timestamps,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Column::TestCaseId => "test_case_id",
            Column::TestCaseName => "test_case_name",
            Column::Status => "status",
            Column::Duration => "duration",
            Column::Timestamps => "timestamps",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Column::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TestCaseRecord {
    pub fn is_passed(&self) -> bool {
        self.status == STATUS_PASSED
    }

    pub fn is_failed(&self) -> bool {
        self.status == STATUS_FAILED
    }

    /// Text form of one cell, as written to the delimited file.
    pub fn cell(&self, column: Column) -> String {
        match column {
            Column::TestCaseId => self.test_case_id.to_string(),
            Column::TestCaseName => self.test_case_name.clone(),
            Column::Status => self.status.clone(),
            Column::Duration => fmt_duration(self.duration),
            Column::Timestamps => self.timestamps.clone(),
        }
    }
}

/// Shortest round-trip form, keeping a trailing `.0` on integral values.
pub fn fmt_duration(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/record.rs"]
mod tests;
