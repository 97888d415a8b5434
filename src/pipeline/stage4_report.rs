use serde::Serialize;
use thiserror::Error;

use crate::aggregate::durations::duration_stats;
use crate::model::table::Table;
use crate::report::text::render_report;

#[derive(Debug, Error, PartialEq)]
pub enum ReportError {
    #[error("no test case records to report on")]
    EmptyData,
}

/// The six aggregates, durations already rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsReport {
    pub executed: usize,
    pub passed: usize,
    pub failed: usize,
    pub mean_duration: f64,
    pub max_duration: f64,
    pub min_duration: f64,
}

pub fn compute_metrics(table: &Table) -> Result<MetricsReport, ReportError> {
    let stats = duration_stats(&table.durations())
        .ok_or(ReportError::EmptyData)?
        .rounded();

    // statuses other than passed/failed count toward neither
    let passed = table.records().iter().filter(|r| r.is_passed()).count();
    let failed = table.records().iter().filter(|r| r.is_failed()).count();

    Ok(MetricsReport {
        executed: table.len(),
        passed,
        failed,
        mean_duration: stats.mean,
        max_duration: stats.max,
        min_duration: stats.min,
    })
}

pub fn run_stage4_report(table: &Table) -> Result<MetricsReport, ReportError> {
    let report = compute_metrics(table)?;
    print!("{}", render_report(&report));
    Ok(report)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_report.rs"]
mod tests;
