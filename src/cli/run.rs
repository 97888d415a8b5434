use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use tracing::{error, info};

use crate::cli::config::{ConfigError, RunConfig, load_run_config};
use crate::input::delimited::read_delimited_table;
use crate::pipeline::stage1_load::run_stage1_load;
use crate::pipeline::stage2_write::run_stage2_write;
use crate::pipeline::stage3_export::run_stage3_export;
use crate::pipeline::stage4_report::{MetricsReport, compute_metrics, run_stage4_report};
use crate::report::json::write_summary;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Path to the JSON file.
    #[arg(long = "json_file_location", alias = "json-file-location")]
    pub(crate) json_file_location: Option<PathBuf>,

    /// CSV Name
    #[arg(long = "csv_file_name", alias = "csv-file-name")]
    pub(crate) csv_file_name: Option<PathBuf>,

    /// Path to desired export location.
    #[arg(long = "export_location", alias = "export-location")]
    pub(crate) export_location: Option<PathBuf>,

    /// Optional TOML run file supplying any of the above
    #[arg(long)]
    pub(crate) config: Option<PathBuf>,

    /// Also write the metrics as JSON to this path
    #[arg(long = "summary_json", alias = "summary-json")]
    pub(crate) summary_json: Option<PathBuf>,

    /// Re-read the exported CSV and check it yields the same metrics
    #[arg(long = "verify_export", alias = "verify-export")]
    pub(crate) verify_export: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RunPlan {
    pub json_file_location: PathBuf,
    pub csv_file_name: PathBuf,
    pub export_location: PathBuf,
    pub summary_json: Option<PathBuf>,
    pub verify_export: bool,
}

impl RunArgs {
    pub(crate) fn resolve(self, file: RunConfig) -> Result<RunPlan, ConfigError> {
        Ok(RunPlan {
            json_file_location: self
                .json_file_location
                .or(file.json_file_location)
                .ok_or(ConfigError::MissingSetting("json_file_location"))?,
            csv_file_name: self
                .csv_file_name
                .or(file.csv_file_name)
                .ok_or(ConfigError::MissingSetting("csv_file_name"))?,
            export_location: self
                .export_location
                .or(file.export_location)
                .ok_or(ConfigError::MissingSetting("export_location"))?,
            summary_json: self.summary_json.or(file.summary_json),
            verify_export: self.verify_export || file.verify_export.unwrap_or(false),
        })
    }
}

pub fn handle(args: RunArgs) -> anyhow::Result<()> {
    let plan = stage("config", || -> Result<RunPlan, ConfigError> {
        let file_config = match &args.config {
            Some(path) => load_run_config(path)?,
            None => RunConfig::default(),
        };
        args.resolve(file_config)
    })?;
    execute(&plan).map(|_| ())
}

pub(crate) fn execute(plan: &RunPlan) -> anyhow::Result<MetricsReport> {
    let table = stage("load", || run_stage1_load(&plan.json_file_location))?;
    info!(
        rows = table.len(),
        columns = table.columns().len(),
        "loaded test case table"
    );

    stage("write", || run_stage2_write(&table, &plan.csv_file_name))?;
    let exported = stage("export", || {
        run_stage3_export(&plan.csv_file_name, &plan.export_location)
    })?;
    let report = stage("report", || run_stage4_report(&table))?;

    if plan.verify_export {
        stage("verify", || verify_export(&exported, &report))?;
    }
    if let Some(path) = &plan.summary_json {
        stage("summary", || write_summary(path, &report))?;
        info!(path = %path.to_string_lossy(), "wrote metrics summary");
    }
    Ok(report)
}

/// Logs start/finish of a stage; a failure is logged with the stage name
/// and handed back unchanged.
fn stage<T, E: Display>(name: &'static str, f: impl FnOnce() -> Result<T, E>) -> Result<T, E> {
    let start = Instant::now();
    info!(stage = name, "starting stage");
    match f() {
        Ok(value) => {
            info!(
                stage = name,
                elapsed_ms = start.elapsed().as_millis(),
                "finished stage"
            );
            Ok(value)
        }
        Err(err) => {
            error!(stage = name, error = %err, "stage failed");
            Err(err)
        }
    }
}

fn verify_export(exported: &Path, expected: &MetricsReport) -> anyhow::Result<()> {
    let table = read_delimited_table(exported)?;
    let found = compute_metrics(&table)?;
    if &found != expected {
        anyhow::bail!(
            "exported table {} yields {found:?}, expected {expected:?}",
            exported.to_string_lossy()
        );
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/cli/run.rs"]
mod tests;
