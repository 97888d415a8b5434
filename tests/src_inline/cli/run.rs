use super::*;
use crate::cli::Cli;
use crate::pipeline::stage4_report::ReportError;
use clap::Parser;
use std::fs;
use tempfile::tempdir;

const SCENARIO: &str = r#"[{"test_case_id":1,"test_case_name":"A","status":"passed","duration":2.0,"timestamps":"2023-10-31T06:31:28Z"},{"test_case_id":2,"test_case_name":"B","status":"failed","duration":4.0,"timestamps":"2023-10-31T06:32:00Z"}]"#;

fn args(argv: &[&str]) -> RunArgs {
    let mut full = vec!["result-analysis"];
    full.extend_from_slice(argv);
    Cli::parse_from(full).run
}

fn plan(dir: &Path) -> RunPlan {
    RunPlan {
        json_file_location: dir.join("results.json"),
        csv_file_name: dir.join("work").join("results.csv"),
        export_location: dir.join("export").join("latest"),
        summary_json: None,
        verify_export: true,
    }
}

#[test]
fn cli_values_win_over_config() {
    let file = RunConfig {
        json_file_location: Some(PathBuf::from("from_file.json")),
        csv_file_name: Some(PathBuf::from("from_file.csv")),
        export_location: Some(PathBuf::from("file_reports")),
        summary_json: None,
        verify_export: Some(true),
    };
    let plan = args(&["--json_file_location", "cli.json"])
        .resolve(file)
        .expect("plan");
    assert_eq!(plan.json_file_location, PathBuf::from("cli.json"));
    assert_eq!(plan.csv_file_name, PathBuf::from("from_file.csv"));
    assert_eq!(plan.export_location, PathBuf::from("file_reports"));
    assert!(plan.verify_export);
}

#[test]
fn missing_setting_fails_before_any_stage() {
    let err = args(&["--json_file_location", "cli.json", "--csv_file_name", "out.csv"])
        .resolve(RunConfig::default())
        .unwrap_err();
    assert!(matches!(err, ConfigError::MissingSetting("export_location")));
}

#[test]
fn end_to_end_scenario() {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join("results.json"), SCENARIO).expect("write json");
    fs::create_dir_all(dir.path().join("work")).expect("work dir");
    let mut plan = plan(dir.path());
    plan.summary_json = Some(dir.path().join("export").join("summary.json"));

    let report = execute(&plan).expect("run");
    assert_eq!(report.executed, 2);
    assert_eq!(report.passed, 1);
    assert_eq!(report.failed, 1);
    assert_eq!(report.mean_duration, 3.0);

    let exported = dir.path().join("export").join("latest").join("results.csv");
    assert!(!plan.csv_file_name.exists());
    let text = fs::read_to_string(&exported).expect("read export");
    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some("test_case_id,test_case_name,status,duration,timestamps")
    );
    assert_eq!(lines.count(), 2);

    let summary: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(dir.path().join("export").join("summary.json")).expect("summary"),
    )
    .expect("summary json");
    assert_eq!(summary["executed"], 2);
    assert_eq!(summary["max_duration"], 4.0);
}

#[test]
fn empty_input_fails_in_report_after_export() {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join("results.json"), "[]").expect("write json");
    fs::create_dir_all(dir.path().join("work")).expect("work dir");
    let plan = plan(dir.path());

    let err = execute(&plan).unwrap_err();
    assert_eq!(
        err.downcast_ref::<ReportError>(),
        Some(&ReportError::EmptyData)
    );
    assert!(
        dir.path()
            .join("export")
            .join("latest")
            .join("results.csv")
            .exists()
    );
}

#[test]
fn load_failure_stops_the_run() {
    let dir = tempdir().expect("tempdir");
    let plan = plan(dir.path());
    let err = execute(&plan).unwrap_err();
    assert!(err.to_string().contains("results.json"));
    assert!(!dir.path().join("export").exists());
}

#[test]
fn handle_reads_config_file() {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join("results.json"), SCENARIO).expect("write json");
    let config_path = dir.path().join("run.toml");
    let csv_path = dir.path().join("results.csv");
    let export_dir = dir.path().join("reports");
    fs::write(
        &config_path,
        format!(
            "json_file_location = {:?}\ncsv_file_name = {:?}\nexport_location = {:?}\n",
            dir.path().join("results.json").to_string_lossy(),
            csv_path.to_string_lossy(),
            export_dir.to_string_lossy(),
        ),
    )
    .expect("write config");

    let config_arg = config_path.to_string_lossy().to_string();
    handle(args(&["--config", &config_arg])).expect("run");
    assert!(export_dir.join("results.csv").exists());
    assert!(!csv_path.exists());
}

#[test]
fn verify_export_rejects_differing_metrics() {
    let dir = tempdir().expect("tempdir");
    let exported = dir.path().join("results.csv");
    fs::write(
        &exported,
        "test_case_id,test_case_name,status,duration,timestamps\n\
         1,A,passed,2.0,t\n\
         2,B,passed,4.0,t\n",
    )
    .expect("write csv");
    let expected = MetricsReport {
        executed: 2,
        passed: 1,
        failed: 1,
        mean_duration: 3.0,
        max_duration: 4.0,
        min_duration: 2.0,
    };

    let err = verify_export(&exported, &expected).unwrap_err();
    assert!(err.to_string().contains("results.csv"));

    let matching = MetricsReport {
        passed: 2,
        failed: 0,
        ..expected
    };
    verify_export(&exported, &matching).expect("metrics match");
}

#[test]
fn summary_write_failure_fails_the_run() {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join("results.json"), SCENARIO).expect("write json");
    fs::create_dir_all(dir.path().join("work")).expect("work dir");
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "not a directory").expect("write blocker");
    let mut plan = plan(dir.path());
    plan.summary_json = Some(blocker.join("summary.json"));

    assert!(execute(&plan).is_err());
    assert!(!blocker.join("summary.json").exists());
}

#[test]
fn unreadable_config_fails_before_any_stage() {
    let dir = tempdir().expect("tempdir");
    let config_arg = dir.path().join("missing.toml").to_string_lossy().to_string();
    let err = handle(args(&["--config", &config_arg])).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::Io { .. })
    ));
}
