use super::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn open_failure_names_the_path() {
    let dir = tempdir().expect("tempdir");
    let not_a_dir = dir.path().join("results.json");
    fs::write(&not_a_dir, "[]").expect("write file");
    let path = not_a_dir.join("nested.json");

    let err = match open_reader(&path) {
        Ok(_) => panic!("opening below a regular file should fail"),
        Err(err) => err,
    };
    match &err {
        InputError::Io { path: failed, .. } => assert_eq!(failed, &path),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().contains("nested.json"));
}

#[test]
fn missing_file_names_the_path() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("absent.json");
    let err = match open_reader(&path) {
        Ok(_) => panic!("missing file should fail"),
        Err(err) => err,
    };
    assert!(matches!(err, InputError::MissingFile(_)));
    assert!(err.to_string().contains("absent.json"));
}
