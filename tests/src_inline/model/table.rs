use super::*;

#[test]
fn permutation_of_columns_is_accepted() {
    let mut columns = Column::ALL.to_vec();
    columns.reverse();
    let table = Table::new(columns, vec![]).expect("table");
    assert_eq!(
        table.header(),
        vec![
            "timestamps",
            "duration",
            "status",
            "test_case_name",
            "test_case_id"
        ]
    );
    assert!(table.is_empty());
}

#[test]
fn incomplete_or_repeated_columns_are_rejected() {
    let err = Table::new(vec![Column::TestCaseId, Column::Status], vec![]).unwrap_err();
    assert_eq!(err, SchemaError::MissingColumn(Column::TestCaseName));

    let mut columns = Column::ALL.to_vec();
    columns.push(Column::Status);
    let err = Table::new(columns, vec![]).unwrap_err();
    assert_eq!(err, SchemaError::DuplicateColumn(Column::Status));
}

#[test]
fn durations_follow_record_order() {
    let records = [3.5, 1.0]
        .into_iter()
        .enumerate()
        .map(|(i, d)| TestCaseRecord {
            test_case_id: i as i64,
            test_case_name: format!("t{i}"),
            status: "passed".to_string(),
            duration: d,
            timestamps: "t".to_string(),
        })
        .collect();
    let table = Table::with_default_columns(records);
    assert_eq!(table.len(), 2);
    assert_eq!(table.durations(), vec![3.5, 1.0]);
    assert_eq!(table.columns(), &Column::ALL);
}
