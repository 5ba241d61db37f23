use std::path::Path;

use renaming_rules_sync::SyncError;
use renaming_rules_sync::io::excel_read;
use rust_xlsxwriter::Workbook;
use tempfile::tempdir;

/// Writes `columns` into the first worksheet. Empty strings leave the cell blank.
fn write_columns(path: &Path, columns: &[&[&str]]) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    for (col_idx, column) in columns.iter().enumerate() {
        for (row_idx, text) in column.iter().enumerate() {
            if !text.is_empty() {
                worksheet
                    .write_string(row_idx as u32, col_idx as u16, *text)
                    .expect("cell written");
            }
        }
    }
    workbook.save(path).expect("workbook saved");
}

#[test]
fn workbook_columns_become_rules() {
    let temp_dir = tempdir().expect("temporary directory");
    let xlsx_path = temp_dir.path().join("rules.xlsx");
    write_columns(
        &xlsx_path,
        &[&["Heart", "Cardiac", "", "HRT"], &[], &["Lung", "Pulmonary", "Lung"]],
    );

    let rules = excel_read::read_rules(&xlsx_path).expect("rules read");

    let values: Vec<&str> = rules.iter().map(|rule| rule.value.as_str()).collect();
    assert_eq!(values, vec!["Heart", "Lung"]);
    assert_eq!(rules.get("Heart").expect("Heart").criteria, vec!["Cardiac", "HRT"]);
    assert_eq!(rules.get("Lung").expect("Lung").criteria, vec!["Pulmonary"]);
}

#[test]
fn numeric_cells_are_ignored() {
    let temp_dir = tempdir().expect("temporary directory");
    let xlsx_path = temp_dir.path().join("rules.xlsx");

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.write_string(0, 0, "Heart").expect("cell written");
    worksheet.write_number(1, 0, 42.0).expect("cell written");
    worksheet.write_string(2, 0, "Cardiac").expect("cell written");
    workbook.save(&xlsx_path).expect("workbook saved");

    let rules = excel_read::read_rules(&xlsx_path).expect("rules read");
    assert_eq!(rules.get("Heart").expect("Heart").criteria, vec!["Cardiac"]);
}

#[test]
fn only_the_first_worksheet_is_read() {
    let temp_dir = tempdir().expect("temporary directory");
    let xlsx_path = temp_dir.path().join("rules.xlsx");

    let mut workbook = Workbook::new();
    workbook
        .add_worksheet()
        .write_string(0, 0, "Heart")
        .expect("cell written");
    workbook
        .add_worksheet()
        .write_string(0, 0, "Lung")
        .expect("cell written");
    workbook.save(&xlsx_path).expect("workbook saved");

    let rules = excel_read::read_rules(&xlsx_path).expect("rules read");
    assert_eq!(rules.len(), 1);
    assert!(rules.get("Heart").is_some());
}

#[test]
fn sheets_starting_below_the_first_row_have_no_rule_names() {
    let temp_dir = tempdir().expect("temporary directory");
    let xlsx_path = temp_dir.path().join("rules.xlsx");
    write_columns(&xlsx_path, &[&[], &[], &["", "Cardiac"]]);

    let error = excel_read::read_rules(&xlsx_path).expect_err("orphan criterion");
    match error {
        SyncError::Workbook { source, .. } => match *source {
            SyncError::InvalidWorkbook(message) => {
                assert!(message.contains("column C"), "{message}");
                assert!(message.contains("row 2"), "{message}");
            }
            other => panic!("unexpected error: {other:?}"),
        },
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn duplicate_rule_names_name_the_workbook() {
    let temp_dir = tempdir().expect("temporary directory");
    let xlsx_path = temp_dir.path().join("rules.xlsx");
    write_columns(&xlsx_path, &[&["Heart", "Cardiac"], &["Heart", "HRT"]]);

    let error = excel_read::read_rules(&xlsx_path).expect_err("duplicate rule name");

    assert!(error.headline().contains("rules.xlsx"));
    match error {
        SyncError::Workbook { path, source } => {
            assert_eq!(path, xlsx_path);
            assert!(matches!(*source, SyncError::DuplicateRuleName { ref value } if value == "Heart"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn empty_workbooks_yield_no_rules() {
    let temp_dir = tempdir().expect("temporary directory");
    let xlsx_path = temp_dir.path().join("rules.xlsx");
    write_columns(&xlsx_path, &[]);

    let rules = excel_read::read_rules(&xlsx_path).expect("rules read");
    assert!(rules.is_empty());
}
