//! CSV export serialization and filename construction.

use erpdesk::export::{export_filename, write_csv};

#[test]
fn header_comes_first_and_rows_follow_in_order() {
    let body = write_csv(
        &["Item Code", "Quantity"],
        &[
            vec!["ITM-001".to_string(), "10.00".to_string()],
            vec!["ITM-002".to_string(), "3.50".to_string()],
        ],
    )
    .expect("csv serialization should succeed");

    let lines: Vec<&str> = body.lines().collect();
    assert_eq!(lines[0], "Item Code,Quantity");
    assert_eq!(lines[1], "ITM-001,10.00");
    assert_eq!(lines[2], "ITM-002,3.50");
}

#[test]
fn fields_with_commas_and_quotes_survive_a_round_trip() {
    let rows = vec![vec![
        "Bolt, hex \"M10\"".to_string(),
        "1,23,456.79".to_string(),
    ]];
    let body = write_csv(&["Item", "Amount"], &rows).expect("csv serialization should succeed");

    let mut reader = csv::Reader::from_reader(body.as_bytes());
    let record = reader
        .records()
        .next()
        .expect("one record expected")
        .expect("record should parse");
    assert_eq!(&record[0], "Bolt, hex \"M10\"");
    assert_eq!(&record[1], "1,23,456.79");
}

#[test]
fn an_export_with_no_rows_still_carries_the_header() {
    let body = write_csv(&["A", "B"], &[]).expect("csv serialization should succeed");
    assert_eq!(body.trim_end(), "A,B");
}

#[test]
fn filename_joins_report_and_filter_parts() {
    let name = export_filename("accrued-interest", &["CC01", "2026-04-01", "2026-06-30"], "csv");
    assert_eq!(name, "accrued-interest_CC01_2026-04-01_2026-06-30.csv");
}

#[test]
fn filename_parts_are_sanitized() {
    let name = export_filename("stock-reconciliation", &["Central Store / A", "Detail"], "csv");
    assert_eq!(name, "stock-reconciliation_Central_Store___A_Detail.csv");
}

#[test]
fn empty_filter_parts_are_skipped() {
    let name = export_filename("indents", &["CC02", "", "  "], "csv");
    assert_eq!(name, "indents_CC02.csv");
}
