use std::path::PathBuf;

use chrono::NaiveDate;
use salescope::data::loader::{load_sales_file, LoadError};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn cleans_the_canonical_dirty_file() {
    let table = load_sales_file(&fixture("broken_sales.csv")).expect("load failed");

    // 7 input rows, one duplicate id beyond the first.
    assert_eq!(table.len(), 6);
    let ids: Vec<i64> = table.rows().iter().map(|r| r.transaction_id).collect();
    assert_eq!(ids, vec![101, 102, 103, 104, 106, 107]);

    // Duplicate 101: the first occurrence (2025-11-01) survives.
    assert_eq!(table.rows()[0].date, Some(ymd(2025, 11, 1)));

    // Mixed formats in one column: the free-form date parsed too.
    assert_eq!(table.rows()[3].date, Some(ymd(2025, 11, 3)));
    assert!(table.rows().iter().all(|r| r.date.is_some()));

    // The blank Sales cell was imputed with the pre-dedup mean.
    let expected_mean = (500.0 + 200.0 + 400.0 + 500.0 + 600.0 + 700.0) / 6.0;
    let imputed = table.rows()[2].sales.expect("imputed");
    assert!((imputed - expected_mean).abs() < 1e-9);
    assert!(table.rows().iter().all(|r| r.sales.is_some()));

    // Aggregates over the surviving rows.
    let total_sales = table.total_sales().expect("sales present");
    let total_profit = table.total_profit().expect("profit present");
    let expected_total = 500.0 + 200.0 + expected_mean + 400.0 + 600.0 + 700.0;
    assert!((total_sales - expected_total).abs() < 1e-9);
    assert!((total_profit - expected_total * 0.20).abs() < 1e-9);
    for row in table.rows() {
        let sales = row.sales.expect("populated");
        let profit = row.profit.expect("derived");
        assert!((profit - sales * 0.20).abs() < 1e-12);
    }

    let regions: Vec<&str> = table.regions().iter().map(String::as_str).collect();
    assert_eq!(regions, vec!["East", "North", "South", "West"]);
}

#[test]
fn loading_twice_yields_identical_tables() {
    let path = fixture("broken_sales.csv");
    let first = load_sales_file(&path).expect("first load");
    let second = load_sales_file(&path).expect("second load");
    assert_eq!(first, second);
}

#[test]
fn absent_source_is_a_recoverable_sentinel() {
    let path = fixture("definitely_not_here.csv");
    let err = load_sales_file(&path).expect_err("should not load");
    assert!(err.is_source_missing());
    assert!(matches!(err, LoadError::SourceMissing { .. }));
    assert!(err.to_string().contains("data source not found"));
}

#[test]
fn bad_transaction_id_fails_the_whole_load() {
    let err = load_sales_file(&fixture("bad_transaction_id.csv")).expect_err("should not load");
    assert!(!err.is_source_missing());
    assert!(matches!(err, LoadError::Malformed { .. }));
    // The underlying cause is attached, not swallowed.
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn missing_required_column_fails_the_whole_load() {
    let err = load_sales_file(&fixture("missing_sales_column.csv")).expect_err("should not load");
    assert!(matches!(err, LoadError::Malformed { .. }));
}

#[test]
fn region_column_is_optional() {
    let table = load_sales_file(&fixture("no_region.csv")).expect("load failed");
    assert_eq!(table.len(), 3);
    assert!(table.rows().iter().all(|r| r.region.is_none()));
    assert!(table.regions().is_empty());
    assert_eq!(table.total_sales(), Some(600.0));
}

#[test]
fn blank_region_cell_loads_as_unlabeled() {
    // The column exists but one cell is empty; that row must come out
    // unlabeled rather than carrying an empty-string region.
    let table = load_sales_file(&fixture("empty_region_cell.csv")).expect("load failed");
    assert_eq!(table.len(), 2);
    assert_eq!(table.rows()[0].region.as_deref(), Some("North"));
    assert_eq!(table.rows()[1].region, None);
    let regions: Vec<&str> = table.regions().iter().map(String::as_str).collect();
    assert_eq!(regions, vec!["North"]);
}

#[test]
fn header_only_file_loads_an_empty_table() {
    let table = load_sales_file(&fixture("headers_only.csv")).expect("load failed");
    assert!(table.is_empty());
    assert_eq!(table.total_sales(), None);
}

#[test]
fn all_invalid_sales_keeps_rows_but_propagates_missing() {
    let table = load_sales_file(&fixture("all_invalid_sales.csv")).expect("load failed");
    assert_eq!(table.len(), 3);
    assert!(!table.has_sales());
    assert!(table.rows().iter().all(|r| r.sales.is_none()));
    assert!(table.rows().iter().all(|r| r.profit.is_none()));
    assert_eq!(table.total_sales(), None);
    assert_eq!(table.mean_sales(), None);
}
