use std::collections::HashSet;

use chrono::{NaiveDate, NaiveDateTime};

use super::model::{PROFIT_MARGIN, RawRecord, SalesRecord, SalesTable};

// ---------------------------------------------------------------------------
// Cleaning pipeline
// ---------------------------------------------------------------------------

/// Date formats recognized by the permissive parser, tried in order.
/// Slash forms are interpreted month-first; day-first is not attempted.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%b %d, %Y",
    "%B %d, %Y",
    "%m/%d/%Y",
    "%d %b %Y",
    "%d %B %Y",
];

/// Datetime formats accepted and truncated to their date part.
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Run the full cleaning pass over raw rows. Total: row-level problems
/// become missing markers, never errors.
///
/// Step order is load-bearing:
/// 1. coerce `Date` (unparseable stays missing),
/// 2. coerce `Sales` (unparseable becomes missing),
/// 3. take the mean of the sales values present so far,
/// 4. impute that mean into every missing sales value,
/// 5. deduplicate on transaction id, first occurrence wins,
/// 6. derive profit at the fixed margin.
///
/// The mean is computed before deduplication, so a duplicate row that is
/// about to be dropped still contributes to the imputation statistic.
pub fn clean_records(raw: Vec<RawRecord>) -> SalesTable {
    let mut rows: Vec<SalesRecord> = raw
        .into_iter()
        .map(|r| SalesRecord {
            transaction_id: r.transaction_id,
            date: parse_mixed_date(&r.date),
            sales: parse_sales_value(&r.sales),
            profit: None,
            region: r.region,
        })
        .collect();

    if let Some(mean) = mean_of_present(&rows) {
        for row in &mut rows {
            row.sales.get_or_insert(mean);
        }
    }

    let mut seen: HashSet<i64> = HashSet::with_capacity(rows.len());
    rows.retain(|row| seen.insert(row.transaction_id));

    for row in &mut rows {
        row.profit = row.sales.map(|s| s * PROFIT_MARGIN);
    }

    SalesTable::from_rows(rows)
}

/// Parse a date cell against every recognized format, datetime forms first.
/// Returns `None` for anything that matches no format, including blanks.
pub fn parse_mixed_date(raw: &str) -> Option<NaiveDate> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, fmt) {
            return Some(dt.date());
        }
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
}

/// Coerce a sales cell to a number. Blanks, non-numeric text, and
/// non-finite literals (`inf`, `nan`) all count as missing so they cannot
/// poison the imputation mean.
pub fn parse_sales_value(raw: &str) -> Option<f64> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn mean_of_present(rows: &[SalesRecord]) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for value in rows.iter().filter_map(|r| r.sales) {
        sum += value;
        count += 1;
    }
    (count > 0).then(|| sum / count as f64)
}
