use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Deserialize;

/// Fraction of every sale booked as profit (20% margin assumption).
pub const PROFIT_MARGIN: f64 = 0.20;

// ---------------------------------------------------------------------------
// RawRecord – one CSV row exactly as it arrives
// ---------------------------------------------------------------------------

/// A single row of the source file, before any cleaning.
///
/// `Date` and `Sales` stay textual here: the source mixes formats and types
/// per cell, so coercion happens in the pipeline, not during deserialization.
/// An empty `Region` cell or an absent `Region` column both map to `None`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "TransactionID")]
    pub transaction_id: i64,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Sales")]
    pub sales: String,
    #[serde(rename = "Region", default)]
    pub region: Option<String>,
}

// ---------------------------------------------------------------------------
// SalesRecord – one cleaned row
// ---------------------------------------------------------------------------

/// A cleaned transaction. `None` is the explicit missing marker:
/// an unparseable date stays `None` forever, an unparseable sales value is
/// `None` only until imputation (and afterwards only in the degenerate case
/// where the whole column failed to parse, leaving the mean undefined).
#[derive(Debug, Clone, PartialEq)]
pub struct SalesRecord {
    pub transaction_id: i64,
    pub date: Option<NaiveDate>,
    pub sales: Option<f64>,
    /// Derived: `sales * PROFIT_MARGIN`.
    pub profit: Option<f64>,
    pub region: Option<String>,
}

impl SalesRecord {
    /// Date cell for display, ISO-formatted or the missing marker.
    pub fn date_label(&self) -> String {
        match self.date {
            Some(d) => d.format("%Y-%m-%d").to_string(),
            None => "<missing>".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// SalesTable – the complete cleaned dataset
// ---------------------------------------------------------------------------

/// The cleaned table handed to the presentation layer: ordered rows plus a
/// cached index of the distinct region labels. Read-only once built.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesTable {
    rows: Vec<SalesRecord>,
    regions: BTreeSet<String>,
}

impl SalesTable {
    /// Build the region index from the cleaned rows.
    pub fn from_rows(rows: Vec<SalesRecord>) -> Self {
        let regions = rows
            .iter()
            .filter_map(|r| r.region.clone())
            .collect::<BTreeSet<String>>();
        SalesTable { rows, regions }
    }

    /// All rows, in surviving input order.
    pub fn rows(&self) -> &[SalesRecord] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sorted distinct region labels (empty when the column was absent).
    pub fn regions(&self) -> &BTreeSet<String> {
        &self.regions
    }

    /// Sum over all present sales values. `None` when no row carries one,
    /// which happens only for an empty table or the all-unparseable edge.
    pub fn total_sales(&self) -> Option<f64> {
        sum_present(self.rows.iter().map(|r| r.sales))
    }

    /// Sum over all present profit values.
    pub fn total_profit(&self) -> Option<f64> {
        sum_present(self.rows.iter().map(|r| r.profit))
    }

    /// Arithmetic mean over all present sales values.
    pub fn mean_sales(&self) -> Option<f64> {
        let present: Vec<f64> = self.rows.iter().filter_map(|r| r.sales).collect();
        if present.is_empty() {
            return None;
        }
        Some(present.iter().sum::<f64>() / present.len() as f64)
    }

    /// False only for the degenerate table where every sales value is
    /// missing (or there are no rows at all).
    pub fn has_sales(&self) -> bool {
        self.rows.iter().any(|r| r.sales.is_some())
    }
}

fn sum_present(values: impl Iterator<Item = Option<f64>>) -> Option<f64> {
    let mut sum = 0.0;
    let mut any = false;
    for v in values.flatten() {
        sum += v;
        any = true;
    }
    any.then_some(sum)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, sales: Option<f64>, region: Option<&str>) -> SalesRecord {
        SalesRecord {
            transaction_id: id,
            date: NaiveDate::from_ymd_opt(2025, 11, 1),
            sales,
            profit: sales.map(|s| s * PROFIT_MARGIN),
            region: region.map(str::to_string),
        }
    }

    #[test]
    fn region_index_is_sorted_and_distinct() {
        let table = SalesTable::from_rows(vec![
            record(1, Some(10.0), Some("West")),
            record(2, Some(20.0), Some("East")),
            record(3, Some(30.0), Some("West")),
            record(4, Some(40.0), None),
        ]);
        let regions: Vec<&str> = table.regions().iter().map(String::as_str).collect();
        assert_eq!(regions, vec!["East", "West"]);
    }

    #[test]
    fn sums_and_mean_skip_missing_values() {
        let table = SalesTable::from_rows(vec![
            record(1, Some(100.0), None),
            record(2, None, None),
            record(3, Some(200.0), None),
        ]);
        assert_eq!(table.total_sales(), Some(300.0));
        assert_eq!(table.total_profit(), Some(60.0));
        assert_eq!(table.mean_sales(), Some(150.0));
        assert!(table.has_sales());
    }

    #[test]
    fn empty_table_has_no_aggregates() {
        let table = SalesTable::from_rows(Vec::new());
        assert!(table.is_empty());
        assert_eq!(table.total_sales(), None);
        assert_eq!(table.mean_sales(), None);
        assert!(!table.has_sales());
    }

    #[test]
    fn missing_date_renders_an_explicit_marker() {
        let row = SalesRecord {
            transaction_id: 7,
            date: None,
            sales: None,
            profit: None,
            region: None,
        };
        assert_eq!(row.date_label(), "<missing>");
    }
}
