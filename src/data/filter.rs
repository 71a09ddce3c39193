use std::collections::BTreeSet;

use super::model::SalesTable;

// ---------------------------------------------------------------------------
// Region filter: which region labels are currently selected
// ---------------------------------------------------------------------------

/// Selected region labels. Filtering is a display concern only: the cleaned
/// table itself is never touched.
pub type RegionFilter = BTreeSet<String>;

/// Initialise a [`RegionFilter`] with every region selected (show all).
pub fn init_region_filter(table: &SalesTable) -> RegionFilter {
    table.regions().clone()
}

/// Return indices of rows that pass the current filter.
///
/// Rules:
/// * The table has no region labels at all → no constraint, all rows pass
/// * Every region is selected → no effective filter, all rows pass
/// * A row without a region label always passes (the filter constrains
///   only labeled rows)
/// * Otherwise a row passes when its region is in the selected set
pub fn filtered_indices(table: &SalesTable, filter: &RegionFilter) -> Vec<usize> {
    let all = table.regions();
    if all.is_empty() || filter.len() == all.len() {
        return (0..table.len()).collect();
    }
    table
        .rows()
        .iter()
        .enumerate()
        .filter(|(_, row)| match &row.region {
            Some(region) => filter.contains(region),
            None => true,
        })
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::SalesRecord;

    fn table_with_regions(regions: &[Option<&str>]) -> SalesTable {
        let rows = regions
            .iter()
            .enumerate()
            .map(|(i, region)| SalesRecord {
                transaction_id: i as i64,
                date: None,
                sales: Some(100.0),
                profit: Some(20.0),
                region: region.map(str::to_string),
            })
            .collect();
        SalesTable::from_rows(rows)
    }

    #[test]
    fn all_selected_shows_every_row() {
        let table = table_with_regions(&[Some("North"), Some("South"), None]);
        let filter = init_region_filter(&table);
        assert_eq!(filtered_indices(&table, &filter), vec![0, 1, 2]);
    }

    #[test]
    fn subset_selection_hides_other_regions() {
        let table = table_with_regions(&[Some("North"), Some("South"), Some("North")]);
        let filter: RegionFilter = ["North".to_string()].into_iter().collect();
        assert_eq!(filtered_indices(&table, &filter), vec![0, 2]);
    }

    #[test]
    fn unlabeled_rows_always_pass() {
        let table = table_with_regions(&[Some("North"), None, Some("South")]);
        let filter: RegionFilter = ["South".to_string()].into_iter().collect();
        assert_eq!(filtered_indices(&table, &filter), vec![1, 2]);
    }

    #[test]
    fn empty_selection_hides_all_labeled_rows() {
        let table = table_with_regions(&[Some("North"), None]);
        let filter = RegionFilter::new();
        assert_eq!(filtered_indices(&table, &filter), vec![1]);
    }

    #[test]
    fn region_free_table_is_unfiltered() {
        let table = table_with_regions(&[None, None]);
        let filter = RegionFilter::new();
        assert_eq!(filtered_indices(&table, &filter), vec![0, 1]);
    }
}
