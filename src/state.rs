use std::path::PathBuf;

use crate::color::RegionColorMap;
use crate::data::filter::{filtered_indices, init_region_filter, RegionFilter};
use crate::data::loader::{load_sales_file, LoadError};
use crate::data::model::{SalesRecord, SalesTable};
use crate::data::DEFAULT_DATA_FILE;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// After every load attempt exactly one of `table` / `load_error` is set,
/// so the render pass can branch between the dashboard and the two
/// targeted failure messages.
pub struct AppState {
    /// Current data source path.
    pub source: PathBuf,

    /// Cleaned table from the last successful load.
    pub table: Option<SalesTable>,

    /// Why the last load produced no table.
    pub load_error: Option<LoadError>,

    /// Region selections from the sidebar.
    pub region_filter: RegionFilter,

    /// Indices of rows passing the current filter (cached).
    pub visible_indices: Vec<usize>,

    /// Region → colour assignment (None when the dataset has no regions).
    pub color_map: Option<RegionColorMap>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_DATA_FILE),
            table: None,
            load_error: None,
            region_filter: RegionFilter::new(),
            visible_indices: Vec::new(),
            color_map: None,
        }
    }
}

impl AppState {
    /// Fresh state pointing at `source`, loaded immediately.
    pub fn with_source(source: PathBuf) -> Self {
        let mut state = Self {
            source,
            ..Self::default()
        };
        state.reload();
        state
    }

    /// Run an independent load-clean cycle on the current source.
    pub fn reload(&mut self) {
        match load_sales_file(&self.source) {
            Ok(table) => {
                log::info!(
                    "Loaded {} cleaned records from {} ({} region labels, {} undated rows)",
                    table.len(),
                    self.source.display(),
                    table.regions().len(),
                    table.rows().iter().filter(|r| r.date.is_none()).count()
                );
                self.set_table(table);
            }
            Err(e) => {
                log::error!("Failed to load {}: {e}", self.source.display());
                self.table = None;
                self.load_error = Some(e);
                self.region_filter.clear();
                self.visible_indices.clear();
                self.color_map = None;
            }
        }
    }

    /// Switch to a new source and load it.
    pub fn open(&mut self, source: PathBuf) {
        self.source = source;
        self.reload();
    }

    /// Ingest a cleaned table, initialise the filter and colours.
    pub fn set_table(&mut self, table: SalesTable) {
        self.region_filter = init_region_filter(&table);
        self.visible_indices = (0..table.len()).collect();
        self.color_map =
            (!table.regions().is_empty()).then(|| RegionColorMap::new(table.regions()));
        self.table = Some(table);
        self.load_error = None;
    }

    /// Recompute `visible_indices` after a filter change.
    pub fn refilter(&mut self) {
        if let Some(table) = &self.table {
            self.visible_indices = filtered_indices(table, &self.region_filter);
        }
    }

    /// Toggle a single region in the filter.
    pub fn toggle_region(&mut self, region: &str) {
        if !self.region_filter.remove(region) {
            self.region_filter.insert(region.to_string());
        }
        self.refilter();
    }

    /// Select every region.
    pub fn select_all_regions(&mut self) {
        if let Some(table) = &self.table {
            self.region_filter = table.regions().clone();
        }
        self.refilter();
    }

    /// Deselect every region.
    pub fn select_no_regions(&mut self) {
        self.region_filter.clear();
        self.refilter();
    }

    /// Rows currently passing the filter, in table order. This is the
    /// read-only view the metrics, chart, and inspector consume.
    pub fn visible_rows(&self) -> impl Iterator<Item = &SalesRecord> + '_ {
        let rows = self.table.as_ref().map(|t| t.rows()).unwrap_or(&[]);
        self.visible_indices.iter().map(move |&i| &rows[i])
    }
}
