/// Data layer: core types, loading, cleaning, and filtering.
///
/// Architecture:
/// ```text
///  broken_sales.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  read rows → Vec<RawRecord>, or a typed LoadError
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  clean    │  coerce dates/sales, impute mean, dedup, derive profit
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ SalesTable│  ordered rows + region index, read-only downstream
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  region selection → visible row indices
///   └──────────┘
/// ```

pub mod clean;
pub mod filter;
pub mod loader;
pub mod model;

/// File the dashboard loads on startup and the generator writes.
pub const DEFAULT_DATA_FILE: &str = "broken_sales.csv";
