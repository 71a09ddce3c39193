use std::fs::File;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::clean::clean_records;
use super::model::{RawRecord, SalesTable};

// ---------------------------------------------------------------------------
// Load errors
// ---------------------------------------------------------------------------

/// Why a load produced no table. `SourceMissing` is the recoverable
/// "nothing to show" sentinel; the other variants are processing failures
/// carrying their underlying cause. Row-level coercion problems never end
/// up here: the pipeline absorbs them as missing values.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("data source not found: {}", .path.display())]
    SourceMissing { path: PathBuf },

    #[error("could not read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse {} as sales data", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl LoadError {
    /// True for the recoverable absent-source case, so callers can show a
    /// targeted "not found" message instead of a processing error.
    pub fn is_source_missing(&self) -> bool {
        matches!(self, LoadError::SourceMissing { .. })
    }
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a sales CSV and run the cleaning pipeline over it.
///
/// Expected layout: header row with `TransactionID`, `Date`, `Sales` and an
/// optional `Region` column. Whole-file problems (absent file, unreadable
/// file, missing column, non-integer id, ragged row) fail the load as a
/// unit; no partial table is ever returned.
pub fn load_sales_file(path: &Path) -> Result<SalesTable, LoadError> {
    // Distinguish "absent" from "unreadable" before touching the file.
    if !path.exists() {
        return Err(LoadError::SourceMissing {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::Reader::from_reader(file);
    let mut raw: Vec<RawRecord> = Vec::new();
    for result in reader.deserialize() {
        let record: RawRecord = result.map_err(|source| LoadError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;
        raw.push(record);
    }

    Ok(clean_records(raw))
}
