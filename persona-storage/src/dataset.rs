//! In-memory dataset store
//!
//! The training dataset is a single CSV file, small enough to hold in memory
//! for the lifetime of the server. The store loads it once at startup and
//! serves fixed-size pages in file order.

use std::path::Path;

use persona_core::DatasetRow;

use crate::error::{Result, StorageError};

/// The loaded training dataset.
#[derive(Debug, Clone)]
pub struct DatasetStore {
    rows: Vec<DatasetRow>,
}

impl DatasetStore {
    /// Loads every row of the CSV file at `path`.
    ///
    /// Boolean columns accept `Yes`/`No` as well as `true`/`false`; a row
    /// that fails to parse aborts the load with its 1-based data row index.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| StorageError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let mut reader = csv::Reader::from_reader(file);

        let mut rows = Vec::new();
        for (index, record) in reader.deserialize::<DatasetRow>().enumerate() {
            let row = record.map_err(|source| StorageError::Parse {
                row: index + 1,
                source,
            })?;
            rows.push(row);
        }

        tracing::info!(rows = rows.len(), path = %path.display(), "Dataset loaded");
        Ok(Self { rows })
    }

    /// Builds a store from rows already in memory. Used by tests and tools.
    pub fn from_rows(rows: Vec<DatasetRow>) -> Self {
        Self { rows }
    }

    /// Total number of rows in the dataset.
    pub fn total(&self) -> usize {
        self.rows.len()
    }

    /// Returns page `page` (1-based) of `size` rows, preserving file order.
    ///
    /// A page past the end of the data is an empty slice, so callers can
    /// request pages unconditionally.
    pub fn page(&self, page: usize, size: usize) -> &[DatasetRow] {
        let start = page.saturating_sub(1).saturating_mul(size);
        if start >= self.rows.len() {
            return &[];
        }
        let end = start.saturating_add(size).min(self.rows.len());
        &self.rows[start..end]
    }
}
