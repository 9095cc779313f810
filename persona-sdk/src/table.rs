//! Dataset table state
//!
//! A page cursor and an append-only row list. Each load fetches the next
//! fixed-size page and appends it in arrival order; nothing is deduplicated
//! or replaced, and there is deliberately no bound check against the
//! reported total (the server returns an empty page past the end).

use std::sync::Arc;

use persona_core::DatasetRow;
use serde::{Deserialize, Serialize};

use crate::client::HttpClient;
use crate::error::SdkResult;

const DEFAULT_PAGE_SIZE: u32 = 100;

#[derive(Debug, Serialize)]
struct PageParams {
    page: u32,
    size: u32,
}

/// One page of `/api/data`.
#[derive(Debug, Deserialize)]
pub struct DatasetPage {
    pub data: Vec<DatasetRow>,
    pub page: u32,
    pub size: u32,
    pub total: u64,
}

/// The growing dataset view.
#[derive(Debug, Clone)]
pub struct DatasetTable {
    client: Arc<HttpClient>,
    page: u32,
    size: u32,
    rows: Vec<DatasetRow>,
    total: Option<u64>,
}

impl DatasetTable {
    /// Create an empty table; the first [`load_more`](Self::load_more)
    /// fetches page 1.
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self {
            client,
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            rows: Vec::new(),
            total: None,
        }
    }

    pub fn with_page_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    /// Rows accumulated so far, in arrival order.
    pub fn rows(&self) -> &[DatasetRow] {
        &self.rows
    }

    /// The last page fetched; 0 before the first load.
    pub fn current_page(&self) -> u32 {
        self.page
    }

    /// Server-reported total row count, once a page has been fetched.
    pub fn total(&self) -> Option<u64> {
        self.total
    }

    /// Fetches the next page and appends its rows.
    ///
    /// Returns the number of rows appended. On failure the cursor and the
    /// accumulated rows are left untouched.
    pub async fn load_more(&mut self) -> SdkResult<usize> {
        let next = self.page + 1;
        let params = PageParams {
            page: next,
            size: self.size,
        };

        let fetched: DatasetPage = self.client.get_with_query("/api/data", &params).await?;

        self.page = next;
        self.total = Some(fetched.total);
        let added = fetched.data.len();
        self.rows.extend(fetched.data);
        Ok(added)
    }
}
