use persona_core::DatasetRow;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query parameters for `/api/data`.
#[derive(Debug, Deserialize, Validate)]
pub struct PageQuery {
    #[validate(range(min = 1))]
    pub page: Option<u32>,
    #[validate(range(min = 1, max = 500))]
    pub size: Option<u32>,
}

impl PageQuery {
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1)
    }

    pub fn size(&self) -> u32 {
        self.size.unwrap_or(100)
    }
}

/// One page of the training dataset, in file order.
#[derive(Debug, Serialize, Deserialize)]
pub struct DatasetPageResponse {
    pub data: Vec<DatasetRow>,
    pub page: u32,
    pub size: u32,
    pub total: u64,
}
