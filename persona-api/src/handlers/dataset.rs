use axum::{
    extract::{Query, State},
    Json,
};
use validator::Validate;

use crate::{
    dto::{DatasetPageResponse, PageQuery},
    error::ApiResult,
    AppState,
};

/// `GET /api/data?page=&size=` — one fixed-size page of the training
/// dataset. Pages past the end of the data come back empty so clients can
/// request them unconditionally.
pub async fn page(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> ApiResult<Json<DatasetPageResponse>> {
    query.validate()?;

    let page = query.page();
    let size = query.size();
    let rows = state.datasets.page(page as usize, size as usize);

    Ok(Json(DatasetPageResponse {
        data: rows.to_vec(),
        page,
        size,
        total: state.datasets.total() as u64,
    }))
}
