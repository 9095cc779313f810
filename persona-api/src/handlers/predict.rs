use axum::{extract::State, Json};
use serde_json::Value;

use crate::{
    dto::PredictRequest,
    error::{ApiError, ApiResult},
    AppState,
};

/// `POST /api/predict` — forwards the assessment to the inference backend
/// and relays its JSON body. Any failure collapses into the generic
/// prediction error envelope; the detail is logged, not invented here.
pub async fn predict(
    State(state): State<AppState>,
    Json(payload): Json<PredictRequest>,
) -> ApiResult<Json<Value>> {
    let prediction = state
        .inference
        .predict(&payload)
        .await
        .map_err(|err| ApiError::Prediction(err.to_string()))?;

    Ok(Json(prediction))
}
