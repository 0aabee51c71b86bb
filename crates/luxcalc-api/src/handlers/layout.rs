use axum::{extract::rejection::JsonRejection, Json};

use crate::dto::{LayoutRequest, LayoutResponse};
use crate::error::ApiError;
use crate::services::CalculationService;

pub async fn handle_layout(
    payload: Result<Json<LayoutRequest>, JsonRejection>,
) -> Result<Json<LayoutResponse>, ApiError> {
    let Json(request) = payload?;

    tracing::debug!(
        length = request.length,
        width = request.width,
        fixtures = request.fixtures,
        "Processing layout request"
    );

    Ok(Json(CalculationService::layout(&request)?))
}
