use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::dto::{CalculateRequest, CalculateResponse};
use crate::error::ApiError;
use crate::services::CalculationService;
use crate::state::AppState;

pub async fn handle_calculate(
    State(app): State<Arc<AppState>>,
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> Result<Json<CalculateResponse>, ApiError> {
    let Json(request) = payload?;
    let state = CalculationService::merge_state(&app.default_state(), request.fields)?;

    tracing::info!(
        room_type = %state.room_type,
        bulb_type = %state.bulb_type,
        include_layout = request.include_layout,
        "Processing calculate request"
    );

    let response =
        CalculationService::calculate(state, request.include_layout, app.lamps_per_fixture())?;
    Ok(Json(response))
}
