use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, RawQuery, State},
    Json,
};
use luxcalc_core::share::decode_query;
use serde_json::{Map, Value};

use crate::dto::{CalculateResponse, ShareResponse};
use crate::error::ApiError;
use crate::services::CalculationService;
use crate::state::AppState;

/// GET /api/v1/share - Decode a share query over the defaults and calculate it
pub async fn open_share_link(
    State(app): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> Result<Json<CalculateResponse>, ApiError> {
    let query = decode_query(query.as_deref().unwrap_or_default())?;

    let mut state = app.default_state();
    state.apply_share(&query);

    tracing::info!(
        room_type = %state.room_type,
        bulb_type = %state.bulb_type,
        empty = query.is_empty(),
        "Opening share link"
    );

    Ok(Json(CalculationService::calculate(state, false, app.lamps_per_fixture())?))
}

/// POST /api/v1/share - Build a share link for a state
pub async fn create_share_link(
    State(app): State<Arc<AppState>>,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<Json<ShareResponse>, ApiError> {
    let Json(fields) = payload?;
    let calculator = CalculationService::merge_state(&app.default_state(), fields)?;

    Ok(Json(CalculationService::share(app.share_base_url(), &calculator)?))
}
