use luxcalc_core::engine::lamp_plan;
use luxcalc_core::models::{validate_layout_request, CalculatorState};
use luxcalc_core::share::{encode_query, share_url};
use luxcalc_core::{optimal_fixture_layout, perform_full_calculation};
use serde_json::{Map, Value};

use crate::dto::{CalculateResponse, LayoutRequest, LayoutResponse, ShareResponse};
use crate::error::ApiError;

/// Service wrapping the pure engine for HTTP handlers
pub struct CalculationService;

impl CalculationService {
    /// Lay the fields of a request body over `defaults`
    pub fn merge_state(
        defaults: &CalculatorState,
        fields: Map<String, Value>,
    ) -> Result<CalculatorState, ApiError> {
        let mut merged = serde_json::to_value(defaults).map_err(|err| {
            ApiError::internal("Failed to encode default state").with_details(err.to_string())
        })?;
        if let Value::Object(map) = &mut merged {
            map.extend(fields);
        }

        serde_json::from_value(merged).map_err(|err| {
            ApiError::bad_request("Invalid request body").with_details(err.to_string())
        })
    }

    /// Validate a state and run the full pipeline on it
    ///
    /// A lamp plan is attached when fixtures hold more than one lamp.
    pub fn calculate(
        state: CalculatorState,
        include_layout: bool,
        lamps_per_fixture: u32,
    ) -> Result<CalculateResponse, ApiError> {
        state.validate()?;

        let input = state.to_input();
        let result = perform_full_calculation(&input);
        let layout = include_layout
            .then(|| optimal_fixture_layout(state.length, state.width, result.number_of_fixtures));
        let lamp_plan = (lamps_per_fixture > 1)
            .then(|| lamp_plan(&input, result.required_lumens, lamps_per_fixture));

        Ok(CalculateResponse {
            recommendation: result.recommendation(state.bulb_type),
            state,
            result,
            layout,
            lamp_plan,
        })
    }

    pub fn layout(request: &LayoutRequest) -> Result<LayoutResponse, ApiError> {
        validate_layout_request(request.length, request.width, request.fixtures)?;

        let layout = optimal_fixture_layout(request.length, request.width, request.fixtures);
        Ok(LayoutResponse { empty_cells: layout.empty_cells(), layout })
    }

    pub fn share(base_url: &str, state: &CalculatorState) -> Result<ShareResponse, ApiError> {
        state.validate()?;

        Ok(ShareResponse {
            query: encode_query(state),
            url: share_url(base_url, state),
        })
    }
}
