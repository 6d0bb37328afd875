use std::sync::Arc;

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use courier_optimizer::{
    json::types::{JsonMinimumCost, JsonOrder},
    problem::order::ValidationError,
};
use tracing::info;

use crate::{error::ApiError, state::AppState};

pub async fn calculate_cost_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Json<JsonOrder>, JsonRejection>,
) -> Result<Json<JsonMinimumCost>, ApiError> {
    let Json(body) =
        body.map_err(|rejection| ApiError::from(ValidationError::Malformed(rejection.body_text())))?;

    let engine = &state.engine;
    let order = body.build_order(engine.catalog())?;
    let minimum_cost = engine.compute_minimum_cost(&order)?;

    info!(lines = order.len(), minimum_cost, "Computed minimum cost");

    Ok(Json(JsonMinimumCost { minimum_cost }))
}
