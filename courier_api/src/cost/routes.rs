use std::sync::Arc;

use aide::axum::{
    ApiRouter,
    routing::{get, post},
};

use crate::{
    cost::{calculate_cost_handler::calculate_cost_handler, catalog_handler::catalog_handler},
    state::AppState,
};

pub fn cost_routes(state: Arc<AppState>) -> ApiRouter {
    aide::generate::infer_responses(true);
    let router = ApiRouter::new()
        .api_route("/calculate-cost", post(calculate_cost_handler))
        .api_route("/catalog", get(catalog_handler))
        .with_state(state);

    aide::generate::infer_responses(false);

    router
}
