use std::sync::Arc;

use aide::{
    axum::{
        ApiRouter, IntoApiResponse,
        routing::{get, get_with},
    },
    openapi::OpenApi,
    scalar::Scalar,
    swagger::Swagger,
};
use axum::{Extension, Json, response::IntoResponse};

use crate::state::AppState;

/// Where the generated OpenAPI document is served, relative to the server root.
const OPENAPI_JSON: &str = "/docs/private/api.json";
const DOCS_TITLE: &str = "Courier";

/// Scalar at `/docs`, Swagger UI at `/docs/swagger`, both reading [`OPENAPI_JSON`].
pub fn docs_routes(state: Arc<AppState>) -> ApiRouter {
    aide::generate::infer_responses(true);

    let scalar = Scalar::new(OPENAPI_JSON).with_title(DOCS_TITLE);
    let swagger = Swagger::new(OPENAPI_JSON).with_title(DOCS_TITLE);

    let router = ApiRouter::new()
        .api_route(
            "/",
            get_with(scalar.axum_handler(), |op| {
                op.description("Interactive reference of the cost API.")
            }),
        )
        .api_route(
            "/swagger",
            get_with(swagger.axum_handler(), |op| {
                op.description("Swagger UI for the cost API.")
            }),
        )
        .route("/private/api.json", get(openapi_json))
        .with_state(state);

    aide::generate::infer_responses(false);

    router
}

async fn openapi_json(Extension(api): Extension<Arc<OpenApi>>) -> impl IntoApiResponse {
    Json(api).into_response()
}
