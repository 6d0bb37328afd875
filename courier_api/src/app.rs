use std::sync::Arc;

use aide::axum::ApiRouter;
use aide::openapi::OpenApi;
use aide::transform::TransformOpenApi;
use axum::http::Method;
use axum::{Extension, Router};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::cost::routes::cost_routes;
use crate::docs::docs_routes;
use crate::state::AppState;

pub fn app(state: Arc<AppState>) -> (Router, Arc<OpenApi>) {
    let cors_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(Any)
        .allow_headers(Any);

    let mut api = OpenApi::default();

    let router = ApiRouter::new()
        .nest_api_service("/docs", docs_routes(state.clone()))
        .merge(cost_routes(state))
        .finish_api_with(&mut api, api_docs);

    let api = Arc::new(api);
    let router = router
        .layer(ServiceBuilder::new().layer(cors_layer))
        .layer(Extension(api.clone()));

    (router, api)
}

fn api_docs(api: TransformOpenApi) -> TransformOpenApi {
    api.title("Courier Open API")
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use courier_optimizer::{
        problem::catalog::{Catalog, CatalogBuilder},
        solver::{cost_engine::CostEngine, cost_engine_params::CostEngineParams},
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;

    fn test_app() -> Router {
        test_app_with(Catalog::reference())
    }

    fn test_app_with(catalog: Catalog) -> Router {
        let engine = CostEngine::new(Arc::new(catalog), CostEngineParams::default());
        let (router, _) = app(Arc::new(AppState { engine }));
        router
    }

    async fn post_order(body: impl Into<Body>) -> (StatusCode, Value) {
        post_order_to(test_app(), body).await
    }

    async fn post_order_to(router: Router, body: impl Into<Body>) -> (StatusCode, Value) {
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculate-cost")
                    .header("content-type", "application/json")
                    .body(body.into())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_calculate_cost() {
        let (status, body) = post_order(json!({ "A": 1, "B": 1 }).to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "minimum_cost": 30.0 }));
    }

    #[tokio::test]
    async fn test_calculate_cost_across_centers() {
        let (status, body) = post_order(json!({ "A": 1, "D": 1, "G": 1 }).to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["minimum_cost"], 186.0);
    }

    #[tokio::test]
    async fn test_zero_quantities_cost_nothing() {
        let (status, body) = post_order(json!({ "A": 0, "H": 0 }).to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["minimum_cost"], 0.0);
    }

    #[tokio::test]
    async fn test_unknown_product() {
        let (status, body) = post_order(json!({ "A": 1, "Q": 2 }).to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid product: Q");
    }

    #[tokio::test]
    async fn test_empty_order() {
        let (status, body) = post_order("{}").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Order is empty");
    }

    #[tokio::test]
    async fn test_garbled_payloads() {
        for payload in ["null", "[1, 2]", "\"A\"", "{\"A\": 1.5}", "{\"A\":", ""] {
            let (status, body) = post_order(payload).await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "payload {payload:?}");
            let message = body["error"].as_str().unwrap();
            assert!(
                message.starts_with("Order is not a valid mapping of product to quantity"),
                "payload {payload:?}: {message}"
            );
        }
    }

    #[tokio::test]
    async fn test_overflowing_cost_is_internal_error() {
        let mut builder = CatalogBuilder::default();
        builder
            .add_center("a", 1e307)
            .add_center("b", 1e307)
            .add_product("x", "a", 1.0)
            .add_product("y", "b", 1.0);

        let (status, body) = post_order_to(
            test_app_with(builder.build().unwrap()),
            json!({ "x": 1, "y": 1 }).to_string(),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Route cost is not finite at center b");
    }

    #[tokio::test]
    async fn test_missing_content_type() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculate-cost")
                    .body(Body::from("{\"A\": 1}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_catalog() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/catalog")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["centers"].as_array().unwrap().len(), 3);
        assert_eq!(body["centers"][1]["id"], "C2");
    }

    #[tokio::test]
    async fn test_serves_openapi_document() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/docs/private/api.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["info"]["title"], "Courier Open API");
        assert!(body["paths"]["/calculate-cost"]["post"].is_object());
    }

    #[tokio::test]
    async fn test_openapi_lists_routes() {
        let engine = CostEngine::new(Arc::new(Catalog::reference()), CostEngineParams::default());
        let (_, api) = app(Arc::new(AppState { engine }));

        let paths = api.paths.as_ref().unwrap();
        assert!(paths.paths.contains_key("/calculate-cost"));
        assert!(paths.paths.contains_key("/catalog"));
    }
}
