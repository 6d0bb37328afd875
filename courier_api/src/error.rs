use aide::OperationOutput;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use courier_optimizer::{
    problem::order::ValidationError, solver::cost_error::CostError,
};
use schemars::JsonSchema;
use serde::Serialize;
use tracing::{error, warn};

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    InternalServerError(String),
}

#[derive(Serialize, JsonSchema)]
pub struct ApiErrorBody {
    error: String,
}

impl From<anyhow::Error> for ApiError {
    fn from(error: anyhow::Error) -> Self {
        ApiError::InternalServerError(error.to_string())
    }
}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        ApiError::BadRequest(error.to_string())
    }
}

impl From<CostError> for ApiError {
    fn from(error: CostError) -> Self {
        match error {
            CostError::Validation(error) => error.into(),
            CostError::Computation(error) => ApiError::InternalServerError(error.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InternalServerError(message) => {
                error!("Internal error: {message}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiErrorBody { error: message }),
                )
                    .into_response()
            }
            ApiError::BadRequest(message) => {
                warn!("Rejected request: {message}");
                (StatusCode::BAD_REQUEST, Json(ApiErrorBody { error: message })).into_response()
            }
        }
    }
}

impl OperationOutput for ApiError {
    type Inner = ApiErrorBody;
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use courier_optimizer::solver::cost_error::ComputationError;
    use serde_json::Value;

    use super::*;

    async fn status_and_body(error: ApiError) -> (StatusCode, Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_computation_error_is_internal() {
        let error = ApiError::from(CostError::Computation(ComputationError::NonFiniteCost {
            center: String::from("C2"),
        }));

        let (status, body) = status_and_body(error).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Route cost is not finite at center C2");
    }

    #[tokio::test]
    async fn test_validation_error_is_bad_request() {
        let error = ApiError::from(CostError::Validation(ValidationError::InvalidProduct(
            String::from("Q"),
        )));

        let (status, body) = status_and_body(error).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid product: Q");
    }
}
