use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use service::validation::ValidationErrors;
use thiserror::Error;
use tracing::error;

/// Handler failure mapped onto the HTTP status taxonomy.
#[derive(Debug, Error)]
pub enum ApiError {
    /// 400 with the message list
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    /// 401 with an empty body
    #[error("invalid credentials")]
    Unauthorized,
    /// 500; the cause is logged, not returned
    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl ApiError {
    fn bad_input(message: String) -> Self {
        Self::Validation(ValidationErrors { messages: vec![message] })
    }
}

// 请求体/查询串无法绑定到 DTO 时同样按 400 {messages} 返回
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self { Self::bad_input(rejection.body_text()) }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self { Self::bad_input(rejection.body_text()) }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => (StatusCode::BAD_REQUEST, Json(errors)).into_response(),
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED.into_response(),
            ApiError::Service(e) => {
                error!(error = %e, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({"error": "internal server error"})),
                )
                    .into_response()
            }
        }
    }
}
