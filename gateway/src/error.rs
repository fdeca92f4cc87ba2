use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use item_core::ApiError;
use serde_json::json;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("missing required header `{0}`")]
    MissingHeader(&'static str),

    /// Query string rejected by the `Query` extractor; holds axum's message.
    #[error("{0}")]
    InvalidQuery(String),

    #[error("{0} is not configured")]
    NotConfigured(&'static str),

    /// The upstream call failed; the core error is passed through as-is.
    #[error(transparent)]
    Upstream(#[from] ApiError),

    #[error("worker task failed: {0}")]
    Worker(String),
}

impl GatewayError {
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::MissingHeader(_) | GatewayError::InvalidQuery(_) => {
                StatusCode::BAD_REQUEST
            }
            GatewayError::NotConfigured(_) => StatusCode::SERVICE_UNAVAILABLE,
            GatewayError::Upstream(_) => StatusCode::BAD_GATEWAY,
            GatewayError::Worker(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<QueryRejection> for GatewayError {
    fn from(rejection: QueryRejection) -> Self {
        GatewayError::InvalidQuery(rejection.body_text())
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!(%status, error = %self, "request failed");
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
