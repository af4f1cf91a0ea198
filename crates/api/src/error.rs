use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use blaze_core::query::QueryError;

use crate::envelope::{error_body, json_response};

/// Every failure a handler can raise. Rendered as the error envelope.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("No endpoint matches {0}")]
    NotFound(String),

    #[error("{method} is not allowed on {path}")]
    MethodNotAllowed { method: String, path: String },

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error("{0}")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            Self::Query(e) if e.is_internal() => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Query(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> String {
        match self {
            Self::NotFound(_) => "Not found".to_string(),
            Self::MethodNotAllowed { .. } => "Method not allowed".to_string(),
            Self::Query(e) => e.code(),
            Self::Internal(e) => e.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            Self::Internal(e) => {
                sentry_anyhow::capture_anyhow(e);
                tracing::error!(error = %format!("{e:#}"), "request failed");
            }
            Self::Query(e) if e.is_internal() => {
                sentry::capture_error(e);
                tracing::error!(error = %e, "request failed");
            }
            Self::Query(e) => tracing::warn!(error = %e, code = %e.code(), "rejected request"),
            Self::NotFound(_) | Self::MethodNotAllowed { .. } => {
                tracing::debug!(error = %self, "unrouted request")
            }
        }

        let available = match &self {
            Self::Query(QueryError::BadSelector {
                available_key,
                available,
                ..
            }) => Some((*available_key, available.clone())),
            _ => None,
        };

        let body = error_body(self.code(), self.to_string(), available);
        json_response(status, body)
    }
}
