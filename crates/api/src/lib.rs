use std::any::Any;
use std::sync::Arc;

use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
};
use axum::http::HeaderValue;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use blaze_core::metrics::nil::{MarketFormula, ValuationModel};

pub mod envelope;
pub mod error;
pub mod routes;

use error::ApiError;

#[derive(Clone)]
pub struct AppState {
    pub valuation: Arc<dyn ValuationModel>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            valuation: Arc::new(MarketFormula),
        }
    }
}

/// The full router with default state.
pub fn app() -> Router {
    router(AppState::default())
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(routes::healthz))
        .route(
            "/live-scores",
            get(routes::live_scores)
                .options(routes::preflight)
                .fallback(routes::method_not_allowed),
        )
        .route(
            "/grizzlies-analytics",
            get(routes::grizzlies_analytics)
                .options(routes::preflight)
                .fallback(routes::method_not_allowed),
        )
        .route(
            "/perfect-game-analytics",
            get(routes::perfect_game_analytics)
                .options(routes::preflight)
                .fallback(routes::method_not_allowed),
        )
        .route(
            "/blaze-analytics",
            get(routes::blaze_analytics)
                .options(routes::preflight)
                .fallback(routes::method_not_allowed),
        )
        .route(
            "/nil-valuation",
            get(routes::nil_valuation_query)
                .post(routes::nil_valuation_body)
                .options(routes::preflight)
                .fallback(routes::method_not_allowed),
        )
        .route(
            "/character-assessment",
            get(routes::character_assessment_query)
                .post(routes::character_assessment_body)
                .options(routes::preflight)
                .fallback(routes::method_not_allowed),
        )
        .fallback(routes::not_found)
        .with_state(state)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, POST, OPTIONS"),
        ))
        .layer(TraceLayer::new_for_http())
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "handler panicked".to_string()
    };
    ApiError::Internal(anyhow::anyhow!(message)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panic_payloads_become_internal_envelopes() {
        let response = panic_response(Box::new("slice index out of range"));
        assert_eq!(response.status(), axum::http::StatusCode::INTERNAL_SERVER_ERROR);

        let response = panic_response(Box::new(42_u8));
        assert_eq!(response.status(), axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    }
}
