//! Uniform JSON response wrapper.
//!
//! Success bodies are `{"success": true, <payload roots>, "timestamp": ...}`; error bodies are
//! built by [`error_body`] with the same `success`/`timestamp` fields so clients can branch on a
//! single shape.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ApiError;

/// ISO-8601 UTC, millisecond precision.
pub fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    NoDirective,
    MaxAge(u32),
}

#[derive(Debug, Clone)]
pub struct Envelope<T> {
    payload: T,
    cache: CachePolicy,
}

#[derive(Serialize)]
struct SuccessBody<'a, T> {
    success: bool,
    #[serde(flatten)]
    payload: &'a T,
    timestamp: String,
}

impl<T> Envelope<T> {
    pub fn new(payload: T) -> Self {
        Self {
            payload,
            cache: CachePolicy::NoDirective,
        }
    }

    pub fn max_age(mut self, seconds: u32) -> Self {
        self.cache = CachePolicy::MaxAge(seconds);
        self
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        let body = SuccessBody {
            success: true,
            payload: &self.payload,
            timestamp: timestamp(),
        };

        let bytes = match serde_json::to_vec(&body) {
            Ok(bytes) => bytes,
            Err(e) => {
                return ApiError::Internal(anyhow::Error::new(e).context("serialize response"))
                    .into_response()
            }
        };

        let mut response = json_response(StatusCode::OK, bytes);
        if let CachePolicy::MaxAge(seconds) = self.cache {
            if let Ok(value) = HeaderValue::from_str(&format!("public, max-age={seconds}")) {
                response.headers_mut().insert(header::CACHE_CONTROL, value);
            }
        }
        response
    }
}

pub(crate) fn error_body(
    error: String,
    message: String,
    available: Option<(&'static str, Vec<&'static str>)>,
) -> Vec<u8> {
    let mut body = Map::new();
    body.insert("success".into(), Value::Bool(false));
    body.insert("error".into(), Value::String(error));
    body.insert("message".into(), Value::String(message));
    if let Some((key, values)) = available {
        body.insert(
            key.into(),
            Value::Array(values.into_iter().map(|v| Value::String(v.into())).collect()),
        );
    }
    body.insert("timestamp".into(), Value::String(timestamp()));
    // A map of strings always serialises.
    serde_json::to_vec(&Value::Object(body)).unwrap_or_default()
}

pub(crate) fn json_response(status: StatusCode, bytes: Vec<u8>) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
        bytes,
    )
        .into_response()
}
