//! # HTTP Errors
//!
//! Maps handler failures to status codes and JSON bodies.
//!
//! - Validation failures: 400 with one entry per violated field
//! - Anything else: 500 with a route-specific message, details logged only

use std::any::Any;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Response, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tower_http::catch_panic::{CatchPanicLayer, ResponseForPanic};

use crate::observability::{log_event_with_fields, Event, MetricsRegistry};
use crate::schema::{SchemaError, ValidationIssue};

/// Result type for route handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Payload rejected at the validation boundary
    #[error("Validation error")]
    Validation(Vec<ValidationIssue>),

    /// Unexpected failure; `context` is the message shown to the client
    #[error("{context}: {detail}")]
    Internal {
        context: &'static str,
        detail: String,
    },
}

impl ApiError {
    pub fn internal(context: &'static str, detail: impl Into<String>) -> Self {
        ApiError::Internal {
            context,
            detail: detail.into(),
        }
    }

    /// Classifies a schema error: rejections are the caller's problem,
    /// decode failures are ours.
    pub fn from_schema(err: SchemaError, context: &'static str) -> Self {
        match err {
            SchemaError::Invalid { issues, .. } => ApiError::Validation(issues),
            other => ApiError::internal(context, other.to_string()),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Counts the failure and logs internal errors.
    pub fn record(&self, metrics: &MetricsRegistry) {
        match self {
            ApiError::Validation(_) => metrics.increment_validation_failures(),
            ApiError::Internal { context, detail } => {
                metrics.increment_internal_errors();
                log_event_with_fields(
                    Event::RequestFailed,
                    &[("context", *context), ("detail", detail.as_str())],
                );
            }
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ValidationIssue>>,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Validation(issues) => Self {
                message: "Validation error".to_string(),
                errors: Some(issues),
            },
            ApiError::Internal { context, .. } => Self {
                message: context.to_string(),
                errors: None,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        (status, Json(ErrorResponse::from(self))).into_response()
    }
}

/// Turns a panic inside a handler into a 500 carrying the route's message.
#[derive(Clone)]
pub struct PanicResponder {
    context: &'static str,
    metrics: Arc<MetricsRegistry>,
}

impl ResponseForPanic for PanicResponder {
    type ResponseBody = Body;

    fn response_for_panic(&mut self, err: Box<dyn Any + Send + 'static>) -> Response<Body> {
        let detail = if let Some(s) = err.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = err.downcast_ref::<String>() {
            s.clone()
        } else {
            "handler panicked".to_string()
        };

        let error = ApiError::internal(self.context, detail);
        error.record(&self.metrics);
        error.into_response()
    }
}

/// Layer that catches handler panics for one route.
pub fn catch_panic(
    context: &'static str,
    metrics: Arc<MetricsRegistry>,
) -> CatchPanicLayer<PanicResponder> {
    CatchPanicLayer::custom(PanicResponder { context, metrics })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{InsertPayload, InsertTestimonial};
    use serde_json::json;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::Validation(vec![]).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::internal("Failed", "boom").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_schema_rejection_maps_to_validation() {
        let err = InsertTestimonial::parse(json!({})).unwrap_err();
        let api = ApiError::from_schema(err, "Failed to fetch testimonials");
        match api {
            ApiError::Validation(issues) => assert_eq!(issues.len(), 6),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_internal_body_hides_detail() {
        let body = ErrorResponse::from(ApiError::internal("Failed to process contact form", "lock"));
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, json!({ "message": "Failed to process contact form" }));
    }

    #[test]
    fn test_validation_body_lists_errors() {
        let body = ErrorResponse::from(ApiError::Validation(vec![
            ValidationIssue::missing_field("email", "string"),
        ]));
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["message"], "Validation error");
        assert_eq!(json["errors"][0]["path"], json!(["email"]));
    }

    #[test]
    fn test_record_counts_by_kind() {
        let metrics = MetricsRegistry::new();
        ApiError::Validation(vec![]).record(&metrics);
        ApiError::internal("Failed", "boom").record(&metrics);

        let snap = metrics.snapshot();
        assert_eq!(snap.validation_failures, 1);
        assert_eq!(snap.internal_errors, 1);
    }
}
