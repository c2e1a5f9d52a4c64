//! Contact HTTP Routes
//!
//! Contact form intake. Submissions are validated, stored and acknowledged;
//! nothing is forwarded anywhere else.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;

use super::errors::{catch_panic, ApiError, ApiResult};
use super::server::AppState;
use crate::observability::{log_event_with_fields, Event};
use crate::schema::{EntityId, InsertContactMessage, InsertPayload, ValidationIssue};

const CONTACT_FAILED: &str = "Failed to process contact form";

#[derive(Debug, Serialize)]
pub struct ContactCreatedResponse {
    pub message: String,
    pub id: EntityId,
}

/// Create contact routes
pub fn contact_routes(state: Arc<AppState>) -> Router {
    let guard = catch_panic(CONTACT_FAILED, Arc::clone(&state.metrics));
    Router::new()
        .route("/contact", post(create_contact_handler).layer(guard))
        .with_state(state)
}

async fn create_contact_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ContactCreatedResponse>)> {
    let result = store_contact(&state, body);
    if let Err(err) = &result {
        err.record(&state.metrics);
        if let ApiError::Validation(issues) = err {
            let fields = issues
                .iter()
                .map(ValidationIssue::field)
                .collect::<Vec<_>>()
                .join(",");
            log_event_with_fields(Event::ContactRejected, &[("fields", fields.as_str())]);
        }
    }
    result
}

fn store_contact(
    state: &AppState,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ContactCreatedResponse>)> {
    let Json(document) = body.map_err(|rejection| {
        ApiError::Validation(vec![ValidationIssue::invalid_body(rejection.body_text())])
    })?;

    let payload = InsertContactMessage::parse(document)
        .map_err(|err| ApiError::from_schema(err, CONTACT_FAILED))?;

    let saved = state.storage.create_contact_message(payload);
    state.metrics.increment_contact_messages();
    let id = saved.id.to_string();
    log_event_with_fields(
        Event::ContactReceived,
        &[
            ("id", id.as_str()),
            ("project_type", saved.project_type.as_str()),
            ("newsletter", if saved.newsletter { "true" } else { "false" }),
        ],
    );

    Ok((
        StatusCode::CREATED,
        Json(ContactCreatedResponse {
            message: "Contact message received successfully".to_string(),
            id: saved.id,
        }),
    ))
}
