//! Vendor-invoked webhook endpoints.
//!
//! The voice platform calls these during a live phone call. They must not
//! fail on odd input: the body is taken as `Option<Json<Value>>` so an
//! empty or malformed body degrades to an empty payload instead of being
//! rejected before the handler runs.

use axum::{extract::State, response::Json};
use serde_json::Value;

use api_shared::{FetchRecordResponse, PostCallResponse, PreCallResponse};

use crate::AppState;

fn payload_or_empty(body: Option<Json<Value>>) -> Value {
    body.map(|Json(value)| value)
        .unwrap_or_else(|| Value::Object(Default::default()))
}

#[utoipa::path(
    post,
    path = "/api/webhooks/pre-call",
    responses(
        (status = 200, description = "Patient-context template", body = PreCallResponse)
    )
)]
/// Pre-call hook: greeting context before the call connects.
#[axum::debug_handler]
pub async fn pre_call(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> Json<PreCallResponse> {
    Json(state.webhooks.pre_call(payload_or_empty(body)))
}

#[utoipa::path(
    post,
    path = "/api/webhooks/function/fetch-record",
    responses(
        (status = 200, description = "Record lookup result", body = FetchRecordResponse)
    )
)]
/// In-call function hook: fetch a patient record by medical id.
#[axum::debug_handler]
pub async fn fetch_record(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> Json<FetchRecordResponse> {
    Json(state.webhooks.fetch_record(payload_or_empty(body)))
}

#[utoipa::path(
    post,
    path = "/api/webhooks/post-call",
    responses(
        (status = 200, description = "Acknowledgement with follow-up actions", body = PostCallResponse)
    )
)]
/// Post-call hook: transcript/summary delivery after the call ends.
#[axum::debug_handler]
pub async fn post_call(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> Json<PostCallResponse> {
    Json(state.webhooks.post_call(payload_or_empty(body)))
}
