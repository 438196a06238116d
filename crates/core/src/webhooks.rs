//! Webhook service for the voice platform's call-time hooks.
//!
//! Each call drives three independent handler invocations (pre-call,
//! in-call function, post-call). There is no session object tying them
//! together; correlation is left to the caller via payload fields. Every
//! invocation generates a fresh request id and timestamp, computes its
//! response and appends an entry to the call log.

use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use serde_json::Value;

use api_shared::{
    FetchRecordResponse, LogEntry, PostCallRequest, PostCallResponse, PreCallResponse,
    PatientContext,
};
use relay_types::MedicalId;

use crate::calllog::CallLog;
use crate::records::{RecordStore, RECORD_HINT};

/// Domain tag stamped on every webhook response.
pub const DOMAIN: &str = "medical";

/// Name of the single in-call function the relay serves.
pub const FETCH_RECORD_FUNCTION: &str = "fetch-record";

/// Fixed follow-up actions returned after every call.
pub const FOLLOW_UP_ACTIONS: [&str; 4] = [
    "Schedule follow-up appointment if needed",
    "Update patient record with call notes",
    "Send appointment reminder if scheduled",
    "Notify primary care physician of any concerns",
];

/// Computes webhook responses against the record store and call log.
///
/// Owned stores are injected at construction; handlers receive this service
/// through shared application state instead of touching globals.
#[derive(Clone)]
pub struct WebhookService {
    records: Arc<RecordStore>,
    log: Arc<CallLog>,
}

impl WebhookService {
    pub fn new(records: Arc<RecordStore>, log: Arc<CallLog>) -> Self {
        Self { records, log }
    }

    pub fn call_log(&self) -> &Arc<CallLog> {
        &self.log
    }

    /// Pre-call hook: hands the static patient-context template to the
    /// platform before the call connects. Always succeeds.
    pub fn pre_call(&self, payload: Value) -> PreCallResponse {
        let request_id = new_request_id();
        let now = now_rfc3339();
        tracing::info!(%request_id, "pre-call webhook received");

        let response = PreCallResponse {
            request_id: request_id.clone(),
            received_at: now.clone(),
            domain: DOMAIN.into(),
            patient_context: PatientContext::default(),
        };

        self.log.append(LogEntry::pre_call(
            request_id,
            now,
            payload,
            serde_json::to_value(&response).unwrap_or_default(),
        ));
        response
    }

    /// In-call function hook: fetches a patient record by the `id` field of
    /// the payload. An absent or non-string `id` degrades to an empty
    /// identifier and a not-found response with the seeded-id hint.
    pub fn fetch_record(&self, payload: Value) -> FetchRecordResponse {
        let request_id = new_request_id();
        let now = now_rfc3339();

        let id = MedicalId::new(payload.get("id").and_then(Value::as_str).unwrap_or(""));
        tracing::info!(%request_id, id = %id, "function webhook received");

        let record = self.records.lookup(&id).cloned();
        let found = record.is_some();
        let (suggestions, available_records) = if found {
            (None, None)
        } else {
            (Some(RECORD_HINT.into()), Some(self.records.sample_ids()))
        };

        let response = FetchRecordResponse {
            found,
            record,
            id: id.to_string(),
            timestamp: now.clone(),
            domain: DOMAIN.into(),
            suggestions,
            available_records,
        };

        self.log.append(LogEntry::function(
            FETCH_RECORD_FUNCTION,
            request_id,
            now,
            payload,
            serde_json::to_value(&response).unwrap_or_default(),
        ));
        response
    }

    /// Post-call hook: acknowledges the transcript/summary delivery, echoing
    /// the call fields back augmented with the fixed follow-up actions.
    /// Always succeeds; unknown payload shapes degrade to defaults.
    pub fn post_call(&self, payload: Value) -> PostCallResponse {
        let request_id = new_request_id();
        let now = now_rfc3339();

        let call: PostCallRequest = serde_json::from_value(payload.clone()).unwrap_or_default();
        tracing::info!(
            %request_id,
            call_id = call.call_id.as_deref().unwrap_or("-"),
            "post-call webhook received"
        );

        let response = PostCallResponse {
            ok: true,
            processed: true,
            request_id: request_id.clone(),
            domain: DOMAIN.into(),
            call_id: call.call_id,
            duration: call.duration,
            status: call.status,
            transcript: call
                .transcript
                .unwrap_or_else(|| "No transcript available".into()),
            summary: call.summary.unwrap_or_else(|| "No summary available".into()),
            metadata: call.metadata.unwrap_or_else(|| Value::Object(Default::default())),
            processed_at: now.clone(),
            follow_up_actions: FOLLOW_UP_ACTIONS.iter().map(|a| a.to_string()).collect(),
        };

        self.log
            .append(LogEntry::post_call(request_id, now, payload, &response));
        response
    }
}

fn new_request_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
