//! Wire types for the relay's JSON APIs.
//!
//! Field names follow the camelCase convention of the HTTP surface. These
//! types are shared between the webhook service (which computes them), the
//! REST handlers (which serve them) and the CLI (which displays them).

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Liveness response for `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
}

/// A seeded patient record, keyed by its medical identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PatientRecord {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub allergies: Vec<String>,
    pub conditions: Vec<String>,
    pub last_visit: String,
    pub emergency_contact: String,
    pub primary_doctor: String,
    pub insurance_provider: String,
}

/// Static greeting context handed to the voice platform before a call
/// connects.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PatientContext {
    pub greeting_name: String,
    pub last_call_summary: String,
    pub preferred_language: String,
    pub department: String,
    pub doctor_on_call: String,
    pub clinic_hours: String,
    pub emergency_contact: String,
}

impl Default for PatientContext {
    fn default() -> Self {
        Self {
            greeting_name: "Patient".into(),
            last_call_summary: "Follow-up needed on lab results.".into(),
            preferred_language: "en".into(),
            department: "Internal Medicine".into(),
            doctor_on_call: "Dr. Sarah Wilson".into(),
            clinic_hours: "Monday-Friday 8:00 AM - 6:00 PM".into(),
            emergency_contact: "For emergencies, call 911 or visit the nearest ER".into(),
        }
    }
}

/// Response of the pre-call webhook.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PreCallResponse {
    pub request_id: String,
    pub received_at: String,
    pub domain: String,
    pub patient_context: PatientContext,
}

/// Response of the in-call `fetch-record` function webhook.
///
/// `record` is `null` when the identifier is unknown; in that case
/// `suggestions` and `availableRecords` carry a hint with the seeded
/// identifiers.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FetchRecordResponse {
    pub found: bool,
    pub record: Option<PatientRecord>,
    pub id: String,
    pub timestamp: String,
    pub domain: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_records: Option<Vec<String>>,
}

/// Known fields of the post-call webhook payload.
///
/// Everything is optional: the vendor owns this shape and the relay only
/// picks out what it understands, substituting defaults for the rest.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostCallRequest {
    pub call_id: Option<String>,
    pub transcript: Option<String>,
    pub summary: Option<String>,
    #[serde(default)]
    pub duration: Option<Value>,
    pub status: Option<String>,
    #[serde(default)]
    pub metadata: Option<Value>,
}

/// Response of the post-call webhook: an acknowledgement that echoes the
/// call fields back, augmented with the fixed follow-up actions.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostCallResponse {
    pub ok: bool,
    pub processed: bool,
    pub request_id: String,
    pub domain: String,
    pub call_id: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub duration: Option<Value>,
    pub status: Option<String>,
    pub transcript: String,
    pub summary: String,
    #[schema(value_type = Object)]
    pub metadata: Value,
    pub processed_at: String,
    pub follow_up_actions: Vec<String>,
}

/// Discriminator for the three webhook log entry kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum LogKind {
    #[serde(rename = "pre-call")]
    PreCall,
    #[serde(rename = "function")]
    Function,
    #[serde(rename = "post-call")]
    PostCall,
}

/// One entry in the call-log buffer.
///
/// Every entry records the raw inbound payload and the computed response.
/// Function entries carry the invoked function `name`; post-call entries
/// additionally carry the call identifier, duration, status, transcript and
/// summary pulled from the payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    #[serde(rename = "type")]
    pub kind: LogKind,
    pub request_id: String,
    pub at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub duration: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcript: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[schema(value_type = Object)]
    pub payload: Value,
    #[schema(value_type = Object)]
    pub response: Value,
}

impl LogEntry {
    /// Entry for a pre-call webhook invocation.
    pub fn pre_call(request_id: String, at: String, payload: Value, response: Value) -> Self {
        Self {
            kind: LogKind::PreCall,
            request_id,
            at,
            name: None,
            call_id: None,
            duration: None,
            status: None,
            transcript: None,
            summary: None,
            payload,
            response,
        }
    }

    /// Entry for an in-call function webhook invocation.
    pub fn function(
        name: impl Into<String>,
        request_id: String,
        at: String,
        payload: Value,
        response: Value,
    ) -> Self {
        Self {
            kind: LogKind::Function,
            request_id,
            at,
            name: Some(name.into()),
            call_id: None,
            duration: None,
            status: None,
            transcript: None,
            summary: None,
            payload,
            response,
        }
    }

    /// Entry for a post-call webhook invocation, carrying the call fields.
    pub fn post_call(
        request_id: String,
        at: String,
        payload: Value,
        response: &PostCallResponse,
    ) -> Self {
        Self {
            kind: LogKind::PostCall,
            request_id,
            at,
            name: None,
            call_id: response.call_id.clone(),
            duration: response.duration.clone(),
            status: response.status.clone(),
            transcript: Some(response.transcript.clone()),
            summary: Some(response.summary.clone()),
            payload,
            response: serde_json::to_value(response).unwrap_or_default(),
        }
    }
}

/// Response of `GET /api/logs`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LogsRes {
    pub logs: Vec<LogEntry>,
}

/// Response of `POST /api/logs/clear`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClearLogsRes {
    pub message: String,
}

/// Request body of `POST /api/bots`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateBotReq {
    pub name: String,
    pub prompt: String,
    #[serde(default = "default_voice")]
    pub voice: String,
}

fn default_voice() -> String {
    "alloy".into()
}
