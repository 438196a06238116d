//! # API REST
//!
//! REST surface of the intake relay.
//!
//! Handles:
//! - HTTP endpoints with axum (bot proxy, call log, webhooks, health)
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS, error mapping)
//!
//! Uses `relay-core` for domain logic, `openmic` for the vendor client and
//! `api-shared` for wire types.

#![warn(rust_2018_idioms)]

pub mod bots;
pub mod logs;
pub mod webhooks;

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post, put},
    Router,
};
use serde_json::json;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_shared::{HealthRes, HealthService};
use openmic::{OpenMicClient, OpenMicError};
use relay_core::{CallLog, RecordStore, RelayConfig, WebhookService};

/// Application state shared across REST handlers.
///
/// Everything in here is cheaply cloneable; the call log is the only
/// mutable piece and lives behind its own lock.
#[derive(Clone)]
pub struct AppState {
    pub cfg: Arc<RelayConfig>,
    pub webhooks: WebhookService,
    pub log: Arc<CallLog>,
    pub openmic: OpenMicClient,
}

impl AppState {
    /// Builds the state for a fresh process: seeded record store, empty
    /// call log, vendor client configured from `cfg`.
    pub fn new(cfg: RelayConfig) -> Self {
        let log = Arc::new(CallLog::new());
        let records = Arc::new(RecordStore::seeded());
        let openmic = OpenMicClient::new(cfg.openmic_api_base(), cfg.openmic_api_key());
        Self {
            cfg: Arc::new(cfg),
            webhooks: WebhookService::new(records, log.clone()),
            log,
            openmic,
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        bots::list_bots,
        bots::create_bot,
        bots::update_bot,
        bots::delete_bot,
        logs::list_logs,
        logs::clear_logs,
        webhooks::pre_call,
        webhooks::fetch_record,
        webhooks::post_call,
    ),
    components(schemas(
        HealthRes,
        api_shared::LogsRes,
        api_shared::ClearLogsRes,
        api_shared::LogEntry,
        api_shared::LogKind,
        api_shared::PatientRecord,
        api_shared::PatientContext,
        api_shared::PreCallResponse,
        api_shared::FetchRecordResponse,
        api_shared::PostCallResponse,
        api_shared::CreateBotReq,
    ))
)]
pub struct ApiDoc;

/// Builds the REST application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/bots", get(bots::list_bots).post(bots::create_bot))
        .route(
            "/api/bots/:bot_id",
            put(bots::update_bot).delete(bots::delete_bot),
        )
        .route("/api/logs", get(logs::list_logs))
        .route("/api/logs/clear", post(logs::clear_logs))
        .route("/api/webhooks/pre-call", post(webhooks::pre_call))
        .route(
            "/api/webhooks/function/fetch-record",
            post(webhooks::fetch_record),
        )
        .route("/api/webhooks/post-call", post(webhooks::post_call))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint.
///
/// Used for monitoring and load balancer liveness checks.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

/// Maps a vendor-boundary error to an HTTP response.
///
/// Non-2xx vendor replies are forwarded with the vendor's status code and
/// body; transport failures are logged and reported as a generic 500.
pub(crate) fn vendor_error_response(err: OpenMicError) -> Response {
    match err {
        OpenMicError::Vendor { status, body } => {
            let status =
                StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (
                status,
                Json(json!({ "error": "vendor request failed", "details": body })),
            )
                .into_response()
        }
        OpenMicError::Network(e) => {
            tracing::error!("vendor request failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}
