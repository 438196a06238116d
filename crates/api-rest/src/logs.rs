//! Call-log endpoints for the operator dashboard.

use axum::{extract::State, response::Json};

use api_shared::{ClearLogsRes, LogsRes};

use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/logs",
    responses(
        (status = 200, description = "All webhook log entries in arrival order", body = LogsRes)
    )
)]
/// List the call-log buffer.
#[axum::debug_handler]
pub async fn list_logs(State(state): State<AppState>) -> Json<LogsRes> {
    Json(LogsRes {
        logs: state.log.list(),
    })
}

#[utoipa::path(
    post,
    path = "/api/logs/clear",
    responses(
        (status = 200, description = "Buffer emptied", body = ClearLogsRes)
    )
)]
/// Empty the call-log buffer.
#[axum::debug_handler]
pub async fn clear_logs(State(state): State<AppState>) -> Json<ClearLogsRes> {
    state.log.clear();
    tracing::info!("call log cleared");
    Json(ClearLogsRes {
        message: "Logs cleared successfully".into(),
    })
}
