//! Bot-management endpoints: passthroughs to the vendor API.
//!
//! The vendor owns bot state; these handlers forward requests with the
//! configured bearer credential and return the vendor's JSON verbatim.
//! Creation additionally injects the relay's webhook URLs and function
//! schema, and augments the vendor's reply with them for display.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json, Response},
};
use serde_json::{json, Value};

use api_shared::CreateBotReq;
use openmic::{BotConfig, WebhookEndpoints};
use relay_core::webhooks::DOMAIN;

use crate::{vendor_error_response, AppState};

#[utoipa::path(
    get,
    path = "/api/bots",
    responses(
        (status = 200, description = "Bot list from the vendor"),
        (status = 500, description = "Vendor unreachable")
    )
)]
/// List bots (vendor passthrough).
#[axum::debug_handler]
pub async fn list_bots(State(state): State<AppState>) -> Response {
    match state.openmic.list_bots().await {
        Ok(data) => Json(data).into_response(),
        Err(e) => vendor_error_response(e),
    }
}

#[utoipa::path(
    post,
    path = "/api/bots",
    request_body = CreateBotReq,
    responses(
        (status = 200, description = "Created bot, augmented with the relay's webhook URLs"),
        (status = 500, description = "Vendor unreachable")
    )
)]
/// Create an intake bot at the vendor.
///
/// Builds the bot configuration from the request, wiring in the three
/// webhook URLs derived from the relay's public base URL and the
/// `fetch_record` function schema. The vendor's reply is augmented with
/// `domain` and `webhookUrls` so the operator can see what was registered.
#[axum::debug_handler]
pub async fn create_bot(
    State(state): State<AppState>,
    Json(req): Json<CreateBotReq>,
) -> Response {
    let endpoints = WebhookEndpoints::from_base(state.cfg.public_base_url());
    let config = BotConfig::new(&req.name, &req.prompt, &req.voice, &endpoints);

    match state.openmic.create_bot(&config).await {
        Ok(mut data) => {
            if let Value::Object(map) = &mut data {
                map.insert("domain".into(), json!(DOMAIN));
                map.insert(
                    "webhookUrls".into(),
                    json!({
                        "preCall": endpoints.pre_call,
                        "postCall": endpoints.post_call,
                        "functionCall": endpoints.fetch_record,
                    }),
                );
            }
            Json(data).into_response()
        }
        Err(e) => vendor_error_response(e),
    }
}

#[utoipa::path(
    put,
    path = "/api/bots/{bot_id}",
    params(("bot_id" = String, Path, description = "Vendor bot identifier")),
    responses(
        (status = 200, description = "Updated bot from the vendor"),
        (status = 500, description = "Vendor unreachable")
    )
)]
/// Update bot fields (vendor passthrough).
#[axum::debug_handler]
pub async fn update_bot(
    State(state): State<AppState>,
    Path(bot_id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    match state.openmic.update_bot(&bot_id, &body).await {
        Ok(data) => Json(data).into_response(),
        Err(e) => vendor_error_response(e),
    }
}

#[utoipa::path(
    delete,
    path = "/api/bots/{bot_id}",
    params(("bot_id" = String, Path, description = "Vendor bot identifier")),
    responses(
        (status = 200, description = "Deletion acknowledgement"),
        (status = 500, description = "Vendor unreachable")
    )
)]
/// Delete a bot (vendor passthrough).
#[axum::debug_handler]
pub async fn delete_bot(State(state): State<AppState>, Path(bot_id): Path<String>) -> Response {
    match state.openmic.delete_bot(&bot_id).await {
        Ok(data) => Json(data).into_response(),
        Err(e) => vendor_error_response(e),
    }
}
