//! # Relay Core
//!
//! Core domain logic for the OpenMic intake relay.
//!
//! This crate contains the pieces that do not depend on any transport:
//! - Runtime configuration resolved once at startup
//! - The seeded patient record store
//! - The in-memory call-log buffer
//! - The webhook service computing pre-call / function / post-call responses
//!
//! **No API concerns**: HTTP routing, OpenAPI documentation and the vendor
//! client belong in `api-rest` and `openmic`.

pub mod calllog;
pub mod config;
pub mod error;
pub mod records;
pub mod webhooks;

pub use calllog::CallLog;
pub use config::RelayConfig;
pub use error::{RelayError, RelayResult};
pub use records::RecordStore;
pub use webhooks::WebhookService;
