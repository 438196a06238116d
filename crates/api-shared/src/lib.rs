//! # API Shared
//!
//! Shared wire types and utilities for the relay's APIs.
//!
//! Contains:
//! - JSON request/response types used by the REST surface and the CLI
//! - Shared services like `HealthService`
//!
//! Used by `relay-core`, `api-rest` and `relay-cli` for common definitions.

pub mod health;
pub mod types;

pub use health::HealthService;
pub use types::*;
