//! # API Shared
//!
//! Shared wire types for the symptom checker APIs.
//!
//! Contains:
//! - Request/response bodies (`dto` module) with OpenAPI schemas
//! - Shared services like `HealthService`
//!
//! Used by `api-rest` and `symptom-cli` so both surfaces emit the same payloads.

pub mod dto;
pub mod health;

pub use dto::*;
pub use health::HealthService;
