//! # API Module
//!
//! HTTP endpoints served by `ouracli serve`.
//!
//! ## Endpoints
//!
//! - [`index`] - `GET /`, a single page with a token field that calls the
//!   personal info endpoint from the browser.
//! - [`personal_info`] - `POST /api/oura/personal-info`, proxies one
//!   personal info request to the Oura API. Takes `{ "token"?: string }` and
//!   answers with the validated profile or an `{ "error": "..." }` record.
//! - [`health`] - `GET /health`, status and version for monitoring.
//!
//! ## Status Mapping
//!
//! | Failure | Status |
//! |---|---|
//! | malformed request | `400 Bad Request` |
//! | missing or rejected token | `401 Unauthorized` |
//! | Oura API non-success status | `400 Bad Request` |
//! | malformed Oura API response | `502 Bad Gateway` |
//! | transport or unexpected failure | `500 Internal Server Error` |
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Router, routing::{get, post}};
//! use ouracli::api::{health, index, personal_info};
//!
//! let app = Router::new()
//!     .route("/", get(index))
//!     .route("/api/oura/personal-info", post(personal_info))
//!     .route("/health", get(health));
//! ```

mod health;
mod page;
mod personal_info;

pub use health::health;
pub use page::index;
pub use personal_info::{personal_info, status_for};
