//! # Oura Integration Module
//!
//! Client side of the Oura API v2. Only the personal info endpoint is
//! covered:
//!
//! - `GET /v2/usercollection/personal_info` via [`personal_info::fetch_profile`]
//!
//! Requests authenticate with a Personal Access Token sent as bearer
//! credential. Tokens can be created at
//! <https://cloud.ouraring.com/personal-access-tokens>.
//!
//! Responses are never cached and failed requests are never retried; each
//! call is a single round trip whose outcome is mapped onto
//! [`crate::errors::OuraError`].

pub mod personal_info;
