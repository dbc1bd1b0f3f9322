use std::sync::Arc;

use axum::{Extension, response::Json};
use serde_json::{Value, json};

use crate::{server::AppState, types::TokenMode};

/// Liveness probe. Also reports whether requests must bring their own token,
/// without revealing the fallback itself.
pub async fn health(Extension(state): Extension<Arc<AppState>>) -> Json<Value> {
    let token_mode = match state.settings.token_mode() {
        TokenMode::Strict => "strict",
        TokenMode::Fallback => "fallback",
    };

    Json(json!({
        "status": "ok",
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "token_mode": token_mode,
    }))
}
