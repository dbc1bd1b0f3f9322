use std::sync::Arc;

use axum::{
    Extension, Json,
    body::Bytes,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value};

use crate::{
    errors::{OuraError, ValidationError, ValidationOrigin},
    oura::personal_info::fetch_profile,
    server::AppState,
    types::ErrorRecord,
    validation,
};

/// `getPersonalInfo`: validates `{ token?: string }`, fetches the profile and
/// returns it as JSON.
///
/// An empty body counts as `{}`. Request validation happens before any
/// outbound call, so a rejected request never reaches the Oura API.
pub async fn personal_info(
    Extension(state): Extension<Arc<AppState>>,
    body: Bytes,
) -> Response {
    let input = if body.iter().all(u8::is_ascii_whitespace) {
        Value::Object(Map::new())
    } else {
        match serde_json::from_slice::<Value>(&body) {
            Ok(v) => v,
            Err(_) => {
                return OuraError::from(ValidationError::request("$", "expected a JSON object"))
                    .into_response();
            }
        }
    };

    let request = match validation::validate_request(&input, state.settings.token_mode()) {
        Ok(r) => r,
        Err(e) => return OuraError::from(e).into_response(),
    };

    match fetch_profile(
        &state.client,
        &state.settings.api_url,
        request.token.as_ref(),
        state.settings.effective_fallback(),
    )
    .await
    {
        Ok(record) => Json(record).into_response(),
        Err(e) => e.into_response(),
    }
}

/// HTTP status for each failure kind.
pub fn status_for(err: &OuraError) -> StatusCode {
    match err {
        OuraError::Validation(v) => match v.origin {
            ValidationOrigin::Request => StatusCode::BAD_REQUEST,
            ValidationOrigin::Response => StatusCode::BAD_GATEWAY,
        },
        OuraError::Authentication(_) => StatusCode::UNAUTHORIZED,
        OuraError::Upstream { .. } => StatusCode::BAD_REQUEST,
        OuraError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for OuraError {
    fn into_response(self) -> Response {
        let status = status_for(&self);
        let body = ErrorRecord {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
