use reqwest::{Client, Response, StatusCode, header::CONTENT_TYPE};
use serde_json::Value;

use crate::{
    errors::{OuraError, ValidationError},
    types::{BearerToken, ProfileRecord},
    validation, warning,
};

/// Fixed path of the personal info endpoint, relative to the API base URL.
pub const PERSONAL_INFO_PATH: &str = "/v2/usercollection/personal_info";

/// Largest response body accepted. A personal info record is a few hundred
/// bytes.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Picks the token to send: the caller's wins over the fallback.
///
/// # Errors
///
/// Returns [`OuraError::Authentication`] when neither is available.
pub fn resolve_token<'a>(
    token: Option<&'a BearerToken>,
    fallback: Option<&'a BearerToken>,
) -> Result<&'a BearerToken, OuraError> {
    token.or(fallback).ok_or_else(OuraError::missing_token)
}

/// Fetches and validates the personal info of the token's owner.
///
/// Resolves the token first and fails without any network I/O if none is
/// available. Otherwise sends exactly one `GET {api_url}/v2/usercollection/personal_info`
/// with the token as bearer credential. The outcome is classified in order:
///
/// 1. transport failure: [`OuraError::Internal`]
/// 2. `401 Unauthorized`: [`OuraError::Authentication`]
/// 3. any other non-success status: [`OuraError::Upstream`]
/// 4. body larger than [`MAX_BODY_BYTES`], not JSON, or failing
///    [`validation::validate_response`]: [`OuraError::Validation`]
///
/// Internal failures are logged here once with their cause; the returned
/// error only carries the generic message to show callers.
///
/// There are no retries. A failed attempt is reported as is.
///
/// # Arguments
///
/// * `client` - HTTP client, any transport timeout is configured on it
/// * `api_url` - Base URL of the Oura API, without trailing slash
/// * `token` - Token supplied with the request, if any
/// * `fallback` - Server-side default token, if configured
///
/// # Example
///
/// ```
/// let token = BearerToken::parse("ABCDEF");
/// let record = fetch_profile(&Client::new(), DEFAULT_API_URL, token.as_ref(), None).await?;
/// println!("{}", record.email);
/// ```
pub async fn fetch_profile(
    client: &Client,
    api_url: &str,
    token: Option<&BearerToken>,
    fallback: Option<&BearerToken>,
) -> Result<ProfileRecord, OuraError> {
    let token = resolve_token(token, fallback)?;

    let url = format!("{api_url}{PERSONAL_INFO_PATH}");
    let response = client
        .get(&url)
        .bearer_auth(token.as_str())
        .header(CONTENT_TYPE, "application/json")
        .send()
        .await
        .map_err(|e| internal("request to Oura API failed", e))?;

    let status = response.status();
    if status == StatusCode::UNAUTHORIZED {
        return Err(OuraError::invalid_token());
    }
    if !status.is_success() {
        return Err(OuraError::Upstream {
            status: status.as_u16(),
        });
    }

    let body = read_body(response).await?;

    let data: Value = serde_json::from_slice(&body)
        .map_err(|_| ValidationError::response("$", "expected a JSON document"))?;

    Ok(validation::validate_response(&data)?)
}

/// Reads the body in chunks, giving up as soon as it exceeds [`MAX_BODY_BYTES`].
async fn read_body(mut response: Response) -> Result<Vec<u8>, OuraError> {
    let too_large = || {
        ValidationError::response("$", format!("expected a body of at most {MAX_BODY_BYTES} bytes"))
    };

    if response
        .content_length()
        .is_some_and(|len| len > MAX_BODY_BYTES as u64)
    {
        return Err(too_large().into());
    }

    let mut body = Vec::new();
    while let Some(chunk) = response
        .chunk()
        .await
        .map_err(|e| internal("reading Oura API response failed", e))?
    {
        if body.len() + chunk.len() > MAX_BODY_BYTES {
            return Err(too_large().into());
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}

fn internal(context: &str, err: reqwest::Error) -> OuraError {
    let detail = format!("{context}: {err}");
    warning!("Error fetching Oura personal info: {}", detail);
    OuraError::Internal(detail)
}
