use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    config::Settings, error, errors::OuraError, oura::personal_info::fetch_profile,
    types::BearerToken, utils,
};

/// Fetches and prints the personal info belonging to `token`.
///
/// A token given on the command line always wins over `OURA_PAT`. A blank
/// `--token` is rejected instead of silently falling back.
///
/// # Example Usage
///
/// ```bash
/// ouracli profile --token ABCDEF
/// OURA_PAT=ABCDEF ouracli profile
/// ```
pub async fn profile(settings: &Settings, token: Option<String>) {
    let token = match token {
        None => None,
        Some(raw) => match BearerToken::parse(&raw) {
            Some(t) => Some(t),
            None => error!("--token must not be empty"),
        },
    };

    let client = match settings.http_client() {
        Ok(c) => c,
        Err(e) => error!("Cannot create HTTP client. Err: {}", e),
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching personal info...");
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let result = fetch_profile(
        &client,
        &settings.api_url,
        token.as_ref(),
        settings.effective_fallback(),
    )
    .await;
    pb.finish_and_clear();

    match result {
        Ok(record) => {
            let table = Table::new(utils::profile_table_rows(&record));
            println!("{}", table);
        }
        Err(OuraError::Authentication(msg)) if token.is_none() => {
            error!("{}. {}", msg, missing_token_hint(settings))
        }
        Err(e) => error!("{}", e),
    }
}

/// What to tell the user when no token could be resolved.
pub fn missing_token_hint(settings: &Settings) -> &'static str {
    if settings.require_token {
        "OURA_REQUIRE_TOKEN is set, so pass --token."
    } else {
        "Pass --token or set OURA_PAT."
    }
}
