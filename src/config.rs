//! Configuration management for ouracli.
//!
//! Configuration comes from environment variables, optionally seeded from a
//! `.env` file in the local data directory. Values are read exactly once into
//! [`Settings`] at startup; nothing below the CLI and server entry points
//! looks at the environment again.
//!
//! The lookup order is:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults

use std::{env, net::SocketAddr, path::PathBuf, str::FromStr, time::Duration};

use crate::types::{BearerToken, TokenMode};

pub const DEFAULT_API_URL: &str = "https://api.ouraring.com";
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:3000";
pub const TOKEN_PORTAL_URL: &str = "https://cloud.ouraring.com/personal-access-tokens";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// The file lives under `ouracli/.env` in the platform-specific local data
/// directory:
/// - Linux: `~/.local/share/ouracli/.env`
/// - macOS: `~/Library/Application Support/ouracli/.env`
/// - Windows: `%LOCALAPPDATA%/ouracli/.env`
///
/// A missing file is not an error, every value can also come straight from
/// the process environment. Variables that are already set are never
/// overwritten by the file.
///
/// # Errors
///
/// Returns an error string if the directory cannot be created or the file
/// exists but cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = env_file_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(&path).map_err(|e| format!("{}: {}", path.display(), e))?;
    Ok(())
}

/// Path of the optional `.env` file.
pub fn env_file_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("ouracli/.env");
    path
}

/// Runtime settings, resolved once per process.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Token used when a request does not bring its own (`OURA_PAT`).
    pub fallback_token: Option<BearerToken>,
    /// Reject token-less requests even if a fallback exists (`OURA_REQUIRE_TOKEN`).
    pub require_token: bool,
    /// Base URL of the Oura API (`OURA_API_URL`).
    pub api_url: String,
    /// Transport timeout for the outbound call (`OURA_HTTP_TIMEOUT_SECS`).
    pub http_timeout: Option<Duration>,
    /// Bind address of the web server (`SERVER_ADDRESS`).
    pub server_addr: SocketAddr,
}

impl Settings {
    /// Reads all settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a message naming the variable when a set value cannot be parsed.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let fallback_token = get("OURA_PAT").as_deref().and_then(BearerToken::parse);

        let require_token = match get("OURA_REQUIRE_TOKEN") {
            None => false,
            Some(v) => parse_bool(&v)
                .ok_or_else(|| format!("OURA_REQUIRE_TOKEN must be true or false, got '{v}'"))?,
        };

        let api_url = get("OURA_API_URL")
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let http_timeout = match get("OURA_HTTP_TIMEOUT_SECS") {
            None => None,
            Some(v) => {
                let secs = v.trim().parse::<u64>().map_err(|e| {
                    format!("OURA_HTTP_TIMEOUT_SECS must be a number of seconds: {e}")
                })?;
                Some(Duration::from_secs(secs))
            }
        };

        let addr = get("SERVER_ADDRESS").unwrap_or_else(|| DEFAULT_SERVER_ADDRESS.to_string());
        let server_addr = SocketAddr::from_str(addr.trim())
            .map_err(|e| format!("Failed to parse server address '{addr}': {e}"))?;

        Ok(Self {
            fallback_token,
            require_token,
            api_url,
            http_timeout,
            server_addr,
        })
    }

    /// Strict unless a fallback token is configured and not overridden.
    pub fn token_mode(&self) -> TokenMode {
        if self.require_token || self.fallback_token.is_none() {
            TokenMode::Strict
        } else {
            TokenMode::Fallback
        }
    }

    /// Fallback token as seen by the fetcher. `None` in strict mode, so a
    /// forced-strict deployment never substitutes it.
    pub fn effective_fallback(&self) -> Option<&BearerToken> {
        match self.token_mode() {
            TokenMode::Strict => None,
            TokenMode::Fallback => self.fallback_token.as_ref(),
        }
    }

    /// Builds the HTTP client used for the outbound call.
    ///
    /// # Errors
    ///
    /// Fails if the TLS backend cannot be initialised.
    pub fn http_client(&self) -> Result<reqwest::Client, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.http_timeout {
            builder = builder.timeout(timeout);
        }
        builder.build()
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
