//! Oura Personal Info Library
//!
//! This library fetches a user's personal info from the Oura API v2 with a
//! Personal Access Token, validates both the inbound request and the API
//! response, and exposes the exchange through a command-line client and a
//! minimal web front end.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints of the web front end
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `errors` - Error taxonomy of the exchange
//! - `oura` - Oura API client
//! - `server` - HTTP server wiring
//! - `types` - Data structures and type definitions
//! - `utils` - Presentation helpers
//! - `validation` - Request and response shape checks
//!
//! # Example
//!
//! ```
//! use ouracli::{config, oura::personal_info::fetch_profile, types::BearerToken};
//!
//! #[tokio::main]
//! async fn main() -> ouracli::Res<()> {
//!     config::load_env().await?;
//!     let settings = config::Settings::from_env()?;
//!     let client = settings.http_client()?;
//!     let token = BearerToken::parse("MY_PAT");
//!     let record = fetch_profile(&client, &settings.api_url, token.as_ref(), None).await?;
//!     println!("{}", record.email);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod oura;
pub mod server;
pub mod types;
pub mod utils;
pub mod validation;

/// A convenient Result type alias for startup and wiring code.
///
/// Uses a boxed error trait object with Send + Sync bounds for async
/// contexts. The personal info exchange itself returns
/// [`errors::OuraError`] instead.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Accepts the same arguments as `println!`.
///
/// # Example
///
/// ```
/// info!("Listening on http://{}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Accepts the same arguments as `println!`.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Terminates with exit code 1 after printing. Only for fatal conditions in
/// the command-line entry points, never inside request handling.
///
/// # Example
///
/// ```
/// error!("Cannot load settings. Err: {}", e);
/// // Program exits here
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues and for server-side diagnostics of
/// unexpected failures. Written to stderr.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
