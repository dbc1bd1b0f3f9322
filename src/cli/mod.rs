//! # CLI Module
//!
//! Command implementations behind the `ouracli` binary. Each command takes
//! the already resolved [`crate::config::Settings`] and reports to the
//! terminal through the crate's console macros.
//!
//! ## Commands
//!
//! - [`profile`] - Fetches the personal info for a token and prints it as a
//!   table. Falls back to `OURA_PAT` when no token is given.
//! - [`serve`] - Runs the web front end and the personal info proxy.
//! - [`token`] - Opens the page where Personal Access Tokens are created.
//!
//! ## Exit Behaviour
//!
//! Failures are fatal for the CLI: the message is printed with `error!` and
//! the process exits with code 1.

mod profile;
mod serve;
mod token;

pub use profile::{missing_token_hint, profile};
pub use serve::serve;
pub use token::token;
