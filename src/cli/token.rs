use crate::{config::TOKEN_PORTAL_URL, success, warning};

/// Opens the Oura page for creating Personal Access Tokens.
pub fn token() {
    if webbrowser::open(TOKEN_PORTAL_URL).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            TOKEN_PORTAL_URL
        );
        return;
    }
    success!("Opened {} in your browser.", TOKEN_PORTAL_URL);
}
