use std::{net::SocketAddr, sync::Arc};

use crate::{
    config::Settings,
    error,
    server::{AppState, start_api_server},
    types::TokenMode,
    warning,
};

/// Runs the web front end on `addr`, or on `SERVER_ADDRESS` when not given.
pub async fn serve(settings: Settings, addr: Option<SocketAddr>) {
    let addr = addr.unwrap_or(settings.server_addr);

    if settings.token_mode() == TokenMode::Fallback {
        warning!("OURA_PAT is set: requests without a token will use it.");
    }

    let state = match AppState::new(settings) {
        Ok(s) => Arc::new(s),
        Err(e) => error!("Cannot create HTTP client. Err: {}", e),
    };

    if let Err(e) = start_api_server(state, addr).await {
        error!("Server stopped. Err: {}", e);
    }
}
