use std::{net::SocketAddr, sync::Arc};

use axum::{
    Extension, Router,
    routing::{get, post},
};
use reqwest::Client;

use crate::{Res, api, config::Settings, info};

/// Shared, read-only state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub client: Client,
    pub settings: Settings,
}

impl AppState {
    /// Builds the state with an HTTP client configured from `settings`.
    ///
    /// # Errors
    ///
    /// Fails if the HTTP client cannot be built.
    pub fn new(settings: Settings) -> Result<Self, reqwest::Error> {
        let client = settings.http_client()?;
        Ok(Self { client, settings })
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(api::index))
        .route("/health", get(api::health))
        .route("/api/oura/personal-info", post(api::personal_info))
        .layer(Extension(state))
}

/// Binds `addr` and serves the router until the process is stopped.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn start_api_server(state: Arc<AppState>, addr: SocketAddr) -> Res<()> {
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
