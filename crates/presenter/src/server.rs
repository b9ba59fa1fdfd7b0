//! Single-route web front end.
//!
//! `GET /` rebuilds the store from the script on every request. Nothing
//! loaded for one request is visible to another; the only shared state is
//! the immutable script text.

use crate::html::render_results;
use crate::pipeline::{run_pipeline, PipelineConfig};
use axum::{extract::State, http::StatusCode, response::Html, routing::get, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Shared state handed to the request handler.
#[derive(Clone)]
pub struct AppState {
    script: Arc<str>,
    config: Arc<PipelineConfig>,
}

impl AppState {
    /// Create handler state from raw dump text.
    ///
    /// # Arguments
    /// * `script` - Raw, unsanitized dump; sanitized again per request
    /// * `config` - State filter and display name
    pub fn new(script: impl Into<Arc<str>>, config: PipelineConfig) -> Self {
        Self {
            script: script.into(),
            config: Arc::new(config),
        }
    }
}

/// Build the router with its one route.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(results_page))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Bind to `addr` and serve until the process exits.
pub async fn serve(addr: &str, state: AppState) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("Serving polling unit results on http://{}", listener.local_addr()?);
    axum::serve(listener, router(state)).await
}

async fn results_page(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    match run_pipeline(&state.script, state.config.state_id).await {
        Ok(rows) => Ok(Html(render_results(&rows, &state.config.state_name))),
        Err(e) => {
            error!("Failed to build results page: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
