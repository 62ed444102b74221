//! HTTP server implementation for the Visualizer

use super::handler::{
    graph_handler, link_click_handler, node_click_handler, search_handler, selection_handler,
    status_handler, viewport_handler, AppState,
};
use crate::config::HttpConfig;
use crate::graph::ProfileStore;
use crate::render::{ForceLayout, LayoutConfig};
use crate::session::{CameraConfig, SelectionController};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tracing::info;

/// Build the API router over `state`
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/status", get(status_handler))
        .route("/api/search", post(search_handler))
        .route("/api/graph", get(graph_handler))
        .route("/api/selection", get(selection_handler))
        .route("/api/nodes/click", post(node_click_handler))
        .route("/api/links/click", post(link_click_handler))
        .route("/api/viewport", post(viewport_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

impl AppState {
    /// Session over `store` with a server-side force layout attached
    pub fn new(store: ProfileStore, layout: LayoutConfig, camera: CameraConfig, panel_width: u32) -> Self {
        let layout = Arc::new(ForceLayout::new(layout));
        let session = SelectionController::from_store(store)
            .attach_renderer(layout.clone(), camera)
            .with_panel_width(panel_width);

        Self {
            session: Arc::new(RwLock::new(session)),
            layout,
        }
    }
}

/// HTTP server exposing the Visualizer API
pub struct HttpServer {
    state: AppState,
    config: HttpConfig,
}

impl HttpServer {
    /// Create a new HTTP server
    pub fn new(state: AppState, config: HttpConfig) -> Self {
        Self { state, config }
    }

    /// Start the HTTP server
    pub async fn start(&self) -> Result<(), Box<dyn std::error::Error>> {
        let app = router(self.state.clone());

        let addr = format!("{}:{}", self.config.address, self.config.port);
        let listener = tokio::net::TcpListener::bind(&addr).await?;

        info!("Visualizer API available at http://{}", addr);

        axum::serve(listener, app).await?;

        Ok(())
    }
}
