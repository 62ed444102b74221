//! HTTP handlers for the Visualizer API

use crate::detail::DetailView;
use crate::graph::{Edge, Profile, ProfileId};
use crate::render::{CameraState, ForceLayout};
use crate::session::SelectionController;
use axum::{
    extract::{Json, State},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared state behind every handler
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<RwLock<SelectionController>>,
    /// The renderer attached to `session`, read for positions and camera
    pub layout: Arc<ForceLayout>,
}

/// Request body for a search submission
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub term: String,
}

/// Request body for a viewport change
#[derive(Debug, Deserialize)]
pub struct ViewportRequest {
    pub width: u32,
    pub height: u32,
}

/// A node as handed to a browser renderer
#[derive(Debug, Serialize)]
pub struct FeedNode {
    #[serde(flatten)]
    pub profile: Profile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

/// A link as handed to a browser renderer
#[derive(Debug, Serialize)]
pub struct FeedLink {
    #[serde(flatten)]
    pub edge: Edge,
    pub label: String,
}

/// The renderer graph feed
#[derive(Debug, Serialize)]
pub struct GraphFeed {
    pub center: Option<ProfileId>,
    pub nodes: Vec<FeedNode>,
    pub links: Vec<FeedLink>,
    pub camera: CameraState,
}

fn graph_feed(session: &SelectionController, layout: &ForceLayout) -> GraphFeed {
    let snapshot = layout.snapshot();
    let view = session.visible_subgraph();

    GraphFeed {
        center: view.center.clone(),
        nodes: view
            .nodes
            .iter()
            .map(|profile| {
                let pos = snapshot.positions.get(&profile.id);
                FeedNode {
                    profile: profile.clone(),
                    x: pos.map(|p| p.x),
                    y: pos.map(|p| p.y),
                }
            })
            .collect(),
        links: view
            .edges
            .iter()
            .map(|edge| FeedLink {
                edge: edge.clone(),
                label: edge.label(),
            })
            .collect(),
        camera: snapshot.camera,
    }
}

fn detail(session: &SelectionController) -> DetailView {
    DetailView::from_selection(session.current_selection(), session.store())
}

/// Handler for search submissions
pub async fn search_handler(
    State(state): State<AppState>,
    Json(payload): Json<SearchRequest>,
) -> impl IntoResponse {
    let mut session = state.session.write().await;
    session.on_search(&payload.term);
    Json(graph_feed(&session, &state.layout))
}

/// Handler for the current graph feed
pub async fn graph_handler(State(state): State<AppState>) -> impl IntoResponse {
    let session = state.session.read().await;
    Json(graph_feed(&session, &state.layout))
}

/// Handler for node clicks; the body is the clicked node object
pub async fn node_click_handler(
    State(state): State<AppState>,
    Json(profile): Json<Profile>,
) -> impl IntoResponse {
    let mut session = state.session.write().await;
    session.on_node_clicked(profile);
    Json(detail(&session))
}

/// Handler for link clicks; endpoints may be ids or node objects
pub async fn link_click_handler(
    State(state): State<AppState>,
    Json(edge): Json<Edge>,
) -> impl IntoResponse {
    let mut session = state.session.write().await;
    session.on_edge_clicked(edge);
    Json(detail(&session))
}

/// Handler for the current detail panel
pub async fn selection_handler(State(state): State<AppState>) -> impl IntoResponse {
    let session = state.session.read().await;
    Json(detail(&session))
}

/// Handler for viewport changes
pub async fn viewport_handler(
    State(state): State<AppState>,
    Json(payload): Json<ViewportRequest>,
) -> impl IntoResponse {
    let session = state.session.read().await;
    session.on_resize(payload.width, payload.height);
    let snapshot = state.layout.snapshot();
    Json(json!({ "width": snapshot.width, "height": snapshot.height }))
}

/// Handler for system status
pub async fn status_handler(State(state): State<AppState>) -> impl IntoResponse {
    let session = state.session.read().await;
    Json(json!({
        "status": "healthy",
        "version": crate::VERSION,
        "storage": {
            "profiles": session.store().len(),
            "edges": session.graph().edge_count(),
        }
    }))
}
