//! Renderer boundary
//!
//! The core never draws anything. It hands the visible subgraph to a
//! [`Renderer`], asks it where a node ended up, and issues camera commands.
//! [`ForceLayout`] is the in-process implementation used by the server, the
//! CLI and the tests.

pub mod layout;
pub mod svg;

use crate::graph::{ProfileId, VisibleSubgraph};
use serde::{Deserialize, Serialize};

pub use layout::{CameraState, ForceLayout, LayoutConfig, LayoutSnapshot};
pub use svg::to_svg;

/// A 2-D layout coordinate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Position { x, y }
    }
}

/// A camera instruction sent to a renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum CameraCommand {
    #[serde(rename_all = "camelCase")]
    CenterAt { x: f64, y: f64, duration_ms: u64 },
    #[serde(rename_all = "camelCase")]
    Zoom { level: f64, duration_ms: u64 },
}

/// Handle to whatever lays out and draws the visible subgraph.
///
/// Methods take `&self`: a renderer is a shared handle, and implementations
/// keep their own interior state.
pub trait Renderer: Send + Sync {
    /// Replace the graph being displayed
    fn set_graph_data(&self, data: &VisibleSubgraph);

    /// Layout position of a node in the current graph.
    ///
    /// `None` if the node is not displayed or has not been placed yet.
    fn node_position(&self, id: &ProfileId) -> Option<Position>;

    fn center_at(&self, x: f64, y: f64, duration_ms: u64);

    fn zoom(&self, level: f64, duration_ms: u64);

    /// Viewport size in pixels
    fn resize(&self, width: u32, height: u32);
}
