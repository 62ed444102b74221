//! HCP Network Explorer
//!
//! Locate a healthcare professional by name and explore their co-authorship
//! network: everyone who shares at least one publication with them.
//!
//! # Architecture
//!
//! - `graph`: profiles, the read-only profile store, co-authorship edge
//!   derivation and ego-network resolution
//! - `session`: the selection controller (single owner of the displayed
//!   detail and visible subgraph) and the camera director
//! - `render`: the renderer boundary, an in-process force layout and SVG export
//! - `detail`: the detail panel view model
//! - `http`: the Visualizer JSON API
//!
//! ## Example Usage
//!
//! ```rust
//! use hcp_network::{ProfileStore, SearchOutcome, SelectionController};
//!
//! let mut session = SelectionController::from_store(ProfileStore::sample());
//!
//! // Case-insensitive partial match on the name
//! let outcome = session.on_search("zhao");
//! assert_eq!(outcome, SearchOutcome::Focused("hcp-2".into()));
//!
//! // Zhao plus the two co-authors
//! assert_eq!(session.visible_subgraph().nodes.len(), 3);
//!
//! // A search that matches nobody clears the view
//! assert_eq!(session.on_search("nobody"), SearchOutcome::Cleared);
//! assert!(session.current_selection().is_empty());
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod detail;
pub mod graph;
pub mod http;
pub mod render;
pub mod session;

// Re-export main types for convenience
pub use graph::{
    resolve, CoauthorGraph, Edge, GraphError, GraphResult, GraphStatistics, PairKey, Profile,
    ProfileId, ProfileStore, VisibleSubgraph,
};

pub use session::{
    CameraConfig, CameraDirector, FocusOutcome, SearchOutcome, Selection, SelectionController,
};

pub use render::{CameraCommand, ForceLayout, LayoutConfig, Position, Renderer};

pub use config::{AppConfig, ConfigError, ConfigResult};

pub use detail::DetailView;

pub use http::{AppState, HttpServer};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
