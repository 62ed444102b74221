//! Selection controller
//!
//! Single owner of the interactive view state: which detail is displayed
//! (nothing, a profile, or an edge) and which subgraph is visible. Every
//! external trigger maps to one transition method; each leaves the
//! controller in a complete, consistent state.

use super::camera::{CameraConfig, CameraDirector};
use crate::graph::{resolve, CoauthorGraph, Edge, Profile, ProfileId, ProfileStore, VisibleSubgraph};
use crate::render::Renderer;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

/// The detail currently presented
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "camelCase")]
pub enum Selection {
    #[default]
    Empty,
    NodeSelected(Profile),
    EdgeSelected(Edge),
}

impl Selection {
    pub fn is_empty(&self) -> bool {
        matches!(self, Selection::Empty)
    }

    pub fn as_profile(&self) -> Option<&Profile> {
        match self {
            Selection::NodeSelected(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_edge(&self) -> Option<&Edge> {
        match self {
            Selection::EdgeSelected(e) => Some(e),
            _ => None,
        }
    }
}

/// What a search did to the view
///
/// An empty term and a term matching nobody both clear the view and are
/// reported identically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Focused(ProfileId),
    Cleared,
}

/// Owner of selection and visible subgraph
pub struct SelectionController {
    store: Arc<ProfileStore>,
    graph: Arc<CoauthorGraph>,
    selection: Selection,
    visible: VisibleSubgraph,

    /// Receives every new visible subgraph
    renderer: Option<Arc<dyn Renderer>>,
    camera: Option<CameraDirector>,

    /// Width reserved for the side panel; subtracted on resize
    panel_width: u32,
}

impl SelectionController {
    pub fn new(store: Arc<ProfileStore>, graph: Arc<CoauthorGraph>) -> Self {
        Self {
            store,
            graph,
            selection: Selection::Empty,
            visible: VisibleSubgraph::empty(),
            renderer: None,
            camera: None,
            panel_width: 0,
        }
    }

    /// Build the graph from `store` and wrap both
    pub fn from_store(store: ProfileStore) -> Self {
        let graph = CoauthorGraph::build(store.profiles());
        Self::new(Arc::new(store), Arc::new(graph))
    }

    /// Feed subgraph changes to `renderer` and focus it on searched profiles
    pub fn attach_renderer(mut self, renderer: Arc<dyn Renderer>, camera: CameraConfig) -> Self {
        self.camera = Some(CameraDirector::new(Arc::clone(&renderer), camera));
        self.renderer = Some(renderer);
        self
    }

    pub fn with_panel_width(mut self, panel_width: u32) -> Self {
        self.panel_width = panel_width;
        self
    }

    /// Handle a submitted search term
    pub fn on_search(&mut self, term: &str) -> SearchOutcome {
        let Some(profile) = self.store.find_by_name(term).cloned() else {
            if term.trim().is_empty() {
                debug!("Empty search term; clearing view");
            } else {
                debug!("No profile matches {:?}; clearing view", term.trim());
            }
            self.clear();
            return SearchOutcome::Cleared;
        };

        self.visible = resolve(Some(&profile), &self.graph);
        info!(
            "Centered on {} ({}): {} nodes, {} edges",
            profile.name,
            profile.id,
            self.visible.nodes.len(),
            self.visible.edges.len()
        );

        if let Some(renderer) = &self.renderer {
            renderer.set_graph_data(&self.visible);
        }
        if let Some(camera) = &self.camera {
            camera.focus(profile.id.clone());
        }

        let id = profile.id.clone();
        self.selection = Selection::NodeSelected(profile);
        SearchOutcome::Focused(id)
    }

    /// A rendered node was clicked; the visible subgraph is untouched
    pub fn on_node_clicked(&mut self, profile: Profile) {
        debug!("Node clicked: {}", profile.id);
        self.selection = Selection::NodeSelected(profile);
    }

    /// A rendered edge was clicked; the visible subgraph is untouched
    pub fn on_edge_clicked(&mut self, edge: Edge) {
        debug!("Edge clicked: {}", edge.pair_key());
        self.selection = Selection::EdgeSelected(edge);
    }

    /// The window was resized; forwards the graph area to the renderer
    pub fn on_resize(&self, width: u32, height: u32) {
        if let Some(renderer) = &self.renderer {
            renderer.resize(width.saturating_sub(self.panel_width), height);
        }
    }

    pub fn current_selection(&self) -> &Selection {
        &self.selection
    }

    pub fn visible_subgraph(&self) -> &VisibleSubgraph {
        &self.visible
    }

    /// Id of the searched profile, if the view is not empty
    pub fn centered(&self) -> Option<&ProfileId> {
        self.visible.center.as_ref()
    }

    pub fn store(&self) -> &ProfileStore {
        &self.store
    }

    pub fn graph(&self) -> &CoauthorGraph {
        &self.graph
    }

    pub fn camera(&self) -> Option<&CameraDirector> {
        self.camera.as_ref()
    }

    fn clear(&mut self) {
        self.selection = Selection::Empty;
        self.visible = VisibleSubgraph::empty();
        if let Some(camera) = &self.camera {
            camera.cancel();
        }
        if let Some(renderer) = &self.renderer {
            renderer.set_graph_data(&self.visible);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{ForceLayout, LayoutConfig};

    fn controller() -> SelectionController {
        SelectionController::from_store(ProfileStore::sample())
    }

    #[test]
    fn test_initial_state() {
        let c = controller();
        assert!(c.current_selection().is_empty());
        assert!(c.visible_subgraph().is_empty());
        assert_eq!(c.centered(), None);
    }

    #[test]
    fn test_search_selects_and_resolves() {
        let mut c = controller();
        let outcome = c.on_search("  ben ");

        assert_eq!(outcome, SearchOutcome::Focused("hcp-2".into()));
        assert_eq!(c.current_selection().as_profile().unwrap().name, "Dr. Ben Zhao");
        assert_eq!(c.centered(), Some(&"hcp-2".into()));

        let mut ids: Vec<&str> = c.visible_subgraph().nodes.iter().map(|n| n.id.as_str()).collect();
        ids.sort();
        assert_eq!(ids, vec!["hcp-1", "hcp-2", "hcp-4"]);
        // 1-2, 2-4 and the neighbor-to-neighbor 1-4
        assert_eq!(c.visible_subgraph().edges.len(), 3);
    }

    #[test]
    fn test_click_after_failed_search_keeps_empty_view() {
        let mut c = controller();
        c.on_search("nobody");
        let profile = c.store().get(&"hcp-3".into()).cloned().unwrap();
        c.on_node_clicked(profile);

        assert!(c.visible_subgraph().is_empty());
        assert!(c.current_selection().as_profile().is_some());
    }

    #[test]
    fn test_new_search_replaces_edge_selection() {
        let mut c = controller();
        c.on_search("carter");
        let edge = c.visible_subgraph().edges[0].clone();
        c.on_edge_clicked(edge.clone());
        assert_eq!(c.current_selection().as_edge(), Some(&edge));

        c.on_search("reyes");
        assert_eq!(c.current_selection().as_profile().unwrap().id.as_str(), "hcp-3");
        assert!(c.visible_subgraph().is_center(&"hcp-3".into()));
    }

    #[test]
    fn test_renderer_receives_feed_and_resize() {
        let layout = Arc::new(ForceLayout::new(LayoutConfig::default()));
        let mut c = controller()
            .attach_renderer(layout.clone(), CameraConfig::default())
            .with_panel_width(400);

        c.on_search("tanaka");
        assert!(layout.node_position(&"hcp-4".into()).is_some());
        // No runtime in a plain #[test]: focus is applied immediately
        assert_eq!(layout.commands().len(), 2);

        c.on_resize(1200, 800);
        let snap = layout.snapshot();
        assert_eq!((snap.width, snap.height), (800, 800));

        c.on_search("");
        assert!(layout.snapshot().positions.is_empty());
    }

    #[test]
    fn test_selection_serializes_with_kind() {
        let json = serde_json::to_value(Selection::Empty).unwrap();
        assert_eq!(json["kind"], "empty");

        let edge = Edge::new(&"a".into(), &"b".into(), vec!["X".to_string()]);
        let json = serde_json::to_value(Selection::EdgeSelected(edge)).unwrap();
        assert_eq!(json["kind"], "edgeSelected");
        assert_eq!(json["detail"]["sharedPublications"][0], "X");
    }
}
