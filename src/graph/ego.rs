//! Ego-network resolution
//!
//! Computes the visible subgraph for a centered profile: the center, every
//! profile one edge away, and every full-graph edge between two of those.

use super::builder::CoauthorGraph;
use super::edge::Edge;
use super::profile::Profile;
use super::types::ProfileId;
use rustc_hash::FxHashSet;
use serde::Serialize;

/// The subgraph currently handed to the renderer
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VisibleSubgraph {
    /// Centered profile, `None` when the view is empty
    pub center: Option<ProfileId>,
    pub nodes: Vec<Profile>,
    pub edges: Vec<Edge>,
}

impl VisibleSubgraph {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: &ProfileId) -> bool {
        self.nodes.iter().any(|n| n.id == *id)
    }

    pub fn node(&self, id: &ProfileId) -> Option<&Profile> {
        self.nodes.iter().find(|n| n.id == *id)
    }

    pub fn is_center(&self, id: &ProfileId) -> bool {
        self.center.as_ref() == Some(id)
    }
}

/// Resolve the ego network of `center` within `graph`.
///
/// A missing center yields the empty subgraph. The result is computed from
/// scratch each call and never depends on a previous resolution.
pub fn resolve(center: Option<&Profile>, graph: &CoauthorGraph) -> VisibleSubgraph {
    let Some(center) = center else {
        return VisibleSubgraph::empty();
    };

    let mut ids: FxHashSet<&ProfileId> = FxHashSet::default();
    ids.insert(&center.id);
    for edge in &graph.edges {
        if let Some(other) = edge.other_endpoint(&center.id) {
            ids.insert(other);
        }
    }

    let mut nodes: Vec<Profile> = graph
        .nodes
        .iter()
        .filter(|n| ids.contains(&n.id))
        .cloned()
        .collect();
    if !nodes.iter().any(|n| n.id == center.id) {
        nodes.insert(0, center.clone());
    }

    let edges = graph
        .edges
        .iter()
        .filter(|e| ids.contains(&e.source) && ids.contains(&e.target))
        .cloned()
        .collect();

    VisibleSubgraph {
        center: Some(center.id.clone()),
        nodes,
        edges,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(id: &str, pubs: &[&str]) -> Profile {
        Profile::new(id, id, pubs.iter().map(|p| p.to_string()).collect())
    }

    fn ids(sub: &VisibleSubgraph) -> Vec<&str> {
        sub.nodes.iter().map(|n| n.id.as_str()).collect()
    }

    #[test]
    fn test_no_center() {
        let graph = CoauthorGraph::build(&[profile("a", &["X"]), profile("b", &["X"])]);
        let sub = resolve(None, &graph);
        assert!(sub.is_empty());
        assert!(sub.edges.is_empty());
        assert_eq!(sub.center, None);
    }

    #[test]
    fn test_isolated_center() {
        let graph = CoauthorGraph::build(&[profile("a", &["X"]), profile("b", &["Y"])]);
        let sub = resolve(graph.node(&"a".into()), &graph);
        assert_eq!(ids(&sub), vec!["a"]);
        assert!(sub.edges.is_empty());
        assert!(sub.is_center(&"a".into()));
    }

    #[test]
    fn test_edges_between_neighbors_are_included() {
        // b and c both co-authored with a, and with each other on "T"
        let graph = CoauthorGraph::build(&[
            profile("a", &["X", "Y"]),
            profile("b", &["X", "T"]),
            profile("c", &["Y", "T"]),
            profile("d", &["T"]),
        ]);

        let sub = resolve(graph.node(&"a".into()), &graph);
        assert_eq!(ids(&sub), vec!["a", "b", "c"]);
        assert_eq!(sub.edges.len(), 3);
        assert!(sub.edges.iter().any(|e| e.connects(&"b".into(), &"c".into())));
        // d is two hops from a
        assert!(!sub.contains(&"d".into()));
    }

    #[test]
    fn test_nodes_follow_graph_order() {
        let graph = CoauthorGraph::build(&[
            profile("n1", &["X"]),
            profile("n2", &["Q"]),
            profile("n3", &["X"]),
        ]);
        let sub = resolve(graph.node(&"n3".into()), &graph);
        assert_eq!(ids(&sub), vec!["n1", "n3"]);
    }

    #[test]
    fn test_center_outside_graph_is_kept() {
        let graph = CoauthorGraph::build(&[profile("a", &["X"])]);
        let stranger = profile("s", &["X"]);
        let sub = resolve(Some(&stranger), &graph);
        assert_eq!(ids(&sub), vec!["s"]);
    }
}
