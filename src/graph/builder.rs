//! Co-authorship graph construction
//!
//! Derives every undirected edge from the profile list in one pass over all
//! unordered pairs. The result is built once at startup and shared read-only.

use super::edge::Edge;
use super::profile::Profile;
use super::types::{PairKey, ProfileId};
use indexmap::map::Entry;
use indexmap::IndexMap;
use serde::Serialize;
use tracing::info;

/// The full co-authorship graph
///
/// `nodes` is the input profile sequence; `edges` holds one edge per profile
/// pair with a non-empty publication intersection, in discovery order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CoauthorGraph {
    pub nodes: Vec<Profile>,
    pub edges: Vec<Edge>,
}

/// Summary figures for a built graph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphStatistics {
    pub node_count: usize,
    pub edge_count: usize,
    /// Profiles with no co-author
    pub isolated_count: usize,
    pub max_degree: usize,
    pub avg_degree: f64,
}

impl CoauthorGraph {
    /// Build the graph from an ordered profile sequence.
    ///
    /// Pairs are visited once each (`i < j` over input order). An edge is
    /// emitted iff the two publication lists intersect; a pair key seen a
    /// second time is dropped rather than merged.
    pub fn build(profiles: &[Profile]) -> Self {
        let mut edges: IndexMap<PairKey, Edge> = IndexMap::new();

        for (i, a) in profiles.iter().enumerate() {
            for b in &profiles[i + 1..] {
                if a.id == b.id {
                    continue;
                }
                let shared = a.shared_publications(b);
                if shared.is_empty() {
                    continue;
                }

                let key = PairKey::new(&a.id, &b.id);
                if let Entry::Vacant(slot) = edges.entry(key) {
                    slot.insert(Edge::new(&a.id, &b.id, shared));
                }
            }
        }

        info!(
            "Built co-authorship graph: {} profiles, {} edges",
            profiles.len(),
            edges.len()
        );

        CoauthorGraph {
            nodes: profiles.to_vec(),
            edges: edges.into_values().collect(),
        }
    }

    /// Get a node by id
    pub fn node(&self, id: &ProfileId) -> Option<&Profile> {
        self.nodes.iter().find(|n| n.id == *id)
    }

    /// The edge joining `a` and `b`, if any
    pub fn edge_between(&self, a: &ProfileId, b: &ProfileId) -> Option<&Edge> {
        self.edges.iter().find(|e| e.connects(a, b))
    }

    /// Ids of every profile sharing an edge with `id`
    pub fn neighbors(&self, id: &ProfileId) -> Vec<&ProfileId> {
        self.edges
            .iter()
            .filter_map(|e| e.other_endpoint(id))
            .collect()
    }

    pub fn degree(&self, id: &ProfileId) -> usize {
        self.edges.iter().filter(|e| e.touches(id)).count()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn statistics(&self) -> GraphStatistics {
        let degrees: Vec<usize> = self.nodes.iter().map(|n| self.degree(&n.id)).collect();
        let node_count = self.nodes.len();

        GraphStatistics {
            node_count,
            edge_count: self.edges.len(),
            isolated_count: degrees.iter().filter(|&&d| d == 0).count(),
            max_degree: degrees.iter().copied().max().unwrap_or(0),
            avg_degree: if node_count == 0 {
                0.0
            } else {
                degrees.iter().sum::<usize>() as f64 / node_count as f64
            },
        }
    }
}
