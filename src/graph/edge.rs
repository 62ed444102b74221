//! Co-authorship edges
//!
//! An edge joins two profiles that share at least one publication. Edges are
//! undirected: `source`/`target` are only a serialization convention, and the
//! identity of an edge is its canonical [`PairKey`].

use super::types::{PairKey, ProfileId};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;

/// An undirected co-authorship edge
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    /// First endpoint (lexically smaller id for derived edges)
    #[serde(deserialize_with = "endpoint_id")]
    pub source: ProfileId,

    /// Second endpoint
    #[serde(deserialize_with = "endpoint_id")]
    pub target: ProfileId,

    /// Publications both endpoints appear on
    #[serde(default)]
    pub shared_publications: Vec<String>,
}

/// Wire shape of an edge endpoint.
///
/// Force-layout renderers replace the plain id with the node object they lay
/// out, so both forms are accepted and reduced to the id.
#[derive(Deserialize)]
#[serde(untagged)]
enum Endpoint {
    Id(ProfileId),
    Node { id: ProfileId },
}

fn endpoint_id<'de, D>(deserializer: D) -> Result<ProfileId, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Endpoint::deserialize(deserializer)? {
        Endpoint::Id(id) => id,
        Endpoint::Node { id } => id,
    })
}

impl Edge {
    /// Create an edge with endpoints in canonical order
    pub fn new(a: &ProfileId, b: &ProfileId, shared_publications: Vec<String>) -> Self {
        let (source, target) = PairKey::new(a, b).into_parts();
        Edge {
            source,
            target,
            shared_publications,
        }
    }

    /// Canonical key of this edge's endpoint pair
    pub fn pair_key(&self) -> PairKey {
        PairKey::new(&self.source, &self.target)
    }

    /// Check if `id` is one of the endpoints
    pub fn touches(&self, id: &ProfileId) -> bool {
        self.source == *id || self.target == *id
    }

    /// Check if this edge joins `a` and `b` (in either order)
    pub fn connects(&self, a: &ProfileId, b: &ProfileId) -> bool {
        (self.source == *a && self.target == *b) || (self.source == *b && self.target == *a)
    }

    /// The endpoint opposite `id`, or `None` if `id` is not an endpoint
    pub fn other_endpoint(&self, id: &ProfileId) -> Option<&ProfileId> {
        if self.source == *id {
            Some(&self.target)
        } else if self.target == *id {
            Some(&self.source)
        } else {
            None
        }
    }

    pub fn shared_count(&self) -> usize {
        self.shared_publications.len()
    }

    /// Hover label shown for the link
    pub fn label(&self) -> String {
        format!("Co-authored {} pub(s)", self.shared_count())
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        if self.pair_key() != other.pair_key() {
            return false;
        }
        let mine: HashSet<&str> = self.shared_publications.iter().map(String::as_str).collect();
        let theirs: HashSet<&str> = other.shared_publications.iter().map(String::as_str).collect();
        mine == theirs
    }
}

impl Eq for Edge {}

impl std::hash::Hash for Edge {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.pair_key().hash(state);
    }
}
