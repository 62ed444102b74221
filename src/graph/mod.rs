//! Co-authorship graph model
//!
//! This module implements the data side of the explorer:
//! - Profiles and the read-only profile store
//! - Undirected co-authorship edges derived from shared publications
//! - Ego-network resolution for a centered profile

pub mod builder;
pub mod edge;
pub mod ego;
pub mod profile;
pub mod sample;
pub mod store;
pub mod types;

// Re-export main types
pub use builder::{CoauthorGraph, GraphStatistics};
pub use edge::Edge;
pub use ego::{resolve, VisibleSubgraph};
pub use profile::Profile;
pub use sample::sample_profiles;
pub use store::{GraphError, GraphResult, ProfileStore};
pub use types::{PairKey, ProfileId};
