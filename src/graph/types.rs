//! Core type definitions for the co-authorship graph

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a profile (e.g., "hcp-1")
///
/// Opaque to the core: only equality and lexical ordering are used.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ProfileId(String);

impl ProfileId {
    pub fn new(id: impl Into<String>) -> Self {
        ProfileId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProfileId {
    fn from(s: String) -> Self {
        ProfileId(s)
    }
}

impl From<&str> for ProfileId {
    fn from(s: &str) -> Self {
        ProfileId(s.to_string())
    }
}

/// Canonical key of an unordered profile pair
///
/// The two ids are sorted lexically, so `(a, b)` and `(b, a)` produce the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairKey {
    low: ProfileId,
    high: ProfileId,
}

impl PairKey {
    pub fn new(a: &ProfileId, b: &ProfileId) -> Self {
        if a <= b {
            PairKey { low: a.clone(), high: b.clone() }
        } else {
            PairKey { low: b.clone(), high: a.clone() }
        }
    }

    /// Lexically smaller id
    pub fn low(&self) -> &ProfileId {
        &self.low
    }

    /// Lexically larger id
    pub fn high(&self) -> &ProfileId {
        &self.high
    }

    pub fn into_parts(self) -> (ProfileId, ProfileId) {
        (self.low, self.high)
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_id() {
        let id = ProfileId::new("hcp-1");
        assert_eq!(id.as_str(), "hcp-1");
        assert_eq!(format!("{}", id), "hcp-1");

        let id2: ProfileId = "hcp-2".into();
        assert!(id < id2);
    }

    #[test]
    fn test_profile_id_serializes_as_plain_string() {
        let id = ProfileId::new("hcp-7");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"hcp-7\"");
    }

    #[test]
    fn test_pair_key_is_order_independent() {
        let a = ProfileId::new("hcp-2");
        let b = ProfileId::new("hcp-10");

        let k1 = PairKey::new(&a, &b);
        let k2 = PairKey::new(&b, &a);
        assert_eq!(k1, k2);

        // Lexical, not numeric
        assert_eq!(k1.low().as_str(), "hcp-10");
        assert_eq!(k1.high().as_str(), "hcp-2");
        assert_eq!(format!("{}", k1), "hcp-10-hcp-2");
    }
}
