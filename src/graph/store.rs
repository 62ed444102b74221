//! Read-only profile storage
//!
//! The store is the source of truth for every profile in a session. It is
//! populated once (from a data file or the built-in sample) and never
//! mutated afterwards.

use super::profile::Profile;
use super::types::ProfileId;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while loading profiles
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Profile {0} appears more than once")]
    DuplicateProfileId(ProfileId),

    #[error("Unsupported profile file format: {0}")]
    UnsupportedFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Immutable, ordered collection of profiles
///
/// Iteration order is load order; search and graph construction depend on it.
#[derive(Debug, Clone, Default)]
pub struct ProfileStore {
    profiles: Vec<Profile>,

    /// ProfileId -> position in `profiles`
    index: HashMap<ProfileId, usize>,
}

impl ProfileStore {
    /// Build a store, rejecting duplicate ids
    pub fn from_profiles(profiles: Vec<Profile>) -> GraphResult<Self> {
        let mut index = HashMap::with_capacity(profiles.len());
        for (pos, profile) in profiles.iter().enumerate() {
            if index.insert(profile.id.clone(), pos).is_some() {
                return Err(GraphError::DuplicateProfileId(profile.id.clone()));
            }
        }

        debug!("Profile store holds {} profiles", profiles.len());
        Ok(ProfileStore { profiles, index })
    }

    /// Load profiles from a JSON or YAML file holding an array of profiles
    pub fn load(path: impl AsRef<Path>) -> GraphResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;

        let profiles: Vec<Profile> = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => serde_json::from_str(&raw)?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&raw)?,
            other => {
                return Err(GraphError::UnsupportedFormat(
                    other.unwrap_or("<none>").to_string(),
                ))
            }
        };

        info!("Loaded {} profiles from {:?}", profiles.len(), path);
        Self::from_profiles(profiles)
    }

    /// Get a profile by id
    pub fn get(&self, id: &ProfileId) -> Option<&Profile> {
        self.index.get(id).map(|&pos| &self.profiles[pos])
    }

    pub fn contains(&self, id: &ProfileId) -> bool {
        self.index.contains_key(id)
    }

    /// First profile, in store order, whose name contains `term` ignoring case.
    ///
    /// The term is trimmed first; an empty or whitespace-only term matches nothing.
    pub fn find_by_name(&self, term: &str) -> Option<&Profile> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        self.profiles.iter().find(|p| p.name_matches(&needle))
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn iter(&self) -> impl Iterator<Item = &Profile> {
        self.profiles.iter()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn store() -> ProfileStore {
        ProfileStore::from_profiles(vec![
            Profile::new("hcp-1", "Dr. Emily Carter", vec![]),
            Profile::new("hcp-2", "Dr. Ben Zhao", vec![]),
            Profile::new("hcp-3", "Dr. Emilia Stone", vec![]),
        ])
        .unwrap()
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = ProfileStore::from_profiles(vec![
            Profile::new("hcp-1", "A", vec![]),
            Profile::new("hcp-1", "B", vec![]),
        ]);
        assert!(matches!(result, Err(GraphError::DuplicateProfileId(id)) if id.as_str() == "hcp-1"));
    }

    #[test]
    fn test_get() {
        let store = store();
        assert_eq!(store.get(&"hcp-2".into()).unwrap().name, "Dr. Ben Zhao");
        assert!(store.get(&"hcp-9".into()).is_none());
        assert!(store.contains(&"hcp-3".into()));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_find_by_name_first_match_wins() {
        let store = store();
        // "emil" matches both Emily and Emilia; store order decides
        assert_eq!(store.find_by_name("  EMIL ").unwrap().id.as_str(), "hcp-1");
        assert_eq!(store.find_by_name("stone").unwrap().id.as_str(), "hcp-3");
    }

    #[test]
    fn test_find_by_name_empty_and_missing() {
        let store = store();
        assert!(store.find_by_name("").is_none());
        assert!(store.find_by_name("   ").is_none());
        assert!(store.find_by_name("zzz").is_none());
    }

    #[test]
    fn test_load_json() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"[{{"id": "a", "name": "Alpha", "publications": ["X"]}},
                {{"id": "b", "name": "Beta", "education": "MIT"}}]"#
        )
        .unwrap();

        let store = ProfileStore::load(file.path()).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(&"b".into()).unwrap().education, "MIT");
    }

    #[test]
    fn test_load_yaml() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        write!(
            file,
            "- id: a\n  name: Alpha\n  publications: [X, Y]\n- id: b\n  name: Beta\n"
        )
        .unwrap();

        let store = ProfileStore::load(file.path()).unwrap();
        assert_eq!(store.get(&"a".into()).unwrap().publications.len(), 2);
    }

    #[test]
    fn test_load_unsupported_extension() {
        let file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        let result = ProfileStore::load(file.path());
        assert!(matches!(result, Err(GraphError::UnsupportedFormat(ext)) if ext == "csv"));
    }
}
