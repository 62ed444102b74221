//! HCP profile records
//!
//! Profiles are created once at load time and never mutated afterwards.

use super::types::ProfileId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A healthcare professional profile
///
/// Only `id`, `name` and `publications` are interpreted by the core;
/// `education` and `experience` are carried through for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Unique identifier for this profile
    pub id: ProfileId,

    /// Display name, matched by search
    pub name: String,

    #[serde(default)]
    pub education: String,

    #[serde(default)]
    pub experience: String,

    /// Publication titles (treated as a set, compared by exact string match)
    #[serde(default)]
    pub publications: Vec<String>,
}

impl Profile {
    /// Create a profile with no descriptive fields
    pub fn new(
        id: impl Into<ProfileId>,
        name: impl Into<String>,
        publications: Vec<String>,
    ) -> Self {
        Profile {
            id: id.into(),
            name: name.into(),
            education: String::new(),
            experience: String::new(),
            publications,
        }
    }

    pub fn with_education(mut self, education: impl Into<String>) -> Self {
        self.education = education.into();
        self
    }

    pub fn with_experience(mut self, experience: impl Into<String>) -> Self {
        self.experience = experience.into();
        self
    }

    /// Case-insensitive substring match against the name.
    ///
    /// `needle` must already be lowercased.
    pub fn name_matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }

    /// Publications shared with `other`, in this profile's order, without duplicates
    pub fn shared_publications(&self, other: &Profile) -> Vec<String> {
        let theirs: HashSet<&str> = other.publications.iter().map(String::as_str).collect();
        let mut seen = HashSet::new();

        self.publications
            .iter()
            .filter(|p| theirs.contains(p.as_str()) && seen.insert(p.as_str()))
            .cloned()
            .collect()
    }

    /// Two-letter avatar text, `"N/A"` for a blank name
    pub fn initials(&self) -> String {
        let initials: String = self.name.chars().take(2).collect::<String>().to_uppercase();
        if initials.trim().is_empty() {
            "N/A".to_string()
        } else {
            initials
        }
    }
}
