//! Detail panel view model
//!
//! Turns the current [`Selection`] into what the side panel shows. Click
//! payloads are not validated, so endpoint names resolve to `None` when an
//! id is unknown to the store.

use crate::graph::{ProfileId, ProfileStore};
use crate::session::Selection;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DetailView {
    /// Nothing selected
    Placeholder { title: String, hint: String },

    #[serde(rename_all = "camelCase")]
    Profile {
        initials: String,
        id: ProfileId,
        name: String,
        education: String,
        experience: String,
        publications: Vec<String>,
    },

    #[serde(rename_all = "camelCase")]
    Connection {
        source_id: ProfileId,
        target_id: ProfileId,
        source_name: Option<String>,
        target_name: Option<String>,
        shared_publications: Vec<String>,
    },
}

impl DetailView {
    pub fn from_selection(selection: &Selection, store: &ProfileStore) -> Self {
        match selection {
            Selection::Empty => DetailView::Placeholder {
                title: "Network Explorer".to_string(),
                hint: "Search for an HCP by name to view their network, or click on any node/link in the graph."
                    .to_string(),
            },
            Selection::NodeSelected(profile) => DetailView::Profile {
                initials: profile.initials(),
                id: profile.id.clone(),
                name: profile.name.clone(),
                education: profile.education.clone(),
                experience: profile.experience.clone(),
                publications: profile.publications.clone(),
            },
            Selection::EdgeSelected(edge) => DetailView::Connection {
                source_id: edge.source.clone(),
                target_id: edge.target.clone(),
                source_name: store.get(&edge.source).map(|p| p.name.clone()),
                target_name: store.get(&edge.target).map(|p| p.name.clone()),
                shared_publications: edge.shared_publications.clone(),
            },
        }
    }
}

impl fmt::Display for DetailView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetailView::Placeholder { title, hint } => {
                writeln!(f, "{}", title)?;
                write!(f, "{}", hint)
            }
            DetailView::Profile {
                initials,
                id,
                name,
                education,
                experience,
                publications,
            } => {
                writeln!(f, "HCP Profile")?;
                writeln!(f, "[{}] {} ({})", initials, name, id)?;
                writeln!(f, "Education:       {}", education)?;
                writeln!(f, "Work Experience: {}", experience)?;
                write!(f, "Publications:")?;
                for publication in publications {
                    write!(f, "\n  - {}", publication)?;
                }
                Ok(())
            }
            DetailView::Connection {
                source_name,
                target_name,
                shared_publications,
                ..
            } => {
                writeln!(f, "Connection Details")?;
                writeln!(
                    f,
                    "{} <-> {}",
                    source_name.as_deref().unwrap_or("?"),
                    target_name.as_deref().unwrap_or("?")
                )?;
                write!(f, "Shared Publications:")?;
                if shared_publications.is_empty() {
                    write!(f, "\n  No shared publications.")?;
                }
                for publication in shared_publications {
                    write!(f, "\n  - {}", publication)?;
                }
                Ok(())
            }
        }
    }
}
