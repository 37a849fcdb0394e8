use std::collections::HashSet;

use thiserror::Error;

use super::record::Project;

/// Built-in portfolio records, embedded at compile time.
const SEED_JSON: &[u8] = include_bytes!("../../assets/projects.json");

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid project JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("project at index {index} has an empty title")]
    EmptyTitle { index: usize },
    #[error("duplicate project title: {title:?}")]
    DuplicateTitle { title: String },
}

/// The immutable, ordered project store. Built once at startup and shared
/// read-only for the lifetime of the page.
#[derive(Debug, Clone)]
pub struct ProjectStore {
    projects: Vec<Project>,
}

impl ProjectStore {
    /// Parse a store from JSON bytes (an array of project objects) and
    /// validate the title invariants.
    pub fn from_json(data: &[u8]) -> Result<Self, StoreError> {
        let projects: Vec<Project> = serde_json::from_slice(data)?;

        let mut seen: HashSet<&str> = HashSet::with_capacity(projects.len());
        for (index, project) in projects.iter().enumerate() {
            if project.title.is_empty() {
                return Err(StoreError::EmptyTitle { index });
            }
            if !seen.insert(&project.title) {
                return Err(StoreError::DuplicateTitle {
                    title: project.title.clone(),
                });
            }
        }

        Ok(Self { projects })
    }

    /// The five built-in portfolio records.
    pub fn seed() -> Result<Self, StoreError> {
        Self::from_json(SEED_JSON)
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}
