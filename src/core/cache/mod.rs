//! Per-project key cache.
//!
//! ## Module Structure
//!
//! - `store`: persistence backends (`CacheStore`, `JsonFileStore`, `MemoryStore`)

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::core::{KeyEntry, dedup_by_rendered};

pub mod store;

pub use store::{CacheStore, JsonFileStore, MemoryStore};

/// Mapping from project identifier to its most recently extracted keys.
///
/// Entries never expire; they change only through `refresh_all` and
/// `refresh_file`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCache {
    #[serde(default)]
    projects: BTreeMap<String, Vec<KeyEntry>>,
}

impl ProjectCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached keys for a project, empty when the project was never scanned.
    pub fn get(&self, project_id: &str) -> &[KeyEntry] {
        self.projects
            .get(project_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn contains(&self, project_id: &str) -> bool {
        self.projects.contains_key(project_id)
    }

    pub fn project_ids(&self) -> impl Iterator<Item = &str> {
        self.projects.keys().map(String::as_str)
    }

    /// Replace everything cached for `project_id`.
    pub fn refresh_all(&mut self, project_id: impl Into<String>, entries: Vec<KeyEntry>) {
        self.projects.insert(project_id.into(), entries);
    }

    /// Patch the cache with the keys of one re-parsed file.
    ///
    /// Cached keys sharing a first path segment with any of `file_entries` are
    /// dropped, then `file_entries` are appended and the list is de-duplicated.
    /// Returns false (and changes nothing) if the project has no cache yet.
    pub fn refresh_file(
        &mut self,
        project_id: &str,
        file_entries: Vec<KeyEntry>,
        separator: &str,
    ) -> bool {
        let Some(cached) = self.projects.get_mut(project_id) else {
            return false;
        };

        let namespaces: HashSet<String> = file_entries
            .iter()
            .map(|entry| entry.first_segment().to_string())
            .collect();

        let mut merged: Vec<KeyEntry> = std::mem::take(cached)
            .into_iter()
            .filter(|entry| !namespaces.contains(entry.first_segment()))
            .collect();
        merged.extend(file_entries);

        *cached = dedup_by_rendered(merged, separator);
        true
    }
}
