//! In-memory registry of discovered repositories

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::utils::display_name;

/// One discovered working copy and its last known branch
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepositoryEntry {
    pub location: PathBuf,
    pub branch: String,
}

impl RepositoryEntry {
    pub fn new(location: impl Into<PathBuf>, branch: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            branch: branch.into(),
        }
    }

    pub fn name(&self) -> String {
        display_name(&self.location)
    }
}

/// Location-keyed set of repositories
///
/// Only discovery replaces the contents, and only with a complete scan.
/// Branch labels are refreshed in place after branch-changing commands.
#[derive(Debug, Default)]
pub struct Registry {
    entries: BTreeMap<PathBuf, String>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swaps the entire mapping; nothing from the previous contents survives
    ///
    /// A location appearing more than once keeps its last branch.
    pub fn replace_all(&mut self, entries: impl IntoIterator<Item = RepositoryEntry>) {
        self.entries = entries
            .into_iter()
            .map(|entry| (entry.location, entry.branch))
            .collect();
    }

    /// All entries ordered by location
    pub fn get_all(&self) -> Vec<RepositoryEntry> {
        self.entries
            .iter()
            .map(|(location, branch)| RepositoryEntry::new(location.clone(), branch.clone()))
            .collect()
    }

    /// All locations ordered by location
    pub fn locations(&self) -> Vec<PathBuf> {
        self.entries.keys().cloned().collect()
    }

    pub fn get(&self, location: &Path) -> Option<&str> {
        self.entries.get(location).map(String::as_str)
    }

    /// Updates the branch of a registered location
    ///
    /// Returns `false` and changes nothing when `location` is not registered.
    pub fn update_branch(&mut self, location: &Path, branch: impl Into<String>) -> bool {
        match self.entries.get_mut(location) {
            Some(current) => {
                *current = branch.into();
                true
            }
            None => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
