//! Url line registry and duplicate grouping
//!
//! The registry maps each trimmed `url:` line to the ordered sequence of
//! occurrences that declared it. It is built incrementally while files are
//! scanned and lives only for the duration of one scan invocation.

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::core::types::UrlOccurrence;

/// Mapping from trimmed `url:` line text to the occurrences that declared it.
///
/// Insertion order within an entry is preserved for reporting. An entry with
/// two or more occurrences denotes a duplicate group; a file that repeats the
/// same line internally is flagged just like two files sharing it.
#[derive(Debug, Default)]
pub struct UrlRegistry {
    entries: FxHashMap<String, Vec<UrlOccurrence>>,
}

/// A `url:` line declared more than once, with every declaration site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateGroup {
    /// The shared trimmed line text
    pub text: String,
    /// Every occurrence of the line, in scan order
    pub occurrences: Vec<UrlOccurrence>,
}

impl DuplicateGroup {
    /// Get the shared line text as a string slice.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// File names owning this line, in scan order. A file appears once per
    /// occurrence, so a file repeating the line is listed repeatedly.
    pub fn file_names(&self) -> Vec<&str> {
        self.occurrences.iter().map(|occ| occ.file_name()).collect()
    }
}

impl UrlRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one occurrence under its exact trimmed line text, creating
    /// the entry if absent.
    pub fn insert(&mut self, occurrence: UrlOccurrence) {
        self.entries
            .entry(occurrence.text().to_string())
            .or_default()
            .push(occurrence);
    }

    /// Number of distinct line values registered.
    pub fn unique_count(&self) -> usize {
        self.entries.len()
    }

    /// Total number of registered occurrences.
    pub fn total_occurrences(&self) -> usize {
        self.entries.values().map(|occs| occs.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Collect every entry declared more than once.
    ///
    /// Groups are sorted by line text so repeated scans over an unchanged
    /// directory produce identical output.
    pub fn duplicate_groups(&self) -> Vec<DuplicateGroup> {
        let mut groups: Vec<DuplicateGroup> = self
            .entries
            .iter()
            .filter(|(_, occurrences)| occurrences.len() > 1)
            .map(|(text, occurrences)| DuplicateGroup {
                text: text.clone(),
                occurrences: occurrences.clone(),
            })
            .collect();

        groups.sort_by(|a, b| a.text.cmp(&b.text));
        groups
    }
}

impl FromIterator<UrlOccurrence> for UrlRegistry {
    fn from_iter<I: IntoIterator<Item = UrlOccurrence>>(iter: I) -> Self {
        let mut registry = UrlRegistry::new();
        for occurrence in iter {
            registry.insert(occurrence);
        }
        registry
    }
}
