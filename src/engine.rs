use crate::index::{IndexSnapshot, IndexStats};
use std::collections::HashSet;
use std::sync::RwLock;

/// Search result: the deduplicated storage locations of every document
/// containing a term that starts with the query.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub locations: Vec<String>,
    pub matched_terms: Vec<String>,
}

impl SearchResult {
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    fn empty() -> Self {
        Self {
            locations: Vec::new(),
            matched_terms: Vec::new(),
        }
    }
}

/// Read side of the engine. Holds a published snapshot; queries only ever
/// take the read lock, so any number of `search` calls may run concurrently
/// once a snapshot is in place. Publication (`load_snapshot`) swaps the
/// whole snapshot under the write lock; build and serve phases never
/// overlap on the same maps.
pub struct SearchEngine {
    snapshot: RwLock<IndexSnapshot>,
}

impl SearchEngine {
    pub fn new(snapshot: IndexSnapshot) -> Self {
        Self {
            snapshot: RwLock::new(snapshot),
        }
    }

    /// Create an engine with empty indices
    pub fn empty() -> Self {
        Self::new(IndexSnapshot::new())
    }

    /// Resolve a case-insensitive prefix query.
    ///
    /// Every indexed term starting with the query contributes its document
    /// ids; ids resolve to locations, deduplicated. An empty query matches
    /// every term and thus returns every indexed location. No matching term
    /// yields an empty result, which is not an error.
    pub fn search(&self, query: &str) -> SearchResult {
        let prefix = query.to_lowercase();
        let snapshot = self.snapshot.read().unwrap();

        let mut matched_terms: Vec<String> = snapshot
            .content
            .prefix_matches(&prefix)
            .into_iter()
            .map(|term| term.to_string())
            .collect();
        matched_terms.sort();

        if matched_terms.is_empty() {
            return SearchResult::empty();
        }

        let mut seen_ids: HashSet<&str> = HashSet::new();
        let mut seen_locations: HashSet<&str> = HashSet::new();
        let mut locations: Vec<String> = Vec::new();

        for term in &matched_terms {
            let Some(doc_ids) = snapshot.content.doc_ids(term) else {
                continue;
            };
            for doc_id in doc_ids {
                if !seen_ids.insert(doc_id.as_str()) {
                    continue;
                }
                match snapshot.locations.get(doc_id) {
                    Some(location) => {
                        if seen_locations.insert(location) {
                            locations.push(location.to_string());
                        }
                    }
                    // Violates the build invariant that every indexed id
                    // has a location; drop the id rather than fail the query.
                    None => {
                        tracing::warn!(doc_id = %doc_id, term = %term, "document id has no location entry");
                    }
                }
            }
        }

        SearchResult {
            locations,
            matched_terms,
        }
    }

    /// Replace the in-memory indices wholesale with a loaded snapshot
    pub fn load_snapshot(&self, snapshot: IndexSnapshot) {
        *self.snapshot.write().unwrap() = snapshot;
    }

    /// Read-only copy of the current indices, for serialization
    pub fn export_snapshot(&self) -> IndexSnapshot {
        self.snapshot.read().unwrap().clone()
    }

    /// Get index statistics
    pub fn stats(&self) -> IndexStats {
        self.snapshot.read().unwrap().stats()
    }
}
