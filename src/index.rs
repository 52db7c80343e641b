use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Inverted index: token -> list of document IDs.
///
/// Keys are always lowercase and non-empty; no token's list ever holds the
/// same document id twice.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ContentIndex {
    index: HashMap<String, Vec<String>>,
}

impl ContentIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `doc_id` to the token's list unless already present.
    /// Repeated insertion of the same pair is a no-op, which keeps
    /// re-ingestion of a document idempotent.
    pub fn insert(&mut self, token: &str, doc_id: &str) {
        let doc_list = self.index.entry(token.to_string()).or_default();
        if !doc_list.iter().any(|id| id == doc_id) {
            doc_list.push(doc_id.to_string());
        }
    }

    /// Get document IDs containing a token
    pub fn doc_ids(&self, token: &str) -> Option<&Vec<String>> {
        self.index.get(token)
    }

    /// All index keys starting with `prefix`. The caller lowercases the
    /// prefix once; keys are stored lowercase, so the comparison is
    /// case-insensitive. The empty prefix matches every key.
    pub fn prefix_matches(&self, prefix: &str) -> Vec<&str> {
        self.index
            .keys()
            .filter(|key| key.starts_with(prefix))
            .map(|key| key.as_str())
            .collect()
    }

    pub fn token_count(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    fn postings_total(&self) -> usize {
        self.index.values().map(|v| v.len()).sum()
    }
}

/// Location index: document ID -> storage location (e.g. a file path).
///
/// A later insert for the same id overwrites the earlier location
/// (last-write-wins; duplicates across source files are not treated as
/// errors).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LocationIndex {
    index: HashMap<String, String>,
}

impl LocationIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, doc_id: &str, location: &str) {
        self.index
            .insert(doc_id.to_string(), location.to_string());
    }

    pub fn get(&self, doc_id: &str) -> Option<&str> {
        self.index.get(doc_id).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

/// The two indices published together as one immutable unit: built once,
/// then swapped in for query serving and persisted as a pair.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct IndexSnapshot {
    pub content: ContentIndex,
    pub locations: LocationIndex,
}

impl IndexSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get snapshot statistics
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            total_documents: self.locations.len(),
            total_tokens: self.content.token_count(),
            avg_docs_per_token: if self.content.is_empty() {
                0.0
            } else {
                self.content.postings_total() as f64 / self.content.token_count() as f64
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct IndexStats {
    pub total_documents: usize,
    pub total_tokens: usize,
    pub avg_docs_per_token: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_is_append_if_absent() {
        let mut index = ContentIndex::new();
        index.insert("hello", "1");
        index.insert("hello", "2");
        index.insert("hello", "1");
        assert_eq!(index.doc_ids("hello").unwrap(), &["1", "2"]);
    }

    #[test]
    fn test_prefix_matches_anchored() {
        let mut index = ContentIndex::new();
        index.insert("hello", "1");
        index.insert("help", "1");
        index.insert("shell", "2");

        let mut matches = index.prefix_matches("hel");
        matches.sort();
        assert_eq!(matches, vec!["hello", "help"]);
    }

    #[test]
    fn test_empty_prefix_matches_every_key() {
        let mut index = ContentIndex::new();
        index.insert("alpha", "1");
        index.insert("beta", "2");
        assert_eq!(index.prefix_matches("").len(), 2);
    }

    #[test]
    fn test_location_last_write_wins() {
        let mut index = LocationIndex::new();
        index.insert("1", "path/a");
        index.insert("1", "path/b");
        assert_eq!(index.get("1"), Some("path/b"));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_stats() {
        let mut snapshot = IndexSnapshot::new();
        snapshot.content.insert("hello", "1");
        snapshot.content.insert("hello", "2");
        snapshot.content.insert("world", "1");
        snapshot.locations.insert("1", "a");
        snapshot.locations.insert("2", "b");

        let stats = snapshot.stats();
        assert_eq!(stats.total_documents, 2);
        assert_eq!(stats.total_tokens, 2);
        assert!((stats.avg_docs_per_token - 1.5).abs() < f64::EPSILON);
    }
}
