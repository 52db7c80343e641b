use crate::document::Email;
use crate::index::{ContentIndex, IndexSnapshot, LocationIndex};
use crate::tokenizer::Tokenizer;

/// Single-writer index construction: owns both indices for the duration of
/// a build pass, then hands them off as one snapshot. The corpus walker
/// feeds documents in sequentially; nothing else mutates the maps.
pub struct IndexBuilder {
    tokenizer: Tokenizer,
    content: ContentIndex,
    locations: LocationIndex,
}

impl IndexBuilder {
    pub fn new() -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            content: ContentIndex::new(),
            locations: LocationIndex::new(),
        }
    }

    /// Ingest one raw document with its storage location.
    ///
    /// Returns `false` when the document has no extractable message id; such
    /// documents are skipped entirely and contribute neither tokens nor a
    /// location entry. The id is registered in the location index before any
    /// token is written, so every id reachable through the content index has
    /// a location.
    ///
    /// Safe to call repeatedly for the same document: token lists never gain
    /// duplicate ids, and the location entry is simply overwritten.
    pub fn ingest(&mut self, raw: &str, location: &str) -> bool {
        let email = match Email::parse(raw) {
            Some(email) => email,
            None => return false,
        };

        self.locations.insert(&email.message_id, location);
        for token in self.tokenizer.analyze_unique(&email.body) {
            self.content.insert(&token, &email.message_id);
        }
        true
    }

    /// Number of documents registered so far
    pub fn document_count(&self) -> usize {
        self.locations.len()
    }

    /// Consume the builder and publish the finished snapshot
    pub fn finish(self) -> IndexSnapshot {
        IndexSnapshot {
            content: self.content,
            locations: self.locations,
        }
    }
}

impl Default for IndexBuilder {
    fn default() -> Self {
        Self::new()
    }
}
