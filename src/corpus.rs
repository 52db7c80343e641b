use crate::builder::IndexBuilder;
use crate::error::Result;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Outcome counters for one corpus build pass
#[derive(Debug, Default, Clone, Copy)]
pub struct CorpusStats {
    /// Documents added to the index
    pub indexed: usize,
    /// Documents without an extractable message id
    pub skipped: usize,
    /// Files that could not be read
    pub failed: usize,
}

/// Recursively walk `root` and feed every regular file into the builder,
/// using the file path as the document's storage location.
///
/// Per-file failures never abort the pass: unreadable files are logged and
/// counted, documents without a message id are skipped silently. Mail
/// corpora are not uniformly UTF-8, so file contents are read lossily.
pub fn build_from_corpus(root: &Path, builder: &mut IndexBuilder) -> Result<CorpusStats> {
    let mut stats = CorpusStats::default();

    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!(%err, "failed to walk corpus entry");
                stats.failed += 1;
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let raw = match fs::read(path) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "failed to read corpus file");
                stats.failed += 1;
                continue;
            }
        };

        if builder.ingest(&raw, &path.display().to_string()) {
            stats.indexed += 1;
        } else {
            tracing::debug!(path = %path.display(), "no message id, document skipped");
            stats.skipped += 1;
        }
    }

    tracing::info!(
        indexed = stats.indexed,
        skipped = stats.skipped,
        failed = stats.failed,
        "corpus build pass complete"
    );
    Ok(stats)
}
