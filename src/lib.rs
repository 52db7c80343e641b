// Re-export main components
pub mod api;
pub mod builder;
pub mod corpus;
pub mod document;
pub mod engine;
pub mod error;
pub mod index;
pub mod storage;
pub mod tokenizer;

// Re-export commonly used types
pub use builder::IndexBuilder;
pub use document::Email;
pub use engine::{SearchEngine, SearchResult};
pub use error::{Error, Result};
pub use index::{ContentIndex, IndexSnapshot, LocationIndex};
pub use storage::Storage;
pub use tokenizer::Tokenizer;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
