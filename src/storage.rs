use crate::error::Result;
use crate::index::{ContentIndex, IndexSnapshot, LocationIndex};
use sled::Db;
use std::path::Path;

const SNAPSHOT_TREE: &str = "snapshot";
const CONTENT_KEY: &[u8] = b"content_index";
const LOCATIONS_KEY: &[u8] = b"location_index";

/// Durable storage for index snapshots. The two maps are serialized
/// separately under fixed keys so either can be inspected on its own, but
/// they are always written and loaded as a pair.
pub struct Storage {
    db: Db,
}

impl Storage {
    /// Open or create a storage database
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let db = sled::open(path)?;
        Ok(Self { db })
    }

    /// Create an in-memory database (for testing)
    pub fn in_memory() -> Result<Self> {
        let config = sled::Config::new().temporary(true);
        let db = config.open()?;
        Ok(Self { db })
    }

    /// Persist both indices and flush to disk
    pub fn save_snapshot(&self, snapshot: &IndexSnapshot) -> Result<()> {
        let tree = self.db.open_tree(SNAPSHOT_TREE)?;
        tree.insert(CONTENT_KEY, bincode::serialize(&snapshot.content)?)?;
        tree.insert(LOCATIONS_KEY, bincode::serialize(&snapshot.locations)?)?;
        tree.flush()?;
        Ok(())
    }

    /// Load the persisted snapshot, if one was ever saved
    pub fn load_snapshot(&self) -> Result<Option<IndexSnapshot>> {
        let tree = self.db.open_tree(SNAPSHOT_TREE)?;
        let (Some(content_bytes), Some(location_bytes)) =
            (tree.get(CONTENT_KEY)?, tree.get(LOCATIONS_KEY)?)
        else {
            return Ok(None);
        };

        let content: ContentIndex = bincode::deserialize(&content_bytes)?;
        let locations: LocationIndex = bincode::deserialize(&location_bytes)?;
        Ok(Some(IndexSnapshot { content, locations }))
    }
}
