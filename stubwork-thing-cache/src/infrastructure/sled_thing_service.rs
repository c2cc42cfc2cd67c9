use std::path::Path;

use crate::domain::thing::{Thing, ThingId};
use crate::port::thing_service::{Lookup, ThingService};

#[derive(Debug, thiserror::Error)]
pub enum SledThingServiceError {
    #[error("storage error: {0}")]
    Storage(String),
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// sled-backed lookup service.
///
/// - Tree: `things`
/// - Key: the thing id as UTF-8 bytes
/// - Value: the `Thing` serialized as JSON
///
/// Read failures are reported as `Lookup::NotFound`; the cache cannot tell
/// them apart from genuine absence.
pub struct SledThingService {
    tree: sled::Tree,
}

impl SledThingService {
    const TREE_NAME: &'static str = "things";

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, SledThingServiceError> {
        let db = sled::open(path).map_err(|e| SledThingServiceError::Storage(e.to_string()))?;
        Self::from_db(&db)
    }

    pub fn from_db(db: &sled::Db) -> Result<Self, SledThingServiceError> {
        let tree = db
            .open_tree(Self::TREE_NAME)
            .map_err(|e| SledThingServiceError::Storage(e.to_string()))?;
        Ok(Self { tree })
    }

    /// Seeds or overwrites a thing in the backing store.
    pub fn put(&self, thing: &Thing) -> Result<(), SledThingServiceError> {
        let value = serde_json::to_vec(thing)
            .map_err(|e| SledThingServiceError::Serialization(e.to_string()))?;

        self.tree
            .insert(thing.id().as_str(), value)
            .map_err(|e| SledThingServiceError::Storage(e.to_string()))?;
        self.tree
            .flush()
            .map_err(|e| SledThingServiceError::Storage(e.to_string()))?;

        Ok(())
    }

    fn read(&self, id: &ThingId) -> Result<Option<Thing>, SledThingServiceError> {
        let Some(ivec) = self
            .tree
            .get(id.as_str())
            .map_err(|e| SledThingServiceError::Storage(e.to_string()))?
        else {
            return Ok(None);
        };

        let thing: Thing = serde_json::from_slice(&ivec)
            .map_err(|e| SledThingServiceError::Serialization(e.to_string()))?;
        Ok(Some(thing))
    }
}

impl ThingService for SledThingService {
    fn try_read(&self, id: &ThingId) -> Lookup {
        match self.read(id) {
            Ok(found) => found.into(),
            Err(e) => {
                tracing::warn!("Failed to read thing {}: {}", id, e);
                Lookup::NotFound
            }
        }
    }
}
