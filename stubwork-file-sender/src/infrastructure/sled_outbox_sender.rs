use std::path::Path;

use uuid::Uuid;

use crate::application_service::file_sender::{SendError, Sender};

/// Sender that durably queues signed payloads in a sled outbox.
///
/// - Tree: `outbox`
/// - Key: UUID v4 string per payload
/// - Value: the signed payload bytes
pub struct SledOutboxSender {
    tree: sled::Tree,
}

impl SledOutboxSender {
    const TREE_NAME: &'static str = "outbox";

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, SendError> {
        let db = sled::open(path).map_err(|e| SendError::Storage(e.to_string()))?;
        Self::from_db(&db)
    }

    pub fn from_db(db: &sled::Db) -> Result<Self, SendError> {
        let tree = db
            .open_tree(Self::TREE_NAME)
            .map_err(|e| SendError::Storage(e.to_string()))?;
        Ok(Self { tree })
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// All queued payloads.
    ///
    /// Keys are random UUIDs, so the order does not follow send order.
    pub fn payloads(&self) -> Result<Vec<Vec<u8>>, SendError> {
        self.tree
            .iter()
            .values()
            .map(|value| {
                value
                    .map(|ivec| ivec.to_vec())
                    .map_err(|e| SendError::Storage(e.to_string()))
            })
            .collect()
    }
}

impl Sender for SledOutboxSender {
    fn try_send(&self, signed_content: &[u8]) -> Result<(), SendError> {
        let key = Uuid::new_v4().to_string();

        self.tree
            .insert(key.as_bytes(), signed_content)
            .map_err(|e| SendError::Storage(e.to_string()))?;
        self.tree
            .flush()
            .map_err(|e| SendError::Storage(e.to_string()))?;

        tracing::debug!("Queued {} bytes in outbox under {}", signed_content.len(), key);
        Ok(())
    }
}
