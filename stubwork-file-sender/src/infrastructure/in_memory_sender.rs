use std::sync::{Arc, Mutex};

use crate::application_service::file_sender::{SendError, Sender};

/// Sender that keeps every accepted payload in process memory.
///
/// Clones share the same buffer, so a caller can keep one handle for inspection.
#[derive(Clone, Default)]
pub struct InMemorySender {
    sent: Arc<Mutex<Vec<Vec<u8>>>>,
    reject_all: bool,
}

impl InMemorySender {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sender whose every attempt fails.
    pub fn rejecting() -> Self {
        Self {
            reject_all: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.sent
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl Sender for InMemorySender {
    fn try_send(&self, signed_content: &[u8]) -> Result<(), SendError> {
        if self.reject_all {
            return Err(SendError::Rejected("sender is configured to reject".into()));
        }

        let mut guard = self
            .sent
            .lock()
            .map_err(|e| SendError::Storage(e.to_string()))?;
        guard.push(signed_content.to_vec());
        Ok(())
    }
}
