use chrono::{DateTime, Utc};

use crate::domain::{Certificate, Document, File, SkipReason};

/// Turns a raw file into a structured document, if it is one.
pub trait Recognizer {
    fn try_recognize(&self, file: &File) -> Option<Document>;
}

/// Signs document content with the sender's certificate.
pub trait Cryptographer {
    fn sign(&self, content: &[u8], certificate: &Certificate) -> Vec<u8>;
}

/// Transmits signed content.
pub trait Sender {
    fn try_send(&self, signed_content: &[u8]) -> Result<(), SendError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SendError {
    #[error("network error: {0}")]
    Network(String),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("rejected: {0}")]
    Rejected(String),
}

/// Source of the current time.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Decides whether a recognized document may be sent.
pub trait DocumentCheck {
    fn check(&self, document: &Document) -> Result<(), SkipReason>;
}

/// Sends one file end to end.
pub trait SingleFileSend {
    fn try_send_file(&self, file: &File, certificate: &Certificate) -> Result<(), SkipReason>;
}
