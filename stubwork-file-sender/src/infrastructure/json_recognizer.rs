use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application_service::file_sender::Recognizer;
use crate::domain::{Document, File};

/// Wire shape of a document file.
///
/// ```json
/// { "format": "4.0", "created": "2024-05-15T12:00:00Z", "content": "aGVsbG8=" }
/// ```
#[derive(Debug, Serialize, Deserialize)]
struct DocumentEnvelope {
    format: String,
    created: DateTime<Utc>,
    /// base64 (standard alphabet) encoded document body.
    content: String,
}

/// Recognizes files whose content is a JSON document envelope.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDocumentRecognizer;

impl JsonDocumentRecognizer {
    /// Renders `document` as a file this recognizer accepts.
    pub fn to_file(document: &Document) -> Result<File, serde_json::Error> {
        let envelope = DocumentEnvelope {
            format: document.format().to_string(),
            created: document.created(),
            content: BASE64_STANDARD.encode(document.content()),
        };
        let content = serde_json::to_vec_pretty(&envelope)?;
        Ok(File::new(document.name(), content))
    }
}

impl Recognizer for JsonDocumentRecognizer {
    fn try_recognize(&self, file: &File) -> Option<Document> {
        let envelope: DocumentEnvelope = match serde_json::from_slice(file.content()) {
            Ok(envelope) => envelope,
            Err(e) => {
                tracing::debug!("File {} is not a JSON document: {}", file.name(), e);
                return None;
            }
        };

        let content = match BASE64_STANDARD.decode(&envelope.content) {
            Ok(content) => content,
            Err(e) => {
                tracing::debug!("File {} has invalid base64 content: {}", file.name(), e);
                return None;
            }
        };

        Some(Document::new(
            file.name(),
            content,
            envelope.created,
            envelope.format,
        ))
    }
}
