use chrono::{DateTime, Utc};

/// Structured interpretation of a `File` produced by a recognizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    name: String,
    content: Vec<u8>,
    created: DateTime<Utc>,
    format: String,
}

impl Document {
    pub fn new(
        name: impl Into<String>,
        content: Vec<u8>,
        created: DateTime<Utc>,
        format: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            content,
            created,
            format: format.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    /// Format version string, e.g. `"4.0"`.
    pub fn format(&self) -> &str {
        &self.format
    }
}
