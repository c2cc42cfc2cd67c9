use chrono::{DateTime, Utc};

use crate::domain::file::File;

/// Why a file was not sent.
///
/// Every variant counts as "skipped"; the reason only adds detail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SkipReason {
    #[error("file was not recognized as a document")]
    NotRecognized,
    #[error("unsupported document format: {0}")]
    UnsupportedFormat(String),
    #[error("document created at {created} is outdated")]
    Outdated { created: DateTime<Utc> },
    #[error("send failed: {0}")]
    SendFailed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub file: File,
    pub reason: SkipReason,
}

/// Outcome of sending a batch of files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendReport {
    sent: usize,
    skipped: Vec<SkippedFile>,
}

impl SendReport {
    pub(crate) fn record_sent(&mut self) {
        self.sent += 1;
    }

    pub(crate) fn record_skipped(&mut self, file: File, reason: SkipReason) {
        self.skipped.push(SkippedFile { file, reason });
    }

    pub fn sent_count(&self) -> usize {
        self.sent
    }

    pub fn skipped(&self) -> &[SkippedFile] {
        &self.skipped
    }

    pub fn skipped_files(&self) -> Vec<&File> {
        self.skipped.iter().map(|skipped| &skipped.file).collect()
    }

    pub fn all_sent(&self) -> bool {
        self.skipped.is_empty()
    }
}
