//! Sender configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::application_service::file_sender::document_checker::{
    DEFAULT_ACCEPTED_FORMATS, DEFAULT_MAX_AGE_MONTHS,
};
use crate::application_service::file_sender::{Clock, DocumentChecker};
use crate::infrastructure::key_pair::KeyAlgorithm;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SenderConfig {
    /// Exact format strings a document may carry
    #[serde(default = "default_accepted_formats")]
    pub accepted_formats: Vec<String>,

    /// Documents older than this many calendar months are skipped
    #[serde(default = "default_max_age_months")]
    pub max_age_months: u32,

    /// Algorithm used for the signing certificate
    #[serde(default)]
    pub key_algorithm: KeyAlgorithm,

    /// Directory of the sled outbox
    #[serde(default = "default_outbox_path")]
    pub outbox_path: PathBuf,
}

impl Default for SenderConfig {
    fn default() -> Self {
        Self {
            accepted_formats: default_accepted_formats(),
            max_age_months: default_max_age_months(),
            key_algorithm: KeyAlgorithm::default(),
            outbox_path: default_outbox_path(),
        }
    }
}

fn default_accepted_formats() -> Vec<String> {
    DEFAULT_ACCEPTED_FORMATS
        .iter()
        .map(|format| format.to_string())
        .collect()
}

fn default_max_age_months() -> u32 {
    DEFAULT_MAX_AGE_MONTHS
}

fn default_outbox_path() -> PathBuf {
    PathBuf::from("outbox")
}

impl SenderConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

        Self::from_toml_str(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Document checker enforcing the configured format and age policy
    pub fn document_checker<C: Clock>(&self, clock: C) -> DocumentChecker<C> {
        DocumentChecker::with_policy(clock, self.accepted_formats.clone(), self.max_age_months)
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
}
