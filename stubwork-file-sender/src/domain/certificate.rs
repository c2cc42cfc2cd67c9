use std::fmt;

use crate::infrastructure::key_pair::{KeyAlgorithm, KeyPair};

/// Signing identity used when sending a batch of files.
#[derive(Clone, PartialEq)]
pub struct Certificate {
    subject: String,
    key_pair: KeyPair,
}

impl Certificate {
    pub fn new(subject: impl Into<String>, key_pair: KeyPair) -> Self {
        Self {
            subject: subject.into(),
            key_pair,
        }
    }

    /// Issues a certificate backed by a freshly generated key pair.
    pub fn generate(subject: impl Into<String>, algorithm: KeyAlgorithm) -> Self {
        Self::new(subject, KeyPair::generate(algorithm))
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn key_pair(&self) -> &KeyPair {
        &self.key_pair
    }
}

impl fmt::Debug for Certificate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Certificate")
            .field("subject", &self.subject)
            .field("algorithm", &self.key_pair.algorithm())
            .finish()
    }
}
