use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier naming a `Thing`.
///
/// Comparison is exact and case-sensitive; no normalization is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThingId(String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThingIdError {
    #[error("thing id must not be empty")]
    Empty,
}

impl ThingId {
    /// Builds an id, rejecting empty and whitespace-only input.
    pub fn parse(value: &str) -> Result<Self, ThingIdError> {
        if value.trim().is_empty() {
            return Err(ThingIdError::Empty);
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ThingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Value returned by the lookup service and held by the cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thing {
    id: ThingId,
    payload: Vec<u8>,
}

impl Thing {
    pub fn new(id: ThingId) -> Self {
        Self {
            id,
            payload: Vec::new(),
        }
    }

    pub fn with_payload(id: ThingId, payload: Vec<u8>) -> Self {
        Self { id, payload }
    }

    pub fn id(&self) -> &ThingId {
        &self.id
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keeps_value_verbatim() {
        let id = ThingId::parse(" TheDress").unwrap();
        assert_eq!(id.as_str(), " TheDress");
    }

    #[test]
    fn parse_rejects_empty_and_blank() {
        assert_eq!(ThingId::parse(""), Err(ThingIdError::Empty));
        assert_eq!(ThingId::parse("   "), Err(ThingIdError::Empty));
    }

    #[test]
    fn ids_are_case_sensitive() {
        let lower = ThingId::parse("thedress").unwrap();
        let upper = ThingId::parse("TheDress").unwrap();
        assert_ne!(lower, upper);
    }

    #[test]
    fn into_inner_returns_original_string() {
        let id = ThingId::parse("Cool Boots").unwrap();
        assert_eq!(id.to_string(), "Cool Boots");
        assert_eq!(id.into_inner(), "Cool Boots".to_string());
    }
}
