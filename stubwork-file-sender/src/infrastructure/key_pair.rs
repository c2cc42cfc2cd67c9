pub mod k256_key_pair;
pub mod p256_key_pair;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::infrastructure::key_pair::k256_key_pair::K256KeyPair;
use crate::infrastructure::key_pair::p256_key_pair::P256KeyPair;

#[derive(Clone, PartialEq)]
pub enum KeyPair {
    K256KeyPair(K256KeyPair),
    P256KeyPair(P256KeyPair),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyAlgorithm {
    #[default]
    K256,
    P256,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported key algorithm: {0}")]
pub struct UnknownKeyAlgorithm(pub String);

impl FromStr for KeyAlgorithm {
    type Err = UnknownKeyAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "K256" => Ok(KeyAlgorithm::K256),
            "P256" => Ok(KeyAlgorithm::P256),
            _ => Err(UnknownKeyAlgorithm(s.to_string())),
        }
    }
}

impl KeyPair {
    pub fn generate(algorithm: KeyAlgorithm) -> KeyPair {
        match algorithm {
            KeyAlgorithm::K256 => KeyPair::K256KeyPair(K256KeyPair::generate()),
            KeyAlgorithm::P256 => KeyPair::P256KeyPair(P256KeyPair::generate()),
        }
    }

    pub fn algorithm(&self) -> KeyAlgorithm {
        match self {
            KeyPair::K256KeyPair(_) => KeyAlgorithm::K256,
            KeyPair::P256KeyPair(_) => KeyAlgorithm::P256,
        }
    }

    /// Uncompressed SEC1 public key (65 bytes).
    pub fn public_key_bytes(&self) -> Vec<u8> {
        match self {
            KeyPair::K256KeyPair(k) => k.public_key_bytes(),
            KeyPair::P256KeyPair(k) => k.public_key_bytes(),
        }
    }

    /// Signs the Keccak-256 digest of `message`, returning the fixed-size `r || s` encoding.
    pub fn sign(&self, message: &[u8]) -> Vec<u8> {
        match self {
            KeyPair::K256KeyPair(k) => k.sign(message),
            KeyPair::P256KeyPair(k) => k.sign(message),
        }
    }

    pub fn verify(&self, message: &[u8], signature: &[u8]) -> bool {
        match self {
            KeyPair::K256KeyPair(k) => k.verify(message, signature),
            KeyPair::P256KeyPair(k) => k.verify(message, signature),
        }
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyPair({:?})", self.algorithm())
    }
}

#[cfg(test)]
mod key_pair_tests {
    use super::*;

    #[test]
    fn parse_algorithm_is_case_insensitive() {
        assert_eq!("k256".parse::<KeyAlgorithm>(), Ok(KeyAlgorithm::K256));
        assert_eq!("P256".parse::<KeyAlgorithm>(), Ok(KeyAlgorithm::P256));
        assert!("rsa".parse::<KeyAlgorithm>().is_err());
    }

    #[test]
    fn unknown_algorithm_error_keeps_input_as_given() {
        assert_eq!(
            "rsa".parse::<KeyAlgorithm>(),
            Err(UnknownKeyAlgorithm("rsa".to_string()))
        );
        assert_eq!(
            "Ed25519".parse::<KeyAlgorithm>().unwrap_err().to_string(),
            "unsupported key algorithm: Ed25519"
        );
    }

    #[test]
    fn generate_matches_algorithm() {
        assert_eq!(
            KeyPair::generate(KeyAlgorithm::K256).algorithm(),
            KeyAlgorithm::K256
        );
        assert_eq!(
            KeyPair::generate(KeyAlgorithm::P256).algorithm(),
            KeyAlgorithm::P256
        );
    }

    #[test]
    fn signature_from_other_key_does_not_verify() {
        let signer = KeyPair::generate(KeyAlgorithm::K256);
        let other = KeyPair::generate(KeyAlgorithm::K256);

        let sig = signer.sign(b"payload");

        assert!(signer.verify(b"payload", &sig));
        assert!(!other.verify(b"payload", &sig));
    }
}
