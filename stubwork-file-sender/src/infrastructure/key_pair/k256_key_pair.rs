use k256::ecdsa::signature::{DigestSigner, DigestVerifier};
use k256::ecdsa::{Signature, SigningKey, VerifyingKey};
use k256::elliptic_curve::rand_core::OsRng;
use sha3::{Digest, Keccak256};

#[derive(Clone)]
pub struct K256KeyPair {
    secret_key: SigningKey,
    public_key: VerifyingKey,
}

impl K256KeyPair {
    pub fn secret_key(&self) -> &SigningKey {
        &self.secret_key
    }

    pub fn public_key(&self) -> &VerifyingKey {
        &self.public_key
    }

    pub(crate) fn generate() -> K256KeyPair {
        let secret_key = SigningKey::random(&mut OsRng);
        let public_key = VerifyingKey::from(&secret_key);
        K256KeyPair {
            secret_key,
            public_key,
        }
    }

    pub fn public_key_bytes(&self) -> Vec<u8> {
        self.public_key.to_encoded_point(false).as_bytes().to_vec()
    }

    pub fn sign(&self, message: &[u8]) -> Vec<u8> {
        let signature: Signature = self
            .secret_key
            .sign_digest(Keccak256::new_with_prefix(message));
        signature.to_bytes().to_vec()
    }

    pub fn verify(&self, message: &[u8], signature: &[u8]) -> bool {
        let Ok(signature) = Signature::from_slice(signature) else {
            return false;
        };
        self.public_key
            .verify_digest(Keccak256::new_with_prefix(message), &signature)
            .is_ok()
    }
}

impl PartialEq for K256KeyPair {
    fn eq(&self, other: &Self) -> bool {
        self.secret_key == other.secret_key
    }
}
