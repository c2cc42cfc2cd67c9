use crate::application_service::file_sender::Cryptographer;
use crate::domain::Certificate;

/// Signs content with the ECDSA key held by the certificate.
///
/// The signature is computed over the Keccak-256 digest of the content and
/// appended to it: `content || r || s`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EcdsaCryptographer;

impl EcdsaCryptographer {
    pub const SIGNATURE_LEN: usize = 64;

    /// Splits a signed payload back into content and signature and checks it.
    pub fn verify(signed_content: &[u8], certificate: &Certificate) -> Option<Vec<u8>> {
        if signed_content.len() < Self::SIGNATURE_LEN {
            return None;
        }
        let (content, signature) =
            signed_content.split_at(signed_content.len() - Self::SIGNATURE_LEN);
        certificate
            .key_pair()
            .verify(content, signature)
            .then(|| content.to_vec())
    }
}

impl Cryptographer for EcdsaCryptographer {
    fn sign(&self, content: &[u8], certificate: &Certificate) -> Vec<u8> {
        let signature = certificate.key_pair().sign(content);
        let mut signed = Vec::with_capacity(content.len() + signature.len());
        signed.extend_from_slice(content);
        signed.extend_from_slice(&signature);
        signed
    }
}
