//! HMAC-SHA256 webhook signature verification.
//!
//! Signatures use the `sha256=<lowercase hex>` header format. The digest is
//! computed over the raw request body with the configured shared secret and
//! compared in constant time.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::SignatureError;

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the body signature.
pub const SIGNATURE_HEADER: &str = "x-hub-signature-256";

const SIGNATURE_PREFIX: &str = "sha256=";

/// Signs and verifies webhook bodies with a shared secret.
#[derive(Clone)]
pub struct SignatureVerifier {
    secret: Vec<u8>,
}

impl std::fmt::Debug for SignatureVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignatureVerifier")
            .field("secret", &"<redacted>")
            .finish()
    }
}

impl SignatureVerifier {
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self {
            secret: secret.as_ref().to_vec(),
        }
    }

    /// Returns the header value a sender would attach to `body`.
    pub fn sign(&self, body: &[u8]) -> String {
        format!("{SIGNATURE_PREFIX}{}", hex::encode(self.digest(body)))
    }

    /// Checks `header` (the raw signature header value, if any) against `body`.
    pub fn verify(&self, body: &[u8], header: Option<&str>) -> Result<(), SignatureError> {
        let header = header.ok_or(SignatureError::MissingHeader)?;
        let encoded = header
            .trim()
            .strip_prefix(SIGNATURE_PREFIX)
            .ok_or(SignatureError::MalformedHeader)?;
        let provided = hex::decode(encoded).map_err(|_| SignatureError::MalformedHeader)?;

        let expected = self.digest(body);
        if expected.len() != provided.len() {
            return Err(SignatureError::Mismatch);
        }
        if bool::from(expected.ct_eq(provided.as_slice())) {
            Ok(())
        } else {
            Err(SignatureError::Mismatch)
        }
    }

    fn digest(&self, body: &[u8]) -> Vec<u8> {
        let mut mac = <HmacSha256 as Mac>::new_from_slice(&self.secret)
            .unwrap_or_else(|_| unreachable!("HMAC accepts keys of any length"));
        mac.update(body);
        mac.finalize().into_bytes().to_vec()
    }
}

#[cfg(test)]
#[path = "signature_tests.rs"]
mod tests;
