/*
[INPUT]:  API secret and canonical form-encoded payload
[OUTPUT]: Lowercase hex HMAC-SHA512 signatures (SIGN header)
[POS]:    Auth layer - cryptographic signing for private API requests
[UPDATE]: When changing signing algorithm or signature encoding
*/

use hmac::{Hmac, Mac};
use sha2::Sha512;

type HmacSha512 = Hmac<Sha512>;

/// HMAC-SHA512 signer for private API request bodies
#[derive(Clone)]
pub struct HmacSigner {
    secret: String,
}

impl HmacSigner {
    /// Create a signer keyed by the given API secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Sign a canonical payload and return the lowercase hex digest
    pub fn sign(&self, payload: &str) -> String {
        sign(&self.secret, payload)
    }

    /// Check a hex signature against a payload
    pub fn verify(&self, payload: &str, signature: &str) -> bool {
        let Ok(expected) = hex::decode(signature) else {
            return false;
        };
        let mut mac = new_mac(&self.secret);
        mac.update(payload.as_bytes());
        mac.verify_slice(&expected).is_ok()
    }
}

impl std::fmt::Debug for HmacSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HmacSigner")
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Sign `payload` with HMAC-SHA512 keyed by `secret`.
///
/// Output is always 128 lowercase hex characters.
pub fn sign(secret: &str, payload: &str) -> String {
    let mut mac = new_mac(secret);
    mac.update(payload.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

fn new_mac(secret: &str) -> HmacSha512 {
    HmacSha512::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size")
}
