/*
[INPUT]:  Ordered form parameters, credentials and nonce provider
[OUTPUT]: Canonical form body plus its SIGN / KEY header values
[POS]:    HTTP layer - request signing for private endpoints
[UPDATE]: When changing signing algorithm or header format
*/

use std::sync::Arc;

use tracing::trace;

use crate::auth::{Credentials, HmacSigner, NonceProvider};
use crate::http::request::FormParams;
use crate::http::{BterError, Result};

/// Body and headers produced for one private request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedPayload {
    /// Canonical form, sent verbatim as the request body
    pub body: String,
    /// Lowercase hex HMAC-SHA512 of `body`
    pub signature: String,
    pub api_key: String,
}

/// Signs private request parameters
#[derive(Clone)]
pub struct RequestSigner {
    credentials: Credentials,
    signer: HmacSigner,
    nonce: Arc<dyn NonceProvider>,
}

impl RequestSigner {
    pub fn new(credentials: Credentials, nonce: Arc<dyn NonceProvider>) -> Self {
        let signer = HmacSigner::new(credentials.secret());
        Self {
            credentials,
            signer,
            nonce,
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Append a fresh nonce, encode and sign.
    ///
    /// Fails with [`BterError::MissingCredentials`] before the nonce provider
    /// is consulted when either the key or the secret is empty.
    pub fn sign_params(&self, mut params: FormParams) -> Result<SignedPayload> {
        if !self.credentials.is_complete() {
            return Err(BterError::MissingCredentials);
        }

        let nonce = self.nonce.next_nonce();
        trace!(nonce, "assigned request nonce");
        params.set("nonce", nonce);

        let body = params.encode();
        let signature = self.signer.sign(&body);

        Ok(SignedPayload {
            body,
            signature,
            api_key: self.credentials.api_key().to_string(),
        })
    }
}

impl std::fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestSigner")
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}
