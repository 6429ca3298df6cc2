/*
[INPUT]:  API key, secret and nonce configuration
[OUTPUT]: Credentials, HMAC signatures and nonce values
[POS]:    Auth layer - primitives for signing private API requests
[UPDATE]: When signing algorithm or nonce strategy changes
*/

pub mod credentials;
pub mod nonce;
pub mod signer;

pub use credentials::Credentials;
pub use nonce::{CounterNonce, NonceProvider, UnixTimeNonce};
pub use signer::HmacSigner;
