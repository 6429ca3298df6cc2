/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Bter adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{CounterNonce, Credentials, HmacSigner, NonceProvider, UnixTimeNonce};

// Re-export commonly used types from http
pub use http::{
    BterClient,
    BterError,
    ClientConfig,
    ClientOptions,
    ErrorKind,
    FormParams,
    HttpExecutor,
    RawResponse,
    RequestDescriptor,
    Result,
};

// Re-export all types
pub use types::*;
