/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and normalized API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod executor;
pub mod private;
pub mod public;
pub mod request;
pub mod response;
pub mod signature;

pub use error::{BterError, ErrorKind, Result};
pub use executor::{HttpExecutor, ReqwestExecutor};
pub use request::{FormParams, RequestDescriptor, RequestFactory};
pub use response::{RawResponse, normalize};
pub use signature::{RequestSigner, SignedPayload};

pub use client::{BterClient, ClientConfig, ClientOptions};
