/*
[INPUT]:  Request descriptors, timeout and transport settings
[OUTPUT]: Raw status code and body, or a transport error
[POS]:    HTTP layer - pluggable transport boundary
[UPDATE]: When transport options change
*/

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::http::Result;
use crate::http::request::RequestDescriptor;
use crate::http::response::RawResponse;

/// Executes a request and returns the raw outcome.
///
/// Implementations must not interpret the status code or body.
#[async_trait]
pub trait HttpExecutor: Send + Sync {
    async fn execute(&self, request: RequestDescriptor) -> Result<RawResponse>;
}

/// `reqwest` backed executor
#[derive(Debug, Clone)]
pub struct ReqwestExecutor {
    client: Client,
    timeout: Duration,
}

impl ReqwestExecutor {
    /// Build a dedicated client; certificate validation is skipped when
    /// `strict_ssl` is false.
    pub fn new(timeout: Duration, strict_ssl: bool) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .danger_accept_invalid_certs(!strict_ssl)
            .build()?;

        Ok(Self { client, timeout })
    }

    /// Reuse an existing client (shared connection pool)
    pub fn with_client(client: Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }
}

#[async_trait]
impl HttpExecutor for ReqwestExecutor {
    async fn execute(&self, request: RequestDescriptor) -> Result<RawResponse> {
        debug!(method = %request.method, url = %request.url, "dispatching request");

        let mut builder = self
            .client
            .request(request.method, &request.url)
            .timeout(self.timeout);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!(status, bytes = body.len(), "received response");

        Ok(RawResponse { status, body })
    }
}
