/*
[INPUT]:  Credentials, client configuration (base URLs, timeout, TLS, nonce)
[OUTPUT]: Configured BterClient ready for API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;
use url::Url;

use crate::auth::{Credentials, NonceProvider, UnixTimeNonce};
use crate::http::executor::{HttpExecutor, ReqwestExecutor};
use crate::http::request::{FormParams, RequestFactory};
use crate::http::response::normalize;
use crate::http::signature::RequestSigner;
use crate::http::{BterError, Result};

/// Base URL for private (trade) endpoints
pub const PRIVATE_BASE_URL: &str = "https://bter.com/api/1/private";
/// Base URL for public market data endpoints
pub const PUBLIC_BASE_URL: &str = "http://data.bter.com/api/1";
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// HTTP client configuration, fixed once the client is built
#[derive(Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    /// Pre-built client to reuse instead of creating one.
    ///
    /// When set, `strict_ssl` is not applied; TLS settings come from the agent.
    pub agent: Option<reqwest::Client>,
    pub strict_ssl: bool,
    pub private_url: String,
    pub public_url: String,
    pub nonce: Arc<dyn NonceProvider>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            agent: None,
            strict_ssl: true,
            private_url: PRIVATE_BASE_URL.to_string(),
            public_url: PUBLIC_BASE_URL.to_string(),
            nonce: Arc::new(UnixTimeNonce),
        }
    }
}

impl ClientConfig {
    pub fn with_nonce(mut self, nonce: impl NonceProvider + 'static) -> Self {
        self.nonce = Arc::new(nonce);
        self
    }

    pub fn with_agent(mut self, agent: reqwest::Client) -> Self {
        self.agent = Some(agent);
        self
    }

    /// Check both base URLs and drop a single trailing slash
    fn validated(mut self) -> Result<Self> {
        self.private_url = normalize_base_url(&self.private_url)?;
        self.public_url = normalize_base_url(&self.public_url)?;
        Ok(self)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("timeout", &self.timeout)
            .field("agent", &self.agent.is_some())
            .field("strict_ssl", &self.strict_ssl)
            .field("private_url", &self.private_url)
            .field("public_url", &self.public_url)
            .finish_non_exhaustive()
    }
}

/// Serializable option bag, using the exchange's historical option names.
///
/// Absent fields fall back to the defaults of [`ClientConfig`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientOptions {
    /// Request timeout in milliseconds
    pub timeout: Option<u64>,
    pub tapi_url: Option<String>,
    pub public_url: Option<String>,
    pub strict_ssl: Option<bool>,
}

impl ClientOptions {
    /// Resolve into a [`ClientConfig`] using the default nonce provider
    pub fn into_config(self) -> Result<ClientConfig> {
        let defaults = ClientConfig::default();
        let config = ClientConfig {
            timeout: self
                .timeout
                .map(Duration::from_millis)
                .unwrap_or(defaults.timeout),
            agent: None,
            strict_ssl: self.strict_ssl.unwrap_or(defaults.strict_ssl),
            private_url: self.tapi_url.unwrap_or(defaults.private_url),
            public_url: self.public_url.unwrap_or(defaults.public_url),
            nonce: defaults.nonce,
        };
        config.validated()
    }
}

impl TryFrom<ClientOptions> for ClientConfig {
    type Error = BterError;

    fn try_from(options: ClientOptions) -> Result<Self> {
        options.into_config()
    }
}

fn normalize_base_url(raw: &str) -> Result<String> {
    let url = Url::parse(raw)?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(BterError::Config(format!(
            "unsupported URL scheme '{}' in {raw}",
            url.scheme()
        )));
    }
    Ok(raw.strip_suffix('/').unwrap_or(raw).to_string())
}

/// Main HTTP client for the Bter API
#[derive(Clone)]
pub struct BterClient {
    requests: RequestFactory,
    executor: Arc<dyn HttpExecutor>,
    config: ClientConfig,
}

impl BterClient {
    /// Create a client with default configuration
    pub fn new(api_key: impl Into<String>, secret: impl Into<String>) -> Result<Self> {
        Self::with_config(api_key, secret, ClientConfig::default())
    }

    /// Create a client with a custom nonce provider and otherwise default configuration
    pub fn with_nonce(
        api_key: impl Into<String>,
        secret: impl Into<String>,
        nonce: impl NonceProvider + 'static,
    ) -> Result<Self> {
        Self::with_config(api_key, secret, ClientConfig::default().with_nonce(nonce))
    }

    /// Client for public endpoints only; private calls fail with `MissingCredentials`
    pub fn public() -> Result<Self> {
        Self::new("", "")
    }

    /// Create a client with custom configuration
    pub fn with_config(
        api_key: impl Into<String>,
        secret: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        let executor: Arc<dyn HttpExecutor> = match &config.agent {
            Some(agent) => Arc::new(ReqwestExecutor::with_client(agent.clone(), config.timeout)),
            None => Arc::new(ReqwestExecutor::new(config.timeout, config.strict_ssl)?),
        };
        Self::with_executor(Credentials::new(api_key, secret), config, executor)
    }

    /// Create a client on top of a custom transport
    pub fn with_executor(
        credentials: Credentials,
        config: ClientConfig,
        executor: Arc<dyn HttpExecutor>,
    ) -> Result<Self> {
        let config = config.validated()?;
        let signer = RequestSigner::new(credentials, Arc::clone(&config.nonce));
        let requests = RequestFactory::new(&config.private_url, &config.public_url, signer);

        Ok(Self {
            requests,
            executor,
            config,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn credentials(&self) -> &Credentials {
        self.requests.signer().credentials()
    }

    pub fn requests(&self) -> &RequestFactory {
        &self.requests
    }

    /// Signed POST to `{private_url}/{method}`
    pub async fn private_request(&self, method: &str, params: FormParams) -> Result<Value> {
        let request = self.requests.build_authenticated(method, params)?;
        normalize(self.executor.execute(request).await)
    }

    /// Unsigned GET to `{public_url}/{method}[/{path_suffix}]`
    pub async fn public_request(&self, method: &str, path_suffix: &str) -> Result<Value> {
        let request = self.requests.build_public(method, path_suffix);
        normalize(self.executor.execute(request).await)
    }
}

impl fmt::Debug for BterClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BterClient")
            .field("credentials", self.credentials())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
