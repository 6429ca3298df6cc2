/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for bter-adapter tests

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bter_adapter::{
    BterClient, ClientConfig, Credentials, HttpExecutor, RawResponse, RequestDescriptor, Result,
};
use wiremock::MockServer;

pub const TEST_KEY: &str = "test-api-key";
pub const TEST_SECRET: &str = "test-api-secret";

/// Setup a mock HTTP server for testing
#[allow(dead_code)]
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server with a fixed nonce
#[allow(dead_code)]
pub fn mock_client(server: &MockServer, nonce: u64) -> BterClient {
    let config = ClientConfig {
        private_url: format!("{}/api/1/private", server.uri()),
        public_url: format!("{}/api/1", server.uri()),
        ..ClientConfig::default()
    }
    .with_nonce(move || nonce);
    BterClient::with_config(TEST_KEY, TEST_SECRET, config).expect("client init")
}

/// Executor that records requests and replays a canned response
#[allow(dead_code)]
pub struct RecordingExecutor {
    pub requests: Mutex<Vec<RequestDescriptor>>,
    response: RawResponse,
}

#[allow(dead_code)]
impl RecordingExecutor {
    pub fn new(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            response: RawResponse::new(status, body),
        })
    }

    pub fn recorded(&self) -> Vec<RequestDescriptor> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpExecutor for RecordingExecutor {
    async fn execute(&self, request: RequestDescriptor) -> Result<RawResponse> {
        self.requests.lock().unwrap().push(request);
        Ok(self.response.clone())
    }
}

/// Client backed by a [`RecordingExecutor`]
#[allow(dead_code)]
pub fn recording_client(
    credentials: Credentials,
    config: ClientConfig,
    executor: &Arc<RecordingExecutor>,
) -> BterClient {
    BterClient::with_executor(credentials, config, executor.clone()).expect("client init")
}
