//! Mock HTTP server setup for tests that go through the real reqwest transport.

use mockito::{Matcher, Mock, Server, ServerGuard};
use wit_lib_rust::WitClient;

/// Test fixture that owns a mock server and builds clients pointed at it.
pub struct MockServerFixture {
    pub server: ServerGuard,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = server.url();
        Self { server, base_url }
    }

    /// Client for the mock server, authenticated with [`super::TEST_TOKEN`].
    pub fn client(&self) -> WitClient {
        WitClient::builder()
            .token(super::TEST_TOKEN)
            .base_url(&self.base_url)
            .build()
            .expect("client should build")
    }

    /// JSON answer for `method path`, requiring the auth and version headers.
    pub async fn mock_json(&mut self, method: &str, path: &str, status: usize, body: &str) -> Mock {
        self.server
            .mock(method, path)
            .match_query(Matcher::Any)
            .match_header("authorization", format!("Bearer {}", super::TEST_TOKEN).as_str())
            .match_header("accept", "application/vnd.wit.20160330+json")
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }
}
