//! Test server wrapper that starts Vantage on a random port

use std::net::SocketAddr;

use tokio_util::sync::CancellationToken;
use vantage_config::Config;
use vantage_server::Server;

use super::VALID_HEADERS;

/// A running test server instance
pub struct TestServer {
    addr: SocketAddr,
    shutdown: CancellationToken,
    client: reqwest::Client,
}

impl TestServer {
    /// Start a test server with the given configuration
    ///
    /// Binds to port 0 for automatic port assignment
    pub async fn start(config: Config) -> anyhow::Result<Self> {
        let server = Server::new(config);
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        // Bind the listener here so we know the actual port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        tokio::spawn(async move {
            axum::serve(listener, server.into_router())
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        let client = reqwest::Client::new();

        Ok(Self { addr, shutdown, client })
    }

    /// Start with the default configuration
    pub async fn start_default() -> anyhow::Result<Self> {
        Self::start(Config::default()).await
    }

    /// Base URL of the running test server
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// Get a reference to the HTTP client
    #[allow(dead_code)]
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// GET with the three required headers attached
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.get(self.url(path)))
    }

    /// POST a JSON body with the three required headers attached
    pub fn post_json(&self, path: &str, body: &serde_json::Value) -> reqwest::RequestBuilder {
        self.with_headers(self.client.post(self.url(path))).json(body)
    }

    /// PUT a JSON body with the three required headers attached
    #[allow(dead_code)]
    pub fn put_json(&self, path: &str, body: &serde_json::Value) -> reqwest::RequestBuilder {
        self.with_headers(self.client.put(self.url(path))).json(body)
    }

    /// DELETE with the three required headers attached
    #[allow(dead_code)]
    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.delete(self.url(path)))
    }

    /// GET without any of the required headers
    pub fn get_bare(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.get(self.url(path))
    }

    fn with_headers(&self, mut request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        for (name, value) in VALID_HEADERS {
            request = request.header(name, value);
        }
        request
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
