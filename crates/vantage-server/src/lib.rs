//! Server assembly: routers, the header gate, and failure rendering.

mod docs;
mod fallback;
mod gate;
mod health;
mod render;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Router, routing};
use tower_http::trace::TraceLayer;
use vantage_catalog::{CatalogState, catalog_router};
use vantage_config::Config;

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    pub fn new(config: Config) -> Self {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 8080)));

        let state = CatalogState::new();
        let docs_base: Arc<str> = config.docs.base_url.into();
        let gate_config = Arc::new(config.gate);

        let mut app = Router::new()
            .route("/health", routing::get(health::health_handler))
            .route("/api/docs/errors", routing::get(docs::error_catalog_handler))
            .merge(catalog_router(state))
            .fallback(fallback::endpoint_not_found);

        // Layers, innermost first. The renderer is added after the gate
        // so it wraps it: gate rejections get the same error-document
        // treatment as handler failures.
        app = app.layer(axum::middleware::from_fn(move |req, next| {
            let gate_config = Arc::clone(&gate_config);
            async move { gate::gate_middleware(gate_config, req, next).await }
        }));

        app = app.layer(axum::middleware::from_fn(move |req, next| {
            let docs_base = Arc::clone(&docs_base);
            async move { render::render_failure(docs_base, req, next).await }
        }));

        app = app.layer(TraceLayer::new_for_http());

        Self {
            router: app,
            listen_address,
        }
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}
