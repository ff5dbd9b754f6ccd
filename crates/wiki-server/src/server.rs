use std::sync::Arc;

use tokio::net::TcpListener;
use wiki_store::{seed_default_documents, InMemoryRevisionStore, RevisionStore};

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;
use crate::state::AppState;

/// Wiki HTTP server.
pub struct WikiServer {
    config: ServerConfig,
    store: Arc<dyn RevisionStore>,
}

impl WikiServer {
    /// A server over a fresh in-memory store.
    pub fn new(config: ServerConfig) -> Self {
        Self::with_store(config, Arc::new(InMemoryRevisionStore::new()))
    }

    pub fn with_store(config: ServerConfig, store: Arc<dyn RevisionStore>) -> Self {
        Self { config, store }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<dyn RevisionStore> {
        &self.store
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(AppState::new(Arc::clone(&self.store)))
    }

    /// Write the sample documents if the config asks for them.
    pub fn seed(&self) -> ServerResult<usize> {
        if !self.config.seed_defaults {
            return Ok(0);
        }
        Ok(seed_default_documents(self.store.as_ref())?)
    }

    /// Seed, then serve requests until ctrl-c.
    pub async fn serve(self) -> ServerResult<()> {
        self.seed()?;
        let app = self.router();
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("wiki server listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
