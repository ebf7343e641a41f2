//! Application startup and lifecycle management.

use crate::config::DnaConfig;
use crate::handlers;
use crate::services::providers::openai::{OpenAiConfig, OpenAiTextProvider};
use crate::services::providers::TextProvider;
use axum::{
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: DnaConfig,
    /// Absent when no API key is configured; the explain endpoint then
    /// reports 501 instead of attempting the call.
    pub text_provider: Option<Arc<dyn TextProvider>>,
}

/// Build the router. CORS is wide open with credentials disallowed, which is
/// appropriate only because every endpoint is public and stateless.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/gc", post(handlers::sequence::gc))
        .route("/revcomp", post(handlers::sequence::revcomp))
        .route("/explain", post(handlers::explain::explain))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: DnaConfig) -> Result<Self, AppError> {
        let text_provider: Option<Arc<dyn TextProvider>> = match &config.llm.api_key {
            Some(api_key) => {
                tracing::info!(model = %config.llm.model, "Initialized OpenAI text provider");
                Some(Arc::new(OpenAiTextProvider::new(OpenAiConfig {
                    api_key: api_key.clone(),
                    model: config.llm.model.clone(),
                })))
            }
            None => {
                tracing::info!("OPENAI_API_KEY not set; explain endpoint disabled");
                None
            }
        };

        let state = AppState {
            config: config.clone(),
            text_provider,
        };

        // Bind HTTP listener (port 0 = random port for testing)
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("DNA service: HTTP on port {}", port);

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);
        axum::serve(self.listener, router).await
    }
}
