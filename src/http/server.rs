//! HTTP server setup.
//!
//! # Responsibilities
//! - Declare the route table (method + path pattern → handler)
//! - Wire up middleware (tracing, timeout, body limit, request ID)
//! - Run the server on a bound listener with graceful shutdown
//!
//! # Design Decisions
//! - Route matching, path parameter extraction, and JSON body parsing
//!   are axum's job; handlers only see validated-shape extractors
//! - The store is injected through [`AppState`] at construction, never
//!   reached through process-wide globals

use std::sync::Arc;
use std::time::Duration;

use axum::routing::{patch, post, put};
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::http::handlers;
use crate::store::TaskStore;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<TaskStore>,
}

/// HTTP server for the task API.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new server over the given store.
    pub fn new(config: &AppConfig, store: Arc<TaskStore>) -> Self {
        let state = AppState { store };
        let router = Self::build_router(config, state);
        Self { router }
    }

    /// Build the axum router: the route table plus middleware layers.
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        Router::new()
            .route(
                "/tasks",
                post(handlers::create_task).get(handlers::list_tasks),
            )
            .route(
                "/tasks/{id}",
                put(handlers::update_task).delete(handlers::delete_task),
            )
            .route("/tasks/{id}/complete", patch(handlers::complete_task))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(RequestBodyLimitLayer::new(config.limits.max_body_bytes))
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server until the shutdown signal fires, then drain
    /// in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
