//! Shared utilities for endpoint integration tests.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use task_api::config::AppConfig;
use task_api::http::HttpServer;
use task_api::lifecycle::Shutdown;
use task_api::store::TaskStore;

/// Handle to a server spawned on an ephemeral port.
pub struct TestServer {
    pub addr: SocketAddr,
    shutdown: Shutdown,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn stop(&self) {
        self.shutdown.trigger();
    }
}

/// Start the API over the given store. The listener is bound before the
/// server task is spawned, so requests can be sent immediately.
pub async fn spawn_server(store: Arc<TaskStore>) -> TestServer {
    let config = AppConfig::default();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let receiver = shutdown.subscribe();
    let server = HttpServer::new(&config, store);

    tokio::spawn(async move {
        let _ = server.run(listener, receiver).await;
    });

    TestServer { addr, shutdown }
}
