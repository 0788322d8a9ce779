#![allow(dead_code)]

use std::sync::Once;

use gcp_devops_demo::app;
use gcp_devops_demo::models::AppConfig;
use tokio::net::TcpListener;

pub fn init_tracing_once() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("gcp_devops_demo=debug")
            .with_test_writer()
            .init();
    });
}

/// A configuration with every default, as if no env var were set.
pub fn default_config() -> AppConfig {
    AppConfig {
        port: 0,
        version: "1.0.0".to_string(),
        environment: "development".to_string(),
    }
}

/// Spawns the application on a random local port and returns its address.
///
/// Returned address format: `http://127.0.0.1:8492`
pub async fn spawn_app(config: AppConfig) -> String {
    init_tracing_once();

    // Randomly choose an available port
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port at localhost");
    let port = listener.local_addr().unwrap().port();

    let server = axum::serve(listener, app(config).into_make_service());
    tokio::spawn(async move {
        server.await.expect("Test server error");
    });

    format!("http://127.0.0.1:{port}")
}
