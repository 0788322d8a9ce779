use gcp_devops_demo::app;
use gcp_devops_demo::models::AppConfig;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().expect("Invalid configuration");

    // Development gets per-request debug logs; RUST_LOG still wins.
    let default_filter = if config.is_development() {
        "gcp_devops_demo=debug,tower_http=debug"
    } else {
        "gcp_devops_demo=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        port = config.port,
        version = %config.version,
        environment = %config.environment,
        "Starting server"
    );

    let listener = TcpListener::bind(("0.0.0.0", config.port))
        .await
        .expect("Failed to bind server port");

    axum::serve(listener, app(config).into_make_service())
        .await
        .expect("Server error");
}
