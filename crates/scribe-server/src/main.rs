use std::sync::Arc;

use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use scribe_server::config::ServerConfig;
use scribe_server::state::AppState;
use scribe_server::store::BookmarkStore;
use scribe_server::{openapi, routes};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("scribe_core=info".parse()?)
                .add_directive("scribe_server=info".parse()?),
        )
        .with_target(false)
        .init();

    let config = ServerConfig::from_env()?;
    let docs = openapi::build_docs(config.base_path.as_deref(), config.docs_dir.as_deref())?;
    let addr = format!("0.0.0.0:{}", config.port);

    let state = Arc::new(AppState {
        store: BookmarkStore::default(),
        api_key: config.api_key,
        docs,
    });

    let app = routes::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    tracing::info!("Starting server on {addr}");
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install CTRL+C handler");
    tracing::info!("Shutdown signal received");
}
