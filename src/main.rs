use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use backend::app;
use backend::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "backend=debug,tower_http=debug,axum=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration; a missing DATABASE_URL or SECRET_KEY aborts here
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;
    let port = config.port;

    let (app, _db) = app::build_app(config)?;

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("backend listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
