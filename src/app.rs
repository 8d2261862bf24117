use axum::{extract::DefaultBodyLimit, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::constants::MAX_BODY_SIZE;
use crate::cors;
use crate::database::Database;
use crate::error::Result;
use crate::handlers;

/// Shared state handed to every handler. The database facility is constructed
/// here and passed along explicitly rather than living in module-level state.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
}

/// Build a fully configured application from an already-validated config.
///
/// The database binding is created lazily (no connection is opened), the CORS
/// policy covers the `/api` subtree only, and the body-size ceiling applies to
/// every route. Returns the database handle alongside the router so callers
/// can hold it independently of the request path.
pub fn build_app(config: Config) -> Result<(Router, Database)> {
    let db = Database::connect_lazy(&config.database_url)?;

    let state = AppState { db: db.clone() };

    // The fallback keeps unmatched paths under /api inside the CORS layer;
    // without it axum answers them before the layer runs.
    let api = Router::new()
        .route("/health", get(handlers::health))
        .fallback(handlers::api_not_found)
        .layer(cors::api_cors());

    let app = Router::new()
        .nest("/api", api)
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok((app, db))
}
