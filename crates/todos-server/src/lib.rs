pub mod auth;
pub mod error;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::routing::{delete, get, post, put};
use axum::{middleware, Router};
use tower_http::cors::{Any, CorsLayer};

use todos_core::config::Config;
use todos_core::store::TodoStore;

pub use auth::AuthConfig;

/// Build the axum Router with all API routes and middleware.
/// Used by `serve()` and available for integration testing.
pub fn build_router(store: TodoStore, auth: AuthConfig) -> Router {
    let app_state = state::AppState::new(store);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Refresh events (SSE)
        .route("/api/events", get(routes::events::sse_events))
        // Read endpoint
        .route("/api/todos", get(routes::todos::list_todos))
        // Persistence actions
        .route("/api/todos", post(routes::todos::create_todo))
        .route("/api/todos/{id}", put(routes::todos::update_todo))
        .route("/api/todos/{id}", delete(routes::todos::delete_todo))
        .route("/api/todos/{id}/toggle", post(routes::todos::toggle_todo))
        .layer(middleware::from_fn_with_state(
            Arc::new(auth),
            auth::auth_middleware,
        ))
        .layer(cors)
        .with_state(app_state)
}

/// Start the todos API server with the given config.
pub async fn serve(config: &Config) -> anyhow::Result<()> {
    let store = TodoStore::open(&config.database_path()?)?;
    let auth = match &config.auth_token {
        Some(token) => AuthConfig::with_token(token.clone()),
        None => AuthConfig::none(),
    };
    let app = build_router(store, auth);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("todos API listening on http://localhost:{}", config.port);

    axum::serve(listener, app).await?;
    Ok(())
}
