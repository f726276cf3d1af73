//! Top-level router configuration combining API and page routes.
//!
//! # Route Structure
//!
//! - `/api/*`    - JSON API
//! - `/`, `/dashboard`, `/appointments`, `/invoices`, `/patients[/{id}]` - HTML pages
//! - `/static/*` - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use crate::web;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Routes and static files without rate limiting or path normalization.
///
/// Integration tests drive this router directly, since the rate limiter
/// needs the peer address from a real socket.
pub fn base_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .nest("/api", api::routes::api_routes())
        .merge(web::routes::page_routes())
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `static_dir` - directory served under `/static`
pub fn app_router(state: AppState, static_dir: &str) -> NormalizePath<Router> {
    let router = Router::new()
        .nest(
            "/api",
            api::routes::api_routes().layer(rate_limit::api_layer()),
        )
        .merge(web::routes::page_routes().layer(rate_limit::page_layer()))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
