//! Top-level router combining pages, interactions and static assets.
//!
//! # Route Structure
//!
//! - `GET /`, `/test`, `/demoNN`, `/errorpage` - Full pages
//! - demo interaction endpoints                - HTML fragments
//! - virtual routes                            - `302` to their owning page
//! - `/static/*`                               - Static assets
//!
//! # Middleware
//!
//! - **Access log** - One combined-log-format line per request
//! - **Tracing** - Span per request
//! - **Path normalization** - Trailing slash handling

use crate::middleware::{access_log::access_log_mw, tracing};
use crate::state::AppState;
use crate::web;
use axum::{Router, middleware};
use std::path::Path;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Builds the router with every route and middleware except path
/// normalization.
pub fn router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .merge(web::routes::routes())
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
        .layer(middleware::from_fn(access_log_mw))
        .layer(tracing::layer())
}

/// Constructs the application service: [`router`] with trailing slashes
/// trimmed before routing.
pub fn app_router(state: AppState, static_dir: impl AsRef<Path>) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, static_dir))
}
