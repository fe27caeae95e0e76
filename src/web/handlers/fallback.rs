//! Redirects for virtual routes.

use axum::{
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::domain::entities::Route;

/// A virtual route paired with the page it falls back to.
#[derive(Debug, Clone, Copy)]
pub struct Fallback {
    pub from: &'static Route,
    pub to: &'static Route,
}

impl Fallback {
    /// `None` when `route` has no fallback.
    pub fn of(route: &'static Route) -> Option<Self> {
        route.fallback.map(|to| Self { from: route, to })
    }
}

/// Sends direct navigation on a virtual route to its owning page.
///
/// # Endpoint
///
/// `GET` on every virtual route, answering `302 Found`.
pub async fn fallback_handler(State(fallback): State<Fallback>) -> impl IntoResponse {
    tracing::debug!(
        from = fallback.from.path,
        to = fallback.to.path,
        "virtual route fallback"
    );
    (StatusCode::FOUND, [(header::LOCATION, fallback.to.path)])
}
