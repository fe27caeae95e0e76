//! Error page handlers.

use axum::{extract::Query, response::IntoResponse};
use serde::Deserialize;

use crate::application::services::error_simulation;
use crate::error::AppError;
use crate::web::htmx::Fragments;
use crate::web::templates::ErrorPage;

/// Renders the error page shell.
///
/// # Endpoint
///
/// `GET /errorpage`
pub async fn error_page_handler() -> impl IntoResponse {
    ErrorPage::new("")
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ErrorQuery {
    pub id: String,
}

/// Answers with a canned error that takes over the whole page.
///
/// # Endpoint
///
/// `GET /demo04-error?id=N`
///
/// # Headers
///
/// - `HX-Retarget: body` and `HX-Push-Url: errorpage` on every response
/// - `HX-Trigger-After-Settle` with a `logoutEvent` for id 4
pub async fn simulate_error_handler(
    Query(query): Query<ErrorQuery>,
) -> Result<Fragments, AppError> {
    let error = error_simulation::simulate(&query.id);

    let mut fragments = Fragments::new();
    if let Some(trigger) = error.trigger {
        fragments = fragments.trigger_after_settle(trigger);
    }

    fragments
        .retarget("body")
        .push_url("errorpage")
        .render(&ErrorPage::new(error.message))
}
