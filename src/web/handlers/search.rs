//! Search demo handlers.

use axum::{Form, extract::State};
use serde::Deserialize;

use crate::application::services::search::{self, FormSearch, SlowSearch};
use crate::error::AppError;
use crate::state::AppState;
use crate::web::htmx::Fragments;
use crate::web::templates::{
    Demo1SearchForm, Demo1SearchResult, Demo2SearchResult, PageMessage, Severity,
};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchForm {
    pub name: String,
}

/// Searches a user, failing on the two trigger names.
///
/// # Endpoint
///
/// `POST /demo01-search`
///
/// # Responses
///
/// - `Error1`: the search form again, plus a danger message
/// - `Error2`: a danger message with `HX-Reswap: none`
/// - otherwise: a cleared message plus the result
pub async fn demo1_search_handler(Form(form): Form<SearchForm>) -> Result<Fragments, AppError> {
    match search::form_search(&form.name) {
        FormSearch::NotFoundReplaceForm => Fragments::new()
            .render(&Demo1SearchForm {})?
            .render(&PageMessage::new(
                Severity::Danger,
                search::NOT_FOUND_FORM_REPLACED,
            )),
        FormSearch::NotFoundKeepForm => Fragments::new()
            .skip_swap()
            .render(&PageMessage::new(Severity::Danger, search::NOT_FOUND_FORM_KEPT)),
        FormSearch::Found(name) => Fragments::new()
            .render(&PageMessage::clear())?
            .render(&Demo1SearchResult { name }),
    }
}

/// Searches a user through a deliberately slow lookup.
///
/// # Endpoint
///
/// `POST /demo02-search`
///
/// An empty name fails immediately. Any other name waits for the configured
/// search delay before answering; the wait always runs to completion.
pub async fn demo2_search_handler(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Fragments, AppError> {
    match search::slow_search(&form.name) {
        SlowSearch::Empty => {
            Fragments::new().render(&PageMessage::new(Severity::Danger, search::NOT_FOUND))
        }
        SlowSearch::Found(name) => {
            tracing::debug!(
                delay_ms = state.search_delay.as_millis() as u64,
                "simulating slow search"
            );
            tokio::time::sleep(state.search_delay).await;

            Fragments::new()
                .render(&PageMessage::clear())?
                .render(&Demo2SearchResult { name })
        }
    }
}
