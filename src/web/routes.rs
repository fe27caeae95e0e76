//! Route configuration for pages, demo interactions and virtual routes.

use crate::application::services::survey::SURVEY_STEPS;
use crate::domain::entities::{DEMOS, Route, route};
use crate::state::AppState;
use crate::web::handlers::{
    Fallback, demo_handler, demo1_search_handler, demo2_search_handler, error_page_handler,
    fallback_handler, index_handler, item_delete_handler, list_items_handler,
    simulate_error_handler, survey_step_handler, test_handler, wizard_next_handler,
    wizard_prev_handler,
};
use axum::{
    Router,
    routing::{delete, get, post},
};

/// Full pages.
///
/// # Endpoints
///
/// - `GET /`           - Landing page (demo 1)
/// - `GET /test`       - Scratch page
/// - `GET /demoNN`     - One route per catalog entry, NN in 01..=20
/// - `GET /errorpage`  - Error page shell
pub fn page_routes() -> Router<AppState> {
    let router = Router::new()
        .route("/", get(index_handler))
        .route("/test", get(test_handler))
        .route("/errorpage", get(error_page_handler));

    DEMOS.iter().fold(router, |router, demo| {
        router.route(&demo.path(), get(demo_handler).with_state(demo))
    })
}

/// Fragment endpoints driven by the demos.
///
/// # Endpoints
///
/// - `POST   /demo01-search`                 - Search with form replacement
/// - `POST   /demo02-search`                 - Slow search
/// - `POST   /demo03-add-01` .. `-03`        - Survey steps
/// - `GET    /demo04-error?id=N`             - Simulated errors
/// - `POST   /demo05/next`, `/demo05/prev`   - Wizard navigation
/// - `GET    /list-items`                    - Contact list
/// - `DELETE /item-delete?id=N`              - Soft delete
pub fn interaction_routes() -> Router<AppState> {
    let router = Router::new()
        .route("/demo01-search", post(demo1_search_handler))
        .route("/demo02-search", post(demo2_search_handler))
        .route("/demo04-error", get(simulate_error_handler))
        .route("/demo05/next", post(wizard_next_handler))
        .route("/demo05/prev", post(wizard_prev_handler))
        .route("/list-items", get(list_items_handler))
        .route("/item-delete", delete(item_delete_handler));

    SURVEY_STEPS.iter().fold(router, |router, step| {
        router.route(step.path, post(survey_step_handler).with_state(step))
    })
}

/// Redirects for every virtual route in `routes`.
///
/// Virtual routes without a fallback are skipped with an error log;
/// [`route::validate`] rejects them at startup.
pub fn fallback_routes(routes: &[&'static Route]) -> Router<AppState> {
    route::virtual_routes(routes).fold(Router::new(), |router, virtual_route| {
        match Fallback::of(virtual_route) {
            Some(fallback) => {
                router.route(virtual_route.path, get(fallback_handler).with_state(fallback))
            }
            None => {
                tracing::error!(path = virtual_route.path, "virtual route has no fallback");
                router
            }
        }
    })
}

/// All HTML routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(page_routes())
        .merge(interaction_routes())
        .merge(fallback_routes(&route::ROUTES))
}
