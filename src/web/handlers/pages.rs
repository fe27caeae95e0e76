//! Full page handlers.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};

use crate::application::services::wizard::WizardView;
use crate::domain::entities::{DEMOS, Demo, demo};
use crate::error::AppError;
use crate::web::templates::{
    Demo01Page, Demo02Page, Demo03Page, Demo04Page, Demo05Page, Demo06Page, DemoPage, TestPage,
};

/// Renders the landing page, which is the first demo.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler() -> Result<Response, AppError> {
    let demo = demo::find(1).ok_or_else(|| AppError::internal("demo catalog has no demo01"))?;
    Ok(render_demo(demo))
}

/// Renders the scratch page.
///
/// # Endpoint
///
/// `GET /test`
pub async fn test_handler() -> impl IntoResponse {
    TestPage { nav: &DEMOS }
}

/// Renders a numbered demo page. The demo is per-route state.
///
/// # Endpoint
///
/// `GET /demoNN`
pub async fn demo_handler(State(demo): State<&'static Demo>) -> Response {
    render_demo(demo)
}

fn render_demo(demo: &'static Demo) -> Response {
    let nav: &'static [Demo] = &DEMOS;
    match demo.number {
        1 => Demo01Page { nav, demo }.into_response(),
        2 => Demo02Page { nav, demo }.into_response(),
        3 => Demo03Page::new(demo).into_response(),
        4 => Demo04Page { nav, demo }.into_response(),
        5 => Demo05Page {
            nav,
            demo,
            wizard: WizardView::initial(),
        }
        .into_response(),
        6 => Demo06Page { nav, demo }.into_response(),
        _ => DemoPage { nav, demo }.into_response(),
    }
}
