//! Multi-step survey handler.

use axum::{Form, extract::State};

use crate::application::services::survey::{SurveyAnswer, SurveyStep};
use crate::error::AppError;
use crate::web::htmx::Fragments;
use crate::web::templates::{Demo3AddForm, PageTitle, SurveyEntry};

pub const SURVEY_COMPLETE: &str = "<h4>Thank you for completing the survey</h4>";

/// Accepts one survey answer. The step configuration is per-route state.
///
/// # Endpoints
///
/// `POST /demo03-add-01`, `POST /demo03-add-02`, `POST /demo03-add-03`
///
/// # Response
///
/// 1. The next form, or a thank-you note after the last step
/// 2. The answer appended to `#friend-list` out of band
/// 3. The page title updated with the progress label
pub async fn survey_step_handler(
    State(step): State<&'static SurveyStep>,
    Form(answer): Form<SurveyAnswer>,
) -> Result<Fragments, AppError> {
    let fragments = match step.next {
        Some(next) => Fragments::new().render(&Demo3AddForm::from(next))?,
        None => Fragments::new().html(SURVEY_COMPLETE),
    };

    fragments
        .render(&SurveyEntry {
            item: answer.item,
            name: answer.name,
        })?
        .render(&PageTitle {
            title: step.title(),
        })
}
