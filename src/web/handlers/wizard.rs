//! Next/previous wizard handlers.

use axum::Form;

use crate::application::services::wizard::{self, WizardForm, WizardOutcome};
use crate::error::AppError;
use crate::web::handlers::survey::SURVEY_COMPLETE;
use crate::web::htmx::Fragments;
use crate::web::templates::MultiForm;

/// `POST /demo05/next`
pub async fn wizard_next_handler(Form(form): Form<WizardForm>) -> Result<Fragments, AppError> {
    match wizard::next(form) {
        WizardOutcome::Complete => Ok(Fragments::new().html(SURVEY_COMPLETE)),
        WizardOutcome::Step(view) => Fragments::new().render(&MultiForm { wizard: view }),
    }
}

/// `POST /demo05/prev`
pub async fn wizard_prev_handler(Form(form): Form<WizardForm>) -> Result<Fragments, AppError> {
    Fragments::new().render(&MultiForm {
        wizard: wizard::prev(form),
    })
}
