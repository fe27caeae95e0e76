//! Configuration of the three-step survey.
//!
//! Each POST endpoint of the survey gets its own [`SurveyStep`] as handler
//! state, describing what the following form asks for.

use crate::domain::entities::route::{self, Route};
use serde::Deserialize;

/// The item asked for on the first form.
pub const FIRST_ITEM: &str = "Food";
/// Endpoint the first form posts to.
pub const FIRST_POST: &str = "demo03-add-01";

/// What to show after one survey answer was submitted.
#[derive(Debug, Clone, Copy)]
pub struct SurveyStep {
    /// Path the step is registered at.
    pub path: &'static str,
    /// Progress label shown in the page title.
    pub progress: &'static str,
    /// The following form, `None` on the last step.
    pub next: Option<NextForm>,
}

#[derive(Debug, Clone, Copy)]
pub struct NextForm {
    pub item_name: &'static str,
    pub post_url: &'static str,
    pub history: &'static Route,
}

impl SurveyStep {
    pub fn title(&self) -> String {
        format!("Multi-step Demo: {}", self.progress)
    }
}

pub static SURVEY_STEPS: [SurveyStep; 3] = [
    SurveyStep {
        path: "/demo03-add-01",
        progress: "2/3",
        next: Some(NextForm {
            item_name: "Month",
            post_url: "demo03-add-02",
            history: &route::DEMO03_FAV_COLOUR,
        }),
    },
    SurveyStep {
        path: "/demo03-add-02",
        progress: "3/3",
        next: Some(NextForm {
            item_name: "Colour",
            post_url: "demo03-add-03",
            history: &route::DEMO03_THANKYOU,
        }),
    },
    SurveyStep {
        path: "/demo03-add-03",
        progress: "Done",
        next: None,
    },
];

/// One submitted survey answer.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SurveyAnswer {
    pub item: String,
    pub name: String,
}
