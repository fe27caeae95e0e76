//! Askama templates.
//!
//! Full pages extend `templates/base.html` and derive [`WebTemplate`] so a
//! handler can return them directly. Fragments are rendered through
//! [`crate::web::htmx::Fragments`], sometimes several per response.

use askama::Template;
use askama_web::WebTemplate;
use chrono::{DateTime, Local};
use std::fmt;

use crate::application::services::survey::{self, NextForm};
use crate::application::services::wizard::WizardView;
use crate::domain::entities::route::DEMO03_MONTH;
use crate::domain::entities::{Contact, DEMOS, Demo};

/// Severity of a page message, used as CSS modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Danger,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Info => "info",
            Self::Danger => "danger",
        })
    }
}

// ── Fragments ───────────────────────────────────────────────────────────────

/// Out-of-band replacement of the `#page-message` region.
///
/// An empty message clears whatever the region showed before.
#[derive(Template)]
#[template(path = "fragments/page-message.html")]
pub struct PageMessage {
    pub severity: Severity,
    pub message: String,
}

impl PageMessage {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }

    pub fn clear() -> Self {
        Self::new(Severity::Info, "")
    }
}

/// Out-of-band replacement of the `#page-title` heading.
#[derive(Template)]
#[template(path = "fragments/page-title.html")]
pub struct PageTitle {
    pub title: String,
}

#[derive(Template)]
#[template(path = "fragments/demo1-search-form.html")]
pub struct Demo1SearchForm {}

#[derive(Template)]
#[template(path = "fragments/demo1-search-result.html")]
pub struct Demo1SearchResult {
    pub name: String,
}

#[derive(Template)]
#[template(path = "fragments/demo2-search-result.html")]
pub struct Demo2SearchResult {
    pub name: String,
}

/// One survey form asking for `item_name`.
#[derive(Template)]
#[template(path = "fragments/demo3-add-form.html")]
pub struct Demo3AddForm {
    pub item_name: &'static str,
    pub post_url: &'static str,
    pub history: &'static str,
}

impl From<NextForm> for Demo3AddForm {
    fn from(next: NextForm) -> Self {
        Self {
            item_name: next.item_name,
            post_url: next.post_url,
            history: next.history.path,
        }
    }
}

/// Appends a submitted answer to `#friend-list`.
#[derive(Template)]
#[template(path = "fragments/survey-entry.html")]
pub struct SurveyEntry {
    pub item: String,
    pub name: String,
}

#[derive(Template)]
#[template(path = "fragments/multi-form.html")]
pub struct MultiForm {
    pub wizard: WizardView,
}

#[derive(Template)]
#[template(path = "fragments/contact-list.html")]
pub struct ContactList {
    pub contacts: Vec<Contact>,
}

// ── Pages ───────────────────────────────────────────────────────────────────

#[derive(Template, WebTemplate)]
#[template(path = "pages/demo01.html")]
pub struct Demo01Page {
    pub nav: &'static [Demo],
    pub demo: &'static Demo,
}

#[derive(Template, WebTemplate)]
#[template(path = "pages/demo02.html")]
pub struct Demo02Page {
    pub nav: &'static [Demo],
    pub demo: &'static Demo,
}

/// First survey page. Field names match `demo3-add-form.html`, which it
/// includes.
#[derive(Template, WebTemplate)]
#[template(path = "pages/demo03.html")]
pub struct Demo03Page {
    pub nav: &'static [Demo],
    pub demo: &'static Demo,
    pub step: i64,
    pub item_name: &'static str,
    pub post_url: &'static str,
    pub history: &'static str,
}

impl Demo03Page {
    pub fn new(demo: &'static Demo) -> Self {
        Self {
            nav: &DEMOS,
            demo,
            step: 1,
            item_name: survey::FIRST_ITEM,
            post_url: survey::FIRST_POST,
            history: DEMO03_MONTH.path,
        }
    }
}

#[derive(Template, WebTemplate)]
#[template(path = "pages/demo04.html")]
pub struct Demo04Page {
    pub nav: &'static [Demo],
    pub demo: &'static Demo,
}

#[derive(Template, WebTemplate)]
#[template(path = "pages/demo05.html")]
pub struct Demo05Page {
    pub nav: &'static [Demo],
    pub demo: &'static Demo,
    pub wizard: WizardView,
}

#[derive(Template, WebTemplate)]
#[template(path = "pages/demo06.html")]
pub struct Demo06Page {
    pub nav: &'static [Demo],
    pub demo: &'static Demo,
}

/// Page for demos without interactive content.
#[derive(Template, WebTemplate)]
#[template(path = "pages/demo.html")]
pub struct DemoPage {
    pub nav: &'static [Demo],
    pub demo: &'static Demo,
}

#[derive(Template, WebTemplate)]
#[template(path = "pages/errorpage.html")]
pub struct ErrorPage {
    pub nav: &'static [Demo],
    pub created_on: DateTime<Local>,
    pub message: &'static str,
}

impl ErrorPage {
    pub fn new(message: &'static str) -> Self {
        Self {
            nav: &DEMOS,
            created_on: Local::now(),
            message,
        }
    }
}

#[derive(Template, WebTemplate)]
#[template(path = "pages/test.html")]
pub struct TestPage {
    pub nav: &'static [Demo],
}
