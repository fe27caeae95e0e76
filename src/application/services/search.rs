//! Decisions behind the two search demos.

/// Name that makes the first search fail and replace its form.
pub const REPLACE_FORM_TRIGGER: &str = "Error1";
/// Name that makes the first search fail and keep its form.
pub const KEEP_FORM_TRIGGER: &str = "Error2";

pub const NOT_FOUND_FORM_REPLACED: &str = "The user's account cannot be found. Form is replaced.";
pub const NOT_FOUND_FORM_KEPT: &str =
    "The user's account cannot be found. Form replacing skipped with HX-Reswap header";
pub const NOT_FOUND: &str = "The user's account cannot be found.";

/// Result of the form-replacement search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormSearch {
    /// Re-render the form and show an error.
    NotFoundReplaceForm,
    /// Show an error and leave the form alone.
    NotFoundKeepForm,
    Found(String),
}

pub fn form_search(name: &str) -> FormSearch {
    match name {
        REPLACE_FORM_TRIGGER => FormSearch::NotFoundReplaceForm,
        KEEP_FORM_TRIGGER => FormSearch::NotFoundKeepForm,
        _ => FormSearch::Found(name.to_string()),
    }
}

/// Result of the slow search. Only found names pay the delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlowSearch {
    Empty,
    Found(String),
}

pub fn slow_search(name: &str) -> SlowSearch {
    if name.is_empty() {
        SlowSearch::Empty
    } else {
        SlowSearch::Found(name.to_string())
    }
}
