//! Step sequencer for the next/previous wizard.
//!
//! The server keeps no wizard state. The current step and the answers so far
//! arrive with every request and are echoed back in the rendered form.

use serde::Deserialize;

/// Reaching this step ends the wizard.
pub const COMPLETION_STEP: i64 = 4;

/// Form posted by the wizard's next and previous buttons.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WizardForm {
    pub step: String,
    pub food: String,
    pub month: String,
    pub colour: String,
}

impl WizardForm {
    /// Current step, `0` when missing or not a plain integer.
    pub fn step(&self) -> i64 {
        self.step.parse().unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    None,
    Next,
    Prev,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Next => "next",
            Self::Prev => "prev",
        }
    }
}

/// What the wizard form should display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardView {
    pub current: i64,
    pub next: i64,
    pub prev: i64,
    pub direction: Direction,
    pub food: String,
    pub month: String,
    pub colour: String,
}

impl WizardView {
    fn at(step: i64, direction: Direction, form: WizardForm) -> Self {
        Self {
            current: step,
            next: step.saturating_add(1),
            prev: step.saturating_sub(1),
            direction,
            food: form.food,
            month: form.month,
            colour: form.colour,
        }
    }

    /// The view shown before the first interaction.
    pub fn initial() -> Self {
        Self::at(0, Direction::None, WizardForm::default())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardOutcome {
    Step(WizardView),
    Complete,
}

/// Advances one step. Stepping onto [`COMPLETION_STEP`] completes the wizard.
pub fn next(form: WizardForm) -> WizardOutcome {
    let step = form.step().saturating_add(1);
    if step == COMPLETION_STEP {
        return WizardOutcome::Complete;
    }
    WizardOutcome::Step(WizardView::at(step, Direction::Next, form))
}

/// Goes back one step. There is no lower bound.
pub fn prev(form: WizardForm) -> WizardView {
    let step = form.step().saturating_sub(1);
    WizardView::at(step, Direction::Prev, form)
}
