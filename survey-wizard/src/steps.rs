//! Step navigation inside the survey page.

use survey_wizard_types::{FieldView, Form, StepView, SurveyDefinition, SurveyError};
use tracing::debug;

use crate::validate;

/// What an attempted step move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepMove {
    /// The index changed.
    Moved,
    /// The visible step failed validation; the index is unchanged.
    Invalid,
    /// Already at the first (or last) step; the index is unchanged.
    AtBoundary,
}

/// Progress for `index` out of `total` steps, as a percentage.
pub fn progress_percent(index: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (index + 1) as f64 * 100.0 / total as f64
}

/// Owns the current step index.
#[derive(Debug, Clone)]
pub struct StepController {
    current: usize,
    total: usize,
    /// Furthest step reached through validated advances.
    reached: usize,
}

impl StepController {
    /// Create a controller for `total` steps, positioned on the first one.
    pub fn new(total: usize) -> Result<Self, SurveyError> {
        if total == 0 {
            return Err(SurveyError::EmptySurvey);
        }
        Ok(Self {
            current: 0,
            total,
            reached: 0,
        })
    }

    /// The current step index.
    pub fn current(&self) -> usize {
        self.current
    }

    /// The number of steps.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Check if the current step is the last one.
    pub fn is_last(&self) -> bool {
        self.current + 1 == self.total
    }

    /// Progress of the current step, as a percentage.
    pub fn progress(&self) -> f64 {
        progress_percent(self.current, self.total)
    }

    /// Make `index` the only active step and update the progress indicator.
    pub fn show_step(&mut self, index: usize, view: &mut impl StepView) -> Result<(), SurveyError> {
        if index >= self.total {
            return Err(SurveyError::StepOutOfRange {
                index,
                total: self.total,
            });
        }
        self.activate(index, view);
        Ok(())
    }

    fn activate(&mut self, index: usize, view: &mut impl StepView) {
        self.current = index;
        for step in 0..self.total {
            view.set_step_active(step, step == index);
        }
        view.set_progress(progress_percent(index, self.total));
        debug!(step = index, total = self.total, "step shown");
    }

    /// Go to the next step if the visible one validates.
    pub fn advance<V: StepView + FieldView>(
        &mut self,
        definition: &SurveyDefinition,
        form: &Form,
        view: &mut V,
    ) -> StepMove {
        let valid = definition
            .step(self.current)
            .is_some_and(|step| validate::validate_step(step, form, view));
        if !valid {
            debug!(step = self.current, "advance blocked by validation");
            return StepMove::Invalid;
        }
        if self.is_last() {
            return StepMove::AtBoundary;
        }
        let next = self.current + 1;
        self.reached = self.reached.max(next);
        self.activate(next, view);
        view.scroll_to_top();
        StepMove::Moved
    }

    /// Go to the previous step. Never validates.
    pub fn retreat(&mut self, view: &mut impl StepView) -> StepMove {
        if self.current == 0 {
            return StepMove::AtBoundary;
        }
        self.activate(self.current - 1, view);
        view.scroll_to_top();
        StepMove::Moved
    }

    /// Go directly to a step that has already been reached.
    ///
    /// Steps beyond the furthest validated one stay closed. A forward jump
    /// re-validates every step it passes over and stops on the first one that
    /// fails, showing that step with its errors.
    pub fn jump<V: StepView + FieldView>(
        &mut self,
        index: usize,
        definition: &SurveyDefinition,
        form: &Form,
        view: &mut V,
    ) -> Result<StepMove, SurveyError> {
        if index >= self.total {
            return Err(SurveyError::StepOutOfRange {
                index,
                total: self.total,
            });
        }
        if index > self.reached {
            return Ok(StepMove::Invalid);
        }
        if index == self.current {
            return Ok(StepMove::AtBoundary);
        }
        if index > self.current {
            let failed = (self.current..index).find(|&passed| {
                !definition
                    .step(passed)
                    .is_some_and(|step| validate::validate_step(step, form, view))
            });
            if let Some(failed) = failed {
                debug!(step = failed, target = index, "jump blocked by validation");
                if failed != self.current {
                    self.activate(failed, view);
                    view.scroll_to_top();
                }
                return Ok(StepMove::Invalid);
            }
        }
        self.activate(index, view);
        view.scroll_to_top();
        Ok(StepMove::Moved)
    }

    /// Start over on the first step (entering the survey from the intro).
    pub fn reset(&mut self, view: &mut impl StepView) {
        self.reached = 0;
        self.activate(0, view);
    }
}
