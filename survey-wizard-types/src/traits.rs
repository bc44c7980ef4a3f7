use async_trait::async_trait;

use crate::{FieldName, IndicatorId, PageId, SubmissionOutcome, SubmissionPayload};

/// Top-level page visibility.
pub trait PageView {
    /// Show or hide a page. A shown page also carries the "active" marker used
    /// for transition styling.
    fn set_page_visible(&mut self, page: PageId, visible: bool);

    /// Toggle the page-level landing presentation mode.
    fn set_landing_mode(&mut self, enabled: bool);
}

/// Step visibility and the progress indicator.
pub trait StepView {
    /// Mark a step active (visible) or inactive.
    fn set_step_active(&mut self, index: usize, active: bool);

    /// Set the progress indicator, as a percentage in `0.0..=100.0`.
    fn set_progress(&mut self, percent: f64);

    /// Reset the scroll position to the top of the page.
    fn scroll_to_top(&mut self);
}

/// Per-field error capabilities.
///
/// Validators only ever talk to inputs through this trait, so they can run
/// without a rendering surface.
pub trait FieldView {
    /// Show or hide a dedicated error indicator.
    fn set_indicator(&mut self, indicator: &IndicatorId, visible: bool);

    /// Whether this surface can display `indicator`.
    ///
    /// Checked once when the wizard is built.
    fn has_indicator(&self, _indicator: &IndicatorId) -> bool {
        true
    }

    /// Add or remove the invalid marking of an input.
    fn set_field_invalid(&mut self, field: &FieldName, invalid: bool);

    /// Trigger the input's native validity report (e.g. a "please fill in
    /// this field" bubble).
    fn report_validity(&mut self, field: &FieldName);

    /// Show or hide an input.
    fn set_field_visible(&mut self, field: &FieldName, visible: bool);

    /// Move keyboard focus to an input.
    fn focus(&mut self, field: &FieldName);
}

/// The submit affordance and the views that follow a submission.
pub trait SubmitView {
    /// Enable or disable the submit button and set its label.
    fn set_submit(&mut self, enabled: bool, label: &str);

    /// Show a transport error message, or hide the message region with `None`.
    fn set_transport_error(&mut self, message: Option<&str>);

    /// Hide the form and the progress indicator and reveal the success view.
    fn show_success(&mut self);
}

/// A complete presentation surface.
pub trait Surface: PageView + StepView + FieldView + SubmitView {}

impl<T: PageView + StepView + FieldView + SubmitView> Surface for T {}

/// The persisted, user-navigable location token (e.g. a URL fragment).
pub trait Location {
    /// The live token, `""` when absent.
    fn token(&self) -> &str;

    /// Navigate to `token`, adding a history entry.
    fn push(&mut self, token: &str);

    /// Rewrite the live token in place, without adding a history entry.
    fn replace(&mut self, token: &str);
}

/// The remote endpoint that receives the finished survey.
///
/// Implementations perform exactly one request per call and never retry.
/// Every failure, including transport errors, is reported as an outcome.
#[async_trait]
pub trait Submitter {
    /// Send `payload` as the entire request body.
    async fn submit(&self, payload: &SubmissionPayload) -> SubmissionOutcome;
}

#[async_trait]
impl<T: Submitter + Sync + ?Sized> Submitter for Box<T> {
    async fn submit(&self, payload: &SubmissionPayload) -> SubmissionOutcome {
        (**self).submit(payload).await
    }
}
