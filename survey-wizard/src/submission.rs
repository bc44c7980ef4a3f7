//! Validating, dispatching and presenting one submission.

use survey_wizard_types::{
    FieldView, Form, StepView, SubmissionOutcome, SubmitView, Submitter, SurveyDefinition,
};
use tracing::{info, warn};

use crate::{WizardConfig, payload, validate};

/// Runs the final validation pass, sends the payload and maps the outcome to
/// the surface.
#[derive(Debug)]
pub struct SubmissionCoordinator<T> {
    submitter: T,
    attempts: usize,
}

impl<T: Submitter> SubmissionCoordinator<T> {
    pub fn new(submitter: T) -> Self {
        Self {
            submitter,
            attempts: 0,
        }
    }

    /// The wrapped submitter.
    pub fn submitter(&self) -> &T {
        &self.submitter
    }

    /// Number of requests sent so far.
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// Validate step `step` and, if it passes, send the whole form.
    ///
    /// Returns `None` when validation blocked the submission; focus is then
    /// on the first invalid field and nothing was sent.
    pub async fn submit<V>(
        &mut self,
        definition: &SurveyDefinition,
        form: &Form,
        step: usize,
        config: &WizardConfig,
        view: &mut V,
    ) -> Option<SubmissionOutcome>
    where
        V: StepView + FieldView + SubmitView,
    {
        let current = definition.step(step)?;
        if !validate::validate_step(current, form, view) {
            let first = validate::first_invalid(current, form);
            warn!(
                step,
                field = first.map(|name| name.as_str()),
                "submission blocked by validation"
            );
            if let Some(name) = first {
                view.focus(name);
            }
            return None;
        }

        view.set_submit(false, config.pending_label());
        view.set_transport_error(None);

        let payload = payload::collect(definition, form);
        info!(fields = payload.len(), "submission attempted");
        self.attempts += 1;
        let outcome = self.submitter.submit(&payload).await;

        match outcome.message() {
            None => {
                info!("submission accepted");
                view.show_success();
                view.scroll_to_top();
            }
            Some(message) => {
                info!(%message, "submission failed");
                view.set_transport_error(Some(&message));
                view.set_submit(true, config.submit_label());
            }
        }
        Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RecordingSurface, ScriptedSubmitter};
    use serde_json::json;
    use survey_wizard_types::{Field, FieldKind, Step};

    fn survey() -> SurveyDefinition {
        SurveyDefinition::new(
            "Feedback",
            vec![Step::new(
                "Final",
                vec![
                    Field::required("full_name", "Name", FieldKind::Input),
                    Field::optional("qualitative_response", "Comments", FieldKind::Multiline),
                ],
            )],
        )
    }

    #[tokio::test]
    async fn blocked_submission_sends_nothing() {
        let definition = survey();
        let form = Form::new(&definition);
        let submitter = ScriptedSubmitter::new();
        let mut coordinator = SubmissionCoordinator::new(submitter.clone());
        let mut view = RecordingSurface::new();

        let outcome = coordinator
            .submit(&definition, &form, 0, &WizardConfig::default(), &mut view)
            .await;

        assert_eq!(outcome, None);
        assert_eq!(submitter.calls(), 0);
        assert_eq!(view.focused().map(|f| f.as_str()), Some("full_name"));
        assert_eq!(view.transport_error(), None);
    }

    #[tokio::test]
    async fn success_shows_success_view() {
        let definition = survey();
        let mut form = Form::new(&definition);
        form.set(&"full_name".into(), "Ravi").unwrap();
        let submitter = ScriptedSubmitter::new();
        let mut coordinator = SubmissionCoordinator::new(submitter.clone());
        let mut view = RecordingSurface::new();

        let outcome = coordinator
            .submit(&definition, &form, 0, &WizardConfig::default(), &mut view)
            .await;

        assert_eq!(outcome, Some(SubmissionOutcome::Success));
        assert!(view.success_shown());
        assert_eq!(view.scroll_count(), 1);
        assert_eq!(submitter.payloads()[0].get("full_name"), Some(&json!("Ravi")));
        assert_eq!(coordinator.attempts(), 1);
    }

    #[tokio::test]
    async fn failure_restores_submit() {
        let definition = survey();
        let mut form = Form::new(&definition);
        form.set(&"full_name".into(), "Ravi").unwrap();
        let submitter = ScriptedSubmitter::new()
            .then(SubmissionOutcome::TransportFailure("Server unavailable".into()));
        let mut coordinator = SubmissionCoordinator::new(submitter);
        let mut view = RecordingSurface::new();

        coordinator
            .submit(&definition, &form, 0, &WizardConfig::default(), &mut view)
            .await;

        assert_eq!(view.transport_error(), Some("Server unavailable"));
        assert_eq!(view.submit(), (true, "Submit Survey"));
        assert!(!view.success_shown());
    }

    #[tokio::test]
    async fn retry_clears_previous_error() {
        let definition = survey();
        let mut form = Form::new(&definition);
        form.set(&"full_name".into(), "Ravi").unwrap();
        let submitter = ScriptedSubmitter::new()
            .then(SubmissionOutcome::TransportFailure("Submission failed".into()))
            .then(SubmissionOutcome::Success);
        let mut coordinator = SubmissionCoordinator::new(submitter.clone());
        let mut view = RecordingSurface::new();
        let config = WizardConfig::default();

        coordinator.submit(&definition, &form, 0, &config, &mut view).await;
        coordinator.submit(&definition, &form, 0, &config, &mut view).await;

        assert_eq!(view.transport_error(), None);
        assert!(view.success_shown());
        assert_eq!(submitter.calls(), 2);
    }
}
