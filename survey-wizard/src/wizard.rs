//! The wizard: one owner for all state, driven one event at a time.

use survey_wizard_types::{
    FieldName, FieldValue, Form, Location, PageId, SubmissionOutcome, Submitter, Surface,
    SurveyDefinition, SurveyError,
};
use tracing::debug;

use crate::{
    PageRouter, StepController, StepMove, SubmissionCoordinator, WizardConfig, conditional,
    validate,
};

/// A user or browser event.
#[derive(Debug, Clone, PartialEq)]
pub enum WizardEvent {
    /// "View survey" on the landing page.
    ViewSurvey,
    /// "Start survey" on the intro page.
    StartSurvey,
    /// The location token changed outside the wizard (back/forward).
    LocationChanged,
    /// "Next" on the current step.
    Next,
    /// "Previous" on the current step.
    Previous,
    /// Go directly to an already reached step.
    JumpTo(usize),
    /// An input's value changed.
    Edit { field: FieldName, value: FieldValue },
    /// One checkbox of a group was checked or unchecked.
    Toggle {
        group: FieldName,
        option: String,
        checked: bool,
    },
    /// An input lost focus.
    Blur { field: FieldName },
    /// "Submit" on the last step.
    Submit,
}

/// What handling an event did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reaction {
    /// State and surface changed.
    Updated,
    /// The event does not apply in the current state.
    Ignored,
    /// Validation stopped a step move or a submission.
    Blocked,
    /// A request was sent; this is how it ended.
    Submitted(SubmissionOutcome),
}

/// Owns the survey state and keeps the surface and location in sync with it.
pub struct Wizard<S, L, T> {
    definition: SurveyDefinition,
    form: Form,
    router: PageRouter,
    steps: StepController,
    coordinator: SubmissionCoordinator<T>,
    surface: S,
    location: L,
    config: WizardConfig,
    completed: bool,
}

impl<S, L, T> Wizard<S, L, T>
where
    S: Surface,
    L: Location,
    T: Submitter,
{
    /// Build a wizard over `surface`, `location` and `submitter`.
    ///
    /// Fails if the definition is inconsistent or the surface cannot show one
    /// of the definition's error indicators.
    pub fn new(
        definition: SurveyDefinition,
        surface: S,
        location: L,
        submitter: T,
    ) -> Result<Self, SurveyError> {
        definition.check()?;
        if let Some(missing) = definition
            .indicators()
            .find(|indicator| !surface.has_indicator(indicator))
        {
            return Err(SurveyError::MissingIndicator(missing.clone()));
        }

        let form = Form::new(&definition);
        let steps = StepController::new(definition.len())?;
        Ok(Self {
            definition,
            form,
            router: PageRouter::new(),
            steps,
            coordinator: SubmissionCoordinator::new(submitter),
            surface,
            location,
            config: WizardConfig::default(),
            completed: false,
        })
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: WizardConfig) -> Self {
        self.config = config;
        self
    }

    /// Render the initial state and show the page the location selects.
    pub fn start(&mut self) -> Result<PageId, SurveyError> {
        self.surface.set_submit(true, self.config.submit_label());
        self.surface.set_transport_error(None);
        conditional::apply_all(&self.definition, &mut self.form, &mut self.surface)?;
        self.steps.show_step(0, &mut self.surface)?;
        let page = self.router.sync(&mut self.location, &mut self.surface);
        debug!(%page, steps = self.steps.total(), "wizard started");
        Ok(page)
    }

    /// Handle one event to completion.
    ///
    /// Events naming a field the survey does not have are errors; events that
    /// merely do not apply right now are [`Reaction::Ignored`].
    pub async fn handle(&mut self, event: WizardEvent) -> Result<Reaction, SurveyError> {
        if self.completed && !matches!(event, WizardEvent::LocationChanged) {
            return Ok(Reaction::Ignored);
        }

        match event {
            WizardEvent::ViewSurvey => Ok(self.view_survey()),
            WizardEvent::StartSurvey => Ok(self.start_survey().await),
            WizardEvent::LocationChanged => {
                self.router.sync(&mut self.location, &mut self.surface);
                Ok(Reaction::Updated)
            }
            WizardEvent::Next => Ok(self.step_move(|steps, definition, form, surface| {
                steps.advance(definition, form, surface)
            })),
            WizardEvent::Previous => {
                Ok(self.step_move(|steps, _, _, surface| steps.retreat(surface)))
            }
            WizardEvent::JumpTo(index) => {
                if !self.on_survey() {
                    return Ok(Reaction::Ignored);
                }
                let moved = self
                    .steps
                    .jump(index, &self.definition, &self.form, &mut self.surface)?;
                Ok(reaction_for(moved))
            }
            WizardEvent::Edit { field, value } => self.edit(&field, value),
            WizardEvent::Toggle {
                group,
                option,
                checked,
            } => self.toggle(&group, &option, checked),
            WizardEvent::Blur { field } => self.blur(&field),
            WizardEvent::Submit => Ok(self.submit().await),
        }
    }

    fn on_survey(&self) -> bool {
        self.router.current() == PageId::SurveyForm
    }

    fn view_survey(&mut self) -> Reaction {
        if !self
            .router
            .navigate(PageId::Intro, &mut self.location, &mut self.surface)
        {
            return Reaction::Ignored;
        }
        self.surface.scroll_to_top();
        Reaction::Updated
    }

    async fn start_survey(&mut self) -> Reaction {
        if self.router.current() != PageId::Intro {
            return Reaction::Ignored;
        }
        self.router
            .navigate(PageId::SurveyForm, &mut self.location, &mut self.surface);
        tokio::time::sleep(self.config.settle_delay()).await;
        self.steps.reset(&mut self.surface);
        self.surface.scroll_to_top();
        Reaction::Updated
    }

    fn step_move(
        &mut self,
        step: impl FnOnce(&mut StepController, &SurveyDefinition, &Form, &mut S) -> StepMove,
    ) -> Reaction {
        if !self.on_survey() {
            return Reaction::Ignored;
        }
        reaction_for(step(
            &mut self.steps,
            &self.definition,
            &self.form,
            &mut self.surface,
        ))
    }

    /// Check `field` exists and belongs to the visible step.
    fn editable(&self, field: &FieldName) -> Result<bool, SurveyError> {
        let step = self
            .definition
            .step_of(field)
            .ok_or_else(|| SurveyError::UnknownField(field.clone()))?;
        Ok(self.on_survey() && step == self.steps.current() && self.form.is_visible(field))
    }

    fn edit(&mut self, field: &FieldName, value: FieldValue) -> Result<Reaction, SurveyError> {
        if !self.editable(field)? {
            return Ok(Reaction::Ignored);
        }
        self.form.set(field, value)?;

        let step = self.steps.current();
        if let Some(rule) = self
            .definition
            .step(step)
            .and_then(|s| s.range_rule(field))
        {
            validate::clear_range(rule, &mut self.surface);
        }
        if matches!(self.form.get(field), Some(FieldValue::Checked(_))) {
            conditional::apply_for_group(&self.definition, field, &mut self.form, &mut self.surface)?;
        }
        Ok(Reaction::Updated)
    }

    fn toggle(
        &mut self,
        group: &FieldName,
        option: &str,
        checked: bool,
    ) -> Result<Reaction, SurveyError> {
        if !self.editable(group)? {
            return Ok(Reaction::Ignored);
        }
        self.form.set_checked(group, option, checked)?;
        conditional::apply_for_group(&self.definition, group, &mut self.form, &mut self.surface)?;
        Ok(Reaction::Updated)
    }

    fn blur(&mut self, field: &FieldName) -> Result<Reaction, SurveyError> {
        if !self.editable(field)? {
            return Ok(Reaction::Ignored);
        }
        let rule = self
            .definition
            .step(self.steps.current())
            .and_then(|s| s.range_rule(field));
        let checked = rule.and_then(|rule| {
            validate::validate_range_on_blur(rule, &self.form, &mut self.surface)
        });
        Ok(match checked {
            Some(_) => Reaction::Updated,
            None => Reaction::Ignored,
        })
    }

    async fn submit(&mut self) -> Reaction {
        if !self.on_survey() || !self.steps.is_last() {
            return Reaction::Ignored;
        }
        let outcome = self
            .coordinator
            .submit(
                &self.definition,
                &self.form,
                self.steps.current(),
                &self.config,
                &mut self.surface,
            )
            .await;
        match outcome {
            None => Reaction::Blocked,
            Some(outcome) => {
                self.completed = outcome.is_success();
                Reaction::Submitted(outcome)
            }
        }
    }

    pub fn definition(&self) -> &SurveyDefinition {
        &self.definition
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    /// Mutable access to the location, e.g. to simulate back/forward.
    /// Follow up with [`WizardEvent::LocationChanged`].
    pub fn location_mut(&mut self) -> &mut L {
        &mut self.location
    }

    pub fn submitter(&self) -> &T {
        self.coordinator.submitter()
    }

    pub fn config(&self) -> &WizardConfig {
        &self.config
    }

    /// The page currently shown.
    pub fn page(&self) -> PageId {
        self.router.current()
    }

    /// The current step index.
    pub fn step(&self) -> usize {
        self.steps.current()
    }

    /// Check if a submission has succeeded.
    pub fn is_completed(&self) -> bool {
        self.completed
    }
}

fn reaction_for(moved: StepMove) -> Reaction {
    match moved {
        StepMove::Moved => Reaction::Updated,
        StepMove::Invalid => Reaction::Blocked,
        StepMove::AtBoundary => Reaction::Ignored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemoryLocation, RecordingSurface, ScriptedSubmitter};
    use std::time::Duration;
    use survey_wizard_types::{Field, FieldKind, RangeRule, Step, StepRule};

    type TestWizard = Wizard<RecordingSurface, MemoryLocation, ScriptedSubmitter>;

    fn survey() -> SurveyDefinition {
        SurveyDefinition::new(
            "Short",
            vec![
                Step::new("Name", vec![Field::required("full_name", "Name", FieldKind::Input)]),
                Step::new("Rating", vec![Field::required("rating", "Rating", FieldKind::Int)])
                    .with_rule(StepRule::Range(RangeRule::new("rating", 1, 5, "rating_error"))),
            ],
        )
    }

    fn wizard_at(token: &str) -> TestWizard {
        let mut wizard = Wizard::new(
            survey(),
            RecordingSurface::new(),
            MemoryLocation::at(token),
            ScriptedSubmitter::new(),
        )
        .unwrap()
        .with_config(WizardConfig::new().with_settle_delay(Duration::ZERO));
        wizard.start().unwrap();
        wizard
    }

    fn edit(field: &str, value: impl Into<FieldValue>) -> WizardEvent {
        WizardEvent::Edit {
            field: field.into(),
            value: value.into(),
        }
    }

    #[test]
    fn missing_indicator_is_rejected() {
        let result = Wizard::new(
            survey(),
            RecordingSurface::new().with_indicators(["other_error"]),
            MemoryLocation::new(),
            ScriptedSubmitter::new(),
        );
        assert!(matches!(
            result,
            Err(SurveyError::MissingIndicator(id)) if id.as_str() == "rating_error"
        ));
    }

    #[test]
    fn empty_survey_is_rejected() {
        let result = Wizard::new(
            SurveyDefinition::new("Empty", vec![]),
            RecordingSurface::new(),
            MemoryLocation::new(),
            ScriptedSubmitter::new(),
        );
        assert!(matches!(result, Err(SurveyError::EmptySurvey)));
    }

    #[test]
    fn start_renders_first_step() {
        let wizard = wizard_at("#survey");
        assert_eq!(wizard.page(), PageId::SurveyForm);
        assert_eq!(wizard.surface().active_steps(), vec![0]);
        assert_eq!(wizard.surface().progress(), Some(50.0));
        assert_eq!(wizard.surface().submit(), (true, "Submit Survey"));
    }

    #[tokio::test]
    async fn landing_to_survey() {
        let mut wizard = wizard_at("");
        assert_eq!(wizard.handle(WizardEvent::ViewSurvey).await.unwrap(), Reaction::Updated);
        assert_eq!(wizard.page(), PageId::Intro);
        assert_eq!(wizard.handle(WizardEvent::StartSurvey).await.unwrap(), Reaction::Updated);
        assert_eq!(wizard.page(), PageId::SurveyForm);
        assert_eq!(wizard.location().history(), ["", "#intro", "#survey"]);
        assert_eq!(wizard.surface().scroll_count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn start_waits_for_settle_delay() {
        let mut wizard = wizard_at("#intro").with_config(WizardConfig::default());
        let before = tokio::time::Instant::now();
        wizard.handle(WizardEvent::StartSurvey).await.unwrap();
        assert!(before.elapsed() >= Duration::from_millis(50));
        assert_eq!(wizard.step(), 0);
    }

    #[tokio::test]
    async fn start_survey_only_from_intro() {
        let mut wizard = wizard_at("");
        assert_eq!(wizard.handle(WizardEvent::StartSurvey).await.unwrap(), Reaction::Ignored);
        assert_eq!(wizard.page(), PageId::Landing);
    }

    #[tokio::test]
    async fn events_outside_survey_are_ignored() {
        let mut wizard = wizard_at("#intro");
        assert_eq!(wizard.handle(WizardEvent::Next).await.unwrap(), Reaction::Ignored);
        assert_eq!(
            wizard.handle(edit("full_name", "Meera")).await.unwrap(),
            Reaction::Ignored
        );
        assert!(wizard.form().is_blank(&"full_name".into()));
    }

    #[tokio::test]
    async fn unknown_field_is_an_error() {
        let mut wizard = wizard_at("#survey");
        let result = wizard.handle(edit("nickname", "x")).await;
        assert!(matches!(result, Err(SurveyError::UnknownField(_))));
    }

    #[tokio::test]
    async fn fields_of_other_steps_are_ignored() {
        let mut wizard = wizard_at("#survey");
        assert_eq!(wizard.handle(edit("rating", "3")).await.unwrap(), Reaction::Ignored);
    }

    #[tokio::test]
    async fn next_is_blocked_until_valid() {
        let mut wizard = wizard_at("#survey");
        assert_eq!(wizard.handle(WizardEvent::Next).await.unwrap(), Reaction::Blocked);
        assert_eq!(wizard.step(), 0);

        wizard.handle(edit("full_name", "Meera")).await.unwrap();
        assert_eq!(wizard.handle(WizardEvent::Next).await.unwrap(), Reaction::Updated);
        assert_eq!(wizard.step(), 1);
        assert_eq!(wizard.surface().progress(), Some(100.0));

        assert_eq!(wizard.handle(WizardEvent::JumpTo(0)).await.unwrap(), Reaction::Updated);
        assert_eq!(wizard.step(), 0);
    }

    #[tokio::test]
    async fn blur_then_edit_clears_range_error() {
        let mut wizard = wizard_at("#survey");
        wizard.handle(edit("full_name", "Meera")).await.unwrap();
        wizard.handle(WizardEvent::Next).await.unwrap();

        let rating = FieldName::new("rating");
        let blur = WizardEvent::Blur {
            field: rating.clone(),
        };
        assert_eq!(wizard.handle(blur.clone()).await.unwrap(), Reaction::Ignored);

        wizard.handle(edit("rating", "9")).await.unwrap();
        assert_eq!(wizard.handle(blur).await.unwrap(), Reaction::Updated);
        assert!(wizard.surface().is_field_invalid(&rating));
        assert!(wizard.surface().is_indicator_visible(&"rating_error".into()));

        wizard.handle(edit("rating", "")).await.unwrap();
        assert!(!wizard.surface().is_field_invalid(&rating));
        assert!(!wizard.surface().is_indicator_visible(&"rating_error".into()));
    }

    #[tokio::test]
    async fn submit_only_on_last_step() {
        let mut wizard = wizard_at("#survey");
        wizard.handle(edit("full_name", "Meera")).await.unwrap();
        assert_eq!(wizard.handle(WizardEvent::Submit).await.unwrap(), Reaction::Ignored);

        wizard.handle(WizardEvent::Next).await.unwrap();
        assert_eq!(wizard.handle(WizardEvent::Submit).await.unwrap(), Reaction::Blocked);
        assert_eq!(wizard.submitter().calls(), 0);

        wizard.handle(edit("rating", "5")).await.unwrap();
        assert_eq!(
            wizard.handle(WizardEvent::Submit).await.unwrap(),
            Reaction::Submitted(SubmissionOutcome::Success)
        );
        assert!(wizard.is_completed());
    }

    #[tokio::test]
    async fn completed_wizard_ignores_edits() {
        let mut wizard = wizard_at("#survey");
        wizard.handle(edit("full_name", "Meera")).await.unwrap();
        wizard.handle(WizardEvent::Next).await.unwrap();
        wizard.handle(edit("rating", "5")).await.unwrap();
        wizard.handle(WizardEvent::Submit).await.unwrap();

        assert_eq!(wizard.handle(edit("rating", "1")).await.unwrap(), Reaction::Ignored);
        assert_eq!(wizard.handle(WizardEvent::Previous).await.unwrap(), Reaction::Ignored);
        assert_eq!(wizard.form().get_text(&"rating".into()).unwrap(), "5");
    }
}
