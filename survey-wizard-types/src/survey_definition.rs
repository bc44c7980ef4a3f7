use std::collections::HashSet;

use crate::{Field, FieldName, IndicatorId, SurveyError};

/// A rule that spans more than one input or needs more than emptiness checks.
///
/// Rules belong to the step that owns them and only run when that step is
/// validated.
#[derive(Debug, Clone, PartialEq)]
pub enum StepRule {
    /// A checkbox group must have at least one checked member.
    AtLeastOne(GroupRule),

    /// A numeric input must parse as an integer within a closed interval.
    Range(RangeRule),
}

impl StepRule {
    /// The indicator this rule shows and hides.
    pub fn indicator(&self) -> &IndicatorId {
        match self {
            Self::AtLeastOne(rule) => &rule.indicator,
            Self::Range(rule) => &rule.indicator,
        }
    }

    /// The field this rule inspects.
    pub fn field(&self) -> &FieldName {
        match self {
            Self::AtLeastOne(rule) => &rule.group,
            Self::Range(rule) => &rule.field,
        }
    }
}

/// "Select at least one" rule for a checkbox group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupRule {
    pub group: FieldName,
    pub indicator: IndicatorId,
}

impl GroupRule {
    pub fn new(group: impl Into<FieldName>, indicator: impl Into<IndicatorId>) -> Self {
        Self {
            group: group.into(),
            indicator: indicator.into(),
        }
    }
}

/// Bounded integer rule, e.g. a 1-5 rating typed into a number input.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeRule {
    pub field: FieldName,
    pub min: i64,
    pub max: i64,
    pub indicator: IndicatorId,
}

impl RangeRule {
    pub fn new(
        field: impl Into<FieldName>,
        min: i64,
        max: i64,
        indicator: impl Into<IndicatorId>,
    ) -> Self {
        Self {
            field: field.into(),
            min,
            max,
            indicator: indicator.into(),
        }
    }
}

/// A free-text input that is only shown and required while a particular
/// checkbox is checked (e.g. "Other platform name" behind "Others").
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalField {
    /// The checkbox group holding the trigger.
    pub trigger_group: FieldName,

    /// The option value of the trigger checkbox.
    pub trigger_value: String,

    /// The dependent input.
    pub dependent: FieldName,
}

impl ConditionalField {
    pub fn new(
        trigger_group: impl Into<FieldName>,
        trigger_value: impl Into<String>,
        dependent: impl Into<FieldName>,
    ) -> Self {
        Self {
            trigger_group: trigger_group.into(),
            trigger_value: trigger_value.into(),
            dependent: dependent.into(),
        }
    }
}

/// One sequential section of the form.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    /// Section heading.
    pub title: String,

    /// The inputs of this section, in display order.
    pub fields: Vec<Field>,

    /// Group and range rules owned by this section.
    pub rules: Vec<StepRule>,
}

impl Step {
    /// Create a step with the given fields and no rules.
    pub fn new(title: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            title: title.into(),
            fields,
            rules: Vec::new(),
        }
    }

    /// Add a rule to this step.
    pub fn with_rule(mut self, rule: StepRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Look up a field of this step by name.
    pub fn field(&self, name: &FieldName) -> Option<&Field> {
        self.fields.iter().find(|f| f.name() == name)
    }

    /// The range rule that inspects `name`, if this step has one.
    pub fn range_rule(&self, name: &FieldName) -> Option<&RangeRule> {
        self.rules.iter().find_map(|rule| match rule {
            StepRule::Range(range) if &range.field == name => Some(range),
            _ => None,
        })
    }
}

/// The full survey: an ordered, fixed list of steps.
///
/// The step list is fixed once the wizard is built.
#[derive(Debug, Clone)]
pub struct SurveyDefinition {
    /// Title shown on the intro page.
    pub title: String,

    /// The steps, in order.
    steps: Vec<Step>,

    /// Inputs whose visibility and requiredness follow a checkbox.
    conditionals: Vec<ConditionalField>,
}

impl SurveyDefinition {
    /// Create a new survey definition with the given steps.
    pub fn new(title: impl Into<String>, steps: Vec<Step>) -> Self {
        Self {
            title: title.into(),
            steps,
            conditionals: Vec::new(),
        }
    }

    /// Register a conditional field.
    pub fn with_conditional(mut self, conditional: ConditionalField) -> Self {
        self.conditionals.push(conditional);
        self
    }

    /// Get the steps.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Get a step by index.
    pub fn step(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// Get the number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if the survey has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Get the conditional fields.
    pub fn conditionals(&self) -> &[ConditionalField] {
        &self.conditionals
    }

    /// Iterate over every field of every step, in document order.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.steps.iter().flat_map(|step| step.fields.iter())
    }

    /// Look up a field by name.
    pub fn field(&self, name: &FieldName) -> Option<&Field> {
        self.fields().find(|f| f.name() == name)
    }

    /// The index of the step that owns `name`.
    pub fn step_of(&self, name: &FieldName) -> Option<usize> {
        self.steps
            .iter()
            .position(|step| step.field(name).is_some())
    }

    /// Every indicator referenced by a step rule.
    pub fn indicators(&self) -> impl Iterator<Item = &IndicatorId> {
        self.steps
            .iter()
            .flat_map(|step| step.rules.iter().map(StepRule::indicator))
    }

    /// Check that the definition is internally consistent.
    ///
    /// Field names must be unique, and every rule and conditional must point at
    /// a field of the right kind.
    pub fn check(&self) -> Result<(), SurveyError> {
        if self.steps.is_empty() {
            return Err(SurveyError::EmptySurvey);
        }

        let mut seen = HashSet::new();
        for field in self.fields() {
            if !seen.insert(field.name()) {
                return Err(SurveyError::DuplicateField(field.name().clone()));
            }
        }

        for (index, step) in self.steps.iter().enumerate() {
            for rule in &step.rules {
                let Some(field) = step.field(rule.field()) else {
                    return Err(SurveyError::UnknownField(rule.field().clone()));
                };
                let kind_fits = match rule {
                    StepRule::AtLeastOne(_) => matches!(field.kind(), crate::FieldKind::AnyOf(_)),
                    StepRule::Range(range) => field.kind().is_text() && range.min <= range.max,
                };
                if !kind_fits {
                    return Err(SurveyError::RuleMismatch {
                        step: index,
                        field: field.name().clone(),
                    });
                }
            }
        }

        for conditional in &self.conditionals {
            let trigger = self
                .field(&conditional.trigger_group)
                .ok_or_else(|| SurveyError::UnknownField(conditional.trigger_group.clone()))?;
            if !trigger
                .kind()
                .options()
                .iter()
                .any(|o| o == &conditional.trigger_value)
            {
                return Err(SurveyError::UnknownOption {
                    field: conditional.trigger_group.clone(),
                    option: conditional.trigger_value.clone(),
                });
            }
            let dependent = self
                .field(&conditional.dependent)
                .ok_or_else(|| SurveyError::UnknownField(conditional.dependent.clone()))?;
            if !dependent.kind().is_text() {
                return Err(SurveyError::UnknownField(conditional.dependent.clone()));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AnyOfField, FieldKind};

    fn platforms() -> Step {
        Step::new(
            "Usage",
            vec![
                Field::required(
                    "platforms_used",
                    "Platforms",
                    FieldKind::AnyOf(AnyOfField::new(["Zepto", "Others"])),
                ),
                Field::optional("other_platform_name", "Other", FieldKind::Input),
            ],
        )
        .with_rule(StepRule::AtLeastOne(GroupRule::new(
            "platforms_used",
            "platforms_error",
        )))
    }

    #[test]
    fn lookup_across_steps() {
        let survey = SurveyDefinition::new(
            "Test",
            vec![
                Step::new("About", vec![Field::required("full_name", "Name", FieldKind::Input)]),
                platforms(),
            ],
        );

        assert_eq!(survey.len(), 2);
        assert_eq!(survey.step_of(&"other_platform_name".into()), Some(1));
        assert!(survey.field(&"missing".into()).is_none());
        assert_eq!(survey.indicators().count(), 1);
        assert!(survey.check().is_ok());
    }

    #[test]
    fn empty_survey_is_rejected() {
        let survey = SurveyDefinition::new("Empty", vec![]);
        assert!(matches!(survey.check(), Err(SurveyError::EmptySurvey)));
    }

    #[test]
    fn duplicate_fields_are_rejected() {
        let survey = SurveyDefinition::new(
            "Dup",
            vec![
                Step::new("A", vec![Field::required("email", "Email", FieldKind::Email)]),
                Step::new("B", vec![Field::required("email", "Email", FieldKind::Email)]),
            ],
        );
        assert!(matches!(survey.check(), Err(SurveyError::DuplicateField(_))));
    }

    #[test]
    fn rule_kind_is_checked() {
        let survey = SurveyDefinition::new(
            "Bad",
            vec![
                Step::new("A", vec![Field::required("full_name", "Name", FieldKind::Input)])
                    .with_rule(StepRule::AtLeastOne(GroupRule::new("full_name", "err"))),
            ],
        );
        assert!(matches!(
            survey.check(),
            Err(SurveyError::RuleMismatch { step: 0, .. })
        ));
    }

    #[test]
    fn conditional_trigger_must_be_an_option() {
        let survey = SurveyDefinition::new("Cond", vec![platforms()]).with_conditional(
            ConditionalField::new("platforms_used", "Elsewhere", "other_platform_name"),
        );
        assert!(matches!(
            survey.check(),
            Err(SurveyError::UnknownOption { .. })
        ));
    }
}
