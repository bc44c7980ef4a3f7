//! Inputs whose visibility and requiredness follow a checkbox.

use survey_wizard_types::{ConditionalField, FieldName, FieldView, Form, SurveyDefinition, SurveyError};
use tracing::debug;

/// Bring the dependent of `conditional` in line with its trigger.
///
/// While the trigger is checked the dependent is shown and required. Once it
/// is unchecked the dependent is hidden, loses the requirement, and its value
/// is wiped. Applying twice in a row changes nothing.
pub fn apply(
    conditional: &ConditionalField,
    form: &mut Form,
    view: &mut impl FieldView,
) -> Result<(), SurveyError> {
    let checked = form
        .get_checked(&conditional.trigger_group)?
        .iter()
        .any(|value| value == &conditional.trigger_value);

    let dependent = &conditional.dependent;
    form.set_visible(dependent, checked)?;
    form.set_required(dependent, checked)?;
    if !checked {
        form.clear(dependent)?;
        view.set_field_invalid(dependent, false);
    }
    view.set_field_visible(dependent, checked);

    debug!(field = %dependent, visible = checked, "conditional field updated");
    Ok(())
}

/// Re-apply every conditional triggered by `group`.
pub fn apply_for_group(
    definition: &SurveyDefinition,
    group: &FieldName,
    form: &mut Form,
    view: &mut impl FieldView,
) -> Result<(), SurveyError> {
    definition
        .conditionals()
        .iter()
        .filter(|conditional| &conditional.trigger_group == group)
        .try_for_each(|conditional| apply(conditional, form, view))
}

/// Re-apply every conditional of the survey.
pub fn apply_all(
    definition: &SurveyDefinition,
    form: &mut Form,
    view: &mut impl FieldView,
) -> Result<(), SurveyError> {
    definition
        .conditionals()
        .iter()
        .try_for_each(|conditional| apply(conditional, form, view))
}
