//! Building the submission payload from the form.

use serde_json::Value;
use survey_wizard_types::{Field, FieldKind, FieldValue, Form, SubmissionPayload, SurveyDefinition};

/// Collect every field of every step into one flat record, in document order.
///
/// Values are converted by kind:
/// - numeric inputs become integers, or `null` when they do not parse
/// - yes/no groups become booleans
/// - checkbox groups become lists of the checked option values
/// - optional inputs left empty become `null`
///
/// Hidden inputs are collected as if empty.
pub fn collect(definition: &SurveyDefinition, form: &Form) -> SubmissionPayload {
    let mut payload = SubmissionPayload::new();
    for field in definition.fields() {
        let value = if form.is_visible(field.name()) {
            form.get(field.name())
                .map_or(Value::Null, |value| convert(field, value))
        } else {
            convert(field, &field.kind().empty_value())
        };
        payload.insert(field.name(), value);
    }
    payload
}

fn convert(field: &Field, value: &FieldValue) -> Value {
    if value.is_empty() && !field.is_required() {
        return match field.kind() {
            FieldKind::AnyOf(_) => Value::Array(Vec::new()),
            _ => Value::Null,
        };
    }

    match (field.kind(), value) {
        (FieldKind::Int, FieldValue::Text(raw)) => {
            raw.trim().parse::<i64>().map_or(Value::Null, Value::from)
        }
        (FieldKind::Confirm, FieldValue::Choice(choice)) => {
            Value::Bool(choice.as_deref() == Some("true"))
        }
        (_, FieldValue::Text(text)) => Value::String(text.clone()),
        (_, FieldValue::Choice(choice)) => Value::String(choice.clone().unwrap_or_default()),
        (_, FieldValue::Checked(checked)) => {
            Value::Array(checked.iter().cloned().map(Value::String).collect())
        }
    }
}
