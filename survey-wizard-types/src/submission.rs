use serde::Serialize;
use serde_json::{Map, Value};

use crate::FieldName;

/// Message shown when a failed submission carries no usable detail.
pub const GENERIC_FAILURE: &str = "Submission failed";

/// The flat record sent once per successful validation pass.
///
/// Serializes as a single JSON object keyed by field name, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SubmissionPayload {
    fields: Map<String, Value>,
}

impl SubmissionPayload {
    /// Create an empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the entry for `name`.
    pub fn insert(&mut self, name: &FieldName, value: impl Into<Value>) {
        self.fields.insert(name.as_str().to_string(), value.into());
    }

    /// Get the entry for `name`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the payload has no entries.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over all entries.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }

    /// The payload as a JSON object.
    pub fn to_value(&self) -> Value {
        Value::Object(self.fields.clone())
    }
}

/// Result of one remote submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The endpoint accepted the payload.
    Success,

    /// The endpoint rejected individual fields; one message per rejection.
    ValidationFailure(Vec<String>),

    /// Any other failure: non-OK status, network error, unreadable body.
    TransportFailure(String),
}

impl SubmissionOutcome {
    /// Classify the JSON body of a non-OK response.
    ///
    /// A list-valued `detail` is a field rejection list (each entry exposes
    /// `msg`); a string `detail` is shown as-is; anything else falls back to
    /// [`GENERIC_FAILURE`].
    pub fn from_failure_body(body: &Value) -> Self {
        match body.get("detail") {
            Some(Value::Array(entries)) => Self::ValidationFailure(
                entries
                    .iter()
                    .map(|entry| match entry.get("msg") {
                        Some(Value::String(msg)) => msg.clone(),
                        Some(other) => other.to_string(),
                        None => entry.to_string(),
                    })
                    .collect(),
            ),
            Some(Value::String(detail)) if !detail.is_empty() => {
                Self::TransportFailure(detail.clone())
            }
            Some(Value::Null) | None => Self::TransportFailure(GENERIC_FAILURE.to_string()),
            Some(Value::String(_)) => Self::TransportFailure(GENERIC_FAILURE.to_string()),
            Some(other) => Self::TransportFailure(other.to_string()),
        }
    }

    /// Check if this is the success outcome.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// The human-readable message for a failed outcome.
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Success => None,
            Self::ValidationFailure(messages) => {
                Some(format!("Validation Error: {}", messages.join(", ")))
            }
            Self::TransportFailure(message) => Some(message.clone()),
        }
    }
}
