use std::collections::HashMap;

use crate::{FieldName, FieldValue, SurveyDefinition, SurveyError};

/// Per-input state: the value plus the two flags the wizard may toggle.
#[derive(Debug, Clone)]
struct Entry {
    value: FieldValue,
    required: bool,
    visible: bool,
    /// Option values in document order (group kinds only).
    options: Vec<String>,
}

/// The live document: every input of every step with its current value.
///
/// Presentation layers write user edits here; validators and the submission
/// coordinator read from here.
#[derive(Debug, Clone, Default)]
pub struct Form {
    entries: HashMap<FieldName, Entry>,
}

impl Form {
    /// Build an untouched form for `definition`.
    ///
    /// Dependents of conditional fields start hidden and not required.
    pub fn new(definition: &SurveyDefinition) -> Self {
        let mut entries = HashMap::new();
        for field in definition.fields() {
            let options = field.kind().options().to_vec();
            entries.insert(
                field.name().clone(),
                Entry {
                    value: field.kind().empty_value(),
                    required: field.is_required(),
                    visible: true,
                    options,
                },
            );
        }
        for conditional in definition.conditionals() {
            if let Some(entry) = entries.get_mut(&conditional.dependent) {
                entry.required = false;
                entry.visible = false;
            }
        }
        Self { entries }
    }

    fn entry(&self, name: &FieldName) -> Result<&Entry, SurveyError> {
        self.entries
            .get(name)
            .ok_or_else(|| SurveyError::UnknownField(name.clone()))
    }

    fn entry_mut(&mut self, name: &FieldName) -> Result<&mut Entry, SurveyError> {
        self.entries
            .get_mut(name)
            .ok_or_else(|| SurveyError::UnknownField(name.clone()))
    }

    /// Get the value of a field.
    pub fn get(&self, name: &FieldName) -> Option<&FieldValue> {
        self.entries.get(name).map(|e| &e.value)
    }

    /// Check if a field exists.
    pub fn contains(&self, name: &FieldName) -> bool {
        self.entries.contains_key(name)
    }

    /// Get the number of fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the form has no fields.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace the value of a field.
    ///
    /// The new value must have the same shape as the old one. Dropdowns, radio
    /// groups and checkbox groups only accept option values they know; a
    /// checkbox group keeps them in document order.
    pub fn set(&mut self, name: &FieldName, value: impl Into<FieldValue>) -> Result<(), SurveyError> {
        let value = value.into();
        let entry = self.entry_mut(name)?;
        let expected = entry.value.type_name();
        if expected != value.type_name() {
            return Err(SurveyError::TypeMismatch {
                field: name.clone(),
                expected,
                actual: value.type_name(),
            });
        }
        entry.value = match value {
            FieldValue::Checked(checked) => {
                if let Some(unknown) = checked.iter().find(|c| !entry.options.contains(c)) {
                    return Err(SurveyError::UnknownOption {
                        field: name.clone(),
                        option: unknown.clone(),
                    });
                }
                let ordered = entry
                    .options
                    .iter()
                    .filter(|o| checked.contains(o))
                    .cloned()
                    .collect();
                FieldValue::Checked(ordered)
            }
            FieldValue::Choice(Some(choice))
                if !entry.options.is_empty() && !entry.options.contains(&choice) =>
            {
                return Err(SurveyError::UnknownOption {
                    field: name.clone(),
                    option: choice,
                });
            }
            other => other,
        };
        Ok(())
    }

    /// Check or uncheck one member of a checkbox group.
    pub fn set_checked(
        &mut self,
        group: &FieldName,
        option: &str,
        checked: bool,
    ) -> Result<(), SurveyError> {
        let entry = self.entry_mut(group)?;
        let FieldValue::Checked(current) = &entry.value else {
            return Err(SurveyError::TypeMismatch {
                field: group.clone(),
                expected: "Checked",
                actual: entry.value.type_name(),
            });
        };
        if !entry.options.iter().any(|o| o == option) {
            return Err(SurveyError::UnknownOption {
                field: group.clone(),
                option: option.to_string(),
            });
        }
        let next = entry
            .options
            .iter()
            .filter(|o| {
                if o.as_str() == option {
                    checked
                } else {
                    current.contains(o)
                }
            })
            .cloned()
            .collect();
        entry.value = FieldValue::Checked(next);
        Ok(())
    }

    /// Reset a field to the value of an untouched input.
    pub fn clear(&mut self, name: &FieldName) -> Result<(), SurveyError> {
        let entry = self.entry_mut(name)?;
        entry.value = match entry.value {
            FieldValue::Text(_) => FieldValue::Text(String::new()),
            FieldValue::Choice(_) => FieldValue::Choice(None),
            FieldValue::Checked(_) => FieldValue::Checked(Vec::new()),
        };
        Ok(())
    }

    /// Check if a field holds nothing. Unknown fields count as empty.
    pub fn is_blank(&self, name: &FieldName) -> bool {
        self.get(name).is_none_or(FieldValue::is_empty)
    }

    /// Whether the field must be filled before its step can be left.
    pub fn is_required(&self, name: &FieldName) -> bool {
        self.entries.get(name).is_some_and(|e| e.required)
    }

    /// Toggle the required constraint of a field.
    pub fn set_required(&mut self, name: &FieldName, required: bool) -> Result<(), SurveyError> {
        self.entry_mut(name)?.required = required;
        Ok(())
    }

    /// Whether the field is currently shown.
    pub fn is_visible(&self, name: &FieldName) -> bool {
        self.entries.get(name).is_some_and(|e| e.visible)
    }

    /// Show or hide a field.
    pub fn set_visible(&mut self, name: &FieldName, visible: bool) -> Result<(), SurveyError> {
        self.entry_mut(name)?.visible = visible;
        Ok(())
    }

    // === Convenience accessors ===

    /// Get the raw text of a text-like field.
    pub fn get_text(&self, name: &FieldName) -> Result<&str, SurveyError> {
        match &self.entry(name)?.value {
            FieldValue::Text(text) => Ok(text),
            other => Err(SurveyError::TypeMismatch {
                field: name.clone(),
                expected: "Text",
                actual: other.type_name(),
            }),
        }
    }

    /// Get the picked option of a dropdown or radio group.
    pub fn get_choice(&self, name: &FieldName) -> Result<Option<&str>, SurveyError> {
        match &self.entry(name)?.value {
            FieldValue::Choice(choice) => Ok(choice.as_deref()),
            other => Err(SurveyError::TypeMismatch {
                field: name.clone(),
                expected: "Choice",
                actual: other.type_name(),
            }),
        }
    }

    /// Get the checked members of a checkbox group, in document order.
    pub fn get_checked(&self, name: &FieldName) -> Result<&[String], SurveyError> {
        match &self.entry(name)?.value {
            FieldValue::Checked(checked) => Ok(checked),
            other => Err(SurveyError::TypeMismatch {
                field: name.clone(),
                expected: "Checked",
                actual: other.type_name(),
            }),
        }
    }
}
