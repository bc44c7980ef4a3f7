use crate::{FieldName, FieldValue};

/// A single named input in a survey step.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// The name shared by the input (or by every option of a group).
    name: FieldName,

    /// The label shown next to the input.
    label: String,

    /// The kind of input (determines stored value and payload encoding).
    kind: FieldKind,

    /// Whether the input starts out required.
    required: bool,
}

impl Field {
    /// Create a required field.
    pub fn required(name: impl Into<FieldName>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            required: true,
        }
    }

    /// Create an optional field.
    ///
    /// Optional free-text fields are sent as `null` when left empty.
    pub fn optional(name: impl Into<FieldName>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            required: false,
            ..Self::required(name, label, kind)
        }
    }

    /// Get the field name.
    pub fn name(&self) -> &FieldName {
        &self.name
    }

    /// Get the label text.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the field kind.
    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    /// Whether the field is required when the form is first shown.
    pub fn is_required(&self) -> bool {
        self.required
    }
}

/// The kind of input, determining how its value is stored and submitted.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// Single-line text input.
    Input,

    /// Email input. Validated like text; format checks are left to the server.
    Email,

    /// Multi-line text area.
    Multiline,

    /// Numeric input. Kept as raw text, submitted as an integer.
    Int,

    /// Yes/no radio group whose option values are `"true"` and `"false"`.
    /// Submitted as a boolean.
    Confirm,

    /// Pick exactly one option (dropdown or radio group).
    OneOf(OneOfField),

    /// Check any number of options (checkbox group).
    AnyOf(AnyOfField),
}

impl FieldKind {
    /// The value an untouched input of this kind holds.
    pub fn empty_value(&self) -> FieldValue {
        match self {
            Self::Input | Self::Email | Self::Multiline | Self::Int => {
                FieldValue::Text(String::new())
            }
            Self::Confirm | Self::OneOf(_) => FieldValue::Choice(None),
            Self::AnyOf(_) => FieldValue::Checked(Vec::new()),
        }
    }

    /// Check if this is a free-text kind.
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Input | Self::Email | Self::Multiline | Self::Int)
    }

    /// The selectable options, for group kinds.
    pub fn options(&self) -> &[String] {
        match self {
            Self::OneOf(one_of) => &one_of.options,
            Self::AnyOf(any_of) => &any_of.options,
            _ => &[],
        }
    }
}

/// How a [`OneOfField`] is presented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChoiceWidget {
    /// A dropdown with an empty placeholder entry.
    #[default]
    Dropdown,
    /// A radio group; required means one option must be checked.
    Radio,
}

/// Configuration for a pick-one field.
#[derive(Debug, Clone, PartialEq)]
pub struct OneOfField {
    /// The option values, in display order.
    pub options: Vec<String>,

    /// Dropdown or radio group.
    pub widget: ChoiceWidget,
}

impl OneOfField {
    /// Create a dropdown with the given options.
    pub fn dropdown<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
            widget: ChoiceWidget::Dropdown,
        }
    }

    /// Create a radio group with the given options.
    pub fn radio<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            widget: ChoiceWidget::Radio,
            ..Self::dropdown(options)
        }
    }
}

/// Configuration for a checkbox group.
#[derive(Debug, Clone, PartialEq)]
pub struct AnyOfField {
    /// The option values, in display order.
    pub options: Vec<String>,
}

impl AnyOfField {
    /// Create a checkbox group with the given options.
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
        }
    }
}
