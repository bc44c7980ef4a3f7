/// The current value held by one named input.
///
/// Values are owned by the document the user edits. Validators and the
/// submission coordinator only read them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Raw text of a free-text, email, number, or multi-line input.
    Text(String),

    /// The option picked in a dropdown or radio group, if any.
    Choice(Option<String>),

    /// The checked members of a checkbox group, in document order.
    Checked(Vec<String>),
}

impl FieldValue {
    /// Check if the input holds nothing the user entered or picked.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::Choice(choice) => choice.is_none(),
            Self::Checked(checked) => checked.is_empty(),
        }
    }

    /// Try to get this value as text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Try to get the picked option.
    pub fn as_choice(&self) -> Option<&str> {
        match self {
            Self::Choice(choice) => choice.as_deref(),
            _ => None,
        }
    }

    /// Try to get the checked members of a checkbox group.
    pub fn as_checked(&self) -> Option<&[String]> {
        match self {
            Self::Checked(checked) => Some(checked),
            _ => None,
        }
    }

    /// Get the type name of this value for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "Text",
            Self::Choice(_) => "Choice",
            Self::Checked(_) => "Checked",
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<Option<String>> for FieldValue {
    fn from(choice: Option<String>) -> Self {
        Self::Choice(choice)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(checked: Vec<String>) -> Self {
        Self::Checked(checked)
    }
}
