use crate::{FieldName, IndicatorId};

/// Error type for survey construction and navigation.
#[derive(Debug, thiserror::Error)]
pub enum SurveyError {
    /// The survey has no steps.
    #[error("Survey has no steps")]
    EmptySurvey,

    /// Two fields share a name.
    #[error("Duplicate field: {0}")]
    DuplicateField(FieldName),

    /// A name does not belong to any field of the survey.
    #[error("Unknown field: {0}")]
    UnknownField(FieldName),

    /// A conditional trigger names an option the group does not have.
    #[error("Field '{field}' has no option '{option}'")]
    UnknownOption { field: FieldName, option: String },

    /// A step rule points at a field of the wrong kind.
    #[error("Rule on step {step} does not fit field '{field}'")]
    RuleMismatch { step: usize, field: FieldName },

    /// A step index outside `0..total`.
    #[error("Step {index} out of range (survey has {total} steps)")]
    StepOutOfRange { index: usize, total: usize },

    /// The presentation surface cannot show an indicator a rule needs.
    #[error("Presentation surface has no error indicator '{0}'")]
    MissingIndicator(IndicatorId),

    /// A value of the wrong shape was written to a field.
    #[error("Field '{field}' expects a {expected} value, got {actual}")]
    TypeMismatch {
        field: FieldName,
        expected: &'static str,
        actual: &'static str,
    },

    /// Backend-specific failure (terminal I/O, HTTP client setup, etc.)
    #[error("Backend error: {0}")]
    Backend(#[from] anyhow::Error),
}

impl SurveyError {
    /// Create a backend error from any error type.
    pub fn backend(err: impl Into<anyhow::Error>) -> Self {
        Self::Backend(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = SurveyError::StepOutOfRange { index: 9, total: 8 };
        assert_eq!(err.to_string(), "Step 9 out of range (survey has 8 steps)");

        let err = SurveyError::MissingIndicator(IndicatorId::new("price_error"));
        assert_eq!(
            err.to_string(),
            "Presentation surface has no error indicator 'price_error'"
        );
    }
}
