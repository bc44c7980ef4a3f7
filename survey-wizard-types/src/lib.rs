//! Core types for the survey-wizard crate.
//!
//! This crate provides the foundational types for defining a multi-step survey:
//! - `SurveyDefinition`, `Step` and `StepRule` - The ordered sections and their rules
//! - `Field` and `FieldKind` - Individual inputs and their types
//! - `Form`, `FieldName` and `FieldValue` - The live document and its values
//! - `PageId` - The top-level views
//! - `Surface`, `Location` and `Submitter` traits - The collaborators the engine drives

mod field_name;
pub use field_name::{FieldName, IndicatorId};

mod field_value;
pub use field_value::FieldValue;

mod field;
pub use field::{AnyOfField, ChoiceWidget, Field, FieldKind, OneOfField};

mod survey_definition;
pub use survey_definition::{
    ConditionalField, GroupRule, RangeRule, Step, StepRule, SurveyDefinition,
};

mod form;
pub use form::Form;

mod page;
pub use page::PageId;

mod submission;
pub use submission::{GENERIC_FAILURE, SubmissionOutcome, SubmissionPayload};

mod error;
pub use error::SurveyError;

mod traits;
pub use traits::{FieldView, Location, PageView, StepView, SubmitView, Submitter, Surface};
