//! # survey-wizard
//!
//! A multi-step survey wizard engine. Presentation-agnostic.
//!
//! The engine owns the state of a single-page survey application: which
//! top-level page is shown, which step of the form is active, which inputs
//! failed validation, and whether the survey was submitted. Everything the
//! user sees goes through the view traits of [`Surface`]; the address bar goes
//! through [`Location`]; the network goes through [`Submitter`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! use survey_wizard::{MemoryLocation, RecordingSurface, ScriptedSubmitter, Wizard, WizardEvent};
//!
//! let mut wizard = Wizard::new(
//!     example_surveys::quick_commerce(),
//!     RecordingSurface::new(),
//!     MemoryLocation::new(),
//!     ScriptedSubmitter::new(),
//! )?;
//! wizard.start()?;
//! wizard.handle(WizardEvent::ViewSurvey).await?;
//! wizard.handle(WizardEvent::StartSurvey).await?;
//! ```
//!
//! ## Components
//!
//! - [`PageRouter`] - location token <-> visible page, via a route table
//! - [`StepController`] - the current step and the progress indicator
//! - [`validate`] - required fields, checkbox groups and numeric ranges
//! - [`conditional`] - inputs shown and required behind a checkbox
//! - [`SubmissionCoordinator`] - final validation, payload and outcome
//!
//! ## Surfaces
//!
//! Surfaces are separate crates that implement the view traits:
//! - `survey-wizard-ratatui` - terminal UI
//!
//! `RecordingSurface`, `MemoryLocation` and `ScriptedSubmitter` stand in for a
//! real surface, address bar and endpoint in tests.

// Re-export all types from survey-wizard-types
pub use survey_wizard_types::*;

pub mod conditional;
pub mod payload;
pub mod validate;

mod config;
mod router;
mod steps;
mod submission;
mod wizard;

pub use config::WizardConfig;
pub use router::{PageRouter, ROUTES, Route, canonical_token, resolve};
pub use steps::{StepController, StepMove, progress_percent};
pub use submission::SubmissionCoordinator;
pub use wizard::{Reaction, Wizard, WizardEvent};

// Test doubles for driving the wizard without a renderer
mod memory_location;
mod scripted_submitter;
mod test_surface;
pub use memory_location::MemoryLocation;
pub use scripted_submitter::ScriptedSubmitter;
pub use test_surface::RecordingSurface;
