//! # survey-wizard-ratatui
//!
//! Terminal front-end for survey-wizard.
//!
//! [`TerminalSurface`] implements the view traits; [`RatatuiApp`] reads keys,
//! feeds them to the [`Wizard`](survey_wizard::Wizard) and redraws.
//!
//! ## Keys
//!
//! - `Enter` - view survey, start survey, next section, submit
//! - `Tab` / `Shift+Tab` - move between fields
//! - `↑` / `↓` and `Space` - pick an option, toggle a checkbox
//! - `PgUp` / `PgDn` - previous / next section
//! - `Alt+←` / `Alt+→` - back / forward through the page history
//! - `Esc` - quit

mod backend;
mod draw;
mod surface;

pub use backend::{RatatuiApp, RatatuiError, TerminalWizard};
pub use surface::{TerminalSurface, Theme};
