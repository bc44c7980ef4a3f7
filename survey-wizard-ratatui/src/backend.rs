//! Terminal event loop driving a [`Wizard`].
//!
//! Keys are mapped to wizard events; after every event the screen is redrawn
//! from the form and the [`TerminalSurface`].

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, prelude::CrosstermBackend};
use std::io::{self, Stdout};
use survey_wizard::{
    Field, FieldKind, FieldName, FieldValue, Form, MemoryLocation, PageId, Step, Submitter,
    SurveyError, Wizard, WizardEvent,
};
use thiserror::Error;
use tracing::debug;

use crate::draw::{self, Screen};
use crate::{TerminalSurface, Theme};

/// The wizard as driven by the terminal.
pub type TerminalWizard<T> = Wizard<TerminalSurface, MemoryLocation, T>;

/// Error type for the terminal front-end.
#[derive(Debug, Error)]
pub enum RatatuiError {
    /// User quit before finishing (e.g., pressed Esc).
    #[error("Survey cancelled by user")]
    Cancelled,

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal setup/restore error.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// The wizard rejected an event.
    #[error(transparent)]
    Survey(#[from] SurveyError),
}

/// Option labels and submitted values of a group field.
pub(crate) fn choices(kind: &FieldKind) -> Vec<(String, String)> {
    match kind {
        FieldKind::Confirm => vec![
            ("Yes".to_string(), "true".to_string()),
            ("No".to_string(), "false".to_string()),
        ],
        other => other
            .options()
            .iter()
            .map(|option| (option.clone(), option.clone()))
            .collect(),
    }
}

/// What a key press asks for.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Action {
    Event(WizardEvent),
    Back,
    Forward,
    Quit,
    Finish,
}

/// Which field, and which option of it, has keyboard focus.
#[derive(Debug, Clone, Default)]
pub(crate) struct Controls {
    step: usize,
    field: usize,
    option: usize,
}

impl Controls {
    pub(crate) fn field(&self) -> usize {
        self.field
    }

    pub(crate) fn option(&self) -> usize {
        self.option
    }

    /// Fields of `step` that are currently shown.
    pub(crate) fn visible_fields<'a>(&self, step: &'a Step, form: &Form) -> Vec<&'a Field> {
        step.fields
            .iter()
            .filter(|field| form.is_visible(field.name()))
            .collect()
    }

    fn reset(&mut self, step: usize) {
        *self = Self {
            step,
            ..Self::default()
        };
    }

    /// Move focus to `name` if it is shown on the current step.
    fn focus(&mut self, name: &FieldName, step: &Step, form: &Form) {
        if let Some(position) = self
            .visible_fields(step, form)
            .iter()
            .position(|field| field.name() == name)
        {
            self.field = position;
            self.option = 0;
        }
    }

    /// Map a key press to actions, given the wizard's current state.
    pub(crate) fn map_key<T: Submitter>(
        &mut self,
        key: KeyEvent,
        wizard: &TerminalWizard<T>,
    ) -> Vec<Action> {
        if key.modifiers.contains(KeyModifiers::ALT) {
            return match key.code {
                KeyCode::Left => vec![Action::Back],
                KeyCode::Right => vec![Action::Forward],
                _ => Vec::new(),
            };
        }

        if wizard.is_completed() {
            return match key.code {
                KeyCode::Enter | KeyCode::Esc => vec![Action::Finish],
                _ => Vec::new(),
            };
        }

        match (wizard.page(), key.code) {
            (_, KeyCode::Esc) => vec![Action::Quit],
            (PageId::Landing, KeyCode::Enter) => vec![Action::Event(WizardEvent::ViewSurvey)],
            (PageId::Intro, KeyCode::Enter) => vec![Action::Event(WizardEvent::StartSurvey)],
            (PageId::SurveyForm, code) => self.map_form_key(code, wizard),
            _ => Vec::new(),
        }
    }

    fn map_form_key<T: Submitter>(&mut self, code: KeyCode, wizard: &TerminalWizard<T>) -> Vec<Action> {
        if self.step != wizard.step() {
            self.reset(wizard.step());
        }
        let Some(step) = wizard.definition().step(wizard.step()) else {
            return Vec::new();
        };
        let visible = self.visible_fields(step, wizard.form());
        let Some(field) = visible.get(self.field).copied() else {
            return Vec::new();
        };
        let name = field.name().clone();
        let options = choices(field.kind());

        match code {
            KeyCode::Enter => {
                let is_last = wizard.step() + 1 == wizard.definition().len();
                let event = if is_last {
                    WizardEvent::Submit
                } else {
                    WizardEvent::Next
                };
                vec![Action::Event(WizardEvent::Blur { field: name }), Action::Event(event)]
            }
            KeyCode::PageDown => vec![Action::Event(WizardEvent::Next)],
            KeyCode::PageUp => vec![Action::Event(WizardEvent::Previous)],
            KeyCode::Tab => {
                self.field = (self.field + 1) % visible.len();
                self.option = 0;
                vec![Action::Event(WizardEvent::Blur { field: name })]
            }
            KeyCode::BackTab => {
                self.field = (self.field + visible.len() - 1) % visible.len();
                self.option = 0;
                vec![Action::Event(WizardEvent::Blur { field: name })]
            }
            KeyCode::Up if !options.is_empty() => {
                self.option = self.option.saturating_sub(1);
                Vec::new()
            }
            KeyCode::Down if !options.is_empty() => {
                self.option = (self.option + 1).min(options.len() - 1);
                Vec::new()
            }
            KeyCode::Char(' ') if !options.is_empty() => {
                let Some((_, value)) = options.get(self.option) else {
                    return Vec::new();
                };
                let event = match field.kind() {
                    FieldKind::AnyOf(_) => {
                        let checked = wizard
                            .form()
                            .get_checked(&name)
                            .is_ok_and(|checked| checked.contains(value));
                        WizardEvent::Toggle {
                            group: name,
                            option: value.clone(),
                            checked: !checked,
                        }
                    }
                    _ => WizardEvent::Edit {
                        field: name,
                        value: FieldValue::Choice(Some(value.clone())),
                    },
                };
                vec![Action::Event(event)]
            }
            KeyCode::Char(c) if field.kind().is_text() => {
                let mut text = wizard.form().get_text(&name).unwrap_or_default().to_string();
                text.push(c);
                vec![Action::Event(WizardEvent::Edit {
                    field: name,
                    value: FieldValue::Text(text),
                })]
            }
            KeyCode::Backspace if field.kind().is_text() => {
                let mut text = wizard.form().get_text(&name).unwrap_or_default().to_string();
                if text.pop().is_none() {
                    return Vec::new();
                }
                vec![Action::Event(WizardEvent::Edit {
                    field: name,
                    value: FieldValue::Text(text),
                })]
            }
            _ => Vec::new(),
        }
    }
}

/// Ratatui front-end for the survey wizard.
#[derive(Debug, Clone)]
pub struct RatatuiApp {
    /// Title shown on the landing page.
    title: String,
    /// Color theme for the UI.
    theme: Theme,
}

impl Default for RatatuiApp {
    fn default() -> Self {
        Self::new()
    }
}

impl RatatuiApp {
    pub fn new() -> Self {
        Self {
            title: "Survey".to_string(),
            theme: Theme::default(),
        }
    }

    /// Set the title shown on the landing page.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set a custom color theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>, RatatuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn restore_terminal(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<(), RatatuiError> {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run `wizard` until the user finishes after a successful submission.
    ///
    /// The wizard must already be started. Quitting early gives
    /// [`RatatuiError::Cancelled`].
    pub async fn run<T: Submitter>(&self, wizard: &mut TerminalWizard<T>) -> Result<(), RatatuiError> {
        let mut terminal = self.setup_terminal()?;
        let result = self.event_loop(&mut terminal, wizard).await;
        self.restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop<T: Submitter>(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        wizard: &mut TerminalWizard<T>,
    ) -> Result<(), RatatuiError> {
        let mut controls = Controls::default();

        loop {
            terminal.draw(|frame| {
                let screen = Screen {
                    title: &self.title,
                    theme: &self.theme,
                    definition: wizard.definition(),
                    form: wizard.form(),
                    surface: wizard.surface(),
                    controls: &controls,
                };
                draw::draw(frame, &screen);
            })?;

            let event = tokio::task::spawn_blocking(event::read)
                .await
                .map_err(|err| RatatuiError::Terminal(err.to_string()))??;
            let Event::Key(key) = event else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }

            for action in controls.map_key(key, wizard) {
                match action {
                    Action::Quit => return Err(RatatuiError::Cancelled),
                    Action::Finish => return Ok(()),
                    Action::Back => {
                        if wizard.location_mut().back() {
                            wizard.handle(WizardEvent::LocationChanged).await?;
                        }
                    }
                    Action::Forward => {
                        if wizard.location_mut().forward() {
                            wizard.handle(WizardEvent::LocationChanged).await?;
                        }
                    }
                    Action::Event(event) => {
                        if let WizardEvent::Edit { field, .. } | WizardEvent::Toggle { group: field, .. } =
                            &event
                        {
                            wizard.surface_mut().clear_report(field);
                        }
                        let reaction = wizard.handle(event).await?;
                        debug!(?reaction, "event handled");
                    }
                }
            }

            if wizard.surface_mut().take_scroll_request() {
                controls.reset(wizard.step());
            }
            if let Some(field) = wizard.surface_mut().take_focus_request() {
                if let Some(step) = wizard.definition().step(wizard.step()) {
                    controls.focus(&field, step, wizard.form());
                }
            }
        }
    }
}
