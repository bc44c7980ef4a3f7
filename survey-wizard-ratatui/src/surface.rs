//! Display state the wizard writes and the renderer reads.

use std::collections::{HashMap, HashSet};

use ratatui::style::Color;
use survey_wizard::{FieldName, FieldView, IndicatorId, PageId, PageView, StepView, SubmitView};

/// Color theme for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub primary: Color,
    pub secondary: Color,
    pub text: Color,
    pub highlight: Color,
    pub error: Color,
    pub success: Color,
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            secondary: Color::Blue,
            text: Color::White,
            highlight: Color::Yellow,
            error: Color::Red,
            success: Color::Green,
            border: Color::Gray,
        }
    }
}

/// Terminal presentation surface.
///
/// Holds what the wizard asked to show. Error indicators must be registered
/// with their message up front; the wizard refuses to start when one of the
/// survey's indicators is missing.
#[derive(Debug, Clone)]
pub struct TerminalSurface {
    page: PageId,
    landing_mode: bool,
    active_step: Option<usize>,
    progress: f64,
    indicator_messages: HashMap<IndicatorId, String>,
    shown_indicators: HashSet<IndicatorId>,
    invalid: HashSet<FieldName>,
    hidden: HashSet<FieldName>,
    /// A field whose required check failed and was not edited since.
    reported: HashSet<FieldName>,
    focus_request: Option<FieldName>,
    submit_enabled: bool,
    submit_label: String,
    transport_error: Option<String>,
    success: bool,
    scrolled: bool,
}

impl Default for TerminalSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self {
            page: PageId::Landing,
            landing_mode: true,
            active_step: None,
            progress: 0.0,
            indicator_messages: HashMap::new(),
            shown_indicators: HashSet::new(),
            invalid: HashSet::new(),
            hidden: HashSet::new(),
            reported: HashSet::new(),
            focus_request: None,
            submit_enabled: true,
            submit_label: String::new(),
            transport_error: None,
            success: false,
            scrolled: false,
        }
    }

    /// Register an error indicator and the message it displays.
    pub fn with_indicator(
        mut self,
        indicator: impl Into<IndicatorId>,
        message: impl Into<String>,
    ) -> Self {
        self.indicator_messages
            .insert(indicator.into(), message.into());
        self
    }

    pub fn page(&self) -> PageId {
        self.page
    }

    pub fn landing_mode(&self) -> bool {
        self.landing_mode
    }

    pub fn active_step(&self) -> Option<usize> {
        self.active_step
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Messages of every indicator currently shown, sorted.
    pub fn indicator_messages(&self) -> Vec<&str> {
        let mut messages: Vec<&str> = self
            .shown_indicators
            .iter()
            .filter_map(|id| self.indicator_messages.get(id))
            .map(String::as_str)
            .collect();
        messages.sort_unstable();
        messages
    }

    pub fn is_field_invalid(&self, field: &FieldName) -> bool {
        self.invalid.contains(field) || self.reported.contains(field)
    }

    pub fn is_field_visible(&self, field: &FieldName) -> bool {
        !self.hidden.contains(field)
    }

    /// Forget a failed required check once the field is edited.
    pub fn clear_report(&mut self, field: &FieldName) {
        self.reported.remove(field);
    }

    /// The field the wizard asked to focus, if any. Cleared by the call.
    pub fn take_focus_request(&mut self) -> Option<FieldName> {
        self.focus_request.take()
    }

    /// Whether the wizard asked to scroll to the top. Cleared by the call.
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scrolled)
    }

    pub fn submit(&self) -> (bool, &str) {
        (self.submit_enabled, &self.submit_label)
    }

    pub fn transport_error(&self) -> Option<&str> {
        self.transport_error.as_deref()
    }

    pub fn success_shown(&self) -> bool {
        self.success
    }
}

impl PageView for TerminalSurface {
    fn set_page_visible(&mut self, page: PageId, visible: bool) {
        if visible {
            self.page = page;
        }
    }

    fn set_landing_mode(&mut self, enabled: bool) {
        self.landing_mode = enabled;
    }
}

impl StepView for TerminalSurface {
    fn set_step_active(&mut self, index: usize, active: bool) {
        if active {
            self.active_step = Some(index);
        } else if self.active_step == Some(index) {
            self.active_step = None;
        }
    }

    fn set_progress(&mut self, percent: f64) {
        self.progress = percent.clamp(0.0, 100.0);
    }

    fn scroll_to_top(&mut self) {
        self.scrolled = true;
    }
}

impl FieldView for TerminalSurface {
    fn set_indicator(&mut self, indicator: &IndicatorId, visible: bool) {
        if visible {
            self.shown_indicators.insert(indicator.clone());
        } else {
            self.shown_indicators.remove(indicator);
        }
    }

    fn has_indicator(&self, indicator: &IndicatorId) -> bool {
        self.indicator_messages.contains_key(indicator)
    }

    fn set_field_invalid(&mut self, field: &FieldName, invalid: bool) {
        if invalid {
            self.invalid.insert(field.clone());
        } else {
            self.invalid.remove(field);
        }
    }

    fn report_validity(&mut self, field: &FieldName) {
        self.reported.insert(field.clone());
    }

    fn set_field_visible(&mut self, field: &FieldName, visible: bool) {
        if visible {
            self.hidden.remove(field);
        } else {
            self.hidden.insert(field.clone());
            self.reported.remove(field);
        }
    }

    fn focus(&mut self, field: &FieldName) {
        self.focus_request = Some(field.clone());
    }
}

impl SubmitView for TerminalSurface {
    fn set_submit(&mut self, enabled: bool, label: &str) {
        self.submit_enabled = enabled;
        self.submit_label = label.to_string();
    }

    fn set_transport_error(&mut self, message: Option<&str>) {
        self.transport_error = message.map(str::to_string);
    }

    fn show_success(&mut self) {
        self.success = true;
        self.active_step = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_default() {
        let theme = Theme::default();
        assert_eq!(theme.primary, Color::Cyan);
        assert_eq!(theme.error, Color::Red);
        assert_eq!(theme.success, Color::Green);
    }

    #[test]
    fn only_registered_indicators_exist() {
        let surface = TerminalSurface::new().with_indicator("price_error", "1 to 5");
        assert!(surface.has_indicator(&"price_error".into()));
        assert!(!surface.has_indicator(&"platforms_error".into()));
    }

    #[test]
    fn shown_indicator_messages() {
        let mut surface = TerminalSurface::new()
            .with_indicator("price_error", "Enter 1 to 5")
            .with_indicator("platforms_error", "Pick a platform");
        surface.set_indicator(&"price_error".into(), true);
        surface.set_indicator(&"platforms_error".into(), true);
        surface.set_indicator(&"platforms_error".into(), false);

        assert_eq!(surface.indicator_messages(), ["Enter 1 to 5"]);
    }

    #[test]
    fn one_page_at_a_time() {
        let mut surface = TerminalSurface::new();
        for page in PageId::ALL {
            surface.set_page_visible(page, page == PageId::Intro);
        }
        assert_eq!(surface.page(), PageId::Intro);
    }

    #[test]
    fn requests_are_taken_once() {
        let mut surface = TerminalSurface::new();
        surface.focus(&"email".into());
        surface.scroll_to_top();

        assert_eq!(surface.take_focus_request(), Some("email".into()));
        assert_eq!(surface.take_focus_request(), None);
        assert!(surface.take_scroll_request());
        assert!(!surface.take_scroll_request());
    }

    #[test]
    fn reported_field_clears_on_edit() {
        let mut surface = TerminalSurface::new();
        let field = FieldName::new("full_name");
        surface.report_validity(&field);
        assert!(surface.is_field_invalid(&field));

        surface.clear_report(&field);
        assert!(!surface.is_field_invalid(&field));
    }
}
