//! Recording surface for testing the wizard without a renderer.
//!
//! `RecordingSurface` implements every view trait by storing the last state it
//! was told to show, so tests can assert on what a real surface would display.
//!
//! # Example
//!
//! ```rust,ignore
//! use survey_wizard::{MemoryLocation, RecordingSurface, ScriptedSubmitter, Wizard};
//!
//! let mut wizard = Wizard::new(
//!     example_surveys::quick_commerce(),
//!     RecordingSurface::new(),
//!     MemoryLocation::new(),
//!     ScriptedSubmitter::new(),
//! )?;
//! wizard.start()?;
//! assert!(wizard.surface().landing_mode());
//! ```

use std::collections::{BTreeSet, HashSet};

use survey_wizard_types::{
    FieldName, FieldView, IndicatorId, PageId, PageView, StepView, SubmitView,
};

/// A surface that records what it is asked to show.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    pages: HashSet<PageId>,
    landing_mode: bool,
    active_steps: BTreeSet<usize>,
    progress: Option<f64>,
    scrolls: usize,
    /// `None` means every indicator exists.
    known_indicators: Option<HashSet<IndicatorId>>,
    indicators: BTreeSet<IndicatorId>,
    invalid: HashSet<FieldName>,
    hidden: HashSet<FieldName>,
    reported: Vec<FieldName>,
    focused: Option<FieldName>,
    submit_enabled: bool,
    submit_label: String,
    transport_error: Option<String>,
    success: bool,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self {
            pages: HashSet::new(),
            landing_mode: false,
            active_steps: BTreeSet::new(),
            progress: None,
            scrolls: 0,
            known_indicators: None,
            indicators: BTreeSet::new(),
            invalid: HashSet::new(),
            hidden: HashSet::new(),
            reported: Vec::new(),
            focused: None,
            submit_enabled: true,
            submit_label: String::new(),
            transport_error: None,
            success: false,
        }
    }
}

impl RecordingSurface {
    /// Create a surface that can display any indicator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the indicators this surface can display.
    pub fn with_indicators<I, S>(mut self, indicators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<IndicatorId>,
    {
        self.known_indicators = Some(indicators.into_iter().map(Into::into).collect());
        self
    }

    /// Visible pages, in navigation order.
    pub fn visible_pages(&self) -> Vec<PageId> {
        PageId::ALL
            .into_iter()
            .filter(|page| self.pages.contains(page))
            .collect()
    }

    pub fn is_page_visible(&self, page: PageId) -> bool {
        self.pages.contains(&page)
    }

    pub fn landing_mode(&self) -> bool {
        self.landing_mode
    }

    /// Active steps, ascending.
    pub fn active_steps(&self) -> Vec<usize> {
        self.active_steps.iter().copied().collect()
    }

    /// The last progress value, if any was set.
    pub fn progress(&self) -> Option<f64> {
        self.progress
    }

    /// How many times the page was scrolled to the top.
    pub fn scroll_count(&self) -> usize {
        self.scrolls
    }

    pub fn is_indicator_visible(&self, indicator: &IndicatorId) -> bool {
        self.indicators.contains(indicator)
    }

    /// Visible indicators, sorted by id.
    pub fn visible_indicators(&self) -> Vec<&IndicatorId> {
        self.indicators.iter().collect()
    }

    pub fn is_field_invalid(&self, field: &FieldName) -> bool {
        self.invalid.contains(field)
    }

    /// Fields start visible until hidden.
    pub fn is_field_visible(&self, field: &FieldName) -> bool {
        !self.hidden.contains(field)
    }

    /// Every native validity report, in order.
    pub fn reported(&self) -> &[FieldName] {
        &self.reported
    }

    pub fn focused(&self) -> Option<&FieldName> {
        self.focused.as_ref()
    }

    /// The submit affordance as `(enabled, label)`.
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

impl PageView for RecordingSurface {
    fn set_page_visible(&mut self, page: PageId, visible: bool) {
        if visible {
            self.pages.insert(page);
        } else {
            self.pages.remove(&page);
        }
    }

    fn set_landing_mode(&mut self, enabled: bool) {
        self.landing_mode = enabled;
    }
}

impl StepView for RecordingSurface {
    fn set_step_active(&mut self, index: usize, active: bool) {
        if active {
            self.active_steps.insert(index);
        } else {
            self.active_steps.remove(&index);
        }
    }

    fn set_progress(&mut self, percent: f64) {
        self.progress = Some(percent);
    }

    fn scroll_to_top(&mut self) {
        self.scrolls += 1;
    }
}

impl FieldView for RecordingSurface {
    fn set_indicator(&mut self, indicator: &IndicatorId, visible: bool) {
        if visible {
            self.indicators.insert(indicator.clone());
        } else {
            self.indicators.remove(indicator);
        }
    }

    fn has_indicator(&self, indicator: &IndicatorId) -> bool {
        self.known_indicators
            .as_ref()
            .is_none_or(|known| known.contains(indicator))
    }

    fn set_field_invalid(&mut self, field: &FieldName, invalid: bool) {
        if invalid {
            self.invalid.insert(field.clone());
        } else {
            self.invalid.remove(field);
        }
    }

    fn report_validity(&mut self, field: &FieldName) {
        self.reported.push(field.clone());
    }

    fn set_field_visible(&mut self, field: &FieldName, visible: bool) {
        if visible {
            self.hidden.remove(field);
        } else {
            self.hidden.insert(field.clone());
        }
    }

    fn focus(&mut self, field: &FieldName) {
        self.focused = Some(field.clone());
    }
}

impl SubmitView for RecordingSurface {
    fn set_submit(&mut self, enabled: bool, label: &str) {
        self.submit_enabled = enabled;
        self.submit_label = label.to_string();
    }

    fn set_transport_error(&mut self, message: Option<&str>) {
        self.transport_error = message.map(str::to_string);
    }

    fn show_success(&mut self) {
        self.success = true;
        self.active_steps.clear();
        self.progress = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicators_default_to_known() {
        let surface = RecordingSurface::new();
        assert!(surface.has_indicator(&"anything".into()));
    }

    #[test]
    fn restricted_indicators() {
        let surface = RecordingSurface::new().with_indicators(["price_error"]);
        assert!(surface.has_indicator(&"price_error".into()));
        assert!(!surface.has_indicator(&"platforms_error".into()));
    }

    #[test]
    fn success_hides_steps() {
        let mut surface = RecordingSurface::new();
        surface.set_step_active(7, true);
        surface.set_progress(100.0);
        surface.show_success();

        assert!(surface.success_shown());
        assert!(surface.active_steps().is_empty());
        assert_eq!(surface.progress(), None);
    }

    #[test]
    fn fresh_wizard_shows_landing() -> Result<(), survey_wizard_types::SurveyError> {
        let mut wizard = crate::Wizard::new(
            example_surveys::quick_commerce(),
            RecordingSurface::new(),
            crate::MemoryLocation::new(),
            crate::ScriptedSubmitter::new(),
        )?;
        wizard.start()?;
        assert!(wizard.surface().landing_mode());
        assert_eq!(wizard.surface().visible_pages(), vec![PageId::Landing]);
        Ok(())
    }
}
