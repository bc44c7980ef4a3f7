use std::time::Duration;

/// Tunables of a [`Wizard`](crate::Wizard).
#[derive(Debug, Clone, PartialEq)]
pub struct WizardConfig {
    /// Pause between showing the survey page and resetting it to the first
    /// step, so a page transition can settle.
    settle_delay: Duration,

    /// Label of the idle submit button.
    submit_label: String,

    /// Label of the submit button while a request is in flight.
    pending_label: String,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            settle_delay: Duration::from_millis(50),
            submit_label: "Submit Survey".to_string(),
            pending_label: "Submitting...".to_string(),
        }
    }
}

impl WizardConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the settle delay.
    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    /// Set the idle submit label.
    pub fn with_submit_label(mut self, label: impl Into<String>) -> Self {
        self.submit_label = label.into();
        self
    }

    /// Set the in-flight submit label.
    pub fn with_pending_label(mut self, label: impl Into<String>) -> Self {
        self.pending_label = label.into();
        self
    }

    pub fn settle_delay(&self) -> Duration {
        self.settle_delay
    }

    pub fn submit_label(&self) -> &str {
        &self.submit_label
    }

    pub fn pending_label(&self) -> &str {
        &self.pending_label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = WizardConfig::default();
        assert_eq!(config.settle_delay(), Duration::from_millis(50));
        assert_eq!(config.submit_label(), "Submit Survey");
        assert_eq!(config.pending_label(), "Submitting...");
    }

    #[test]
    fn builders() {
        let config = WizardConfig::new()
            .with_settle_delay(Duration::ZERO)
            .with_submit_label("Send")
            .with_pending_label("Sending");
        assert_eq!(config.settle_delay(), Duration::ZERO);
        assert_eq!(config.submit_label(), "Send");
        assert_eq!(config.pending_label(), "Sending");
    }
}
