//! # survey-wizard-reqwest
//!
//! Sends a finished survey to an HTTP endpoint.
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use survey_wizard_reqwest::ReqwestSubmitter;
//!
//! let submitter = ReqwestSubmitter::builder("http://localhost:8000/submit-response")
//!     .with_timeout(Duration::from_secs(10))
//!     .build()?;
//! ```

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value;
use survey_wizard_types::{SubmissionOutcome, SubmissionPayload, Submitter};
use tracing::{debug, warn};

/// Path the survey is posted to, relative to the server root.
pub const SUBMIT_PATH: &str = "/submit-response";

/// Error type for building a [`ReqwestSubmitter`].
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("Invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("Failed to create HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Builder for [`ReqwestSubmitter`].
#[derive(Debug, Clone)]
pub struct SubmitterBuilder {
    endpoint: String,
    timeout: Option<Duration>,
}

impl SubmitterBuilder {
    /// Give up on a request after `timeout`. Without one, requests wait
    /// indefinitely.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<ReqwestSubmitter, SubmitError> {
        let endpoint = Url::parse(&self.endpoint).map_err(|err| SubmitError::InvalidEndpoint {
            endpoint: self.endpoint.clone(),
            reason: err.to_string(),
        })?;

        let mut builder = Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(ReqwestSubmitter {
            client,
            endpoint,
            timeout: self.timeout,
        })
    }
}

/// Posts the payload as JSON, once per call.
#[derive(Debug, Clone)]
pub struct ReqwestSubmitter {
    client: Client,
    endpoint: Url,
    timeout: Option<Duration>,
}

impl ReqwestSubmitter {
    /// A submitter for `endpoint` with default settings.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, SubmitError> {
        Self::builder(endpoint).build()
    }

    pub fn builder(endpoint: impl Into<String>) -> SubmitterBuilder {
        SubmitterBuilder {
            endpoint: endpoint.into(),
            timeout: None,
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// The request timeout, if one was set.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

#[async_trait]
impl Submitter for ReqwestSubmitter {
    async fn submit(&self, payload: &SubmissionPayload) -> SubmissionOutcome {
        debug!(endpoint = %self.endpoint, fields = payload.len(), "posting survey");

        let response = match self
            .client
            .post(self.endpoint.clone())
            .json(payload)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                warn!(error = %err, "survey request failed");
                return SubmissionOutcome::TransportFailure(err.to_string());
            }
        };

        let status = response.status();
        let body = response.json::<Value>().await.map_err(|err| err.to_string());
        debug!(%status, "survey response received");
        classify(status.is_success(), body)
    }
}

/// Map a response to an outcome.
///
/// The body must be JSON even on success; a body that fails to parse is a
/// transport failure carrying the parse error.
pub fn classify(ok: bool, body: Result<Value, String>) -> SubmissionOutcome {
    match body {
        Err(reason) => SubmissionOutcome::TransportFailure(reason),
        Ok(_) if ok => SubmissionOutcome::Success,
        Ok(body) => SubmissionOutcome::from_failure_body(&body),
    }
}
