use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use survey_wizard_types::{SubmissionOutcome, SubmissionPayload, Submitter};

#[derive(Debug, Default)]
struct Script {
    outcomes: VecDeque<SubmissionOutcome>,
    payloads: Vec<SubmissionPayload>,
}

/// A submitter that answers with pre-configured outcomes and records every
/// payload it receives.
///
/// Clones share the same script, so a test can keep one handle and give the
/// other to the wizard. Once the script runs out every call succeeds.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSubmitter {
    script: Arc<Mutex<Script>>,
}

impl ScriptedSubmitter {
    /// Create a submitter that always succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the outcome of the next unanswered call.
    pub fn then(self, outcome: SubmissionOutcome) -> Self {
        self.lock().outcomes.push_back(outcome);
        self
    }

    /// Every payload received so far.
    pub fn payloads(&self) -> Vec<SubmissionPayload> {
        self.lock().payloads.clone()
    }

    /// Number of calls so far.
    pub fn calls(&self) -> usize {
        self.lock().payloads.len()
    }

    fn lock(&self) -> MutexGuard<'_, Script> {
        self.script.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl Submitter for ScriptedSubmitter {
    async fn submit(&self, payload: &SubmissionPayload) -> SubmissionOutcome {
        let mut script = self.lock();
        script.payloads.push(payload.clone());
        script.outcomes.pop_front().unwrap_or(SubmissionOutcome::Success)
    }
}
