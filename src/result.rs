//! Run verdict and artifact records
//!
//! One [`RunResult`] is constructed at the start of a run, updated only by
//! the runner and the screenshot capturer, and persisted exactly once under
//! the `RESULT` key when the run finishes.

use serde::{Deserialize, Serialize};

use crate::input::RunInput;

/// Storage key under which the final run record is persisted
pub const RESULT_KEY: &str = "RESULT";

/// Terminal verdict of a smoke run
///
/// A run starts in `Unknown` and must end in one of the three terminal
/// states. `pass`/`fail` only apply from `Unknown`; an interrupting error
/// always wins (see [`RunResult::interrupt`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    /// No scenario logic has run yet
    #[default]
    Unknown,
    /// The scenario's pass condition held
    Passed,
    /// The scenario ran to completion but its pass condition did not hold
    Failed,
    /// An unexpected error interrupted execution
    Error,
}

impl RunStatus {
    /// Whether this status is terminal (anything but `Unknown`)
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RunStatus::Unknown)
    }
}

/// A persisted checkpoint screenshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenshotRecord {
    /// Scenario-step identifier, e.g. `before-login`
    pub label: String,
    /// Storage key of the image artifact, always `<label>.png`
    pub key: String,
}

/// The single result record threaded through a run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunResult {
    /// Scenario name as requested by the caller
    pub scenario: String,
    /// Base URL of the application under test
    #[serde(rename = "baseUrl")]
    pub base_url: String,
    /// Terminal verdict
    pub status: RunStatus,
    /// Human-readable failure or error message, if any
    pub error: Option<String>,
    /// Checkpoint screenshots in chronological capture order
    pub screenshots: Vec<ScreenshotRecord>,
}

impl RunResult {
    /// Create the result record for a run, before any scenario logic
    pub fn new(input: &RunInput) -> Self {
        Self {
            scenario: input.scenario.clone(),
            base_url: input.base_url.clone(),
            status: RunStatus::Unknown,
            error: None,
            screenshots: Vec::new(),
        }
    }

    /// Record the pass verdict. No-op once a terminal state is set.
    pub fn pass(&mut self) {
        if !self.status.is_terminal() {
            self.status = RunStatus::Passed;
        }
    }

    /// Record the fail verdict with a scenario-authored message.
    /// No-op once a terminal state is set.
    pub fn fail<S: Into<String>>(&mut self, message: S) {
        if !self.status.is_terminal() {
            self.status = RunStatus::Failed;
            self.error = Some(message.into());
        }
    }

    /// Record an interrupting error. Unlike `pass`/`fail` this supersedes
    /// any status already set: an exception always wins.
    pub fn interrupt<S: Into<String>>(&mut self, message: S) {
        self.status = RunStatus::Error;
        self.error = Some(message.into());
    }

    /// Append a screenshot record for a successfully persisted capture
    pub fn push_screenshot<S: Into<String>>(&mut self, label: S, key: S) {
        self.screenshots.push(ScreenshotRecord {
            label: label.into(),
            key: key.into(),
        });
    }
}
