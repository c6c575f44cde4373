//! Error reports and the escalation that follows them.
//!
//! An `error!` produces a report the user may dismiss; a `fatal!` produces one
//! that always ends the process. The decision logic lives in [`transition`] so
//! it can be checked without a dialog ever being shown.

use std::fmt;

use crate::location::SourceLocation;
use crate::platform::{Decision, Platform, PromptKind};

/// Exit status used when a report terminates the process: the four-character
/// code `'FAIL'`.
pub const FAIL_EXIT_CODE: u32 = u32::from_be_bytes(*b"FAIL");

const CONTINUE_PROMPT: &str =
    "Continuing may result in undesired behavior.\nExit game? (yes highly suggested)\n\n";
const EXIT_NOTICE: &str = "Process cannot continue and will now exit.\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The user may choose to keep running.
    Error,
    /// The process always exits.
    Fatal,
}

impl Severity {
    pub const fn prompt_kind(self) -> PromptKind {
        match self {
            Severity::Error => PromptKind::YesNo,
            Severity::Fatal => PromptKind::Acknowledge,
        }
    }
}

/// Where an escalated report ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Dismissed,
    Terminated,
}

/// Only an explicit "No" to a non-fatal report lets execution continue.
pub const fn transition(severity: Severity, decision: Decision) -> Transition {
    match (severity, decision) {
        (Severity::Error, Decision::No) => Transition::Dismissed,
        _ => Transition::Terminated,
    }
}

#[derive(Debug, Clone)]
pub struct ErrorReport {
    pub severity: Severity,
    pub location: SourceLocation,
    pub detail: String,
}

impl ErrorReport {
    pub fn new(severity: Severity, location: SourceLocation, detail: impl Into<String>) -> Self {
        Self {
            severity,
            location,
            detail: detail.into(),
        }
    }

    /// Text shown in the dialog.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Shows the report and terminates the process unless the user dismissed
    /// it. Blocks until the prompt is answered.
    pub fn escalate(&self, platform: &dyn Platform, title: &str) -> Transition {
        let decision = platform.prompt_user(self.severity.prompt_kind(), title, &self.render());
        match transition(self.severity, decision) {
            Transition::Dismissed => Transition::Dismissed,
            Transition::Terminated => platform.terminate_process(FAIL_EXIT_CODE),
        }
    }
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Error occurred at code ->\n[{}:{}]\n\nCallsite ->\n{}\n\nDetail ->\n{}\n\n",
            self.location.file, self.location.line, self.location.function, self.detail
        )?;
        match self.severity {
            Severity::Error => f.write_str(CONTINUE_PROMPT),
            Severity::Fatal => f.write_str(EXIT_NOTICE),
        }
    }
}
