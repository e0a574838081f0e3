//! Structured diagnostic messages with severity, codes, and source locations.

use crate::severity::Severity;
use serde::{Deserialize, Serialize};

/// A line/column position within a component source file.
///
/// Lines and columns are 1-based, matching what editors and dev-server
/// error overlays display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    /// 1-based line number.
    pub line: u32,
    /// 1-based column number.
    pub column: u32,
}

impl SourceLocation {
    /// Creates a new source location.
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// A structured diagnostic message produced while compiling a component.
///
/// Warnings survive compilation and travel with the cached descriptor;
/// error-severity diagnostics only appear inside a fatal compile failure.
/// Each diagnostic carries:
/// - A severity level and a stable string code (e.g. `"css-unused-selector"`)
/// - The main message text
/// - Optional start/end source locations
/// - An optional pre-rendered source frame excerpt for terminal output
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The severity level of this diagnostic.
    pub severity: Severity,
    /// Stable code identifying the type of diagnostic.
    pub code: String,
    /// The main diagnostic message.
    pub message: String,
    /// Where the issue begins, if the compiler attributed a location.
    pub start: Option<SourceLocation>,
    /// Where the issue ends.
    pub end: Option<SourceLocation>,
    /// A pre-rendered source excerpt with the offending range highlighted.
    pub frame: Option<String>,
}

impl Diagnostic {
    /// Creates a new warning diagnostic with the given code and message.
    pub fn warning(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code: code.into(),
            message: message.into(),
            start: None,
            end: None,
            frame: None,
        }
    }

    /// Creates a new error diagnostic with the given code and message.
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code: code.into(),
            message: message.into(),
            start: None,
            end: None,
            frame: None,
        }
    }

    /// Attaches start and end locations to this diagnostic.
    pub fn with_range(mut self, start: SourceLocation, end: SourceLocation) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        self
    }

    /// Attaches a rendered source frame to this diagnostic.
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.frame = Some(frame.into());
        self
    }
}
