//! Fatal compile failure reported by a component compiler.

use lumen_diagnostics::SourceLocation;
use std::path::PathBuf;

/// A fatal error from compiling one component.
///
/// Unlike warnings, which travel with the descriptor, a fatal error means
/// no output was produced. The descriptor cache propagates this error to
/// its caller unmodified and stores nothing; whether the build aborts or
/// just reports the failure is the caller's decision.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("failed to compile {}: {message}", filename.display())]
pub struct CompileError {
    /// The component file that failed to compile.
    pub filename: PathBuf,

    /// The compiler's description of the failure.
    pub message: String,

    /// Stable code identifying the kind of failure, if the compiler
    /// assigned one (e.g. `"parse-error"`).
    pub code: Option<String>,

    /// Where in the source the failure was detected.
    pub start: Option<SourceLocation>,

    /// A pre-rendered source excerpt with the offending range highlighted.
    pub frame: Option<String>,
}

impl CompileError {
    /// Creates a compile error with the given filename and message and no
    /// location information.
    pub fn new(filename: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            message: message.into(),
            code: None,
            start: None,
            frame: None,
        }
    }

    /// Sets the failure code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Sets the source location where the failure was detected.
    pub fn with_start(mut self, start: SourceLocation) -> Self {
        self.start = Some(start);
        self
    }

    /// Attaches a rendered source frame.
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.frame = Some(frame.into());
        self
    }
}
