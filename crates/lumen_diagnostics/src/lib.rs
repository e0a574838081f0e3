//! Structured diagnostics emitted by the Lumen component compiler.
//!
//! Compile warnings are carried on cached descriptors so that downstream
//! pipeline stages (dev-server overlays, build reporters) can surface them
//! without re-invoking the compiler.

#![warn(missing_docs)]

pub mod diagnostic;
pub mod severity;

pub use diagnostic::{Diagnostic, SourceLocation};
pub use severity::Severity;
