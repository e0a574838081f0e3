//! The component-compiler contract consumed by the Lumen build pipeline.
//!
//! This crate defines the input and output types of a single component
//! compilation (options, the generated code bundle, binding metadata, and
//! the fatal error shape) plus the [`ComponentCompiler`] trait that the
//! descriptor cache invokes. Actual compiler implementations live outside
//! this workspace; the cache only depends on this contract.

#![warn(missing_docs)]

pub mod compiler;
pub mod error;
pub mod options;
pub mod output;

pub use compiler::ComponentCompiler;
pub use error::CompileError;
pub use options::{CompileOptions, ExtraOptions};
pub use output::{Binding, CompiledComponent, GeneratedOutput};
