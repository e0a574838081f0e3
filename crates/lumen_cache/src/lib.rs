//! Two-generation descriptor cache for compiled components.
//!
//! This crate holds the compiled artifact bundle ("descriptor") for every
//! component file touched during a build session, so that pipeline stages
//! which only receive a filename (style processing, hot update) can
//! retrieve a previously computed result instead of recompiling. Alongside
//! the current generation, callers may snapshot the immediately preceding
//! generation per file for diffing and invalidation decisions.
//!
//! The cache lives for one build session, never evicts, and is never
//! persisted to disk.

#![warn(missing_docs)]

pub mod cache;
pub mod descriptor;
pub mod error;

pub use cache::{CompileRequest, DescriptorCache};
pub use descriptor::{content_id, Descriptor};
pub use error::CacheError;
