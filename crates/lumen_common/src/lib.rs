//! Shared foundational types used across the Lumen component compiler.
//!
//! This crate provides core types including content-id fingerprints and
//! project-relative path normalization used by the descriptor cache and
//! downstream pipeline stages.

#![warn(missing_docs)]

pub mod hash;
pub mod path;

pub use hash::ContentId;
pub use path::project_relative;
