//! The per-file, per-generation compiled artifact bundle.

use lumen_common::{project_relative, ContentId};
use lumen_compile::{Binding, CompileOptions, ExtraOptions, GeneratedOutput};
use lumen_diagnostics::Diagnostic;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Computes the content id for one compiled generation of a component.
///
/// The id is the XXH3-128 hash of the project-relative, forward-slash
/// normalized path, concatenated with the raw source text only in
/// production builds. In development the id therefore stays stable across
/// edits, so consumers keyed by id (style module URLs, hot-update state)
/// do not thrash during a watch session; in production a content change
/// produces a new id for cache busting.
pub fn content_id(filename: &Path, source: &str, root: &Path, is_production: bool) -> ContentId {
    let mut input = project_relative(filename, root);
    if is_production {
        input.push_str(source);
    }
    ContentId::from_bytes(input.as_bytes())
}

/// The cached artifact bundle for one generation of one component file.
///
/// Assembled by the cache from the compiler's raw output plus the request
/// parameters that are not part of the compiler's own result. Descriptors
/// are `Clone` so a caller can snapshot the outgoing generation into the
/// prior-generation store before replacing it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Descriptor {
    /// Stable cross-stage key for this generation.
    pub content_id: ContentId,

    /// Generated program code, source map, and dependencies.
    pub js: GeneratedOutput,

    /// Generated style code, source map, and dependencies.
    pub css: GeneratedOutput,

    /// Warnings emitted while compiling this generation.
    pub warnings: Vec<Diagnostic>,

    /// Metadata about the component's reactive variables and exports.
    pub bindings: Vec<Binding>,

    /// The exact compiler options used for this generation.
    pub compile_options: CompileOptions,

    /// Plugin-level options outside the compiler's contract.
    pub extra_options: ExtraOptions,

    /// Whether this generation was compiled for server-side rendering.
    pub ssr: bool,
}
