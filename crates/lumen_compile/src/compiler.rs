//! The trait seam between the descriptor cache and a real compiler.

use crate::error::CompileError;
use crate::options::{CompileOptions, ExtraOptions};
use crate::output::CompiledComponent;
use std::path::Path;

/// A component compiler the build pipeline can invoke.
///
/// Implementations compile a single component source to JavaScript and CSS
/// in one call. They receive the plugin-level [`ExtraOptions`] alongside
/// the [`CompileOptions`] because some plugin settings (such as whether
/// styles will be emitted separately) change what the compiler should
/// generate. The `ssr` flag selects server-render output over client
/// output; callers may compile the same file both ways during one build.
///
/// Compilation is synchronous from the cache's point of view; any internal
/// concurrency or cancellation is the implementation's responsibility.
pub trait ComponentCompiler {
    /// Compiles `source` as the component at `filename`.
    ///
    /// Returns the raw output bundle on success. A fatal problem with the
    /// source is reported as a [`CompileError`]; recoverable issues are
    /// returned as warnings inside the bundle instead.
    fn compile(
        &self,
        filename: &Path,
        source: &str,
        options: &CompileOptions,
        extra: &ExtraOptions,
        ssr: bool,
    ) -> Result<CompiledComponent, CompileError>;
}
