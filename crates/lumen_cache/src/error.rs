//! Error types for descriptor cache operations.

use std::path::PathBuf;

/// Errors that can occur when querying the descriptor cache.
///
/// Writes and prior-generation reads are total; the only cache-originated
/// failure is a fatal lookup miss. Compiler failures are not cache errors
/// and propagate through
/// [`compile_and_cache`](crate::DescriptorCache::compile_and_cache)
/// as [`lumen_compile::CompileError`] unmodified.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// A pipeline stage queried a file that was never compiled.
    ///
    /// This always indicates an ordering bug in the calling pipeline, not
    /// a recoverable runtime condition: some stage ran before the compile
    /// stage populated the cache for this file.
    #[error(
        "{} has no corresponding entry in the descriptor cache; \
         this is an internal error in the build pipeline",
        filename.display()
    )]
    MissingEntry {
        /// The file the stage asked for.
        filename: PathBuf,
    },
}
