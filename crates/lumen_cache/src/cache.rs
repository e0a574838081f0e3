//! The two-generation descriptor store and its compile-and-cache entry point.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use lumen_compile::{CompileError, CompileOptions, ComponentCompiler, ExtraOptions};

use crate::descriptor::{content_id, Descriptor};
use crate::error::CacheError;

/// Everything needed to compile one component and cache the result.
///
/// Bundles the compiler-facing inputs (filename, source, options, `ssr`)
/// with the cache-facing ones (`root` and `is_production`, which only
/// affect the content id).
#[derive(Clone, Copy, Debug)]
pub struct CompileRequest<'a> {
    /// Resolved path of the component file; also the cache key, so it must
    /// match the keys later stages will look up, byte for byte.
    pub filename: &'a Path,

    /// Current source text of the component.
    pub source: &'a str,

    /// Project root the content id is computed relative to.
    pub root: &'a Path,

    /// Whether this is a production build. Controls whether the source
    /// text participates in the content id.
    pub is_production: bool,

    /// Options forwarded to the compiler and stored on the descriptor.
    pub compile_options: &'a CompileOptions,

    /// Plugin-level options stored on the descriptor.
    pub extra_options: &'a ExtraOptions,

    /// Compile for server-side rendering instead of the client.
    pub ssr: bool,
}

/// Session-scoped cache of compiled component descriptors.
///
/// Holds exactly one current [`Descriptor`] per file, plus an optional
/// caller-snapshotted prior generation per file in a separate store. The
/// two stores never share entries: the prior store only ever holds what a
/// caller explicitly wrote into it.
///
/// One `DescriptorCache` belongs to one build session. Construct it where
/// the session starts and pass it (mutably) to the stages that need it;
/// there is no global instance. Writes take `&mut self`, so the
/// single-writer assumption the pipeline relies on is enforced by the
/// borrow checker rather than by locks; the cache itself performs no
/// synchronization and no atomicity across the compile-then-store
/// sequence.
#[derive(Debug, Default)]
pub struct DescriptorCache {
    /// Current generation per file.
    current: HashMap<PathBuf, Descriptor>,

    /// Caller-snapshotted previous generation per file.
    prior: HashMap<PathBuf, Descriptor>,
}

impl DescriptorCache {
    /// Creates an empty cache for a new build session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compiles a component and caches the resulting descriptor.
    ///
    /// Invokes `compiler` with the request's inputs, assembles a
    /// [`Descriptor`] from the raw output plus the request's
    /// `extra_options`/`ssr` and the computed content id, and stores it as
    /// the current generation for `request.filename`, unconditionally
    /// replacing any existing entry. Returns a reference to the stored
    /// descriptor.
    ///
    /// A fatal [`CompileError`] propagates unmodified; in that case
    /// nothing is stored and any previous entry for the file is left
    /// untouched. There is no memoization: calling this twice with
    /// identical inputs invokes the compiler twice.
    pub fn compile_and_cache(
        &mut self,
        compiler: &dyn ComponentCompiler,
        request: &CompileRequest<'_>,
    ) -> Result<&Descriptor, CompileError> {
        let compiled = compiler.compile(
            request.filename,
            request.source,
            request.compile_options,
            request.extra_options,
            request.ssr,
        )?;

        let descriptor = Descriptor {
            content_id: content_id(
                request.filename,
                request.source,
                request.root,
                request.is_production,
            ),
            js: compiled.js,
            css: compiled.css,
            warnings: compiled.warnings,
            bindings: compiled.bindings,
            compile_options: request.compile_options.clone(),
            extra_options: request.extra_options.clone(),
            ssr: request.ssr,
        };

        let stored = match self.current.entry(request.filename.to_path_buf()) {
            Entry::Occupied(entry) => {
                let slot = entry.into_mut();
                *slot = descriptor;
                slot
            }
            Entry::Vacant(entry) => entry.insert(descriptor),
        };
        Ok(stored)
    }

    /// Returns the current descriptor for `filename`, tolerating absence.
    ///
    /// Use this from call sites where a missing entry is an expected
    /// outcome (e.g. checking whether a file was ever compiled).
    pub fn get(&self, filename: &Path) -> Option<&Descriptor> {
        self.current.get(filename)
    }

    /// Returns the current descriptor for `filename`, failing on absence.
    ///
    /// Use this from stages that must only ever run after the compile
    /// stage populated the cache: a miss here is
    /// [`CacheError::MissingEntry`], a pipeline ordering bug, and should
    /// abort the current build rather than be retried.
    pub fn lookup(&self, filename: &Path) -> Result<&Descriptor, CacheError> {
        self.current.get(filename).ok_or_else(|| CacheError::MissingEntry {
            filename: filename.to_path_buf(),
        })
    }

    /// Unconditionally sets the current descriptor for `filename`.
    ///
    /// No validation is performed; the descriptor is published as given.
    /// This is how callers that patch a descriptor outside the compile
    /// path (e.g. with externally processed style output) publish the
    /// result back into the cache.
    pub fn insert(&mut self, filename: impl Into<PathBuf>, descriptor: Descriptor) {
        self.current.insert(filename.into(), descriptor);
    }

    /// Sets the current descriptor for `filename` and returns the entry it
    /// replaced, if any.
    ///
    /// Combined form of [`insert`](Self::insert) plus a preceding
    /// [`get`](Self::get), for callers that want the outgoing generation
    /// without depending on call ordering. The prior-generation store is
    /// not touched; pass the returned value to
    /// [`set_prior`](Self::set_prior) to get the snapshot protocol's
    /// effect in one statement.
    pub fn replace(
        &mut self,
        filename: impl Into<PathBuf>,
        descriptor: Descriptor,
    ) -> Option<Descriptor> {
        self.current.insert(filename.into(), descriptor)
    }

    /// Returns the snapshotted prior generation for `filename`, if a
    /// caller ever wrote one.
    pub fn prior(&self, filename: &Path) -> Option<&Descriptor> {
        self.prior.get(filename)
    }

    /// Snapshots `descriptor` as the prior generation for `filename`.
    ///
    /// The cache never snapshots automatically: a caller that wants the
    /// outgoing generation preserved must call this before overwriting the
    /// current entry (or use [`replace`](Self::replace) and feed its
    /// return value here).
    pub fn set_prior(&mut self, filename: impl Into<PathBuf>, descriptor: Descriptor) {
        self.prior.insert(filename.into(), descriptor);
    }

    /// Returns `true` if a current descriptor exists for `filename`.
    pub fn contains(&self, filename: &Path) -> bool {
        self.current.contains_key(filename)
    }

    /// Returns the number of files with a current descriptor.
    pub fn len(&self) -> usize {
        self.current.len()
    }

    /// Returns `true` if no file has been compiled or inserted yet.
    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }
}
