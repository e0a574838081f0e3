//! Option sets controlling how a component is compiled.
//!
//! [`CompileOptions`] are passed through to the compiler itself;
//! [`ExtraOptions`] are plugin-level settings the compiler never sees but
//! downstream pipeline stages need to know about. Both are stored verbatim
//! on every cached descriptor so later stages can tell exactly how a file
//! was compiled.

use serde::{Deserialize, Serialize};

/// Options forwarded to the component compiler for one compilation.
///
/// The descriptor cache treats this as opaque: it is stored on the
/// descriptor exactly as supplied and never inspected or merged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileOptions {
    /// Emit development-mode code with runtime checks and hot-update hooks.
    pub dev: bool,

    /// Include component styles in the generated program output instead of
    /// emitting them as a separate style block.
    pub css: bool,

    /// Generate code that can hydrate server-rendered markup.
    pub hydratable: bool,

    /// Assume component state is never mutated in place, enabling cheaper
    /// change detection in the generated code.
    pub immutable: bool,

    /// Generate getters and setters for component props.
    pub accessors: bool,

    /// Compile the component as a custom element with this tag name.
    pub custom_element: Option<String>,
}

/// Plugin-level options that are not part of the compiler's own contract.
///
/// These shape how the surrounding pipeline treats the compiled output
/// (e.g. whether styles are emitted as separate modules) and are cached on
/// the descriptor for stages that run long after the compile call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraOptions {
    /// File extensions recognized as components.
    pub extensions: Vec<String>,

    /// Emit component styles as importable modules for the bundler to
    /// process, rather than injecting them at runtime.
    pub emit_css: bool,

    /// Enable hot-update support in development builds.
    pub hot: bool,
}

impl Default for ExtraOptions {
    fn default() -> Self {
        Self {
            extensions: vec![".lumen".to_string()],
            emit_css: true,
            hot: false,
        }
    }
}
